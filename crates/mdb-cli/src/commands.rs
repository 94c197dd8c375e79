use anyhow::{Context, Result};
use colored::Colorize;
use mdb_catalog::{MediaCatalog, ReadFilter};
use mdb_store::FsObjectStore;
use mdb_types::{format_unix_date, MediaId, MediaRecord, Movie, Music};

use crate::cli::{
    Cli, Command, CreateMedia, DeleteArgs, MovieFields, MusicFields, ReadArgs, SetupArgs,
    UpdateMedia,
};
use crate::config::MediaDbConfig;

pub fn run_command(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Setup(args) => cmd_setup(args),
        Command::Create { media } => cmd_create(&open_catalog()?, media),
        Command::Read(args) => cmd_read(&open_catalog()?, args),
        Command::Update { media } => cmd_update(&open_catalog()?, media),
        Command::Delete(args) => cmd_delete(&open_catalog()?, args),
    }
}

/// Load the config and build the catalog service used by every command
/// except setup.
fn open_catalog() -> Result<MediaCatalog<FsObjectStore>> {
    let config =
        MediaDbConfig::load().context("no usable configuration; run 'mdb setup' first")?;
    let store = FsObjectStore::new(config.data_root())
        .with_context(|| format!("failed to open bucket {:?}", config.bucket))?;
    Ok(MediaCatalog::new(store))
}

fn cmd_setup(args: SetupArgs) -> Result<()> {
    let config = MediaDbConfig::new(&args.profile, &args.region, &args.bucket)?;
    config.save()?;
    println!(
        "{} Saved configuration for bucket {}",
        "✓".green().bold(),
        config.bucket.yellow()
    );
    Ok(())
}

fn build_movie(fields: &MovieFields) -> Result<MediaRecord> {
    let movie = Movie::new(&fields.title, &fields.director, fields.year, &fields.date)?;
    Ok(movie.into())
}

fn build_music(fields: &MusicFields) -> Result<MediaRecord> {
    let music = Music::new(&fields.title, &fields.artist, fields.year, &fields.date)?;
    Ok(music.into())
}

fn cmd_create(catalog: &MediaCatalog<FsObjectStore>, media: CreateMedia) -> Result<()> {
    let record = match media {
        CreateMedia::Movie(fields) => build_movie(&fields)?,
        CreateMedia::Music(fields) => build_music(&fields)?,
    };
    catalog.create(&record)?;
    println!(
        "{} Created {} {} ({})",
        "✓".green().bold(),
        record.kind().to_string().cyan(),
        record.title().bold(),
        record.id().to_string().dimmed()
    );
    Ok(())
}

fn cmd_read(catalog: &MediaCatalog<FsObjectStore>, args: ReadArgs) -> Result<()> {
    let filter = match (args.kind, args.id) {
        (Some(kind), Some(id)) => ReadFilter::Exact {
            kind,
            id: MediaId::parse(&id)?,
        },
        (Some(kind), None) => ReadFilter::Kind(kind),
        _ => ReadFilter::All,
    };

    let records = catalog.read(&filter)?;
    if records.is_empty() {
        println!("No records.");
        return Ok(());
    }

    for record in &records {
        print_record(record);
    }
    Ok(())
}

fn print_record(record: &MediaRecord) {
    match record {
        MediaRecord::Movie(m) => println!(
            "{}  {}  {} ({})  directed by {}  watched {}",
            "movie".cyan(),
            m.id.to_string().dimmed(),
            m.title.bold(),
            m.year,
            m.director,
            format_unix_date(m.date_watched)
        ),
        MediaRecord::Music(m) => println!(
            "{}  {}  {} ({})  by {}  listened {}",
            "music".cyan(),
            m.id.to_string().dimmed(),
            m.title.bold(),
            m.year,
            m.artist,
            format_unix_date(m.date_listened)
        ),
    }
}

fn cmd_update(catalog: &MediaCatalog<FsObjectStore>, media: UpdateMedia) -> Result<()> {
    let (id, record) = match media {
        UpdateMedia::Movie(args) => (MediaId::parse(&args.id)?, build_movie(&args.fields)?),
        UpdateMedia::Music(args) => (MediaId::parse(&args.id)?, build_music(&args.fields)?),
    };
    catalog.update(&id, &record)?;
    println!(
        "{} Updated {} {} ({})",
        "✓".green().bold(),
        record.kind().to_string().cyan(),
        record.title().bold(),
        id.to_string().dimmed()
    );
    Ok(())
}

fn cmd_delete(catalog: &MediaCatalog<FsObjectStore>, args: DeleteArgs) -> Result<()> {
    let id = MediaId::parse(&args.id)?;
    catalog.delete(&id, args.kind)?;
    println!(
        "{} Deleted {} {}",
        "✓".green().bold(),
        args.kind.to_string().cyan(),
        id.to_string().dimmed()
    );
    Ok(())
}

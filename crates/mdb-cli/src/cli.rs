use clap::{Args, Parser, Subcommand};
use mdb_types::MediaKind;

#[derive(Parser)]
#[command(
    name = "mdb",
    about = "Personal media catalog backed by an object store",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write the catalog configuration file
    Setup(SetupArgs),
    /// Add a new record to the catalog
    Create {
        #[command(subcommand)]
        media: CreateMedia,
    },
    /// List records, optionally filtered by kind or a single id
    Read(ReadArgs),
    /// Replace an existing record (full replace; supply every field)
    Update {
        #[command(subcommand)]
        media: UpdateMedia,
    },
    /// Remove a record
    Delete(DeleteArgs),
}

#[derive(Args)]
pub struct SetupArgs {
    /// Credentials profile for the object-store backend
    #[arg(long)]
    pub profile: String,
    /// Region of the object-store backend
    #[arg(long)]
    pub region: String,
    /// Bucket holding the catalog
    #[arg(long)]
    pub bucket: String,
}

#[derive(Subcommand)]
pub enum CreateMedia {
    /// A movie record
    Movie(MovieFields),
    /// A music record
    Music(MusicFields),
}

#[derive(Subcommand)]
pub enum UpdateMedia {
    /// Replace a movie record
    Movie(UpdateMovieArgs),
    /// Replace a music record
    Music(UpdateMusicArgs),
}

#[derive(Args)]
pub struct MovieFields {
    /// The title of the movie
    #[arg(long)]
    pub title: String,
    /// The director of the movie
    #[arg(long)]
    pub director: String,
    /// The year the movie was made
    #[arg(long)]
    pub year: i32,
    /// The date the movie was watched (yyyy-mm-dd; empty for unknown)
    #[arg(long, default_value = "")]
    pub date: String,
}

#[derive(Args)]
pub struct MusicFields {
    /// The title of the piece of music
    #[arg(long)]
    pub title: String,
    /// The artist who made or performed the piece of music
    #[arg(long)]
    pub artist: String,
    /// The year the music was made
    #[arg(long)]
    pub year: i32,
    /// The date the music was listened to (yyyy-mm-dd; empty for unknown)
    #[arg(long, default_value = "")]
    pub date: String,
}

#[derive(Args)]
pub struct UpdateMovieArgs {
    /// The id of the record to replace
    #[arg(long)]
    pub id: String,

    #[command(flatten)]
    pub fields: MovieFields,
}

#[derive(Args)]
pub struct UpdateMusicArgs {
    /// The id of the record to replace
    #[arg(long)]
    pub id: String,

    #[command(flatten)]
    pub fields: MusicFields,
}

#[derive(Args)]
pub struct ReadArgs {
    /// Only list records of this kind (movie or music)
    #[arg(long)]
    pub kind: Option<MediaKind>,

    /// Only show the record with this id (requires --kind)
    #[arg(long, requires = "kind")]
    pub id: Option<String>,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// The kind of the record to remove (movie or music)
    #[arg(long)]
    pub kind: MediaKind,

    /// The id of the record to remove
    #[arg(long)]
    pub id: String,
}

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use spotcat::{SearchType, cli, config, utils, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show an artist
    Artist(IdOption),

    /// Show several artists (1 to 50 ids)
    Artists(IdsOption),

    /// Show artists related to an artist
    Related(IdOption),

    /// Show an album and its first tracks
    Album(IdOption),

    /// Show several albums (1 to 50 ids)
    Albums(IdsOption),

    /// List the tracks of an album
    AlbumTracks(AlbumTracksOptions),

    /// Show a track
    Track(IdOption),

    /// Show several tracks (1 to 50 ids)
    Tracks(IdsOption),

    /// Search the catalog
    Search(SearchOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct IdOption {
    /// Spotify id
    id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct IdsOption {
    /// Spotify ids
    #[clap(required = true, num_args = 1..=50)]
    ids: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct AlbumTracksOptions {
    /// Spotify album id
    id: String,

    /// Tracks per page (1 to 50)
    #[clap(long, default_value_t = utils::DEFAULT_LIMIT)]
    limit: u32,

    /// Index of the first track
    #[clap(long, default_value_t = 0)]
    offset: u32,

    /// Follow the next cursors until the last page
    #[clap(long)]
    all: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Search query
    query: String,

    /// Categories to search: track, album, artist, playlist or all
    #[clap(long = "type", default_value = "track")]
    types: SearchType,

    /// Results per category (1 to 50)
    #[clap(long, default_value_t = utils::DEFAULT_LIMIT)]
    limit: u32,

    /// Index of the first result
    #[clap(long, default_value_t = 0)]
    offset: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = config::load_env() {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    match cli.command {
        Command::Artist(opt) => cli::artist(opt.id, &cancel).await,
        Command::Artists(opt) => cli::artists(opt.ids, &cancel).await,
        Command::Related(opt) => cli::related(opt.id, &cancel).await,
        Command::Album(opt) => cli::album(opt.id, &cancel).await,
        Command::Albums(opt) => cli::albums(opt.ids, &cancel).await,
        Command::AlbumTracks(opt) => {
            cli::album_tracks(opt.id, opt.limit, opt.offset, opt.all, &cancel).await
        }
        Command::Track(opt) => cli::track(opt.id, &cancel).await,
        Command::Tracks(opt) => cli::tracks(opt.ids, &cancel).await,
        Command::Search(opt) => {
            cli::search(opt.query, opt.types, opt.limit, opt.offset, &cancel).await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}

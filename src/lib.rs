//! Spotify Web API catalog client
//!
//! This library provides a typed client for the catalog part of the Spotify
//! Web API. It authenticates with the OAuth2 client-credentials grant, keeps
//! the bearer token fresh, and maps JSON responses into artists, albums,
//! tracks, pages and search results that can lazily fetch what they reference.
//!
//! # Modules
//!
//! - `cli` - Command-line front end implementations
//! - `config` - Configuration management and environment variables
//! - `entity` - Typed catalog entities, pages and search results
//! - `error` - Error type and result alias
//! - `management` - Authorization state shared by a client
//! - `mapper` - Pure translation of payloads into entities
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Wire payloads and table rows
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use spotcat::{Client, SearchType};
//!
//! #[tokio::main]
//! async fn main() -> spotcat::Result<()> {
//!     let client = Client::new("client-id", "client-secret")?;
//!     let results = client.search("hello", SearchType::TRACK, 5, 0).await?;
//!     for track in results.tracks.iter().flatten() {
//!         println!("{}", track.name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod management;
pub mod mapper;
pub mod spotify;
pub mod types;
pub mod utils;

pub use entity::{
    Album, Artist, CatalogEntity, Completeness, EntityKind, Fetcher, Page, PageDirection,
    PlaylistSummary, SearchResults, SearchType, Track,
};
pub use error::{Error, Result};
pub use spotify::{AuthorizationSet, Authorizer, Client, ClientBuilder, ClientCredentials};

/// Prints a status line prefixed with a blue `o`.
///
/// Terminal output of the command-line front end; library code logs through
/// `tracing` instead.
///
/// ```
/// info!("Searching for {}", query);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a line prefixed with a green `✓`.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a line prefixed with a red `!` to stderr and exits with status 1.
///
/// Only for the binary: a failed command has nothing left to do.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a line prefixed with a yellow `!`.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

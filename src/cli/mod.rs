//! CLI module
//!
//! Command-line interface for rendering pagination and serving a demo listing.
//!
//! # Commands
//!
//! - `render` - Render pagination links for a request URL
//! - `window` - Show which page numbers are visible
//! - `info` - Print the entries info message
//! - `serve` - Start HTTP server mode

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
pub use server::{router, serve, AppState, RecordSource, ServerConfig};

//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Solidafy pagination CLI
#[derive(Parser, Debug)]
#[command(name = "solidafy-paginate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pagination configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "html")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render pagination links for a request URL
    Render {
        /// Request URL (path or absolute URL, query string included)
        #[arg(long, default_value = "/")]
        url: String,

        /// HTTP method of the request
        #[arg(long, default_value = "GET")]
        method: String,

        /// Current page (defaults to the page parameter in the URL, then 1)
        #[arg(long)]
        page: Option<String>,

        /// Items per page (defaults to the configured per_page)
        #[arg(long)]
        per_page: Option<String>,

        /// Total number of items
        #[arg(long)]
        total: u64,

        /// Item type name, used for the auto container id
        #[arg(long, default_value = "Item")]
        item_type: String,

        /// Page parameter name (`page`, `list[page]`, ...)
        #[arg(long)]
        param_name: Option<String>,

        /// Text between links
        #[arg(long)]
        separator: Option<String>,

        /// Render links without the surrounding container
        #[arg(long)]
        no_container: bool,

        /// Give the container an id derived from the item type
        #[arg(long)]
        auto_id: bool,

        /// Only render previous/next controls
        #[arg(long)]
        no_page_links: bool,
    },

    /// Show the page window for a position
    Window {
        /// Current page
        #[arg(long)]
        page: u64,

        /// Total number of pages
        #[arg(long)]
        total_pages: u64,

        /// Pages shown on each side of the current page
        #[arg(long, default_value = "4")]
        inner: u32,

        /// Pages always shown at each end
        #[arg(long, default_value = "1")]
        outer: u32,
    },

    /// Describe the entries shown on a page
    Info {
        /// Current page
        #[arg(long, default_value = "1")]
        page: String,

        /// Items per page (defaults to the configured per_page)
        #[arg(long)]
        per_page: Option<String>,

        /// Total number of items
        #[arg(long)]
        total: u64,

        /// Item type name
        #[arg(long, default_value = "Item")]
        item_type: String,

        /// Entry name override (e.g. "blog post")
        #[arg(long)]
        entry_name: Option<String>,
    },

    /// Start the demo listing server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,

        /// DuckDB database file to list from
        #[arg(long, requires = "table")]
        database: Option<PathBuf>,

        /// Table to list (with --database)
        #[arg(long)]
        table: Option<String>,

        /// Number of generated records when no database is given
        #[arg(long, default_value = "95")]
        records: u64,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// HTML fragment or plain text
    Html,
    /// JSON (one document per line)
    Json,
    /// Indented JSON
    Pretty,
}

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "shelfz")]
#[command(about = "Command-line bookshelf manager for product links", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a book link to the end of the shelf
    #[command(alias = "a")]
    Add {
        /// Product URL of the book
        url: String,

        /// Optional annotation
        #[arg(required = false)]
        comment: Option<String>,
    },

    /// List the shelf (first rows only unless --all)
    #[command(alias = "ls")]
    List {
        /// Show the whole shelf
        #[arg(long)]
        all: bool,
    },

    /// Move a book to a new position
    #[command(alias = "mv")]
    Move {
        /// Current position (1-based)
        from: usize,

        /// New position (1-based)
        to: usize,
    },

    /// Write a snapshot of the visible shelf to the snapshot file
    #[command(alias = "x")]
    Export {
        /// Snapshot the whole shelf instead of the collapsed view
        #[arg(long)]
        all: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (collapsed-rows, snapshot-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

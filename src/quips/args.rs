use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quips")]
#[command(about = "A personal library of reusable quick-reply snippets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this data directory instead of the default (also: QUIPS_HOME)
    #[arg(long, global = true)]
    pub home: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new snippet
    #[command(alias = "a")]
    Add {
        /// Title of the snippet (opens the editor if not provided)
        #[arg(required = false)]
        title: Option<String>,

        /// Snippet text
        #[arg(required = false)]
        content: Option<String>,

        /// Category label (defaults to "General")
        #[arg(short, long)]
        category: Option<String>,

        /// Skip opening the editor
        #[arg(long)]
        no_editor: bool,
    },

    /// List snippets grouped by category
    #[command(alias = "ls")]
    List {
        /// Case-insensitive search term
        term: Option<String>,
    },

    /// Search snippets (same as `list <term>`)
    Search { term: String },

    /// Show a snippet in full
    #[command(alias = "s")]
    Show {
        /// List position of the snippet (e.g. 1)
        position: usize,
    },

    /// Copy a snippet's text to the clipboard
    #[command(alias = "c")]
    Copy {
        /// List position of the snippet (e.g. 1)
        position: usize,
    },

    /// Edit a snippet
    #[command(alias = "e")]
    Edit {
        /// List position of the snippet (e.g. 1)
        position: usize,

        /// New category label
        #[arg(short, long)]
        category: Option<String>,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New snippet text
        #[arg(short = 'x', long)]
        content: Option<String>,

        /// Skip opening the editor
        #[arg(long)]
        no_editor: bool,
    },

    /// Delete a snippet
    #[command(alias = "rm")]
    Delete {
        /// List position of the snippet (e.g. 1)
        position: usize,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Remove every snippet and the stored collection
    Clear {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Import snippets from a tabular file (columns: category, title, content)
    Import {
        /// Path to the file
        file: PathBuf,
    },

    /// Export all snippets to a JSON backup
    Export {
        /// Write here instead of the configured file name
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (export-file, import-delimiter)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// `MMSummary` - map-reduce document summarization from the terminal.
#[derive(Parser, Debug)]
#[command(name = "mmsummary")]
#[command(version)]
#[command(about = "Summarize long documents with a remote map-reduce service.", long_about = None)]
pub struct Cli {
    /// Verbose logging (debug level, to stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize a .txt or .md document
    Summarize {
        /// Document to summarize
        file: PathBuf,

        #[command(flatten)]
        overrides: SettingOverrides,

        /// Copy the summary to the clipboard afterwards
        #[arg(long)]
        copy: bool,

        /// Save the summary as a dated .md file afterwards
        #[arg(long)]
        export: bool,
    },

    /// Browse and manage past summaries
    History {
        #[command(subcommand)]
        history_command: HistoryCommands,
    },

    /// Show or edit the persisted summarization settings
    Config {
        #[command(subcommand)]
        config_command: ConfigCommands,
    },

    /// Preview how the service would chunk a document
    Split {
        file: PathBuf,

        /// Characters per chunk
        #[arg(long, default_value_t = 16_000)]
        chunk_size: u32,

        /// Characters shared between neighbouring chunks
        #[arg(long, default_value_t = 4_000)]
        overlap: u32,
    },

    /// Check that the summarization service is reachable
    Ping,
}

/// Per-run replacements for the persisted `[summarize]` settings.
///
/// Numeric values are taken as typed and coerced the same way `config set`
/// coerces them.
#[derive(Args, Debug, Default, Clone)]
pub struct SettingOverrides {
    /// Model identifier
    #[arg(long)]
    pub model: Option<String>,

    /// map, nomap or original
    #[arg(long)]
    pub strategy: Option<String>,

    /// UI language code; also picks the summary language (zh, en)
    #[arg(long)]
    pub language: Option<String>,

    #[arg(long)]
    pub chunk_size_1: Option<String>,

    #[arg(long)]
    pub chunk_size_2: Option<String>,

    #[arg(long)]
    pub token_max: Option<String>,

    /// Map-step temperature (0.0 - 2.0)
    #[arg(long)]
    pub temperature: Option<String>,

    /// Reduce-step temperature (0.0 - 2.0)
    #[arg(long)]
    pub reduce_temperature: Option<String>,

    /// Custom map prompt
    #[arg(long)]
    pub map_template: Option<String>,

    /// Custom reduce prompt
    #[arg(long)]
    pub reduce_template: Option<String>,

    /// Ask the service for its placeholder summary instead of real inference
    #[arg(long)]
    pub test_mode: bool,
}

#[derive(Subcommand, Debug)]
pub enum HistoryCommands {
    /// List past summaries, newest first
    List {
        /// Expand one entry to show its full summary and source preview
        #[arg(long)]
        expand: Option<String>,
    },

    /// Show one summary in full
    Show { id: String },

    /// Delete a summary from the server
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Copy a summary to the clipboard
    Copy { id: String },

    /// Save a summary as a dated .md file
    Export {
        id: String,

        /// Target directory (default: [export].directory)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective settings
    Show,

    /// Change one setting (e.g. `config set strategy nomap`)
    Set { key: String, value: String },

    /// Restore every summarization setting to its default
    Reset,
}

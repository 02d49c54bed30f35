use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a single word-timings transcript into an SRT subtitle file
    Render {
        /// Input transcript file (JSON word timings)
        #[arg(short, long)]
        input: PathBuf,

        /// Output SRT file; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Silence gap (seconds) between words that forces a cue boundary
        #[arg(long)]
        endpoint_sec: Option<f64>,

        /// Maximum number of words per cue
        #[arg(long)]
        length_limit: Option<usize>,

        /// Remove the words-per-cue bound entirely
        #[arg(long, conflicts_with = "length_limit")]
        no_length_limit: bool,
    },

    /// Render all transcript files in a directory
    Batch {
        /// Input directory containing transcript files
        #[arg(short, long)]
        input_dir: PathBuf,

        /// Output directory for SRT files
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Silence gap (seconds) between words that forces a cue boundary
        #[arg(long)]
        endpoint_sec: Option<f64>,

        /// Maximum number of words per cue
        #[arg(long)]
        length_limit: Option<usize>,

        /// Remove the words-per-cue bound entirely
        #[arg(long, conflicts_with = "length_limit")]
        no_length_limit: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Write the default configuration to config.toml
    Init,

    /// Print the effective configuration
    Show,
}

//! CLI module for Tale.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Tale - Diarized Audio Transcription
///
/// Transcribes cloud-stored audio with speaker diarization and writes
/// per-speaker phrase transcripts. The name "Tale" comes from the Norwegian
/// word for "speech."
#[derive(Parser, Debug)]
#[command(name = "tale")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Transcribe a cloud-stored audio file with speaker diarization
    Transcribe {
        /// Storage reference of the audio file (gs://bucket/object)
        uri: String,

        /// Language of the audio (BCP-47 code, e.g. en-US, ru-RU)
        #[arg(short, long)]
        language: Option<String>,

        /// Number of speakers to distinguish
        #[arg(short, long)]
        speakers: Option<u32>,

        /// Directory to write transcripts under (overrides config)
        #[arg(short, long)]
        output_dir: Option<String>,
    },

    /// Check system requirements and configuration
    Doctor,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Open configuration file in editor
    Edit,

    /// Show configuration file path
    Path,
}

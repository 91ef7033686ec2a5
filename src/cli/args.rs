//! CLI argument definitions using clap

use clap::{ArgGroup, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// lectern - AI-powered student feedback analysis and lecture critique
#[derive(Parser, Debug)]
#[command(name = "lectern")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a CSV of student feedback, one summary per instructor/course
    Feedback {
        /// Feedback CSV with columns instructor_id, course_id, feedback_text
        csv: PathBuf,

        /// Write the summaries to this CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Critique a lecture transcript along pedagogical dimensions
    #[command(group(ArgGroup::new("source").required(true).args(["file", "video"])))]
    Critique {
        /// Read the transcript from a local text file
        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// Fetch captions for a YouTube video id
        #[arg(long, value_name = "VIDEO_ID")]
        video: Option<String>,

        /// Write the critique JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Fetch a video's caption transcript and print or save it
    Transcript {
        /// YouTube video id (the `v=` parameter of a watch URL)
        video_id: String,

        /// Write the transcript to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

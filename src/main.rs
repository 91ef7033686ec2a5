//! lectern - AI-powered student feedback analysis and lecture critique
//!
//! Entry point for the lectern CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use lectern::cli::{Cli, Commands};
use lectern::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Completions { shell } => {
            lectern::cli::completions::print(shell);
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;

            // Execute command
            match command {
                Commands::Feedback { csv, output } => {
                    lectern::cli::commands::analyze_feedback(&settings, &csv, output).await?;
                }
                Commands::Critique {
                    file,
                    video,
                    output,
                } => {
                    lectern::cli::commands::critique_transcript(&settings, file, video, output)
                        .await?;
                }
                Commands::Transcript { video_id, output } => {
                    lectern::cli::commands::fetch_transcript(&settings, &video_id, output).await?;
                }
                Commands::Config(config_cmd) => {
                    lectern::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}

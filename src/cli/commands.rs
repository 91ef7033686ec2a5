//! CLI command implementations

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::analysis::{
    critique_lecture, summarize_feedback, FeedbackOptions, FeedbackSummary, LectureCritique,
    LectureOptions,
};
use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::llm::{build_provider, CompletionOptions};
use crate::report;
use crate::transcript::TranscriptClient;

/// Analyze a feedback CSV, one summary per (instructor, course) group.
pub async fn analyze_feedback(
    settings: &Settings,
    csv_path: &Path,
    output: Option<PathBuf>,
) -> Result<()> {
    let rows = report::load_feedback_rows(csv_path)
        .with_context(|| format!("Failed to read feedback from {}", csv_path.display()))?;
    println!("Loaded {} feedback entries", rows.len());

    let provider = build_provider(settings)?;
    let options = FeedbackOptions {
        budget_chars: settings.analysis.feedback_chars,
        completion: CompletionOptions::from_settings(settings),
    };

    let summaries = summarize_feedback(
        provider.as_ref(),
        &rows,
        &options,
        Box::new(|done, total| println!("Analyzed group {done} of {total}")),
    )
    .await;

    for summary in &summaries {
        display_feedback_summary(summary);
    }

    if let Some(path) = output {
        let csv = report::feedback_csv(&summaries)?;
        std::fs::write(&path, csv)
            .with_context(|| format!("Failed to write results to {}", path.display()))?;
        println!();
        println!("Results written to: {}", path.display());
    }

    Ok(())
}

/// Critique a transcript read from a file or fetched by video id.
pub async fn critique_transcript(
    settings: &Settings,
    file: Option<PathBuf>,
    video: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let transcript = match (file, video) {
        (Some(path), None) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read transcript from {}", path.display()))?,
        (None, Some(video_id)) => fetch_transcript_text(settings, &video_id).await?,
        _ => anyhow::bail!("Provide exactly one transcript source (--file or --video)"),
    };
    println!(
        "Transcript loaded ({} characters)",
        transcript.chars().count()
    );

    let provider = build_provider(settings)?;
    let options = LectureOptions {
        budget_chars: settings.analysis.transcript_chars,
        completion: CompletionOptions::from_settings(settings),
    };

    let critique = critique_lecture(provider.as_ref(), &transcript, &options).await?;

    display_critique(&critique);

    if let Some(path) = output {
        std::fs::write(&path, report::critique_json(&critique)?)
            .with_context(|| format!("Failed to write critique to {}", path.display()))?;
        println!();
        println!("Critique written to: {}", path.display());
    }

    Ok(())
}

/// Fetch a caption transcript and print or save it.
pub async fn fetch_transcript(
    settings: &Settings,
    video_id: &str,
    output: Option<PathBuf>,
) -> Result<()> {
    let transcript = fetch_transcript_text(settings, video_id).await?;

    if let Some(path) = output {
        std::fs::write(&path, &transcript)
            .with_context(|| format!("Failed to write transcript to {}", path.display()))?;
        println!("Transcript written to: {}", path.display());
    } else {
        println!("{transcript}");
    }

    Ok(())
}

async fn fetch_transcript_text(settings: &Settings, video_id: &str) -> Result<String> {
    let client = TranscriptClient::from_settings(settings)?;
    let transcript = client.fetch(video_id).await?;
    Ok(transcript)
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

// Display helpers

fn display_feedback_summary(summary: &FeedbackSummary) {
    println!();
    println!(
        "== Instructor {} - Course {} ==",
        summary.instructor_id, summary.course_id
    );
    println!(
        "Sentiment: {}",
        summary
            .sentiment
            .map(|sentiment| sentiment.as_str())
            .unwrap_or("unknown")
    );
    println!(
        "Summary: {}",
        summary.summary.as_deref().unwrap_or("(no summary available)")
    );

    if let Some(actions) = &summary.actions {
        println!("Recommended actions:");
        for action in actions {
            println!("  - {action}");
        }
    }

    if let Some(examples) = &summary.examples {
        println!("Example quotes:");
        for quote in examples {
            println!("  \"{quote}\"");
        }
    }
}

fn display_critique(critique: &LectureCritique) {
    println!();
    println!("== Lecture critique ==");

    print_section("Summary", critique.summary.as_deref());
    print_section("Clarity & structure", critique.clarity_structure.as_deref());
    print_section("Missing content", critique.missing_content.as_deref());
    print_section("Factual issues", critique.factual_issues.as_deref());
    print_section(
        "Teaching suggestions",
        critique.pedagogical_suggestions.as_deref(),
    );
}

fn print_section(title: &str, content: Option<&str>) {
    println!();
    println!("{title}:");
    println!("{}", content.unwrap_or("(not provided)"));
}

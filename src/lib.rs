//! lectern - A lightweight CLI tool for AI-powered student feedback analysis and lecture critique
//!
//! A "lectern" is where the instructor stands; this one hands back notes.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod llm;
pub mod report;
pub mod transcript;

use thiserror::Error;

/// Main error type for lectern
#[derive(Error, Debug)]
pub enum LecternError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template error: no value bound for placeholder '{0}'")]
    Template(String),

    #[error("Completion service error: {0}")]
    Upstream(String),

    #[error("Transcript fetch error: {0} (verify the video id and that captions are available)")]
    TranscriptFetch(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, LecternError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "lectern";

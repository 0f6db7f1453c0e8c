//! Universal Extractor - A Rust tool for extracting plain text from heterogeneous sources
//!
//! This library provides functionality to pull plain text out of remote URLs (HTML or PDF),
//! local documents (PDF, DOCX, TXT, CSV, HTML), and YouTube video transcripts behind a
//! single uniform entry point.

pub mod classify;
pub mod cli;
pub mod config;
pub mod extractors;
pub mod fetch;
pub mod output;
pub mod pipeline;
pub mod youtube;

pub use classify::{classify, InputType};
pub use cli::{Cli, Commands, OutputFormat};
pub use config::Config;
pub use extractors::FileFormat;
pub use fetch::RemoteFetcher;
pub use pipeline::ExtractionPipeline;
pub use youtube::{TranscriptSegment, TranscriptService, YoutubeTranscriptExtractor};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Error types specific to the extractor
#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{format} parse error: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    #[error("Fetch failed for {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("No valid YouTube video ID found in URL: {0}")]
    InvalidVideoId(String),

    #[error("Transcript unavailable for video {video_id}: {message}")]
    TranscriptUnavailable { video_id: String, message: String },
}

use std::path::Path;

use crate::classify::{classify, InputType};
use crate::config::Config;
use crate::extractors;
use crate::fetch::RemoteFetcher;
use crate::youtube::{TranscriptService, YoutubeTranscriptExtractor};
use crate::Result;

/// Sentinel returned for input that is neither a URL, a YouTube link, nor a
/// supported local file. A recognized terminal result, not an error.
pub const UNSUPPORTED_INPUT: &str = "Unsupported or unknown input type\n";

/// Root dispatcher: classifies an input source and routes it to the matching
/// extractor.
///
/// Holds its own HTTP and transcript service handles so callers (and tests)
/// control construction; no module-level globals.
pub struct ExtractionPipeline {
    fetcher: RemoteFetcher,
    youtube: YoutubeTranscriptExtractor,
}

impl ExtractionPipeline {
    /// Build a pipeline with the default transcript service
    pub fn new(config: &Config) -> Self {
        Self {
            fetcher: RemoteFetcher::new(&config.http),
            youtube: YoutubeTranscriptExtractor::new(&config.http),
        }
    }

    /// Build a pipeline with an explicit transcript service (test doubles)
    pub fn with_transcript_service(
        config: &Config,
        service: Box<dyn TranscriptService>,
    ) -> Self {
        Self {
            fetcher: RemoteFetcher::new(&config.http),
            youtube: YoutubeTranscriptExtractor::with_service(service),
        }
    }

    /// Extract text from an input source string.
    ///
    /// URLs are fetched and decoded by content type, YouTube URLs yield the
    /// video transcript, existing supported files are read from disk, and
    /// anything else returns the [`UNSUPPORTED_INPUT`] sentinel on the
    /// success path. Delegate failures are logged and returned typed; no
    /// partial results, no retries.
    pub async fn extract(&self, input: &str) -> Result<String> {
        let input_type = classify(input);
        tracing::info!("Classified input as {:?}: {}", input_type, input);

        let result = match input_type {
            InputType::Url => self.fetcher.fetch(input).await,
            InputType::LocalFile => extractors::extract_file(Path::new(input)),
            InputType::Youtube => self.youtube.extract(input).await,
            InputType::Unknown => Ok(UNSUPPORTED_INPUT.to_string()),
        };

        if let Err(ref e) = result {
            tracing::error!("Extraction failed for '{}': {}", input, e);
        }

        result
    }

    /// Extract text from pre-read upload content.
    ///
    /// The format is derived from the filename extension only; content
    /// sniffing is not performed.
    pub fn extract_from_bytes(&self, content: &[u8], filename: &str) -> Result<String> {
        tracing::info!("Extracting uploaded content: {}", filename);

        let result = extractors::extract_bytes(content, filename);

        if let Err(ref e) = result {
            tracing::error!("Extraction failed for upload '{}': {}", filename, e);
        }

        result
    }
}

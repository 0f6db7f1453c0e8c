use async_trait::async_trait;
use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::Duration;

use crate::config::HttpConfig;
use crate::{ExtractError, Result};

/// Matches the common YouTube URL shapes: `watch?v=ID`, `youtu.be/ID`,
/// `embed/ID`, `v/ID`. The capture is the 11-character video identifier.
fn video_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?:youtube\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?)/|.*[?&]v=)|youtu\.be/)([^"&?/\s]{11})"#)
            .expect("video id pattern is valid")
    })
}

/// Pull the 11-character video identifier out of a YouTube URL
pub fn extract_video_id(url: &str) -> Option<String> {
    video_id_pattern()
        .captures(url)
        .map(|caps| caps[1].to_string())
}

/// One caption cue from a video transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// Caption text
    pub text: String,

    /// Start offset in seconds
    pub start: f64,

    /// Cue duration in seconds
    pub duration: f64,
}

/// Transcript retrieval capability, keyed by video id.
///
/// Injected into the extractor so tests can substitute a double.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranscriptService: Send + Sync {
    async fn fetch_segments(&self, video_id: &str) -> Result<Vec<TranscriptSegment>>;
}

/// Default transcript service backed by YouTube's timed-text captions.
///
/// Resolves the caption track URL from the watch page, then fetches and
/// parses the timed-text XML.
pub struct TimedTextService {
    client: Client,
}

impl TimedTextService {
    pub fn new(http: &HttpConfig) -> Self {
        let client = Client::builder()
            .user_agent(&http.user_agent)
            .timeout(Duration::from_secs(http.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Find the first caption track URL embedded in the watch page
    fn caption_track_url(watch_page: &str) -> Option<String> {
        static TRACK_PATTERN: OnceLock<Regex> = OnceLock::new();
        let pattern = TRACK_PATTERN.get_or_init(|| {
            Regex::new(r#""captionTracks":\[\{"baseUrl":"([^"]+)""#)
                .expect("caption track pattern is valid")
        });

        pattern
            .captures(watch_page)
            .map(|caps| caps[1].replace("\\u0026", "&"))
    }

    async fn get(&self, video_id: &str, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| unavailable(video_id, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(unavailable(video_id, format!("HTTP {status}")));
        }

        response
            .text()
            .await
            .map_err(|e| unavailable(video_id, e.to_string()))
    }
}

#[async_trait]
impl TranscriptService for TimedTextService {
    async fn fetch_segments(&self, video_id: &str) -> Result<Vec<TranscriptSegment>> {
        let watch_url = format!("https://www.youtube.com/watch?v={video_id}");
        let watch_page = self.get(video_id, &watch_url).await?;

        let track_url = Self::caption_track_url(&watch_page)
            .ok_or_else(|| unavailable(video_id, "no caption tracks found".to_string()))?;

        let timed_text = self.get(video_id, &track_url).await?;
        let segments = parse_timed_text(&timed_text)
            .map_err(|message| unavailable(video_id, message))?;

        if segments.is_empty() {
            return Err(unavailable(video_id, "transcript is empty".to_string()));
        }

        Ok(segments)
    }
}

/// Parse timed-text XML (`<transcript><text start=".." dur="..">..</text>`)
fn parse_timed_text(xml: &str) -> std::result::Result<Vec<TranscriptSegment>, String> {
    let mut reader = Reader::from_str(xml);
    let mut segments = Vec::new();
    let mut current: Option<TranscriptSegment> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"text" => {
                let mut segment = TranscriptSegment {
                    text: String::new(),
                    start: 0.0,
                    duration: 0.0,
                };
                for attr in e.attributes().flatten() {
                    let value = attr.unescape_value().map_err(|e| e.to_string())?;
                    match attr.key.as_ref() {
                        b"start" => segment.start = value.parse().unwrap_or(0.0),
                        b"dur" => segment.duration = value.parse().unwrap_or(0.0),
                        _ => {}
                    }
                }
                current = Some(segment);
            }
            Ok(Event::Text(e)) => {
                if let Some(segment) = current.as_mut() {
                    let cue = e.unescape().map_err(|e| e.to_string())?;
                    segment.text.push_str(&cue);
                }
            }
            Ok(Event::End(ref e)) if e.name().as_ref() == b"text" => {
                if let Some(segment) = current.take() {
                    if !segment.text.is_empty() {
                        segments.push(segment);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(e.to_string()),
            _ => {}
        }
    }

    Ok(segments)
}

/// Flatten ordered caption segments into one plain-text string.
///
/// Segment texts are joined with a single space; timestamps are discarded.
pub fn flatten_segments(segments: &[TranscriptSegment]) -> String {
    segments
        .iter()
        .map(|segment| segment.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extracts a plain-text transcript from a YouTube video URL
pub struct YoutubeTranscriptExtractor {
    service: Box<dyn TranscriptService>,
}

impl YoutubeTranscriptExtractor {
    /// Create an extractor backed by the default timed-text service
    pub fn new(http: &HttpConfig) -> Self {
        Self::with_service(Box::new(TimedTextService::new(http)))
    }

    /// Create an extractor with an explicit transcript service
    pub fn with_service(service: Box<dyn TranscriptService>) -> Self {
        Self { service }
    }

    /// Fetch and flatten the transcript for a YouTube URL
    pub async fn extract(&self, url: &str) -> Result<String> {
        let video_id = extract_video_id(url)
            .ok_or_else(|| ExtractError::InvalidVideoId(url.to_string()))?;

        tracing::debug!("Fetching transcript for video: {}", video_id);

        let segments = self.service.fetch_segments(&video_id).await?;
        Ok(flatten_segments(&segments))
    }
}

fn unavailable(video_id: &str, message: String) -> ExtractError {
    ExtractError::TranscriptUnavailable {
        video_id: video_id.to_string(),
        message,
    }
}

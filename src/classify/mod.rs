use std::path::Path;
use url::Url;

/// Category of an input source string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    /// A non-YouTube http(s) URL
    Url,
    /// An existing file with a supported extension
    LocalFile,
    /// A YouTube video URL
    Youtube,
    /// Anything else
    Unknown,
}

/// File extensions accepted for local extraction
pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "docx", "txt", "csv", "html"];

/// Determine the type of an input source.
///
/// Pure and infallible: a syntactically valid http(s) URL classifies as
/// [`InputType::Youtube`] when its host is a YouTube domain and [`InputType::Url`]
/// otherwise; an existing file whose extension is on the supported list classifies
/// as [`InputType::LocalFile`]; everything else is [`InputType::Unknown`].
pub fn classify(input: &str) -> InputType {
    if let Ok(parsed) = Url::parse(input) {
        if matches!(parsed.scheme(), "http" | "https") {
            if let Some(host) = parsed.host_str() {
                if is_youtube_host(host) {
                    return InputType::Youtube;
                }
                return InputType::Url;
            }
        }
        // Non-http schemes and host-less URLs fall through to the
        // file checks below ("C:\notes.txt" parses as a URL on its own).
    }

    let path = Path::new(input);
    if path.is_file() {
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            // Extension match is case-sensitive: ".PDF" is not supported.
            if SUPPORTED_EXTENSIONS.contains(&ext) {
                return InputType::LocalFile;
            }
        }
    }

    InputType::Unknown
}

/// Check whether a URL host belongs to YouTube
fn is_youtube_host(host: &str) -> bool {
    host == "youtube.com" || host.ends_with(".youtube.com") || host == "youtu.be"
}

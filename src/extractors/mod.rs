use std::path::Path;

pub mod docx;
pub mod html;
pub mod pdf;
pub mod text;

use crate::Result;

/// Sentinel returned when a path or filename carries an unsupported extension.
/// Not an error: callers receive it on the success path.
pub const UNSUPPORTED_LOCAL_FILE: &str = "Unsupported local file type\n";

/// Supported document formats, keyed by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Pdf,
    Docx,
    /// Plain text and CSV, read verbatim
    Text,
    Html,
    Unsupported,
}

impl FileFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileFormat::Pdf => "pdf",
            FileFormat::Docx => "docx",
            FileFormat::Text => "text",
            FileFormat::Html => "html",
            FileFormat::Unsupported => "unsupported",
        }
    }

    /// Map a file extension to a format. Matching is exact and lowercase,
    /// mirroring the classifier's whitelist.
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "pdf" => FileFormat::Pdf,
            "docx" => FileFormat::Docx,
            "txt" | "csv" => FileFormat::Text,
            "html" => FileFormat::Html,
            _ => FileFormat::Unsupported,
        }
    }

    /// Derive the format from a path or filename
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(FileFormat::Unsupported)
    }
}

/// Extract text from a local file, dispatching on its extension.
///
/// An unsupported extension yields the [`UNSUPPORTED_LOCAL_FILE`] sentinel
/// rather than an error.
pub fn extract_file(path: &Path) -> Result<String> {
    let format = FileFormat::from_path(path);
    tracing::debug!("Extracting {} as {}", path.display(), format.as_str());

    match format {
        FileFormat::Pdf => pdf::extract_from_file(path),
        FileFormat::Docx => docx::extract_from_file(path),
        FileFormat::Text => text::extract_from_file(path),
        FileFormat::Html => {
            let content = fs_err::read_to_string(path)?;
            Ok(html::extract(&content))
        }
        FileFormat::Unsupported => Ok(UNSUPPORTED_LOCAL_FILE.to_string()),
    }
}

/// Extract text from pre-read content, deriving the format from the filename
/// extension only. No content sniffing is performed.
pub fn extract_bytes(content: &[u8], filename: &str) -> Result<String> {
    match FileFormat::from_path(Path::new(filename)) {
        FileFormat::Pdf => pdf::extract_from_bytes(content),
        FileFormat::Docx => docx::extract_from_bytes(content),
        FileFormat::Text => text::extract_from_bytes(content),
        FileFormat::Html => {
            let content = text::extract_from_bytes(content)?;
            Ok(html::extract(&content))
        }
        FileFormat::Unsupported => Ok(UNSUPPORTED_LOCAL_FILE.to_string()),
    }
}

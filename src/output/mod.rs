use anyhow::Result;
use std::path::Path;

use crate::cli::OutputFormat;

/// Render extracted text in the requested format.
///
/// JSON output is the `{"text": ...}` shape an HTTP collaborator would
/// return on success.
pub fn format_text(text: &str, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(
            &serde_json::json!({ "text": text }),
        )?),
    }
}

/// Save extracted text to file
pub async fn save_to_file(text: &str, path: &Path, format: &OutputFormat) -> Result<()> {
    let content = format_text(text, format)?;
    fs_err::write(path, content)?;
    Ok(())
}

/// Print extracted text to console
pub fn print_to_console(text: &str, format: &OutputFormat) -> Result<()> {
    let content = format_text(text, format)?;
    println!("{}", content);
    Ok(())
}

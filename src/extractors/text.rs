use std::path::Path;

use crate::{ExtractError, Result};

/// Read a plain-text or CSV file verbatim as UTF-8
pub fn extract_from_file(path: &Path) -> Result<String> {
    Ok(fs_err::read_to_string(path)?)
}

/// Decode in-memory content as UTF-8, verbatim
pub fn extract_from_bytes(bytes: &[u8]) -> Result<String> {
    String::from_utf8(bytes.to_vec()).map_err(|e| ExtractError::Parse {
        format: "text",
        message: e.to_string(),
    })
}

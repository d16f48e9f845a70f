//! Reading catalog and inventory documents
//!
//! Documents are JSON arrays, optionally wrapped as a JavaScript module
//! (`export const catalog = [...];`) the way the web front end ships them.

use sommelier_core::Result;
use std::path::Path;

const EXPORT_PREFIX: &str = "export const ";

/// The JSON body of a document, with any module wrapper removed
pub fn json_body(source: &str) -> &str {
    let trimmed = source.trim();
    let Some(rest) = trimmed.strip_prefix(EXPORT_PREFIX) else {
        return trimmed;
    };
    let Some((_, body)) = rest.split_once('=') else {
        return trimmed;
    };
    let body = body.trim();
    body.strip_suffix(';').unwrap_or(body).trim_end()
}

/// Read a document from disk and return its text
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<String> {
    Ok(std::fs::read_to_string(path)?)
}

//! # lexstat-content
//!
//! Text extraction for lexstat.
//!
//! Extraction never fails the run: unreadable, binary or non-UTF-8 files come
//! back as an empty string, which tokenizes to zero words.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

/// Extensions the tool advertises to callers.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    ".txt", ".py", ".csv", ".doc", ".docx", ".eml", ".epub", ".json", ".html", ".odt", ".pdf",
    ".xlsx", ".xls", ".rtf",
];

/// Extensions scanned when the caller does not choose any.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".txt", ".py"];

/// Turns a file into UTF-8 text.
pub trait TextExtractor {
    /// Return the file's text, or `""` when it cannot be extracted.
    fn extract(&self, path: &Path) -> String;
}

/// Reads files as UTF-8 text, optionally capped to the first `max_bytes`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor {
    max_bytes: Option<usize>,
}

impl PlainTextExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_bytes(max_bytes: Option<usize>) -> Self {
        Self { max_bytes }
    }

    pub fn max_bytes(&self) -> Option<usize> {
        self.max_bytes
    }
}

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> String {
        let bytes = match read_bytes(path, self.max_bytes) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(path = %path.display(), "skipping unreadable file: {err:#}");
                return String::new();
            }
        };
        match decode_text(bytes) {
            Some(text) => text,
            None => {
                debug!(path = %path.display(), "skipping binary or non-UTF-8 content");
                String::new()
            }
        }
    }
}

/// Read a whole file, or only its head when `max_bytes` is set.
pub fn read_bytes(path: &Path, max_bytes: Option<usize>) -> Result<Vec<u8>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut buf = Vec::new();
    match max_bytes {
        Some(limit) => file
            .take(limit as u64)
            .read_to_end(&mut buf)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut file = file;
            file.read_to_end(&mut buf)
                .with_context(|| format!("Failed to read {}", path.display()))?
        }
    };
    Ok(buf)
}

/// Decode bytes as text, rejecting anything that looks binary.
///
/// A capped read may cut the last character in half; the incomplete tail is
/// dropped rather than rejecting the whole file.
pub fn decode_text(bytes: Vec<u8>) -> Option<String> {
    if !is_text_like(&bytes) {
        return None;
    }
    match String::from_utf8(bytes) {
        Ok(text) => Some(text),
        Err(err) => {
            let utf8 = err.utf8_error();
            // `error_len() == None` means the input ended mid-character.
            if utf8.error_len().is_none() {
                let valid = utf8.valid_up_to();
                let mut bytes = err.into_bytes();
                bytes.truncate(valid);
                String::from_utf8(bytes).ok()
            } else {
                None
            }
        }
    }
}

pub fn is_text_like(bytes: &[u8]) -> bool {
    !bytes.contains(&0)
}

//! Config file byte inspector.
//!
//! Reports low-level byte characteristics of one on-disk file: an escaped
//! preview of the first 64 bytes, the total length, and whether the content
//! starts with the UTF-8 byte-order marker.

use std::io::{self, Write};
use std::path::Path;

use crate::types::Result;

/// The UTF-8 byte-order-marker sequence.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

const PREVIEW_LEN: usize = 64;

/// Byte characteristics of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// The first 64 bytes (or the whole content, if shorter).
    pub preview: Vec<u8>,
    /// Total byte length of the file.
    pub len: usize,
    /// Whether the content starts with [`UTF8_BOM`].
    pub has_bom: bool,
}

/// Read the file as raw bytes and report on them. Read failures propagate.
pub fn inspect_file(path: &Path) -> Result<FileReport> {
    let bytes = std::fs::read(path)?;
    Ok(inspect_bytes(&bytes))
}

/// Report on an in-memory byte sequence.
pub fn inspect_bytes(bytes: &[u8]) -> FileReport {
    FileReport {
        preview: bytes[..bytes.len().min(PREVIEW_LEN)].to_vec(),
        len: bytes.len(),
        has_bom: bytes.starts_with(&UTF8_BOM),
    }
}

impl FileReport {
    /// The preview rendered as an escaped byte-string literal.
    pub fn preview_literal(&self) -> String {
        format!("b\"{}\"", self.preview.escape_ascii())
    }

    /// Print the three report lines.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.preview_literal())?;
        writeln!(out, "len= {}", self.len)?;
        writeln!(out, "starts with UTF-8 BOM= {}", self.has_bom)?;
        Ok(())
    }
}

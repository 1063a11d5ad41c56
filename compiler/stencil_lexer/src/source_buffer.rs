//! Owned template source with encoding checks.
//!
//! A [`Scanner`] borrows `&str`, so bytes read from a file or stdin have to
//! be decoded first. [`SourceBuffer::from_bytes`] decodes lossily: every
//! maximal invalid UTF-8 sequence becomes one `U+FFFD` replacement
//! character, and the scan goes on. Nothing about the input is rejected
//! here; problems are recorded as [`EncodingIssue`] values for the caller
//! to report.
//!
//! # Encoding Detection
//!
//! - UTF-8 BOM (kept in the text, so it lands in the first Text item)
//! - UTF-16 BOMs (input is almost certainly in the wrong encoding)
//! - Invalid UTF-8 sequences (replaced)

use crate::Scanner;

/// Template source owned for the lifetime of its scanners.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Diagnostic label, handed to every scanner created from this buffer.
    name: String,
    text: String,
    encoding_issues: Vec<EncodingIssue>,
}

/// Encoding issue detected while building a [`SourceBuffer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    pub kind: EncodingIssueKind,
    /// Byte position in the *decoded* text where the issue starts.
    pub pos: u32,
    /// Byte length of the problematic sequence in the *raw* input.
    pub len: u32,
}

/// Kind of encoding issue detected in a source buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// UTF-8 BOM (`0xEF 0xBB 0xBF`) at start.
    Utf8Bom,
    /// UTF-16 Little-Endian BOM (`0xFF 0xFE`) at start.
    Utf16LeBom,
    /// UTF-16 Big-Endian BOM (`0xFE 0xFF`) at start.
    Utf16BeBom,
    /// Bytes that are not valid UTF-8, replaced by `U+FFFD`.
    InvalidUtf8,
}

impl EncodingIssueKind {
    /// Human-readable description for warnings.
    pub fn description(self) -> &'static str {
        match self {
            EncodingIssueKind::Utf8Bom => "UTF-8 byte order mark",
            EncodingIssueKind::Utf16LeBom => "UTF-16 little-endian byte order mark",
            EncodingIssueKind::Utf16BeBom => "UTF-16 big-endian byte order mark",
            EncodingIssueKind::InvalidUtf8 => "invalid UTF-8 sequence",
        }
    }
}

impl SourceBuffer {
    /// Create a buffer from text that is already valid UTF-8.
    pub fn new(name: impl Into<String>, source: &str) -> Self {
        let mut encoding_issues = Vec::new();
        detect_bom(source.as_bytes(), &mut encoding_issues);
        Self {
            name: name.into(),
            text: source.to_owned(),
            encoding_issues,
        }
    }

    /// Create a buffer from raw bytes, replacing invalid UTF-8.
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Self {
        let mut encoding_issues = Vec::new();
        detect_bom(bytes, &mut encoding_issues);
        let text = decode_lossy(bytes, &mut encoding_issues);
        Self {
            name: name.into(),
            text,
            encoding_issues,
        }
    }

    /// Create a [`Scanner`] over this buffer, positioned at byte 0.
    pub fn scanner(&self) -> Scanner<'_> {
        Scanner::new(self.name.as_str(), &self.text)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The decoded text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length of the decoded text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Encoding issues detected during construction, in input order.
    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }
}

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Detect byte order marks at the start of the input.
fn detect_bom(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    let (kind, len) = match source {
        [0xEF, 0xBB, 0xBF, ..] => (EncodingIssueKind::Utf8Bom, 3),
        [0xFF, 0xFE, ..] => (EncodingIssueKind::Utf16LeBom, 2),
        [0xFE, 0xFF, ..] => (EncodingIssueKind::Utf16BeBom, 2),
        _ => return,
    };
    issues.push(EncodingIssue { kind, pos: 0, len });
}

/// Decode `bytes` as UTF-8, replacing each maximal invalid sequence with
/// `U+FFFD` and recording where it happened.
fn decode_lossy(bytes: &[u8], issues: &mut Vec<EncodingIssue>) -> String {
    let mut text = String::with_capacity(bytes.len());
    let mut rest = bytes;
    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                text.push_str(valid);
                return text;
            }
            Err(err) => {
                let (valid, after) = rest.split_at(err.valid_up_to());
                // `valid_up_to` guarantees this prefix decodes.
                text.push_str(&String::from_utf8_lossy(valid));
                let bad_len = err.error_len().unwrap_or(after.len());
                issues.push(EncodingIssue {
                    kind: EncodingIssueKind::InvalidUtf8,
                    pos: to_u32(text.len()),
                    len: to_u32(bad_len),
                });
                text.push(char::REPLACEMENT_CHARACTER);
                rest = &after[bad_len..];
            }
        }
    }
}

#[cfg(test)]
mod tests;

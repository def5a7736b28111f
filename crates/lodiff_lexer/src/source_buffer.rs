//! Sentinel-terminated source buffer for layout dumps.
//!
//! The whole dump is read into memory once. The decoded text is followed by
//! a `\0` sentinel and zero padding up to the next 64-byte boundary, so the
//! cursor can detect the end of input without explicit bounds checks.
//!
//! # Encoding Detection
//!
//! Dumps come from different producers and are not always UTF-8:
//! - UTF-8 BOM: stripped
//! - UTF-16 LE / BE BOM: decoded as UTF-16
//! - anything else: must be valid UTF-8
//!
//! Text that cannot be decoded is a [`SourceError::Encoding`].

use std::borrow::Cow;
use std::path::Path;

use crate::{Cursor, SourceError};

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated, fully loaded layout dump.
///
/// # Layout
///
/// ```text
/// [source text..., '\0', padding '\0'...]
///  ^               ^     ^
///  0               |     rounded up to 64-byte boundary
///             source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Display name used in diagnostics (usually the file path).
    name: String,
    /// Owned buffer: source text, sentinel, padding.
    buf: String,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Wrap already-decoded text.
    ///
    /// Sources larger than `u32::MAX` bytes are truncated to that length;
    /// [`from_bytes`](Self::from_bytes) rejects them instead.
    pub fn new(name: impl Into<String>, text: &str) -> Self {
        let source_len = u32::try_from(text.len()).unwrap_or(u32::MAX);
        let text = &text[..floor_char_boundary(text, source_len as usize)];

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (text.len() + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);
        let mut buf = String::with_capacity(padded_len);
        buf.push_str(text);
        buf.extend(std::iter::repeat('\0').take(padded_len - text.len()));

        Self {
            name: name.into(),
            buf,
            source_len: u32::try_from(text.len()).unwrap_or(u32::MAX),
        }
    }

    /// Decode raw bytes, honouring a leading byte order mark.
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Result<Self, SourceError> {
        let name = name.into();
        let text = decode(bytes).map_err(|reason| SourceError::Encoding {
            name: name.clone(),
            reason,
        })?;
        if u32::try_from(text.len()).is_err() {
            return Err(SourceError::TooLarge {
                name,
                len: text.len(),
            });
        }
        Ok(Self::new(name, &text))
    }

    /// Read and decode a dump from disk.
    pub fn from_path(path: &Path) -> Result<Self, SourceError> {
        let bytes = std::fs::read(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(path.display().to_string(), &bytes)
    }

    /// Display name of the dump.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The decoded source text (without sentinel or padding).
    pub fn as_str(&self) -> &str {
        &self.buf[..self.source_len as usize]
    }

    /// The source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        self.as_str().as_bytes()
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// One-based line number of byte offset `pos`.
    ///
    /// Counts the line breaks before `pos`; a lone CR, a lone LF and a CRLF
    /// pair are one break each.
    pub fn line_at(&self, pos: u32) -> u32 {
        self.breaks_between(0, pos).saturating_add(1)
    }

    /// Number of line breaks in `start..end`, counted as in
    /// [`line_at`](Self::line_at). An LF at `start` that completes a CRLF
    /// begun before `start` is not counted again.
    pub(crate) fn breaks_between(&self, start: u32, end: u32) -> u32 {
        let bytes = self.as_bytes();
        let end = (end as usize).min(bytes.len());
        let start = (start as usize).min(end);
        let breaks = memchr::memchr2_iter(b'\r', b'\n', &bytes[start..end])
            .map(|i| start + i)
            .filter(|&i| !(bytes[i] == b'\n' && i > 0 && bytes[i - 1] == b'\r'))
            .count();
        u32::try_from(breaks).unwrap_or(u32::MAX)
    }
}

/// Largest char boundary of `text` that is `<= index`.
fn floor_char_boundary(text: &str, index: usize) -> usize {
    if index >= text.len() {
        return text.len();
    }
    (0..=index)
        .rev()
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(0)
}

/// Decode dump bytes the way a BOM-sniffing text reader does.
fn decode(bytes: &[u8]) -> Result<Cow<'_, str>, &'static str> {
    match bytes {
        [0xEF, 0xBB, 0xBF, rest @ ..] => decode_utf8(rest),
        [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, u16::from_le_bytes),
        [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, u16::from_be_bytes),
        _ => decode_utf8(bytes),
    }
}

fn decode_utf8(bytes: &[u8]) -> Result<Cow<'_, str>, &'static str> {
    std::str::from_utf8(bytes)
        .map(Cow::Borrowed)
        .map_err(|_| "invalid UTF-8")
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<Cow<'static, str>, &'static str> {
    if bytes.len() % 2 != 0 {
        return Err("odd number of bytes in UTF-16 text");
    }
    let units = bytes.chunks_exact(2).map(|pair| unit([pair[0], pair[1]]));
    char::decode_utf16(units)
        .collect::<Result<String, _>>()
        .map(Cow::Owned)
        .map_err(|_| "unpaired UTF-16 surrogate")
}

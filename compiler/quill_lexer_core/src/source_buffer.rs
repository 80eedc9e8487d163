//! Sentinel-terminated template buffer.
//!
//! The buffer guarantees a `0x00` sentinel byte after the template content,
//! so the scanner can read one byte past any position without bounds
//! checks. The total buffer size is rounded up to the next 64-byte boundary,
//! which also gives [`Cursor::peek_n`] zeroed padding near the end.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated copy of a template.
///
/// # Layout
///
/// ```text
/// [template_bytes..., 0x00, padding_zeros...]
///  ^                  ^     ^
///  0                  |     rounded up to 64-byte boundary
///                 source_len (sentinel)
/// ```
///
/// The borrowed `&str` is kept next to the padded bytes so the cursor can
/// hand out string slices without re-validating UTF-8.
#[derive(Clone, Debug)]
pub struct SourceBuffer<'a> {
    source: &'a str,
    /// Owned buffer: `[template_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
}

impl<'a> SourceBuffer<'a> {
    /// Copy `source` into a cache-line padded buffer with a `0x00` sentinel.
    pub fn new(source: &'a str) -> Self {
        let source_len = source.len();

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // The sentinel (buf[source_len]) and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source.as_bytes());

        Self { source, buf }
    }

    /// The template text (without sentinel or padding).
    pub fn as_str(&self) -> &'a str {
        self.source
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self.source, &self.buf)
    }

    /// Length of the template in bytes.
    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Returns `true` if the template is empty.
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
}

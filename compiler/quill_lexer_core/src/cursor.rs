//! Byte cursor over a sentinel-terminated template buffer.
//!
//! The cursor advances through the buffer byte-by-byte. EOF is detected
//! when the current byte equals the sentinel (`0x00`) and the position
//! has reached the template length.
//!
//! # Interior Null Bytes
//!
//! Templates may legally contain U+0000 inside literal text. A null at
//! `pos < source_len` is ordinary content; a null at `pos >= source_len`
//! is the sentinel (EOF).
//!
//! # Character Boundaries
//!
//! Every byte the scanner stops on is ASCII or the first byte of a tag
//! delimiter, so positions handed to [`Cursor::slice`] always fall on UTF-8
//! character boundaries.

/// Cheap, copyable cursor over a [`SourceBuffer`](crate::SourceBuffer).
///
/// Sub-scanners take the cursor by `&mut` and leave it positioned just past
/// whatever they consumed. Copying the cursor snapshots its state.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// The template, used for `&str` slicing.
    source: &'a str,
    /// Sentinel-terminated buffer (template + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: usize,
}

/// &str = 16, &[u8] = 16, usize = 8 => 40 bytes on 64-bit platforms.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 40);

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    ///
    /// # Contract
    ///
    /// `buf[source.len()]` must be `0x00` and `buf` must start with the bytes
    /// of `source`. Guaranteed by `SourceBuffer::new()`.
    pub(crate) fn new(source: &'a str, buf: &'a [u8]) -> Self {
        debug_assert!(source.len() < buf.len(), "sentinel must be within buffer bounds");
        debug_assert!(buf[source.len()] == 0, "sentinel byte must be 0x00");
        Self { source, buf, pos: 0 }
    }

    /// Returns the byte at the current position, `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos]
    }

    /// Returns the byte `n` positions ahead of current, `0x00` past the end.
    #[inline]
    pub fn peek_n(&self, n: usize) -> u8 {
        self.buf.get(self.pos + n).copied().unwrap_or(0)
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Advance the cursor by `n` bytes, stopping at EOF.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.source.len());
    }

    /// Returns `true` if the cursor has reached EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Current byte offset in the template.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the template in bytes.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    /// Template bytes from the current position to EOF.
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        &self.source.as_bytes()[self.pos..]
    }

    /// Extract a template substring.
    ///
    /// # Contract
    ///
    /// `start..end` must fall within the template and on character
    /// boundaries, which holds for positions recorded by the scanner.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(
            end <= self.source.len(),
            "slice end {end} exceeds template length {}",
            self.source.len()
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.source[start..end]
    }

    /// Returns `true` if the template continues with `needle` at the
    /// current position. An empty needle never matches.
    #[inline]
    pub fn starts_with(&self, needle: &[u8]) -> bool {
        !needle.is_empty() && self.remaining().starts_with(needle)
    }

    /// Advance past horizontal whitespace (spaces and tabs).
    #[inline]
    pub fn eat_whitespace(&mut self) {
        loop {
            let b = self.buf[self.pos];
            if b == b' ' || b == b'\t' {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// Advance to the next `quote` or `\` byte.
    ///
    /// Returns the byte found, or `0x00` when neither occurs before EOF (the
    /// cursor is then at EOF).
    pub fn eat_until_quote(&mut self, quote: u8) -> u8 {
        match memchr::memchr2(quote, b'\\', self.remaining()) {
            Some(offset) => {
                self.pos += offset;
                self.buf[self.pos]
            }
            None => {
                self.seek_eof();
                0
            }
        }
    }

    /// Advance just past the next occurrence of `needle`.
    ///
    /// Returns `false` and positions the cursor at EOF if `needle` does not
    /// occur in the rest of the template.
    pub fn eat_past(&mut self, needle: &[u8]) -> bool {
        match memchr::memmem::find(self.remaining(), needle) {
            Some(offset) => {
                self.pos += offset + needle.len();
                true
            }
            None => {
                self.seek_eof();
                false
            }
        }
    }

    /// Move the cursor to EOF.
    #[inline]
    pub fn seek_eof(&mut self) {
        self.pos = self.source.len();
    }
}

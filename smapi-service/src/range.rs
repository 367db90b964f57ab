//! HTTP `Range` header parsing for audio streaming
//!
//! Only the single-range form with a first byte position is supported:
//! `bytes=500-999` or `bytes=500-`. Suffix ranges (`bytes=-500`) and
//! multiple ranges are treated as unsupported, and the caller falls back to
//! serving the whole entity or answering 416.

use std::fmt;

use crate::error::{Result, SmapiError};

const BYTES_UNIT: &str = "bytes=";

/// A validated byte range, with inclusive positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ByteRange {
    first_byte_pos: u64,
    last_byte_pos: Option<u64>,
    total_length: Option<u64>,
}

impl ByteRange {
    /// Parse an optional header value.
    ///
    /// Returns `None` both when there is no header and when the header is not
    /// a supported range.
    pub fn parse(header: Option<&str>, total_length: Option<u64>) -> Option<Self> {
        Self::try_parse(header?, total_length).ok()
    }

    /// Parse a header value, reporting why it is unusable
    pub fn try_parse(header: &str, total_length: Option<u64>) -> Result<Self> {
        let unsupported = || SmapiError::UnsupportedRange(header.to_string());

        let spec = header.strip_prefix(BYTES_UNIT).ok_or_else(unsupported)?;
        let (first, last) = spec.split_once('-').ok_or_else(unsupported)?;

        let first_byte_pos = parse_pos(first).ok_or_else(unsupported)?;
        let last_byte_pos = match last {
            "" => None,
            last => Some(parse_pos(last).ok_or_else(unsupported)?),
        };

        if let Some(last) = last_byte_pos {
            // Inverted, or more bytes than a u64 can count
            if first_byte_pos > last || (last - first_byte_pos).checked_add(1).is_none() {
                return Err(unsupported());
            }
        }

        Ok(Self {
            first_byte_pos,
            last_byte_pos,
            total_length,
        })
    }

    pub fn first_byte_pos(&self) -> u64 {
        self.first_byte_pos
    }

    pub fn last_byte_pos(&self) -> Option<u64> {
        self.last_byte_pos
    }

    pub fn total_length(&self) -> Option<u64> {
        self.total_length
    }

    /// Position to start streaming from
    pub fn offset(&self) -> u64 {
        self.first_byte_pos
    }

    /// Both first and last byte positions were given
    pub fn is_closed(&self) -> bool {
        self.last_byte_pos.is_some()
    }

    /// Number of bytes in a closed range
    pub fn size(&self) -> Option<u64> {
        self.last_byte_pos
            .and_then(|last| (last - self.first_byte_pos).checked_add(1))
    }

    /// Number of bytes to send.
    ///
    /// `None` means stream until the content runs out.
    pub fn length(&self) -> Option<u64> {
        if self.is_closed() {
            return self.size();
        }
        self.total_length
            .map(|total| total.saturating_sub(self.first_byte_pos))
    }

    /// Whether the byte at `pos` falls inside the range
    pub fn contains(&self, pos: u64) -> bool {
        if pos < self.first_byte_pos {
            return false;
        }
        self.last_byte_pos.map_or(true, |last| pos <= last)
    }

    /// `Content-Range` value for a 206 response, e.g. `bytes 0-499/1000`.
    ///
    /// An open range ends at the last byte of `total`, and a closed range is
    /// cut there too.
    pub fn content_range(&self, total: u64) -> Option<String> {
        let end_of_content = total.checked_sub(1)?;
        if self.first_byte_pos > end_of_content {
            return None;
        }
        let last = self
            .last_byte_pos
            .map_or(end_of_content, |last| last.min(end_of_content));
        Some(format!("bytes {}-{}/{}", self.first_byte_pos, last, total))
    }
}

impl fmt::Display for ByteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-", self.first_byte_pos)?;
        if let Some(last) = self.last_byte_pos {
            write!(f, "{}", last)?;
        }
        Ok(())
    }
}

fn parse_pos(digits: &str) -> Option<u64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

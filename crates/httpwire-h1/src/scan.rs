//! Line scanning over raw buffers.
//!
//! Lines are strict-CRLF terminated. Each scan reports one of three
//! things: a complete line, "terminator not present yet" (`Ok(None)`;
//! the buffer may simply be a partial read, not an error), or a malformed
//! line ending. Bulk byte location goes through `memchr`; the decisions
//! agree with the scalar byte classes exactly.

use memchr::memchr2;

use crate::ParseError;

/// A complete line located in the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Line {
    /// Offset of the CR terminating the line's content.
    pub content_end: usize,
    /// Offset of the first byte after the CRLF.
    pub next: usize,
}

/// Locate the CRLF terminating the line that begins at `start`.
///
/// A bare LF, or a CR followed by anything but LF, is malformed. A CR as
/// the final buffer byte is not a verdict either way: the LF may still
/// arrive, so the scan reports "not found yet".
pub(crate) fn scan_line(buffer: &[u8], start: usize) -> Result<Option<Line>, ParseError> {
    if start >= buffer.len() {
        return Ok(None);
    }
    match memchr2(b'\r', b'\n', &buffer[start..]) {
        None => Ok(None),
        Some(rel) => {
            let at = start + rel;
            if buffer[at] == b'\n' {
                return Err(ParseError::InvalidLineEnding);
            }
            match buffer.get(at + 1) {
                None => Ok(None),
                Some(&b'\n') => Ok(Some(Line {
                    content_end: at,
                    next: at + 2,
                })),
                Some(_) => Err(ParseError::InvalidLineEnding),
            }
        }
    }
}

/// Probe for the empty line terminating a header block, resuming a prior
/// incomplete attempt.
///
/// `scanned` is the byte count the prior attempt had already examined.
/// Probing restarts three bytes earlier, since the four-byte terminator
/// may straddle the old buffer end; bytes before that point are not
/// re-examined. The walk applies the same strict CRLF rules as
/// [`scan_line`], so a malformed line ending surfaces here too.
pub(crate) fn probe_block_end(buffer: &[u8], scanned: usize) -> Result<Option<usize>, ParseError> {
    let mut at = scanned.min(buffer.len()).saturating_sub(3);
    // The restart point may land on the LF of a CRLF validated by the
    // prior attempt; step past it so the walk begins at a line boundary.
    if at > 0 && buffer[at] == b'\n' && buffer[at - 1] == b'\r' {
        at += 1;
    }
    loop {
        match scan_line(buffer, at)? {
            None => return Ok(None),
            Some(line) => {
                if line.content_end == at {
                    return Ok(Some(line.next));
                }
                at = line.next;
            }
        }
    }
}

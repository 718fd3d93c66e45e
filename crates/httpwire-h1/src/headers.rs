//! Header-block parsing.
//!
//! One header per line: a token name terminated by a colon, optional
//! whitespace, then the value up to the CRLF. An empty line ends the
//! block. The caller's `HeaderSet` capacity is the hard per-message bound
//! on header count, checked before a line is inspected; running into it is
//! malformed even when more bytes are available. Continuation lines
//! (obsolete folding) are rejected outright: silently merging them is a
//! known request-smuggling ambiguity.

use httpwire_core::{Header, HeaderSet, Span, is_field_value_char, is_ows};

use crate::ParseError;
use crate::request::token_run;
use crate::scan::scan_line;

/// Parse header lines beginning at `start` until the empty line.
///
/// Headers are appended to `headers` in wire order, duplicates kept.
/// Returns the offset one past the block's terminating CRLF, or
/// `Ok(None)` while the block's next terminator has not arrived. The set
/// is never cleared here; the caller resets it between messages.
pub(crate) fn parse_header_block(
    buffer: &[u8],
    start: usize,
    headers: &mut HeaderSet,
) -> Result<Option<usize>, ParseError> {
    let mut at = start;
    loop {
        // The line's first byte decides the block end, the resource
        // bound, and folding, in that order; none of the three waits for
        // the line's terminator.
        match buffer.get(at) {
            None => return Ok(None),
            Some(&b'\r') => match buffer.get(at + 1) {
                None => return Ok(None),
                Some(&b'\n') => return Ok(Some(at + 2)),
                Some(_) => return Err(ParseError::InvalidLineEnding),
            },
            Some(&b'\n') => return Err(ParseError::InvalidLineEnding),
            Some(_) => {}
        }
        if headers.is_full() {
            return Err(ParseError::TooManyHeaders);
        }
        if is_ows(buffer[at]) {
            return Err(ParseError::ObsoleteLineFolding);
        }

        let Some(line) = scan_line(buffer, at)? else {
            return Ok(None);
        };
        let content = &buffer[at..line.content_end];

        let name_len = token_run(content);
        if name_len == 0 {
            return Err(ParseError::InvalidHeaderName);
        }
        if content.get(name_len) != Some(&b':') {
            return Err(ParseError::InvalidHeaderName);
        }

        let mut value_start = name_len + 1;
        while value_start < content.len() && is_ows(content[value_start]) {
            value_start += 1;
        }
        let mut value_end = content.len();
        while value_end > value_start && is_ows(content[value_end - 1]) {
            value_end -= 1;
        }
        let value = &content[value_start..value_end];
        if !value.iter().all(|&b| is_field_value_char(b)) {
            return Err(ParseError::InvalidHeaderValue);
        }

        headers.push(Header {
            name: Span::new(at, name_len),
            value: Span::new(at + value_start, value_end - value_start),
        })?;

        at = line.next;
    }
}

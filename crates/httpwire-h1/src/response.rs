//! Status-line parsing.
//!
//! Grammar: `HTTP/1.` plus a minor digit of `0` or `1`, single space,
//! exactly three ASCII digits, then either the CRLF directly (empty
//! reason) or a single space and the reason phrase. The phrase may be
//! empty and may contain any byte except CR and LF.

use httpwire_core::{Span, StatusLine};

use crate::ParseError;
use crate::request::parse_version;
use crate::scan::scan_line;

const VERSION_LEN: usize = "HTTP/1.x".len();

/// Parse the status line beginning at `start`.
///
/// Returns the parsed line and the offset of the first header byte, or
/// `Ok(None)` while the line's terminator has not arrived.
pub(crate) fn parse_status_line(
    buffer: &[u8],
    start: usize,
) -> Result<Option<(StatusLine, usize)>, ParseError> {
    let Some(line) = scan_line(buffer, start)? else {
        return Ok(None);
    };
    let content = &buffer[start..line.content_end];

    if content.len() < VERSION_LEN {
        return Err(ParseError::InvalidVersion);
    }
    let minor_version = parse_version(&content[..VERSION_LEN])?;

    let rest = &content[VERSION_LEN..];
    if rest.first() != Some(&b' ') {
        return Err(ParseError::InvalidStatusCode);
    }
    let rest = &rest[1..];
    if rest.len() < 3 {
        return Err(ParseError::InvalidStatusCode);
    }
    let code = status_code(&rest[..3])?;

    // Offset of the byte after the three digits, relative to the line.
    let digits_end = VERSION_LEN + 1 + 3;
    let reason = match content.get(digits_end) {
        // The line ends right after the code: empty reason.
        None => Span::new(start + digits_end, 0),
        Some(&b' ') => Span::new(start + digits_end + 1, content.len() - digits_end - 1),
        Some(_) => return Err(ParseError::InvalidStatusCode),
    };

    let parsed = StatusLine::new(minor_version, code, reason);
    Ok(Some((parsed, line.next)))
}

/// Exactly three ASCII digits; anything else is malformed.
fn status_code(digits: &[u8]) -> Result<u16, ParseError> {
    let mut code = 0u16;
    for &byte in digits {
        if !byte.is_ascii_digit() {
            return Err(ParseError::InvalidStatusCode);
        }
        code = code * 10 + u16::from(byte - b'0');
    }
    Ok(code)
}

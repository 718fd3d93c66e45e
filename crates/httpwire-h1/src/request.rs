//! Request-line parsing.
//!
//! Grammar: method token, single space, opaque request-target, single
//! space, `HTTP/1.` plus a minor digit of `0` or `1`, CRLF. Deviations
//! (missing or doubled separators, any other version literal) are
//! malformed; a missing terminator is incomplete, never an error.

use httpwire_core::{RequestLine, Span, is_target_char, is_token_char};

use crate::ParseError;
use crate::scan::scan_line;

/// Parse the request line beginning at `start`.
///
/// Returns the parsed line and the offset of the first header byte, or
/// `Ok(None)` while the line's terminator has not arrived.
pub(crate) fn parse_request_line(
    buffer: &[u8],
    start: usize,
) -> Result<Option<(RequestLine, usize)>, ParseError> {
    let Some(line) = scan_line(buffer, start)? else {
        return Ok(None);
    };
    let content = &buffer[start..line.content_end];

    let method_len = token_run(content);
    if method_len == 0 {
        return Err(ParseError::InvalidMethod);
    }
    if content.get(method_len) != Some(&b' ') {
        return Err(ParseError::InvalidMethod);
    }

    let target_at = method_len + 1;
    let rest = &content[target_at..];
    let Some(target_len) = rest.iter().position(|&b| b == b' ') else {
        // No second separator; the version never appears on this line.
        return Err(ParseError::InvalidVersion);
    };
    if target_len == 0 {
        return Err(ParseError::InvalidTarget);
    }
    let target = &rest[..target_len];
    if !target.iter().all(|&b| is_target_char(b)) {
        return Err(ParseError::InvalidTarget);
    }

    let minor_version = parse_version(&rest[target_len + 1..])?;

    let parsed = RequestLine::new(
        Span::new(start, method_len),
        Span::new(start + target_at, target_len),
        minor_version,
    );
    Ok(Some((parsed, line.next)))
}

/// Length of the leading token-character run.
pub(crate) fn token_run(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .position(|&b| !is_token_char(b))
        .unwrap_or(bytes.len())
}

/// Expect exactly the literal `HTTP/1.` followed by `0` or `1`.
pub(crate) fn parse_version(bytes: &[u8]) -> Result<u8, ParseError> {
    if bytes.len() != 8 || &bytes[..7] != b"HTTP/1." {
        return Err(ParseError::InvalidVersion);
    }
    match bytes[7] {
        b'0' => Ok(0),
        b'1' => Ok(1),
        _ => Err(ParseError::InvalidVersion),
    }
}

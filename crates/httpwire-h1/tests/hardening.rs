//! Hostile-input tests: line-ending tricks, control-byte injection, and
//! resource exhaustion at the line/header layer.

use httpwire_core::HeaderSet;
use httpwire_h1::{ParseError, ParseOutcome, Parser, parse_request};

fn parse(buffer: &[u8]) -> ParseOutcome<httpwire_core::RequestLine> {
    let mut headers = HeaderSet::with_capacity(32);
    parse_request(buffer, 0, &mut headers)
}

fn assert_malformed(buffer: &[u8], expected: ParseError) {
    let outcome = parse(buffer);
    assert_eq!(
        outcome,
        ParseOutcome::Malformed(expected),
        "input {:?}",
        String::from_utf8_lossy(buffer)
    );
}

// ============================================================================
// 1. Line-ending strictness
// ============================================================================

/// LF-only messages are accepted by lenient parsers and refused by strict
/// ones; disagreement between the two is a smuggling primitive.
#[test]
fn bare_lf_request_line() {
    assert_malformed(b"GET / HTTP/1.1\nHost: h\r\n\r\n", ParseError::InvalidLineEnding);
}

#[test]
fn bare_lf_header_line() {
    assert_malformed(b"GET / HTTP/1.1\r\nHost: h\n\r\n", ParseError::InvalidLineEnding);
}

#[test]
fn bare_lf_terminator() {
    assert_malformed(b"GET / HTTP/1.1\r\nHost: h\r\n\n", ParseError::InvalidLineEnding);
}

/// A CR that is not immediately followed by LF cannot be part of any
/// line ending and must not end up inside a value.
#[test]
fn cr_injection_into_value() {
    assert_malformed(
        b"GET / HTTP/1.1\r\nHost: a\rSet-Cookie: x\r\n\r\n",
        ParseError::InvalidLineEnding,
    );
}

// ============================================================================
// 2. Obsolete folding
// ============================================================================

/// A folded continuation would silently extend the previous value if it
/// were merged; different parsers disagree on the merge, so it is refused.
#[test]
fn folded_continuation_line() {
    assert_malformed(
        b"GET / HTTP/1.1\r\nTransfer-Encoding: chunked\r\n chunked\r\n\r\n",
        ParseError::ObsoleteLineFolding,
    );
}

#[test]
fn tab_folded_continuation_line() {
    assert_malformed(
        b"GET / HTTP/1.1\r\nX: 1\r\n\t2\r\n\r\n",
        ParseError::ObsoleteLineFolding,
    );
}

// ============================================================================
// 3. Header-name surface
// ============================================================================

/// Whitespace between name and colon lets two parsers attribute the
/// header to different names.
#[test]
fn space_before_colon() {
    assert_malformed(
        b"GET / HTTP/1.1\r\nTransfer-Encoding : chunked\r\n\r\n",
        ParseError::InvalidHeaderName,
    );
}

#[test]
fn empty_header_name() {
    assert_malformed(b"GET / HTTP/1.1\r\n: v\r\n\r\n", ParseError::InvalidHeaderName);
}

#[test]
fn separator_bytes_in_name() {
    assert_malformed(
        b"GET / HTTP/1.1\r\nX(comment): v\r\n\r\n",
        ParseError::InvalidHeaderName,
    );
    assert_malformed(
        b"GET / HTTP/1.1\r\nX\"quoted\": v\r\n\r\n",
        ParseError::InvalidHeaderName,
    );
}

#[test]
fn high_byte_in_name() {
    assert_malformed(
        b"GET / HTTP/1.1\r\nX-\xc3\xa9: v\r\n\r\n",
        ParseError::InvalidHeaderName,
    );
}

// ============================================================================
// 4. Control bytes
// ============================================================================

#[test]
fn nul_in_target() {
    assert_malformed(b"GET /\x00 HTTP/1.1\r\n\r\n", ParseError::InvalidTarget);
}

#[test]
fn nul_and_del_in_value() {
    assert_malformed(b"GET / HTTP/1.1\r\nX: a\x00\r\n\r\n", ParseError::InvalidHeaderValue);
    assert_malformed(b"GET / HTTP/1.1\r\nX: a\x7f\r\n\r\n", ParseError::InvalidHeaderValue);
}

#[test]
fn escape_byte_in_value() {
    assert_malformed(b"GET / HTTP/1.1\r\nX: \x1b[31m\r\n\r\n", ParseError::InvalidHeaderValue);
}

// ============================================================================
// 5. Resource exhaustion
// ============================================================================

/// The header bound is a hard stop, not a truncation: the message is
/// refused outright however well-formed the excess headers are.
#[test]
fn header_flood_is_refused_at_the_bound() {
    let mut buffer = b"GET / HTTP/1.1\r\n".to_vec();
    for i in 0..200 {
        buffer.extend_from_slice(format!("X-Flood-{i}: {i}\r\n").as_bytes());
    }
    buffer.extend_from_slice(b"\r\n");

    let mut parser = Parser::with_max_headers(64).unwrap();
    assert_eq!(
        parser.parse_request(&buffer, 0),
        ParseOutcome::Malformed(ParseError::TooManyHeaders)
    );
}

/// The bound holds even when the flood never terminates its block: the
/// parser gives up at the bound rather than waiting for more bytes.
#[test]
fn unterminated_header_flood_is_refused() {
    let mut buffer = b"GET / HTTP/1.1\r\n".to_vec();
    for i in 0..100 {
        buffer.extend_from_slice(format!("X-Flood-{i}: {i}\r\n").as_bytes());
    }
    // No terminating empty line.

    let mut parser = Parser::with_max_headers(16).unwrap();
    assert_eq!(
        parser.parse_request(&buffer, 0),
        ParseOutcome::Malformed(ParseError::TooManyHeaders)
    );
}

// ============================================================================
// 6. Request-line surface
// ============================================================================

#[test]
fn whitespace_tricks_in_request_line() {
    assert_malformed(b"GET\t/ HTTP/1.1\r\n\r\n", ParseError::InvalidMethod);
    assert_malformed(b"GET / \tHTTP/1.1\r\n\r\n", ParseError::InvalidVersion);
    assert_malformed(b" GET / HTTP/1.1\r\n\r\n", ParseError::InvalidMethod);
}

#[test]
fn version_smuggling_variants() {
    assert_malformed(b"GET / HTTP/1.1x\r\n\r\n", ParseError::InvalidVersion);
    assert_malformed(b"GET / HTTP/01.1\r\n\r\n", ParseError::InvalidVersion);
    assert_malformed(b"GET / HTTP/1.10\r\n\r\n", ParseError::InvalidVersion);
}

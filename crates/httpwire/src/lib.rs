//! Incremental, zero-copy HTTP/1.x request and response parsing.
//!
//! httpwire turns raw HTTP/1.x byte buffers (request lines, status
//! lines, and header blocks) into structured views that borrow from the
//! caller's buffer:
//!
//! - **Zero-copy** — every parsed token is a [`Span`] into the input;
//!   nothing is copied or retained
//! - **Incremental** — a partial socket read is a first-class outcome,
//!   distinct from malformed input, and retries skip work already done
//! - **Bounded** — header storage is fixed at construction, so a message
//!   cannot grow it
//! - **Strict** — CRLF-only line endings and rejected obsolete folding
//!   close off request-smuggling ambiguities
//!
//! # Quick Start
//!
//! ```ignore
//! use httpwire::prelude::*;
//!
//! let mut parser = Parser::new();
//! let buffer = b"GET /items/42 HTTP/1.1\r\nHost: example.com\r\n\r\n";
//!
//! match parser.parse_request(buffer, 0) {
//!     ParseOutcome::Complete { consumed, line } => {
//!         assert_eq!(line.method_bytes(buffer), b"GET");
//!         for header in parser.headers().resolved(buffer) {
//!             // name/value are borrowed from `buffer`
//!         }
//!     }
//!     ParseOutcome::Incomplete { scanned } => { /* read more, retry with `scanned` */ }
//!     ParseOutcome::Malformed(reason) => { /* close the connection */ }
//! }
//! ```
//!
//! # Design Philosophy
//!
//! 1. **No hidden state** — an incomplete parse leaves nothing behind; the
//!    caller holds one integer hint and re-invokes
//! 2. **Caller-owned resources** — buffers and header storage belong to the
//!    connection, not the parser
//! 3. **Two failure kinds only** — malformed (final) and incomplete
//!    (retryable); neither is ever raised as a panic
//!
//! # Crate Structure
//!
//! - [`httpwire_core`] — spans, header storage, byte classification
//! - [`httpwire_h1`] — the line scanner, parsers, and resumable driver

#![forbid(unsafe_code)]

// Re-export crates
pub use httpwire_core as core;
pub use httpwire_h1 as h1;

// Re-export commonly used types
pub use httpwire_core::{
    ByteClass, CapacityExceeded, Header, HeaderRef, HeaderSet, RequestLine, Span, StatusLine,
    classify, is_field_value_char, is_ows, is_target_char, is_token_char, lowercase_name,
};
pub use httpwire_h1::{
    CODE_INCOMPLETE, CODE_MALFORMED, ConfigError, DEFAULT_MAX_HEADERS, MAX_HEADERS_LIMIT,
    ParseError, ParseOutcome, Parser, parse_headers, parse_request, parse_response,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{
        Header, HeaderRef, HeaderSet, ParseError, ParseOutcome, Parser, RequestLine, Span,
        StatusLine, parse_headers, parse_request, parse_response,
    };
}

//! Incremental, zero-copy HTTP/1.x parsing.
//!
//! This crate parses raw HTTP/1.x byte buffers (request lines, status
//! lines, and header blocks) into span-based views over the caller's
//! buffer. Buffers may be partial reads from a socket: insufficient input
//! is reported distinctly from malformed input, and a retry over a longer
//! buffer skips the completeness scan over bytes an earlier attempt
//! already examined.
//!
//! The parser is synchronous and CPU-only. It performs no I/O, decodes no
//! bodies, and attaches no meaning to individual headers; those concerns
//! belong to the read loop and marshalling layers around it.
//!
//! # Example
//!
//! ```ignore
//! use httpwire_h1::{ParseOutcome, Parser};
//!
//! let buffer = b"GET /x HTTP/1.1\r\nHost: h\r\n\r\n";
//! let mut parser = Parser::new();
//!
//! match parser.parse_request(buffer, 0) {
//!     ParseOutcome::Complete { consumed, line } => {
//!         assert_eq!(consumed, buffer.len());
//!         assert_eq!(line.method_bytes(buffer), b"GET");
//!         assert_eq!(line.target_bytes(buffer), b"/x");
//!     }
//!     ParseOutcome::Incomplete { scanned } => {
//!         // Read more bytes, then retry passing `scanned` back in.
//!     }
//!     ParseOutcome::Malformed(_) => {
//!         // Final for this message: drop it or close the connection.
//!     }
//! }
//! ```

#![deny(unsafe_code)]

mod error;
mod headers;
mod parser;
mod request;
mod response;
mod scan;

pub use error::{ConfigError, ParseError};
pub use parser::{
    CODE_INCOMPLETE, CODE_MALFORMED, DEFAULT_MAX_HEADERS, MAX_HEADERS_LIMIT, ParseOutcome, Parser,
    parse_headers, parse_request, parse_response,
};

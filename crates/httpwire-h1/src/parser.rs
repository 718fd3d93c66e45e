//! The resumable parse driver and the configured parser instance.
//!
//! One call attempts the whole state sequence in a single pass: first
//! line, then the header block, accumulating consumed bytes. Incomplete
//! is a return value rather than a state: no heap state survives between
//! calls. The caller re-invokes with a grown buffer and the previous
//! attempt's `scanned` count; that hint lets a resumed call probe for the
//! block terminator without re-walking bytes it has already examined, and
//! is only an optimization: parsing restarts from scratch either way.
//! Malformed is final for the message no matter how many bytes follow.

use httpwire_core::{HeaderSet, RequestLine, StatusLine};

use crate::error::{ConfigError, ParseError};
use crate::headers::parse_header_block;
use crate::request::parse_request_line;
use crate::response::parse_status_line;
use crate::scan::probe_block_end;

/// Boundary encoding of [`ParseOutcome::Malformed`].
pub const CODE_MALFORMED: isize = -1;
/// Boundary encoding of [`ParseOutcome::Incomplete`].
pub const CODE_INCOMPLETE: isize = -2;

/// Header capacity used by [`Parser::new`].
pub const DEFAULT_MAX_HEADERS: usize = 20;
/// Largest header capacity accepted by [`Parser::with_max_headers`].
pub const MAX_HEADERS_LIMIT: usize = 255;

/// Result of one parse attempt over one buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome<T> {
    /// The message head is fully parsed. `consumed` bytes were used, and
    /// the caller's `HeaderSet` now holds the header block.
    Complete {
        /// Bytes consumed up to and including the block's final CRLF.
        consumed: usize,
        /// The parsed request or status line.
        line: T,
    },
    /// More bytes are needed. Retry with a longer buffer, passing
    /// `scanned` back as `previously_scanned`.
    Incomplete {
        /// Bytes examined so far; a restart hint, not a requirement.
        scanned: usize,
    },
    /// The message violates the grammar. Final: no further bytes can
    /// repair it.
    Malformed(ParseError),
}

impl<T> ParseOutcome<T> {
    /// The integer encoding of the boundary contract: bytes consumed when
    /// complete, [`CODE_MALFORMED`], or [`CODE_INCOMPLETE`].
    #[must_use]
    pub fn code(&self) -> isize {
        match self {
            Self::Complete { consumed, .. } => isize::try_from(*consumed).unwrap_or(isize::MAX),
            Self::Malformed(_) => CODE_MALFORMED,
            Self::Incomplete { .. } => CODE_INCOMPLETE,
        }
    }

    /// Whether the message head was fully parsed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete { .. })
    }

    /// Whether more bytes are needed.
    #[must_use]
    pub fn is_incomplete(&self) -> bool {
        matches!(self, Self::Incomplete { .. })
    }

    /// Whether the message was rejected.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}

/// Parse a request head (request line plus header block) from `buffer`.
///
/// `previously_scanned` is the `scanned` value returned by a prior
/// incomplete attempt over a shorter prefix of the same message, or `0`
/// on the first attempt. Parsed headers are appended to `headers` and
/// persist only on a complete outcome: anything else returns the set to
/// its state at entry, so a retry passes the same set back unchanged.
/// The caller clears the set between messages.
#[must_use]
pub fn parse_request(
    buffer: &[u8],
    previously_scanned: usize,
    headers: &mut HeaderSet,
) -> ParseOutcome<RequestLine> {
    if let Some(outcome) = resume_shortcut(buffer, previously_scanned) {
        return outcome;
    }
    let (line, header_start) = match parse_request_line(buffer, 0) {
        Ok(Some(parsed)) => parsed,
        Ok(None) => return incomplete(buffer),
        Err(err) => return ParseOutcome::Malformed(err),
    };
    finish_headers(buffer, header_start, headers, line)
}

/// Parse a response head (status line plus header block) from `buffer`.
///
/// Same contract as [`parse_request`].
#[must_use]
pub fn parse_response(
    buffer: &[u8],
    previously_scanned: usize,
    headers: &mut HeaderSet,
) -> ParseOutcome<StatusLine> {
    if let Some(outcome) = resume_shortcut(buffer, previously_scanned) {
        return outcome;
    }
    let (line, header_start) = match parse_status_line(buffer, 0) {
        Ok(Some(parsed)) => parsed,
        Ok(None) => return incomplete(buffer),
        Err(err) => return ParseOutcome::Malformed(err),
    };
    finish_headers(buffer, header_start, headers, line)
}

/// Parse a bare header block with no first line, such as the trailer
/// block after a chunked body.
///
/// Same contract as [`parse_request`]; `consumed` covers the block's
/// terminating empty line.
#[must_use]
pub fn parse_headers(
    buffer: &[u8],
    previously_scanned: usize,
    headers: &mut HeaderSet,
) -> ParseOutcome<()> {
    if let Some(outcome) = resume_shortcut(buffer, previously_scanned) {
        return outcome;
    }
    finish_headers(buffer, 0, headers, ())
}

/// On resumed attempts, probe for the block terminator before parsing.
/// If it has not arrived, the attempt is incomplete without re-walking
/// already-examined bytes.
fn resume_shortcut<T>(buffer: &[u8], previously_scanned: usize) -> Option<ParseOutcome<T>> {
    if previously_scanned == 0 {
        return None;
    }
    match probe_block_end(buffer, previously_scanned) {
        Ok(Some(_)) => None,
        Ok(None) => Some(incomplete(buffer)),
        Err(err) => Some(ParseOutcome::Malformed(err)),
    }
}

fn finish_headers<T>(
    buffer: &[u8],
    header_start: usize,
    headers: &mut HeaderSet,
    line: T,
) -> ParseOutcome<T> {
    let base = headers.len();
    match parse_header_block(buffer, header_start, headers) {
        Ok(Some(consumed)) => ParseOutcome::Complete { consumed, line },
        Ok(None) => {
            headers.truncate(base);
            incomplete(buffer)
        }
        Err(err) => {
            headers.truncate(base);
            ParseOutcome::Malformed(err)
        }
    }
}

fn incomplete<T>(buffer: &[u8]) -> ParseOutcome<T> {
    ParseOutcome::Incomplete {
        scanned: buffer.len(),
    }
}

/// A configured parser owning the preallocated header storage reused for
/// one connection's messages.
///
/// One instance per connection (or per thread). Instances are fully
/// independent, with no sharing and no locking, and hold nothing between
/// messages beyond the storage allocation. Each call parses one message
/// head from scratch, so a caller retries an incomplete message by
/// growing its buffer and passing the previous attempt's `scanned` hint.
#[derive(Debug)]
pub struct Parser {
    headers: HeaderSet,
}

impl Parser {
    /// A parser with the default header capacity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            headers: HeaderSet::with_capacity(DEFAULT_MAX_HEADERS),
        }
    }

    /// A parser bounding each message at `max_headers` headers.
    ///
    /// # Errors
    ///
    /// `max_headers` must be in `1..=MAX_HEADERS_LIMIT`. Anything else is
    /// a configuration error, reported here and never per message.
    pub fn with_max_headers(max_headers: usize) -> Result<Self, ConfigError> {
        if max_headers == 0 {
            return Err(ConfigError::MaxHeadersZero);
        }
        if max_headers > MAX_HEADERS_LIMIT {
            return Err(ConfigError::MaxHeadersTooLarge);
        }
        Ok(Self {
            headers: HeaderSet::with_capacity(max_headers),
        })
    }

    /// The configured per-message header bound.
    #[must_use]
    pub fn max_headers(&self) -> usize {
        self.headers.capacity()
    }

    /// Headers from the most recent attempt. Only meaningful after a
    /// complete outcome.
    #[must_use]
    pub fn headers(&self) -> &HeaderSet {
        &self.headers
    }

    /// Parse a request head, clearing and refilling the owned storage.
    pub fn parse_request(
        &mut self,
        buffer: &[u8],
        previously_scanned: usize,
    ) -> ParseOutcome<RequestLine> {
        self.headers.clear();
        parse_request(buffer, previously_scanned, &mut self.headers)
    }

    /// Parse a response head, clearing and refilling the owned storage.
    pub fn parse_response(
        &mut self,
        buffer: &[u8],
        previously_scanned: usize,
    ) -> ParseOutcome<StatusLine> {
        self.headers.clear();
        parse_response(buffer, previously_scanned, &mut self.headers)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

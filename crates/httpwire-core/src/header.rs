//! Fixed-capacity, order-preserving header storage.

use std::borrow::Cow;
use std::fmt;

use crate::Span;

/// An ordered name/value pair of spans into the parse buffer.
///
/// The name span contains only token bytes, exactly as received (no case
/// folding). The value span has leading and trailing optional whitespace
/// already stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Span of the header name.
    pub name: Span,
    /// Span of the header value.
    pub value: Span,
}

impl Header {
    /// Resolve both spans against the buffer the header was parsed from.
    #[must_use]
    pub fn resolve<'b>(&self, buffer: &'b [u8]) -> HeaderRef<'b> {
        HeaderRef {
            name: self.name.slice(buffer),
            value: self.value.slice(buffer),
        }
    }
}

/// A header resolved to borrowed bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderRef<'b> {
    /// Name bytes, case preserved.
    pub name: &'b [u8],
    /// Value bytes, outer whitespace stripped.
    pub value: &'b [u8],
}

impl<'b> HeaderRef<'b> {
    /// The name as UTF-8. Token names are ASCII, so this succeeds for any
    /// header produced by the parser.
    #[must_use]
    pub fn name_str(&self) -> Option<&'b str> {
        std::str::from_utf8(self.name).ok()
    }

    /// The value as UTF-8, if valid.
    #[must_use]
    pub fn value_str(&self) -> Option<&'b str> {
        std::str::from_utf8(self.value).ok()
    }

    /// Case-insensitive name comparison.
    #[must_use]
    pub fn name_eq_ignore_case(&self, other: &str) -> bool {
        self.name.eq_ignore_ascii_case(other.as_bytes())
    }
}

/// Storage capacity was exhausted while appending a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityExceeded;

impl fmt::Display for CapacityExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "header capacity exceeded")
    }
}

impl std::error::Error for CapacityExceeded {}

/// Fixed-capacity header storage, wire order preserved.
///
/// Capacity is supplied once at construction and allocated up front; it is
/// the hard per-message bound on header count. Duplicate names are kept as
/// separate entries; no merging or de-duplication happens here.
///
/// The parser only ever appends within a single call. Reusing the set for
/// the next message on a connection requires the owner to call
/// [`clear`][Self::clear] first; prior contents are never dropped
/// implicitly.
#[derive(Debug, Clone)]
pub struct HeaderSet {
    entries: Vec<Header>,
    capacity: usize,
}

impl HeaderSet {
    /// Storage for at most `capacity` headers, allocated now.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// The fixed capacity supplied at construction.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of headers currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set holds no headers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the fixed capacity has been reached.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Append a header, failing once the fixed capacity is reached.
    pub fn push(&mut self, header: Header) -> Result<(), CapacityExceeded> {
        if self.is_full() {
            return Err(CapacityExceeded);
        }
        self.entries.push(header);
        Ok(())
    }

    /// Drop all entries. The allocation is retained for reuse.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Shorten the set to `len` entries, dropping later ones. No effect
    /// when the set is already that short.
    pub fn truncate(&mut self, len: usize) {
        self.entries.truncate(len);
    }

    /// The header at `index`, in wire order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Header> {
        self.entries.get(index)
    }

    /// The stored headers as a slice, in wire order.
    #[must_use]
    pub fn as_slice(&self) -> &[Header] {
        &self.entries
    }

    /// Iterate stored headers in wire order.
    pub fn iter(&self) -> std::slice::Iter<'_, Header> {
        self.entries.iter()
    }

    /// Iterate headers resolved against `buffer`, in wire order.
    pub fn resolved<'b>(&self, buffer: &'b [u8]) -> impl Iterator<Item = HeaderRef<'b>> {
        self.entries.iter().map(move |header| header.resolve(buffer))
    }

    /// First header whose name matches, case-insensitively.
    #[must_use]
    pub fn find<'b>(&self, name: &str, buffer: &'b [u8]) -> Option<HeaderRef<'b>> {
        self.resolved(buffer)
            .find(|header| header.name_eq_ignore_case(name))
    }

    /// All headers whose name matches, case-insensitively, in wire order.
    pub fn find_all<'b>(
        &self,
        name: &str,
        buffer: &'b [u8],
    ) -> impl Iterator<Item = HeaderRef<'b>> {
        self.resolved(buffer)
            .filter(move |header| header.name_eq_ignore_case(name))
    }
}

impl<'a> IntoIterator for &'a HeaderSet {
    type Item = &'a Header;
    type IntoIter = std::slice::Iter<'a, Header>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lowercase a header name for callers that index case-insensitively.
///
/// Returns the input borrowed when no byte needs to change. This is a
/// caller-side transform applied after a complete parse; the parser never
/// rewrites buffer bytes.
#[must_use]
pub fn lowercase_name(name: &[u8]) -> Cow<'_, [u8]> {
    if name.iter().any(u8::is_ascii_uppercase) {
        Cow::Owned(name.to_ascii_lowercase())
    } else {
        Cow::Borrowed(name)
    }
}

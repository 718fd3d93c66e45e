//! Core types for the httpwire parser.
//!
//! This crate provides the building blocks shared by the httpwire
//! workspace:
//!
//! - [`Span`] — offset/length views into caller-owned buffers
//! - [`Header`], [`HeaderSet`], [`HeaderRef`] — fixed-capacity,
//!   order-preserving header storage
//! - [`RequestLine`] and [`StatusLine`] — parsed first-line results
//! - [`classify`] and the byte predicates of the HTTP token grammar
//!
//! # Design Principles
//!
//! - Zero-copy: parsed tokens are spans, never owned copies
//! - Bounded resources: header storage is allocated once, up front
//! - No I/O and no shared state; every type is `Send + Sync`

#![forbid(unsafe_code)]

mod bytes;
mod header;
mod message;
mod span;

pub use bytes::{
    ByteClass, classify, is_field_value_char, is_ows, is_target_char, is_token_char,
};
pub use header::{CapacityExceeded, Header, HeaderRef, HeaderSet, lowercase_name};
pub use message::{RequestLine, StatusLine};
pub use span::Span;

//! Core types for the Diskrelay public-share relay.
//!
//! This crate provides the shared domain vocabulary used by the
//! resolver service and the HTTP gateway: validated share tokens,
//! share kinds, and the canonical public-share URL builder.

pub mod error;
pub mod share;

pub use error::ShareError;
pub use share::{ShareKind, ShareReference, ShareToken};

//! Shared formatting utilities: cached locale-aware date formatters and
//! human-readable duration helpers.
//!
//! [`DateFormatter`] is expensive to construct (pattern parsing, locale
//! resolution) and cheap to use, so call sites fetch shared instances from
//! a [`FormatterCache`] instead of constructing one per call.

pub mod cache;
pub mod duration;
pub mod error;
pub mod formatter;

pub use cache::{CacheStats, FormatterCache};
pub use error::FormatError;
pub use formatter::DateFormatter;

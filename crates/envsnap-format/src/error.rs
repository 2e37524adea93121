//! Error types for formatter construction.

/// Errors from the strict [`DateFormatter`](crate::DateFormatter)
/// constructor.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// The date format pattern contains an invalid specifier.
    #[error("invalid date format pattern: {pattern:?}")]
    InvalidPattern {
        /// The rejected pattern.
        pattern: String,
    },

    /// The locale identifier does not name a known locale.
    #[error("unknown locale identifier: {locale:?}")]
    UnknownLocale {
        /// The rejected identifier.
        locale: String,
    },
}

/// Result type for formatter construction.
pub type Result<T> = std::result::Result<T, FormatError>;

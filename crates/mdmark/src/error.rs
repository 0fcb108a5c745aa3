//! Error types for markup parsing.

use thiserror::Error;

/// Errors that can occur when parsing markup.
///
/// Both variants carry the unconsumed remainder of the input, so callers can
/// see exactly where parsing stopped. An unrecognized *name* (a color spec
/// or macro that matches no registered entry) is not an error: it degrades
/// to [`crate::Attribute::Unknown`] and renders unstyled.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// No rule matches at the current position although input remains.
    /// Typically an unterminated opener, e.g. `**unterminated`.
    #[error("no markup rule matches the remaining input: {0:?}")]
    Malformed(String),

    /// Macro expansion exceeded its budget without the buffer settling.
    #[error("macro expansion did not terminate; remaining input: {0:?}")]
    MacroOverflow(String),
}

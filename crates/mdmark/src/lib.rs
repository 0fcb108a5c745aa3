//! Markdown-style inline markup for terminal text.
//!
//! This crate parses a minimal Markdown dialect into a flat sequence of
//! styled text runs and renders them as ANSI escape sequences (or as plain
//! stripped text).
//!
//! # Markup grammar
//!
//! - `**bold**`, `//italics//`, `__underline__`, `` `reverse` ``,
//!   `~~strikethrough~~`
//! - `{{red}}text{{red}}` - foreground color span
//! - `{{white-red}}text{{white}}` - foreground + background; the closing
//!   delimiter repeats only the foreground (leaf) color name
//! - `{{ok}}text{{ok}}` - macro spans that expand to a canned nested-markup
//!   template before parsing (see [`macros::MACROS`])
//!
//! Styles nest structurally: inside `{{red}}outer **bold** tail{{red}}` the
//! bold run carries red *and* bold while the tail keeps only red.
//!
//! # Usage
//!
//! ```
//! let styled = mdmark::render("{{red}}a**b**c{{red}}", false).unwrap();
//! assert_eq!(styled, "\x1b[31ma\x1b[0m\x1b[31;1mb\x1b[0m\x1b[31mc\x1b[0m");
//!
//! let plain = mdmark::render("{{red}}a**b**c{{red}}", true).unwrap();
//! assert_eq!(plain, "abc");
//! ```

pub mod attr;
pub mod error;
pub mod macros;
mod parser;
mod render;
mod rules;
pub mod token;

// Re-export main types at crate root
pub use attr::{Attribute, Color, Format};
pub use error::MarkupError;
pub use macros::{MACROS, MacroTemplate};
pub use token::{ParsedMarkup, Token};

/// Parse a markup string and render it in one step.
///
/// With `text_only` the same structural parsing (and delimiter stripping)
/// happens, but every attribute is discarded at render time. Malformed
/// markup fails with [`MarkupError`] rather than producing a partial render.
pub fn render(input: &str, text_only: bool) -> Result<String, MarkupError> {
    Ok(ParsedMarkup::parse(input)?.render(text_only))
}

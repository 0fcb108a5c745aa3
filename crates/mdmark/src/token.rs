//! Parse results: leaf tokens and the [`ParsedMarkup`] container.

use crate::attr::Attribute;
use crate::error::MarkupError;
use crate::{parser, render};

/// A leaf run of plain text with the attributes of every enclosing span.
///
/// Tokens are produced only for unmatched plain-text spans; the
/// concatenation of all token texts equals the post-macro-expansion input
/// with the markup delimiters removed.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The plain text of this run.
    pub text: String,
    /// Attributes of the enclosing spans, in nesting order.
    pub attributes: Vec<Attribute>,
}

impl Token {
    pub fn new(text: impl Into<String>, attributes: Vec<Attribute>) -> Self {
        Self {
            text: text.into(),
            attributes,
        }
    }
}

/// The result of parsing a markup string: a flat token list.
///
/// # Examples
///
/// ```
/// use mdmark::ParsedMarkup;
///
/// let parsed = ParsedMarkup::parse("**Hello** World").unwrap();
/// assert_eq!(parsed.plain(), "Hello World");
/// assert_eq!(parsed.tokens().len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ParsedMarkup {
    tokens: Vec<Token>,
}

impl ParsedMarkup {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Parse markup text into its token list.
    pub fn parse(input: &str) -> Result<Self, MarkupError> {
        parser::parse(input)
    }

    /// The leaf tokens, in emission order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The plain text with all markup delimiters removed.
    pub fn plain(&self) -> String {
        self.tokens.iter().map(|token| token.text.as_str()).collect()
    }

    /// Returns true if no token carries any attribute.
    pub fn is_plain(&self) -> bool {
        self.tokens.iter().all(|token| token.attributes.is_empty())
    }

    /// Render the token list; see [`crate::render()`].
    pub fn render(&self, text_only: bool) -> String {
        render::render(&self.tokens, text_only)
    }
}

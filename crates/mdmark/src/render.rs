//! Renderer: token list → ANSI-escaped or plain string.
//!
//! Every styled run is wrapped in its own escape/reset pair; adjacent runs
//! are never coalesced even when they share attributes.

use crate::attr::Attribute;
use crate::token::Token;

const SEQ_START: &str = "\x1b[";
const RESET: &str = "\x1b[0m";

/// One renderer-side run: resolved SGR parameters plus verbatim text.
/// Created per token and consumed immediately.
struct Run<'a> {
    codes: Vec<u8>,
    text: &'a str,
}

/// Render tokens into a single string.
///
/// With `text_only` every attribute is discarded and the concatenated plain
/// text comes back. A token with no (resolvable) attributes is emitted raw,
/// with no escape sequence at all.
pub(crate) fn render(tokens: &[Token], text_only: bool) -> String {
    let runs = tokens.iter().map(|token| Run {
        codes: if text_only {
            Vec::new()
        } else {
            sgr_codes(&token.attributes)
        },
        text: &token.text,
    });

    let mut out = String::new();
    for run in runs {
        if run.codes.is_empty() {
            out.push_str(run.text);
        } else {
            let codes = run
                .codes
                .iter()
                .map(|code| code.to_string())
                .collect::<Vec<_>>()
                .join(";");
            out.push_str(&format!("{SEQ_START}{codes}m{}{RESET}", run.text));
        }
    }
    out
}

/// SGR parameters for an attribute stack, in stack order. Unknown
/// attributes resolve to nothing.
fn sgr_codes(attributes: &[Attribute]) -> Vec<u8> {
    attributes.iter().filter_map(Attribute::sgr).collect()
}

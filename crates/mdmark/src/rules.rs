//! The rule table: anchored matchers tried in priority order.
//!
//! Every matcher is anchored at the start of the work buffer. Dispatch
//! order defines priority: reverse/inline-code, italics, bold, underline,
//! strikethrough, one rule per color name, then the plain-text fallback.

use crate::attr::{Attribute, Color, Format};

/// Outcome of matching one rule at the start of the work buffer.
///
/// `len` is the total consumed length including delimiters, so the parse
/// loop always makes forward progress.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum RuleMatch<'a> {
    /// Plain text run (zero capturing groups); emits a leaf token.
    Text { text: &'a str, len: usize },
    /// Single-argument format span; the parser recurses into `inner`.
    Format {
        format: Format,
        inner: &'a str,
        len: usize,
    },
    /// Two-argument color span; `spec` is decomposed into attributes and the
    /// parser recurses into `inner`.
    Color {
        spec: &'a str,
        inner: &'a str,
        len: usize,
    },
}

/// Format span rules in priority order (the reverse rule runs first and the
/// strikethrough rule has extra whitespace constraints; both are separate).
const FORMAT_RULES: [(Format, &str); 3] = [
    (Format::Italics, "//"),
    (Format::Bold, "**"),
    (Format::Underline, "__"),
];

/// Sequences that open a structural rule. A buffer starting with one of
/// these is never plain text, which is what makes an opener without a valid
/// closer a hard parse failure instead of silently degraded output.
const DELIMITERS: [&str; 6] = ["`", "//", "**", "__", "~~", "{{"];

/// Try every rule against the start of `buffer`; first match wins.
pub(crate) fn match_at(buffer: &str) -> Option<RuleMatch<'_>> {
    if let Some(matched) = reverse_span(buffer) {
        return Some(matched);
    }
    for (format, delimiter) in FORMAT_RULES {
        if let Some(matched) = format_span(format, delimiter, buffer) {
            return Some(matched);
        }
    }
    if let Some(matched) = strikethrough_span(buffer) {
        return Some(matched);
    }
    for color in Color::ALL {
        if let Some(matched) = color_span(color, buffer) {
            return Some(matched);
        }
    }
    text_run(buffer)
}

/// Decompose the first group of a color span into attributes.
///
/// A spec containing `-` splits into foreground and background, but only
/// when *both* halves name registered colors; otherwise the whole spec is
/// tried as a single color name. Unrecognized names degrade to
/// [`Attribute::Unknown`] rather than failing the parse.
pub(crate) fn decompose_spec(spec: &str) -> Vec<Attribute> {
    if let Some((fg, bg)) = spec.split_once('-') {
        if let (Some(fg), Some(bg)) = (Color::parse(fg), Color::parse(bg)) {
            return vec![Attribute::Fg(fg), Attribute::Bg(bg)];
        }
    }
    match Color::parse(spec) {
        Some(color) => vec![Attribute::Fg(color)],
        None => vec![Attribute::Unknown(spec.to_string())],
    }
}

/// Inline-code / reverse-video span: a run of backticks, whitespace-trimmed
/// inner text, and a closing run of equal length not followed by another
/// backtick.
fn reverse_span(buffer: &str) -> Option<RuleMatch<'_>> {
    let ticks = buffer.bytes().take_while(|&b| b == b'`').count();
    if ticks == 0 {
        return None;
    }
    let (opener, rest) = buffer.split_at(ticks);

    let mut from = 0;
    loop {
        let at = from + rest[from..].find(opener)?;
        if rest.as_bytes().get(at + ticks) == Some(&b'`') {
            from = at + 1;
            continue;
        }
        let inner = rest[..at].trim();
        if inner.is_empty() || inner.ends_with('`') {
            from = at + 1;
            continue;
        }
        return Some(RuleMatch::Format {
            format: Format::Reverse,
            inner,
            len: ticks + at + ticks,
        });
    }
}

/// Symmetric two-character format span, e.g. `**inner**`. The closer must
/// not be followed by another delimiter character, so `**a***` closes on
/// the final pair.
fn format_span<'a>(
    format: Format,
    delimiter: &'static str,
    buffer: &'a str,
) -> Option<RuleMatch<'a>> {
    let rest = buffer.strip_prefix(delimiter)?;
    let delimiter_byte = delimiter.as_bytes()[0];

    let mut from = 0;
    loop {
        let at = from + rest[from..].find(delimiter)?;
        if at == 0 {
            // inner text must be non-empty
            from = 1;
            continue;
        }
        if rest.as_bytes().get(at + delimiter.len()) == Some(&delimiter_byte) {
            from = at + 1;
            continue;
        }
        let inner = &rest[..at];
        return Some(RuleMatch::Format {
            format,
            inner,
            len: delimiter.len() + at + delimiter.len(),
        });
    }
}

/// `~~inner~~` where the inner text must start and end with non-whitespace.
fn strikethrough_span(buffer: &str) -> Option<RuleMatch<'_>> {
    let rest = buffer.strip_prefix("~~")?;
    if !rest.chars().next().is_some_and(|c| !c.is_whitespace()) {
        return None;
    }

    let mut from = 0;
    loop {
        let at = from + rest[from..].find("~~")?;
        if at == 0 {
            from = 1;
            continue;
        }
        let inner = &rest[..at];
        if inner.ends_with(char::is_whitespace) {
            from = at + 1;
            continue;
        }
        return Some(RuleMatch::Format {
            format: Format::Strikethrough,
            inner,
            len: 2 + at + 2,
        });
    }
}

/// Two-group color span `{{spec}}inner{{name}}`, one rule instance per
/// color name. The closer repeats only the leaf color name, so a composite
/// `{{white-red}}` span closes on `{{white}}`.
fn color_span(color: Color, buffer: &str) -> Option<RuleMatch<'_>> {
    let rest = buffer.strip_prefix("{{")?;
    let spec_end = rest.find("}}")?;
    if spec_end == 0 {
        return None;
    }
    let spec = &rest[..spec_end];
    let body = &rest[spec_end + 2..];

    let closer = color.closing_tag();
    let at = body.find(closer)?;
    if at == 0 {
        return None;
    }
    let inner = &body[..at];
    Some(RuleMatch::Color {
        spec,
        inner,
        len: 2 + spec_end + 2 + at + closer.len(),
    })
}

fn is_delimiter_start(s: &str) -> bool {
    DELIMITERS.iter().any(|delimiter| s.starts_with(delimiter))
}

/// Fallback rule: plain text up to the next delimiter start or end of
/// input. Declines to match when the buffer already starts with a delimiter
/// sequence.
fn text_run(buffer: &str) -> Option<RuleMatch<'_>> {
    if buffer.is_empty() || is_delimiter_start(buffer) {
        return None;
    }
    let end = buffer
        .char_indices()
        .find(|(at, _)| is_delimiter_start(&buffer[*at..]))
        .map_or(buffer.len(), |(at, _)| at);
    Some(RuleMatch::Text {
        text: &buffer[..end],
        len: end,
    })
}

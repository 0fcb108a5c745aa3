//! Macro templates: named markup shorthands expanded before structural
//! parsing.
//!
//! A macro span `{{ok}}done{{ok}}` is rewritten in the work buffer to its
//! template with the captured content substituted, and the parse loop
//! restarts against the rewritten buffer. Expansion output may itself
//! contain further macros or structural markup.

/// A named markup shorthand. The template contains exactly one `%s`
/// placeholder for the captured span content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MacroTemplate {
    pub name: &'static str,
    pub template: &'static str,
}

/// Registered macros, in declaration order. Expansion tries them in this
/// order, so inputs where several macros could match resolve
/// deterministically.
pub const MACROS: [MacroTemplate; 4] = [
    MacroTemplate {
        name: "ok",
        template: "{{green}}**%s**{{green}}",
    },
    MacroTemplate {
        name: "failed",
        template: "{{red}}**%s**{{red}}",
    },
    MacroTemplate {
        name: "warn",
        template: "{{red}}**%s**{{red}}",
    },
    MacroTemplate {
        name: "error",
        template: "{{white-red}}**%s**{{white}}",
    },
];

impl MacroTemplate {
    /// The `{{name}}` delimiter of this macro's span.
    fn tag(&self) -> String {
        format!("{{{{{}}}}}", self.name)
    }

    /// Substitute `content` into the template.
    pub fn expand(&self, content: &str) -> String {
        self.template.replacen("%s", content, 1)
    }

    /// Anchored match of `{{name}}content{{name}}` at the start of
    /// `buffer`; returns the captured content and the rest of the buffer.
    fn match_at<'a>(&self, buffer: &'a str) -> Option<(&'a str, &'a str)> {
        let tag = self.tag();
        let rest = buffer.strip_prefix(tag.as_str())?;
        let at = rest.find(tag.as_str())?;
        if at == 0 {
            return None;
        }
        Some((&rest[..at], &rest[at + tag.len()..]))
    }
}

/// Rewrite the first macro span matching at the start of `buffer`, if any.
pub(crate) fn expand_at(buffer: &str) -> Option<String> {
    for template in &MACROS {
        if let Some((content, rest)) = template.match_at(buffer) {
            let mut expanded = template.expand(content);
            expanded.push_str(rest);
            return Some(expanded);
        }
    }
    None
}

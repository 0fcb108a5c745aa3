//! Inline markup for colored terminal output.
//!
//! `mdcolor` bundles two crates:
//!
//! - [`mdmark`] parses wiki-style inline markup (`**bold**`, `//italics//`,
//!   `__underline__`, `` `reverse` ``, `~~strikethrough~~`, `{{color}}` spans
//!   and status macros like `{{ok}}`) into styled text runs and renders them
//!   as ANSI SGR sequences or stripped plain text.
//! - [`mdlog`] plugs that markup into the [`log`](https://docs.rs/log) facade,
//!   colorizing level labels and record metadata.
//!
//! ```
//! let colored = mdcolor::render("{{green}}**ok**{{green}}", false)?;
//! assert_eq!(colored, "\x1b[32;1mok\x1b[0m");
//!
//! let plain = mdcolor::render("{{green}}**ok**{{green}}", true)?;
//! assert_eq!(plain, "ok");
//! # Ok::<(), mdcolor::MarkupError>(())
//! ```

pub use mdlog::{Formatter, MarkupLogger, blank_line, init, init_with_level, log_start};
pub use mdmark::{Attribute, Color, Format, MarkupError, ParsedMarkup, Token, render};

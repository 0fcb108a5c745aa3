//! Record formatting: markup-driven log lines.
//!
//! Layout: `<ts> - [<target>][<level>] <message> (<file>:<line>)` with the
//! target and file rendered bold, the level through its per-level template,
//! and the message parsed as markup. With colors off the very same parsing
//! happens and the markup is stripped instead of styled.

use chrono::Local;
use log::{Level, Record};
use mdmark::MarkupError;

use crate::templates::{BANNER, BLANK, LOG_START, level_template};

/// Formats log records through the markup parser.
#[derive(Clone, Copy, Debug)]
pub struct Formatter {
    use_color: bool,
}

impl Formatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    /// Whether this formatter emits ANSI styling.
    pub fn use_color(&self) -> bool {
        self.use_color
    }

    /// Render one record into its final output line.
    pub fn format(&self, record: &Record<'_>) -> Result<String, MarkupError> {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        self.line(
            &timestamp,
            record.level(),
            record.target(),
            record.file(),
            record.line(),
            &record.args().to_string(),
        )
    }

    fn line(
        &self,
        timestamp: &str,
        level: Level,
        target: &str,
        file: Option<&str>,
        line: Option<u32>,
        message: &str,
    ) -> Result<String, MarkupError> {
        // Sentinels are substituted before anything reaches the parser.
        if message.contains(BLANK) {
            return Ok(String::new());
        }
        if message.contains(LOG_START) {
            return mdmark::render(BANNER, !self.use_color);
        }

        let text_only = !self.use_color;
        let level_label = if self.use_color {
            mdmark::render(&level_template(level).replacen("%s", level.as_str(), 1), false)?
        } else {
            level.as_str().to_string()
        };
        let target_label = mdmark::render(&format!("**{target}**"), text_only)?;
        let message = mdmark::render(message, text_only)?;
        let location = match (file, line) {
            (Some(file), Some(line)) => {
                let file = mdmark::render(&format!("**{file}**"), text_only)?;
                format!(" ({file}:{line})")
            }
            _ => String::new(),
        };

        Ok(format!(
            "{timestamp} - [{target_label}][{level_label}] {message}{location}"
        ))
    }
}

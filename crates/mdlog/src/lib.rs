//! Markup-colorized logging on top of the `log` facade.
//!
//! Messages (and the fixed record scaffold) are written in the `mdmark`
//! markup dialect; every record is parsed and rendered per call. With
//! colors off the markup is stripped instead of styled, so log output stays
//! clean on non-capable targets.
//!
//! ```no_run
//! mdlog::init(true);
//! mdlog::log_start();
//! // Markup braces collide with format-string escapes, so pass markup
//! // messages as arguments rather than inside the format literal.
//! log::info!("{}", "deploy {{ok}}succeeded{{ok}} in **2.3s**");
//! ```

pub mod format;
pub mod templates;

pub use format::Formatter;
pub use templates::{BLANK, LOG_START, level_template};

use log::{LevelFilter, Metadata, Record};

/// Logger that renders every record through [`Formatter`] to stderr.
pub struct MarkupLogger {
    formatter: Formatter,
}

impl MarkupLogger {
    pub fn new(use_color: bool) -> Self {
        Self {
            formatter: Formatter::new(use_color),
        }
    }
}

impl log::Log for MarkupLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        match self.formatter.format(record) {
            Ok(line) => eprintln!("{line}"),
            // A markup typo in a message must not take the host down.
            Err(err) => eprintln!("{} {} (markup error: {err})", record.level(), record.args()),
        }
    }

    fn flush(&self) {}
}

/// Install the markup logger with the default `Debug` filter.
pub fn init(use_color: bool) {
    init_with_level(use_color, LevelFilter::Debug);
}

/// Install the markup logger with an explicit level filter.
pub fn init_with_level(use_color: bool, filter: LevelFilter) {
    let logger = MarkupLogger::new(use_color);
    log::set_boxed_logger(Box::new(logger)).unwrap();
    log::set_max_level(filter);
}

/// Emit the start-of-log banner (via the [`LOG_START`] sentinel).
pub fn log_start() {
    log::info!("{LOG_START}");
}

/// Emit an intentionally blank output line (via the [`BLANK`] sentinel).
pub fn blank_line() {
    log::info!("{BLANK}");
}

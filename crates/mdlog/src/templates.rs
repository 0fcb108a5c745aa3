//! Per-level markup templates and the message sentinels.

use log::Level;

/// Message sentinel for an intentionally blank output line.
pub const BLANK: &str = "{{blank}}";

/// Message sentinel replaced by the start-of-log banner.
pub const LOG_START: &str = "{{logstart}}";

/// Markup template applied to a level label when colorization is on.
/// `%s` receives the upper-case level name.
pub fn level_template(level: Level) -> &'static str {
    match level {
        Level::Error => "**{{white-red}}%s{{white}}**",
        Level::Warn => "{{yellow}}%s{{yellow}}",
        Level::Info => "**{{blue}}%s{{blue}}**",
        Level::Debug => "**{{white-blue}}%s{{white}}**",
        Level::Trace => "{{cyan}}%s{{cyan}}",
    }
}

/// Banner substituted for the [`LOG_START`] sentinel. Runs through the
/// markup parser like any other message, so the `{{failed}}` macro styles
/// the title line.
pub(crate) const BANNER: &str = "\n\n \
##########################################################\n\
##                                                        ##\n\
##            {{failed}}LOGGING STARTING...{{failed}}                      ##\n\
##                                                        ##\n \
##########################################################\n\n\n";

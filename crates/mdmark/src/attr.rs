//! Attribute value types: text formats and the eight-color palette.
//!
//! Attributes are pure value identifiers. The parser accumulates them on a
//! stack while descending into nested spans; the renderer maps each one to
//! its SGR parameter.

/// A text format modifier with a fixed SGR code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Bold,
    Italics,
    Underline,
    Reverse,
    Strikethrough,
}

impl Format {
    /// The SGR parameter for this format.
    pub fn code(self) -> u8 {
        match self {
            Format::Bold => 1,
            Format::Italics => 3,
            Format::Underline => 4,
            Format::Reverse => 7,
            Format::Strikethrough => 9,
        }
    }
}

/// One of the eight named terminal colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// Every registered color, in palette order. Also the dispatch order of
    /// the per-color span rules.
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// Palette index; foreground SGR is `30 + index`, background `40 + index`.
    pub fn index(self) -> u8 {
        match self {
            Color::Black => 0,
            Color::Red => 1,
            Color::Green => 2,
            Color::Yellow => 3,
            Color::Blue => 4,
            Color::Magenta => 5,
            Color::Cyan => 6,
            Color::White => 7,
        }
    }

    /// The markup name of this color.
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
        }
    }

    /// The closing delimiter of this color's span rule, e.g. `{{red}}`.
    pub(crate) fn closing_tag(self) -> &'static str {
        match self {
            Color::Black => "{{black}}",
            Color::Red => "{{red}}",
            Color::Green => "{{green}}",
            Color::Yellow => "{{yellow}}",
            Color::Blue => "{{blue}}",
            Color::Magenta => "{{magenta}}",
            Color::Cyan => "{{cyan}}",
            Color::White => "{{white}}",
        }
    }

    /// Look up a registered color by its markup name.
    pub fn parse(name: &str) -> Option<Color> {
        Color::ALL.into_iter().find(|color| color.name() == name)
    }
}

/// A single style attribute carried by a parsed token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Attribute {
    /// A text format modifier.
    Format(Format),
    /// A foreground color.
    Fg(Color),
    /// A background color.
    Bg(Color),
    /// A color spec that names no registered color. Kept so the token still
    /// records what the markup said; contributes no SGR code.
    Unknown(String),
}

impl Attribute {
    /// The SGR parameter for this attribute, if it has one.
    pub fn sgr(&self) -> Option<u8> {
        match self {
            Attribute::Format(format) => Some(format.code()),
            Attribute::Fg(color) => Some(30 + color.index()),
            Attribute::Bg(color) => Some(40 + color.index()),
            Attribute::Unknown(_) => None,
        }
    }
}

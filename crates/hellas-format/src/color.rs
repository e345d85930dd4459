//! Named ANSI colors
//!
//! Escape sequences only render on terminals that understand ANSI codes.

use crate::error::FormatError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Sequence restoring the terminal's default attributes
pub const RESET: &str = "\x1b[0m";

/// Named console color
///
/// Each color is a `(style, code)` pair: style `1` selects the bright/bold
/// variant, `code` the SGR foreground color. [`Color::Normal`] has no code.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// Black `(0, 30)`
    Black,
    /// Blue `(0, 34)`
    Blue,
    /// Green `(0, 32)`
    Green,
    /// Cyan `(0, 36)`
    Cyan,
    /// Red `(0, 31)`
    #[default]
    Red,
    /// Purple `(0, 35)`
    Purple,
    /// Yellow `(0, 33)`
    Yellow,
    /// Dark gray `(1, 30)`
    GrayDk,
    /// Light gray `(0, 37)`
    GrayBr,
    /// White `(1, 37)`
    White,
    /// Bright blue `(1, 34)`
    BlueBr,
    /// Bright green `(1, 32)`
    GreenBr,
    /// Bright cyan `(1, 36)`
    CyanBr,
    /// Bright red `(1, 31)`
    RedBr,
    /// Bright purple `(1, 35)`
    PurpleBr,
    /// Bright yellow `(1, 33)`
    YellowBr,
    /// Terminal default, no color code
    Normal,
}

impl Color {
    /// Every named color
    pub const ALL: [Color; 17] = [
        Color::Black,
        Color::Blue,
        Color::Green,
        Color::Cyan,
        Color::Red,
        Color::Purple,
        Color::Yellow,
        Color::GrayDk,
        Color::GrayBr,
        Color::White,
        Color::BlueBr,
        Color::GreenBr,
        Color::CyanBr,
        Color::RedBr,
        Color::PurpleBr,
        Color::YellowBr,
        Color::Normal,
    ];

    /// Table name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Cyan => "cyan",
            Color::Red => "red",
            Color::Purple => "purple",
            Color::Yellow => "yellow",
            Color::GrayDk => "gray_dk",
            Color::GrayBr => "gray_br",
            Color::White => "white",
            Color::BlueBr => "blue_br",
            Color::GreenBr => "green_br",
            Color::CyanBr => "cyan_br",
            Color::RedBr => "red_br",
            Color::PurpleBr => "purple_br",
            Color::YellowBr => "yellow_br",
            Color::Normal => "normal",
        }
    }

    /// `(style, code)` pair
    #[must_use]
    pub const fn code(self) -> (u8, Option<u8>) {
        match self {
            Color::Black => (0, Some(30)),
            Color::Red => (0, Some(31)),
            Color::Green => (0, Some(32)),
            Color::Yellow => (0, Some(33)),
            Color::Blue => (0, Some(34)),
            Color::Purple => (0, Some(35)),
            Color::Cyan => (0, Some(36)),
            Color::GrayBr => (0, Some(37)),
            Color::GrayDk => (1, Some(30)),
            Color::RedBr => (1, Some(31)),
            Color::GreenBr => (1, Some(32)),
            Color::YellowBr => (1, Some(33)),
            Color::BlueBr => (1, Some(34)),
            Color::PurpleBr => (1, Some(35)),
            Color::CyanBr => (1, Some(36)),
            Color::White => (1, Some(37)),
            Color::Normal => (0, None),
        }
    }

    /// SGR parameters, e.g. `"0;31"` (`"0;"` for [`Color::Normal`])
    #[must_use]
    pub fn color_code(self) -> String {
        match self.code() {
            (style, Some(code)) => format!("{style};{code}"),
            (style, None) => format!("{style};"),
        }
    }

    /// Escape sequence switching the terminal to this color
    #[must_use]
    pub fn switch(self) -> String {
        format!("\x1b[{}m", self.color_code())
    }

    /// Wrap `text` in this color, resetting afterwards
    #[must_use]
    pub fn paint(self, text: impl Display) -> String {
        format!("{}{text}{RESET}", self.switch())
    }

    /// Listing of every color name with its code pair, sorted by name
    #[must_use]
    pub fn help() -> String {
        let mut colors = Self::ALL;
        colors.sort_by_key(|c| c.name());
        let mut out = String::from("for named colors use :\n");
        for color in colors {
            let code = match color.code() {
                (style, Some(code)) => format!("({style}, {code})"),
                (style, None) => format!("({style},)"),
            };
            out.push_str(&format!("{:10} {code}\n", color.name()));
        }
        out
    }

    /// Print `text` to stdout in this color
    pub fn print_colored(self, text: impl Display) {
        println!("{}", self.paint(text));
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| FormatError::UnknownColor(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes() {
        assert_eq!(Color::Red.color_code(), "0;31");
        assert_eq!(Color::RedBr.color_code(), "1;31");
        assert_eq!(Color::Normal.color_code(), "0;");
    }

    #[test]
    fn paint_wraps_and_resets() {
        assert_eq!(Color::Green.paint("ok"), "\x1b[0;32mok\x1b[0m");
        assert_eq!(Color::Normal.switch(), "\x1b[0;m");
    }

    #[test]
    fn parse_by_name() {
        for color in Color::ALL {
            assert_eq!(color.name().parse::<Color>().unwrap(), color);
        }
        assert!(matches!(
            "magenta".parse::<Color>(),
            Err(FormatError::UnknownColor(_))
        ));
    }

    #[test]
    fn serde_uses_table_names() {
        assert_eq!(serde_json::to_string(&Color::PurpleBr).unwrap(), "\"purple_br\"");
        let color: Color = serde_json::from_str("\"gray_dk\"").unwrap();
        assert_eq!(color, Color::GrayDk);
    }

    #[test]
    fn help_lists_every_color_sorted() {
        let help = Color::help();
        let lines: Vec<_> = help.lines().skip(1).collect();
        assert_eq!(lines.len(), 17);
        assert!(lines[0].starts_with("black"));
        assert_eq!(lines[0], "black      (0, 30)");
        assert!(help.contains("normal     (0,)"));
    }
}

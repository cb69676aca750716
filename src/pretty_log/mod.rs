use crossterm::execute;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThemeColor {
    Main,
    Second,
    Success,
    Warn,
    Error,
}

impl From<ThemeColor> for Color {
    fn from(value: ThemeColor) -> Self {
        match value {
            ThemeColor::Main => Color::Reset,
            ThemeColor::Second => Color::DarkGrey,
            ThemeColor::Success => Color::Green,
            ThemeColor::Warn => Color::Yellow,
            ThemeColor::Error => Color::Red,
        }
    }
}

/// # colored println
///
/// Print one line in the theme color, then reset the terminal color.
///
/// Write failures are ignored, console output is best effort.
pub fn colored_println<W: Write>(out: &mut W, theme: ThemeColor, msg: &str) {
    let _ = execute!(
        out,
        SetForegroundColor(theme.into()),
        Print(msg),
        ResetColor,
        Print("\n"),
    );
}

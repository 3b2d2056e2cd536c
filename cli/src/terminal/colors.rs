use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::Yellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 192, g: 192, b: 192 };
pub const HOSTNAME: Color = Color::Blue;

pub const PASS: Color = Color::Green;
pub const FAIL: Color = Color::Red;
pub const UNKNOWN: Color = Color::Yellow;

use ratatui::style::Color;

pub const BLUE: Color = Color::Rgb(0x89, 0xB4, 0xFA);
pub const GRAY_DIM: Color = Color::DarkGray;
pub const YELLOW: Color = Color::Rgb(0xF9, 0xE2, 0x79);
pub const RED: Color = Color::Rgb(0xF3, 0x8B, 0xA8);

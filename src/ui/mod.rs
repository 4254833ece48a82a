pub mod app_ui;
mod assets;
pub mod main_tab;
pub mod overlay;
pub mod popup;
pub mod ui_utils;

use ratatui::style::Color;
pub const YELLOW: Color = Color::Rgb(215, 153, 33);
pub const BLUE: Color = Color::Rgb(69, 133, 136);
pub const GREEN: Color = Color::Rgb(142, 192, 124);
pub const RED: Color = Color::Rgb(204, 36, 29);
pub const BG: Color = Color::Rgb(40, 40, 40);

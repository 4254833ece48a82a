use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{assets::ASCII_NUMBERS, assets::GLYPH_HEIGHT, YELLOW};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterHint {
    key: &'static str,
    description: &'static str,
}
impl FooterHint {
    pub fn new(key: &'static str, description: &'static str) -> Self {
        Self { key, description }
    }
}
pub trait HintProvider {
    fn provide_hints(&self) -> Vec<FooterHint>;
}

pub fn render_footer(hints: &[FooterHint], area: Rect, buf: &mut Buffer) {
    let mut spans = Vec::new();
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            hint.key,
            Style::default().fg(YELLOW).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(": {}", hint.description),
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        ));
    }
    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .render(area, buf);
}

/// helper function to create a centered rect using up certain percentage of the available rect
pub fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}

/// Renders `input` (digits and ':') with the block font, one string per row.
pub fn format_ascii_time(input: &str) -> String {
    let mut output = vec![String::new(); GLYPH_HEIGHT];

    for ch in input.chars() {
        let index = match ch {
            '0'..='9' => ch as usize - '0' as usize,
            ':' => 10,
            _ => continue,
        };
        for (i, line) in ASCII_NUMBERS[index].lines().enumerate() {
            output[i].push_str(line);
            output[i].push(' ');
        }
    }

    output
        .iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Width in cells of `format_ascii_time(input)`.
pub fn ascii_time_width(input: &str) -> u16 {
    format_ascii_time(input)
        .lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_time_has_one_row_per_glyph_line() {
        let text = format_ascii_time("5:00");
        assert_eq!(text.lines().count(), GLYPH_HEIGHT);
        assert!(text.lines().next().unwrap().starts_with("█████"));
        assert_eq!(ascii_time_width("5:00"), 5 + 1 + 3 + 1 + 5 + 1 + 5);
    }

    #[test]
    fn popup_area_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = popup_area(area, 50, 50);
        assert_eq!(popup, Rect::new(25, 10, 50, 20));
    }
}

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Text,
    widgets::{Block, Clear, Paragraph, Widget, Wrap},
};

use crate::lock::LockOverlay;

use super::{
    ui_utils::{ascii_time_width, format_ascii_time, render_footer, FooterHint, HintProvider},
    YELLOW,
};

/// Takes over the whole terminal while the user is resting.
pub struct LockScreen<'a> {
    overlay: &'a LockOverlay,
}
impl<'a> LockScreen<'a> {
    pub fn new(overlay: &'a LockOverlay) -> Self {
        Self { overlay }
    }
}

impl Widget for LockScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        Block::default()
            .style(Style::default().bg(Color::Black))
            .render(area, buf);

        let time = self.overlay.remaining_text();
        let big = area.width > ascii_time_width(&time) + 2 && area.height >= 14;
        let time_height = if big { 5 } else { 1 };

        let [_, message_area, _, time_area, _, footer_area] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(time_height),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        Paragraph::new(self.overlay.message())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            )
            .render(message_area, buf);

        let time_text = if big {
            Text::from(format_ascii_time(&time))
        } else {
            Text::from(time)
        };
        Paragraph::new(time_text)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(YELLOW)
                    .bg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            )
            .render(time_area, buf);

        render_footer(&self.provide_hints(), footer_area, buf);
    }
}

impl HintProvider for LockScreen<'_> {
    fn provide_hints(&self) -> Vec<FooterHint> {
        vec![
            FooterHint::new("u", "Unlock now"),
            FooterHint::new("x", "Stop timer"),
            FooterHint::new("Q", "Quit"),
        ]
    }
}

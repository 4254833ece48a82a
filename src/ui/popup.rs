use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::popup::{Popup, PopupKind};

use super::{ui_utils::popup_area, BG, GREEN, RED, YELLOW};

const CONFIRM_BUTTONS: [(&str, Color); 2] = [("<y>es", GREEN), ("<n>o", RED)];
const ACK_BUTTONS: [(&str, Color); 1] = [("Press any key to continue", YELLOW)];

impl Widget for &Popup {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = popup_area(area, 50, 35);
        Clear.render(area, buf);
        let (title, accent, buttons): (&str, Color, &[(&str, Color)]) = match &self.kind {
            PopupKind::YesNoPopup(_) => (" Confirmation ", YELLOW, &CONFIRM_BUTTONS),
            PopupKind::ErrorPopup(_) => (" Error ", RED, &ACK_BUTTONS),
        };
        render_dialog(title, accent, &self.message, buttons, area, buf);
    }
}

/// Message box on top, one bordered cell per button underneath.
fn render_dialog(
    title: &str,
    accent: Color,
    message: &str,
    buttons: &[(&str, Color)],
    area: Rect,
    buf: &mut Buffer,
) {
    Block::default().style(Style::default().bg(BG)).render(area, buf);
    let [message_area, buttons_area] =
        Layout::vertical([Constraint::Percentage(65), Constraint::Percentage(35)]).areas(area);

    Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(accent))
                .title(title)
                .title_style(Style::default().fg(accent)),
        )
        .render(message_area, buf);

    let cells = Layout::horizontal(vec![Constraint::Fill(1); buttons.len()]).split(buttons_area);
    for (&(label, color), cell) in buttons.iter().zip(cells.iter()) {
        Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(color)),
            )
            .render(*cell, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        app::App,
        error::{DurationError, Error},
    };

    fn rendered(popup: &Popup) -> String {
        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);
        popup.render(area, &mut buf);
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn confirmation_has_both_answers() {
        let popup = Popup::yes_no("Quit?".to_string(), Box::new(|_: &mut App| {}));
        let text = rendered(&popup);
        assert!(text.contains("Confirmation"));
        assert!(text.contains("Quit?"));
        assert!(text.contains("<y>es"));
        assert!(text.contains("<n>o"));
    }

    #[test]
    fn error_has_single_acknowledge_button() {
        let popup: Popup = Error::InvalidDuration(DurationError::NotPositive(0)).into();
        let text = rendered(&popup);
        assert!(text.contains("Error"));
        assert!(text.contains("Press any key to continue"));
        assert!(!text.contains("<y>es"));
    }
}

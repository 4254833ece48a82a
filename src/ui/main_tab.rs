use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Widget, Wrap};

use crate::breaklock::Breaklock;
use crate::settings::{Mode, Settings};
use crate::timers::helper_structs::TimerState;

use super::ui_utils::{FooterHint, HintProvider};
use super::{BLUE, GREEN, RED, YELLOW};

const INSTRUCTIONS: &str = "How to use:
1. Enter the work period in minutes
2. Start the timer
3. When the time is up the screen locks for 5 minutes
4. During the lock you can unlock early
5. After the lock the timer starts again by itself
6. Stop the timer to switch everything off";

pub struct MainTab<'a> {
    breaklock: &'a Breaklock,
    settings: &'a Settings,
    mode: Mode,
}
impl<'a> MainTab<'a> {
    pub fn new(breaklock: &'a Breaklock, settings: &'a Settings, mode: Mode) -> Self {
        Self {
            breaklock,
            settings,
            mode,
        }
    }

    fn status_style(&self) -> Style {
        match self.breaklock.state() {
            TimerState::Idle => Style::default().fg(RED),
            TimerState::Running => Style::default().fg(GREEN),
            TimerState::Locked => Style::default().fg(YELLOW),
        }
    }

    fn render_duration_field(&self, area: Rect, buf: &mut Buffer) {
        let editing = self.mode == Mode::Input;
        let border = if editing { GREEN } else { BLUE };
        let mut text = self.breaklock.duration_input().to_string();
        if editing {
            text.push('_');
        }
        Paragraph::new(text)
            .style(Style::default().fg(Color::White))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(border))
                    .title(" Work period (minutes) "),
            )
            .render(area, buf);
    }
}

impl Widget for MainTab<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let outer_block = Block::default()
            .title(" Break Lock ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .padding(Padding::horizontal(2))
            .style(Style::default().fg(YELLOW));
        let inner = outer_block.inner(area);
        outer_block.render(area, buf);

        let [field_area, status_area, remaining_area, breaks_area, _, help_area] =
            Layout::vertical([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .areas(inner);

        let [field_area] = Layout::horizontal([Constraint::Max(30)])
            .flex(Flex::Start)
            .areas(field_area);
        self.render_duration_field(field_area, buf);

        Paragraph::new(Line::from(vec![
            Span::styled("Status: ", Style::default().fg(Color::Gray)),
            Span::styled(
                self.breaklock.state().to_string(),
                self.status_style().add_modifier(Modifier::BOLD),
            ),
        ]))
        .render(status_area, buf);

        Paragraph::new(Line::from(vec![
            Span::styled("Remaining: ", Style::default().fg(Color::Gray)),
            Span::styled(
                self.breaklock.work_timer.remaining_text(),
                Style::default().fg(BLUE).add_modifier(Modifier::BOLD),
            ),
        ]))
        .render(remaining_area, buf);

        Paragraph::new(format!(
            "Breaks taken: {}",
            self.breaklock.lock.breaks_taken()
        ))
        .style(Style::default().fg(Color::Gray))
        .render(breaks_area, buf);

        if self.settings.ui.show_instructions {
            Paragraph::new(INSTRUCTIONS)
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: false })
                .render(help_area, buf);
        }
    }
}

impl HintProvider for MainTab<'_> {
    fn provide_hints(&self) -> Vec<FooterHint> {
        if self.mode == Mode::Input {
            return vec![
                FooterHint::new("Enter", "Start"),
                FooterHint::new("Esc", "Done editing"),
            ];
        }
        let mut hints = match self.breaklock.state() {
            TimerState::Idle => vec![
                FooterHint::new("Space", "Start"),
                FooterHint::new("i", "Edit minutes"),
            ],
            _ => vec![
                FooterHint::new("x", "Stop"),
                FooterHint::new("i", "Edit minutes"),
            ],
        };
        hints.push(FooterHint::new("Q", "Quit"));
        hints
    }
}

/// Password gate shown before any admin content
use crate::common::{TextField, centered_rect};
use crate::stores::auth_store::AuthState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct LoginPanel {
    pub password_input: String,
}

impl LoginPanel {
    pub fn from_state(auth_state: &AuthState) -> Self {
        Self {
            password_input: auth_state.password_input.clone(),
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let card = centered_rect(50, 40, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Kincsek Admin ")
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(card);
        block.render(card, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2), // Heading
                Constraint::Length(3), // Password
                Constraint::Min(0),    // Hint
            ])
            .split(inner);

        Paragraph::new(Line::styled(
            "Sign in to manage the website",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .render(chunks[0], buf);

        TextField::new("Password", &self.password_input)
            .masked(true)
            .editing(true)
            .render(chunks[1], buf);

        Paragraph::new("Enter: sign in | Esc: quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .render(chunks[2], buf);
    }
}

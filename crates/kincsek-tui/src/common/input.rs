use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Bordered single-line input. The text itself lives in a store; this only draws it.
#[derive(Debug, Clone)]
pub struct TextField<'a> {
    title: &'a str,
    value: &'a str,
    is_editing: bool,
    masked: bool,
    placeholder: &'a str,
}

impl<'a> TextField<'a> {
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            is_editing: false,
            masked: false,
            placeholder: "",
        }
    }

    pub fn editing(mut self, is_editing: bool) -> Self {
        self.is_editing = is_editing;
        self
    }

    /// Show one bullet per character instead of the value
    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    fn display_value(&self) -> String {
        if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.to_string()
        }
    }
}

impl Widget for TextField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.is_editing {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };

        let mut spans = if self.value.is_empty() && !self.is_editing {
            vec![Span::styled(
                self.placeholder.to_string(),
                Style::default().fg(Color::DarkGray),
            )]
        } else {
            vec![Span::raw(self.display_value())]
        };
        if self.is_editing {
            spans.push(Span::styled(
                "█",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", self.title))
                    .border_style(border_style),
            )
            .render(area, buf);
    }
}

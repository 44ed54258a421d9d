/// Create/edit form for a single program
use crate::common::{TextField, centered_rect};
use kincsek_core::models::{ProgramDraft, ProgramField};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

pub struct ProgramModal {
    pub draft: ProgramDraft,
    pub focused_field: ProgramField,
}

impl ProgramModal {
    pub fn new(draft: ProgramDraft, focused_field: ProgramField) -> Self {
        Self {
            draft,
            focused_field,
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect(70, 80, area);
        Clear.render(modal_area, buf);

        let title = if self.draft.is_new() {
            " New program "
        } else {
            " Edit program "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let mut constraints: Vec<Constraint> =
            ProgramField::ALL.iter().map(|_| Constraint::Length(3)).collect();
        constraints.push(Constraint::Min(0));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        for (field, chunk) in ProgramField::ALL.iter().zip(chunks.iter()) {
            TextField::new(field.label(), self.draft.get(*field))
                .editing(*field == self.focused_field)
                .render(*chunk, buf);
        }

        Paragraph::new(" Tab/↓: next field | Shift+Tab/↑: previous | Enter: save | Esc: cancel")
            .style(Style::default().fg(Color::DarkGray))
            .render(chunks[ProgramField::ALL.len()], buf);
    }
}

/// Settings tab: the website announcement banner
use crate::actions::FieldId;
use crate::common::TextField;
use crate::stores::settings_store::SettingsState;
use crate::stores::ui_store::UIState;
use crate::ui::announcement_color;
use kincsek_core::models::{Announcement, AnnouncementType};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct SettingsPanel {
    pub draft: Announcement,
    pub is_editing_text: bool,
}

impl SettingsPanel {
    pub fn from_state(settings_state: &SettingsState, ui_state: &UIState) -> Self {
        Self {
            draft: settings_state.announcement_from_draft(),
            is_editing_text: ui_state.editing == Some(FieldId::AnnouncementText),
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Website announcement ")
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Text
                Constraint::Length(1), // Active toggle
                Constraint::Length(1), // Type
                Constraint::Length(1),
                Constraint::Min(3), // Preview
                Constraint::Length(1), // Keys
            ])
            .split(inner);

        TextField::new("Announcement text", &self.draft.text)
            .editing(self.is_editing_text)
            .render(chunks[0], buf);

        let checkbox = if self.draft.is_active { "[x]" } else { "[ ]" };
        Paragraph::new(format!("{} Show on the website", checkbox)).render(chunks[1], buf);

        let mut type_spans = vec![Span::raw("Type: ")];
        for kind in [
            AnnouncementType::Info,
            AnnouncementType::Urgent,
            AnnouncementType::Success,
        ] {
            let style = if kind == self.draft.kind {
                Style::default()
                    .fg(announcement_color(kind))
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(announcement_color(kind))
            };
            type_spans.push(Span::styled(format!(" {} ", kind.label()), style));
            type_spans.push(Span::raw(" "));
        }
        Paragraph::new(Line::from(type_spans)).render(chunks[2], buf);

        let preview_color = announcement_color(self.draft.kind);
        let preview = if self.draft.text.is_empty() {
            Line::styled("(empty)", Style::default().fg(Color::DarkGray))
        } else {
            Line::styled(self.draft.text.clone(), Style::default().fg(preview_color))
        };
        Paragraph::new(preview)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Preview ")
                    .border_style(Style::default().fg(preview_color)),
            )
            .render(chunks[4], buf);

        Paragraph::new("e: edit text | a: toggle active | t: change type | s: save")
            .style(Style::default().fg(Color::DarkGray))
            .render(chunks[5], buf);
    }
}

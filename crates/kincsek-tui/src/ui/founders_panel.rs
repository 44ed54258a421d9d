/// Founders tab: profile image urls for the two founders
use crate::actions::FieldId;
use crate::common::TextField;
use crate::stores::settings_store::SettingsState;
use crate::stores::ui_store::UIState;
use kincsek_core::models::{FounderId, Founders};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

const FOUNDER_ORDER: [FounderId; 2] = [FounderId::Edina, FounderId::Zita];

pub struct FoundersPanel {
    pub founders: Founders,
    pub images: [String; 2],
    pub focused: FounderId,
    pub editing: Option<FieldId>,
}

impl FoundersPanel {
    pub fn from_state(settings_state: &SettingsState, ui_state: &UIState) -> Self {
        Self {
            founders: settings_state.founders.clone(),
            images: FOUNDER_ORDER.map(|id| settings_state.founder_image(id).to_string()),
            focused: settings_state.focused_founder,
            editing: ui_state.editing,
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),
                Constraint::Length(6),
                Constraint::Min(0),
            ])
            .split(area);

        for (i, id) in FOUNDER_ORDER.iter().enumerate() {
            self.render_founder(*id, &self.images[i], chunks[i], buf);
        }

        Paragraph::new(" j/k: choose founder | Enter: edit url | s: save images")
            .style(Style::default().fg(Color::DarkGray))
            .render(chunks[2], buf);
    }

    fn render_founder(&self, id: FounderId, image: &str, area: Rect, buf: &mut Buffer) {
        let is_focused = self.focused == id;
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.founders.get(id).name))
            .border_style(if is_focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::White)
            });
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(3)])
            .split(inner);

        let saved = &self.founders.get(id).image;
        let status = if saved == image {
            Line::styled(id.label(), Style::default().add_modifier(Modifier::BOLD))
        } else {
            Line::styled(
                format!("{} (unsaved changes)", id.label()),
                Style::default().fg(Color::Yellow),
            )
        };
        Paragraph::new(status).render(rows[0], buf);

        TextField::new("Profile image url", image)
            .editing(self.editing == Some(FieldId::FounderImage(id)))
            .render(rows[1], buf);
    }
}

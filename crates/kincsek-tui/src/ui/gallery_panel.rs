/// Gallery tab: ordered image urls plus the url input
use crate::actions::FieldId;
use crate::common::{TextField, truncate_to_width};
use crate::stores::gallery_store::GalleryState;
use crate::stores::ui_store::UIState;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListState, Paragraph, StatefulWidget, Widget},
};

pub struct GalleryPanel {
    pub images: Vec<String>,
    pub url_input: String,
    pub selected_index: usize,
    pub is_editing: bool,
}

impl GalleryPanel {
    pub fn from_state(gallery_state: &GalleryState, ui_state: &UIState) -> Self {
        Self {
            images: gallery_state.images.clone(),
            url_input: gallery_state.url_input.clone(),
            selected_index: gallery_state.selected_index,
            is_editing: ui_state.editing == Some(FieldId::GalleryUrl),
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        TextField::new("New image url (a)", &self.url_input)
            .editing(self.is_editing)
            .placeholder("Press a to paste an image url")
            .render(chunks[0], buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Gallery ({}) ", self.images.len()))
            .border_style(Style::default().fg(Color::Cyan));

        if self.images.is_empty() {
            Paragraph::new("The gallery is empty.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block)
                .render(chunks[1], buf);
            return;
        }

        let width = chunks[1].width.saturating_sub(10) as usize;
        let items: Vec<Line> = self
            .images
            .iter()
            .enumerate()
            .map(|(i, url)| Line::from(format!("{:>3}. {}", i + 1, truncate_to_width(url, width))))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = ListState::default();
        list_state.select(Some(self.selected_index));
        StatefulWidget::render(list, chunks[1], buf, &mut list_state);
    }
}

/// Leads tab: searchable inquiry table with status controls
use crate::actions::FieldId;
use crate::common::TextField;
use crate::stores::leads_store::LeadsState;
use crate::stores::ui_store::UIState;
use crate::ui::status_color;
use kincsek_core::models::Lead;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

pub struct LeadsPanel {
    pub leads: Vec<Lead>,
    pub total: usize,
    pub search_term: String,
    pub selected_index: usize,
    pub is_searching: bool,
}

impl LeadsPanel {
    pub fn from_state(leads_state: &LeadsState, ui_state: &UIState) -> Self {
        Self {
            leads: leads_state.filtered(),
            total: leads_state.leads.len(),
            search_term: leads_state.search_term.clone(),
            selected_index: leads_state.selected_index,
            is_searching: ui_state.editing == Some(FieldId::LeadSearch),
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        TextField::new("Search name or program (/)", &self.search_term)
            .editing(self.is_searching)
            .placeholder("Press / to search")
            .render(chunks[0], buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Leads ({}/{}) ", self.leads.len(), self.total))
            .border_style(Style::default().fg(Color::Cyan));

        if self.leads.is_empty() {
            Paragraph::new("No leads found.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block)
                .render(chunks[1], buf);
            return;
        }

        let header = Row::new(vec!["Name", "Program", "Contact", "Date", "Status"]).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = self
            .leads
            .iter()
            .map(|lead| {
                Row::new(vec![
                    Cell::from(lead.name.clone()),
                    Cell::from(lead.program_title.clone()),
                    Cell::from(vec![
                        Line::from(lead.phone.clone()),
                        Line::styled(lead.email.clone(), Style::default().fg(Color::DarkGray)),
                    ]),
                    Cell::from(lead.timestamp.clone()),
                    Cell::from(lead.status.label())
                        .style(Style::default().fg(status_color(lead.status))),
                ])
                .height(2)
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(20),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(18),
                Constraint::Percentage(12),
            ],
        )
        .header(header)
        .block(block)
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

        let mut table_state = TableState::default();
        table_state.select(Some(self.selected_index));

        StatefulWidget::render(table, chunks[1], buf, &mut table_state);
    }
}

/// Programs tab: program list with the selected program's details
use crate::common::truncate_to_width;
use crate::stores::programs_store::ProgramsState;
use kincsek_core::models::Program;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListState, Paragraph, StatefulWidget, Widget, Wrap},
};

pub struct ProgramsPanel {
    pub programs: Vec<Program>,
    pub selected_index: usize,
}

impl ProgramsPanel {
    pub fn from_state(programs_state: &ProgramsState) -> Self {
        Self {
            programs: programs_state.programs.clone(),
            selected_index: programs_state.selected_index,
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Programs ({}) ", self.programs.len()))
            .border_style(Style::default().fg(Color::Cyan));

        if self.programs.is_empty() {
            Paragraph::new("No programs yet. Press a to add one.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block)
                .render(chunks[0], buf);
            Block::default()
                .borders(Borders::ALL)
                .title(" Details ")
                .render(chunks[1], buf);
            return;
        }

        let items: Vec<Line> = self
            .programs
            .iter()
            .map(|program| {
                Line::from(vec![
                    Span::raw(program.title.clone()),
                    Span::styled(
                        format!("  [{}]", program.category),
                        Style::default().fg(Color::Magenta),
                    ),
                ])
            })
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
        StatefulWidget::render(list, chunks[0], buf, &mut list_state);

        self.render_details(chunks[1], buf);
    }

    fn render_details(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(" Details ");
        let Some(program) = self.programs.get(self.selected_index) else {
            block.render(area, buf);
            return;
        };

        let label = Style::default().fg(Color::Yellow);
        let url_width = area.width.saturating_sub(9) as usize;
        let lines = vec![
            Line::styled(
                program.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Line::from(vec![Span::styled("Date:  ", label), Span::raw(program.date.clone())]),
            Line::from(vec![
                Span::styled("Type:  ", label),
                Span::raw(program.category.clone()),
            ]),
            Line::from(vec![
                Span::styled("Image: ", label),
                Span::raw(truncate_to_width(&program.image_url, url_width)),
            ]),
            Line::from(""),
            Line::from(program.description.clone()),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

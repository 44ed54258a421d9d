/// Overview tab: headline numbers, latest inquiries and the live announcement
use crate::stores::Stores;
use crate::ui::{announcement_color, status_color};
use kincsek_core::models::{Announcement, Lead};
use kincsek_core::overview::{self, OverviewStats};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub const NO_ANNOUNCEMENT_TEXT: &str = "No active announcement on the website.";

pub struct OverviewPanel {
    pub stats: OverviewStats,
    pub recent: Vec<Lead>,
    pub announcement: Announcement,
}

impl OverviewPanel {
    pub fn from_stores(stores: &Stores) -> Self {
        let leads = stores.leads.get_state().leads;
        let programs = stores.programs.get_state().programs;

        Self {
            stats: OverviewStats::compute(&leads, &programs),
            recent: overview::recent_leads(&leads, overview::recent_leads_limit()).to_vec(),
            announcement: stores.settings.get_state().announcement,
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Stat cards
                Constraint::Min(4),    // Recent leads + announcement
                Constraint::Length(1), // Quick actions
            ])
            .split(area);

        self.render_stats(rows[0], buf);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[1]);
        self.render_recent_leads(body[0], buf);
        self.render_announcement(body[1], buf);

        Paragraph::new(" l: All leads | s: Edit announcement")
            .style(Style::default().fg(Color::DarkGray))
            .render(rows[2], buf);
    }

    fn render_stats(&self, area: Rect, buf: &mut Buffer) {
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);

        let entries = [
            ("Total leads", self.stats.total_leads, Color::Cyan),
            ("New leads", self.stats.new_leads, Color::Yellow),
            ("Active programs", self.stats.program_count, Color::Green),
        ];

        for ((title, value, color), card) in entries.into_iter().zip(cards.iter()) {
            Paragraph::new(Line::styled(
                value.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", title))
                    .border_style(Style::default().fg(color)),
            )
            .render(*card, buf);
        }
    }

    fn render_recent_leads(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Recent leads ")
            .border_style(Style::default().fg(Color::White));

        if self.recent.is_empty() {
            Paragraph::new("No leads yet.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block)
                .render(area, buf);
            return;
        }

        let lines: Vec<Line> = self
            .recent
            .iter()
            .map(|lead| {
                Line::from(vec![
                    Span::styled(
                        format!("{:<8}", overview::lead_badge(lead)),
                        Style::default().fg(status_color(lead.status)),
                    ),
                    Span::styled(
                        lead.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!(" - {}", lead.program_title)),
                    Span::styled(
                        format!("  {}", lead.timestamp),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            })
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }

    fn render_announcement(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Website announcement ");

        let content = if self.announcement.is_active {
            let color = announcement_color(self.announcement.kind);
            vec![
                Line::styled(
                    self.announcement.kind.label(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Line::styled(
                    format!("\"{}\"", self.announcement.text),
                    Style::default().fg(color),
                ),
            ]
        } else {
            vec![Line::styled(
                NO_ANNOUNCEMENT_TEXT,
                Style::default().fg(Color::DarkGray),
            )]
        };

        Paragraph::new(content)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Action;
    use kincsek_core::SiteContent;
    use kincsek_core::models::{AnnouncementType, LeadStatus};

    fn render_buffer(panel: &OverviewPanel) -> Buffer {
        let area = Rect::new(0, 0, 100, 20);
        let mut buf = Buffer::empty(area);
        panel.render(area, &mut buf);
        buf
    }

    fn rendered(panel: &OverviewPanel) -> String {
        render_buffer(panel)
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_active_announcement_is_quoted() {
        let content = SiteContent {
            announcement: Announcement {
                text: "Zárva".to_string(),
                is_active: true,
                kind: AnnouncementType::Urgent,
            },
            ..SiteContent::default()
        };
        let panel = OverviewPanel::from_stores(&Stores::new(content));

        let screen = rendered(&panel);
        assert!(screen.contains("\"Zárva\""));
        assert!(!screen.contains(NO_ANNOUNCEMENT_TEXT));
    }

    #[test]
    fn test_announcement_text_uses_type_color() {
        for (kind, color) in [
            (AnnouncementType::Info, Color::Blue),
            (AnnouncementType::Urgent, Color::Red),
            (AnnouncementType::Success, Color::Green),
        ] {
            let content = SiteContent {
                announcement: Announcement {
                    text: "Zárva".to_string(),
                    is_active: true,
                    kind,
                },
                ..SiteContent::default()
            };
            let panel = OverviewPanel::from_stores(&Stores::new(content));

            let colors = crate::ui::text_colors(&render_buffer(&panel), "\"Zárva\"")
                .expect("announcement on screen");
            assert!(colors.iter().all(|c| *c == color), "{:?}: {:?}", kind, colors);
        }
    }

    #[test]
    fn test_inactive_announcement_placeholder() {
        let panel = OverviewPanel::from_stores(&Stores::new(SiteContent::default()));
        assert!(rendered(&panel).contains(NO_ANNOUNCEMENT_TEXT));
    }

    #[test]
    fn test_recent_leads_capped() {
        let stores = Stores::new(SiteContent::default());
        let leads: Vec<Lead> = (0..8)
            .map(|i| Lead {
                id: i.to_string(),
                name: format!("Lead {}", i),
                program_title: "Festés".to_string(),
                phone: String::new(),
                email: String::new(),
                timestamp: String::new(),
                status: LeadStatus::New,
            })
            .collect();
        stores.reduce(&Action::LeadsLoaded(leads));

        let panel = OverviewPanel::from_stores(&stores);
        assert_eq!(panel.stats.total_leads, 8);
        assert_eq!(panel.recent.len(), 5);
        assert_eq!(panel.recent[0].name, "Lead 0");
    }
}

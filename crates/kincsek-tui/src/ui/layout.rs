/// Layout manager for the TUI application
use crate::actions::TabId;
use crate::common::render_popup;
use crate::logger::LogBuffer;
use crate::stores::Stores;
use crate::stores::ui_store::UIState;
use crate::ui::{
    FoundersPanel, GalleryPanel, LeadsPanel, LoginPanel, OverviewPanel, ProgramModal,
    ProgramsPanel, SettingsPanel, render_dialog,
};
use kincsek_core::leads::count_by_status;
use kincsek_core::models::LeadStatus;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Widget},
};

/// Render the complete application layout
pub fn render_layout(frame: &mut Frame, stores: &Stores, log_buffer: &LogBuffer) {
    let area = frame.area();
    let ui_state = stores.ui.get_state();

    if !stores.auth.is_authenticated() {
        LoginPanel::from_state(&stores.auth.get_state()).render(area, frame.buffer_mut());
        if let Some(dialog) = &ui_state.dialog {
            render_dialog(dialog, area, frame.buffer_mut());
        }
        return;
    }

    // Main layout: Header | Tabs | Content | Footer
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Tabs
            Constraint::Min(1),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_header(frame, vertical_chunks[0], stores);
    render_tabs(frame, vertical_chunks[1], &ui_state.active_tab);
    render_content(frame, vertical_chunks[2], stores, &ui_state);
    render_footer(frame, vertical_chunks[3], &ui_state, log_buffer);

    let programs_state = stores.programs.get_state();
    if let Some(draft) = programs_state.draft {
        ProgramModal::new(draft, programs_state.focused_field).render(area, frame.buffer_mut());
    }

    if ui_state.show_help {
        render_help(frame, area);
    }

    if let Some(dialog) = &ui_state.dialog {
        render_dialog(dialog, area, frame.buffer_mut());
    }
}

fn render_content(frame: &mut Frame, area: Rect, stores: &Stores, ui_state: &UIState) {
    let buf = frame.buffer_mut();
    match ui_state.active_tab {
        TabId::Overview => OverviewPanel::from_stores(stores).render(area, buf),
        TabId::Leads => LeadsPanel::from_state(&stores.leads.get_state(), ui_state).render(area, buf),
        TabId::Programs => ProgramsPanel::from_state(&stores.programs.get_state()).render(area, buf),
        TabId::Gallery => {
            GalleryPanel::from_state(&stores.gallery.get_state(), ui_state).render(area, buf)
        }
        TabId::Founders => {
            FoundersPanel::from_state(&stores.settings.get_state(), ui_state).render(area, buf)
        }
        TabId::Settings => {
            SettingsPanel::from_state(&stores.settings.get_state(), ui_state).render(area, buf)
        }
    }
}

fn render_tabs(frame: &mut Frame, area: Rect, active_tab: &TabId) {
    let tab_titles: Vec<String> = TabId::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| format!("{}: {}", i + 1, tab.title()))
        .collect();

    let tabs = Tabs::new(tab_titles)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .select(active_tab.index())
        .divider("|");

    frame.render_widget(tabs, area);
}

fn render_header(frame: &mut Frame, area: Rect, stores: &Stores) {
    let leads = stores.leads.get_state().leads;
    let new_leads = count_by_status(&leads, LeadStatus::New);

    let new_leads_color = if new_leads > 0 {
        Color::Yellow
    } else {
        Color::Green
    };

    let header_text = Line::from(vec![
        Span::styled(
            " KINCSEK ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | Admin dashboard | New leads: "),
        Span::styled(new_leads.to_string(), Style::default().fg(new_leads_color)),
        Span::raw(" | "),
    ]);

    Paragraph::new(header_text)
        .block(Block::default().borders(Borders::ALL))
        .render(area, frame.buffer_mut());
}

fn render_footer(frame: &mut Frame, area: Rect, ui_state: &UIState, log_buffer: &LogBuffer) {
    let help_text = if ui_state.editing.is_some() {
        "Enter:Confirm | Esc:Stop editing"
    } else if ui_state.show_help {
        "Press ? to hide help"
    } else {
        match ui_state.active_tab {
            TabId::Overview => "q:Quit | 1-6:Tab | l:Leads | s:Settings | r:Reload | ?:Help",
            TabId::Leads => "q:Quit | j/k:Navigate | /:Search | n/c/e:Status | d:Delete | ?:Help",
            TabId::Programs => "q:Quit | j/k:Navigate | a:Add | e:Edit | d:Delete | ?:Help",
            TabId::Gallery => "q:Quit | j/k:Navigate | a:Add url | d:Remove | ?:Help",
            TabId::Founders => "q:Quit | j/k:Founder | Enter:Edit | s:Save | ?:Help",
            TabId::Settings => "q:Quit | e:Edit | a:Active | t:Type | s:Save | ?:Help",
        }
    };

    let mut spans = vec![Span::raw(" "), Span::raw(help_text)];
    if let Some(latest) = log_buffer.get_recent_logs(1).pop() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(latest, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL))
        .render(area, frame.buffer_mut());
}

fn render_help(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Yellow);
    let entry = |k: &'static str, desc: &'static str| {
        Line::from(vec![Span::styled(format!("{:<12}", k), key), Span::raw(desc)])
    };

    let lines = vec![
        entry("1-6", "Switch tab"),
        entry("Tab/S-Tab", "Next / previous tab"),
        entry("r", "Reload leads and gallery from storage"),
        entry("j/k", "Move selection"),
        entry("/", "Search leads"),
        entry("n/c/e/Space", "Set lead status"),
        entry("a", "Add program / gallery url"),
        entry("e", "Edit selected item"),
        entry("d", "Delete selected item"),
        entry("s", "Save founders / announcement"),
        entry("q", "Quit"),
    ];

    render_popup(area, frame.buffer_mut(), "Help", lines, Color::Cyan, 60, 60);
}

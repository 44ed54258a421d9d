/// UI module - panels and rendering components
pub mod dialog;
pub mod founders_panel;
pub mod gallery_panel;
pub mod layout;
pub mod leads_panel;
pub mod login_panel;
pub mod overview_panel;
pub mod program_modal;
pub mod programs_panel;
pub mod settings_panel;

pub use dialog::render_dialog;
pub use founders_panel::FoundersPanel;
pub use gallery_panel::GalleryPanel;
pub use layout::render_layout;
pub use leads_panel::LeadsPanel;
pub use login_panel::LoginPanel;
pub use overview_panel::OverviewPanel;
pub use program_modal::ProgramModal;
pub use programs_panel::ProgramsPanel;
pub use settings_panel::SettingsPanel;

use kincsek_core::models::{AnnouncementType, LeadStatus};
use ratatui::style::Color;

pub fn announcement_color(kind: AnnouncementType) -> Color {
    match kind {
        AnnouncementType::Info => Color::Blue,
        AnnouncementType::Urgent => Color::Red,
        AnnouncementType::Success => Color::Green,
    }
}

pub fn status_color(status: LeadStatus) -> Color {
    match status {
        LeadStatus::New => Color::Yellow,
        LeadStatus::Contacted => Color::Cyan,
        LeadStatus::Enrolled => Color::Green,
    }
}

/// Foreground colours of the cells spelling `text` at its first position in
/// the buffer, or `None` if the text is not on screen.
#[cfg(test)]
pub(crate) fn text_colors(buf: &ratatui::buffer::Buffer, text: &str) -> Option<Vec<Color>> {
    let chars: Vec<String> = text.chars().map(|c| c.to_string()).collect();
    let area = buf.area;
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if x as usize + chars.len() > area.right() as usize {
                break;
            }
            let matches = chars
                .iter()
                .enumerate()
                .all(|(i, c)| buf[(x + i as u16, y)].symbol() == c);
            if matches {
                return Some((0..chars.len()).map(|i| buf[(x + i as u16, y)].fg).collect());
            }
        }
    }
    None
}

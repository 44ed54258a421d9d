/// Alert and confirmation popups
use crate::common::render_popup;
use crate::stores::ui_store::Dialog;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
};

pub fn render_dialog(dialog: &Dialog, area: Rect, buf: &mut Buffer) {
    let hint = Style::default().fg(Color::DarkGray);

    match dialog {
        Dialog::Alert(message) => {
            render_popup(
                area,
                buf,
                "Notice",
                vec![
                    Line::from(message.clone()),
                    Line::from(""),
                    Line::styled("Enter: OK", hint),
                ],
                Color::Yellow,
                50,
                25,
            );
        }
        Dialog::Confirm(message) => {
            render_popup(
                area,
                buf,
                "Confirm",
                vec![
                    Line::from(message.clone()),
                    Line::from(""),
                    Line::styled("y: Yes | n: No", hint),
                ],
                Color::Red,
                50,
                25,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_dialog_shows_message() {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        render_dialog(&Dialog::Confirm("Delete this lead?".to_string()), area, &mut buf);

        let screen: String = buf.content().iter().map(|cell| cell.symbol()).collect();
        assert!(screen.contains("Delete this lead?"));
        assert!(screen.contains("y: Yes"));
    }
}

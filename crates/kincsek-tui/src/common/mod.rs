// Reusable widgets and layout helpers shared by the panels
mod input;
mod popup;
mod text;

pub use input::TextField;
pub use popup::{centered_rect, render_popup};
pub use text::truncate_to_width;

pub mod colors;
mod layout;
mod listing;

pub use colors::ColorScheme;
pub use layout::render_ui;

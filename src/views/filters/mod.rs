mod controls;
pub mod render;

pub use controls::{filter_controls, FilterControl};
pub use render::draw_filter_bar;

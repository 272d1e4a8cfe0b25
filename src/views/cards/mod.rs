pub mod items;
pub mod render;
mod view;

pub use render::{restaurant_card, CoverState, CARD_WIDTH};
pub use view::{CardView, StatusBadge, CLOCK_ICON, FALLBACK_IMAGE};

// Render facade for cards: re-export the drawing entry point from views::cards::items
// so the grid only imports views::cards::{restaurant_card, CARD_WIDTH}.

pub use crate::views::cards::items::{restaurant_card, CoverState};

/// Default card width used by the grid (in logical pixels).
pub use crate::ui_constants::CARD_WIDTH;

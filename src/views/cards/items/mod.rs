// Card building blocks; card.rs composes them.
pub mod card;
mod cover;
mod meta_row;
mod tags_row;
pub use card::restaurant_card;
pub use cover::CoverState;

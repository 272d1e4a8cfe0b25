pub mod cards;
pub mod filters;

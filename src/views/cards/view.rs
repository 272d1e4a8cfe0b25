use crate::catalog::Restaurant;
use crate::ui_constants::{ADDRESS_PREVIEW_CHARS, MAX_CARD_TAGS};

/// Shown in place of an item image that failed to load.
pub const FALLBACK_IMAGE: &str = "https://placehold.co/400x250/F8D8D8/333?text=Restaurant+Image";

/// Clock icon drawn on every status badge, relative to the asset root.
pub const CLOCK_ICON: &str = "asset/images/clock.png";

/// Open/closed indicator on the card image; exactly one variant per card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBadge {
    Open,
    Closed,
}

impl StatusBadge {
    pub fn from_open(is_open: bool) -> Self {
        if is_open {
            StatusBadge::Open
        } else {
            StatusBadge::Closed
        }
    }

    pub fn loc_key(&self) -> &'static str {
        match self {
            StatusBadge::Open => "status-open",
            StatusBadge::Closed => "status-closed",
        }
    }
}

/// Display-ready card for one restaurant. Built without touching any rendering surface.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub status: StatusBadge,
    /// Rating with exactly one decimal, e.g. "4.5".
    pub rating: String,
    /// Review count in parentheses, e.g. "(242)".
    pub reviews: String,
    pub address: String,
    pub cuisine: String,
    pub price: String,
    /// At most the first three tags; the rest still count for filtering.
    pub tags: Vec<String>,
}

impl CardView {
    pub fn from_restaurant(r: &Restaurant) -> Self {
        Self {
            id: r.id,
            name: r.name.clone(),
            image: r.image.clone(),
            status: StatusBadge::from_open(r.is_open),
            rating: rating_label(r.rating),
            reviews: format!("({})", r.reviews),
            address: address_preview(&r.address),
            cuisine: r.cuisine.clone(),
            price: r.price.clone(),
            tags: r.tags.iter().take(MAX_CARD_TAGS).cloned().collect(),
        }
    }
}

/// One decimal place, exact halves rounded up.
///
/// `{:.1}` rounds the stored binary value (4.45 -> "4.5", 0.15 -> "0.1") but sends
/// exact ties to even. A tenths tie is only exact for odd quarters (4.25, 0.75).
pub fn rating_label(rating: f64) -> String {
    let quarters = rating * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        format!("{:.1}", (rating * 10.0).round() / 10.0)
    } else {
        format!("{:.1}", rating)
    }
}

/// First 30 characters followed by "...", cut without regard to word boundaries.
pub fn address_preview(address: &str) -> String {
    let mut s: String = address.chars().take(ADDRESS_PREVIEW_CHARS).collect();
    s.push_str("...");
    s
}

// UI constants kept in one place instead of scattered magic numbers.

/// Default card width in logical pixels
pub const CARD_WIDTH: f32 = 300.0;

/// Gap between cards in the grid
pub const CARD_GAP: f32 = 16.0;

/// Default artificial latency of a grid render, in milliseconds
pub const RENDER_DELAY_MS: u64 = 300;

/// Tags shown on a card; the rest are only used for filtering
pub const MAX_CARD_TAGS: usize = 3;

/// Characters of the address kept before the ellipsis
pub const ADDRESS_PREVIEW_CHARS: usize = 30;

/// UI spacing constants
pub mod spacing {
    /// Small spacing (4px)
    pub const SMALL: f32 = 4.0;

    /// Medium spacing (8px)
    pub const MEDIUM: f32 = 8.0;

    /// Extra large spacing (24px)
    pub const XLARGE: f32 = 24.0;
}

/// Card-specific layout constants
pub mod card {
    /// Inner margin of card frame (symmetric)
    pub const INNER_MARGIN: f32 = 8.0;

    /// Border radius of card corners
    pub const ROUNDING: f32 = 8.0;

    /// Height of the cover image
    pub const COVER_HEIGHT: f32 = 160.0;

    /// Space after cover image
    pub const POST_COVER_GAP: f32 = 10.0;
}

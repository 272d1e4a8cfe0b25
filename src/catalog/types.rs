use serde::Deserialize;

/// One catalog entry as shipped in `restaurants.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Restaurant {
    pub id: u32,
    pub name: String,
    pub rating: f64,
    pub reviews: u32,
    pub cuisine: String,
    pub address: String,
    /// Price tier as a repeated currency-like symbol, e.g. "PPP".
    pub price: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub is_open: bool,
    /// Image path relative to the configured asset root.
    pub image: String,
}

impl Restaurant {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

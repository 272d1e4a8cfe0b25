// Compiled-in restaurant catalog: items, derived tag set and the tag filter scan.

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

mod error;
mod filter;
mod types;

pub use error::CatalogError;
pub use filter::TagFilter;
pub use types::Restaurant;

lazy_static::lazy_static!(
    pub static ref CATALOG: Arc<Catalog> = Arc::new(
        Catalog::from_json(include_str!("restaurants.json"))
            .expect("embedded restaurants.json must be a valid catalog")
    );
);

#[derive(Debug)]
pub struct Catalog {
    items: Vec<Restaurant>,
    tags: BTreeSet<String>,
}

impl Catalog {
    /// Validates the items and derives the sorted tag set once.
    pub fn new(items: Vec<Restaurant>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for r in &items {
            if !seen.insert(r.id) {
                return Err(CatalogError::DuplicateId(r.id));
            }
            if !r.rating.is_finite() || !(0.0..=5.0).contains(&r.rating) {
                return Err(CatalogError::RatingOutOfRange {
                    id: r.id,
                    rating: r.rating,
                });
            }
        }
        let tags = items
            .iter()
            .flat_map(|r| r.tags.iter().cloned())
            .collect::<BTreeSet<_>>();
        log::debug!("catalog built: items={} tags={}", items.len(), tags.len());
        Ok(Self { items, tags })
    }

    pub fn from_json(data: &str) -> Result<Self, CatalogError> {
        let items: Vec<Restaurant> = serde_json::from_str(data)?;
        Self::new(items)
    }

    pub fn items(&self) -> &[Restaurant] {
        &self.items
    }

    /// Distinct tags across all items, lexicographically ordered.
    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Items accepted by `filter`, in collection order.
    pub fn filter<'a>(&'a self, filter: &'a TagFilter) -> impl Iterator<Item = &'a Restaurant> + 'a {
        self.items.iter().filter(move |r| filter.matches(r))
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog json error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate restaurant id: {0}")]
    DuplicateId(u32),

    #[error("rating {rating} of restaurant {id} is outside 0..=5")]
    RatingOutOfRange { id: u32, rating: f64 },
}

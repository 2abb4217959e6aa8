#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.category_empty")]
    CategoryEmpty,
    #[error("product.negative_price")]
    NegativePrice,
    #[error("product.price_too_high")]
    PriceTooHigh,
    #[error("product.not_found")]
    NotFound,
    #[error("product.query_empty")]
    QueryEmpty,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

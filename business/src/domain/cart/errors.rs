#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.item_not_found")]
    ItemNotFound,
    #[error("cart.product_not_found")]
    ProductNotFound,
    #[error("cart.product_unavailable")]
    ProductUnavailable,
    #[error("cart.invalid_quantity")]
    InvalidQuantity,
    #[error("cart.quantity_limit_exceeded")]
    QuantityLimitExceeded,
    #[error("cart.invalid_item")]
    InvalidItem,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

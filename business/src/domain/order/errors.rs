#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("checkout.empty_cart")]
    EmptyCart,
    #[error("checkout.missing_profile")]
    MissingProfile,
    #[error("checkout.invalid_profile")]
    InvalidProfile(#[from] crate::domain::profile::errors::ProfileError),
    #[error("checkout.item_unavailable")]
    ItemUnavailable(String),
    #[error("checkout.invalid_whatsapp_number")]
    InvalidWhatsappNumber,
    #[error("order.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

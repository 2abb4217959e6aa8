#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("profile.name_empty")]
    NameEmpty,
    #[error("profile.address_empty")]
    AddressEmpty,
    #[error("profile.invalid_phone")]
    InvalidPhone,
    #[error("profile.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("payment.provider_unavailable")]
    ProviderUnavailable,
    #[error("payment.order_not_found")]
    OrderNotFound,
    #[error("payment.already_paid")]
    AlreadyPaid,
    #[error("payment.order_cancelled")]
    OrderCancelled,
    #[error("payment.gateway_failed")]
    GatewayFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

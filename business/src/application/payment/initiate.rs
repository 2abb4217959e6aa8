use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::value_objects::{OrderStatus, PaymentMethod};
use crate::domain::payment::errors::PaymentError;
use crate::domain::payment::model::{PaymentRequest, PaymentSession};
use crate::domain::payment::services::PaymentGateway;
use crate::domain::payment::use_cases::initiate::{InitiatePaymentParams, InitiatePaymentUseCase};

pub struct InitiatePaymentUseCaseImpl {
    pub gateways: Vec<Arc<dyn PaymentGateway>>,
    pub order_repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
    /// Storefront origin the provider redirects back to.
    pub public_base_url: String,
}

#[async_trait]
impl InitiatePaymentUseCase for InitiatePaymentUseCaseImpl {
    async fn execute(
        &self,
        params: InitiatePaymentParams,
    ) -> Result<PaymentSession, PaymentError> {
        self.logger.info(&format!(
            "Initiating {} payment for order {}",
            params.provider, params.order_id
        ));

        let gateway = self
            .gateways
            .iter()
            .find(|g| g.provider() == params.provider)
            .ok_or(PaymentError::ProviderUnavailable)?;

        let order = self
            .order_repository
            .get_by_id(params.order_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => PaymentError::OrderNotFound,
                other => PaymentError::Repository(other),
            })?;

        match order.status {
            OrderStatus::Paid => return Err(PaymentError::AlreadyPaid),
            OrderStatus::Cancelled => return Err(PaymentError::OrderCancelled),
            OrderStatus::Pending | OrderStatus::AwaitingPayment => {}
        }

        let request = PaymentRequest::from_order(&order, params.provider, &self.public_base_url);
        let session = gateway.create_checkout(&request).await?;

        let mut updated = order.with_status(OrderStatus::AwaitingPayment);
        updated.payment_method = PaymentMethod::Online(params.provider);
        self.order_repository.save(&updated).await?;

        self.logger.info(&format!(
            "Payment session {} opened at {} for order {}",
            session.external_id, session.provider, updated.reference
        ));
        Ok(session)
    }
}

use std::sync::Arc;

use crate::domain::payment::model::PaymentProvider;
use crate::domain::payment::services::PaymentGateway;
use crate::domain::payment::use_cases::list_providers::ListPaymentProvidersUseCase;

pub struct ListPaymentProvidersUseCaseImpl {
    pub gateways: Vec<Arc<dyn PaymentGateway>>,
}

impl ListPaymentProvidersUseCase for ListPaymentProvidersUseCaseImpl {
    fn execute(&self) -> Vec<PaymentProvider> {
        PaymentProvider::ALL
            .into_iter()
            .filter(|provider| self.gateways.iter().any(|g| g.provider() == *provider))
            .collect()
    }
}

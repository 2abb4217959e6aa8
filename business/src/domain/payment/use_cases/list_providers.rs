use crate::domain::payment::model::PaymentProvider;

pub trait ListPaymentProvidersUseCase: Send + Sync {
    fn execute(&self) -> Vec<PaymentProvider>;
}

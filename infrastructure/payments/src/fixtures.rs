use business::domain::payment::model::{PaymentLine, PaymentProvider, PaymentRequest};
use business::domain::shared::value_objects::Price;
use uuid::Uuid;

pub fn payment_request(provider: PaymentProvider) -> PaymentRequest {
    PaymentRequest {
        provider,
        order_id: Uuid::parse_str("6f1c2a9e-3b4d-4e5f-8a7b-1c2d3e4f5a6b").unwrap(),
        reference: "PED-7K3QX".to_string(),
        lines: vec![
            PaymentLine {
                product_id: Uuid::parse_str("11111111-1111-4111-8111-111111111111").unwrap(),
                name: "X-Burger".to_string(),
                unit_price: Price::from_cents(2500),
                quantity: 2,
            },
            PaymentLine {
                product_id: Uuid::parse_str("22222222-2222-4222-8222-222222222222").unwrap(),
                name: "Coca-Cola 2L".to_string(),
                unit_price: Price::from_cents(1250),
                quantity: 1,
            },
        ],
        total: Price::from_cents(6250),
        customer_name: "Maria".to_string(),
        customer_phone: "11987654321".to_string(),
        success_url: "https://loja.example/pedido/PED-7K3QX?status=success".to_string(),
        failure_url: "https://loja.example/pedido/PED-7K3QX?status=failure".to_string(),
        idempotency_key: "key-123".to_string(),
    }
}

pub mod abacatepay;
pub mod client;
pub mod mercadopago;
pub mod paypal;
pub mod stripe;

pub use abacatepay::AbacatePayGateway;
pub use client::ProviderClient;
pub use mercadopago::MercadoPagoGateway;
pub use paypal::PayPalGateway;
pub use stripe::StripeGateway;

#[cfg(test)]
mod fixtures;

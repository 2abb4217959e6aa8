use std::fmt::Write;

use url::{Url, form_urlencoded};

use super::errors::OrderError;
use super::model::Order;

const WHATSAPP_BASE_URL: &str = "https://wa.me/";

/// Formats the order summary the restaurant receives on WhatsApp.
/// Asterisks are WhatsApp bold markers.
pub fn format_order_message(order: &Order) -> String {
    let mut message = String::new();

    let _ = writeln!(message, "*Novo pedido* {}", order.reference);
    let _ = writeln!(message, "*Cliente:* {}", order.customer.name);
    let _ = writeln!(message, "*Telefone:* {}", order.customer.phone);
    let _ = writeln!(message, "*Endereço:* {}", order.customer.address);
    message.push('\n');

    message.push_str("*Itens:*\n");
    for item in &order.items {
        let _ = writeln!(
            message,
            "{}x {} ({}) = {}",
            item.quantity,
            item.name,
            item.unit_price,
            item.line_total()
        );
    }
    message.push('\n');

    let _ = writeln!(message, "*Total:* {}", order.total);
    let _ = write!(message, "*Pagamento:* {}", order.payment_method.label());
    if let Some(notes) = &order.notes {
        let _ = write!(message, "\n*Observações:* {}", notes);
    }

    message
}

/// Builds `https://wa.me/<digits>?text=<message>`.
///
/// Spaces are encoded as `%20`; some WhatsApp clients show `+` literally.
pub fn whatsapp_link(number: &str, message: &str) -> Result<String, OrderError> {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < 10 {
        return Err(OrderError::InvalidWhatsappNumber);
    }

    // form_urlencoded escapes a literal '+' as %2B, so every remaining '+' is a space
    let text: String = form_urlencoded::byte_serialize(message.as_bytes())
        .collect::<String>()
        .replace('+', "%20");

    let mut url = Url::parse(WHATSAPP_BASE_URL)
        .and_then(|base| base.join(&digits))
        .map_err(|_| OrderError::InvalidWhatsappNumber)?;
    url.set_query(Some(&format!("text={}", text)));

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::model::{CustomerSnapshot, OrderItem};
    use crate::domain::order::value_objects::{OrderStatus, PaymentMethod};
    use crate::domain::shared::value_objects::{Price, SessionId};
    use chrono::Utc;
    use uuid::Uuid;

    fn order(notes: Option<&str>) -> Order {
        Order::from_repository(
            Uuid::new_v4(),
            "PED-7K3QX".to_string(),
            SessionId::new("session-1"),
            vec![
                OrderItem {
                    product_id: Uuid::new_v4(),
                    name: "X-Burger".to_string(),
                    unit_price: Price::from_cents(2500),
                    quantity: 2,
                },
                OrderItem {
                    product_id: Uuid::new_v4(),
                    name: "Coca-Cola 2L".to_string(),
                    unit_price: Price::from_cents(1200),
                    quantity: 1,
                },
            ],
            Price::from_cents(6200),
            CustomerSnapshot {
                name: "Maria".to_string(),
                phone: "(11) 98765-4321".to_string(),
                address: "Rua A, 10, Apto 2".to_string(),
            },
            PaymentMethod::Pix,
            notes.map(str::to_string),
            OrderStatus::Pending,
            Utc::now(),
            Utc::now(),
        )
    }

    #[test]
    fn should_format_order_summary() {
        let message = format_order_message(&order(None));

        let expected = "*Novo pedido* PED-7K3QX\n\
            *Cliente:* Maria\n\
            *Telefone:* (11) 98765-4321\n\
            *Endereço:* Rua A, 10, Apto 2\n\
            \n\
            *Itens:*\n\
            2x X-Burger (R$ 25,00) = R$ 50,00\n\
            1x Coca-Cola 2L (R$ 12,00) = R$ 12,00\n\
            \n\
            *Total:* R$ 62,00\n\
            *Pagamento:* Pix";
        assert_eq!(message, expected);
    }

    #[test]
    fn should_append_notes_when_present() {
        let message = format_order_message(&order(Some("Sem cebola")));

        assert!(message.ends_with("*Pagamento:* Pix\n*Observações:* Sem cebola"));
    }

    #[test]
    fn should_build_whatsapp_link_with_percent_encoded_text() {
        let link = whatsapp_link("+55 (11) 99999-0000", "Olá mundo + 1").unwrap();

        assert_eq!(link, "https://wa.me/5511999990000?text=Ol%C3%A1%20mundo%20%2B%201");
    }

    #[test]
    fn should_reject_short_whatsapp_number() {
        let result = whatsapp_link("12345", "hi");

        assert!(matches!(result, Err(OrderError::InvalidWhatsappNumber)));
    }
}

use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use super::model::{CartItem, MAX_LINE_QUANTITY};
use crate::domain::shared::value_objects::Price;

/// Keys the old storefront used for the cart array inside a snapshot object.
const SNAPSHOT_KEYS: &[&str] = &["items", "itens", "cart", "carrinho"];

/// A cart line as written by the old storefront, in either language.
#[derive(Debug, Deserialize)]
struct LegacyCartLine {
    #[serde(alias = "produto_id", alias = "product_id", alias = "productId")]
    id: Value,
    #[serde(alias = "nome")]
    name: Option<String>,
    #[serde(alias = "preco", alias = "unit_price", alias = "unitPrice")]
    price: Option<Value>,
    #[serde(alias = "quantidade", alias = "qty")]
    quantity: Option<Value>,
    #[serde(alias = "imagem", alias = "image_url")]
    image: Option<String>,
    #[serde(alias = "promocao", alias = "isPromo")]
    promo: Option<bool>,
    #[serde(alias = "preco_original", alias = "originalPrice")]
    original_price: Option<Value>,
}

/// Result of reading a legacy snapshot.
#[derive(Debug, Default)]
pub struct LegacyImport {
    pub items: Vec<CartItem>,
    /// Lines that could not be read (bad id, missing name, price out of range).
    pub dropped: usize,
}

/// Reads a cart snapshot saved by the old storefront.
///
/// Accepts a bare array of lines or an object holding the array under one of
/// the known keys. Quantities are clamped to `1..=MAX_LINE_QUANTITY`.
pub fn parse_legacy_snapshot(snapshot: &Value) -> LegacyImport {
    let lines = match snapshot {
        Value::Array(lines) => lines.as_slice(),
        Value::Object(map) => SNAPSHOT_KEYS
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_array))
            .map(Vec::as_slice)
            .unwrap_or_default(),
        _ => &[],
    };

    let mut import = LegacyImport::default();
    for line in lines {
        match serde_json::from_value::<LegacyCartLine>(line.clone())
            .ok()
            .and_then(into_cart_item)
        {
            Some(item) => import.items.push(item),
            None => import.dropped += 1,
        }
    }
    import
}

fn into_cart_item(line: LegacyCartLine) -> Option<CartItem> {
    let product_id = match &line.id {
        Value::String(s) => Uuid::parse_str(s.trim()).ok()?,
        _ => return None,
    };
    let unit_price = line.price.as_ref().and_then(Price::from_json)?;
    let original_price = line
        .original_price
        .as_ref()
        .and_then(Price::from_json)
        .unwrap_or(unit_price);
    let quantity = line
        .quantity
        .as_ref()
        .and_then(quantity_from_value)
        .unwrap_or(1)
        .clamp(1, i64::from(MAX_LINE_QUANTITY)) as u32;

    CartItem::new(
        product_id,
        line.name.unwrap_or_default(),
        unit_price,
        quantity,
        line.image.filter(|i| !i.trim().is_empty()),
        line.promo.unwrap_or(false),
        original_price,
    )
    .ok()
}

fn quantity_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.floor() as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ID: &str = "7f1c2c7e-0f0e-4a55-9c1e-5d7b0e4c2a11";

    #[test]
    fn should_read_portuguese_field_names() {
        let snapshot = json!([
            {"produto_id": ID, "nome": "X-Burger", "preco": "25,00", "quantidade": 2, "imagem": "x.jpg"}
        ]);

        let import = parse_legacy_snapshot(&snapshot);

        assert_eq!(import.dropped, 0);
        let item = &import.items[0];
        assert_eq!(item.name, "X-Burger");
        assert_eq!(item.unit_price, Price::from_cents(2500));
        assert_eq!(item.quantity, 2);
        assert_eq!(item.image_url.as_deref(), Some("x.jpg"));
    }

    #[test]
    fn should_read_english_field_names_inside_object() {
        let snapshot = json!({
            "items": [{"id": ID, "name": "Pizza", "price": 39.9, "quantity": 1}]
        });

        let import = parse_legacy_snapshot(&snapshot);

        assert_eq!(import.items.len(), 1);
        assert_eq!(import.items[0].unit_price, Price::from_cents(3990));
        assert_eq!(import.items[0].original_price, Price::from_cents(3990));
    }

    #[test]
    fn should_clamp_quantities() {
        let snapshot = json!([
            {"id": ID, "name": "Suco", "price": 8, "qty": 500}
        ]);

        let import = parse_legacy_snapshot(&snapshot);

        assert_eq!(import.items[0].quantity, MAX_LINE_QUANTITY);
    }

    #[test]
    fn should_drop_invalid_lines() {
        let snapshot = json!([
            {"id": 42, "name": "Numeric id", "price": 8},
            {"id": ID, "name": "", "price": 8},
            {"id": ID, "name": "Negative", "price": -1},
            {"id": ID, "name": "No price"},
            "garbage"
        ]);

        let import = parse_legacy_snapshot(&snapshot);

        assert!(import.items.is_empty());
        assert_eq!(import.dropped, 5);
    }

    #[test]
    fn should_drop_lines_priced_beyond_column_limit() {
        let snapshot = json!([
            {"id": ID, "name": "Pizza Grande", "price": 9e16, "quantity": 2}
        ]);

        let import = parse_legacy_snapshot(&snapshot);

        assert!(import.items.is_empty());
        assert_eq!(import.dropped, 1);
    }

    #[test]
    fn should_return_nothing_for_unexpected_shapes() {
        let import = parse_legacy_snapshot(&json!("not a cart"));

        assert!(import.items.is_empty());
        assert_eq!(import.dropped, 0);
    }
}

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::CartError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::{Price, SessionId};

/// Upper bound for a single line's quantity.
pub const MAX_LINE_QUANTITY: u32 = 99;

/// A cart line. Name, price and image are snapshots taken when the product was added.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product_id: Uuid,
    pub name: String,
    pub unit_price: Price,
    pub quantity: u32,
    pub image_url: Option<String>,
    pub is_promo: bool,
    pub original_price: Price,
}

impl CartItem {
    pub fn new(
        product_id: Uuid,
        name: String,
        unit_price: Price,
        quantity: u32,
        image_url: Option<String>,
        is_promo: bool,
        original_price: Price,
    ) -> Result<Self, CartError> {
        if name.trim().is_empty() || !unit_price.is_in_range() || !original_price.is_in_range() {
            return Err(CartError::InvalidItem);
        }
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }
        if quantity > MAX_LINE_QUANTITY {
            return Err(CartError::QuantityLimitExceeded);
        }

        Ok(Self {
            product_id,
            name: name.trim().to_string(),
            unit_price,
            quantity,
            image_url,
            is_promo,
            original_price,
        })
    }

    /// Snapshots a catalog product into a line.
    pub fn from_product(product: &Product, quantity: u32) -> Result<Self, CartError> {
        Self::new(
            product.id,
            product.name.clone(),
            product.effective_price(),
            quantity,
            product.image_url.clone(),
            product.has_active_promo(),
            product.price,
        )
    }

    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }

    pub fn line_savings(&self) -> Price {
        if self.is_promo && self.original_price > self.unit_price {
            (self.original_price - self.unit_price).times(self.quantity)
        } else {
            Price::ZERO
        }
    }
}

/// Mutations the cart accepts. Every change to a cart goes through [`Cart::apply`].
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Adds a line, or increases the quantity of the line with the same product.
    Add(CartItem),
    /// Sets a line's quantity; zero or less removes the line.
    SetQuantity { product_id: Uuid, quantity: i64 },
    Remove(Uuid),
    Clear,
    /// Replaces every line, merging duplicates and clamping quantities.
    Replace(Vec<CartItem>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartTotals {
    pub item_count: u32,
    pub subtotal: Price,
    pub savings: Price,
    pub total: Price,
}

#[derive(Debug, Clone)]
pub struct Cart {
    pub session_id: SessionId,
    items: Vec<CartItem>,
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            items: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        session_id: SessionId,
        items: Vec<CartItem>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            session_id,
            items,
            updated_at,
        }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, product_id: Uuid) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    pub fn apply(&mut self, action: CartAction) -> Result<(), CartError> {
        match action {
            CartAction::Add(item) => self.add(item)?,
            CartAction::SetQuantity {
                product_id,
                quantity,
            } => self.set_quantity(product_id, quantity)?,
            CartAction::Remove(product_id) => {
                let position = self.position(product_id)?;
                self.items.remove(position);
            }
            CartAction::Clear => self.items.clear(),
            CartAction::Replace(items) => {
                self.items.clear();
                for item in items {
                    self.merge_clamped(item);
                }
            }
        }

        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn totals(&self) -> CartTotals {
        let subtotal: Price = self.items.iter().map(CartItem::line_total).sum();
        CartTotals {
            item_count: self.items.iter().map(|i| i.quantity).sum(),
            subtotal,
            savings: self.items.iter().map(CartItem::line_savings).sum(),
            total: subtotal,
        }
    }

    fn position(&self, product_id: Uuid) -> Result<usize, CartError> {
        self.items
            .iter()
            .position(|i| i.product_id == product_id)
            .ok_or(CartError::ItemNotFound)
    }

    fn add(&mut self, item: CartItem) -> Result<(), CartError> {
        match self.items.iter_mut().find(|i| i.product_id == item.product_id) {
            Some(existing) => {
                let quantity = existing.quantity + item.quantity;
                if quantity > MAX_LINE_QUANTITY {
                    return Err(CartError::QuantityLimitExceeded);
                }
                // Keep the line position but refresh the snapshot to the latest catalog data
                *existing = CartItem { quantity, ..item };
            }
            None => self.items.push(item),
        }
        Ok(())
    }

    fn set_quantity(&mut self, product_id: Uuid, quantity: i64) -> Result<(), CartError> {
        let position = self.position(product_id)?;
        if quantity <= 0 {
            self.items.remove(position);
            return Ok(());
        }
        if quantity > i64::from(MAX_LINE_QUANTITY) {
            return Err(CartError::QuantityLimitExceeded);
        }
        self.items[position].quantity = quantity as u32;
        Ok(())
    }

    fn merge_clamped(&mut self, item: CartItem) {
        match self.items.iter_mut().find(|i| i.product_id == item.product_id) {
            Some(existing) => {
                existing.quantity = (existing.quantity + item.quantity).min(MAX_LINE_QUANTITY);
            }
            None => {
                let quantity = item.quantity.clamp(1, MAX_LINE_QUANTITY);
                self.items.push(CartItem { quantity, ..item });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(product_id: Uuid, price: i64, quantity: u32) -> CartItem {
        CartItem::new(
            product_id,
            "X-Burger".to_string(),
            Price::from_cents(price),
            quantity,
            None,
            false,
            Price::from_cents(price),
        )
        .unwrap()
    }

    fn cart() -> Cart {
        Cart::new(SessionId::new("session-1"))
    }

    #[test]
    fn should_merge_lines_with_same_product() {
        let id = Uuid::new_v4();
        let mut cart = cart();

        cart.apply(CartAction::Add(item(id, 2500, 1))).unwrap();
        cart.apply(CartAction::Add(item(id, 2500, 2))).unwrap();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
    }

    #[test]
    fn should_keep_insertion_order() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let mut cart = cart();

        cart.apply(CartAction::Add(item(first, 100, 1))).unwrap();
        cart.apply(CartAction::Add(item(second, 100, 1))).unwrap();
        cart.apply(CartAction::Add(item(first, 100, 1))).unwrap();

        assert_eq!(cart.items()[0].product_id, first);
        assert_eq!(cart.items()[1].product_id, second);
    }

    #[test]
    fn should_reject_add_beyond_line_limit() {
        let id = Uuid::new_v4();
        let mut cart = cart();
        cart.apply(CartAction::Add(item(id, 100, 98))).unwrap();

        let result = cart.apply(CartAction::Add(item(id, 100, 2)));

        assert!(matches!(result, Err(CartError::QuantityLimitExceeded)));
        assert_eq!(cart.items()[0].quantity, 98);
    }

    #[test]
    fn should_remove_line_when_quantity_set_to_zero() {
        let id = Uuid::new_v4();
        let mut cart = cart();
        cart.apply(CartAction::Add(item(id, 100, 3))).unwrap();

        cart.apply(CartAction::SetQuantity {
            product_id: id,
            quantity: 0,
        })
        .unwrap();

        assert!(cart.is_empty());
    }

    #[test]
    fn should_fail_when_updating_missing_line() {
        let mut cart = cart();

        let result = cart.apply(CartAction::SetQuantity {
            product_id: Uuid::new_v4(),
            quantity: 2,
        });

        assert!(matches!(result, Err(CartError::ItemNotFound)));
    }

    #[test]
    fn should_fail_when_removing_missing_line() {
        let mut cart = cart();

        let result = cart.apply(CartAction::Remove(Uuid::new_v4()));

        assert!(matches!(result, Err(CartError::ItemNotFound)));
    }

    #[test]
    fn should_reject_zero_quantity_item() {
        let result = CartItem::new(
            Uuid::new_v4(),
            "Suco".to_string(),
            Price::from_cents(800),
            0,
            None,
            false,
            Price::from_cents(800),
        );

        assert!(matches!(result, Err(CartError::InvalidQuantity)));
    }

    #[test]
    fn should_reject_price_above_column_limit() {
        let result = CartItem::new(
            Uuid::new_v4(),
            "Pizza".to_string(),
            Price::from_cents(9_000_000_000_000_000),
            2,
            None,
            false,
            Price::from_cents(800),
        );

        assert!(matches!(result, Err(CartError::InvalidItem)));
    }

    #[test]
    fn should_compute_totals_and_promo_savings() {
        let mut cart = cart();
        cart.apply(CartAction::Add(item(Uuid::new_v4(), 2500, 2)))
            .unwrap();
        let promo = CartItem::new(
            Uuid::new_v4(),
            "Pizza".to_string(),
            Price::from_cents(4000),
            1,
            None,
            true,
            Price::from_cents(5000),
        )
        .unwrap();
        cart.apply(CartAction::Add(promo)).unwrap();

        let totals = cart.totals();

        assert_eq!(totals.item_count, 3);
        assert_eq!(totals.subtotal, Price::from_cents(9000));
        assert_eq!(totals.savings, Price::from_cents(1000));
        assert_eq!(totals.total, totals.subtotal);
    }

    #[test]
    fn should_merge_and_clamp_on_replace() {
        let id = Uuid::new_v4();
        let mut cart = cart();
        cart.apply(CartAction::Add(item(Uuid::new_v4(), 100, 1)))
            .unwrap();

        cart.apply(CartAction::Replace(vec![item(id, 100, 60), item(id, 100, 60)]))
            .unwrap();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, MAX_LINE_QUANTITY);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(usize, u32),
        Set(usize, i64),
        Remove(usize),
        Clear,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0usize..4, 1u32..10).prop_map(|(i, q)| Op::Add(i, q)),
            (0usize..4, -3i64..20).prop_map(|(i, q)| Op::Set(i, q)),
            (0usize..4).prop_map(Op::Remove),
            Just(Op::Clear),
        ]
    }

    proptest! {
        #[test]
        fn totals_always_match_lines(ops in prop::collection::vec(op_strategy(), 0..40)) {
            let ids: Vec<Uuid> = (0..4).map(|_| Uuid::new_v4()).collect();
            let mut cart = cart();

            for op in ops {
                // Errors (missing line, limit exceeded) leave the cart untouched
                let _ = match op {
                    Op::Add(i, q) => cart.apply(CartAction::Add(item(ids[i], 150, q))),
                    Op::Set(i, q) => cart.apply(CartAction::SetQuantity { product_id: ids[i], quantity: q }),
                    Op::Remove(i) => cart.apply(CartAction::Remove(ids[i])),
                    Op::Clear => cart.apply(CartAction::Clear),
                };

                let totals = cart.totals();
                let quantity: u32 = cart.items().iter().map(|i| i.quantity).sum();
                prop_assert_eq!(totals.item_count, quantity);
                prop_assert_eq!(totals.subtotal, Price::from_cents(150 * i64::from(quantity)));
                prop_assert!(cart.items().iter().all(|i| (1..=MAX_LINE_QUANTITY).contains(&i.quantity)));

                let mut seen = std::collections::HashSet::new();
                prop_assert!(cart.items().iter().all(|i| seen.insert(i.product_id)));
            }
        }
    }
}

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ProductError;
use crate::domain::shared::value_objects::Price;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price: Price,
    pub is_promo: bool,
    pub promo_price: Option<Price>,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price: Price,
    pub is_promo: bool,
    pub promo_price: Option<Price>,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub is_featured: bool,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        validate(&props.name, &props.category, props.price, props.promo_price)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name.trim().to_string(),
            description: clean_optional(props.description),
            category: props.category.trim().to_string(),
            price: props.price,
            is_promo: props.is_promo,
            promo_price: props.promo_price,
            image_url: clean_optional(props.image_url),
            is_available: props.is_available,
            is_featured: props.is_featured,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        name: String,
        description: Option<String>,
        category: String,
        price: Price,
        is_promo: bool,
        promo_price: Option<Price>,
        image_url: Option<String>,
        is_available: bool,
        is_featured: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            category,
            price,
            is_promo,
            promo_price,
            image_url,
            is_available,
            is_featured,
            created_at,
            updated_at,
        }
    }

    /// Replaces the editable fields, keeping id and creation date.
    pub fn apply_update(&self, props: NewProductProps) -> Result<Self, ProductError> {
        validate(&props.name, &props.category, props.price, props.promo_price)?;

        Ok(Self {
            id: self.id,
            name: props.name.trim().to_string(),
            description: clean_optional(props.description),
            category: props.category.trim().to_string(),
            price: props.price,
            is_promo: props.is_promo,
            promo_price: props.promo_price,
            image_url: clean_optional(props.image_url),
            is_available: props.is_available,
            is_featured: props.is_featured,
            created_at: self.created_at,
            updated_at: Utc::now(),
        })
    }

    /// True when the promo flag is set and the promo price actually undercuts the price.
    pub fn has_active_promo(&self) -> bool {
        self.is_promo
            && self
                .promo_price
                .is_some_and(|promo| promo < self.price && !promo.is_negative())
    }

    /// Price charged to the customer.
    pub fn effective_price(&self) -> Price {
        match self.promo_price {
            Some(promo) if self.has_active_promo() => promo,
            _ => self.price,
        }
    }
}

fn validate(
    name: &str,
    category: &str,
    price: Price,
    promo_price: Option<Price>,
) -> Result<(), ProductError> {
    if name.trim().is_empty() {
        return Err(ProductError::NameEmpty);
    }
    if category.trim().is_empty() {
        return Err(ProductError::CategoryEmpty);
    }
    if price.is_negative() || promo_price.is_some_and(|p| p.is_negative()) {
        return Err(ProductError::NegativePrice);
    }
    if price > Price::MAX || promo_price.is_some_and(|p| p > Price::MAX) {
        return Err(ProductError::PriceTooHigh);
    }
    Ok(())
}

fn clean_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;

use business::domain::shared::value_objects::Price;

/// `NUMERIC(10,2)` value for a price.
pub fn price_to_decimal(price: Price) -> BigDecimal {
    (BigDecimal::from(price.cents()) / BigDecimal::from(100)).with_scale(2)
}

/// Reads a `NUMERIC` column back as cents. Extra decimals are rounded.
pub fn decimal_to_price(value: &BigDecimal) -> Option<Price> {
    (value * &BigDecimal::from(100))
        .round(0)
        .to_i64()
        .map(Price::from_cents)
}

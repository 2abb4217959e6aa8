use std::iter::Sum;
use std::ops::{Add, Sub};

use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Opaque identifier the storefront generates for a customer session.
/// Owns one cart, one delivery profile and one chat history.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Creates a new SessionId from any type that can be converted into a String.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Monetary amount in BRL, stored as integer cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    pub const ZERO: Price = Price(0);
    /// Largest amount a `NUMERIC(10,2)` column holds.
    pub const MAX: Price = Price(9_999_999_999);

    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Converts an amount in reais (e.g. `12.5`) to cents, rounding to the nearest cent.
    /// Returns `None` for NaN, infinities and values outside the `i64` range.
    pub fn from_major(value: f64) -> Option<Self> {
        (value * 100.0).round().to_i64().map(Self)
    }

    /// Parses a price written either as `12.50` or in Brazilian notation (`1.234,50`).
    pub fn parse(text: &str) -> Option<Self> {
        let cleaned: String = text
            .trim()
            .trim_start_matches("R$")
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        if cleaned.is_empty() {
            return None;
        }

        let normalized = if cleaned.contains(',') {
            cleaned.replace('.', "").replace(',', ".")
        } else {
            cleaned
        };

        normalized.parse::<f64>().ok().and_then(Self::from_major)
    }

    /// Reads a price stored either as a JSON number in reais or as a string.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => n.as_f64().and_then(Self::from_major),
            serde_json::Value::String(s) => Self::parse(s),
            _ => None,
        }
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// True for amounts a product or cart line may carry: `0..=Price::MAX`.
    pub fn is_in_range(&self) -> bool {
        (0..=Self::MAX.0).contains(&self.0)
    }

    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(i64::from(quantity)))
    }

    /// Amount in reais, for payment APIs that take floating point values.
    pub fn as_major(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Plain decimal notation with a dot separator (`1234.50`).
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl std::fmt::Display for Price {
    /// Formats as `R$ 1.234,50`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let reais = (abs / 100).to_string();

        let mut grouped = String::with_capacity(reais.len() + reais.len() / 3);
        for (i, digit) in reais.chars().enumerate() {
            if i > 0 && (reais.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(digit);
        }

        write!(f, "{}R$ {},{:02}", sign, grouped, abs % 100)
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Price {
    type Output = Price;

    fn sub(self, rhs: Price) -> Price {
        Price(self.0.saturating_sub(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, |acc, p| acc + p)
    }
}

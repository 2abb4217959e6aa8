use chrono::{DateTime, Utc};

use super::errors::ProfileError;
use crate::domain::shared::value_objects::SessionId;

const MIN_PHONE_DIGITS: usize = 10;
const MAX_PHONE_DIGITS: usize = 13;

/// Where and to whom an order is delivered.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryProfile {
    pub session_id: SessionId,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub complement: Option<String>,
    pub notes: Option<String>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewDeliveryProfileProps {
    pub session_id: SessionId,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub complement: Option<String>,
    pub notes: Option<String>,
}

impl DeliveryProfile {
    pub fn new(props: NewDeliveryProfileProps) -> Result<Self, ProfileError> {
        let profile = Self {
            session_id: props.session_id,
            name: props.name.trim().to_string(),
            phone: props.phone.trim().to_string(),
            address: props.address.trim().to_string(),
            complement: props
                .complement
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
            notes: props
                .notes
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
            updated_at: Utc::now(),
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        session_id: SessionId,
        name: String,
        phone: String,
        address: String,
        complement: Option<String>,
        notes: Option<String>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            session_id,
            name,
            phone,
            address,
            complement,
            notes,
            updated_at,
        }
    }

    /// Also run at checkout against the stored profile.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.name.trim().is_empty() {
            return Err(ProfileError::NameEmpty);
        }
        if self.address.trim().is_empty() {
            return Err(ProfileError::AddressEmpty);
        }
        let digits = self.phone_digits().len();
        if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits) {
            return Err(ProfileError::InvalidPhone);
        }
        Ok(())
    }

    pub fn phone_digits(&self) -> String {
        self.phone.chars().filter(char::is_ascii_digit).collect()
    }

    /// Address line including the complement, as printed on the order.
    pub fn full_address(&self) -> String {
        match &self.complement {
            Some(complement) => format!("{}, {}", self.address, complement),
            None => self.address.clone(),
        }
    }
}

use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::profile::model::DeliveryProfile;

#[derive(Debug, Clone, Object)]
pub struct SaveProfileRequest {
    pub name: String,
    /// Phone number, 10 to 13 digits once formatting is removed
    pub phone: String,
    pub address: String,
    #[oai(skip_serializing_if_is_none)]
    pub complement: Option<String>,
    /// Default delivery notes, e.g. "ring the bell"
    #[oai(skip_serializing_if_is_none)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct ProfileResponse {
    pub name: String,
    pub phone: String,
    pub address: String,
    #[oai(skip_serializing_if_is_none)]
    pub complement: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub notes: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<DeliveryProfile> for ProfileResponse {
    fn from(profile: DeliveryProfile) -> Self {
        Self {
            name: profile.name,
            phone: profile.phone,
            address: profile.address,
            complement: profile.complement,
            notes: profile.notes,
            updated_at: profile.updated_at,
        }
    }
}

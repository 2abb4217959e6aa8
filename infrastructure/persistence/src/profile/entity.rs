use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::profile::model::DeliveryProfile;
use business::domain::shared::value_objects::SessionId;

#[derive(Debug, FromRow)]
pub struct DeliveryProfileEntity {
    pub session_id: String,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub complement: Option<String>,
    pub notes: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl DeliveryProfileEntity {
    pub fn into_domain(self) -> DeliveryProfile {
        DeliveryProfile::from_repository(
            SessionId::new(self.session_id),
            self.name,
            self.phone,
            self.address,
            self.complement,
            self.notes,
            self.updated_at,
        )
    }
}

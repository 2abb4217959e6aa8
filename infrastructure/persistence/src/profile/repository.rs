use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::profile::model::DeliveryProfile;
use business::domain::profile::repository::ProfileRepository;
use business::domain::shared::value_objects::SessionId;

use super::entity::DeliveryProfileEntity;
use crate::table::Table;

pub struct ProfileRepositoryPostgres {
    pool: PgPool,
}

impl ProfileRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn get(
        &self,
        session_id: &SessionId,
    ) -> Result<Option<DeliveryProfile>, RepositoryError> {
        let entity = sqlx::query_as::<_, DeliveryProfileEntity>(&format!(
            "SELECT session_id, name, phone, address, complement, notes, updated_at FROM {} WHERE session_id = $1",
            Table::DeliveryProfiles
        ))
        .bind(session_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn save(&self, profile: &DeliveryProfile) -> Result<(), RepositoryError> {
        sqlx::query(&format!(
            r#"INSERT INTO {} (session_id, name, phone, address, complement, notes, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (session_id) DO UPDATE SET
                name = EXCLUDED.name,
                phone = EXCLUDED.phone,
                address = EXCLUDED.address,
                complement = EXCLUDED.complement,
                notes = EXCLUDED.notes,
                updated_at = EXCLUDED.updated_at"#,
            Table::DeliveryProfiles
        ))
        .bind(profile.session_id.as_str())
        .bind(&profile.name)
        .bind(&profile.phone)
        .bind(&profile.address)
        .bind(&profile.complement)
        .bind(&profile.notes)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}

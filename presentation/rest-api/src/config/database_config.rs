use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;

use super::env::{ConfigError, EnvLookup, flag_or, optional, parsed_or, required};

pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub run_migrations: bool,
    pub migrations_path: String,
}

impl DatabaseSettings {
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string (required)
    /// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
    /// - RUN_MIGRATIONS: apply migrations on startup (default: true)
    /// - MIGRATIONS_PATH: directory with the SQL migrations (default: "./migrations")
    pub fn from_lookup(lookup: &impl EnvLookup) -> Result<Self, ConfigError> {
        Ok(Self {
            url: required(lookup, "DATABASE_URL")?,
            max_connections: parsed_or(lookup, "DATABASE_MAX_CONNECTIONS", 5)?,
            run_migrations: flag_or(lookup, "RUN_MIGRATIONS", true)?,
            migrations_path: optional(lookup, "MIGRATIONS_PATH")
                .unwrap_or_else(|| "./migrations".to_string()),
        })
    }
}

/// Opens the connection pool and applies pending migrations when enabled.
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let config = DatabaseConfig::new(settings.url.clone())
        .with_max_connections(settings.max_connections);
    let pool = create_postgres_pool(&config).await?;

    if settings.run_migrations {
        run_migrations(&pool, &settings.migrations_path).await?;
    }

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env::lookup_from;

    #[test]
    fn should_require_database_url() {
        let result = DatabaseSettings::from_lookup(&lookup_from(&[]));

        assert!(matches!(result, Err(ConfigError::Missing("DATABASE_URL"))));
    }

    #[test]
    fn should_apply_defaults() {
        let settings =
            DatabaseSettings::from_lookup(&lookup_from(&[("DATABASE_URL", "postgres://db/app")]))
                .unwrap();

        assert_eq!(settings.max_connections, 5);
        assert!(settings.run_migrations);
        assert_eq!(settings.migrations_path, "./migrations");
    }
}

use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::search::ProductIndex;
use crate::domain::product::use_cases::search::{SearchProductsParams, SearchProductsUseCase};

/// Keyword search over the available catalog.
///
/// Keeps a [`ProductIndex`] in memory and rebuilds it from the repository once
/// it is older than `ttl`. The lock is never held across an await.
pub struct SearchProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
    ttl: Duration,
    index: RwLock<Option<Arc<ProductIndex>>>,
}

impl SearchProductsUseCaseImpl {
    pub fn new(
        repository: Arc<dyn ProductRepository>,
        logger: Arc<dyn Logger>,
        ttl: Duration,
    ) -> Self {
        Self {
            repository,
            logger,
            ttl,
            index: RwLock::new(None),
        }
    }

    async fn current_index(&self) -> Result<Arc<ProductIndex>, ProductError> {
        if let Ok(cache) = self.index.read()
            && let Some(index) = cache.as_ref()
            && !index.is_older_than(self.ttl)
        {
            return Ok(Arc::clone(index));
        }

        let products = self.repository.get_available().await?;
        let index = Arc::new(ProductIndex::build(products));
        self.logger
            .debug(&format!("Product index rebuilt with {} entries", index.len()));

        if let Ok(mut cache) = self.index.write() {
            *cache = Some(Arc::clone(&index));
        }
        Ok(index)
    }
}

#[async_trait]
impl SearchProductsUseCase for SearchProductsUseCaseImpl {
    async fn execute(&self, params: SearchProductsParams) -> Result<Vec<Product>, ProductError> {
        let query = params.query.trim();
        if query.is_empty() {
            return Err(ProductError::QueryEmpty);
        }

        self.logger.info(&format!("Searching products: {}", query));

        let index = self.current_index().await?;
        Ok(index.search(query, params.limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::Price;
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
            async fn get_available(&self) -> Result<Vec<Product>, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn product(name: &str, category: &str) -> Product {
        Product::from_repository(
            Uuid::new_v4(),
            name.to_string(),
            None,
            category.to_string(),
            Price::from_cents(3500),
            false,
            None,
            None,
            true,
            false,
            Utc::now(),
            Utc::now(),
        )
    }

    fn menu() -> Vec<Product> {
        vec![
            product("Pizza Calabresa", "Pizzas"),
            product("Pizza Margherita", "Pizzas"),
            product("Suco de Laranja", "Bebidas"),
        ]
    }

    #[tokio::test]
    async fn should_return_matching_products() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_available().returning(|| Ok(menu()));

        let use_case = SearchProductsUseCaseImpl::new(
            Arc::new(mock_repo),
            mock_logger(),
            Duration::from_secs(300),
        );

        let result = use_case
            .execute(SearchProductsParams {
                query: "quero uma pizza de calabresa".to_string(),
                limit: 5,
            })
            .await
            .unwrap();

        assert_eq!(result[0].name, "Pizza Calabresa");
        assert_eq!(result.len(), 2);
    }

    #[tokio::test]
    async fn should_reuse_index_within_ttl() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_available()
            .times(1)
            .returning(|| Ok(menu()));

        let use_case = SearchProductsUseCaseImpl::new(
            Arc::new(mock_repo),
            mock_logger(),
            Duration::from_secs(300),
        );

        for query in ["pizza", "suco"] {
            let result = use_case
                .execute(SearchProductsParams {
                    query: query.to_string(),
                    limit: 5,
                })
                .await;
            assert!(result.is_ok());
        }
    }

    #[tokio::test]
    async fn should_rebuild_index_when_expired() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_available()
            .times(2)
            .returning(|| Ok(menu()));

        let use_case =
            SearchProductsUseCaseImpl::new(Arc::new(mock_repo), mock_logger(), Duration::ZERO);

        for _ in 0..2 {
            let result = use_case
                .execute(SearchProductsParams {
                    query: "pizza".to_string(),
                    limit: 5,
                })
                .await;
            assert!(result.is_ok());
        }
    }

    #[tokio::test]
    async fn should_reject_blank_query() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_available().never();

        let use_case = SearchProductsUseCaseImpl::new(
            Arc::new(mock_repo),
            mock_logger(),
            Duration::from_secs(300),
        );

        let result = use_case
            .execute(SearchProductsParams {
                query: "   ".to_string(),
                limit: 5,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::QueryEmpty));
    }
}

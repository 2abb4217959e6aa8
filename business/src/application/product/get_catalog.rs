use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::catalog::{Catalog, build_catalog};
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::{CategoryRepository, ProductRepository};
use crate::domain::product::use_cases::get_catalog::GetCatalogUseCase;

pub struct GetCatalogUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCatalogUseCase for GetCatalogUseCaseImpl {
    async fn execute(&self) -> Result<Catalog, ProductError> {
        self.logger.info("Getting catalog");

        let products = self.repository.get_available().await?;

        // Sections still render without category rows, in alphabetical order
        let categories = match self.category_repository.get_all().await {
            Ok(categories) => categories,
            Err(e) => {
                self.logger
                    .warn(&format!("Failed to load categories, using defaults: {}", e));
                vec![]
            }
        };

        let catalog = build_catalog(products, &categories);

        self.logger.debug(&format!(
            "Catalog built with {} sections and {} featured products",
            catalog.sections.len(),
            catalog.featured.len()
        ));
        Ok(catalog)
    }
}

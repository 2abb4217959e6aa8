use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::get_catalog::GetCatalogUseCase;
use business::domain::product::use_cases::get_categories::GetCategoriesUseCase;
use business::domain::product::use_cases::search::{SearchProductsParams, SearchProductsUseCase};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::catalog::dto::{
    CatalogResponse, CategoryResponse, ProductRequest, ProductResponse,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::AdminKey;
use crate::api::tags::ApiTags;

const DEFAULT_SEARCH_LIMIT: usize = 10;
const MAX_SEARCH_LIMIT: usize = 50;

pub struct CatalogApi {
    get_catalog_use_case: Arc<dyn GetCatalogUseCase>,
    get_categories_use_case: Arc<dyn GetCategoriesUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    search_use_case: Arc<dyn SearchProductsUseCase>,
    create_use_case: Arc<dyn CreateProductUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl CatalogApi {
    pub fn new(
        get_catalog_use_case: Arc<dyn GetCatalogUseCase>,
        get_categories_use_case: Arc<dyn GetCategoriesUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        search_use_case: Arc<dyn SearchProductsUseCase>,
        create_use_case: Arc<dyn CreateProductUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            get_catalog_use_case,
            get_categories_use_case,
            get_by_id_use_case,
            search_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

fn parse_product_id(id: &str) -> Result<Uuid, Json<ErrorResponse>> {
    Uuid::parse_str(id).map_err(|_| ErrorResponse::validation("product.invalid_id"))
}

/// Catalog API
///
/// Public menu browsing plus admin-only product management.
#[OpenApi]
impl CatalogApi {
    /// Get the menu
    ///
    /// Available products grouped by category, plus the featured list.
    #[oai(path = "/catalog", method = "get", tag = "ApiTags::Catalog")]
    async fn get_catalog(&self) -> GetCatalogResponse {
        match self.get_catalog_use_case.execute().await {
            Ok(catalog) => GetCatalogResponse::Ok(Json(catalog.into())),
            Err(err) => {
                let (_, json) = err.into_error_response();
                GetCatalogResponse::InternalError(json)
            }
        }
    }

    /// List categories
    #[oai(path = "/categories", method = "get", tag = "ApiTags::Catalog")]
    async fn get_categories(&self) -> GetCategoriesResponse {
        match self.get_categories_use_case.execute().await {
            Ok(categories) => GetCategoriesResponse::Ok(Json(
                categories.into_iter().map(|c| c.into()).collect(),
            )),
            Err(err) => {
                let (_, json) = err.into_error_response();
                GetCategoriesResponse::InternalError(json)
            }
        }
    }

    /// Search products
    ///
    /// Accent- and case-insensitive keyword search over available products.
    #[oai(path = "/products/search", method = "get", tag = "ApiTags::Catalog")]
    async fn search_products(
        &self,
        /// Search text
        q: Query<String>,
        /// Maximum number of results (default: 10, max: 50)
        limit: Query<Option<usize>>,
    ) -> SearchProductsResponse {
        let limit = limit.0.unwrap_or(DEFAULT_SEARCH_LIMIT).clamp(1, MAX_SEARCH_LIMIT);

        match self
            .search_use_case
            .execute(SearchProductsParams { query: q.0, limit })
            .await
        {
            Ok(products) => {
                SearchProductsResponse::Ok(Json(products.into_iter().map(|p| p.into()).collect()))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SearchProductsResponse::BadRequest(json),
                    _ => SearchProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Catalog")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let id = match parse_product_id(&id.0) {
            Ok(id) => id,
            Err(json) => return GetProductByIdResponse::BadRequest(json),
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a product
    ///
    /// Requires the `X-Api-Key` admin header.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Catalog")]
    async fn create_product(
        &self,
        _auth: AdminKey,
        body: Json<ProductRequest>,
    ) -> CreateProductResponse {
        let Some((price, promo_price)) = body.0.prices() else {
            return CreateProductResponse::BadRequest(ErrorResponse::validation(
                "product.invalid_price",
            ));
        };

        let params = CreateProductParams {
            name: body.0.name,
            description: body.0.description,
            category: body.0.category,
            price,
            is_promo: body.0.is_promo,
            promo_price,
            image_url: body.0.image_url,
            is_available: body.0.is_available,
            is_featured: body.0.is_featured,
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Replaces every field of an existing product. Requires the `X-Api-Key` admin header.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Catalog")]
    async fn update_product(
        &self,
        _auth: AdminKey,
        id: Path<String>,
        body: Json<ProductRequest>,
    ) -> UpdateProductResponse {
        let id = match parse_product_id(&id.0) {
            Ok(id) => id,
            Err(json) => return UpdateProductResponse::BadRequest(json),
        };
        let Some((price, promo_price)) = body.0.prices() else {
            return UpdateProductResponse::BadRequest(ErrorResponse::validation(
                "product.invalid_price",
            ));
        };

        let params = UpdateProductParams {
            id,
            name: body.0.name,
            description: body.0.description,
            category: body.0.category,
            price,
            is_promo: body.0.is_promo,
            promo_price,
            image_url: body.0.image_url,
            is_available: body.0.is_available,
            is_featured: body.0.is_featured,
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Requires the `X-Api-Key` admin header.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Catalog")]
    async fn delete_product(&self, _auth: AdminKey, id: Path<String>) -> DeleteProductResponse {
        let id = match parse_product_id(&id.0) {
            Ok(id) => id,
            Err(json) => return DeleteProductResponse::BadRequest(json),
        };

        match self.delete_use_case.execute(DeleteProductParams { id }).await {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCatalogResponse {
    #[oai(status = 200)]
    Ok(Json<CatalogResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCategoriesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CategoryResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SearchProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::cart::errors::CartError;
use business::domain::cart::model::Cart;
use business::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use business::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use business::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use business::domain::cart::use_cases::import_legacy::{
    ImportLegacyCartParams, ImportLegacyCartUseCase,
};
use business::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use business::domain::cart::use_cases::update_quantity::{
    UpdateCartQuantityParams, UpdateCartQuantityUseCase,
};

use crate::api::cart::dto::{AddCartItemRequest, CartResponse, UpdateCartQuantityRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::SessionHeader;
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_use_case: Arc<dyn GetCartUseCase>,
    add_item_use_case: Arc<dyn AddCartItemUseCase>,
    update_quantity_use_case: Arc<dyn UpdateCartQuantityUseCase>,
    remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
    import_legacy_use_case: Arc<dyn ImportLegacyCartUseCase>,
}

impl CartApi {
    pub fn new(
        get_use_case: Arc<dyn GetCartUseCase>,
        add_item_use_case: Arc<dyn AddCartItemUseCase>,
        update_quantity_use_case: Arc<dyn UpdateCartQuantityUseCase>,
        remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
        import_legacy_use_case: Arc<dyn ImportLegacyCartUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            add_item_use_case,
            update_quantity_use_case,
            remove_item_use_case,
            clear_use_case,
            import_legacy_use_case,
        }
    }
}

fn parse_product_id(id: &str) -> Result<Uuid, Json<ErrorResponse>> {
    Uuid::parse_str(id).map_err(|_| ErrorResponse::validation("cart.invalid_product_id"))
}

fn cart_response(result: Result<Cart, CartError>) -> CartOperationResponse {
    match result {
        Ok(cart) => CartOperationResponse::Ok(Json(cart.into())),
        Err(err) => {
            let (status, json) = err.into_error_response();
            match status.as_u16() {
                400 => CartOperationResponse::BadRequest(json),
                404 => CartOperationResponse::NotFound(json),
                409 => CartOperationResponse::Conflict(json),
                _ => CartOperationResponse::InternalError(json),
            }
        }
    }
}

/// Cart API
///
/// Every operation acts on the cart of the `X-Session-Id` session and
/// returns the full cart with totals.
#[OpenApi]
impl CartApi {
    /// Get the cart
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self, session: SessionHeader) -> CartOperationResponse {
        cart_response(
            self.get_use_case
                .execute(GetCartParams {
                    session_id: session.0,
                })
                .await,
        )
    }

    /// Add a product
    ///
    /// Adding a product already in the cart increases its quantity.
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add_item(
        &self,
        session: SessionHeader,
        body: Json<AddCartItemRequest>,
    ) -> CartOperationResponse {
        let product_id = match parse_product_id(&body.0.product_id) {
            Ok(id) => id,
            Err(json) => return CartOperationResponse::BadRequest(json),
        };

        cart_response(
            self.add_item_use_case
                .execute(AddCartItemParams {
                    session_id: session.0,
                    product_id,
                    quantity: body.0.quantity,
                })
                .await,
        )
    }

    /// Change a line quantity
    #[oai(path = "/cart/items/:product_id", method = "put", tag = "ApiTags::Cart")]
    async fn update_quantity(
        &self,
        session: SessionHeader,
        product_id: Path<String>,
        body: Json<UpdateCartQuantityRequest>,
    ) -> CartOperationResponse {
        let product_id = match parse_product_id(&product_id.0) {
            Ok(id) => id,
            Err(json) => return CartOperationResponse::BadRequest(json),
        };

        cart_response(
            self.update_quantity_use_case
                .execute(UpdateCartQuantityParams {
                    session_id: session.0,
                    product_id,
                    quantity: body.0.quantity,
                })
                .await,
        )
    }

    /// Remove a line
    #[oai(path = "/cart/items/:product_id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove_item(
        &self,
        session: SessionHeader,
        product_id: Path<String>,
    ) -> CartOperationResponse {
        let product_id = match parse_product_id(&product_id.0) {
            Ok(id) => id,
            Err(json) => return CartOperationResponse::BadRequest(json),
        };

        cart_response(
            self.remove_item_use_case
                .execute(RemoveCartItemParams {
                    session_id: session.0,
                    product_id,
                })
                .await,
        )
    }

    /// Empty the cart
    #[oai(path = "/cart", method = "delete", tag = "ApiTags::Cart")]
    async fn clear_cart(&self, session: SessionHeader) -> CartOperationResponse {
        cart_response(
            self.clear_use_case
                .execute(ClearCartParams {
                    session_id: session.0,
                })
                .await,
        )
    }

    /// Import a cart from the old storefront
    ///
    /// Accepts the legacy browser-storage snapshot (an array of items or an
    /// object with an `items` array) and replaces the current cart with it.
    /// Prices and names come from the current catalog; unreadable lines and
    /// products no longer on sale are dropped.
    #[oai(path = "/cart/import", method = "post", tag = "ApiTags::Cart")]
    async fn import_legacy(
        &self,
        session: SessionHeader,
        body: Json<serde_json::Value>,
    ) -> CartOperationResponse {
        cart_response(
            self.import_legacy_use_case
                .execute(ImportLegacyCartParams {
                    session_id: session.0,
                    snapshot: body.0,
                })
                .await,
        )
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartOperationResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

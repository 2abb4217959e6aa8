use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::order::use_cases::checkout::{CheckoutParams, CheckoutUseCase};
use business::domain::order::use_cases::get_by_id::{GetOrderByIdParams, GetOrderByIdUseCase};
use business::domain::order::value_objects::PaymentMethod;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};
use crate::api::order::dto::{CheckoutRequest, CheckoutResponse, OrderResponse};
use crate::api::security::SessionHeader;
use crate::api::tags::ApiTags;

pub struct OrderApi {
    checkout_use_case: Arc<dyn CheckoutUseCase>,
    get_by_id_use_case: Arc<dyn GetOrderByIdUseCase>,
}

impl OrderApi {
    pub fn new(
        checkout_use_case: Arc<dyn CheckoutUseCase>,
        get_by_id_use_case: Arc<dyn GetOrderByIdUseCase>,
    ) -> Self {
        Self {
            checkout_use_case,
            get_by_id_use_case,
        }
    }
}

/// Checkout API
#[OpenApi]
impl OrderApi {
    /// Place an order
    ///
    /// Turns the session cart and delivery profile into an order, clears the
    /// cart and returns the WhatsApp message and link for the restaurant.
    #[oai(path = "/checkout", method = "post", tag = "ApiTags::Checkout")]
    async fn checkout(
        &self,
        session: SessionHeader,
        body: Json<CheckoutRequest>,
    ) -> CheckoutOperationResponse {
        let Ok(payment_method) = body.0.payment_method.parse::<PaymentMethod>() else {
            return CheckoutOperationResponse::BadRequest(ErrorResponse::validation(
                "checkout.invalid_payment_method",
            ));
        };

        let params = CheckoutParams {
            session_id: session.0,
            payment_method,
            notes: body.0.notes,
        };

        match self.checkout_use_case.execute(params).await {
            Ok(result) => CheckoutOperationResponse::Created(Json(result.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CheckoutOperationResponse::BadRequest(json),
                    409 => CheckoutOperationResponse::Conflict(json),
                    _ => CheckoutOperationResponse::InternalError(json),
                }
            }
        }
    }

    /// Get an order
    ///
    /// Only orders placed by the calling session are visible.
    #[oai(path = "/orders/:id", method = "get", tag = "ApiTags::Checkout")]
    async fn get_order(&self, session: SessionHeader, id: Path<String>) -> GetOrderResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return GetOrderResponse::BadRequest(ErrorResponse::validation("order.invalid_id"));
        };

        match self.get_by_id_use_case.execute(GetOrderByIdParams { id }).await {
            Ok(order) if order.session_id == session.0 => GetOrderResponse::Ok(Json(order.into())),
            Ok(_) => {
                let (_, json) = error_response(
                    poem::http::StatusCode::NOT_FOUND,
                    "NotFound",
                    "order.not_found",
                );
                GetOrderResponse::NotFound(json)
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetOrderResponse::NotFound(json),
                    _ => GetOrderResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CheckoutOperationResponse {
    #[oai(status = 201)]
    Created(Json<CheckoutResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetOrderResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};
use uuid::Uuid;

use business::domain::payment::model::PaymentProvider;
use business::domain::payment::use_cases::initiate::{
    InitiatePaymentParams, InitiatePaymentUseCase,
};
use business::domain::payment::use_cases::list_providers::ListPaymentProvidersUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::payment::dto::{
    InitiatePaymentRequest, PaymentProviderResponse, PaymentSessionResponse,
};
use crate::api::tags::ApiTags;

pub struct PaymentApi {
    list_providers_use_case: Arc<dyn ListPaymentProvidersUseCase>,
    initiate_use_case: Arc<dyn InitiatePaymentUseCase>,
}

impl PaymentApi {
    pub fn new(
        list_providers_use_case: Arc<dyn ListPaymentProvidersUseCase>,
        initiate_use_case: Arc<dyn InitiatePaymentUseCase>,
    ) -> Self {
        Self {
            list_providers_use_case,
            initiate_use_case,
        }
    }
}

/// Online payment API
#[OpenApi]
impl PaymentApi {
    /// List payment providers
    ///
    /// Only providers with configured credentials are returned.
    #[oai(path = "/payments/providers", method = "get", tag = "ApiTags::Payments")]
    async fn list_providers(&self) -> Json<Vec<PaymentProviderResponse>> {
        Json(
            self.list_providers_use_case
                .execute()
                .into_iter()
                .map(|p| p.into())
                .collect(),
        )
    }

    /// Start an online payment
    ///
    /// Opens a hosted checkout at the provider for an existing order and
    /// marks the order as awaiting payment.
    #[oai(path = "/payments", method = "post", tag = "ApiTags::Payments")]
    async fn initiate_payment(&self, body: Json<InitiatePaymentRequest>) -> InitiatePaymentResponse {
        let Ok(order_id) = Uuid::parse_str(&body.0.order_id) else {
            return InitiatePaymentResponse::BadRequest(ErrorResponse::validation(
                "payment.invalid_order_id",
            ));
        };
        let Ok(provider) = body.0.provider.parse::<PaymentProvider>() else {
            return InitiatePaymentResponse::BadRequest(ErrorResponse::validation(
                "payment.invalid_provider",
            ));
        };

        match self
            .initiate_use_case
            .execute(InitiatePaymentParams { order_id, provider })
            .await
        {
            Ok(session) => InitiatePaymentResponse::Created(Json(session.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => InitiatePaymentResponse::BadRequest(json),
                    404 => InitiatePaymentResponse::NotFound(json),
                    409 => InitiatePaymentResponse::Conflict(json),
                    502 => InitiatePaymentResponse::BadGateway(json),
                    _ => InitiatePaymentResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum InitiatePaymentResponse {
    #[oai(status = 201)]
    Created(Json<PaymentSessionResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

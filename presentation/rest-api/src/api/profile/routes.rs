use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::profile::use_cases::get::{GetProfileParams, GetProfileUseCase};
use business::domain::profile::use_cases::save::{SaveProfileParams, SaveProfileUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::profile::dto::{ProfileResponse, SaveProfileRequest};
use crate::api::security::SessionHeader;
use crate::api::tags::ApiTags;

pub struct ProfileApi {
    get_use_case: Arc<dyn GetProfileUseCase>,
    save_use_case: Arc<dyn SaveProfileUseCase>,
}

impl ProfileApi {
    pub fn new(
        get_use_case: Arc<dyn GetProfileUseCase>,
        save_use_case: Arc<dyn SaveProfileUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            save_use_case,
        }
    }
}

/// Delivery profile API
#[OpenApi]
impl ProfileApi {
    /// Get the delivery profile of the session
    #[oai(path = "/profile", method = "get", tag = "ApiTags::Profile")]
    async fn get_profile(&self, session: SessionHeader) -> GetProfileResponse {
        match self
            .get_use_case
            .execute(GetProfileParams {
                session_id: session.0,
            })
            .await
        {
            Ok(profile) => GetProfileResponse::Ok(Json(profile.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProfileResponse::NotFound(json),
                    _ => GetProfileResponse::InternalError(json),
                }
            }
        }
    }

    /// Save the delivery profile
    ///
    /// Creates or replaces the profile used at checkout.
    #[oai(path = "/profile", method = "put", tag = "ApiTags::Profile")]
    async fn save_profile(
        &self,
        session: SessionHeader,
        body: Json<SaveProfileRequest>,
    ) -> SaveProfileResponse {
        let params = SaveProfileParams {
            session_id: session.0,
            name: body.0.name,
            phone: body.0.phone,
            address: body.0.address,
            complement: body.0.complement,
            notes: body.0.notes,
        };

        match self.save_use_case.execute(params).await {
            Ok(profile) => SaveProfileResponse::Ok(Json(profile.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SaveProfileResponse::BadRequest(json),
                    _ => SaveProfileResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProfileResponse {
    #[oai(status = 200)]
    Ok(Json<ProfileResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SaveProfileResponse {
    #[oai(status = 200)]
    Ok(Json<ProfileResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

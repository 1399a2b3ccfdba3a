use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{LoginError, LoginInput};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "ada@example.com")]
    pub email: String,

    #[schema(example = "correct horse battery")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// Bearer token for the Authorization header
    pub token: String,
}

/// Exchange credentials for an access token
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginResponse>)),
        (
            status = 401,
            description = "Wrong email or password",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Incorrect email or password"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/login")]
pub async fn login_handler(
    req: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let input = LoginInput {
        email: req.email,
        password: req.password,
    };

    match data.auth.login.execute(input).await {
        Ok(out) => ApiResponse::success(LoginResponse { token: out.token }),

        Err(LoginError::InvalidCredentials) => {
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Incorrect email or password")
        }

        Err(e) => {
            error!(error = %e, "Login failed");
            ApiResponse::internal_error()
        }
    }
}

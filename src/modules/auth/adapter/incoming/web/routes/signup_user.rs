use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::incoming::use_cases::{SignupError, SignupInput};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Request body for signup
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SignupRequest {
    #[schema(example = "ada@example.com")]
    pub email: String,

    /// Between 8 and 128 characters
    #[schema(example = "correct horse battery")]
    pub password: String,

    #[schema(example = "Ada Lovelace")]
    pub name: String,

    pub role: UserRole,
}

#[derive(Serialize, ToSchema)]
pub struct SignupResponse {
    #[schema(example = "User created successfully")]
    pub message: String,

    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,
}

fn map_signup_error(err: SignupError, email: &str) -> HttpResponse {
    match &err {
        SignupError::InvalidEmail(msg) => ApiResponse::bad_request("INVALID_EMAIL", msg),
        SignupError::InvalidName(msg) => ApiResponse::bad_request("INVALID_NAME", msg),
        SignupError::InvalidPassword(msg) => ApiResponse::bad_request("INVALID_PASSWORD", msg),

        SignupError::EmailAlreadyExists => {
            warn!(email = %email, "Signup rejected: duplicate email");
            ApiResponse::bad_request("EMAIL_ALREADY_EXISTS", "Email already registered")
        }

        SignupError::HashingFailed(_) | SignupError::RepositoryError(_) => {
            error!(email = %email, error = %err, "Signup failed");
            ApiResponse::internal_error()
        }
    }
}

/// Register a mentor or mentee account
#[utoipa::path(
    post,
    path = "/api/signup",
    tag = "auth",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "User created", body = inline(SuccessResponse<SignupResponse>)),
        (
            status = 400,
            description = "Validation error or duplicate email",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "EMAIL_ALREADY_EXISTS",
                    "message": "Email already registered"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/signup")]
pub async fn signup_handler(
    req: web::Json<SignupRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let email = req.email.clone();

    info!(email = %email, role = %req.role, "Signup attempt");

    let input = SignupInput {
        email: req.email,
        password: req.password,
        name: req.name,
        role: req.role,
    };

    match data.auth.signup.execute(input).await {
        Ok(user) => ApiResponse::created(SignupResponse {
            message: "User created successfully".to_string(),
            id: user.id.to_string(),
        }),
        Err(e) => map_signup_error(e, &email),
    }
}

use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use super::match_request_dto::MatchRequestResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::MenteeUser;
use crate::auth::application::domain::entities::UserId;
use crate::matching::application::ports::incoming::use_cases::{
    CreateMatchRequestError, CreateMatchRequestInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatchRequestBody {
    pub mentor_id: Uuid,
    /// Must be the caller's own id
    pub mentee_id: Uuid,
    #[schema(example = "Hi, I'd love some help with Rust lifetimes.")]
    pub message: String,
}

fn map_create_error(e: CreateMatchRequestError) -> HttpResponse {
    let message = e.to_string();
    match e {
        CreateMatchRequestError::EmptyMessage => {
            ApiResponse::bad_request("INVALID_MESSAGE", &message)
        }
        CreateMatchRequestError::NotRequestOwner => {
            ApiResponse::forbidden("NOT_REQUEST_OWNER", &message)
        }
        CreateMatchRequestError::MentorNotFound => {
            ApiResponse::bad_request("MENTOR_NOT_FOUND", &message)
        }
        CreateMatchRequestError::ActiveRequestExists => {
            ApiResponse::bad_request("ACTIVE_REQUEST_EXISTS", &message)
        }
        CreateMatchRequestError::PendingRequestExists => {
            ApiResponse::bad_request("PENDING_REQUEST_EXISTS", &message)
        }
        CreateMatchRequestError::StoreUnavailable(_) => ApiResponse::service_unavailable(),
        CreateMatchRequestError::RepositoryError(_) => {
            error!(error = %message, "Failed to create match request");
            ApiResponse::internal_error()
        }
    }
}

/// File a mentorship request to a mentor
#[utoipa::path(
    post,
    path = "/api/match-requests",
    tag = "match-requests",
    security(("BearerAuth" = [])),
    request_body = CreateMatchRequestBody,
    responses(
        (status = 201, description = "Request created as pending", body = inline(SuccessResponse<MatchRequestResponse>)),
        (status = 400, description = "Empty message, unknown mentor or conflicting request", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not a mentee or not the named mentee", body = ErrorResponse),
        (status = 503, description = "Store unavailable, retry", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/match-requests")]
pub async fn create_match_request_handler(
    user: MenteeUser,
    payload: web::Json<CreateMatchRequestBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    let body = payload.into_inner();

    let input = CreateMatchRequestInput {
        requester: user.user_id,
        mentor_id: UserId::from(body.mentor_id),
        mentee_id: UserId::from(body.mentee_id),
        message: body.message,
    };

    match data.matching.create.execute(input).await {
        Ok(created) => ApiResponse::created(MatchRequestResponse::from(created)),
        Err(e) => map_create_error(e),
    }
}

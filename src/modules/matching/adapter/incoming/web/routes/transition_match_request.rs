use actix_web::{delete, put, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use super::match_request_dto::MatchRequestResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{MenteeUser, MentorUser};
use crate::matching::application::domain::entities::MatchRequest;
use crate::matching::application::ports::incoming::use_cases::TransitionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn respond(result: Result<MatchRequest, TransitionError>) -> HttpResponse {
    let e = match result {
        Ok(updated) => return ApiResponse::success(MatchRequestResponse::from(updated)),
        Err(e) => e,
    };

    let message = e.to_string();
    match e {
        TransitionError::NotFound => ApiResponse::not_found("MATCH_REQUEST_NOT_FOUND", &message),
        TransitionError::NotPending(_) => ApiResponse::bad_request("REQUEST_NOT_PENDING", &message),
        TransitionError::MentorAlreadyMatched => {
            ApiResponse::bad_request("MENTOR_ALREADY_MATCHED", &message)
        }
        TransitionError::StoreUnavailable(_) => ApiResponse::service_unavailable(),
        TransitionError::RepositoryError(_) => {
            error!(error = %message, "Failed to update match request");
            ApiResponse::internal_error()
        }
    }
}

/// Accept a pending request addressed to the caller
#[utoipa::path(
    put,
    path = "/api/match-requests/{id}/accept",
    tag = "match-requests",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Match request id")),
    responses(
        (status = 200, description = "Request accepted", body = inline(SuccessResponse<MatchRequestResponse>)),
        (status = 400, description = "Not pending, or mentor already has an accepted mentee", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not a mentor", body = ErrorResponse),
        (status = 404, description = "No such request for this mentor", body = ErrorResponse),
        (status = 503, description = "Store unavailable, retry", body = ErrorResponse),
    )
)]
#[put("/api/match-requests/{id}/accept")]
pub async fn accept_match_request_handler(
    user: MentorUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    respond(data.matching.accept.execute(user.user_id, path.into_inner()).await)
}

/// Reject a pending request addressed to the caller
#[utoipa::path(
    put,
    path = "/api/match-requests/{id}/reject",
    tag = "match-requests",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Match request id")),
    responses(
        (status = 200, description = "Request rejected", body = inline(SuccessResponse<MatchRequestResponse>)),
        (status = 400, description = "Request is not pending", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not a mentor", body = ErrorResponse),
        (status = 404, description = "No such request for this mentor", body = ErrorResponse),
        (status = 503, description = "Store unavailable, retry", body = ErrorResponse),
    )
)]
#[put("/api/match-requests/{id}/reject")]
pub async fn reject_match_request_handler(
    user: MentorUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    respond(data.matching.reject.execute(user.user_id, path.into_inner()).await)
}

/// Withdraw one of the caller's pending requests
#[utoipa::path(
    delete,
    path = "/api/match-requests/{id}",
    tag = "match-requests",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Match request id")),
    responses(
        (status = 200, description = "Request cancelled", body = inline(SuccessResponse<MatchRequestResponse>)),
        (status = 400, description = "Request is not pending", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not a mentee", body = ErrorResponse),
        (status = 404, description = "No such request for this mentee", body = ErrorResponse),
        (status = 503, description = "Store unavailable, retry", body = ErrorResponse),
    )
)]
#[delete("/api/match-requests/{id}")]
pub async fn cancel_match_request_handler(
    user: MenteeUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    respond(data.matching.cancel.execute(user.user_id, path.into_inner()).await)
}

use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use super::match_request_dto::{MatchRequestResponse, OutgoingMatchRequestResponse};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{MenteeUser, MentorUser};
use crate::matching::application::ports::incoming::use_cases::ListMatchRequestsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn map_list_error(e: ListMatchRequestsError) -> HttpResponse {
    match e {
        ListMatchRequestsError::StoreUnavailable(_) => ApiResponse::service_unavailable(),
        ListMatchRequestsError::QueryError(msg) => {
            error!(error = %msg, "Failed to list match requests");
            ApiResponse::internal_error()
        }
    }
}

/// Requests addressed to the calling mentor, any status
#[utoipa::path(
    get,
    path = "/api/match-requests/incoming",
    tag = "match-requests",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Incoming requests", body = inline(SuccessResponse<Vec<MatchRequestResponse>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not a mentor", body = ErrorResponse),
        (status = 503, description = "Store unavailable, retry", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/match-requests/incoming")]
pub async fn list_incoming_handler(user: MentorUser, data: web::Data<AppState>) -> impl Responder {
    match data.matching.list_incoming.execute(user.user_id).await {
        Ok(requests) => ApiResponse::success(
            requests
                .into_iter()
                .map(MatchRequestResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => map_list_error(e),
    }
}

/// Requests filed by the calling mentee, any status
#[utoipa::path(
    get,
    path = "/api/match-requests/outgoing",
    tag = "match-requests",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Outgoing requests", body = inline(SuccessResponse<Vec<OutgoingMatchRequestResponse>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not a mentee", body = ErrorResponse),
        (status = 503, description = "Store unavailable, retry", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/match-requests/outgoing")]
pub async fn list_outgoing_handler(user: MenteeUser, data: web::Data<AppState>) -> impl Responder {
    match data.matching.list_outgoing.execute(user.user_id).await {
        Ok(requests) => ApiResponse::success(
            requests
                .into_iter()
                .map(OutgoingMatchRequestResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => map_list_error(e),
    }
}

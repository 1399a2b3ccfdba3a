use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::MenteeUser;
use crate::mentor::application::domain::directory::{MentorFilter, MentorOrder, MentorSummary};
use crate::shared::api::ApiResponse;
use crate::user::adapter::incoming::web::routes::ProfileResponse;
use crate::user::application::domain::entities::{Profile, ProfileView};
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListMentorsQuery {
    /// Only mentors listing this skill
    pub skill: Option<String>,
    /// `name` or `skill`
    pub order_by: Option<String>,
}

fn to_response(mentor: MentorSummary) -> ProfileResponse {
    ProfileResponse::from(ProfileView {
        id: mentor.id,
        email: mentor.email,
        profile: Profile::Mentor {
            name: mentor.name,
            bio: mentor.bio,
            skills: mentor.skills,
        },
    })
}

/// Mentor directory, visible to mentees
#[utoipa::path(
    get,
    path = "/api/mentors",
    tag = "mentors",
    security(("BearerAuth" = [])),
    params(ListMentorsQuery),
    responses(
        (status = 200, description = "Mentors", body = inline(SuccessResponse<Vec<ProfileResponse>>)),
        (status = 400, description = "Unknown orderBy", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not a mentee", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/mentors")]
pub async fn list_mentors_handler(
    _user: MenteeUser,
    query: web::Query<ListMentorsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();

    let order = match query.order_by.as_deref().filter(|s| !s.is_empty()) {
        None => None,
        Some(raw) => match raw.parse::<MentorOrder>() {
            Ok(order) => Some(order),
            Err(e) => return ApiResponse::bad_request("INVALID_ORDER_BY", &e.to_string()),
        },
    };

    let filter = MentorFilter {
        skill: query.skill,
        order,
    };

    match data.mentor.list.execute(filter).await {
        Ok(mentors) => ApiResponse::success(
            mentors
                .into_iter()
                .map(to_response)
                .collect::<Vec<ProfileResponse>>(),
        ),

        Err(e) => {
            error!(error = %e, "Failed to list mentors");
            ApiResponse::internal_error()
        }
    }
}

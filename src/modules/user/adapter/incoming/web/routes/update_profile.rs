use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use super::profile_dto::ProfileResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::{
    ProfileUpdate, UpdateProfileError, UpdateProfileInput,
};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Profile update, discriminated by `role`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum UpdateProfileRequest {
    Mentor(MentorProfileRequest),
    Mentee(MenteeProfileRequest),
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MentorProfileRequest {
    pub id: Uuid,
    #[schema(example = "Grace Hopper")]
    pub name: String,
    #[serde(default)]
    pub bio: String,
    /// Base64 JPEG or PNG, 500 to 1000 px per side, at most 1 MiB
    pub image: Option<String>,
    #[serde(default)]
    #[schema(example = json!(["rust", "sql"]))]
    pub skills: Vec<String>,
}

/// Mentees have no skills; sending them is a validation error.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct MenteeProfileRequest {
    pub id: Uuid,
    #[schema(example = "Eve")]
    pub name: String,
    #[serde(default)]
    pub bio: String,
    pub image: Option<String>,
}

impl UpdateProfileRequest {
    fn into_parts(self) -> (UserId, ProfileUpdate, Option<String>) {
        match self {
            UpdateProfileRequest::Mentor(r) => (
                UserId::from(r.id),
                ProfileUpdate::Mentor {
                    name: r.name,
                    bio: r.bio,
                    skills: r.skills,
                },
                r.image,
            ),
            UpdateProfileRequest::Mentee(r) => (
                UserId::from(r.id),
                ProfileUpdate::Mentee {
                    name: r.name,
                    bio: r.bio,
                },
                r.image,
            ),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Update the caller's own profile
#[utoipa::path(
    put,
    path = "/api/profile",
    tag = "users",
    security(("BearerAuth" = [])),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = inline(SuccessResponse<ProfileResponse>)),
        (
            status = 400,
            description = "Invalid name or image, or role change attempted",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_IMAGE",
                    "message": "Image must be a JPEG or PNG"
                }
            })
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Profile belongs to someone else", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/profile")]
pub async fn update_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (user_id, update, image) = req.into_inner().into_parts();

    let input = UpdateProfileInput {
        requester: user.actor(),
        user_id,
        update,
        image,
    };

    match data.user.update_profile.execute(input).await {
        Ok(view) => ApiResponse::success(ProfileResponse::from(view)),

        Err(UpdateProfileError::Forbidden) => ApiResponse::forbidden(
            "CANNOT_UPDATE_OTHER_PROFILE",
            "Cannot update another user's profile",
        ),

        Err(UpdateProfileError::RoleMismatch) => {
            ApiResponse::bad_request("ROLE_MISMATCH", "Role cannot be changed")
        }

        Err(UpdateProfileError::InvalidName(msg)) => ApiResponse::bad_request("INVALID_NAME", &msg),

        Err(UpdateProfileError::InvalidImage(msg)) => {
            ApiResponse::bad_request("INVALID_IMAGE", &msg)
        }

        Err(UpdateProfileError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(UpdateProfileError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Profile update failed");
            ApiResponse::internal_error()
        }
    }
}

use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    LoginRequest, LoginResponse, SignupRequest, SignupResponse,
};
use crate::auth::application::domain::entities::UserRole;
use crate::matching::adapter::incoming::web::routes::{
    CreateMatchRequestBody, MatchRequestResponse, OutgoingMatchRequestResponse,
};
use crate::matching::application::domain::entities::MatchStatus;
use crate::user::adapter::incoming::web::routes::{
    MenteeProfileRequest, MentorProfileRequest, ProfileDetails, ProfileResponse,
    UpdateProfileRequest,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mentor Match API",
        version = "1.0.0",
        description = "Accounts, profiles, the mentor directory and mentorship requests",
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::signup_handler,
        crate::auth::adapter::incoming::web::routes::login_handler,

        // User endpoints
        crate::user::adapter::incoming::web::routes::get_me_handler,
        crate::user::adapter::incoming::web::routes::update_profile_handler,
        crate::user::adapter::incoming::web::routes::get_avatar_handler,

        // Mentor directory
        crate::mentor::adapter::incoming::web::routes::list_mentors_handler,

        // Match request endpoints
        crate::matching::adapter::incoming::web::routes::create_match_request_handler,
        crate::matching::adapter::incoming::web::routes::list_incoming_handler,
        crate::matching::adapter::incoming::web::routes::list_outgoing_handler,
        crate::matching::adapter::incoming::web::routes::accept_match_request_handler,
        crate::matching::adapter::incoming::web::routes::reject_match_request_handler,
        crate::matching::adapter::incoming::web::routes::cancel_match_request_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            UserRole,
            MatchStatus,

            // Auth DTOs
            SignupRequest,
            SignupResponse,
            LoginRequest,
            LoginResponse,

            // Profile DTOs
            ProfileResponse,
            ProfileDetails,
            UpdateProfileRequest,
            MentorProfileRequest,
            MenteeProfileRequest,

            // Match request DTOs
            CreateMatchRequestBody,
            MatchRequestResponse,
            OutgoingMatchRequestResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Signup and login"),
        (name = "users", description = "Own profile and avatars"),
        (name = "mentors", description = "Mentor directory"),
        (name = "match-requests", description = "Mentorship request lifecycle"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token returned by /api/login"))
                        .build(),
                ),
            )
        }
    }
}

use actix_web::{get, web, Responder};
use tracing::error;

use super::profile_dto::ProfileResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::GetMyProfileError;
use crate::AppState;

/// Current user's role-shaped profile
#[utoipa::path(
    get,
    path = "/api/me",
    tag = "users",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Profile found", body = inline(SuccessResponse<ProfileResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/me")]
pub async fn get_me_handler(user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    match data.user.get_me.execute(user.user_id).await {
        Ok(view) => ApiResponse::success(ProfileResponse::from(view)),

        Err(GetMyProfileError::NotFound) => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),

        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Failed to fetch profile");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;
    use uuid::Uuid;

    use crate::auth::application::domain::entities::{UserId, UserRole};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider};
    use crate::user::application::domain::entities::{Profile, ProfileView};
    use crate::user::application::ports::incoming::use_cases::GetMyProfileUseCase;

    #[derive(Clone)]
    struct MockGetMe {
        result: Result<ProfileView, GetMyProfileError>,
    }

    #[async_trait]
    impl GetMyProfileUseCase for MockGetMe {
        async fn execute(&self, _user_id: UserId) -> Result<ProfileView, GetMyProfileError> {
            self.result.clone()
        }
    }

    async fn call(
        result: Result<ProfileView, GetMyProfileError>,
        auth: Option<(UserId, UserRole)>,
    ) -> (StatusCode, Value) {
        let state = TestAppStateBuilder::default()
            .with_get_me(MockGetMe { result })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_provider()))
                .service(get_me_handler),
        )
        .await;

        let mut req = test::TestRequest::get().uri("/api/me");
        if let Some((id, role)) = auth {
            req = req.insert_header(bearer(id, role));
        }

        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_get_me_mentor() {
        let id = UserId::from(Uuid::new_v4());
        let view = ProfileView {
            id,
            email: "grace@example.com".to_string(),
            profile: Profile::Mentor {
                name: "Grace".to_string(),
                bio: String::new(),
                skills: vec!["rust".to_string()],
            },
        };

        let (status, body) = call(Ok(view), Some((id, UserRole::Mentor))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["role"], "mentor");
        assert_eq!(body["data"]["profile"]["skills"][0], "rust");
        assert_eq!(
            body["data"]["profile"]["imageUrl"],
            format!("/api/images/mentor/{}", id)
        );
    }

    #[actix_web::test]
    async fn test_get_me_requires_token() {
        let (status, body) = call(Err(GetMyProfileError::NotFound), None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "MISSING_AUTH_HEADER");
    }

    #[actix_web::test]
    async fn test_get_me_deleted_account() {
        let id = UserId::from(Uuid::new_v4());
        let (status, body) = call(Err(GetMyProfileError::NotFound), Some((id, UserRole::Mentee))).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "USER_NOT_FOUND");
    }
}

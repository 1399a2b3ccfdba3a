use actix_web::{get, http::header, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::application::domain::entities::{UserId, UserRole};
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::{AvatarOutcome, GetAvatarError};
use crate::AppState;

/// Avatar bytes, or a redirect to the placeholder image
#[utoipa::path(
    get,
    path = "/api/images/{role}/{user_id}",
    tag = "users",
    params(
        ("role" = String, Path, description = "mentor or mentee"),
        ("user_id" = Uuid, Path, description = "User id"),
    ),
    responses(
        (status = 200, description = "Stored avatar bytes as image/jpeg or image/png"),
        (status = 302, description = "No avatar stored; redirects to a placeholder"),
        (status = 404, description = "No such user with that role", body = ErrorResponse),
    )
)]
#[get("/api/images/{role}/{user_id}")]
pub async fn get_avatar_handler(
    path: web::Path<(String, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (role, user_id) = path.into_inner();

    let Ok(role) = role.parse::<UserRole>() else {
        return ApiResponse::not_found("USER_NOT_FOUND", "User not found");
    };

    match data.user.get_avatar.execute(UserId::from(user_id), role).await {
        Ok(AvatarOutcome::Image(avatar)) => HttpResponse::Ok()
            .content_type(avatar.format.content_type())
            .body(avatar.data),

        Ok(AvatarOutcome::Placeholder(url)) => HttpResponse::Found()
            .insert_header((header::LOCATION, url))
            .finish(),

        Err(GetAvatarError::NotFound) => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),

        Err(GetAvatarError::QueryError(e)) => {
            error!(user_id = %user_id, error = %e, "Failed to load avatar");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    use crate::auth::application::domain::entities::{Avatar, ImageFormat};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::user::application::ports::incoming::use_cases::GetAvatarUseCase;

    #[derive(Clone)]
    struct MockGetAvatar {
        result: Result<AvatarOutcome, GetAvatarError>,
    }

    #[async_trait]
    impl GetAvatarUseCase for MockGetAvatar {
        async fn execute(
            &self,
            _user_id: UserId,
            _role: UserRole,
        ) -> Result<AvatarOutcome, GetAvatarError> {
            self.result.clone()
        }
    }

    async fn call(
        result: Result<AvatarOutcome, GetAvatarError>,
        uri: &str,
    ) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default()
            .with_get_avatar(MockGetAvatar { result })
            .build();

        let app = test::init_service(App::new().app_data(state).service(get_avatar_handler)).await;
        test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await
    }

    #[actix_web::test]
    async fn test_serves_stored_image() {
        let uri = format!("/api/images/mentor/{}", Uuid::new_v4());
        let resp = call(
            Ok(AvatarOutcome::Image(Avatar {
                data: vec![0xff, 0xd8, 0xff],
                format: ImageFormat::Jpeg,
            })),
            &uri,
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "image/jpeg"
        );
        let body = test::read_body(resp).await;
        assert_eq!(&body[..], &[0xffu8, 0xd8, 0xff][..]);
    }

    #[actix_web::test]
    async fn test_redirects_to_placeholder() {
        let uri = format!("/api/images/mentee/{}", Uuid::new_v4());
        let resp = call(
            Ok(AvatarOutcome::Placeholder(
                "https://placehold.co/500x500.jpg?text=MENTEE".to_string(),
            )),
            &uri,
        )
        .await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "https://placehold.co/500x500.jpg?text=MENTEE"
        );
    }

    #[actix_web::test]
    async fn test_unknown_role_is_404() {
        let uri = format!("/api/images/admin/{}", Uuid::new_v4());
        let resp = call(Err(GetAvatarError::NotFound), &uri).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_missing_user_is_404() {
        let uri = format!("/api/images/mentor/{}", Uuid::new_v4());
        let resp = call(Err(GetAvatarError::NotFound), &uri).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}

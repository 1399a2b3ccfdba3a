use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::domain::entities::{Actor, UserId, UserRole};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;

/// Any caller holding a valid access token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub role: UserRole,
}

impl AuthenticatedUser {
    pub fn actor(&self) -> Actor {
        Actor::new(self.user_id, self.role)
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider =
            match req.app_data::<actix_web::web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
                Some(service) => service,
                None => {
                    tracing::error!("TokenProvider missing from app data");
                    return ready(Err(create_api_error(ApiResponse::internal_error())));
                }
            };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        match token_provider.verify_token(&token) {
            Ok(claims) => ready(Ok(AuthenticatedUser {
                user_id: UserId::from(claims.sub),
                role: claims.role,
            })),
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}

fn require_role(
    req: &HttpRequest,
    payload: &mut Payload,
    role: UserRole,
) -> Result<UserId, ActixError> {
    let user = AuthenticatedUser::from_request(req, payload).into_inner()?;

    if user.role != role {
        let (code, message) = match role {
            UserRole::Mentor => (
                "MENTOR_ROLE_REQUIRED",
                "Access forbidden: mentor role required",
            ),
            UserRole::Mentee => (
                "MENTEE_ROLE_REQUIRED",
                "Access forbidden: mentee role required",
            ),
        };
        return Err(create_api_error(ApiResponse::forbidden(code, message)));
    }

    Ok(user.user_id)
}

/// Caller whose token carries the mentor role.
#[derive(Debug, Clone)]
pub struct MentorUser {
    pub user_id: UserId,
}

impl FromRequest for MentorUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        ready(require_role(req, payload, UserRole::Mentor).map(|user_id| MentorUser { user_id }))
    }
}

/// Caller whose token carries the mentee role.
#[derive(Debug, Clone)]
pub struct MenteeUser {
    pub user_id: UserId,
}

impl FromRequest for MenteeUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        ready(require_role(req, payload, UserRole::Mentee).map(|user_id| MenteeUser { user_id }))
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

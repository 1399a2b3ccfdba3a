// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Serialize, Clone)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        })
    }

    pub fn created(data: T) -> HttpResponse {
        HttpResponse::Created().json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        })
    }
}

impl ApiResponse<()> {
    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
            }),
        })
    }

    pub fn not_found(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, code, message)
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn forbidden(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::FORBIDDEN, code, message)
    }

    pub fn unauthorized(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, code, message)
    }

    /// Retryable store failure (pool exhausted, connection lost).
    pub fn service_unavailable() -> HttpResponse {
        Self::error(
            StatusCode::SERVICE_UNAVAILABLE,
            "STORE_UNAVAILABLE",
            "The service is temporarily unavailable, please retry",
        )
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use serde_json::Value;

    async fn body_json(resp: HttpResponse) -> Value {
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_success_envelope_has_no_error_field() {
        let resp = ApiResponse::success(serde_json::json!({ "token": "abc" }));
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["token"], "abc");
        assert!(body.get("error").is_none());
    }

    #[actix_web::test]
    async fn test_error_envelope_has_code_and_message() {
        let resp = ApiResponse::bad_request("INVALID_MESSAGE", "Message must not be empty");
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = body_json(resp).await;
        assert_eq!(body["success"], false);
        assert!(body.get("data").is_none());
        assert_eq!(body["error"]["code"], "INVALID_MESSAGE");
        assert_eq!(body["error"]["message"], "Message must not be empty");
    }

    #[actix_web::test]
    async fn test_service_unavailable_is_503() {
        let resp = ApiResponse::service_unavailable();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = body_json(resp).await;
        assert_eq!(body["error"]["code"], "STORE_UNAVAILABLE");
    }
}

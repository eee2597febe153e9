use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::JsonApiError;

/// JSON body extractor that reports failures in the API's error shape.
/// Axum's stock rejection is a plain-text English message; clients of
/// this API expect `400 {"errorMessage"}` for every bad payload, so a
/// body that fails to parse (syntax, wrong types, unknown status values)
/// is collapsed into the generic validation text.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                debug!(err = %rejection.body_text(), "rejected request body");
                Err(JsonApiError::validation("데이터 형식이 올바르지 않습니다."))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use serde_json::Value;
    use service::menu::CreateMenuInput;
    use tower::ServiceExt;

    use super::ApiJson;

    fn app() -> Router {
        Router::new().route(
            "/menus",
            post(|ApiJson(_input): ApiJson<CreateMenuInput>| async { StatusCode::OK }),
        )
    }

    async fn post_menu(body: &str) -> (StatusCode, Option<String>, Value) {
        let res = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/menus")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_owned()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = res.status();
        let content_type = res
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_owned());
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, content_type, body)
    }

    #[tokio::test]
    async fn unknown_status_value_gets_api_error_shape() {
        let (status, content_type, body) = post_menu(
            r#"{"name":"아메리카노","description":"따뜻한 커피","price":2500,"image":"americano.png","status":"PAUSED"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(body["errorMessage"], "데이터 형식이 올바르지 않습니다.");
    }

    #[tokio::test]
    async fn malformed_json_gets_api_error_shape() {
        let (status, content_type, body) = post_menu("{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(body["errorMessage"], "데이터 형식이 올바르지 않습니다.");
    }

    #[tokio::test]
    async fn wrong_field_type_gets_api_error_shape() {
        let (status, _, body) = post_menu(
            r#"{"name":"아메리카노","description":"따뜻한 커피","price":"2500","image":"americano.png"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errorMessage"], "데이터 형식이 올바르지 않습니다.");
    }

    #[tokio::test]
    async fn valid_body_passes_through() {
        let (status, _, _) = post_menu(
            r#"{"name":"아메리카노","description":"따뜻한 커피","price":2500,"image":"americano.png"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
}

//! Unit tests for the progress crate

mod support {
    use std::sync::{Arc, Mutex};

    use crate::domain::repository::ProgressRepository;
    use crate::error::ProgressResult;

    /// In-memory progress repository for tests
    #[derive(Clone, Default)]
    pub struct MemProgressRepository {
        value: Arc<Mutex<Option<i64>>>,
    }

    impl MemProgressRepository {
        pub fn stored(&self) -> Option<i64> {
            *self.value.lock().unwrap()
        }
    }

    impl ProgressRepository for MemProgressRepository {
        async fn adjust(&self, delta: i64) -> ProgressResult<i64> {
            let mut value = self.value.lock().unwrap();
            let next = value.map_or(delta, |current| current + delta);
            *value = Some(next);
            Ok(next)
        }

        async fn current(&self) -> ProgressResult<Option<i64>> {
            Ok(*self.value.lock().unwrap())
        }
    }

    /// Token guard signing with a fixed test secret
    pub fn test_guard() -> auth::middleware::TokenGuardState {
        auth::middleware::TokenGuardState::new(&test_auth_config())
    }

    /// A bearer token the test guard accepts
    pub fn valid_token() -> String {
        auth::TokenService::new(&test_auth_config())
            .issue()
            .unwrap()
    }

    fn test_auth_config() -> auth::AuthConfig {
        auth::AuthConfig {
            token_secret: "unit-test-signing-secret".to_string(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use super::support::MemProgressRepository;
    use crate::application::{AdjustProgressUseCase, GetProgressUseCase};

    #[tokio::test]
    async fn test_get_defaults_to_zero() {
        let repo = Arc::new(MemProgressRepository::default());
        let get = GetProgressUseCase::new(repo);

        assert_eq!(get.execute().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_increment_creates_then_adds() {
        let repo = Arc::new(MemProgressRepository::default());
        let adjust = AdjustProgressUseCase::new(repo.clone());
        let get = GetProgressUseCase::new(repo);

        assert_eq!(adjust.execute(5).await.unwrap(), 5);
        assert_eq!(get.execute().await.unwrap(), 5);

        assert_eq!(adjust.execute(-3).await.unwrap(), 2);
        assert_eq!(get.execute().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_first_decrement_creates_negative() {
        let repo = Arc::new(MemProgressRepository::default());
        let adjust = AdjustProgressUseCase::new(repo);

        assert_eq!(adjust.execute(-4).await.unwrap(), -4);
    }

    #[tokio::test]
    async fn test_value_is_unbounded_below() {
        let repo = Arc::new(MemProgressRepository::default());
        let adjust = AdjustProgressUseCase::new(repo);

        adjust.execute(2).await.unwrap();
        assert_eq!(adjust.execute(-10).await.unwrap(), -8);
    }
}

#[cfg(test)]
mod router_tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tower::util::ServiceExt;

    use super::support::{MemProgressRepository, test_guard, valid_token};
    use crate::presentation::router::progress_router_generic;

    fn test_router(repo: MemProgressRepository) -> Router {
        progress_router_generic(repo, test_guard())
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn adjust_request(path: &str, number: i64, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder
            .body(Body::from(format!(r#"{{"number":{number}}}"#)))
            .unwrap()
    }

    #[tokio::test]
    async fn test_get_progress_empty() {
        let app = test_router(MemProgressRepository::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/getProgress")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["value"], 0);
    }

    #[tokio::test]
    async fn test_increment_then_decrement_with_token() {
        let app = test_router(MemProgressRepository::default());
        let token = valid_token();

        let response = app
            .clone()
            .oneshot(adjust_request("/incrementProgress", 5, Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["message"], "Incremented successfully");
        assert_eq!(body["value"], 5);

        let response = app
            .clone()
            .oneshot(adjust_request("/decrementProgress", 3, Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["message"], "Decremented successfully");
        assert_eq!(body["value"], 2);
    }

    #[tokio::test]
    async fn test_increment_without_token() {
        let repo = MemProgressRepository::default();
        let app = test_router(repo.clone());

        let response = app
            .oneshot(adjust_request("/incrementProgress", 5, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        // Counter untouched
        assert_eq!(repo.stored(), None);
    }

    #[tokio::test]
    async fn test_decrement_with_invalid_token() {
        let repo = MemProgressRepository::default();
        let app = test_router(repo.clone());

        let response = app
            .oneshot(adjust_request("/decrementProgress", 3, Some("junk")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        assert_eq!(repo.stored(), None);
    }
}

//! Route configuration.

use axum::Router;
use common::AppError;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{auth_routes, health_routes, user_routes};
use super::openapi::ApiDoc;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .nest("/health", health_routes())
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // GET/POST /users, GET /users/:id
        .nest("/users", user_routes())
        // POST /login
        .merge(auth_routes())
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::infra::Store;
    use crate::repository::MockUserRepository;
    use common::DatabaseConfig;
    use domain::User;

    async fn app(repo: MockUserRepository) -> Router {
        let store = Store::connect(&DatabaseConfig::in_memory()).await.unwrap();
        create_router(AppState::new(Arc::new(repo), store))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn store_failure() -> AppError {
        AppError::Database(sea_orm::DbErr::Custom("disk I/O error at /var/db".to_string()))
    }

    #[tokio::test]
    async fn test_list_users_store_failure_is_generic_500() {
        let mut repo = MockUserRepository::new();
        repo.expect_list_users().returning(|| Err(store_failure()));

        let (status, json) = send(app(repo).await, get("/users")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, serde_json::json!({"error": "Internal Server Error"}));
    }

    #[tokio::test]
    async fn test_add_user_hash_failure_is_generic_500() {
        let mut repo = MockUserRepository::new();
        repo.expect_add_user()
            .times(1)
            .returning(|_| Err(AppError::hash("out of memory")));

        let body = serde_json::json!({"name": "Alice", "email": "a@x.com", "password": "secret"});
        let (status, json) = send(app(repo).await, post_json("/users", body)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, serde_json::json!({"error": "Internal Server Error"}));
    }

    #[tokio::test]
    async fn test_add_user_passes_payload_through() {
        let mut repo = MockUserRepository::new();
        repo.expect_add_user()
            .withf(|new_user| {
                new_user.name == "Alice" && new_user.email == "a@x.com" && new_user.password == "secret"
            })
            .times(1)
            .returning(|_| Ok(1));

        let body = serde_json::json!({"name": "Alice", "email": "a@x.com", "password": "secret"});
        let (status, json) = send(app(repo).await, post_json("/users", body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({"message": "User added successfully"}));
    }

    #[tokio::test]
    async fn test_add_user_missing_field_is_400() {
        let mut repo = MockUserRepository::new();
        repo.expect_add_user().never();

        let body = serde_json::json!({"name": "Alice", "email": "a@x.com"});
        let (status, json) = send(app(repo).await, post_json("/users", body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("password"));
    }

    #[tokio::test]
    async fn test_login_rejected_is_401() {
        let mut repo = MockUserRepository::new();
        repo.expect_authenticate_user().returning(|_, _| Ok(None));

        let body = serde_json::json!({"email": "a@x.com", "password": "wrong"});
        let (status, json) = send(app(repo).await, post_json("/login", body)).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json, serde_json::json!({"error": "Authentication failed"}));
    }

    #[tokio::test]
    async fn test_login_store_failure_is_500_not_401() {
        let mut repo = MockUserRepository::new();
        repo.expect_authenticate_user()
            .returning(|_, _| Err(store_failure()));

        let body = serde_json::json!({"email": "a@x.com", "password": "secret"});
        let (status, json) = send(app(repo).await, post_json("/login", body)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, serde_json::json!({"error": "Internal Server Error"}));
    }

    #[tokio::test]
    async fn test_login_success_body() {
        let mut repo = MockUserRepository::new();
        repo.expect_authenticate_user()
            .withf(|email, password| {
                email.to_string() == "a@x.com" && password.to_string() == "secret"
            })
            .returning(|_, _| Ok(Some(User::new(1, "Alice", "a@x.com"))));

        let body = serde_json::json!({"email": "a@x.com", "password": "secret"});
        let (status, json) = send(app(repo).await, post_json("/login", body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            serde_json::json!({
                "message": "Authentication successful",
                "user": {"id": 1, "name": "Alice", "email": "a@x.com"}
            })
        );
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_user_by_id().returning(|_| Ok(None));

        let (status, json) = send(app(repo).await, get("/users/7")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json, serde_json::json!({"error": "User not found"}));
    }

    #[tokio::test]
    async fn test_get_user_bad_id_is_400() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_user_by_id().never();

        let (status, json) = send(app(repo).await, get("/users/abc")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn test_health_reports_database() {
        let repo = MockUserRepository::new();

        let (status, json) = send(app(repo).await, get("/health")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({"status": "healthy", "database": "reachable"}));
    }

    #[tokio::test]
    async fn test_get_user_store_failure_is_generic_500() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_user_by_id()
            .withf(|id| *id == 7)
            .returning(|_| Err(store_failure()));

        let (status, json) = send(app(repo).await, get("/users/7")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, serde_json::json!({"error": "Internal Server Error"}));
    }

    #[tokio::test]
    async fn test_unmatched_routes_get_json_404() {
        for uri in ["/nope", "/users/", "/users/1/extra"] {
            let (status, json) = send(app(MockUserRepository::new()).await, get(uri)).await;

            assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
            assert_eq!(json, serde_json::json!({"error": "Not Found"}), "{}", uri);
        }
    }
}

//! Registration and login integration tests

use axum::http::StatusCode;
use jobboard_auth::validate_jwt_token;
use jobboard_users::UserRepository;
use serde_json::json;

use crate::common::TestApp;

mod test_register {
    use super::*;

    #[tokio::test]
    async fn test_register_returns_token_and_stores_hash() {
        let app = TestApp::new();

        let response = app
            .post(
                "/auth/register",
                json!({"name": "unyime", "email": "unyime@gmail.com", "password": "123456"}),
            )
            .await;

        assert_eq!(response.status, StatusCode::CREATED);
        let token = response.body["token"].as_str().expect("token in body");

        let stored = app.users.stored_password("unyime@gmail.com").unwrap();
        assert_ne!(stored, "123456");
        assert!(stored.starts_with("$2b$10$"), "unexpected hash: {}", stored);

        let user = app
            .users
            .find_credentials_by_email("unyime@gmail.com")
            .await
            .unwrap()
            .unwrap();
        let claims = validate_jwt_token(token, app.auth.config()).unwrap();
        assert_eq!(claims.sub, user.id.to_string());
    }

    #[tokio::test]
    async fn test_register_with_missing_field() {
        let app = TestApp::fast();

        for body in [
            json!({"email": "unyime@gmail.com", "password": "123456"}),
            json!({"name": "unyime", "password": "123456"}),
            json!({"name": "unyime", "email": "unyime@gmail.com"}),
            json!({"name": "", "email": "unyime@gmail.com", "password": "123456"}),
            json!({}),
        ] {
            let response = app.post("/auth/register", body).await;
            assert_eq!(response.status, StatusCode::BAD_REQUEST);
            assert_eq!(response.body, json!({"error": "Please enter all values"}));
        }

        assert!(app.users.is_empty());
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let app = TestApp::fast();
        app.register("unyime", "unyime@gmail.com", "123456").await;

        let response = app
            .post(
                "/auth/register",
                json!({"name": "other", "email": "unyime@gmail.com", "password": "abcdef"}),
            )
            .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body, json!({"error": "Duplicate email"}));
        assert_eq!(app.users.len(), 1);
    }

    #[tokio::test]
    async fn test_register_malformed_json() {
        let app = TestApp::fast();

        let response = app
            .request(
                axum::http::Method::POST,
                "/auth/register",
                Some(json!("not an object")),
                None,
            )
            .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert!(response.body["error"].is_string());
    }
}

mod test_login {
    use super::*;

    #[tokio::test]
    async fn test_login_missing_email_or_password() {
        let app = TestApp::fast();

        for body in [
            json!({"email": "unyime@gmail.com"}),
            json!({"password": "123456"}),
            json!({"email": "", "password": "123456"}),
        ] {
            let response = app.post("/auth/login", body).await;
            assert_eq!(response.status, StatusCode::BAD_REQUEST);
            assert_eq!(
                response.body,
                json!({"error": "Please enter email & Password"})
            );
        }
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let app = TestApp::fast();

        let response = app
            .post(
                "/auth/login",
                json!({"email": "unyime@gmail.com", "password": "123456"}),
            )
            .await;

        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.body, json!({"error": "Invalid Email or Password"}));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let app = TestApp::fast();
        app.register("unyime", "unyime@gmail.com", "123456").await;

        let response = app
            .post(
                "/auth/login",
                json!({"email": "unyime@gmail.com", "password": "1234567"}),
            )
            .await;

        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.body, json!({"error": "Invalid Email or Password"}));
    }

    #[tokio::test]
    async fn test_login_success_token_subject_is_user() {
        let app = TestApp::fast();
        app.register("unyime", "unyime@gmail.com", "123456").await;

        let response = app
            .post(
                "/auth/login",
                json!({"email": "unyime@gmail.com", "password": "123456"}),
            )
            .await;

        assert_eq!(response.status, StatusCode::OK);
        let token = response.body["token"].as_str().unwrap();

        let user = app
            .users
            .find_credentials_by_email("unyime@gmail.com")
            .await
            .unwrap()
            .unwrap();
        let ctx = app.auth.authenticate_jwt(token).unwrap();
        assert_eq!(ctx.user_id, user.id);
    }
}

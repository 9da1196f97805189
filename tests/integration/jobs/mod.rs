//! Job listing and creation integration tests

use axum::http::{Method, StatusCode};
use jobboard_auth::{AuthBackend, AuthConfig};
use serde_json::json;
use uuid::Uuid;

use crate::common::{job_body, TestApp};

mod test_create_job {
    use super::*;

    #[tokio::test]
    async fn test_create_job_attaches_caller_identity() {
        let app = TestApp::fast();
        let token = app.register("employer", "employer@gmail.com", "123456").await;
        let caller = app.auth.authenticate_jwt(&token).unwrap().user_id;

        let mut body = job_body("Node Developer");
        body["user"] = json!(Uuid::new_v4().to_string());

        let response = app.create_job(&token, body).await;

        assert_eq!(response.status, StatusCode::OK);
        let job = &response.body["job"];
        assert_eq!(job["user"], caller.to_string());
        assert_eq!(job["title"], "Node Developer");
        assert_eq!(job["positions"], 2);
        assert_eq!(job["industry"], json!([]));
        assert!(job["id"].is_string());
        assert!(job["posting_date"].is_string());
    }

    #[tokio::test]
    async fn test_create_job_keeps_industry() {
        let app = TestApp::fast();
        let token = app.register("employer", "employer@gmail.com", "123456").await;

        let mut body = job_body("Data Engineer");
        body["industry"] = json!(["Information Technology", "Banking"]);

        let response = app.create_job(&token, body).await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(
            response.body["job"]["industry"],
            json!(["Information Technology", "Banking"])
        );
    }

    #[tokio::test]
    async fn test_create_job_without_token() {
        let app = TestApp::fast();

        let response = app
            .request(Method::POST, "/jobs", Some(job_body("Node Developer")), None)
            .await;

        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.body,
            json!({"error": "Authorization header required"})
        );
        assert!(app.jobs.is_empty());
    }

    #[tokio::test]
    async fn test_create_job_with_foreign_token() {
        let app = TestApp::fast();
        let foreign = AuthBackend::new(AuthConfig::with_secret("some-other-secret"))
            .issue_token(Uuid::new_v4())
            .unwrap();

        let response = app.create_job(&foreign, job_body("Node Developer")).await;

        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert!(app.jobs.is_empty());
    }

    #[tokio::test]
    async fn test_create_job_invalid_fields() {
        let app = TestApp::fast();
        let token = app.register("employer", "employer@gmail.com", "123456").await;

        let mut missing_title = job_body("x");
        missing_title.as_object_mut().unwrap().remove("title");

        for body in [
            job_body(&"x".repeat(101)),
            missing_title,
            json!({"title": "Node Developer"}),
        ] {
            let response = app.create_job(&token, body).await;
            assert_eq!(response.status, StatusCode::BAD_REQUEST);
            assert!(response.body["error"].is_string());
        }

        assert!(app.jobs.is_empty());
    }
}

mod test_list_jobs {
    use super::*;

    #[tokio::test]
    async fn test_list_jobs_malformed_query() {
        let app = TestApp::fast();

        for uri in ["/jobs?page=abc", "/jobs?page_size=ten"] {
            let response = app.get(uri).await;
            assert_eq!(response.status, StatusCode::BAD_REQUEST);
            assert!(response.body["error"].is_string(), "{:?}", response.body);
        }
    }

    #[tokio::test]
    async fn test_list_jobs_empty() {
        let app = TestApp::fast();

        let response = app.get("/jobs").await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, json!({"jobs": []}));
    }

    #[tokio::test]
    async fn test_created_job_appears_in_list() {
        let app = TestApp::fast();
        let token = app.register("employer", "employer@gmail.com", "123456").await;

        let created = app.create_job(&token, job_body("Node Developer")).await;
        let response = app.get("/jobs").await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["jobs"], json!([created.body["job"]]));
    }

    #[tokio::test]
    async fn test_second_page_skips_first_page() {
        let app = TestApp::fast();
        let token = app.register("employer", "employer@gmail.com", "123456").await;

        for i in 0..12 {
            let response = app.create_job(&token, job_body(&format!("Job {}", i))).await;
            assert_eq!(response.status, StatusCode::OK);
        }

        let first = app.get("/jobs?page=1&page_size=10").await;
        let second = app.get("/jobs?page=2&page_size=10").await;

        let first = first.body["jobs"].as_array().unwrap().clone();
        let second = second.body["jobs"].as_array().unwrap().clone();
        assert_eq!(first.len(), 10);
        assert_eq!(second.len(), 2);

        let first_ids: Vec<_> = first.iter().map(|j| j["id"].clone()).collect();
        assert!(second.iter().all(|j| !first_ids.contains(&j["id"])));
    }

    #[tokio::test]
    async fn test_default_page_size_is_ten() {
        let app = TestApp::fast();
        let token = app.register("employer", "employer@gmail.com", "123456").await;

        for i in 0..11 {
            app.create_job(&token, job_body(&format!("Job {}", i))).await;
        }

        let response = app.get("/jobs").await;
        assert_eq!(response.body["jobs"].as_array().unwrap().len(), 10);
    }
}

pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::interests::handlers as interests;
use crate::matching::handlers as matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matching API
        .route("/api/v1/careers", get(matching::handle_list_careers))
        .route(
            "/api/v1/careers/:id/skill-gap",
            post(matching::handle_skill_gap),
        )
        .route("/api/v1/matches", post(matching::handle_match))
        // Interests API
        .route(
            "/api/v1/interests/:user_id",
            put(interests::handle_save_interests)
                .get(interests::handle_get_interests)
                .delete(interests::handle_delete_interests),
        )
        .route(
            "/api/v1/interests/:user_id/matches",
            get(interests::handle_match_saved),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::catalog::default_catalog;
    use crate::interests::store::MemoryInterestsStore;
    use crate::matching::ranker::CosineCareerMatcher;

    fn app() -> Router {
        build_router(AppState {
            catalog: Arc::new(default_catalog()),
            matcher: Arc::new(CosineCareerMatcher::default()),
            interests: Arc::new(MemoryInterestsStore::default()),
        })
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let is_json = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("application/json"));
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if is_json {
            serde_json::from_slice(&bytes).unwrap()
        } else {
            Value::Null
        };
        (status, value)
    }

    fn web_dev_interests() -> Value {
        json!({
            "domain": "Web Development",
            "skills": "JavaScript, React, Node.js",
            "workplacePreference": "remote",
            "salaryExpectation": 90000,
            "desiredPosition": "Frontend Developer"
        })
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_list_careers_in_catalog_order() {
        let (status, body) = send(&app(), Method::GET, "/api/v1/careers", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["categories"].as_array().unwrap().len(), 8);
        assert_eq!(body["careerPaths"][0]["id"], "web-dev");
        assert_eq!(body["careerPaths"][4]["id"], "product-management");
    }

    #[tokio::test]
    async fn test_match_returns_every_path_ranked() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/api/v1/matches",
            Some(web_dev_interests()),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let matches = body["matches"].as_array().unwrap();
        assert_eq!(matches.len(), 5);
        assert_eq!(matches[0]["id"], "web-dev");
        assert_eq!(matches[0]["title"], "Web Development");
        assert!(matches[0]["skills"].is_array());
        assert!(matches[0]["positions"].is_array());

        let scores: Vec<f64> = matches
            .iter()
            .map(|m| m["similarityScore"].as_f64().unwrap())
            .collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[tokio::test]
    async fn test_match_accepts_empty_and_unknown_values() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/api/v1/matches",
            Some(json!({
                "domain": "",
                "skills": "",
                "workplacePreference": "underwater",
                "salaryExpectation": -5,
                "desiredPosition": ""
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matches"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_match_rejects_missing_field() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/api/v1/matches",
            Some(json!({"domain": "x"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "INVALID_BODY");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("missing field"));
    }

    #[tokio::test]
    async fn test_malformed_json_body_uses_error_envelope() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/matches")
            .header("content-type", "application/json")
            .body(Body::from("{ not json"))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "INVALID_BODY");
    }

    #[tokio::test]
    async fn test_zero_salary_is_rejected_on_save() {
        let app = app();
        let uri = format!("/api/v1/interests/{}", Uuid::new_v4());
        let mut interests = web_dev_interests();
        interests["salaryExpectation"] = json!(0);

        let (status, body) = send(&app, Method::PUT, &uri, Some(interests)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["fields"][0]["field"], "salaryExpectation");

        let (status, _) = send(&app, Method::GET, &format!("{uri}/matches"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_zero_salary_match_still_returns_numeric_scores() {
        let mut interests = web_dev_interests();
        interests["salaryExpectation"] = json!(0);

        let (status, body) =
            send(&app(), Method::POST, "/api/v1/matches", Some(interests)).await;
        assert_eq!(status, StatusCode::OK);
        for m in body["matches"].as_array().unwrap() {
            assert!(m["similarityScore"].is_f64(), "{m}");
            assert!(m["breakdown"]["salaryMatch"].is_f64(), "{m}");
        }
    }

    #[tokio::test]
    async fn test_skill_gap_known_and_unknown_path() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/careers/web-dev/skill-gap",
            Some(web_dev_interests()),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pathId"], "web-dev");
        assert!(body["covered"]
            .as_array()
            .unwrap()
            .contains(&json!("JavaScript")));

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/careers/astronaut/skill-gap",
            Some(web_dev_interests()),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_saved_interests_lifecycle() {
        let app = app();
        let uri = format!("/api/v1/interests/{}", Uuid::new_v4());

        let (status, _) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(&app, Method::PUT, &uri, Some(web_dev_interests())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["interests"]["desiredPosition"], "Frontend Developer");

        let (status, body) = send(&app, Method::GET, &format!("{uri}/matches"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matches"][0]["id"], "web-dev");

        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, Method::GET, &format!("{uri}/matches"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_save_rejects_invalid_interests() {
        let uri = format!("/api/v1/interests/{}", Uuid::new_v4());
        let (status, body) = send(
            &app(),
            Method::PUT,
            &uri,
            Some(json!({
                "domain": "",
                "skills": "Go",
                "workplacePreference": "remote",
                "salaryExpectation": 50000,
                "desiredPosition": "Backend Developer"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        let fields: Vec<&str> = body["error"]["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, vec!["domain", "skills"]);
    }
}

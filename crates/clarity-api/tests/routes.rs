//! Router tests: real in-memory store, scripted completion provider.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tower::ServiceExt;

use clarity_api::{AppState, router};
use clarity_coach::{Coach, CoachError, CompletionProvider, RetryConfig};
use clarity_core::validation::ADJUSTMENTS_MAX_LEN;
use clarity_db::service::ClarityService;

const COMPLETION: &str = "TITLE: Start Small
INSIGHT: You want change but fear the cost.
SOLUTION_1_TITLE: Night Classes
SOLUTION_1_DESCRIPTION: Keep the job while you study.
SOLUTION_2_TITLE: Talk to a Nurse
SOLUTION_2_DESCRIPTION: Ask what the first year really looks like.
SOLUTION_3_TITLE: Budget It
SOLUTION_3_DESCRIPTION: Price the debt before deciding.
CHALLENGE: What would you try if age were not a factor?";

const ADJUSTED: &str = "TITLE: Money First
INSIGHT: The debt is the real blocker.
SOLUTION_1_TITLE: Grants
SOLUTION_1_DESCRIPTION: Look for tuition grants.
SOLUTION_2_TITLE: Employer Aid
SOLUTION_2_DESCRIPTION: Ask about tuition assistance.
SOLUTION_3_TITLE: Part Time
SOLUTION_3_DESCRIPTION: Spread the cost out.
CHALLENGE: How much debt is too much?";

struct ScriptedProvider {
    replies: Mutex<VecDeque<Result<String, CoachError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    fn new(replies: Vec<Result<String, CoachError>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    fn last_prompt(&self) -> String {
        self.prompts.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, prompt: &str) -> Result<String, CoachError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(CoachError::EmptyCompletion))
    }
}

struct Harness {
    app: Router,
    provider: Arc<ScriptedProvider>,
}

impl Harness {
    async fn new(replies: Vec<Result<String, CoachError>>) -> Self {
        let service = ClarityService::new_local(":memory:").await.unwrap();
        let provider = ScriptedProvider::new(replies);
        let retry = RetryConfig {
            max_attempts: 2,
            base_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(2),
        };
        let coach = Coach::new(provider.clone(), retry);
        let state = Arc::new(AppState::new(Arc::new(service), coach, 50));
        Self {
            app: router(state, 64 * 1024),
            provider,
        }
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        user: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(user) = user {
            builder = builder.header("x-user-id", user);
        }
        let body = match body {
            Some(value) => {
                builder = builder.header("content-type", "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };
        let response = self
            .app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        read(response).await
    }

    async fn get(&self, uri: &str, user: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, Some(user), None).await
    }

    async fn post(&self, uri: &str, user: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(user), Some(body)).await
    }

    async fn delete(&self, uri: &str, user: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, Some(user), None).await
    }

    async fn register(&self, username: &str) -> String {
        let body = json!({ "username": username });
        let (status, body) = self.send(Method::POST, "/api/auth", None, Some(body)).await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["userId"].as_str().unwrap().to_string()
    }

    /// Generate an insight for `user` and return the stored entry ID.
    async fn generate(&self, user: &str) -> String {
        let (status, body) = self.post("/api/insights", user, answers()).await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["result"]["entryId"].as_str().unwrap().to_string()
    }
}

async fn read(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn answers() -> Value {
    json!({
        "decision": "Go back to school?", "decisionRating": 5,
        "emotion": "Hopeful", "emotionRating": 4,
        "today": "Working retail", "todayRating": 3,
        "fear": "Debt", "fearRating": 5,
        "future": "Nurse", "futureRating": 4,
        "friend": "You'd be great", "friendRating": 2,
        "assumption": "Too old", "assumptionRating": 3
    })
}

#[tokio::test]
async fn health_is_public() {
    let h = Harness::new(vec![]).await;
    let (status, body) = h.send(Method::GET, "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn registration_rules() {
    let h = Harness::new(vec![]).await;
    let user_id = h.register("casey_01").await;
    assert!(user_id.starts_with("usr-"));

    let (status, body) = h.send(Method::POST, "/api/auth", None, Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Username is required");

    let spaced = json!({ "username": "no spaces" });
    let (status, body) = h.send(Method::POST, "/api/auth", None, Some(spaced)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid username"));

    let taken = json!({ "username": "casey_01" });
    let (status, body) = h.send(Method::POST, "/api/auth", None, Some(taken)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Username already taken");
}

#[tokio::test]
async fn protected_routes_resolve_the_caller() {
    let h = Harness::new(vec![]).await;

    let (status, body) = h.send(Method::GET, "/api/history", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized");

    let (status, body) = h.get("/api/cards", "usr-doesnotexist00").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid user");
}

#[tokio::test]
async fn generate_list_adjust_delete() {
    let h = Harness::new(vec![Ok(COMPLETION.into()), Ok(ADJUSTED.into())]).await;
    let user = h.register("casey").await;

    let (status, body) = h.post("/api/insights", &user, answers()).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["message"], "Success");
    assert_eq!(body["result"]["insight"]["title"], "Start Small");
    assert_eq!(body["result"]["insight"]["solutions"][2]["title"], "Budget It");
    let entry_id = body["result"]["entryId"].as_str().unwrap().to_string();
    let entry_uri = format!("/api/history/{entry_id}");

    let (status, body) = h.get("/api/history", &user).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["answers"]["fear"], "Debt");

    let adjust = json!({ "adjustments": "  Money matters most  " });
    let (status, body) = h.post(&format!("{entry_uri}/adjust"), &user, adjust).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["result"]["entryId"], entry_id.as_str());
    assert_eq!(body["result"]["insight"]["title"], "Money First");
    assert!(h.provider.last_prompt().contains("Money matters most"));

    let (_, body) = h.get(&entry_uri, &user).await;
    assert_eq!(body["data"]["insight"]["challenge"], "How much debt is too much?");
    assert_eq!(body["data"]["answers"]["decision"], "Go back to school?");

    let (status, body) = h.delete(&entry_uri, &user).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": [] }));

    let (status, body) = h.get(&entry_uri, &user).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Entry not found");
}

#[tokio::test]
async fn incomplete_answers_are_rejected_before_the_coach() {
    let h = Harness::new(vec![Ok(COMPLETION.into())]).await;
    let user = h.register("casey").await;

    let mut partial = answers();
    partial["assumption"] = json!("");
    partial["assumptionRating"] = json!(0);

    let (status, body) = h.post("/api/insights", &user, partial).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("assumption"));
    assert_eq!(h.provider.calls(), 0);
}

#[tokio::test]
async fn adjust_validates_input_and_ownership() {
    let h = Harness::new(vec![Ok(COMPLETION.into())]).await;
    let owner = h.register("owner").await;
    let other = h.register("other").await;
    let uri = format!("/api/history/{}/adjust", h.generate(&owner).await);

    let (status, body) = h.post(&uri, &owner, json!({ "adjustments": "   " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Please fill in the adjustments");

    let too_long = "x".repeat(ADJUSTMENTS_MAX_LEN + 1);
    let (status, _) = h.post(&uri, &owner, json!({ "adjustments": too_long })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = h.post(&uri, &other, json!({ "adjustments": "more" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Entry not found");

    assert_eq!(h.provider.calls(), 1);
}

#[tokio::test]
async fn coach_failures_map_to_generic_errors() {
    let h = Harness::new(vec![
        Ok("TITLE: [broken".into()),
        Err(CoachError::RateLimited { retry_after_secs: 0 }),
        Err(CoachError::RateLimited { retry_after_secs: 0 }),
    ])
    .await;
    let user = h.register("casey").await;

    let (status, body) = h.post("/api/insights", &user, answers()).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(
        body["error"],
        "Could not understand the coach's response. Please try again."
    );

    let (status, body) = h.post("/api/insights", &user, answers()).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body["error"],
        "The coach is unavailable right now. Please try again."
    );

    let (_, body) = h.get("/api/history", &user).await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn cards_bookmark_and_unbookmark() {
    let h = Harness::new(vec![Ok(COMPLETION.into())]).await;
    let user = h.register("casey").await;
    let entry_id = h.generate(&user).await;

    let card = json!({
        "title": "Night Classes",
        "description": "Keep the job while you study.",
        "historyId": entry_id
    });
    let (status, body) = h.post("/api/cards", &user, card.clone()).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    let card_id = body["data"][0]["id"].as_str().unwrap().to_string();
    assert_eq!(body["data"][0]["historyId"], entry_id.as_str());

    let (_, body) = h.post("/api/cards", &user, card).await;
    assert_eq!(body["data"][0]["id"], card_id.as_str());

    let blank = json!({ "title": " ", "description": "x" });
    let (status, body) = h.post("/api/cards", &user, blank).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let foreign = json!({ "title": "t", "description": "d", "historyId": "his-0000000000000000" });
    let (status, body) = h.post("/api/cards", &user, foreign).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Entry not found");

    let (_, body) = h.get("/api/cards", &user).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let content = json!({
        "title": "Night Classes",
        "description": "Keep the job while you study."
    });
    let (status, body) = h.send(Method::DELETE, "/api/cards", Some(&user), Some(content)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": [] }));

    let (_, body) = h.get("/api/cards", &user).await;
    assert_eq!(body["data"], json!([]));

    let (status, body) = h.delete(&format!("/api/cards/{card_id}"), &user).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Card not found");
}

#[tokio::test]
async fn users_never_see_each_others_rows() {
    let h = Harness::new(vec![Ok(COMPLETION.into())]).await;
    let owner = h.register("owner").await;
    let other = h.register("other").await;
    let entry_id = h.generate(&owner).await;

    let (_, body) = h.get("/api/history", &other).await;
    assert_eq!(body["data"], json!([]));

    let (status, _) = h.delete(&format!("/api/history/{entry_id}"), &other).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = h.get("/api/history?limit=10", &owner).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn malformed_json_is_a_client_error() {
    let h = Harness::new(vec![]).await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/auth")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = h.app.clone().oneshot(request).await.unwrap();
    let (status, body) = read(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn bad_limit_keeps_the_error_envelope() {
    let h = Harness::new(vec![]).await;
    let user = h.register("casey").await;

    let (status, body) = h.get("/api/history?limit=abc", &user).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("query string"), "{message}");

    let (status, body) = h.get("/api/history?limit=0", &user).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
}

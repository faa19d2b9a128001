//! Recording stand-in for the backend, used by the unit tests in this crate.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use api::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub body: Value,
}

#[derive(Debug, Clone)]
enum Reply {
    Json(Value),
    Status(u16, String),
}

/// Answers each method with a canned reply and records every call it receives.
/// Methods without a configured reply answer `null`.
#[derive(Clone, Debug, Default)]
pub struct FakeApi {
    calls: Arc<Mutex<Vec<Call>>>,
    replies: Arc<Mutex<HashMap<&'static str, Reply>>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, method: &'static str, body: Value) -> Self {
        self.replies.lock().unwrap().insert(method, Reply::Json(body));
        self
    }

    pub fn fail(self, method: &'static str, status: u16, body: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(method, Reply::Status(status, body.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, method: &str) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| c.method == method)
            .collect()
    }

    fn answer<T: DeserializeOwned>(&self, method: &'static str, body: Value) -> Result<T, ApiError> {
        self.calls.lock().unwrap().push(Call { method, body });
        let reply = self.replies.lock().unwrap().get(method).cloned();
        match reply.unwrap_or(Reply::Json(Value::Null)) {
            Reply::Json(value) => {
                serde_json::from_value(value).map_err(|e| ApiError::Unexpected(e.to_string()))
            }
            Reply::Status(status, body) => Err(ApiError::from_status(status, &body)),
        }
    }

    fn answer_with<B: Serialize, T: DeserializeOwned>(
        &self,
        method: &'static str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).unwrap();
        self.answer(method, body)
    }
}

fn file_body(file: &ImageFile) -> Value {
    json!({"name": file.name, "contentType": file.content_type, "size": file.size()})
}

impl LinkFreeApi for FakeApi {
    async fn is_authenticated(&self) -> Result<AuthStatus, ApiError> {
        self.answer("is_authenticated", Value::Null)
    }

    async fn login(&self, request: LoginRequest) -> Result<User, ApiError> {
        self.answer_with("login", &request)
    }

    async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, ApiError> {
        self.answer_with("register", &request)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.answer("logout", Value::Null)
    }

    async fn check_username(&self, username: &str) -> Result<bool, ApiError> {
        self.answer("check_username", json!({"username": username}))
    }

    async fn setup_profile(&self, setup: ProfileSetup) -> Result<MessageResponse, ApiError> {
        self.answer_with("setup_profile", &setup)
    }

    async fn update_profile(&self, update: ProfileUpdate) -> Result<User, ApiError> {
        self.answer_with("update_profile", &update)
    }

    async fn profile_info(&self) -> Result<User, ApiError> {
        self.answer("profile_info", Value::Null)
    }

    async fn upload_profile_picture(&self, file: ImageFile) -> Result<String, ApiError> {
        self.answer("upload_profile_picture", file_body(&file))
    }

    async fn upload_file(&self, file: ImageFile, kind: UploadKind) -> Result<String, ApiError> {
        let mut body = file_body(&file);
        body["uploadType"] = json!(kind.as_str());
        self.answer("upload_file", body)
    }

    async fn list_pages(&self) -> Result<Vec<PageSummary>, ApiError> {
        self.answer("list_pages", Value::Null)
    }

    async fn create_page(&self, page: NewPage) -> Result<(), ApiError> {
        self.answer_with("create_page", &page)
    }

    async fn get_page(&self, id: &str) -> Result<Page, ApiError> {
        self.answer("get_page", json!({"id": id}))
    }

    async fn update_page(&self, id: &str, update: PageUpdate) -> Result<(), ApiError> {
        let mut body = serde_json::to_value(&update).unwrap();
        body["id"] = json!(id);
        self.answer("update_page", body)
    }

    async fn set_visibility(&self, update: VisibilityUpdate) -> Result<(), ApiError> {
        self.answer_with("set_visibility", &update)
    }

    async fn create_page_info(&self) -> Result<CreatePageInfo, ApiError> {
        self.answer("create_page_info", Value::Null)
    }

    async fn portfolio(&self, username: &str, slug: Option<&str>) -> Result<Portfolio, ApiError> {
        self.answer("portfolio", json!({"username": username, "slug": slug}))
    }

    async fn track_link(&self, username: &str, slug: Option<&str>, url: &str) -> Result<(), ApiError> {
        self.answer(
            "track_link",
            json!({"username": username, "slug": slug, "url": url}),
        )
    }

    async fn analytics_overview(&self) -> Result<Vec<OverviewStat>, ApiError> {
        self.answer("analytics_overview", Value::Null)
    }

    async fn user_analytics(&self, user_id: &str) -> Result<Vec<AnalyticsMetric>, ApiError> {
        self.answer("user_analytics", json!({"id": user_id}))
    }

    async fn user_activities(&self, user_id: &str) -> Result<Vec<Activity>, ApiError> {
        self.answer("user_activities", json!({"id": user_id}))
    }
}

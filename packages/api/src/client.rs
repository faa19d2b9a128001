//! # REST client for the LinkFree backend
//!
//! [`LinkFreeApi`] is the seam between the form logic and the network: the `forms`
//! crate is generic over it, the UI provides [`HttpClient`], and tests substitute a
//! recording fake. One method per endpoint, each returning the decoded body or an
//! [`ApiError`].
//!
//! ## Session credentials
//!
//! Authentication is the backend's session cookie and nothing else. On wasm every
//! request is sent with `credentials: include`; on native the client keeps a cookie
//! store. No `Authorization` header is ever attached.

use std::future::Future;

use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::models::*;

/// Every backend call the client makes.
pub trait LinkFreeApi {
    /// `GET /api/user/isAuthenticated`
    fn is_authenticated(&self) -> impl Future<Output = Result<AuthStatus, ApiError>>;
    /// `POST /api/user/login`
    fn login(&self, request: LoginRequest) -> impl Future<Output = Result<User, ApiError>>;
    /// `POST /api/user/register`
    fn register(
        &self,
        request: RegisterRequest,
    ) -> impl Future<Output = Result<RegisterResponse, ApiError>>;
    /// `GET /api/user/logout`
    fn logout(&self) -> impl Future<Output = Result<(), ApiError>>;

    /// `POST /api/profile/check-username`
    fn check_username(&self, username: &str) -> impl Future<Output = Result<bool, ApiError>>;
    /// `POST /api/profile/setup`
    fn setup_profile(
        &self,
        setup: ProfileSetup,
    ) -> impl Future<Output = Result<MessageResponse, ApiError>>;
    /// `PUT /api/profile/update`
    fn update_profile(&self, update: ProfileUpdate) -> impl Future<Output = Result<User, ApiError>>;
    /// `GET /api/profile/profileinfo`
    fn profile_info(&self) -> impl Future<Output = Result<User, ApiError>>;

    /// `POST /api/user/profile-picture`; returns the stored image URL.
    fn upload_profile_picture(
        &self,
        file: ImageFile,
    ) -> impl Future<Output = Result<String, ApiError>>;
    /// `POST /api/user/upload-file`; returns the stored file URL.
    fn upload_file(
        &self,
        file: ImageFile,
        kind: UploadKind,
    ) -> impl Future<Output = Result<String, ApiError>>;

    /// `GET /api/pages`
    fn list_pages(&self) -> impl Future<Output = Result<Vec<PageSummary>, ApiError>>;
    /// `POST /api/pages`
    fn create_page(&self, page: NewPage) -> impl Future<Output = Result<(), ApiError>>;
    /// `GET /api/pages/:id`
    fn get_page(&self, id: &str) -> impl Future<Output = Result<Page, ApiError>>;
    /// `PUT /api/pages/:id`
    fn update_page(&self, id: &str, update: PageUpdate)
        -> impl Future<Output = Result<(), ApiError>>;
    /// `PUT /api/pages/visibility`
    fn set_visibility(
        &self,
        update: VisibilityUpdate,
    ) -> impl Future<Output = Result<(), ApiError>>;
    /// `GET /api/pages/createpageinfo`
    fn create_page_info(&self) -> impl Future<Output = Result<CreatePageInfo, ApiError>>;

    /// `GET /api/portfolio/:username[/:slug]`
    fn portfolio(
        &self,
        username: &str,
        slug: Option<&str>,
    ) -> impl Future<Output = Result<Portfolio, ApiError>>;
    /// `POST /api/portfolio/:username[/:slug]/track-link`
    fn track_link(
        &self,
        username: &str,
        slug: Option<&str>,
        url: &str,
    ) -> impl Future<Output = Result<(), ApiError>>;

    /// `GET /api/analytics/overview`
    fn analytics_overview(&self) -> impl Future<Output = Result<Vec<OverviewStat>, ApiError>>;
    /// `GET /api/user/analytics/:id`
    fn user_analytics(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<Vec<AnalyticsMetric>, ApiError>>;
    /// `GET /api/user/activities/:id`
    fn user_activities(&self, user_id: &str)
        -> impl Future<Output = Result<Vec<Activity>, ApiError>>;
}

/// [`LinkFreeApi`] over HTTP with `reqwest`.
#[derive(Clone, Debug)]
pub struct HttpClient {
    http: reqwest::Client,
    base: Url,
    config: ClientConfig,
}

impl PartialEq for HttpClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

impl HttpClient {
    /// Create a client for the configured backend. The base URL must be absolute.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let base = Url::parse(&config.api.base_url)?;

        #[cfg(not(target_arch = "wasm32"))]
        let http = reqwest::Client::builder().cookie_store(true).build()?;
        #[cfg(target_arch = "wasm32")]
        let http = reqwest::Client::new();

        Ok(Self { http, base, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Absolute URL of `segments` under the base URL; each segment is percent-encoded.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        let url = self.url(segments);
        tracing::debug!("{method} {url}");
        let builder = self.http.request(method, url);
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        builder
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_status(status.as_u16(), &body);
        tracing::warn!("backend returned {status}: {err}");
        Err(err)
    }

    async fn fetch<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        Ok(self.execute(builder).await?.json::<T>().await?)
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        body: &B,
    ) -> Result<T, ApiError> {
        self.fetch(self.request(method, segments).json(body)).await
    }

    async fn send_json_ignoring_body<B: Serialize>(
        &self,
        method: Method,
        segments: &[&str],
        body: &B,
    ) -> Result<(), ApiError> {
        self.execute(self.request(method, segments).json(body)).await?;
        Ok(())
    }

    async fn upload(&self, segments: &[&str], form: Form) -> Result<String, ApiError> {
        let response: UploadResponse = self
            .fetch(self.request(Method::POST, segments).multipart(form))
            .await?;
        response
            .url
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ApiError::Unexpected("upload response has no url".to_string()))
    }
}

fn image_part(file: ImageFile) -> Result<Part, ApiError> {
    Ok(Part::bytes(file.bytes)
        .file_name(file.name)
        .mime_str(&file.content_type)?)
}

fn portfolio_segments<'a>(username: &'a str, slug: Option<&'a str>) -> Vec<&'a str> {
    let mut segments = vec!["api", "portfolio", username];
    if let Some(slug) = slug.filter(|s| !s.is_empty()) {
        segments.push(slug);
    }
    segments
}

impl LinkFreeApi for HttpClient {
    async fn is_authenticated(&self) -> Result<AuthStatus, ApiError> {
        self.fetch(self.request(Method::GET, &["api", "user", "isAuthenticated"]))
            .await
    }

    async fn login(&self, request: LoginRequest) -> Result<User, ApiError> {
        let envelope: UserEnvelope = self
            .send_json(Method::POST, &["api", "user", "login"], &request)
            .await?;
        Ok(envelope.user)
    }

    async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, ApiError> {
        self.send_json(Method::POST, &["api", "user", "register"], &request)
            .await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.execute(self.request(Method::GET, &["api", "user", "logout"]))
            .await?;
        Ok(())
    }

    async fn check_username(&self, username: &str) -> Result<bool, ApiError> {
        let body = UsernameCheck {
            username: username.to_string(),
        };
        let availability: Availability = self
            .send_json(Method::POST, &["api", "profile", "check-username"], &body)
            .await?;
        Ok(availability.available)
    }

    async fn setup_profile(&self, setup: ProfileSetup) -> Result<MessageResponse, ApiError> {
        self.send_json(Method::POST, &["api", "profile", "setup"], &setup)
            .await
    }

    async fn update_profile(&self, update: ProfileUpdate) -> Result<User, ApiError> {
        let envelope: UserEnvelope = self
            .send_json(Method::PUT, &["api", "profile", "update"], &update)
            .await?;
        Ok(envelope.user)
    }

    async fn profile_info(&self) -> Result<User, ApiError> {
        let envelope: UserEnvelope = self
            .fetch(self.request(Method::GET, &["api", "profile", "profileinfo"]))
            .await?;
        Ok(envelope.user)
    }

    async fn upload_profile_picture(&self, file: ImageFile) -> Result<String, ApiError> {
        let form = Form::new().part("profilePicture", image_part(file)?);
        self.upload(&["api", "user", "profile-picture"], form).await
    }

    async fn upload_file(&self, file: ImageFile, kind: UploadKind) -> Result<String, ApiError> {
        let form = Form::new()
            .part("file", image_part(file)?)
            .text("uploadType", kind.as_str());
        self.upload(&["api", "user", "upload-file"], form).await
    }

    async fn list_pages(&self) -> Result<Vec<PageSummary>, ApiError> {
        let raw: serde_json::Value = self
            .fetch(self.request(Method::GET, &["api", "pages"]))
            .await?;
        if !raw.is_array() {
            tracing::warn!("pages list is not an array; treating as empty");
            return Ok(Vec::new());
        }
        serde_json::from_value(raw).map_err(|e| ApiError::Unexpected(e.to_string()))
    }

    async fn create_page(&self, page: NewPage) -> Result<(), ApiError> {
        self.send_json_ignoring_body(Method::POST, &["api", "pages"], &page)
            .await
    }

    async fn get_page(&self, id: &str) -> Result<Page, ApiError> {
        self.fetch(self.request(Method::GET, &["api", "pages", id]))
            .await
    }

    async fn update_page(&self, id: &str, update: PageUpdate) -> Result<(), ApiError> {
        self.send_json_ignoring_body(Method::PUT, &["api", "pages", id], &update)
            .await
    }

    async fn set_visibility(&self, update: VisibilityUpdate) -> Result<(), ApiError> {
        self.send_json_ignoring_body(Method::PUT, &["api", "pages", "visibility"], &update)
            .await
    }

    async fn create_page_info(&self) -> Result<CreatePageInfo, ApiError> {
        self.fetch(self.request(Method::GET, &["api", "pages", "createpageinfo"]))
            .await
    }

    async fn portfolio(&self, username: &str, slug: Option<&str>) -> Result<Portfolio, ApiError> {
        #[derive(serde::Deserialize)]
        struct Envelope {
            data: Option<Portfolio>,
        }

        let envelope: Envelope = self
            .fetch(self.request(Method::GET, &portfolio_segments(username, slug)))
            .await?;
        envelope
            .data
            .ok_or_else(|| ApiError::Unexpected("portfolio response has no data".to_string()))
    }

    async fn track_link(&self, username: &str, slug: Option<&str>, url: &str) -> Result<(), ApiError> {
        let mut segments = portfolio_segments(username, slug);
        segments.push("track-link");
        let body = TrackLink {
            url: url.to_string(),
        };
        self.send_json_ignoring_body(Method::POST, &segments, &body)
            .await
    }

    async fn analytics_overview(&self) -> Result<Vec<OverviewStat>, ApiError> {
        self.fetch(self.request(Method::GET, &["api", "analytics", "overview"]))
            .await
    }

    async fn user_analytics(&self, user_id: &str) -> Result<Vec<AnalyticsMetric>, ApiError> {
        self.fetch(self.request(Method::GET, &["api", "user", "analytics", user_id]))
            .await
    }

    async fn user_activities(&self, user_id: &str) -> Result<Vec<Activity>, ApiError> {
        self.fetch(self.request(Method::GET, &["api", "user", "activities", user_id]))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    async fn client_for(server: &mockito::ServerGuard) -> HttpClient {
        HttpClient::new(ClientConfig::new(server.url())).unwrap()
    }

    #[test]
    fn test_relative_base_url_is_rejected() {
        let err = HttpClient::new(ClientConfig::new("")).unwrap_err();
        assert!(matches!(err, ApiError::BaseUrl(_)));
    }

    #[tokio::test]
    async fn test_is_authenticated_decodes_user() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/user/isAuthenticated")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "isAuthenticated": true,
                    "user": {"id": "u1", "email": "jane@example.com", "isSetupComplete": false}
                })
                .to_string(),
            )
            .create_async()
            .await;

        let status = client_for(&server).await.is_authenticated().await.unwrap();

        mock.assert_async().await;
        let user = status.into_user().unwrap();
        assert_eq!(user.id, "u1");
        assert!(!user.is_setup_complete);
    }

    #[tokio::test]
    async fn test_login_surfaces_server_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/user/login")
            .match_body(Matcher::Json(json!({"email": "jane@example.com", "password": "pw"})))
            .with_status(401)
            .with_body(r#"{"error": "Invalid credentials"}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .await
            .login(LoginRequest {
                email: "jane@example.com".to_string(),
                password: "pw".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(401));
        assert_eq!(err.user_message("Login failed"), "Invalid credentials");
    }

    #[tokio::test]
    async fn test_set_visibility_sends_one_put() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/api/pages/visibility")
            .match_body(Matcher::Json(json!({"id": "p1", "visibility": false})))
            .with_status(200)
            .with_body("{}")
            .expect(1)
            .create_async()
            .await;

        client_for(&server)
            .await
            .set_visibility(VisibilityUpdate {
                id: "p1".to_string(),
                visibility: false,
            })
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_check_username() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/profile/check-username")
            .match_body(Matcher::Json(json!({"username": "ok_1"})))
            .with_status(200)
            .with_body(r#"{"available": false}"#)
            .create_async()
            .await;

        let available = client_for(&server).await.check_username("ok_1").await.unwrap();
        assert!(!available);
    }

    #[tokio::test]
    async fn test_list_pages_tolerates_non_array() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/pages")
            .with_status(200)
            .with_body(r#"{"message": "no pages"}"#)
            .create_async()
            .await;

        let pages = client_for(&server).await.list_pages().await.unwrap();
        assert!(pages.is_empty());
    }

    #[tokio::test]
    async fn test_portfolio_with_slug_and_tracking() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/portfolio/jane/work")
            .with_status(200)
            .with_body(
                json!({"data": {"username": "jane", "displayName": "Jane Doe",
                                "links": [{"title": "Blog", "url": "https://blog.example", "clicks": 3}]}})
                .to_string(),
            )
            .create_async()
            .await;
        let track = server
            .mock("POST", "/api/portfolio/jane/work/track-link")
            .match_body(Matcher::Json(json!({"url": "https://blog.example"})))
            .with_status(200)
            .create_async()
            .await;

        let client = client_for(&server).await;
        let portfolio = client.portfolio("jane", Some("work")).await.unwrap();
        assert_eq!(portfolio.links[0].clicks, 3);

        client
            .track_link("jane", Some("work"), "https://blog.example")
            .await
            .unwrap();
        track.assert_async().await;
    }

    #[tokio::test]
    async fn test_portfolio_without_slug_hits_user_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/portfolio/jane")
            .with_status(404)
            .with_body(r#"{"message": "User not found"}"#)
            .create_async()
            .await;

        let err = client_for(&server).await.portfolio("jane", None).await.unwrap_err();

        mock.assert_async().await;
        assert_eq!(err.server_message(), Some("User not found"));
    }

    #[tokio::test]
    async fn test_upload_profile_picture_returns_url() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/user/profile-picture")
            .match_header(
                "content-type",
                Matcher::Regex("^multipart/form-data".to_string()),
            )
            .with_status(200)
            .with_body(r#"{"url": "https://cdn.example/avatar.png"}"#)
            .create_async()
            .await;

        let url = client_for(&server)
            .await
            .upload_profile_picture(ImageFile {
                name: "avatar.png".to_string(),
                content_type: "image/png".to_string(),
                bytes: vec![0x89, b'P', b'N', b'G'],
            })
            .await
            .unwrap();

        assert_eq!(url, "https://cdn.example/avatar.png");
    }

    #[tokio::test]
    async fn test_upload_without_url_is_unexpected() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/user/upload-file")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let err = client_for(&server)
            .await
            .upload_file(
                ImageFile {
                    name: "bg.jpg".to_string(),
                    content_type: "image/jpeg".to_string(),
                    bytes: vec![0xff, 0xd8],
                },
                UploadKind::Background,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Unexpected(_)));
    }

    #[tokio::test]
    async fn test_user_analytics_and_activities_paths() {
        let mut server = mockito::Server::new_async().await;
        let analytics = server
            .mock("GET", "/api/user/analytics/u1")
            .with_status(200)
            .with_body(r#"[{"title": "Total Views", "value": 42, "change": "+5%"}]"#)
            .create_async()
            .await;
        let activities = server
            .mock("GET", "/api/user/activities/u1")
            .with_status(200)
            .with_body(r#"[{"action": "click", "linkType": "github", "timestamp": "2024-01-01"}]"#)
            .create_async()
            .await;

        let client = client_for(&server).await;
        let metrics = client.user_analytics("u1").await.unwrap();
        let recent = client.user_activities("u1").await.unwrap();

        analytics.assert_async().await;
        activities.assert_async().await;
        assert_eq!(metrics[0].value, "42");
        assert_eq!(metrics[0].change.as_deref(), Some("+5%"));
        assert_eq!(recent[0].link_type, "github");
    }
}

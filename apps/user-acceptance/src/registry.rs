//! Mock endpoint registry backed by an in-process wiremock listener.

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

use user_stubs::entities::{User, UserFields};
use user_stubs::resolver::{self, CannedResponse, UserLookup};

use crate::errors::HarnessError;

const HEALTH_PATH: &str = "/health";
const USERS_PATH: &str = "/users";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Owns the embedded listener for one scenario.
///
/// `start` and `stop` are idempotent. Dropping the registry also shuts
/// the listener down, so teardown happens even when a scenario panics
/// on a failed assertion. Requests that match no mounted stub are
/// answered with a bare 404.
pub struct MockRegistry {
    server: Option<MockServer>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self { server: None }
    }

    /// Boots the listener on a random local port. No-op when already
    /// running.
    pub async fn start(&mut self) {
        if self.server.is_none() {
            let server = MockServer::start().await;
            tracing::debug!(uri = %server.uri(), "mock endpoint started");
            self.server = Some(server);
        }
    }

    /// Shuts the listener down. No-op when already stopped.
    pub async fn stop(&mut self) {
        if let Some(server) = self.server.take() {
            tracing::debug!(uri = %server.uri(), "mock endpoint stopped");
            drop(server);
        }
    }

    pub fn base_url(&self) -> Option<String> {
        self.server.as_ref().map(|server| server.uri())
    }

    /// Drops every mounted stub. The listener keeps running.
    pub async fn reset(&self) -> Result<(), HarnessError> {
        self.server()?.reset().await;
        Ok(())
    }

    /// Mounts the scenario-independent stubs, currently only the health
    /// probe.
    pub async fn register_common(&self) -> Result<(), HarnessError> {
        self.mount(Mock::given(method("GET")).and(path(HEALTH_PATH)), resolver::health())
            .await
    }

    /// Mounts `POST /users`, matched on the exact path and the JSON
    /// content type. Serves 201 or 400 depending on the candidate.
    pub async fn stub_create_user(&self, fields: &UserFields) -> Result<(), HarnessError> {
        let canned = resolver::create_user(fields)?;
        self.mount(
            Mock::given(method("POST"))
                .and(path(USERS_PATH))
                .and(header("content-type", JSON_CONTENT_TYPE)),
            canned,
        )
        .await
    }

    pub async fn stub_user_exists(&self, user: &User) -> Result<(), HarnessError> {
        let canned = resolver::read_user(&user.id, &UserLookup::Present(user.clone()))?;
        self.mount(Mock::given(method("GET")).and(path(user_path(&user.id))), canned)
            .await
    }

    pub async fn stub_user_not_found(&self, id: &str) -> Result<(), HarnessError> {
        let canned = resolver::read_user(id, &UserLookup::Absent)?;
        self.mount(Mock::given(method("GET")).and(path(user_path(id))), canned)
            .await
    }

    pub async fn stub_update_user(&self, id: &str, fields: &UserFields) -> Result<(), HarnessError> {
        let canned = resolver::update_user(id, fields)?;
        self.mount(
            Mock::given(method("PUT"))
                .and(path(user_path(id)))
                .and(header("content-type", JSON_CONTENT_TYPE)),
            canned,
        )
        .await
    }

    pub async fn stub_delete_user(&self, id: &str) -> Result<(), HarnessError> {
        self.mount(
            Mock::given(method("DELETE")).and(path(user_path(id))),
            resolver::delete_user(),
        )
        .await
    }

    fn server(&self) -> Result<&MockServer, HarnessError> {
        self.server.as_ref().ok_or(HarnessError::EndpointNotRunning)
    }

    async fn mount(&self, matcher: MockBuilder, canned: CannedResponse) -> Result<(), HarnessError> {
        let server = self.server()?;
        let mut template = ResponseTemplate::new(canned.status);
        if let Some(body) = canned.body {
            template = template
                .set_body_json(body)
                .insert_header("content-type", JSON_CONTENT_TYPE);
        }
        matcher.respond_with(template).mount(server).await;
        Ok(())
    }
}

impl Default for MockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MockRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockRegistry")
            .field("base_url", &self.base_url())
            .finish()
    }
}

fn user_path(id: &str) -> String {
    format!("{USERS_PATH}/{id}")
}

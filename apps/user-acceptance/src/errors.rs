use user_stubs::errors_stub::StubError;

/// Infrastructure failures inside the harness. These are fatal to the
/// scenario that hits them; business validation outcomes are canned 400
/// responses and never surface as errors of this type.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum HarnessError {
    #[error("mock endpoint is not running")]
    EndpointNotRunning,

    #[error(transparent)]
    Stub(#[from] StubError),

    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("response body is not valid JSON: {0}")]
    Body(#[from] serde_json::Error),
}

/// Infrastructure failures inside the stub layer.
///
/// Business validation outcomes are canned 400 responses produced by the
/// resolver; they never appear here.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StubError {
    #[error("age `{0}` is not numeric")]
    NonNumericAge(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

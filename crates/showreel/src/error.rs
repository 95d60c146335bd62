#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
pub enum Error {
    #[error("Generic {0}")]
    Generic(String),

    #[error("Upstream unavailable: {0}")]
    Upstream(String),

    #[error("Content not found: {0}")]
    NotFound(String),

    #[error("Invalid revalidation token")]
    InvalidToken,

    #[error("Network error: {0}")]
    Network(String),
}

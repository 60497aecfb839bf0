use thiserror::Error;

/// Errors from the generation pipeline.
///
/// `InvalidResponse` covers everything the provider returned that we could
/// not use; individual rejected candidates inside an otherwise usable batch
/// are counted, not raised.
#[derive(Error, Debug)]
pub enum AiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    #[error("authentication rejected")]
    Auth,

    #[error("rate limited")]
    RateLimited,

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("no content generated")]
    NoContent,
}

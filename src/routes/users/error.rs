use actix_web::{http::Method, ResponseError};
use userfn_shared::error_chain_fmt;

///
/// Possible errors that can occur while serving an invocation.
///
/// None of them maps to a dedicated status code; they all surface as a server error.
///
#[derive(thiserror::Error)]
pub enum InvocationError {
    /// A mutating request arrived without a body.
    #[error("No keys in payload")]
    MissingPayload,
    /// The body is not a JSON object.
    #[error("Malformed payload")]
    MalformedPayload(#[source] serde_json::Error),
    /// A required value is absent from the path or the body.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    /// The method is none of POST, GET, PUT and DELETE.
    #[error("Unsupported method {0}")]
    UnsupportedMethod(Method),
    /// Executing or committing a statement failed.
    #[error(transparent)]
    DatabaseExecutionFailure(#[from] anyhow::Error),
}

impl std::fmt::Debug for InvocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for InvocationError {}

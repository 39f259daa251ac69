use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    /// The description was empty after trimming. Checked at the call site,
    /// before any classification request is built.
    #[error("Empty description: nothing to classify")]
    EmptyInput,

    /// The request could not be sent or no response was received.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status. The body is kept
    /// for diagnostics.
    #[error("Endpoint error {status}: {body}")]
    Endpoint { status: u16, body: String },

    /// Success status, but no candidate text could be extracted from the
    /// response.
    #[error("Empty payload: response contained no candidate text")]
    EmptyPayload,

    /// Candidate text was present, but none of the recognized tokens matched.
    #[error("Unrecognized payload: {0}")]
    UnrecognizedPayload(String),
}

pub type Result<T> = std::result::Result<T, Error>;

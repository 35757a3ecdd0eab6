use thiserror::Error;

/// All errors that can occur when using the Streamable client.
#[derive(Error, Debug)]
pub enum StreamableError {
    /// No credentials were provided and none were found in the environment.
    #[error("missing credentials: {message}")]
    Credentials { message: String },

    /// A transport-level failure: the request could not be sent, the
    /// connection failed, or the response body could not be read.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not valid JSON or did not match the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// An I/O error opening or reading the local file passed to upload.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenience alias for `Result<T, StreamableError>`.
pub type Result<T> = std::result::Result<T, StreamableError>;

use std::path::Path;
use std::time::Duration;

use reqwest::multipart;
use serde::de::DeserializeOwned;

use crate::errors::{Result, StreamableError};
use crate::models::{OperationResult, Video, VideoEmbed};

const DEFAULT_BASE_URL: &str = "https://api.streamable.com/";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Builder for constructing a [`Client`] with custom configuration.
///
/// # Example
///
/// ```no_run
/// use streamable::ClientBuilder;
/// use std::time::Duration;
///
/// # fn example() -> streamable::Result<()> {
/// let client = ClientBuilder::new()
///     .email("me@example.com")
///     .password("hunter2")
///     .timeout(Duration::from_secs(120))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    email: Option<String>,
    password: Option<String>,
    base_url: String,
    timeout: Duration,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            email: None,
            password: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the account email used for Basic authentication.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the account password used for Basic authentication.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Override the base URL (defaults to `https://api.streamable.com/`).
    ///
    /// Mainly useful for pointing the client at a local test server.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the HTTP request timeout (defaults to 60 seconds).
    pub fn timeout(mut self, d: Duration) -> Self {
        self.timeout = d;
        self
    }

    /// Build the [`Client`].
    ///
    /// If no credentials were set via [`email`](Self::email) and
    /// [`password`](Self::password), the builder will attempt to read the
    /// `STREAMABLE_EMAIL` and `STREAMABLE_PASSWORD` environment variables.
    ///
    /// Returns [`StreamableError::Credentials`] if either is unavailable.
    pub fn build(self) -> Result<Client> {
        let email = self
            .email
            .or_else(|| std::env::var("STREAMABLE_EMAIL").ok())
            .ok_or_else(|| StreamableError::Credentials {
                message: "email is required. Pass it to ClientBuilder::email() \
                          or set the STREAMABLE_EMAIL environment variable."
                    .into(),
            })?;

        let password = self
            .password
            .or_else(|| std::env::var("STREAMABLE_PASSWORD").ok())
            .ok_or_else(|| StreamableError::Credentials {
                message: "password is required. Pass it to ClientBuilder::password() \
                          or set the STREAMABLE_PASSWORD environment variable."
                    .into(),
            })?;

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(StreamableError::Http)?;

        Ok(Client {
            base_url: normalize_base_url(self.base_url),
            http,
            email,
            password,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The Streamable API client.
///
/// Use [`Client::new`] for quick construction or [`ClientBuilder`] for full
/// control. Constructing a client performs no network activity; credentials
/// are sent as HTTP Basic auth with every request.
///
/// # Example
///
/// ```no_run
/// use streamable::Client;
///
/// # async fn example() -> streamable::Result<()> {
/// let client = Client::new("me@example.com", "hunter2");
///
/// let video = client.get_video("ts9vt").await?;
/// println!("{} ({}p)", video.title, video.files.mp4.height);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client {
    base_url: String,
    http: reqwest::Client,
    email: String,
    password: String,
}

impl Client {
    /// Create a new client with the given credentials and default settings.
    ///
    /// For customization, use [`ClientBuilder`] instead.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            http,
            email: email.into(),
            password: password.into(),
        }
    }

    /// Fetch a video's file information and metadata by its shortcode.
    ///
    /// The shortcode is interpolated into the request path as-is, with no
    /// percent-encoding. This matches the wire behavior the API has always
    /// been called with; shortcodes are short alphanumeric tokens in practice.
    ///
    /// # Errors
    ///
    /// - [`StreamableError::Http`] if the request cannot be sent.
    /// - [`StreamableError::Decode`] if the body is not the expected JSON.
    pub async fn get_video(&self, shortcode: &str) -> Result<Video> {
        self.get(&format!("videos/{shortcode}")).await
    }

    /// Fetch oEmbed metadata for a video by its canonical URL.
    ///
    /// The URL is placed in the query string unescaped, byte-for-byte.
    /// Callers passing URLs containing `&` or `#` should be aware the server
    /// sees them raw.
    pub async fn get_video_embed(&self, video_url: &str) -> Result<VideoEmbed> {
        self.get(&format!("oembed.json?url={video_url}")).await
    }

    /// Ask the server to import a video from a remote URL.
    ///
    /// A malformed `video_url` does not fail client-side: the request is sent
    /// and the server answers with `status: 0` and an empty shortcode, which
    /// decodes as a normal [`OperationResult`]. Inspect
    /// [`OperationResult::status`] to distinguish acceptance from rejection.
    pub async fn import(&self, video_url: &str) -> Result<OperationResult> {
        self.get(&format!("import?url={video_url}")).await
    }

    /// Upload a local video file.
    ///
    /// The file is read into memory and sent as a `multipart/form-data` body
    /// with a single part named `"file"`, using the path's base name as the
    /// filename.
    ///
    /// # Errors
    ///
    /// - [`StreamableError::Io`] if the file cannot be read. No request is
    ///   sent in that case.
    /// - [`StreamableError::Http`] / [`StreamableError::Decode`] as for the
    ///   other operations.
    pub async fn upload(&self, path: impl AsRef<Path>) -> Result<OperationResult> {
        let path = path.as_ref();

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "video.mp4".to_string());

        let file_bytes = tokio::fs::read(path).await.map_err(StreamableError::Io)?;

        let form = multipart::Form::new().part(
            "file",
            multipart::Part::bytes(file_bytes).file_name(file_name),
        );

        let url = format!("{}upload", self.base_url);
        self.execute(self.http.post(&url).multipart(form)).await
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    /// Issue an authenticated GET against `<base_url><path>`.
    ///
    /// `path` is appended by plain concatenation; no encoding is applied.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        self.execute(self.http.get(&url)).await
    }

    /// Attach Basic auth, send, and decode the body as JSON.
    ///
    /// A single attempt, no retries. The HTTP status code is never inspected:
    /// the API reports business failure inside the JSON payload, so a non-2xx
    /// body that parses still decodes successfully.
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> Result<T> {
        let response = req
            .basic_auth(&self.email, Some(&self.password))
            .send()
            .await
            .map_err(StreamableError::Http)?;

        let body = response.text().await.map_err(StreamableError::Http)?;

        serde_json::from_str(&body).map_err(StreamableError::Decode)
    }
}

/// Base URLs are concatenated with paths directly, so a trailing slash is
/// required.
fn normalize_base_url(url: String) -> String {
    if url.ends_with('/') {
        url
    } else {
        format!("{url}/")
    }
}

use serde::{Deserialize, Deserializer, Serialize};

/// One encoded rendition of a video (the primary mp4 or its mobile variant).
///
/// Every field is decoded verbatim from the server JSON. Fields the server
/// omits or sends as `null` come back as their zero value, never as a
/// decode error.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct VideoFile {
    /// Processing status code for this rendition.
    #[serde(deserialize_with = "null_to_default")]
    pub status: i64,
    #[serde(deserialize_with = "null_to_default")]
    pub width: i64,
    #[serde(deserialize_with = "null_to_default")]
    pub height: i64,
    /// Playback URL.
    #[serde(deserialize_with = "null_to_default")]
    pub url: String,
    #[serde(deserialize_with = "null_to_default")]
    pub bitrate: i64,
    /// Seconds, fractional.
    #[serde(deserialize_with = "null_to_default")]
    pub duration: f64,
    /// Bytes.
    #[serde(deserialize_with = "null_to_default")]
    pub size: i64,
    #[serde(deserialize_with = "null_to_default")]
    pub framerate: i64,
}

/// The renditions attached to a [`Video`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct VideoFiles {
    #[serde(deserialize_with = "null_to_default")]
    pub mp4: VideoFile,
    #[serde(rename = "mp4-mobile", deserialize_with = "null_to_default")]
    pub mp4_mobile: VideoFile,
}

/// File information and metadata about a video.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Video {
    /// Processing status code (0 = uploading, 1 = processing, 2 = ready).
    #[serde(deserialize_with = "null_to_default")]
    pub status: i64,
    #[serde(deserialize_with = "null_to_default")]
    pub files: VideoFiles,
    /// HTML snippet for embedding the player.
    #[serde(deserialize_with = "null_to_default")]
    pub embed_code: String,
    #[serde(deserialize_with = "null_to_default")]
    pub source: String,
    #[serde(deserialize_with = "null_to_default")]
    pub thumbnail_url: String,
    /// Canonical URL, e.g. "streamable.com/ts9vt".
    #[serde(deserialize_with = "null_to_default")]
    pub url: String,
    /// Human-readable message from the server, if any.
    #[serde(deserialize_with = "null_to_default")]
    pub message: String,
    #[serde(deserialize_with = "null_to_default")]
    pub title: String,
    /// Processing completion, 0-100.
    #[serde(deserialize_with = "null_to_default")]
    pub percent: i64,
}

/// oEmbed metadata for a video.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct VideoEmbed {
    #[serde(deserialize_with = "null_to_default")]
    pub provider_url: String,
    /// Embed HTML.
    #[serde(deserialize_with = "null_to_default")]
    pub html: String,
    /// oEmbed version string.
    #[serde(deserialize_with = "null_to_default")]
    pub version: String,
    #[serde(deserialize_with = "null_to_default")]
    pub title: String,
    /// oEmbed resource type, e.g. "video".
    #[serde(rename = "type", deserialize_with = "null_to_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_to_default")]
    pub provider_name: String,
    #[serde(deserialize_with = "null_to_default")]
    pub thumbnail_url: String,
    #[serde(deserialize_with = "null_to_default")]
    pub width: i64,
    #[serde(deserialize_with = "null_to_default")]
    pub height: i64,
}

/// Outcome of an import or upload request.
///
/// A rejected request is still a successful decode: the server reports the
/// failure through `status` and an empty `shortcode`, not through HTTP.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OperationResult {
    /// 1 on success, 0 on rejection.
    #[serde(deserialize_with = "null_to_default")]
    pub status: i64,
    /// Identifier of the created video; empty when the request was rejected.
    #[serde(deserialize_with = "null_to_default")]
    pub shortcode: String,
}

/// Decode an explicit JSON `null` as the field's zero value, matching how
/// the server's sparse responses have always been consumed.
fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

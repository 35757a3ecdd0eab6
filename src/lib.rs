//! # Streamable client for Rust
//!
//! Client for the [Streamable](https://streamable.com) video hosting API.
//! Fetch video metadata, retrieve oEmbed snippets, import videos from remote
//! URLs, and upload local files -- all with idiomatic async Rust.
//!
//! Every operation is a single authenticated request followed by a JSON
//! decode. The API reports business failure (bad URL, rejected import)
//! inside the response payload rather than through HTTP status codes, so
//! check the decoded `status` fields; client-side errors are limited to
//! transport, decode, and local file I/O failures.
//!
//! ## Quick start
//!
//! ```no_run
//! use streamable::Client;
//!
//! #[tokio::main]
//! async fn main() -> streamable::Result<()> {
//!     let client = Client::new("me@example.com", "hunter2");
//!
//!     let video = client.get_video("ts9vt").await?;
//!     println!("{}: {}p, {:.1}s", video.title, video.files.mp4.height, video.files.mp4.duration);
//!
//!     let result = client.upload("clip.mp4").await?;
//!     if result.status == 1 {
//!         println!("uploaded as {}", result.shortcode);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Builder pattern
//!
//! ```no_run
//! use streamable::ClientBuilder;
//! use std::time::Duration;
//!
//! # fn example() -> streamable::Result<()> {
//! // Credentials fall back to STREAMABLE_EMAIL / STREAMABLE_PASSWORD.
//! let client = ClientBuilder::new()
//!     .timeout(Duration::from_secs(120))
//!     .build()?;
//! # Ok(())
//! # }
//! ```

mod client;
mod errors;
mod models;

pub use client::{Client, ClientBuilder};
pub use errors::{Result, StreamableError};
pub use models::{OperationResult, Video, VideoEmbed, VideoFile, VideoFiles};

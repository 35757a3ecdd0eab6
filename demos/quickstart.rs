//! Quick-start walkthrough for the Streamable Rust client.
//!
//! Run with:
//!   STREAMABLE_EMAIL=me@example.com STREAMABLE_PASSWORD=... cargo run --example quickstart
//!
//! Or pass credentials directly in code (not recommended for production).

use streamable::ClientBuilder;

#[tokio::main]
async fn main() -> streamable::Result<()> {
    // -----------------------------------------------------------------------
    // 1. Create a client (reads STREAMABLE_EMAIL / STREAMABLE_PASSWORD)
    // -----------------------------------------------------------------------
    let client = ClientBuilder::new().build()?;

    // Or provide credentials directly:
    // let client = streamable::Client::new("me@example.com", "hunter2");

    // -----------------------------------------------------------------------
    // 2. Fetch a video by shortcode
    // -----------------------------------------------------------------------
    let video = client.get_video("ts9vt").await?;
    println!("Title: {}", video.title);
    println!("URL: {}", video.url);
    println!(
        "Primary: {}x{} @ {} kbps, {:.1}s",
        video.files.mp4.width,
        video.files.mp4.height,
        video.files.mp4.bitrate / 1000,
        video.files.mp4.duration
    );
    println!(
        "Mobile: {}x{}",
        video.files.mp4_mobile.width, video.files.mp4_mobile.height
    );
    if !video.message.is_empty() {
        println!("Server message: {}", video.message);
    }
    println!();

    // -----------------------------------------------------------------------
    // 3. Fetch oEmbed metadata by canonical URL
    // -----------------------------------------------------------------------
    let embed = client.get_video_embed("https://streamable.com/ts9vt").await?;
    println!("Provider: {} ({})", embed.provider_name, embed.provider_url);
    println!("Embed HTML: {}", embed.html);
    println!();

    // -----------------------------------------------------------------------
    // 4. Import a video from a remote URL
    // -----------------------------------------------------------------------
    let result = client
        .import("http://www.sample-videos.com/video123/mp4/720/big_buck_bunny_720p_1mb.mp4")
        .await?;

    // The server signals rejection through the payload, not an error.
    if result.status == 1 {
        println!("Imported as {}", result.shortcode);
    } else {
        println!("Import rejected (status {})", result.status);
    }
    println!();

    // -----------------------------------------------------------------------
    // 5. Upload a local file
    // -----------------------------------------------------------------------
    let result = client.upload("clip.mp4").await?;
    if result.status == 1 {
        println!("Uploaded! https://streamable.com/{}", result.shortcode);
    } else {
        println!("Upload rejected (status {})", result.status);
    }

    Ok(())
}

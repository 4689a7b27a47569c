pub mod config;
pub mod error;
pub mod oembed;
pub mod output;
pub mod routes;
pub mod youtube;

use serde::Serialize;
use url::Url;

/// A single timed caption snippet, in playback order
#[derive(Debug, Clone, Serialize)]
pub struct Snippet {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// Extract the video ID from a YouTube URL.
///
/// Returns `None` for unrecognized hosts, unparsable input, or recognized
/// shapes with no ID in them — absence is a valid outcome, not an error.
pub fn extract_video_id(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;

    let id = match host {
        "youtu.be" => Some(parsed.path().trim_start_matches('/').to_string()),
        "youtube.com" | "www.youtube.com" => {
            let path = parsed.path();
            if path == "/watch" {
                parsed
                    .query_pairs()
                    .find(|(key, _)| key == "v")
                    .map(|(_, value)| value.into_owned())
            } else if path.starts_with("/embed/") || path.starts_with("/v/") {
                path.split('/').nth(2).map(str::to_string)
            } else {
                None
            }
        }
        _ => None,
    };

    id.filter(|id| !id.is_empty())
}

/// Build the per-request HTTP client.
///
/// Ambient proxy environment variables are always ignored; the explicit
/// `proxy` argument, when present, is the only proxy source and covers both
/// HTTP and HTTPS.
pub fn build_client(proxy: Option<&str>) -> reqwest::Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder().no_proxy();
    if let Some(proxy_url) = proxy {
        builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
    }
    builder.build()
}

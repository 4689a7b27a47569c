use eyre::Result;
use serde::{Deserialize, Serialize};

const OEMBED_URL: &str = "https://www.youtube.com/oembed";

/// Video metadata as returned by YouTube's oEmbed endpoint.
///
/// Every field is optional, but the record shape is fixed: serialization
/// always emits all ten keys, with `null` for anything the upstream response
/// left out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoMetadata {
    pub title: Option<String>,
    pub author_name: Option<String>,
    pub author_url: Option<String>,
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    pub height: Option<i64>,
    pub width: Option<i64>,
    pub version: Option<String>,
    pub provider_name: Option<String>,
    pub provider_url: Option<String>,
    pub thumbnail_url: Option<String>,
}

/// Fetch metadata for a video from the oEmbed endpoint.
///
/// One GET, no retries, transport-default timeouts. Non-2xx statuses and
/// network failures surface as errors carrying the upstream message.
pub async fn fetch_video_data(client: &reqwest::Client, video_id: &str) -> Result<VideoMetadata> {
    let watch_url = format!("https://www.youtube.com/watch?v={video_id}");
    let params = [("format", "json"), ("url", watch_url.as_str())];

    let metadata = client
        .get(OEMBED_URL)
        .query(&params)
        .send()
        .await?
        .error_for_status()?
        .json::<VideoMetadata>()
        .await?;

    Ok(metadata)
}

//! Route handlers and router construction.
//!
//! Each of the three video operations follows the same shape: validate the
//! URL, extract the video ID, build a per-request client honoring the
//! explicit proxy, delegate to the fetcher, and map any failure to one of the
//! two [`ApiError`] kinds. There is no partial-success path.

use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};

use crate::config::PROJECT_NAME;
use crate::error::ApiError;
use crate::oembed::VideoMetadata;
use crate::{build_client, extract_video_id, oembed, output, youtube};

#[derive(Debug, Deserialize)]
pub struct VideoRequest {
    /// Optional at the wire level so a missing URL maps to 400, not 422.
    pub url: Option<String>,
    pub languages: Option<Vec<String>>,
    pub proxy: Option<String>,
}

impl VideoRequest {
    /// Validate the URL and extract the video ID, per the bad-request rules.
    fn video_id(&self) -> Result<String, ApiError> {
        let url = self.url.as_deref().unwrap_or("");
        if url.is_empty() {
            return Err(ApiError::BadRequest("No URL provided".into()));
        }
        extract_video_id(url).ok_or_else(|| ApiError::BadRequest("Invalid YouTube URL".into()))
    }

    fn languages(&self) -> Vec<String> {
        self.languages
            .clone()
            .unwrap_or_else(|| vec!["en".to_string()])
    }

    fn client(&self) -> reqwest::Result<reqwest::Client> {
        build_client(self.proxy.as_deref())
    }
}

/// POST /youtube/video-data
pub async fn video_data(Json(request): Json<VideoRequest>) -> Result<Json<VideoMetadata>, ApiError> {
    let video_id = request.video_id()?;
    let client = request
        .client()
        .map_err(|e| ApiError::Upstream(format!("Error getting video data: {e}")))?;
    let metadata = oembed::fetch_video_data(&client, &video_id)
        .await
        .map_err(|e| ApiError::Upstream(format!("Error getting video data: {e}")))?;
    Ok(Json(metadata))
}

/// POST /youtube/video-captions
pub async fn video_captions(Json(request): Json<VideoRequest>) -> Result<Json<String>, ApiError> {
    let video_id = request.video_id()?;
    let client = request
        .client()
        .map_err(|e| ApiError::Upstream(format!("Error getting captions for video: {e}")))?;
    let snippets = youtube::fetch_captions(&client, &video_id, &request.languages())
        .await
        .map_err(|e| ApiError::Upstream(format!("Error getting captions for video: {e}")))?;
    Ok(Json(output::captions_text(&snippets)))
}

/// POST /youtube/video-timestamps
pub async fn video_timestamps(Json(request): Json<VideoRequest>) -> Result<Json<Vec<String>>, ApiError> {
    let video_id = request.video_id()?;
    let client = request
        .client()
        .map_err(|e| ApiError::Upstream(format!("Error generating timestamps: {e}")))?;
    let snippets = youtube::fetch_captions(&client, &video_id, &request.languages())
        .await
        .map_err(|e| ApiError::Upstream(format!("Error generating timestamps: {e}")))?;
    Ok(Json(output::timestamp_lines(&snippets)))
}

/// GET /
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": format!("Welcome to the {PROJECT_NAME}"),
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/youtube/video-data",
            "/youtube/video-captions",
            "/youtube/video-timestamps",
        ],
    }))
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Build the application router with permissive CORS.
pub fn build_router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/youtube/video-data", post(video_data))
        .route("/youtube/video-captions", post(video_captions))
        .route("/youtube/video-timestamps", post(video_timestamps))
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tower::util::ServiceExt;

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = build_router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "status": "healthy" }));
    }

    #[tokio::test]
    async fn test_root() {
        let response = build_router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Welcome to the YouTube Tools API");
    }

    #[tokio::test]
    async fn test_empty_url_is_bad_request() {
        for uri in [
            "/youtube/video-data",
            "/youtube/video-captions",
            "/youtube/video-timestamps",
        ] {
            let response = build_router()
                .oneshot(post_json(uri, r#"{"url": ""}"#))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri: {uri}");
            assert_eq!(body_json(response).await["detail"], "No URL provided");
        }
    }

    #[tokio::test]
    async fn test_missing_url_is_bad_request() {
        let response = build_router()
            .oneshot(post_json("/youtube/video-data", "{}"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["detail"], "No URL provided");
    }

    #[tokio::test]
    async fn test_unrecognized_url_is_bad_request() {
        let response = build_router()
            .oneshot(post_json(
                "/youtube/video-captions",
                r#"{"url": "https://vimeo.com/12345"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["detail"], "Invalid YouTube URL");
    }

    #[tokio::test]
    async fn test_watch_url_without_id_is_bad_request() {
        let response = build_router()
            .oneshot(post_json(
                "/youtube/video-timestamps",
                r#"{"url": "https://www.youtube.com/watch?list=PL1"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{info, warn};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Deserializer};
use std::time::Duration;
use url::Url;

use crate::error::{AnalyzerError, Result};
use crate::models::VideoDetails;
use crate::utils::{extract_hashtags, parse_iso8601_duration_to_seconds};

pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of video metadata for a single, already extracted video ID.
#[async_trait]
pub trait VideoFetcher: Send + Sync {
    async fn fetch_video(&self, video_id: &str) -> Result<VideoDetails>;
}

/// Client for the `videos.list` endpoint of the YouTube Data API v3.
///
/// Documentation: https://developers.google.com/youtube/v3/docs/videos/list
pub struct YouTubeClient {
    client: Client,
    api_key: String,
    videos_url: Url,
}

impl YouTubeClient {
    pub fn new(api_key: Option<&str>, base_url: &str, timeout: Duration) -> Result<Self> {
        let api_key = api_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                AnalyzerError::Configuration(
                    "YouTube API key is not set. Set YOUTUBE_API_KEY in the environment."
                        .to_string(),
                )
            })?;

        let videos_url = Url::parse(&format!("{}/videos", base_url.trim_end_matches('/')))
            .map_err(|e| {
                AnalyzerError::Configuration(format!("invalid YouTube API URL '{base_url}': {e}"))
            })?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AnalyzerError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(YouTubeClient {
            client,
            api_key: api_key.to_string(),
            videos_url,
        })
    }

    fn request_url(&self, video_id: &str) -> Url {
        let mut url = self.videos_url.clone();
        url.query_pairs_mut()
            .append_pair("part", "snippet,statistics,contentDetails")
            .append_pair("id", video_id)
            .append_pair("key", &self.api_key);
        url
    }
}

#[async_trait]
impl VideoFetcher for YouTubeClient {
    async fn fetch_video(&self, video_id: &str) -> Result<VideoDetails> {
        info!("Fetching metadata for video ID: {video_id}");

        let response = self.client.get(self.request_url(video_id)).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("YouTube API answered {status} for video ID {video_id}");
            return Err(provider_error(status, video_id, &body));
        }

        let list: VideoListResponse = serde_json::from_str(&body)?;
        normalize_video(video_id, list)
    }
}

/// Maps a non-success provider answer onto the error taxonomy.
pub fn provider_error(status: StatusCode, video_id: &str, body: &str) -> AnalyzerError {
    let message = serde_json::from_str::<ProviderErrorBody>(body)
        .ok()
        .map(|b| b.error.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| status.to_string());

    match status {
        StatusCode::FORBIDDEN => AnalyzerError::AuthOrQuota(message),
        StatusCode::NOT_FOUND => AnalyzerError::NotFound(video_id.to_string()),
        _ => AnalyzerError::Upstream(format!("HTTP {}: {message}", status.as_u16())),
    }
}

/// Turns the decoded `videos.list` response into [`VideoDetails`].
pub fn normalize_video(video_id: &str, response: VideoListResponse) -> Result<VideoDetails> {
    let video = response
        .items
        .into_iter()
        .next()
        .ok_or_else(|| AnalyzerError::NotFound(video_id.to_string()))?;

    let snippet = video.snippet;
    let published_at = snippet.published_at.ok_or_else(|| {
        AnalyzerError::Upstream(format!("video {video_id} has no publication date"))
    })?;

    // Description first, then the title.
    let hashtag_source = format!("{} {}", snippet.description, snippet.title);
    let hashtags = extract_hashtags(Some(&hashtag_source));
    let duration = video.content_details.duration;

    Ok(VideoDetails {
        video_id: video_id.to_string(),
        title: snippet.title,
        description: snippet.description,
        channel_title: snippet.channel_title,
        channel_id: snippet.channel_id,
        published_at,
        thumbnail_url: snippet.thumbnails.high.url,
        view_count: video.statistics.view_count,
        like_count: video.statistics.like_count,
        comment_count: video.statistics.comment_count,
        tags: snippet.tags,
        hashtags,
        duration_seconds: parse_iso8601_duration_to_seconds(&duration),
        duration,
    })
}

#[derive(Debug, Default, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    #[serde(default)]
    pub snippet: Snippet,
    #[serde(default)]
    pub statistics: Statistics,
    #[serde(default)]
    pub content_details: ContentDetails,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snippet {
    pub title: String,
    pub description: String,
    pub channel_title: String,
    pub channel_id: String,
    pub published_at: Option<DateTime<Utc>>,
    pub thumbnails: Thumbnails,
    pub tags: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Thumbnails {
    pub high: Thumbnail,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Thumbnail {
    pub url: String,
}

/// The API sends counters as decimal strings.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Statistics {
    #[serde(deserialize_with = "count_from_string")]
    pub view_count: u64,
    #[serde(deserialize_with = "count_from_string")]
    pub like_count: u64,
    #[serde(deserialize_with = "count_from_string")]
    pub comment_count: u64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContentDetails {
    pub duration: String,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: ProviderErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorDetail {
    #[serde(default)]
    message: String,
}

fn count_from_string<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Text(String),
        Number(u64),
    }

    match Count::deserialize(deserializer)? {
        Count::Number(n) => Ok(n),
        Count::Text(s) => s.trim().parse::<u64>().map_err(serde::de::Error::custom),
    }
}

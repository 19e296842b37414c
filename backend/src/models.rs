use chrono::{DateTime, Utc};
use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response::Responder;
use rocket::serde::{Deserialize, Serialize};
use rocket::{response, Response};
use std::io::Cursor;

use crate::error::AnalyzerError;

/// Normalized metadata of one video as returned by the fetcher.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VideoDetails {
    pub video_id: String,
    pub title: String,
    pub description: String,
    pub channel_title: String,
    pub channel_id: String,
    pub published_at: DateTime<Utc>,
    pub thumbnail_url: String,
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
    pub tags: Vec<String>,
    pub hashtags: Vec<String>,
    pub duration: String, // ISO8601, e.g. PT59S
    pub duration_seconds: i64,
}

/// Result of analysing a submitted URL: the fetched details plus the URL itself.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VideoInfo {
    pub url: String,
    #[serde(flatten)]
    pub details: VideoDetails,
}

/// Everything the store overwrites on re-analysis.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VideoFields {
    pub url: String,
    pub title: String,
    pub description: String,
    pub channel_title: String,
    pub published_at: DateTime<Utc>,
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
    pub tags: Vec<String>,
    pub hashtags: Vec<String>,
}

impl From<&VideoInfo> for VideoFields {
    fn from(info: &VideoInfo) -> Self {
        let details = &info.details;
        VideoFields {
            url: info.url.clone(),
            title: details.title.clone(),
            description: details.description.clone(),
            channel_title: details.channel_title.clone(),
            published_at: details.published_at,
            view_count: details.view_count,
            like_count: details.like_count,
            comment_count: details.comment_count,
            tags: details.tags.clone(),
            hashtags: details.hashtags.clone(),
        }
    }
}

/// A persisted analysis. `video_id` and `created_at` never change after the
/// first insert.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VideoRecord {
    pub video_id: String,
    #[serde(flatten)]
    pub fields: VideoFields,
    pub created_at: DateTime<Utc>,
}

impl VideoRecord {
    pub fn new(video_id: &str, fields: VideoFields, created_at: DateTime<Utc>) -> Self {
        VideoRecord {
            video_id: video_id.to_string(),
            fields,
            created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub video_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub created: bool,
    pub message: String,
    pub video: VideoRecord,
    pub video_info: VideoInfo,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VideoInfoResponse {
    pub success: bool,
    pub data: VideoInfo,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VideoListResponse {
    pub videos: Vec<VideoRecord>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip)]
    pub status: Status,
}

impl ErrorResponse {
    pub fn new(status: Status, error: impl Into<String>) -> Self {
        ErrorResponse {
            error: error.into(),
            status,
        }
    }

    pub fn bad_request(error: impl Into<String>) -> Self {
        Self::new(Status::BadRequest, error)
    }

    pub fn not_found(error: impl Into<String>) -> Self {
        Self::new(Status::NotFound, error)
    }

    pub fn internal(error: impl std::fmt::Display) -> Self {
        Self::new(Status::InternalServerError, format!("Server error: {error}"))
    }
}

impl From<AnalyzerError> for ErrorResponse {
    fn from(e: AnalyzerError) -> Self {
        if e.is_recoverable() {
            ErrorResponse::bad_request(e.to_string())
        } else {
            ErrorResponse::internal(e)
        }
    }
}

impl<'r> Responder<'r, 'static> for ErrorResponse {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let json = serde_json::to_string(&self).map_err(|_| Status::InternalServerError)?;
        Response::build()
            .status(self.status)
            .header(ContentType::JSON)
            .sized_body(json.len(), Cursor::new(json))
            .ok()
    }
}

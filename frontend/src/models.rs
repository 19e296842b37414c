use serde::{Deserialize, Serialize};

/// A stored analysis as served by `/video/<id>`, `/video/recent` and `/videos`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VideoRecord {
    pub video_id: String,
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub channel_title: String,
    pub published_at: String,
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub hashtags: Vec<String>,
    pub created_at: String,
}

/// Fresh analysis result; not necessarily stored.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VideoInfo {
    pub video_id: String,
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub channel_title: String,
    #[serde(default)]
    pub channel_id: String,
    pub published_at: String,
    #[serde(default)]
    pub thumbnail_url: String,
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub duration: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AnalyzeRequest {
    pub video_url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub created: bool,
    pub message: String,
    pub video: VideoRecord,
    pub video_info: VideoInfo,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct VideoInfoResponse {
    pub success: bool,
    pub data: VideoInfo,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_analyze_response() {
        let body = r#"{
            "success": true,
            "created": false,
            "message": "Video data updated.",
            "video": {
                "video_id": "ABC123DEF45", "url": "https://youtu.be/ABC123DEF45",
                "title": "t", "description": "", "channel_title": "c",
                "published_at": "2024-03-10T15:30:00Z",
                "view_count": 1, "like_count": 2, "comment_count": 3,
                "tags": [], "hashtags": ["x"], "created_at": "2024-03-11T00:00:00Z"
            },
            "video_info": {
                "video_id": "ABC123DEF45", "url": "https://youtu.be/ABC123DEF45",
                "title": "t", "description": "", "channel_title": "c", "channel_id": "UC",
                "published_at": "2024-03-10T15:30:00Z", "thumbnail_url": "",
                "view_count": 1, "like_count": 2, "comment_count": 3,
                "tags": [], "hashtags": ["x"], "duration": "PT1M", "duration_seconds": 60
            }
        }"#;

        let response: AnalyzeResponse = serde_json::from_str(body).unwrap();
        assert!(!response.created);
        assert_eq!(response.video.hashtags, vec!["x"]);
        assert_eq!(response.video_info.duration, "PT1M");
    }
}

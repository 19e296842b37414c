use log::info;
use std::sync::Arc;

use crate::error::{AnalyzerError, Result};
use crate::models::VideoInfo;
use crate::services::youtube_service::VideoFetcher;
use crate::utils::{extract_youtube_video_id, SUPPORTED_URL_FORMATS};

/// Turns a user-submitted URL into a [`VideoInfo`]. Persisting it is up to the caller.
#[derive(Clone)]
pub struct Analyzer {
    fetcher: Arc<dyn VideoFetcher>,
}

impl Analyzer {
    pub fn new(fetcher: Arc<dyn VideoFetcher>) -> Self {
        Analyzer { fetcher }
    }

    pub async fn analyze_video_url(&self, raw_url: &str) -> Result<VideoInfo> {
        let url = raw_url.trim();
        if url.is_empty() {
            return Err(AnalyzerError::InvalidInput("Enter a video URL".to_string()));
        }

        let video_id = extract_youtube_video_id(url).ok_or_else(|| {
            AnalyzerError::InvalidInput(format!(
                "Could not extract a video ID from the URL. Supported formats: {SUPPORTED_URL_FORMATS}"
            ))
        })?;

        let details = self.fetcher.fetch_video(&video_id).await?;
        info!(
            "Analyzed video {video_id}: {} hashtags, {} tags",
            details.hashtags.len(),
            details.tags.len()
        );

        Ok(VideoInfo {
            url: url.to_string(),
            details,
        })
    }
}

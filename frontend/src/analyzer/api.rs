use crate::env_variable_utils::BACKEND_URL;
use crate::models::{
    AnalyzeRequest, AnalyzeResponse, ErrorResponse, VideoInfo, VideoInfoResponse, VideoRecord,
};
use gloo_net::http::{Request, Response};

/// Analyses and stores a video. Errors are ready to show to the user.
pub async fn analyze_video(video_url: &str) -> Result<AnalyzeResponse, String> {
    let url = format!("{}/analyze", &*BACKEND_URL);
    let request_body = AnalyzeRequest {
        video_url: video_url.to_string(),
    };

    let response = Request::post(&url)
        .json(&request_body)
        .map_err(|e| format!("Request error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        response
            .json::<AnalyzeResponse>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    } else {
        Err(error_message(response).await)
    }
}

/// Analyses a video without storing it.
pub async fn preview_video(video_url: &str) -> Result<VideoInfo, String> {
    let url = format!(
        "{}/api/video-info?url={}",
        &*BACKEND_URL,
        urlencoding::encode(video_url)
    );

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        response
            .json::<VideoInfoResponse>()
            .await
            .map(|r| r.data)
            .map_err(|e| format!("Failed to parse response: {}", e))
    } else {
        Err(error_message(response).await)
    }
}

pub async fn load_recent_videos() -> Result<Vec<VideoRecord>, String> {
    let url = format!("{}/video/recent", &*BACKEND_URL);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to connect to backend: {}", e))?;

    if response.ok() {
        response
            .json::<Vec<VideoRecord>>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    } else {
        Err(error_message(response).await)
    }
}

/// `Ok(None)` when the video has never been analysed.
pub async fn load_video(video_id: &str) -> Result<Option<VideoRecord>, String> {
    let url = format!("{}/video/{}", &*BACKEND_URL, urlencoding::encode(video_id));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to connect to backend: {}", e))?;

    if response.status() == 404 {
        return Ok(None);
    }
    if response.ok() {
        response
            .json::<VideoRecord>()
            .await
            .map(Some)
            .map_err(|e| format!("Failed to parse response: {}", e))
    } else {
        Err(error_message(response).await)
    }
}

async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(error_text) => match serde_json::from_str::<ErrorResponse>(&error_text) {
            Ok(error_response) => error_response.error,
            Err(_) => format!("Request failed ({}): {}", status, error_text),
        },
        Err(_) => format!("Request failed with status: {}", status),
    }
}

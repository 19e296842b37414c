use crate::models::{
    AnalyzeRequest, AnalyzeResponse, ErrorResponse, VideoFields, VideoInfoResponse,
};
use crate::AppState;
use log::{error, info, warn};
use rocket::serde::json::Json;
use rocket::{get, post, State};

/// Analyses the submitted URL and stores the result, replacing an earlier
/// analysis of the same video.
#[post("/analyze", format = "json", data = "<request>")]
pub async fn analyze_video(
    state: &State<AppState>,
    request: Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ErrorResponse> {
    let video_info = state
        .analyzer
        .analyze_video_url(&request.video_url)
        .await
        .map_err(|e| {
            warn!("Analysis of '{}' failed: {e}", request.video_url);
            ErrorResponse::from(e)
        })?;

    let video_id = video_info.details.video_id.clone();
    let (video, created) = state
        .store
        .upsert(&video_id, VideoFields::from(&video_info))
        .await
        .map_err(|e| {
            error!("Failed to store analysis of video {video_id}: {e:?}");
            ErrorResponse::internal(e)
        })?;

    let message = if created {
        format!(
            "Video analysed successfully! Found {} hashtags and {} tags.",
            video_info.details.hashtags.len(),
            video_info.details.tags.len()
        )
    } else {
        "Video data updated.".to_string()
    };
    info!("{message} ({video_id})");

    Ok(Json(AnalyzeResponse {
        success: true,
        created,
        message,
        video,
        video_info,
    }))
}

/// Analyses without storing anything.
#[get("/api/video-info?<url>")]
pub async fn api_video_info(
    state: &State<AppState>,
    url: Option<String>,
) -> Result<Json<VideoInfoResponse>, ErrorResponse> {
    let url = url.unwrap_or_default();
    if url.trim().is_empty() {
        return Err(ErrorResponse::bad_request("URL not specified"));
    }

    match state.analyzer.analyze_video_url(&url).await {
        Ok(data) => Ok(Json(VideoInfoResponse {
            success: true,
            data,
        })),
        Err(e) => {
            warn!("Video info lookup for '{url}' failed: {e}");
            Err(e.into())
        }
    }
}

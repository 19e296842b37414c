use crate::models::{ErrorResponse, VideoListResponse, VideoRecord};
use crate::AppState;
use log::{error, info};
use rocket::serde::json::Json;
use rocket::{get, State};

const RECENT_LIMIT: u64 = 10;
const DEFAULT_PER_PAGE: u64 = 20;
const MAX_PER_PAGE: u64 = 100;

#[get("/recent")]
pub async fn recent_videos(state: &State<AppState>) -> Result<Json<Vec<VideoRecord>>, ErrorResponse> {
    match state.store.recent(RECENT_LIMIT).await {
        Ok(videos) => Ok(Json(videos)),
        Err(e) => {
            error!("Failed to load recent analyses: {e:?}");
            Err(ErrorResponse::internal(e))
        }
    }
}

#[get("/videos?<q>&<page>&<per_page>")]
pub async fn list_videos(
    state: &State<AppState>,
    q: Option<String>,
    page: Option<u64>,
    per_page: Option<u64>,
) -> Result<Json<VideoListResponse>, ErrorResponse> {
    let page = page.unwrap_or(1).max(1);
    let per_page = per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE);
    let query = q.as_deref().map(str::trim).filter(|q| !q.is_empty());

    match state.store.list(query, page, per_page).await {
        Ok((videos, total)) => {
            info!("Retrieved {} videos for page {page}", videos.len());
            Ok(Json(VideoListResponse {
                videos,
                total,
                page,
                per_page,
            }))
        }
        Err(e) => {
            error!("Failed to list videos: {e:?}");
            Err(ErrorResponse::internal(e))
        }
    }
}

#[get("/<video_id>")]
pub async fn get_video(
    state: &State<AppState>,
    video_id: &str,
) -> Result<Json<VideoRecord>, ErrorResponse> {
    match state.store.get(video_id).await {
        Ok(Some(video)) => Ok(Json(video)),
        Ok(None) => Err(ErrorResponse::not_found("Video not found in the database")),
        Err(e) => {
            error!("Failed to fetch video {video_id}: {e:?}");
            Err(ErrorResponse::internal(e))
        }
    }
}

#[macro_use]
extern crate rocket;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

use crate::services::analyzer::Analyzer;
use crate::services::video_service::VideoStore;
use rocket::{Build, Rocket};
use std::sync::Arc;

pub struct AppState {
    pub analyzer: Analyzer,
    pub store: Arc<dyn VideoStore>,
}

pub fn build_rocket(state: AppState) -> Rocket<Build> {
    rocket::build()
        .manage(state)
        .mount(
            "/",
            routes![api::analyze_video, api::api_video_info, api::list_videos],
        )
        .mount("/video", routes![api::recent_videos, api::get_video])
        .register(
            "/",
            catchers![
                api::catchers::bad_request,
                api::catchers::not_found,
                api::catchers::unprocessable_entity,
                api::catchers::internal_error,
                api::catchers::default_catcher,
            ],
        )
}

use crate::services::analyzer::Analyzer;
use crate::services::elasticsearch_service::create_es_index;
use crate::services::video_service::{ElasticsearchVideoStore, InMemoryVideoStore, VideoStore};
use crate::services::youtube_service::{YouTubeClient, DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT};
use crate::AppState;
use anyhow::Result;
use elasticsearch::{
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    Elasticsearch,
};
use env_logger::{Builder, Env};
use log::{info, warn};
use rocket::http::Method;
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use std::env;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Elasticsearch,
    Memory,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub youtube_api_key: Option<String>,
    pub youtube_api_base_url: String,
    pub youtube_api_timeout: Duration,
    pub storage_backend: StorageBackend,
    pub elasticsearch_url: String,
    pub video_index: String,
    pub frontend_origin: String,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let timeout_secs = match lookup("YOUTUBE_API_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                anyhow::anyhow!("YOUTUBE_API_TIMEOUT_SECS must be a whole number of seconds: {e}")
            })?,
            None => DEFAULT_TIMEOUT.as_secs(),
        };

        let storage_backend = match lookup("STORAGE_BACKEND").as_deref().map(str::trim) {
            None | Some("") | Some("elasticsearch") => StorageBackend::Elasticsearch,
            Some("memory") => StorageBackend::Memory,
            Some(other) => {
                return Err(anyhow::anyhow!(
                    "STORAGE_BACKEND must be 'elasticsearch' or 'memory', got '{other}'"
                ))
            }
        };

        Ok(Settings {
            youtube_api_key: lookup("YOUTUBE_API_KEY"),
            youtube_api_base_url: lookup("YOUTUBE_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            youtube_api_timeout: Duration::from_secs(timeout_secs.max(1)),
            storage_backend,
            elasticsearch_url: lookup("ELASTICSEARCH_URL")
                .unwrap_or_else(|| "http://localhost:9200".to_string()),
            video_index: lookup("VIDEO_INDEX").unwrap_or_else(|| "video_analyses".to_string()),
            frontend_origin: lookup("FRONTEND_ORIGIN")
                .unwrap_or_else(|| "http://localhost:8080".to_string()),
        })
    }
}

pub fn init_logger() {
    Builder::from_env(Env::default().default_filter_or("info")).init();
    info!("Starting Rocket backend...");
}

pub fn load_environment() {
    dotenv::dotenv().ok();
}

pub fn create_elasticsearch_client(es_url: &str) -> Result<Elasticsearch> {
    info!("Connecting to Elasticsearch at: {es_url}");

    let transport =
        TransportBuilder::new(SingleNodeConnectionPool::new(es_url.parse()?)).build()?;

    Ok(Elasticsearch::new(transport))
}

pub async fn create_video_store(settings: &Settings) -> Result<Arc<dyn VideoStore>> {
    match settings.storage_backend {
        StorageBackend::Elasticsearch => {
            let es_client = create_elasticsearch_client(&settings.elasticsearch_url)?;
            create_es_index(&es_client, &settings.video_index).await;
            Ok(Arc::new(ElasticsearchVideoStore::new(
                es_client,
                settings.video_index.clone(),
            )))
        }
        StorageBackend::Memory => {
            warn!("Using the in-memory video store; analyses are lost on restart.");
            Ok(Arc::new(InMemoryVideoStore::new()))
        }
    }
}

/// Fails when the YouTube API key is missing; the server must not start without it.
pub async fn create_app_state(settings: &Settings) -> Result<AppState> {
    let youtube = YouTubeClient::new(
        settings.youtube_api_key.as_deref(),
        &settings.youtube_api_base_url,
        settings.youtube_api_timeout,
    )?;
    info!(
        "YouTube API client ready ({}, timeout {}s)",
        settings.youtube_api_base_url,
        settings.youtube_api_timeout.as_secs()
    );

    let store = create_video_store(settings).await?;

    Ok(AppState {
        analyzer: Analyzer::new(Arc::new(youtube)),
        store,
    })
}

pub fn create_cors(frontend_origin: &str) -> Result<rocket_cors::Cors> {
    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::some_exact(&[frontend_origin]))
        .allowed_methods(
            vec![Method::Get, Method::Post, Method::Options]
                .into_iter()
                .map(From::from)
                .collect(),
        )
        .allowed_headers(AllowedHeaders::some(&["Accept", "Content-Type"]))
        .to_cors()
        .map_err(|e| anyhow::anyhow!("Failed to create CORS options: {}", e))?;

    Ok(cors)
}

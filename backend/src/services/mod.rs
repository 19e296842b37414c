pub mod analyzer;
pub mod elasticsearch_service;
pub mod video_service;
pub mod youtube_service;

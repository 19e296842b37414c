use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use elasticsearch::params::Refresh;
use elasticsearch::{Elasticsearch, GetParts, SearchParts, UpdateParts};
use log::info;
use serde_json::{json, Value};
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::models::{VideoFields, VideoRecord};

/// Storage of analysed videos keyed by video ID.
#[async_trait]
pub trait VideoStore: Send + Sync {
    /// Updates the record for `video_id` if it exists, otherwise creates it.
    /// Returns the stored record and whether it was created.
    async fn upsert(&self, video_id: &str, fields: VideoFields) -> Result<(VideoRecord, bool)>;

    async fn get(&self, video_id: &str) -> Result<Option<VideoRecord>>;

    /// Most recently created records first.
    async fn recent(&self, limit: u64) -> Result<Vec<VideoRecord>>;

    /// One page (1-based) of records, newest first, optionally filtered by a
    /// free-text query over title, description, channel title and video ID.
    async fn list(&self, query: Option<&str>, page: u64, per_page: u64)
        -> Result<(Vec<VideoRecord>, u64)>;
}

#[derive(Default)]
pub struct InMemoryVideoStore {
    videos: RwLock<HashMap<String, VideoRecord>>,
}

impl InMemoryVideoStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn newest_first(&self, query: Option<&str>) -> Vec<VideoRecord> {
        let needle = query.map(str::to_lowercase);
        let videos = self.videos.read().await;
        let mut matching: Vec<VideoRecord> = videos
            .values()
            .filter(|record| match &needle {
                Some(needle) => matches_query(record, needle),
                None => true,
            })
            .cloned()
            .collect();
        matching.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.video_id.cmp(&b.video_id))
        });
        matching
    }
}

fn matches_query(record: &VideoRecord, needle: &str) -> bool {
    [
        record.fields.title.as_str(),
        record.fields.description.as_str(),
        record.fields.channel_title.as_str(),
        record.video_id.as_str(),
    ]
    .iter()
    .any(|haystack| haystack.to_lowercase().contains(needle))
}

#[async_trait]
impl VideoStore for InMemoryVideoStore {
    async fn upsert(&self, video_id: &str, fields: VideoFields) -> Result<(VideoRecord, bool)> {
        let mut videos = self.videos.write().await;
        match videos.get_mut(video_id) {
            Some(existing) => {
                existing.fields = fields;
                Ok((existing.clone(), false))
            }
            None => {
                let record = VideoRecord::new(video_id, fields, Utc::now());
                videos.insert(video_id.to_string(), record.clone());
                Ok((record, true))
            }
        }
    }

    async fn get(&self, video_id: &str) -> Result<Option<VideoRecord>> {
        Ok(self.videos.read().await.get(video_id).cloned())
    }

    async fn recent(&self, limit: u64) -> Result<Vec<VideoRecord>> {
        let mut videos = self.newest_first(None).await;
        videos.truncate(limit as usize);
        Ok(videos)
    }

    async fn list(
        &self,
        query: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<VideoRecord>, u64)> {
        let videos = self.newest_first(query).await;
        let total = videos.len() as u64;
        let from = page_offset(page, per_page);
        let page = videos
            .into_iter()
            .skip(usize::try_from(from).unwrap_or(usize::MAX))
            .take(per_page as usize)
            .collect();
        Ok((page, total))
    }
}

pub struct ElasticsearchVideoStore {
    es_client: Elasticsearch,
    index: String,
}

impl ElasticsearchVideoStore {
    pub fn new(es_client: Elasticsearch, index: impl Into<String>) -> Self {
        ElasticsearchVideoStore {
            es_client,
            index: index.into(),
        }
    }

    async fn search(&self, search_body: Value) -> Result<(Vec<VideoRecord>, u64)> {
        let response = self
            .es_client
            .search(SearchParts::Index(&[self.index.as_str()]))
            .body(search_body)
            .send()
            .await?;

        if !response.status_code().is_success() {
            return Err(anyhow::anyhow!(
                "Elasticsearch search failed with status: {}",
                response.status_code()
            ));
        }

        let json_response: Value = response.json().await?;
        let total = json_response["hits"]["total"]["value"].as_u64().unwrap_or(0);
        let mut videos = Vec::new();

        if let Some(hits) = json_response["hits"]["hits"].as_array() {
            for hit in hits {
                match serde_json::from_value::<VideoRecord>(hit["_source"].clone()) {
                    Ok(video) => videos.push(video),
                    Err(e) => log::error!("Skipping unreadable document {}: {e:?}", hit["_id"]),
                }
            }
        }

        Ok((videos, total))
    }
}

#[async_trait]
impl VideoStore for ElasticsearchVideoStore {
    async fn upsert(&self, video_id: &str, fields: VideoFields) -> Result<(VideoRecord, bool)> {
        // `doc` is merged into an existing document; `upsert` is only written on insert,
        // so created_at survives re-analysis.
        let new_record = VideoRecord::new(video_id, fields.clone(), Utc::now());
        let response = self
            .es_client
            .update(UpdateParts::IndexId(self.index.as_str(), video_id))
            .refresh(Refresh::WaitFor)
            .body(json!({
                "doc": fields,
                "upsert": new_record,
            }))
            .send()
            .await?;

        if !response.status_code().is_success() {
            let status = response.status_code();
            let text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "Failed to upsert video {video_id} ({status}): {text}"
            ));
        }

        let json_response: Value = response.json().await?;
        let created = json_response["result"].as_str() == Some("created");
        info!(
            "Stored video {video_id} in '{}' ({})",
            self.index,
            if created { "created" } else { "updated" }
        );

        let record = if created {
            new_record
        } else {
            self.get(video_id)
                .await?
                .ok_or_else(|| anyhow::anyhow!("Video {video_id} vanished after update"))?
        };
        Ok((record, created))
    }

    async fn get(&self, video_id: &str) -> Result<Option<VideoRecord>> {
        let response = self
            .es_client
            .get(GetParts::IndexId(self.index.as_str(), video_id))
            .send()
            .await?;

        if response.status_code().as_u16() == 404 {
            return Ok(None);
        }
        if !response.status_code().is_success() {
            return Err(anyhow::anyhow!(
                "Elasticsearch get failed with status: {}",
                response.status_code()
            ));
        }

        let json_response: Value = response.json().await?;
        match json_response.get("_source") {
            Some(source) => Ok(Some(serde_json::from_value(source.clone())?)),
            None => Ok(None),
        }
    }

    async fn recent(&self, limit: u64) -> Result<Vec<VideoRecord>> {
        let (videos, _) = self
            .search(json!({
                "size": limit,
                "query": { "match_all": {} },
                "sort": [{ "created_at": { "order": "desc" } }]
            }))
            .await?;
        Ok(videos)
    }

    async fn list(
        &self,
        query: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<VideoRecord>, u64)> {
        let from = page_offset(page, per_page);
        let query = match query {
            Some(q) => json!({
                "bool": {
                    "should": [
                        { "multi_match": {
                            "query": q,
                            "fields": ["title", "description", "channel_title"]
                        } },
                        { "term": { "video_id": q } }
                    ],
                    "minimum_should_match": 1
                }
            }),
            None => json!({ "match_all": {} }),
        };

        self.search(json!({
            "size": per_page,
            "from": from,
            "track_total_hits": true,
            "query": query,
            "sort": [{ "created_at": { "order": "desc" } }]
        }))
        .await
    }
}

/// Index of the first record on a 1-based page; saturates for absurd page numbers.
fn page_offset(page: u64, per_page: u64) -> u64 {
    page.saturating_sub(1).saturating_mul(per_page)
}

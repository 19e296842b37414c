use elasticsearch::{indices::IndicesCreateParts, Elasticsearch};
use log::{error, info};
use serde_json::{json, Value};

pub fn video_index_mapping() -> Value {
    json!({
        "mappings": {
            "properties": {
                "video_id": { "type": "keyword" },
                "url": { "type": "keyword" },
                "title": { "type": "text" },
                "description": { "type": "text" },
                "channel_title": {
                    "type": "text",
                    "fields": { "keyword": { "type": "keyword" } }
                },
                "published_at": { "type": "date" },
                "view_count": { "type": "long" },
                "like_count": { "type": "long" },
                "comment_count": { "type": "long" },
                "tags": { "type": "keyword" },
                "hashtags": { "type": "keyword" },
                "created_at": { "type": "date" }
            }
        }
    })
}

pub async fn create_es_index(es_client: &Elasticsearch, index: &str) {
    match es_client
        .indices()
        .create(IndicesCreateParts::Index(index))
        .body(video_index_mapping())
        .send()
        .await
    {
        Ok(response) => {
            if response.status_code().is_success() {
                info!("Elasticsearch index '{index}' created.");
            } else {
                let response_text = response.text().await.unwrap_or_default();
                if response_text.contains("resource_already_exists_exception") {
                    info!("Elasticsearch index '{index}' already exists.");
                } else {
                    error!("Failed to create Elasticsearch index '{index}': {response_text}");
                }
            }
        }
        Err(e) => {
            error!("Failed to connect to Elasticsearch to create index '{index}': {e:?}");
        }
    }
}

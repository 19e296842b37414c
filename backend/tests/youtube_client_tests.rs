//! Tests for `YouTubeClient` against a mock YouTube Data API.

use serde_json::json;
use shorts_backend::error::AnalyzerError;
use shorts_backend::services::youtube_service::{VideoFetcher, YouTubeClient, DEFAULT_TIMEOUT};
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const VIDEO_ID: &str = "ABC123DEF45";

fn client_for(server: &MockServer, timeout: Duration) -> YouTubeClient {
    YouTubeClient::new(Some("test-key"), &server.uri(), timeout).expect("valid client")
}

async fn mount_response(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("id", VIDEO_ID))
        .and(query_param("key", "test-key"))
        .and(query_param("part", "snippet,statistics,contentDetails"))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn fetches_and_normalizes_a_video() {
    let server = MockServer::start().await;
    let payload = json!({
        "items": [{
            "id": VIDEO_ID,
            "snippet": {
                "publishedAt": "2024-03-10T15:30:00Z",
                "channelId": "UCabc",
                "channelTitle": "Some Channel",
                "title": "Morning run #fitness",
                "description": "Day 12 #run #біг",
                "thumbnails": { "high": { "url": "https://i.ytimg.com/vi/ABC123DEF45/hqdefault.jpg" } },
                "tags": ["running"]
            },
            "statistics": { "viewCount": "1500", "likeCount": "80", "commentCount": "4" },
            "contentDetails": { "duration": "PT1M2S" }
        }]
    });
    mount_response(&server, ResponseTemplate::new(200).set_body_json(&payload)).await;

    let details = client_for(&server, DEFAULT_TIMEOUT)
        .fetch_video(VIDEO_ID)
        .await
        .expect("video is fetched");

    assert_eq!(details.video_id, VIDEO_ID);
    assert_eq!(details.title, "Morning run #fitness");
    assert_eq!(details.channel_id, "UCabc");
    assert_eq!(details.view_count, 1500);
    assert_eq!(details.like_count, 80);
    assert_eq!(details.comment_count, 4);
    assert_eq!(details.tags, vec!["running"]);
    assert_eq!(details.hashtags, vec!["run", "біг", "fitness"]);
    assert_eq!(details.duration_seconds, 62);
}

#[tokio::test]
async fn empty_item_list_is_not_found() {
    let server = MockServer::start().await;
    mount_response(&server, ResponseTemplate::new(200).set_body_json(json!({ "items": [] }))).await;

    let err = client_for(&server, DEFAULT_TIMEOUT)
        .fetch_video(VIDEO_ID)
        .await
        .unwrap_err();

    assert_eq!(err, AnalyzerError::NotFound(VIDEO_ID.to_string()));
}

#[tokio::test]
async fn forbidden_is_an_auth_or_quota_error() {
    let server = MockServer::start().await;
    let body = json!({ "error": { "code": 403, "message": "The request cannot be completed because you have exceeded your quota." } });
    mount_response(&server, ResponseTemplate::new(403).set_body_json(&body)).await;

    let err = client_for(&server, DEFAULT_TIMEOUT)
        .fetch_video(VIDEO_ID)
        .await
        .unwrap_err();

    assert!(matches!(&err, AnalyzerError::AuthOrQuota(m) if m.contains("exceeded your quota")));
}

#[tokio::test]
async fn provider_not_found_is_not_found() {
    let server = MockServer::start().await;
    mount_response(&server, ResponseTemplate::new(404)).await;

    let err = client_for(&server, DEFAULT_TIMEOUT)
        .fetch_video(VIDEO_ID)
        .await
        .unwrap_err();

    assert_eq!(err, AnalyzerError::NotFound(VIDEO_ID.to_string()));
}

#[tokio::test]
async fn server_errors_are_upstream_errors() {
    let server = MockServer::start().await;
    mount_response(&server, ResponseTemplate::new(500).set_body_string("backend error")).await;

    let err = client_for(&server, DEFAULT_TIMEOUT)
        .fetch_video(VIDEO_ID)
        .await
        .unwrap_err();

    assert!(matches!(&err, AnalyzerError::Upstream(m) if m.starts_with("HTTP 500")));
}

#[tokio::test]
async fn non_json_success_body_is_an_upstream_error() {
    let server = MockServer::start().await;
    mount_response(&server, ResponseTemplate::new(200).set_body_string("<html>maintenance</html>")).await;

    let err = client_for(&server, DEFAULT_TIMEOUT)
        .fetch_video(VIDEO_ID)
        .await
        .unwrap_err();

    assert!(matches!(err, AnalyzerError::Upstream(_)));
}

#[tokio::test]
async fn slow_provider_times_out_as_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "items": [] }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let err = client_for(&server, Duration::from_secs(1))
        .fetch_video(VIDEO_ID)
        .await
        .unwrap_err();

    assert!(matches!(&err, AnalyzerError::Upstream(m) if m.contains("timed out")));
}

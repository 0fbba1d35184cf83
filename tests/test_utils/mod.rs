use crate::linkedin_api::ApiSettings;
use chrono::{Duration, Utc};
use serde_json::{Value, json};

// Settings pointed at a mockito server instead of the real upstream host.
#[allow(dead_code)]
pub fn mock_settings(base_url: &str) -> ApiSettings {
    ApiSettings {
        api_key: "test-key".to_string(),
        api_host: "upstream.test".to_string(),
        base_url: base_url.to_string(),
    }
}

// Upstream-format timestamp the given number of days in the past.
#[allow(dead_code)]
pub fn days_ago(days: i64) -> String {
    (Utc::now().naive_utc() - Duration::days(days))
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

#[allow(dead_code)]
pub fn post_item(posted_date: &str, urn: &str, text: &str) -> Value {
    json!({
        "postedDate": posted_date,
        "totalReactionCount": 5,
        "commentsCount": 2,
        "urn": urn,
        "text": text
    })
}

#[allow(dead_code)]
pub fn repost_item(posted_date: &str, text: Option<&str>, reshared_text: Option<&str>) -> Value {
    let mut item = json!({
        "postedDate": posted_date,
        "reposted": true,
        "urn": "urn:li:activity:repost",
        "text": text
    });
    if let Some(reshared) = reshared_text {
        item["resharedPost"] = json!({ "text": reshared });
    }
    item
}

#[allow(dead_code)]
pub fn comment_item(highlighted: Value, text: &str) -> Value {
    json!({
        "highlightedComments": highlighted,
        "text": text,
        "postedDate": "2025-06-01 10:00:00.000 +0000",
        "commentedDate": "2025-06-02 11:00:00.000 +0000",
        "postUrl": "https://www.linkedin.com/feed/update/urn:li:activity:1"
    })
}

#[allow(dead_code)]
pub fn like_item(index: usize) -> Value {
    json!({
        "text": format!("liked post {}", index),
        "action": "Liked by",
        "postedDate": "2025-06-01 10:00:00.000 +0000",
        "totalReactionCount": index,
        "commentsCount": 1
    })
}

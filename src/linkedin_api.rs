use crate::models::{CommentData, LikeData, PostData, PostOutput, ProfileOutput};
use crate::utils::{get_rapidapi_host, get_rapidapi_key, parse_posted_date};
use chrono::{Duration, Utc};
use reqwest::Client;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

const PAGE_STEP: usize = 50;
const LIKES_LIMIT: usize = 50;
const RECENT_WINDOW_DAYS: i64 = 365;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API request failed: HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("API request failed: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("unexpected API payload: {0}")]
    Payload(String),
}

/// Per-operation failure policy. Most fetchers fail fast; the post-comments
/// pager is best-effort and keeps whatever it collected before an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    FailFast,
    BestEffort,
}

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub api_key: String,
    pub api_host: String,
    pub base_url: String,
}

impl ApiSettings {
    pub fn from_env() -> Result<Self, String> {
        let api_key = get_rapidapi_key()?;
        let api_host = get_rapidapi_host();
        let base_url = format!("https://{}", api_host);
        Ok(ApiSettings {
            api_key,
            api_host,
            base_url,
        })
    }
}

/// Upstream client for one top-level request. The call counter lives here, so
/// building a fresh instance per request keeps concurrent requests isolated.
pub struct LinkedInApi {
    client: Client,
    settings: ApiSettings,
    api_calls: AtomicU64,
}

impl LinkedInApi {
    pub fn new(client: Client, settings: ApiSettings) -> Self {
        LinkedInApi {
            client,
            settings,
            api_calls: AtomicU64::new(0),
        }
    }

    pub fn credit_usage(&self) -> u64 {
        self.api_calls.load(Ordering::SeqCst)
    }

    /// GET the given path (query string included) against the upstream host.
    /// The call counter increments before the attempt, so failed calls are
    /// still billed.
    async fn request(&self, path: &str) -> Result<Value, ApiError> {
        self.api_calls.fetch_add(1, Ordering::SeqCst);

        let url = format!("{}{}", self.settings.base_url, path);
        let response = self
            .client
            .get(&url)
            .header("x-rapidapi-key", self.settings.api_key.as_str())
            .header("x-rapidapi-host", self.settings.api_host.as_str())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        let data = response.text().await?;
        let json_data: Value = serde_json::from_str(&data)?;
        Ok(json_data)
    }

    pub async fn fetch_profile(&self, username: &str) -> Result<ProfileOutput, ApiError> {
        let path = format!("/?username={}", username);
        let decoded = self.request(&path).await?;

        // Job fields come from the first entry of the position history;
        // a profile without one leaves them null.
        let first_position = decoded["position"].get(0).cloned().unwrap_or(Value::Null);

        Ok(ProfileOutput {
            headline: decoded["headline"].as_str().map(String::from),
            location: decoded["geo"]["full"].as_str().map(String::from),
            job_title: first_position["title"].as_str().map(String::from),
            company_name: first_position["companyName"].as_str().map(String::from),
        })
    }

    /// Walks the paged posts feed until entries fall outside the trailing
    /// 12-month window. Pages are reverse-chronological, so the first item
    /// older than the cutoff ends the whole walk, not just the current page.
    pub async fn fetch_recent_posts(&self, username: &str) -> Result<PostOutput, ApiError> {
        let mut posts = Vec::new();
        let mut reposts = Vec::new();
        let mut start = 0usize;
        let mut pagination_token: Option<String> = None;
        let cutoff = Utc::now().naive_utc() - Duration::days(RECENT_WINDOW_DAYS);

        loop {
            let mut query = format!(
                "/get-profile-posts?username={}&start={}",
                username, start
            );
            if let Some(token) = &pagination_token {
                query.push_str(&format!("&paginationToken={}", token));
            }

            let decoded = self.request(&query).await?;
            let raw_posts = decoded["data"].as_array().cloned().unwrap_or_default();
            pagination_token = decoded["nextToken"].as_str().map(String::from);

            if raw_posts.is_empty() {
                break;
            }

            let mut stop_fetching = false;
            for post in &raw_posts {
                // Entries without a usable date are dropped, not terminal.
                let Some(posted_date) = post["postedDate"].as_str() else {
                    continue;
                };
                let Some(posted_at) = parse_posted_date(posted_date) else {
                    continue;
                };

                if posted_at < cutoff {
                    stop_fetching = true;
                    break;
                }

                let is_repost = post
                    .as_object()
                    .map(|obj| obj.contains_key("reposted"))
                    .unwrap_or(false);

                let original_text = if is_repost {
                    post["resharedPost"]["text"]
                        .as_str()
                        .or_else(|| post["text"].as_str())
                        .map(String::from)
                } else {
                    None
                };

                let data = PostData {
                    posted_date: posted_date.to_string(),
                    total_reaction_count: post["totalReactionCount"].as_u64(),
                    comments_count: post["commentsCount"].as_u64(),
                    urn: post["urn"].as_str().map(String::from),
                    text: post["text"].as_str().map(String::from),
                    original_text,
                    comments: None,
                };

                if is_repost {
                    reposts.push(data);
                } else {
                    posts.push(data);
                }
            }

            if stop_fetching || pagination_token.is_none() {
                break;
            }

            start += PAGE_STEP;
        }

        Ok(PostOutput { posts, reposts })
    }

    pub async fn fetch_profile_comments(
        &self,
        username: &str,
    ) -> Result<Vec<CommentData>, ApiError> {
        let path = format!("/get-profile-comments?username={}", username);
        let decoded = self.request(&path).await?;
        let raw_comments = decoded["data"].as_array().cloned().unwrap_or_default();

        let mut comments = Vec::with_capacity(raw_comments.len());
        for item in &raw_comments {
            // A missing or empty highlightedComments list is a hard failure,
            // same as the upstream contract promises at least one entry.
            let highlighted = item["highlightedComments"].get(0).ok_or_else(|| {
                ApiError::Payload("highlightedComments is missing or empty".to_string())
            })?;

            comments.push(CommentData {
                highlighted_comments: highlighted.as_str().map(String::from),
                text: item["text"].as_str().map(String::from),
                posted_date: item["postedDate"].as_str().map(String::from),
                commented_date: item["commentedDate"].as_str().map(String::from),
                post_url: item["postUrl"].as_str().map(String::from),
            });
        }

        Ok(comments)
    }

    pub async fn fetch_profile_likes(&self, username: &str) -> Result<Vec<LikeData>, ApiError> {
        let path = format!("/get-profile-likes?username={}", username);
        let decoded = self.request(&path).await?;
        let items = decoded["data"]["items"].as_array().cloned().unwrap_or_default();

        let likes = items
            .iter()
            .take(LIKES_LIMIT)
            .map(|item| LikeData {
                text: item["text"].as_str().map(String::from),
                action: item["action"].as_str().map(String::from),
                posted_date: item["postedDate"].as_str().map(String::from),
                total_reaction_count: item["totalReactionCount"].as_u64(),
                comments_count: item["commentsCount"].as_u64(),
            })
            .collect();

        Ok(likes)
    }

    /// Collects up to `count` comment texts for a post. Under `BestEffort`
    /// an upstream error mid-walk ends the loop and returns what was
    /// collected so far instead of propagating.
    pub async fn fetch_post_comments(
        &self,
        urn: &str,
        count: usize,
        policy: FailurePolicy,
    ) -> Result<Vec<String>, ApiError> {
        let mut comments = Vec::new();
        let mut page = 1usize;
        let mut pagination_token: Option<String> = None;

        while comments.len() < count {
            let mut path = format!(
                "/get-profile-posts-comments?urn={}&sort=mostRelevant&page={}",
                urn, page
            );
            if let Some(token) = &pagination_token {
                path.push_str(&format!("&paginationToken={}", token));
            }

            let decoded = match self.request(&path).await {
                Ok(decoded) => decoded,
                Err(e) => match policy {
                    FailurePolicy::BestEffort => break,
                    FailurePolicy::FailFast => return Err(e),
                },
            };

            let data = decoded["data"].as_array().cloned().unwrap_or_default();
            if data.is_empty() {
                break;
            }

            for item in &data {
                if let Some(text) = item["text"].as_str() {
                    if !text.is_empty() {
                        comments.push(text.to_string());
                        if comments.len() >= count {
                            break;
                        }
                    }
                }
            }

            pagination_token = decoded["paginationToken"].as_str().map(String::from);
            if pagination_token.is_none() {
                break;
            }

            page += 1;
        }

        Ok(comments)
    }
}

use reqwest::Client;
use rocket::State;
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::tokio::task::{JoinError, spawn};
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::linkedin_api::{ApiError, ApiSettings, FailurePolicy, LinkedInApi};
use crate::models::{
    CommentData, ExtractAllResponse, HomeResponse, LikeData, PostOutput, ProfileOutput,
    ThreadedExtractResponse,
};

// Each top-level request gets its own client so the credit counter starts
// at zero; the reqwest handle underneath is a shared connection pool.
fn build_api(settings: &State<ApiSettings>, client: &State<Client>) -> LinkedInApi {
    LinkedInApi::new(client.inner().clone(), settings.inner().clone())
}

fn api_error(e: ApiError) -> status::Custom<String> {
    status::Custom(
        Status::InternalServerError,
        format!("LinkedIn API error: {}", e),
    )
}

#[get("/")]
pub fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "LinkedIn Extractor API is live!".to_string(),
    })
}

#[get("/extract-profile?<username>")]
pub async fn extract_profile(
    username: &str,
    settings: &State<ApiSettings>,
    client: &State<Client>,
) -> Result<Json<ProfileOutput>, status::Custom<String>> {
    let api = build_api(settings, client);
    let profile = api.fetch_profile(username).await.map_err(api_error)?;
    Ok(Json(profile))
}

#[get("/extract-posts?<username>")]
pub async fn extract_posts(
    username: &str,
    settings: &State<ApiSettings>,
    client: &State<Client>,
) -> Result<Json<PostOutput>, status::Custom<String>> {
    let api = build_api(settings, client);
    let posts = api.fetch_recent_posts(username).await.map_err(api_error)?;
    Ok(Json(posts))
}

#[get("/extract-comments?<username>")]
pub async fn extract_comments(
    username: &str,
    settings: &State<ApiSettings>,
    client: &State<Client>,
) -> Result<Json<Vec<CommentData>>, status::Custom<String>> {
    let api = build_api(settings, client);
    let comments = api
        .fetch_profile_comments(username)
        .await
        .map_err(api_error)?;
    Ok(Json(comments))
}

#[get("/extract-likes?<username>")]
pub async fn extract_likes(
    username: &str,
    settings: &State<ApiSettings>,
    client: &State<Client>,
) -> Result<Json<Vec<LikeData>>, status::Custom<String>> {
    let api = build_api(settings, client);
    let likes = api.fetch_profile_likes(username).await.map_err(api_error)?;
    Ok(Json(likes))
}

#[get("/extract-post-comments?<urn>&<count>")]
pub async fn extract_post_comments(
    urn: &str,
    count: Option<usize>,
    settings: &State<ApiSettings>,
    client: &State<Client>,
) -> Result<Json<Vec<String>>, status::Custom<String>> {
    let api = build_api(settings, client);
    let comments = api
        .fetch_post_comments(urn, count.unwrap_or(10), FailurePolicy::BestEffort)
        .await
        .map_err(api_error)?;
    Ok(Json(comments))
}

#[get("/extract-all?<username>&<extract_comments>&<count>")]
pub async fn extract_all(
    username: &str,
    extract_comments: Option<&str>,
    count: Option<usize>,
    settings: &State<ApiSettings>,
    client: &State<Client>,
) -> Result<Json<ExtractAllResponse>, status::Custom<String>> {
    let api = build_api(settings, client);
    let count = count.unwrap_or(10);

    let profile = api.fetch_profile(username).await.map_err(api_error)?;
    let post_output = api.fetch_recent_posts(username).await.map_err(api_error)?;
    let commented_posts = api
        .fetch_profile_comments(username)
        .await
        .map_err(api_error)?;
    let reacted_posts = api.fetch_profile_likes(username).await.map_err(api_error)?;

    let PostOutput { mut posts, reposts } = post_output;

    let with_comments = extract_comments
        .map(|v| v.eq_ignore_ascii_case("yes"))
        .unwrap_or(false);

    if with_comments {
        for post in &mut posts {
            let urn = post.urn.clone().unwrap_or_default();
            let comments = api
                .fetch_post_comments(&urn, count, FailurePolicy::BestEffort)
                .await
                .map_err(api_error)?;
            post.comments = Some(comments);
        }
    }

    Ok(Json(ExtractAllResponse {
        profile,
        posts,
        reposts,
        commented_posts,
        reacted_posts,
        credits_used: api.credit_usage(),
    }))
}

fn branch_result<T: Serialize>(result: Result<T, ApiError>) -> Value {
    match result {
        Ok(value) => serde_json::to_value(value).unwrap_or(Value::Null),
        Err(e) => {
            eprintln!("extract-all-threading branch failed: {}", e);
            json!({ "error": e.to_string() })
        }
    }
}

fn joined_branch(result: Result<Value, JoinError>) -> Value {
    match result {
        Ok(value) => value,
        Err(e) => json!({ "error": e.to_string() }),
    }
}

#[get("/extract-all-threading?<username>")]
pub async fn extract_all_threading(
    username: &str,
    settings: &State<ApiSettings>,
    client: &State<Client>,
) -> Json<ThreadedExtractResponse> {
    let api = Arc::new(build_api(settings, client));
    let username = username.to_string();

    // Four independent fetches fan out onto the runtime; a failing branch is
    // reported inline without cancelling the others.
    let profile_task = {
        let api = api.clone();
        let username = username.clone();
        spawn(async move { branch_result(api.fetch_profile(&username).await) })
    };
    let posts_task = {
        let api = api.clone();
        let username = username.clone();
        spawn(async move { branch_result(api.fetch_recent_posts(&username).await) })
    };
    let comments_task = {
        let api = api.clone();
        let username = username.clone();
        spawn(async move { branch_result(api.fetch_profile_comments(&username).await) })
    };
    let likes_task = {
        let api = api.clone();
        let username = username.clone();
        spawn(async move { branch_result(api.fetch_profile_likes(&username).await) })
    };

    Json(ThreadedExtractResponse {
        profile: joined_branch(profile_task.await),
        posts: joined_branch(posts_task.await),
        comments: joined_branch(comments_task.await),
        likes: joined_branch(likes_task.await),
    })
}

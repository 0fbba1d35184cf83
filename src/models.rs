use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct HomeResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ProfileOutput {
    pub headline: Option<String>,
    pub location: Option<String>,
    pub job_title: Option<String>,
    pub company_name: Option<String>,
}

// Field names on the wire follow the upstream casing, except original_text
// and comments which the aggregate endpoint adds itself.
#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct PostData {
    pub posted_date: String,
    pub total_reaction_count: Option<u64>,
    pub comments_count: Option<u64>,
    pub urn: Option<String>,
    pub text: Option<String>,
    #[serde(rename = "original_text")]
    pub original_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct PostOutput {
    pub posts: Vec<PostData>,
    pub reposts: Vec<PostData>,
}

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct CommentData {
    pub highlighted_comments: Option<String>,
    pub text: Option<String>,
    pub posted_date: Option<String>,
    pub commented_date: Option<String>,
    pub post_url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct LikeData {
    pub text: Option<String>,
    pub action: Option<String>,
    pub posted_date: Option<String>,
    pub total_reaction_count: Option<u64>,
    pub comments_count: Option<u64>,
}

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ExtractAllResponse {
    pub profile: ProfileOutput,
    pub posts: Vec<PostData>,
    pub reposts: Vec<PostData>,
    pub commented_posts: Vec<CommentData>,
    pub reacted_posts: Vec<LikeData>,
    pub credits_used: u64,
}

// Each branch holds either the fetched payload or {"error": "..."} when that
// branch failed; the endpoint itself always answers 200.
#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ThreadedExtractResponse {
    pub profile: Value,
    pub posts: Value,
    pub comments: Value,
    pub likes: Value,
}

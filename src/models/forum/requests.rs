use serde::Deserialize;

use crate::models::forum::entities::{ContributionKind, ReactionKind};

#[derive(Debug, Deserialize)]
pub struct CreateContributionRequest {
    pub kind: ContributionKind,
    pub content: Option<String>,
    // Download token of a previously uploaded file
    pub file_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ReactRequest {
    pub kind: ReactionKind,
}

#[derive(Debug, Deserialize)]
pub struct CreateTopicRequest {
    pub title: String,
    pub description: String,
}

// Update feed query: ISO-8601 timestamp, optional
#[derive(Debug, Deserialize)]
pub struct UpdatesQueryParams {
    pub since: Option<String>,
}

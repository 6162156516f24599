use serde::Serialize;

use crate::models::forum::entities::{Comment, Contribution, DiscussionTopic, Reaction};

#[derive(Debug, Serialize)]
pub struct ContributionListResponse {
    pub items: Vec<ContributionWithAuthor>,
}

#[derive(Debug, Serialize)]
pub struct ContributionWithAuthor {
    #[serde(flatten)]
    pub contribution: Contribution,
    pub author: String,
    pub like_count: i64,
    pub dislike_count: i64,
}

// Full thread for one contribution
#[derive(Debug, Serialize)]
pub struct ContributionThreadResponse {
    pub contribution: ContributionWithAuthor,
    pub comments: Vec<CommentWithAuthor>,
    pub reactions: Vec<Reaction>,
}

#[derive(Debug, Serialize)]
pub struct CommentWithAuthor {
    #[serde(flatten)]
    pub comment: Comment,
    pub author: String,
}

#[derive(Debug, Serialize)]
pub struct TopicWithAuthor {
    #[serde(flatten)]
    pub topic: DiscussionTopic,
    pub author: String,
}

#[derive(Debug, Serialize)]
pub struct TopicListResponse {
    pub items: Vec<TopicWithAuthor>,
}

// Topic page: the topic plus its contribution thread
#[derive(Debug, Serialize)]
pub struct TopicDetailResponse {
    pub topic: TopicWithAuthor,
    pub contributions: Vec<ContributionWithAuthor>,
}

// Result of a reaction toggle: the surviving reaction, or None when
// the toggle removed it
#[derive(Debug, Serialize)]
pub struct ReactionToggleResponse {
    pub reaction: Option<Reaction>,
}

// Incremental update feed for a live assignment page. Field names are
// part of the public wire format consumed by the existing frontend,
// including the French `commentaires` key.
#[derive(Debug, Serialize)]
pub struct UpdatesResponse {
    // Server clock at query time; clients pass it back as `since`
    pub now: chrono::DateTime<chrono::Utc>,
    pub contributions: Vec<FeedContribution>,
    pub commentaires: Vec<FeedComment>,
    pub reactions: Vec<FeedReaction>,
}

#[derive(Debug, Serialize)]
pub struct FeedContribution {
    pub id: i64,
    // Author first name, as displayed in the feed
    pub author: String,
    pub text: Option<String>,
    pub file_url: Option<String>,
    pub posted_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize)]
pub struct FeedComment {
    pub id: i64,
    pub author: String,
    pub text: String,
    pub posted_at: chrono::DateTime<chrono::Utc>,
    pub contribution_id: i64,
}

#[derive(Debug, Serialize)]
pub struct FeedReaction {
    pub id: i64,
    pub author: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub contribution_id: i64,
}

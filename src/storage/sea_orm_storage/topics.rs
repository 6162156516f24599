//! Discussion topic storage operations.

use super::SeaOrmStorage;
use crate::entity::discussion_topics::Column as TopicColumn;
use crate::entity::prelude::*;
use crate::errors::{ForumError, Result};
use crate::models::forum::{
    entities::{ContributionScope, DiscussionTopic},
    requests::CreateTopicRequest,
    responses::{TopicDetailResponse, TopicListResponse, TopicWithAuthor},
};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_topic_impl(
        &self,
        author_id: i64,
        req: CreateTopicRequest,
    ) -> Result<DiscussionTopic> {
        let now = chrono::Utc::now().timestamp();

        let model = DiscussionTopicActiveModel {
            title: Set(req.title),
            description: Set(req.description),
            author_id: Set(author_id),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ForumError::database_operation(format!("Failed to create topic: {e}")))?;

        Ok(result.into_topic())
    }

    pub async fn get_topic_by_id_impl(&self, id: i64) -> Result<Option<DiscussionTopic>> {
        let result = DiscussionTopics::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ForumError::database_operation(format!("Failed to query topic: {e}")))?;

        Ok(result.map(|m| m.into_topic()))
    }

    pub async fn list_topics_impl(&self) -> Result<TopicListResponse> {
        let topics = DiscussionTopics::find()
            .order_by_desc(TopicColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ForumError::database_operation(format!("Failed to list topics: {e}")))?;

        let authors = self
            .load_author_names(topics.iter().map(|t| t.author_id).collect())
            .await?;

        let items = topics
            .into_iter()
            .map(|m| {
                let author = authors.get(&m.author_id).cloned().unwrap_or_default();
                TopicWithAuthor {
                    topic: m.into_topic(),
                    author,
                }
            })
            .collect();

        Ok(TopicListResponse { items })
    }

    pub async fn get_topic_detail_impl(&self, id: i64) -> Result<Option<TopicDetailResponse>> {
        let Some(model) = DiscussionTopics::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ForumError::database_operation(format!("Failed to query topic: {e}")))?
        else {
            return Ok(None);
        };

        let authors = self.load_author_names(vec![model.author_id]).await?;
        let author = authors.get(&model.author_id).cloned().unwrap_or_default();

        let contributions = self
            .list_contributions_impl(ContributionScope::Topic(id))
            .await?;

        Ok(Some(TopicDetailResponse {
            topic: TopicWithAuthor {
                topic: model.into_topic(),
                author,
            },
            contributions: contributions.items,
        }))
    }
}

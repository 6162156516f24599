//! Contribution, comment and reaction storage operations.

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::comments::Column as CommentColumn;
use crate::entity::contributions::Column as ContributionColumn;
use crate::entity::prelude::*;
use crate::entity::reactions::Column as ReactionColumn;
use crate::errors::{ForumError, Result};
use crate::models::forum::{
    entities::{
        Comment, Contribution, ContributionScope, Reaction, ReactionKind, ReactionTransition,
        reaction_transition,
    },
    requests::CreateContributionRequest,
    responses::{
        CommentWithAuthor, ContributionListResponse, ContributionThreadResponse,
        ContributionWithAuthor, FeedComment, FeedContribution, FeedReaction, UpdatesResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

// Column filter for one contribution scope
fn scope_filter(scope: ContributionScope) -> sea_orm::sea_query::SimpleExpr {
    match scope {
        ContributionScope::Assignment(id) => ContributionColumn::AssignmentId.eq(id),
        ContributionScope::Topic(id) => ContributionColumn::TopicId.eq(id),
    }
}

impl SeaOrmStorage {
    pub async fn create_contribution_impl(
        &self,
        author_id: i64,
        scope: ContributionScope,
        req: CreateContributionRequest,
    ) -> Result<Contribution> {
        let now = chrono::Utc::now().timestamp();

        let (assignment_id, topic_id) = scope.parent_ids();

        let model = ContributionActiveModel {
            author_id: Set(author_id),
            kind: Set(req.kind.to_string()),
            content: Set(req.content),
            file_token: Set(req.file_token),
            assignment_id: Set(assignment_id),
            topic_id: Set(topic_id),
            posted_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            ForumError::database_operation(format!("Failed to create contribution: {e}"))
        })?;

        Ok(result.into_contribution())
    }

    pub async fn get_contribution_by_id_impl(&self, id: i64) -> Result<Option<Contribution>> {
        let result = Contributions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                ForumError::database_operation(format!("Failed to query contribution: {e}"))
            })?;

        Ok(result.map(|m| m.into_contribution()))
    }

    /// First names of the given student profiles, keyed by profile id.
    pub(crate) async fn load_author_names(&self, author_ids: Vec<i64>) -> Result<HashMap<i64, String>> {
        if author_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let profiles = StudentProfiles::find()
            .filter(crate::entity::student_profiles::Column::Id.is_in(author_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                ForumError::database_operation(format!("Failed to query author profiles: {e}"))
            })?;

        let user_ids: Vec<i64> = profiles.iter().map(|p| p.user_id).collect();
        let users = Users::find()
            .filter(crate::entity::users::Column::Id.is_in(user_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                ForumError::database_operation(format!("Failed to query author accounts: {e}"))
            })?;

        let names_by_user: HashMap<i64, String> =
            users.into_iter().map(|u| (u.id, u.first_name)).collect();

        Ok(profiles
            .into_iter()
            .filter_map(|p| {
                names_by_user
                    .get(&p.user_id)
                    .map(|name| (p.id, name.clone()))
            })
            .collect())
    }

    pub async fn list_contributions_impl(
        &self,
        scope: ContributionScope,
    ) -> Result<ContributionListResponse> {
        let contributions = Contributions::find()
            .filter(scope_filter(scope))
            .order_by_desc(ContributionColumn::PostedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                ForumError::database_operation(format!("Failed to list contributions: {e}"))
            })?;

        let authors = self
            .load_author_names(contributions.iter().map(|c| c.author_id).collect())
            .await?;

        let mut items = Vec::with_capacity(contributions.len());
        for model in contributions {
            let like_count = Reactions::find()
                .filter(ReactionColumn::ContributionId.eq(model.id))
                .filter(ReactionColumn::Kind.eq(ReactionKind::Like.to_string()))
                .count(&self.db)
                .await
                .map_err(|e| {
                    ForumError::database_operation(format!("Failed to count likes: {e}"))
                })? as i64;

            let dislike_count = Reactions::find()
                .filter(ReactionColumn::ContributionId.eq(model.id))
                .filter(ReactionColumn::Kind.eq(ReactionKind::Dislike.to_string()))
                .count(&self.db)
                .await
                .map_err(|e| {
                    ForumError::database_operation(format!("Failed to count dislikes: {e}"))
                })? as i64;

            let author = authors.get(&model.author_id).cloned().unwrap_or_default();
            items.push(ContributionWithAuthor {
                contribution: model.into_contribution(),
                author,
                like_count,
                dislike_count,
            });
        }

        Ok(ContributionListResponse { items })
    }

    pub async fn get_contribution_thread_impl(
        &self,
        id: i64,
    ) -> Result<Option<ContributionThreadResponse>> {
        let Some(model) = Contributions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                ForumError::database_operation(format!("Failed to query contribution: {e}"))
            })?
        else {
            return Ok(None);
        };

        let comments = model
            .find_related(Comments)
            .order_by_asc(CommentColumn::PostedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                ForumError::database_operation(format!("Failed to list comments: {e}"))
            })?;

        let reactions = model
            .find_related(Reactions)
            .all(&self.db)
            .await
            .map_err(|e| {
                ForumError::database_operation(format!("Failed to list reactions: {e}"))
            })?;

        let mut author_ids: Vec<i64> = comments.iter().map(|c| c.author_id).collect();
        author_ids.push(model.author_id);
        let authors = self.load_author_names(author_ids).await?;

        let like_count = reactions
            .iter()
            .filter(|r| r.kind == ReactionKind::Like.to_string())
            .count() as i64;
        let dislike_count = reactions.len() as i64 - like_count;

        let author = authors.get(&model.author_id).cloned().unwrap_or_default();
        let contribution = ContributionWithAuthor {
            contribution: model.into_contribution(),
            author,
            like_count,
            dislike_count,
        };

        let comments = comments
            .into_iter()
            .map(|c| {
                let author = authors.get(&c.author_id).cloned().unwrap_or_default();
                CommentWithAuthor {
                    comment: c.into_comment(),
                    author,
                }
            })
            .collect();

        Ok(Some(ContributionThreadResponse {
            contribution,
            comments,
            reactions: reactions.into_iter().map(|r| r.into_reaction()).collect(),
        }))
    }

    pub async fn create_comment_impl(
        &self,
        author_id: i64,
        contribution_id: i64,
        content: &str,
    ) -> Result<Comment> {
        let now = chrono::Utc::now().timestamp();

        let model = CommentActiveModel {
            author_id: Set(author_id),
            contribution_id: Set(contribution_id),
            content: Set(content.to_string()),
            posted_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            ForumError::database_operation(format!("Failed to create comment: {e}"))
        })?;

        Ok(result.into_comment())
    }

    /// Applies the toggle state machine atomically on the unique
    /// (student, contribution) key. Returns the surviving reaction.
    pub async fn toggle_reaction_impl(
        &self,
        student_id: i64,
        contribution_id: i64,
        kind: ReactionKind,
    ) -> Result<Option<Reaction>> {
        let txn = self.db.begin().await.map_err(|e| {
            ForumError::database_operation(format!("Failed to open transaction: {e}"))
        })?;

        let existing = Reactions::find()
            .filter(ReactionColumn::StudentId.eq(student_id))
            .filter(ReactionColumn::ContributionId.eq(contribution_id))
            .one(&txn)
            .await
            .map_err(|e| {
                ForumError::database_operation(format!("Failed to query reaction: {e}"))
            })?;

        let current = existing
            .as_ref()
            .and_then(|r| r.kind.parse::<ReactionKind>().ok());

        let outcome = match reaction_transition(current, kind) {
            ReactionTransition::Insert => {
                let model = ReactionActiveModel {
                    student_id: Set(student_id),
                    contribution_id: Set(contribution_id),
                    kind: Set(kind.to_string()),
                    ..Default::default()
                };
                let inserted = model.insert(&txn).await.map_err(|e| {
                    let text = e.to_string();
                    if text.to_lowercase().contains("unique") {
                        ForumError::duplicate("Reaction already recorded for this contribution")
                    } else {
                        ForumError::database_operation(format!("Failed to insert reaction: {e}"))
                    }
                })?;
                Some(inserted.into_reaction())
            }
            ReactionTransition::Remove => {
                // `existing` is guaranteed present for Remove/Switch
                if let Some(existing) = existing {
                    Reactions::delete_by_id(existing.id)
                        .exec(&txn)
                        .await
                        .map_err(|e| {
                            ForumError::database_operation(format!(
                                "Failed to delete reaction: {e}"
                            ))
                        })?;
                }
                None
            }
            ReactionTransition::Switch => {
                let existing = existing.ok_or_else(|| {
                    ForumError::database_operation("Reaction disappeared mid-toggle")
                })?;
                let model = ReactionActiveModel {
                    id: Set(existing.id),
                    kind: Set(kind.to_string()),
                    ..Default::default()
                };
                let updated = model.update(&txn).await.map_err(|e| {
                    ForumError::database_operation(format!("Failed to update reaction: {e}"))
                })?;
                Some(updated.into_reaction())
            }
        };

        txn.commit().await.map_err(|e| {
            ForumError::database_operation(format!("Failed to commit reaction toggle: {e}"))
        })?;

        Ok(outcome)
    }

    /// Update feed: contributions and comments posted after `since`,
    /// plus the full reaction set so clients can re-render counts after
    /// toggles, which have no timestamp to filter on.
    pub async fn get_updates_impl(
        &self,
        assignment_id: i64,
        since: chrono::DateTime<chrono::Utc>,
    ) -> Result<UpdatesResponse> {
        let now = chrono::Utc::now();
        let since_ts = since.timestamp();

        let contributions = Contributions::find()
            .filter(ContributionColumn::AssignmentId.eq(assignment_id))
            .filter(ContributionColumn::PostedAt.gt(since_ts))
            .order_by_asc(ContributionColumn::PostedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                ForumError::database_operation(format!("Failed to query new contributions: {e}"))
            })?;

        // All contributions of the assignment scope the comment and
        // reaction queries
        let scope_ids: Vec<i64> = Contributions::find()
            .filter(ContributionColumn::AssignmentId.eq(assignment_id))
            .all(&self.db)
            .await
            .map_err(|e| {
                ForumError::database_operation(format!("Failed to query contributions: {e}"))
            })?
            .into_iter()
            .map(|c| c.id)
            .collect();

        let comments = if scope_ids.is_empty() {
            vec![]
        } else {
            Comments::find()
                .filter(CommentColumn::ContributionId.is_in(scope_ids.clone()))
                .filter(CommentColumn::PostedAt.gt(since_ts))
                .order_by_asc(CommentColumn::PostedAt)
                .all(&self.db)
                .await
                .map_err(|e| {
                    ForumError::database_operation(format!("Failed to query new comments: {e}"))
                })?
        };

        let reactions = if scope_ids.is_empty() {
            vec![]
        } else {
            Reactions::find()
                .filter(ReactionColumn::ContributionId.is_in(scope_ids))
                .all(&self.db)
                .await
                .map_err(|e| {
                    ForumError::database_operation(format!("Failed to query reactions: {e}"))
                })?
        };

        let mut author_ids: Vec<i64> = contributions.iter().map(|c| c.author_id).collect();
        author_ids.extend(comments.iter().map(|c| c.author_id));
        author_ids.extend(reactions.iter().map(|r| r.student_id));
        let authors = self.load_author_names(author_ids).await?;

        let contributions = contributions
            .into_iter()
            .map(|m| {
                let author = authors.get(&m.author_id).cloned().unwrap_or_default();
                let c = m.into_contribution();
                FeedContribution {
                    id: c.id,
                    author,
                    file_url: c
                        .file_token
                        .as_ref()
                        .map(|token| format!("/api/files/{token}")),
                    text: c.content,
                    posted_at: c.posted_at,
                }
            })
            .collect();

        let commentaires = comments
            .into_iter()
            .map(|m| {
                let author = authors.get(&m.author_id).cloned().unwrap_or_default();
                let c = m.into_comment();
                FeedComment {
                    id: c.id,
                    author,
                    text: c.content,
                    posted_at: c.posted_at,
                    contribution_id: c.contribution_id,
                }
            })
            .collect();

        let reactions = reactions
            .into_iter()
            .map(|m| {
                let author = authors.get(&m.student_id).cloned().unwrap_or_default();
                let r = m.into_reaction();
                FeedReaction {
                    id: r.id,
                    author,
                    kind: r.kind.to_string(),
                    contribution_id: r.contribution_id,
                }
            })
            .collect();

        Ok(UpdatesResponse {
            now,
            contributions,
            commentaires,
            reactions,
        })
    }
}

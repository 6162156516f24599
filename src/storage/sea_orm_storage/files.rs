//! Uploaded file storage operations.

use super::SeaOrmStorage;
use crate::entity::files::{ActiveModel, Entity as Files};
use crate::errors::{ForumError, Result};
use crate::models::files::entities::File;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use uuid::Uuid;

impl SeaOrmStorage {
    pub async fn upload_file_impl(
        &self,
        original_name: &str,
        stored_name: &str,
        file_size: &i64,
        file_type: &str,
        user_id: i64,
    ) -> Result<File> {
        let now = chrono::Utc::now().timestamp();
        let download_token = Uuid::new_v4().to_string();

        let model = ActiveModel {
            download_token: Set(download_token),
            original_name: Set(original_name.to_string()),
            stored_name: Set(stored_name.to_string()),
            file_size: Set(*file_size),
            file_type: Set(file_type.to_string()),
            user_id: Set(user_id),
            created_at: Set(now),
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            ForumError::database_operation(format!("Failed to record uploaded file: {e}"))
        })?;

        Ok(result.into_file())
    }

    pub async fn get_file_by_token_impl(&self, file_token: &str) -> Result<Option<File>> {
        let result = Files::find_by_id(file_token.to_string())
            .one(&self.db)
            .await
            .map_err(|e| ForumError::database_operation(format!("Failed to query file: {e}")))?;

        Ok(result.map(|m| m.into_file()))
    }
}

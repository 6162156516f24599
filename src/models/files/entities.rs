use serde::{Deserialize, Serialize};

// Stored upload, addressed by its random download token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct File {
    pub download_token: String,
    pub original_name: String,
    // On-disk name under the upload directory
    #[serde(skip_serializing, default)]
    pub stored_name: String,
    pub file_size: i64,
    pub file_type: String,
    pub user_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl File {
    /// Public download path for this file.
    pub fn download_url(&self) -> String {
        format!("/api/files/{}", self.download_token)
    }
}

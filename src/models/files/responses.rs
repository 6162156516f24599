use serde::Serialize;

use crate::models::files::entities::File;

#[derive(Debug, Serialize)]
pub struct FileUploadResponse {
    pub download_token: String,
    pub file_name: String,
    pub size: i64,
    pub content_type: String,
    pub download_url: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<File> for FileUploadResponse {
    fn from(file: File) -> Self {
        let download_url = file.download_url();
        Self {
            download_token: file.download_token,
            file_name: file.original_name,
            size: file.file_size,
            content_type: file.file_type,
            download_url,
            created_at: file.created_at,
        }
    }
}

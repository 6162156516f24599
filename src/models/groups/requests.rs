use serde::Deserialize;

use crate::models::groups::entities::GroupStatus;

#[derive(Debug, Deserialize)]
pub struct CreateGroupRequest {
    pub name: String,
    pub assignment_id: i64,
    // Defaults to forum.default_group_capacity when omitted
    pub capacity: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateGroupRequest {
    pub name: Option<String>,
    pub status: Option<GroupStatus>,
    pub capacity: Option<i32>,
}

// Professor-driven member add: the student to insert and an optional
// leader flag
#[derive(Debug, Deserialize)]
pub struct AddMemberRequest {
    pub student_id: i64,
    #[serde(default)]
    pub is_leader: bool,
}

// Report hand-in: the download token of a previously uploaded file
#[derive(Debug, Deserialize)]
pub struct SubmitReportRequest {
    pub file_token: String,
}

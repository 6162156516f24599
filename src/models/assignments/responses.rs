use serde::Serialize;

use crate::models::PaginationInfo;
use crate::models::assignments::entities::Assignment;
use crate::models::groups::entities::WorkGroup;

#[derive(Debug, Serialize)]
pub struct AssignmentListResponse {
    pub items: Vec<Assignment>,
    pub pagination: PaginationInfo,
}

// Assignment with its groups, for the detail page
#[derive(Debug, Serialize)]
pub struct AssignmentDetailResponse {
    pub assignment: Assignment,
    pub groups: Vec<WorkGroup>,
}

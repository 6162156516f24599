use serde::Serialize;

use crate::models::groups::entities::{GroupReport, Membership, WorkGroup};
use crate::models::users::responses::RosterEntry;

#[derive(Debug, Serialize)]
pub struct GroupListResponse {
    pub items: Vec<WorkGroup>,
}

// Group with its live member count, for the join page
#[derive(Debug, Serialize)]
pub struct GroupWithCount {
    #[serde(flatten)]
    pub group: WorkGroup,
    pub member_count: i64,
}

#[derive(Debug, Serialize)]
pub struct AvailableGroupsResponse {
    pub items: Vec<GroupWithCount>,
}

// Roster for one group
#[derive(Debug, Serialize)]
pub struct GroupMembersResponse {
    pub group: WorkGroup,
    pub members: Vec<MemberWithStudent>,
}

#[derive(Debug, Serialize)]
pub struct MemberWithStudent {
    #[serde(flatten)]
    pub membership: Membership,
    pub student: RosterEntry,
}

// Students in the assignment's promotion who are not yet members,
// for the professor add flow
#[derive(Debug, Serialize)]
pub struct EligibleStudentsResponse {
    pub items: Vec<RosterEntry>,
}

// Report hand-ins for one group, newest first
#[derive(Debug, Serialize)]
pub struct GroupReportsResponse {
    pub group: WorkGroup,
    pub reports: Vec<GroupReport>,
}

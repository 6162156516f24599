use serde::{Deserialize, Serialize};

// Business error codes carried in the ApiResponse envelope.
// Grouped by area: 1xxx generic, 2xxx auth, 3xxx users, 4xxx catalog,
// 5xxx assignments/groups, 6xxx forum, 7xxx files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // Generic
    InternalServerError = 1000,
    BadRequest = 1001,
    InvalidParameter = 1002,
    NotFound = 1003,

    // Auth
    Unauthorized = 2000,
    AuthFailed = 2001,
    RegisterFailed = 2002,
    UserEmailAlreadyExists = 2003,
    UserEmailInvalid = 2004,
    PasswordTooWeak = 2005,
    TokenInvalid = 2006,
    AccountInactive = 2007,
    PermissionDenied = 2008,

    // Users & profiles
    UserNotFound = 3000,
    UserUpdateFailed = 3001,
    UserDeleteFailed = 3002,
    ProfileNotProvisioned = 3003,

    // Catalog
    FacultyNotFound = 4000,
    PromotionNotFound = 4001,
    CourseNotFound = 4002,
    CatalogCodeAlreadyExists = 4003,
    CatalogOperationFailed = 4004,

    // Assignments & groups
    AssignmentNotFound = 5000,
    AssignmentCreateFailed = 5001,
    GroupNotFound = 5002,
    GroupNameAlreadyExists = 5003,
    GroupFull = 5004,
    GroupAlreadyJoined = 5005,
    GroupJoinFailed = 5006,
    GroupScopeMismatch = 5007,

    // Forum
    NotGroupMember = 6000,
    ContributionInvalid = 6001,
    ContributionNotFound = 6002,
    CommentInvalid = 6003,
    ReactionInvalid = 6004,
    ReactionConflict = 6005,
    TopicNotFound = 6006,
    TopicInvalid = 6007,

    // Files
    FileUploadFailed = 7000,
    FileNotFound = 7001,
    FileSizeExceeded = 7002,
    MultifileUploadNotAllowed = 7003,
}

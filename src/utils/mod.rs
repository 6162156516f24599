pub mod extractor;
pub mod jwt;
pub mod matricule;
pub mod parameter_error_handler;
pub mod password;
pub mod sql;
pub mod validate;

pub use extractor::{
    SafeAssignmentIdI64, SafeContributionIdI64, SafeCourseIdI64, SafeFacultyIdI64, SafeFileToken,
    SafeGroupIdI64, SafePromotionIdI64, SafeTopicIdI64, SafeUserIdI64,
};
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use sql::escape_like_pattern;

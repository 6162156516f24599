pub mod assignments;
pub mod auth;
pub mod catalog;
pub mod common;
pub mod files;
pub mod forum;
pub mod groups;
pub mod users;

pub use common::error_code::ErrorCode;
pub use common::pagination::{PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

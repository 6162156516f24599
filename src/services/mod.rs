pub mod assignments;
pub mod auth;
pub mod catalog;
pub mod files;
pub mod forum;
pub mod groups;
pub mod topics;
pub mod users;

pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use catalog::CatalogService;
pub use files::FileService;
pub use forum::ForumService;
pub use groups::GroupService;
pub use topics::TopicService;
pub use users::UserService;

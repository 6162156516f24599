pub mod assignments;
pub mod auth;
pub mod catalog;
pub mod files;
pub mod forum;
pub mod groups;
pub mod topics;
pub mod updates;
pub mod users;

pub use assignments::configure_assignment_routes;
pub use auth::configure_auth_routes;
pub use catalog::configure_catalog_routes;
pub use files::configure_file_routes;
pub use forum::configure_forum_routes;
pub use groups::configure_group_routes;
pub use topics::configure_topic_routes;
pub use updates::configure_updates_routes;
pub use users::configure_user_routes;

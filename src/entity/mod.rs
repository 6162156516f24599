//! SeaORM entity definitions.
//!
//! These entities are used for database access only and are kept separate
//! from the business models in the `models` module. The storage layer runs
//! CRUD against these and converts to business entities.

pub mod prelude;

pub mod assignments;
pub mod comments;
pub mod contributions;
pub mod course_professors;
pub mod courses;
pub mod discussion_topics;
pub mod faculties;
pub mod files;
pub mod group_members;
pub mod group_reports;
pub mod professor_profiles;
pub mod promotions;
pub mod reactions;
pub mod student_profiles;
pub mod users;
pub mod work_groups;

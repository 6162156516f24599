//! Re-exports for convenient entity access.

pub use super::assignments::{
    ActiveModel as AssignmentActiveModel, Entity as Assignments, Model as AssignmentModel,
};
pub use super::comments::{
    ActiveModel as CommentActiveModel, Entity as Comments, Model as CommentModel,
};
pub use super::contributions::{
    ActiveModel as ContributionActiveModel, Entity as Contributions, Model as ContributionModel,
};
pub use super::course_professors::{
    ActiveModel as CourseProfessorActiveModel, Entity as CourseProfessors,
    Model as CourseProfessorModel,
};
pub use super::courses::{ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel};
pub use super::discussion_topics::{
    ActiveModel as DiscussionTopicActiveModel, Entity as DiscussionTopics,
    Model as DiscussionTopicModel,
};
pub use super::faculties::{
    ActiveModel as FacultyActiveModel, Entity as Faculties, Model as FacultyModel,
};
pub use super::files::{ActiveModel as FileActiveModel, Entity as Files, Model as FileModel};
pub use super::group_members::{
    ActiveModel as GroupMemberActiveModel, Entity as GroupMembers, Model as GroupMemberModel,
};
pub use super::group_reports::{
    ActiveModel as GroupReportActiveModel, Entity as GroupReports, Model as GroupReportModel,
};
pub use super::professor_profiles::{
    ActiveModel as ProfessorProfileActiveModel, Entity as ProfessorProfiles,
    Model as ProfessorProfileModel,
};
pub use super::promotions::{
    ActiveModel as PromotionActiveModel, Entity as Promotions, Model as PromotionModel,
};
pub use super::reactions::{
    ActiveModel as ReactionActiveModel, Entity as Reactions, Model as ReactionModel,
};
pub use super::student_profiles::{
    ActiveModel as StudentProfileActiveModel, Entity as StudentProfiles,
    Model as StudentProfileModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
pub use super::work_groups::{
    ActiveModel as WorkGroupActiveModel, Entity as WorkGroups, Model as WorkGroupModel,
};

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Accounts
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::FirstName).string().not_null())
                    .col(ColumnDef::new(Users::LastName).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Status).string().not_null())
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Faculties
        manager
            .create_table(
                Table::create()
                    .table(Faculties::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Faculties::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Faculties::Name).string().not_null())
                    .col(
                        ColumnDef::new(Faculties::Code)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // Promotions (student cohorts)
        manager
            .create_table(
                Table::create()
                    .table(Promotions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Promotions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Promotions::Name).string().not_null())
                    .col(
                        ColumnDef::new(Promotions::Code)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Promotions::FacultyId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Promotions::Table, Promotions::FacultyId)
                            .to(Faculties::Table, Faculties::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Student profiles (1:1 with users, matricule is the external id)
        manager
            .create_table(
                Table::create()
                    .table(StudentProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentProfiles::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentProfiles::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(StudentProfiles::Matricule)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(StudentProfiles::PromotionId)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(StudentProfiles::FacultyId)
                            .big_integer()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentProfiles::Table, StudentProfiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentProfiles::Table, StudentProfiles::PromotionId)
                            .to(Promotions::Table, Promotions::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentProfiles::Table, StudentProfiles::FacultyId)
                            .to(Faculties::Table, Faculties::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Professor profiles (1:1 with users)
        manager
            .create_table(
                Table::create()
                    .table(ProfessorProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProfessorProfiles::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProfessorProfiles::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(ProfessorProfiles::Specialty)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProfessorProfiles::Status).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(ProfessorProfiles::Table, ProfessorProfiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Courses
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::Title).string().not_null())
                    .col(
                        ColumnDef::new(Courses::Code)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Courses::Description).text().null())
                    .col(ColumnDef::new(Courses::PromotionId).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Courses::Table, Courses::PromotionId)
                            .to(Promotions::Table, Promotions::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Course <-> professor associations
        manager
            .create_table(
                Table::create()
                    .table(CourseProfessors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseProfessors::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CourseProfessors::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseProfessors::ProfessorId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseProfessors::Table, CourseProfessors::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseProfessors::Table, CourseProfessors::ProfessorId)
                            .to(ProfessorProfiles::Table, ProfessorProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_course_professors_unique")
                    .table(CourseProfessors::Table)
                    .col(CourseProfessors::CourseId)
                    .col(CourseProfessors::ProfessorId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Assignments (travaux)
        manager
            .create_table(
                Table::create()
                    .table(Assignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assignments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Assignments::Title).string().not_null())
                    .col(ColumnDef::new(Assignments::Description).text().null())
                    .col(ColumnDef::new(Assignments::DueAt).big_integer().not_null())
                    .col(
                        ColumnDef::new(Assignments::PublishedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Assignments::CourseId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Assignments::PromotionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Assignments::AuthorId).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assignments::Table, Assignments::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assignments::Table, Assignments::PromotionId)
                            .to(Promotions::Table, Promotions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assignments::Table, Assignments::AuthorId)
                            .to(ProfessorProfiles::Table, ProfessorProfiles::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_assignments_promotion")
                    .table(Assignments::Table)
                    .col(Assignments::PromotionId)
                    .to_owned(),
            )
            .await?;

        // Work groups
        manager
            .create_table(
                Table::create()
                    .table(WorkGroups::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WorkGroups::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WorkGroups::Name).string().not_null())
                    .col(ColumnDef::new(WorkGroups::Status).string().not_null())
                    .col(ColumnDef::new(WorkGroups::Capacity).integer().not_null())
                    .col(
                        ColumnDef::new(WorkGroups::AssignmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(WorkGroups::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(WorkGroups::Table, WorkGroups::AssignmentId)
                            .to(Assignments::Table, Assignments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Group names are unique within an assignment
        manager
            .create_index(
                Index::create()
                    .name("idx_work_groups_assignment_name")
                    .table(WorkGroups::Table)
                    .col(WorkGroups::AssignmentId)
                    .col(WorkGroups::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Group memberships
        manager
            .create_table(
                Table::create()
                    .table(GroupMembers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GroupMembers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(GroupMembers::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(GroupMembers::GroupId).big_integer().not_null())
                    .col(
                        ColumnDef::new(GroupMembers::IsLeader)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(GroupMembers::JoinedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(GroupMembers::Table, GroupMembers::StudentId)
                            .to(StudentProfiles::Table, StudentProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(GroupMembers::Table, GroupMembers::GroupId)
                            .to(WorkGroups::Table, WorkGroups::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A student joins a given group at most once; the join flow relies on
        // this constraint instead of check-then-insert
        manager
            .create_index(
                Index::create()
                    .name("idx_group_members_unique")
                    .table(GroupMembers::Table)
                    .col(GroupMembers::StudentId)
                    .col(GroupMembers::GroupId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Group reports (several revisions allowed, the latest one counts)
        manager
            .create_table(
                Table::create()
                    .table(GroupReports::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GroupReports::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(GroupReports::GroupId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(GroupReports::FileToken).string().not_null())
                    .col(
                        ColumnDef::new(GroupReports::SubmittedBy)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GroupReports::SubmittedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(GroupReports::Table, GroupReports::GroupId)
                            .to(WorkGroups::Table, WorkGroups::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(GroupReports::Table, GroupReports::SubmittedBy)
                            .to(StudentProfiles::Table, StudentProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_group_reports_group")
                    .table(GroupReports::Table)
                    .col(GroupReports::GroupId)
                    .to_owned(),
            )
            .await?;

        // Discussion topics (student-opened threads, not tied to an assignment)
        manager
            .create_table(
                Table::create()
                    .table(DiscussionTopics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DiscussionTopics::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DiscussionTopics::Title).string().not_null())
                    .col(
                        ColumnDef::new(DiscussionTopics::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DiscussionTopics::AuthorId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DiscussionTopics::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(DiscussionTopics::Table, DiscussionTopics::AuthorId)
                            .to(StudentProfiles::Table, StudentProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Contributions attach to either an assignment thread or a topic
        manager
            .create_table(
                Table::create()
                    .table(Contributions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Contributions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Contributions::AuthorId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Contributions::Kind).string().not_null())
                    .col(ColumnDef::new(Contributions::Content).text().null())
                    .col(ColumnDef::new(Contributions::FileToken).string().null())
                    .col(
                        ColumnDef::new(Contributions::AssignmentId)
                            .big_integer()
                            .null(),
                    )
                    .col(ColumnDef::new(Contributions::TopicId).big_integer().null())
                    .col(
                        ColumnDef::new(Contributions::PostedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Contributions::Table, Contributions::AuthorId)
                            .to(StudentProfiles::Table, StudentProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Contributions::Table, Contributions::AssignmentId)
                            .to(Assignments::Table, Assignments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Contributions::Table, Contributions::TopicId)
                            .to(DiscussionTopics::Table, DiscussionTopics::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Update-feed range queries filter on (assignment, posted_at)
        manager
            .create_index(
                Index::create()
                    .name("idx_contributions_assignment_posted")
                    .table(Contributions::Table)
                    .col(Contributions::AssignmentId)
                    .col(Contributions::PostedAt)
                    .to_owned(),
            )
            .await?;

        // Topic threads list in posted order
        manager
            .create_index(
                Index::create()
                    .name("idx_contributions_topic_posted")
                    .table(Contributions::Table)
                    .col(Contributions::TopicId)
                    .col(Contributions::PostedAt)
                    .to_owned(),
            )
            .await?;

        // Comments
        manager
            .create_table(
                Table::create()
                    .table(Comments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Comments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Comments::AuthorId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Comments::ContributionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Comments::Content).text().not_null())
                    .col(ColumnDef::new(Comments::PostedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Comments::Table, Comments::AuthorId)
                            .to(StudentProfiles::Table, StudentProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Comments::Table, Comments::ContributionId)
                            .to(Contributions::Table, Contributions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_comments_contribution_posted")
                    .table(Comments::Table)
                    .col(Comments::ContributionId)
                    .col(Comments::PostedAt)
                    .to_owned(),
            )
            .await?;

        // Reactions (no timestamp by design; the feed always returns them all)
        manager
            .create_table(
                Table::create()
                    .table(Reactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reactions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reactions::StudentId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Reactions::ContributionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Reactions::Kind).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Reactions::Table, Reactions::StudentId)
                            .to(StudentProfiles::Table, StudentProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Reactions::Table, Reactions::ContributionId)
                            .to(Contributions::Table, Contributions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // At most one reaction per (student, contribution); the toggle runs
        // inside a transaction against this key
        manager
            .create_index(
                Index::create()
                    .name("idx_reactions_unique")
                    .table(Reactions::Table)
                    .col(Reactions::StudentId)
                    .col(Reactions::ContributionId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Uploaded files
        manager
            .create_table(
                Table::create()
                    .table(Files::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Files::DownloadToken)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Files::OriginalName).string().not_null())
                    .col(ColumnDef::new(Files::StoredName).string().not_null())
                    .col(ColumnDef::new(Files::FileSize).big_integer().not_null())
                    .col(ColumnDef::new(Files::FileType).string().not_null())
                    .col(ColumnDef::new(Files::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Files::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Files::Table, Files::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Files::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Reactions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Comments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Contributions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DiscussionTopics::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GroupReports::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GroupMembers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(WorkGroups::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Assignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CourseProfessors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProfessorProfiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentProfiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Promotions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Faculties::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Email,
    PasswordHash,
    FirstName,
    LastName,
    Role,
    Status,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Faculties {
    #[sea_orm(iden = "faculties")]
    Table,
    Id,
    Name,
    Code,
}

#[derive(DeriveIden)]
enum Promotions {
    #[sea_orm(iden = "promotions")]
    Table,
    Id,
    Name,
    Code,
    FacultyId,
}

#[derive(DeriveIden)]
enum StudentProfiles {
    #[sea_orm(iden = "student_profiles")]
    Table,
    Id,
    UserId,
    Matricule,
    PromotionId,
    FacultyId,
}

#[derive(DeriveIden)]
enum ProfessorProfiles {
    #[sea_orm(iden = "professor_profiles")]
    Table,
    Id,
    UserId,
    Specialty,
    Status,
}

#[derive(DeriveIden)]
enum Courses {
    #[sea_orm(iden = "courses")]
    Table,
    Id,
    Title,
    Code,
    Description,
    PromotionId,
}

#[derive(DeriveIden)]
enum CourseProfessors {
    #[sea_orm(iden = "course_professors")]
    Table,
    Id,
    CourseId,
    ProfessorId,
}

#[derive(DeriveIden)]
enum Assignments {
    #[sea_orm(iden = "assignments")]
    Table,
    Id,
    Title,
    Description,
    DueAt,
    PublishedAt,
    CourseId,
    PromotionId,
    AuthorId,
}

#[derive(DeriveIden)]
enum WorkGroups {
    #[sea_orm(iden = "work_groups")]
    Table,
    Id,
    Name,
    Status,
    Capacity,
    AssignmentId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum GroupMembers {
    #[sea_orm(iden = "group_members")]
    Table,
    Id,
    StudentId,
    GroupId,
    IsLeader,
    JoinedAt,
}

#[derive(DeriveIden)]
enum GroupReports {
    #[sea_orm(iden = "group_reports")]
    Table,
    Id,
    GroupId,
    FileToken,
    SubmittedBy,
    SubmittedAt,
}

#[derive(DeriveIden)]
enum DiscussionTopics {
    #[sea_orm(iden = "discussion_topics")]
    Table,
    Id,
    Title,
    Description,
    AuthorId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Contributions {
    #[sea_orm(iden = "contributions")]
    Table,
    Id,
    AuthorId,
    Kind,
    Content,
    FileToken,
    AssignmentId,
    TopicId,
    PostedAt,
}

#[derive(DeriveIden)]
enum Comments {
    #[sea_orm(iden = "comments")]
    Table,
    Id,
    AuthorId,
    ContributionId,
    Content,
    PostedAt,
}

#[derive(DeriveIden)]
enum Reactions {
    #[sea_orm(iden = "reactions")]
    Table,
    Id,
    StudentId,
    ContributionId,
    Kind,
}

#[derive(DeriveIden)]
enum Files {
    #[sea_orm(iden = "files")]
    Table,
    DownloadToken,
    OriginalName,
    StoredName,
    FileSize,
    FileType,
    UserId,
    CreatedAt,
}

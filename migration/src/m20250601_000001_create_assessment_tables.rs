use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建考核表
        manager
            .create_table(
                Table::create()
                    .table(Assessments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assessments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Assessments::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Assessments::Title).string().not_null())
                    .col(ColumnDef::new(Assessments::Description).text().null())
                    .col(ColumnDef::new(Assessments::Granularity).string().not_null())
                    .col(
                        ColumnDef::new(Assessments::IsReleased)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Assessments::CurrentReleaseNumber)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Assessments::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Assessments::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建题目表
        manager
            .create_table(
                Table::create()
                    .table(Questions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Questions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Questions::AssessmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Questions::Ordinal).integer().not_null())
                    .col(ColumnDef::new(Questions::Prompt).text().not_null())
                    .col(ColumnDef::new(Questions::IsRequired).boolean().not_null())
                    .col(ColumnDef::new(Questions::IsLocked).boolean().not_null())
                    .col(ColumnDef::new(Questions::CustomInstruction).text().null())
                    .col(ColumnDef::new(Questions::Config).text().not_null())
                    .col(
                        ColumnDef::new(Questions::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Questions::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Questions::Table, Questions::AssessmentId)
                            .to(Assessments::Table, Assessments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建提交表
        manager
            .create_table(
                Table::create()
                    .table(Submissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Submissions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Submissions::AssessmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Submissions::GraderId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Submissions::TargetId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Submissions::Answers).text().not_null())
                    .col(ColumnDef::new(Submissions::IsDraft).boolean().not_null())
                    .col(ColumnDef::new(Submissions::Score).double().not_null())
                    .col(ColumnDef::new(Submissions::AdjustedScore).double().null())
                    .col(
                        ColumnDef::new(Submissions::SubmissionReleaseNumber)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Submissions::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Submissions::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Submissions::Table, Submissions::AssessmentId)
                            .to(Assessments::Table, Assessments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 同一评分人对同一对象的同一考核至多一份提交
        manager
            .create_index(
                Index::create()
                    .name("idx_submissions_assessment_grader_target")
                    .table(Submissions::Table)
                    .col(Submissions::AssessmentId)
                    .col(Submissions::GraderId)
                    .col(Submissions::TargetId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建评分分配表
        manager
            .create_table(
                Table::create()
                    .table(AssignmentEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AssignmentEntries::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AssignmentEntries::AssessmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssignmentEntries::TargetId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AssignmentEntries::MemberIds).text().not_null())
                    .col(ColumnDef::new(AssignmentEntries::GraderIds).text().not_null())
                    .col(
                        ColumnDef::new(AssignmentEntries::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AssignmentEntries::Table, AssignmentEntries::AssessmentId)
                            .to(Assessments::Table, Assessments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 每个考核中每个对象至多出现一次
        manager
            .create_index(
                Index::create()
                    .name("idx_assignment_entries_assessment_target")
                    .table(AssignmentEntries::Table)
                    .col(AssignmentEntries::AssessmentId)
                    .col(AssignmentEntries::TargetId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建考核结果表
        manager
            .create_table(
                Table::create()
                    .table(AssessmentResults::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AssessmentResults::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AssessmentResults::AssessmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssessmentResults::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AssessmentResults::Entries).text().not_null())
                    .col(
                        ColumnDef::new(AssessmentResults::AverageScore)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssessmentResults::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AssessmentResults::Table, AssessmentResults::AssessmentId)
                            .to(Assessments::Table, Assessments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 每个学生每个考核唯一一条结果
        manager
            .create_index(
                Index::create()
                    .name("idx_assessment_results_assessment_student")
                    .table(AssessmentResults::Table)
                    .col(AssessmentResults::AssessmentId)
                    .col(AssessmentResults::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AssessmentResults::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AssignmentEntries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Submissions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Questions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Assessments::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Assessments {
    #[sea_orm(iden = "assessments")]
    Table,
    Id,
    CourseId,
    Title,
    Description,
    Granularity,
    IsReleased,
    CurrentReleaseNumber,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Questions {
    #[sea_orm(iden = "questions")]
    Table,
    Id,
    AssessmentId,
    Ordinal,
    Prompt,
    IsRequired,
    IsLocked,
    CustomInstruction,
    Config,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Submissions {
    #[sea_orm(iden = "submissions")]
    Table,
    Id,
    AssessmentId,
    GraderId,
    TargetId,
    Answers,
    IsDraft,
    Score,
    AdjustedScore,
    SubmissionReleaseNumber,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AssignmentEntries {
    #[sea_orm(iden = "assignment_entries")]
    Table,
    Id,
    AssessmentId,
    TargetId,
    MemberIds,
    GraderIds,
    CreatedAt,
}

#[derive(DeriveIden)]
enum AssessmentResults {
    #[sea_orm(iden = "assessment_results")]
    Table,
    Id,
    AssessmentId,
    StudentId,
    Entries,
    AverageScore,
    UpdatedAt,
}

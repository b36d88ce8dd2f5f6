//! 实体 prelude，便于批量导入

pub use super::assessment_results::Entity as AssessmentResults;
pub use super::assessments::Entity as Assessments;
pub use super::assignment_entries::Entity as AssignmentEntries;
pub use super::questions::Entity as Questions;
pub use super::submissions::Entity as Submissions;

pub mod assessments;
pub mod assignments;
pub mod questions;
pub mod results;
pub mod submissions;

pub use assessments::AssessmentService;
pub use assignments::AssignmentService;
pub use questions::QuestionService;
pub use results::ResultService;
pub use submissions::SubmissionService;

pub mod assessments;

pub mod questions;

pub mod submissions;

pub use assessments::configure_assessments_routes;
pub use questions::configure_questions_routes;
pub use submissions::configure_submissions_routes;

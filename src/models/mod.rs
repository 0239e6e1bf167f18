pub mod submission;
pub mod verification;

pub mod passage;
pub mod pool;
pub mod question;

pub use passage::{group_passages, passage_key, PassageGroup, PassageKey};
pub use pool::{Candidate, CandidatePool};
pub use question::{Question, QuestionFilter, QuestionId, READING_SUBCATEGORY};

use std::collections::HashSet;
use crate::questions::question::{Question, QuestionFilter};
use crate::sessions::SeenSet;

/// A catalog question together with whether it was ever attempted.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub question: Question,
    pub seen: bool,
}

/// Filtered catalog in catalog order, each entry tagged seen/unseen.
#[derive(Debug, Clone, Default)]
pub struct CandidatePool {
    entries: Vec<Candidate>,
}

impl CandidatePool {
    /// Filter the catalog and partition it against the seen set.
    ///
    /// Duplicate ids keep their first occurrence so a plan can never contain
    /// the same question twice.
    pub fn build(all_questions: Vec<Question>, filter: &QuestionFilter, seen: &SeenSet) -> Self {
        let total = all_questions.len();
        let mut ids = HashSet::new();
        let entries: Vec<Candidate> = all_questions
            .into_iter()
            .filter(|q| filter.matches(q))
            .filter(|q| ids.insert(q.id))
            .map(|question| Candidate {
                seen: seen.contains(question.id),
                question,
            })
            .collect();

        if entries.len() != total {
            tracing::debug!(
                subcategory = ?filter.subcategory,
                tag = ?filter.tag,
                filtered_count = entries.len(),
                total_count = total,
                "Filtered candidate pool"
            );
        }

        CandidatePool { entries }
    }

    pub fn unseen(&self) -> Vec<&Question> {
        self.entries.iter().filter(|c| !c.seen).map(|c| &c.question).collect()
    }

    pub fn seen(&self) -> Vec<&Question> {
        self.entries.iter().filter(|c| c.seen).map(|c| &c.question).collect()
    }

    pub fn entries(&self) -> &[Candidate] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Split into (non-reading, reading) pools, both keeping catalog order.
    pub fn split_reading(self) -> (CandidatePool, CandidatePool) {
        let (reading, other): (Vec<_>, Vec<_>) =
            self.entries.into_iter().partition(|c| c.question.is_reading());
        (CandidatePool { entries: other }, CandidatePool { entries: reading })
    }
}

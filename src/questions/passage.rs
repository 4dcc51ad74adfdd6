use std::collections::HashMap;
use crate::questions::pool::CandidatePool;
use crate::questions::question::Question;

/// Identity of the passage a reading question belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PassageKey {
    /// Assigned at import time
    Explicit(i64),
    /// Truncated passage text; collides when two passages share a prefix
    Prefix(String),
}

/// Reading questions sharing one passage, scheduled as a unit.
#[derive(Debug, Clone)]
pub struct PassageGroup {
    pub key: PassageKey,
    /// Members in catalog order
    pub questions: Vec<Question>,
    /// True when at least one member has never been attempted
    pub unseen: bool,
}

impl PassageGroup {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Derive the grouping key for a reading question.
///
/// An explicit `passage_id` wins. Otherwise, when the stem occurs inside the
/// content, the text before it is the passage; failing that the content itself
/// is used. Either text is cut to `key_len` characters.
pub fn passage_key(question: &Question, key_len: usize) -> PassageKey {
    if let Some(id) = question.passage_id {
        return PassageKey::Explicit(id);
    }

    let passage = question
        .stem
        .as_deref()
        .filter(|stem| !stem.is_empty())
        .and_then(|stem| question.content.find(stem))
        .map(|idx| &question.content[..idx])
        .filter(|prefix| !prefix.trim().is_empty())
        .unwrap_or(question.content.as_str());

    PassageKey::Prefix(passage.chars().take(key_len).collect())
}

/// Cluster a reading pool into passage groups.
///
/// Groups appear in order of their first member in the catalog.
pub fn group_passages(pool: &CandidatePool, key_len: usize) -> Vec<PassageGroup> {
    let mut groups: Vec<PassageGroup> = Vec::new();
    let mut index: HashMap<PassageKey, usize> = HashMap::new();

    for candidate in pool.entries() {
        let key = passage_key(&candidate.question, key_len);
        match index.get(&key) {
            Some(&i) => {
                let group = &mut groups[i];
                group.questions.push(candidate.question.clone());
                group.unseen |= !candidate.seen;
            }
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(PassageGroup {
                    key,
                    questions: vec![candidate.question.clone()],
                    unseen: !candidate.seen,
                });
            }
        }
    }

    tracing::debug!(
        questions = pool.len(),
        groups = groups.len(),
        "Grouped reading questions by passage"
    );
    groups
}

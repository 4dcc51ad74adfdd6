use serde::{Deserialize, Serialize};

/// Subcategory carried by multi-question reading items.
pub const READING_SUBCATEGORY: &str = "RC";

pub type QuestionId = i64;

/// Immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    /// Explicit passage grouping key assigned at import time
    #[serde(default)]
    pub passage_id: Option<i64>,
    pub category: String,
    pub subcategory: String,
    /// Full prompt text; for reading items this embeds the shared passage
    pub content: String,
    /// The actual prompt when `content` also embeds a passage
    #[serde(default)]
    pub stem: Option<String>,
    pub options: Vec<String>,
    pub correct_index: usize,
    #[serde(default)]
    pub skill_tags: Vec<String>,
    pub difficulty: u8,
    #[serde(default)]
    pub explanation: String,
}

impl Question {
    pub fn is_reading(&self) -> bool {
        self.subcategory == READING_SUBCATEGORY
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.skill_tags.iter().any(|t| t == tag)
    }

    /// Whether a chosen option index is the right answer
    pub fn is_correct_choice(&self, chosen_index: usize) -> bool {
        chosen_index == self.correct_index
    }
}

/// Optional catalog filter; `None` fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionFilter {
    pub subcategory: Option<String>,
    pub tag: Option<String>,
}

impl QuestionFilter {
    pub fn new(subcategory: Option<&str>, tag: Option<&str>) -> Self {
        QuestionFilter {
            subcategory: subcategory.map(str::to_string),
            tag: tag.map(str::to_string),
        }
    }

    pub fn by_tag(tag: &str) -> Self {
        Self::new(None, Some(tag))
    }

    pub fn matches(&self, question: &Question) -> bool {
        let subcategory_ok = self
            .subcategory
            .as_deref()
            .map_or(true, |s| question.subcategory == s);
        let tag_ok = self.tag.as_deref().map_or(true, |t| question.has_tag(t));
        subcategory_ok && tag_ok
    }
}

use crate::questions::question::Question;

pub fn question(id: i64, subcategory: &str, tags: &[&str]) -> Question {
    Question {
        id,
        passage_id: None,
        category: "Verbal".to_string(),
        subcategory: subcategory.to_string(),
        content: format!("Argument {}", id),
        stem: None,
        options: (0..5).map(|i| format!("Option {}", i)).collect(),
        correct_index: 0,
        skill_tags: tags.iter().map(|t| t.to_string()).collect(),
        difficulty: 3,
        explanation: String::new(),
    }
}

pub fn reading(id: i64, passage: &str, stem: &str, tags: &[&str]) -> Question {
    let mut q = question(id, "RC", tags);
    q.content = format!("{}\n\n{}", passage, stem);
    q.stem = Some(stem.to_string());
    q
}

#[cfg(test)]
mod tests {
    use crate::questions::passage::{group_passages, passage_key, PassageKey};
    use crate::questions::pool::CandidatePool;
    use crate::questions::question::QuestionFilter;
    use crate::sessions::{AttemptLog, SeenSet};
    use crate::unit_tests::fixtures::{question, reading};

    #[test]
    fn test_key_is_text_before_stem() {
        let q = reading(1, "Coral reefs are dying.", "What is the main idea?", &[]);
        assert_eq!(passage_key(&q, 100), PassageKey::Prefix("Coral reefs are dying.\n\n".to_string()));
    }

    #[test]
    fn test_key_is_truncated() {
        let q = reading(1, "Coral reefs are dying.", "What is the main idea?", &[]);
        assert_eq!(passage_key(&q, 5), PassageKey::Prefix("Coral".to_string()));
    }

    #[test]
    fn test_key_falls_back_to_content() {
        let mut q = reading(1, "Coral reefs are dying.", "What is the main idea?", &[]);
        q.stem = Some("not in the content".to_string());
        assert_eq!(passage_key(&q, 11), PassageKey::Prefix("Coral reefs".to_string()));

        q.stem = None;
        assert_eq!(passage_key(&q, 11), PassageKey::Prefix("Coral reefs".to_string()));
    }

    #[test]
    fn test_stem_at_start_keys_on_content() {
        let mut q = reading(1, "Coral reefs are dying.", "What is the main idea?", &[]);
        q.stem = Some("Coral".to_string());
        assert_eq!(passage_key(&q, 11), PassageKey::Prefix("Coral reefs".to_string()));
    }

    #[test]
    fn test_explicit_passage_id_wins() {
        let mut q = reading(1, "Coral reefs are dying.", "What is the main idea?", &[]);
        q.passage_id = Some(9);
        assert_eq!(passage_key(&q, 100), PassageKey::Explicit(9));
    }

    #[test]
    fn test_truncation_counts_characters() {
        let q = reading(1, "Éléphants d'Afrique", "Pourquoi?", &[]);
        assert_eq!(passage_key(&q, 3), PassageKey::Prefix("Élé".to_string()));
    }

    #[test]
    fn test_groups_keep_catalog_order_and_seen_state() {
        let catalog = vec![
            reading(1, "Passage one", "Q1?", &[]),
            reading(2, "Passage two", "Q2?", &[]),
            reading(3, "Passage one", "Q3?", &[]),
            reading(4, "Passage two", "Q4?", &[]),
            reading(5, "Passage one", "Q5?", &[]),
        ];
        let attempts: Vec<AttemptLog> = [2, 4]
            .iter()
            .map(|id| AttemptLog::new(&question(*id, "RC", &[]), 0, 60))
            .collect();
        let seen = SeenSet::from_attempts(&attempts);
        let pool = CandidatePool::build(catalog, &QuestionFilter::default(), &seen);

        let groups = group_passages(&pool, 100);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].questions.iter().map(|q| q.id).collect::<Vec<_>>(), vec![1, 3, 5]);
        assert!(groups[0].unseen);
        assert_eq!(groups[1].questions.iter().map(|q| q.id).collect::<Vec<_>>(), vec![2, 4]);
        assert!(!groups[1].unseen);
    }
}

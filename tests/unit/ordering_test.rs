#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use crate::brain::ordering::{arrange, interleave, spread_tag_runs};
    use crate::questions::passage::{PassageGroup, PassageKey};
    use crate::questions::question::Question;
    use crate::unit_tests::fixtures::{question, reading};

    fn group(key: i64, ids: &[i64]) -> PassageGroup {
        PassageGroup {
            key: PassageKey::Explicit(key),
            questions: ids.iter().map(|id| reading(*id, "passage", "stem", &[])).collect(),
            unseen: true,
        }
    }

    fn ids(questions: &[Question]) -> Vec<i64> {
        questions.iter().map(|q| q.id).collect()
    }

    #[test]
    fn test_interleave_spaces_groups_evenly() {
        let singles: Vec<Question> = (1..=6).map(|id| question(id, "CR", &[])).collect();
        let ordered = interleave(singles, vec![group(1, &[101, 102]), group(2, &[201])]);
        assert_eq!(ids(&ordered), vec![1, 2, 101, 102, 3, 4, 201, 5, 6]);
    }

    #[test]
    fn test_interleave_appends_leftover_groups() {
        let singles = vec![question(1, "CR", &[])];
        let ordered = interleave(singles, vec![group(1, &[101]), group(2, &[201, 202])]);
        assert_eq!(ids(&ordered), vec![1, 101, 201, 202]);
    }

    #[test]
    fn test_interleave_groups_only() {
        let ordered = interleave(Vec::new(), vec![group(1, &[101, 102, 103])]);
        assert_eq!(ids(&ordered), vec![101, 102, 103]);
    }

    #[test]
    fn test_arrange_keeps_groups_contiguous_and_in_order() {
        for seed in 0..25 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let singles: Vec<Question> = (1..=7).map(|id| question(id, "CR", &["X"])).collect();
            let groups = vec![group(1, &[101, 102, 103]), group(2, &[201, 202])];
            let ordered = ids(&arrange(singles, groups, 3, &mut rng));

            assert_eq!(ordered.len(), 12);
            for members in [vec![101, 102, 103], vec![201, 202]] {
                let start = ordered.iter().position(|id| *id == members[0]).unwrap();
                assert_eq!(&ordered[start..start + members.len()], members.as_slice());
            }
        }
    }

    #[test]
    fn test_spread_tag_runs_breaks_long_run() {
        let mut questions = vec![
            question(1, "CR", &["A"]),
            question(2, "CR", &["A"]),
            question(3, "CR", &["A"]),
            question(4, "CR", &["A"]),
            question(5, "CR", &["B"]),
        ];
        spread_tag_runs(&mut questions, 3);
        assert_eq!(ids(&questions), vec![1, 2, 3, 5, 4]);
    }

    #[test]
    fn test_spread_tag_runs_is_best_effort() {
        let mut questions: Vec<Question> = (1..=5).map(|id| question(id, "CR", &["A"])).collect();
        spread_tag_runs(&mut questions, 3);
        assert_eq!(ids(&questions), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_spread_tag_runs_ignores_untagged() {
        let mut questions: Vec<Question> = (1..=6).map(|id| question(id, "CR", &[])).collect();
        spread_tag_runs(&mut questions, 2);
        assert_eq!(ids(&questions), vec![1, 2, 3, 4, 5, 6]);
    }
}

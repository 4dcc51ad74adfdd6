#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use crate::brain::sampler::{sample, weighted_permutation};

    #[test]
    fn test_sample_never_repeats() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let items: Vec<u32> = (0..20).collect();
        let picked = sample(items, |i| 1.0 + *i as f64, 10, &mut rng);
        assert_eq!(picked.len(), 10);
        let unique: HashSet<_> = picked.iter().collect();
        assert_eq!(unique.len(), 10);
    }

    #[test]
    fn test_short_pool_returns_everything() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let items: Vec<u32> = (0..4).collect();
        let mut picked = sample(items, |_| 1.0, 10, &mut rng);
        picked.sort();
        assert_eq!(picked, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_zero_k_and_empty_pool() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(sample(vec![1, 2, 3], |_| 1.0, 0, &mut rng).is_empty());
        assert!(sample(Vec::<u32>::new(), |_| 1.0, 5, &mut rng).is_empty());
    }

    #[test]
    fn test_fixed_seed_is_reproducible() {
        let items: Vec<u32> = (0..30).collect();
        let weight = |i: &u32| (*i % 5) as f64 + 0.5;

        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        assert_eq!(
            sample(items.clone(), weight, 12, &mut a),
            sample(items, weight, 12, &mut b)
        );
    }

    #[test]
    fn test_heavier_items_drawn_first_more_often() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let mut heavy_first = 0;
        for _ in 0..2000 {
            let picked = sample(vec!["heavy", "light"], |s| if *s == "heavy" { 9.0 } else { 1.0 }, 1, &mut rng);
            if picked[0] == "heavy" {
                heavy_first += 1;
            }
        }
        // expected 1800
        assert!(heavy_first > 1650, "heavy drawn first {} times", heavy_first);
    }

    #[test]
    fn test_all_zero_weights_fall_back_to_uniform() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let picked = sample(vec![1, 2, 3], |_| 0.0, 3, &mut rng);
        assert_eq!(picked.len(), 3);
    }

    #[test]
    fn test_invalid_weights_are_ignored() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..50 {
            let picked = sample(vec![1, 2, 3], |i| match i {
                1 => f64::NAN,
                2 => -4.0,
                _ => 1.0,
            }, 1, &mut rng);
            assert_eq!(picked, vec![3]);
        }
    }

    #[test]
    fn test_weighted_permutation_keeps_every_item() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut ordered = weighted_permutation((0..8).collect::<Vec<u32>>(), |_| 1.0, &mut rng);
        ordered.sort();
        assert_eq!(ordered, (0..8).collect::<Vec<u32>>());
    }
}

use rand::Rng;

/// Draw up to `k` items without replacement, each step picking an item with
/// probability proportional to its weight among those still remaining.
///
/// Returns `min(k, items.len())` items in draw order. Non-finite or negative
/// weights count as zero; when every remaining weight is zero the draw is
/// uniform.
pub fn sample<T, F, R>(items: Vec<T>, weight_fn: F, k: usize, rng: &mut R) -> Vec<T>
where
    F: Fn(&T) -> f64,
    R: Rng + ?Sized,
{
    let mut remaining: Vec<(T, f64)> = items
        .into_iter()
        .map(|item| {
            let w = weight_fn(&item);
            let w = if w.is_finite() && w > 0.0 { w } else { 0.0 };
            (item, w)
        })
        .collect();

    let draws = k.min(remaining.len());
    let mut selected = Vec::with_capacity(draws);

    for _ in 0..draws {
        let idx = draw_index(&remaining, rng);
        selected.push(remaining.swap_remove(idx).0);
    }

    selected
}

/// Weighted random ordering of all items.
pub fn weighted_permutation<T, F, R>(items: Vec<T>, weight_fn: F, rng: &mut R) -> Vec<T>
where
    F: Fn(&T) -> f64,
    R: Rng + ?Sized,
{
    let n = items.len();
    sample(items, weight_fn, n, rng)
}

fn draw_index<T, R: Rng + ?Sized>(remaining: &[(T, f64)], rng: &mut R) -> usize {
    let total: f64 = remaining.iter().map(|(_, w)| w).sum();
    if total <= 0.0 {
        return rng.gen_range(0..remaining.len());
    }

    // Cumulative distribution over the renormalized weights.
    let target = rng.gen::<f64>() * total;
    let mut cumulative = 0.0;
    for (i, (_, w)) in remaining.iter().enumerate() {
        cumulative += w;
        if target < cumulative {
            return i;
        }
    }

    // Float rounding can leave target just past the last bucket.
    remaining
        .iter()
        .rposition(|(_, w)| *w > 0.0)
        .unwrap_or(remaining.len() - 1)
}

//! Weighted random draws
//!
//! Draw a uniform value in `[0, total)` and walk the cumulative weights until
//! it is covered. Non-positive and non-finite weights are never selected.

use rand::Rng;

fn pick<I, R>(weights: I, rng: &mut R) -> Option<usize>
where
    I: Iterator<Item = f64> + Clone,
    R: Rng + ?Sized,
{
    let usable = |w: &f64| w.is_finite() && *w > 0.0;

    let total: f64 = weights.clone().filter(usable).sum();
    if !total.is_finite() || total <= 0.0 {
        return None;
    }

    let target = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    let mut last = None;

    for (i, weight) in weights.enumerate() {
        if !usable(&weight) {
            continue;
        }
        cumulative += weight;
        last = Some(i);
        if target < cumulative {
            return Some(i);
        }
    }

    // Rounding can leave target just past the final cumulative sum
    last
}

/// Index drawn with probability proportional to its weight
///
/// Returns `None` if no weight is positive.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wrdly::generator::weighted_index;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// assert_eq!(weighted_index(&[0.0, 3.0, 0.0], &mut rng), Some(1));
/// assert_eq!(weighted_index(&[0.0, 0.0], &mut rng), None);
/// ```
pub fn weighted_index<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> Option<usize> {
    pick(weights.iter().copied(), rng)
}

/// Item drawn from an `(item, weight)` table with probability proportional to its weight
pub fn weighted_pick<'a, T, R: Rng + ?Sized>(table: &'a [(T, f64)], rng: &mut R) -> Option<&'a T> {
    pick(table.iter().map(|&(_, weight)| weight), rng).map(|i| &table[i].0)
}

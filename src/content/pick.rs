/// Randomness boundary for content generation.
///
/// Every "pick among N options" in the catalog goes through these helpers,
/// so the session controller and evaluator stay deterministic given a
/// fixed Round. Generators receive `&mut dyn RngCore` and nothing else.

use rand::{Rng, RngCore};

/// Uniform pick from a non-empty pool.
pub fn choice<'a, T>(rng: &mut dyn RngCore, pool: &'a [T]) -> &'a T {
    &pool[rng.gen_range(0..pool.len())]
}

/// Two distinct uniform picks from a pool of length >= 2.
///
/// Draws the second index from a range one smaller and shifts it past the
/// first, so the pair is distinct without rejection sampling.
pub fn two_distinct<'a, T>(rng: &mut dyn RngCore, pool: &'a [T]) -> (&'a T, &'a T) {
    let a = rng.gen_range(0..pool.len());
    let mut b = rng.gen_range(0..pool.len() - 1);
    if b >= a {
        b += 1;
    }
    (&pool[a], &pool[b])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn choice_stays_in_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool = [10, 20, 30];
        for _ in 0..100 {
            assert!(pool.contains(choice(&mut rng, &pool)));
        }
    }

    #[test]
    fn two_distinct_never_repeats() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool = ["a", "b", "c", "d"];
        for _ in 0..500 {
            let (x, y) = two_distinct(&mut rng, &pool);
            assert_ne!(x, y);
        }
    }

    #[test]
    fn two_distinct_covers_minimal_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool = [1, 2];
        let mut seen_both_orders = (false, false);
        for _ in 0..100 {
            match two_distinct(&mut rng, &pool) {
                (&1, &2) => seen_both_orders.0 = true,
                (&2, &1) => seen_both_orders.1 = true,
                _ => unreachable!(),
            }
        }
        assert!(seen_both_orders.0 && seen_both_orders.1);
    }
}

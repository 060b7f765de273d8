use rand::seq::SliceRandom;
use rand::Rng;

/// Up to `count` distinct elements of `pool`, drawn uniformly at random.
///
/// Uses a partial Fisher-Yates shuffle, so every ordered selection of
/// `min(count, pool.len())` elements is equally likely. An empty pool gives
/// an empty result whatever `count` is.
pub fn sample<T, R>(pool: &[T], count: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    if pool.is_empty() || count == 0 {
        return Vec::new();
    }

    let amount = count.min(pool.len());
    let mut shuffled = pool.to_vec();
    let (picked, _) = shuffled.partial_shuffle(rng, amount);
    picked.to_vec()
}

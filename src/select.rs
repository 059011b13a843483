//! Random selection of discovered files

use rand::Rng;

/// Source of uniformly distributed indices for shuffling
pub trait RandomIndex {
    /// Return an index in `0..=upper`
    fn index_up_to(&mut self, upper: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomIndex for R {
    fn index_up_to(&mut self, upper: usize) -> usize {
        self.random_range(0..=upper)
    }
}

/// Shuffle a copy of `items` with Fisher–Yates and keep the first `count`.
///
/// The whole sequence is permuted before truncating, so every item is
/// equally likely to be kept and the kept order is itself uniform.
pub fn select_random<T, R>(items: &[T], count: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: RandomIndex + ?Sized,
{
    let mut shuffled = items.to_vec();

    for index in (1..shuffled.len()).rev() {
        let other = rng.index_up_to(index);
        shuffled.swap(index, other);
    }

    shuffled.truncate(count.min(items.len()));
    shuffled
}

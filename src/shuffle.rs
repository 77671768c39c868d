//! Injectable randomness and the Fisher-Yates shuffle.

use rand::Rng;

/// A source of uniformly distributed indices.
///
/// Every [`rand::Rng`] is an index source, so any `rand` generator can be
/// passed to [`Deck::shuffle`](crate::Deck::shuffle). Implement this trait
/// directly to script the exact indices a shuffle draws.
pub trait IndexSource {
    /// Returns an index in `0..=upper`.
    ///
    /// Implementations must never return a value greater than `upper`.
    fn index_through(&mut self, upper: usize) -> usize;
}

impl<R: Rng + ?Sized> IndexSource for R {
    fn index_through(&mut self, upper: usize) -> usize {
        self.random_range(0..=upper)
    }
}

/// Shuffles `items` in place with the Fisher-Yates algorithm.
///
/// Walks from the last index down to 1, swapping position `i` with an index
/// drawn from `0..=i`. Slices of length 0 or 1 are left untouched and draw
/// nothing from `source`.
///
/// # Example
///
/// ```
/// use deckrs::shuffle::fisher_yates;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut items = [1, 2, 3, 4, 5];
/// fisher_yates(&mut items, &mut ChaCha8Rng::seed_from_u64(7));
///
/// let mut sorted = items;
/// sorted.sort_unstable();
/// assert_eq!(sorted, [1, 2, 3, 4, 5]);
/// ```
pub fn fisher_yates<T, S: IndexSource + ?Sized>(items: &mut [T], source: &mut S) {
    for i in (1..items.len()).rev() {
        let j = source.index_through(i);
        debug_assert!(j <= i, "index source returned {j}, expected at most {i}");
        items.swap(i, j);
    }
}

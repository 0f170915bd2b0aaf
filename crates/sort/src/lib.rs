mod algorithms;
mod error;

use std::fmt;
use std::str::FromStr;

use rand::Rng;

pub use algorithms::common::is_sorted_non_decreasing;
pub use algorithms::merge_sort::merge;
#[cfg(feature = "rayon")]
pub use algorithms::par::{par_merge_sort, par_quick_sort};
pub use error::{Result, SortError};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    MergeSort,
    QuickSort,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 2] = [SortAlgorithm::MergeSort, SortAlgorithm::QuickSort];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::MergeSort => "merge_sort",
        SortAlgorithm::QuickSort => "quick_sort",
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(algorithm_name(*self))
    }
}

impl FromStr for SortAlgorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self> {
        all_algorithms()
            .iter()
            .copied()
            .find(|&algo| algorithm_name(algo) == s)
            .ok_or_else(|| SortError::UnknownAlgorithm(s.to_owned()))
    }
}

/// Returns a new vector holding the elements of `data` in non-decreasing order.
///
/// `data` itself is never modified. Equal keys coming from the right half of a
/// split are emitted before those from the left half.
///
/// ```
/// let input = [9, 8, 7, 6, 5, 1, 2, 3, 4, 0];
/// assert_eq!(sort::merge_sort(&input), [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// assert_eq!(input[0], 9);
/// ```
pub fn merge_sort(data: &[i64]) -> Vec<i64> {
    tracing::trace!(len = data.len(), "merge_sort");
    algorithms::merge_sort::merge_sort(data)
}

/// Sorts the inclusive range `data[start..=end]` in place using a randomized
/// pivot from the thread-local generator.
///
/// Elements outside the range are left untouched. A range shorter than two
/// elements, including `start > end`, is a no-op. Fails without modifying
/// `data` when `end` is out of bounds.
///
/// ```
/// let mut data = vec![9, 8, 7, 6, 5, 1, 2, 3, 4, 0];
/// sort::quick_sort(&mut data, 0, 9)?;
/// assert_eq!(data, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// # Ok::<(), sort::SortError>(())
/// ```
pub fn quick_sort(data: &mut [i64], start: usize, end: usize) -> Result<()> {
    quick_sort_with_rng(data, start, end, &mut rand::rng())
}

/// Like [`quick_sort`], drawing pivots from `rng`.
pub fn quick_sort_with_rng<R: Rng + ?Sized>(
    data: &mut [i64],
    start: usize,
    end: usize,
    rng: &mut R,
) -> Result<()> {
    tracing::trace!(len = data.len(), start, end, "quick_sort");
    algorithms::quick_sort::quick_sort_range(data, start, end, rng)
}

/// Sorts all of `data` in place. Empty slices are accepted.
pub fn quick_sort_all(data: &mut [i64]) {
    quick_sort_all_with_rng(data, &mut rand::rng());
}

pub fn quick_sort_all_with_rng<R: Rng + ?Sized>(data: &mut [i64], rng: &mut R) {
    tracing::trace!(len = data.len(), "quick_sort_all");
    algorithms::quick_sort::quick_sort_slice(data, rng);
}

/// Sorts `data` in place with `algo`.
pub fn sort_i64(algo: SortAlgorithm, data: &mut [i64]) {
    tracing::trace!(algorithm = algorithm_name(algo), len = data.len(), "sort_i64");
    match algo {
        SortAlgorithm::MergeSort => algorithms::merge_sort::sort(data),
        SortAlgorithm::QuickSort => algorithms::quick_sort::sort(data),
    }
}

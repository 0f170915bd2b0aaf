use super::{merge_sort, quick_sort};

// Below this length rayon's task overhead outweighs the split.
const MAX_SEQUENTIAL: usize = 2000;

/// Sorts the two halves under `rayon::join`.
pub fn par_merge_sort(data: &[i64]) -> Vec<i64> {
    if data.len() <= MAX_SEQUENTIAL {
        return merge_sort::merge_sort(data);
    }

    let mid = data.len() >> 1;
    let (left, right) = rayon::join(
        || par_merge_sort(&data[..mid]),
        || par_merge_sort(&data[mid..]),
    );
    merge_sort::merge(&left, &right)
}

/// Sorts both partitions under `rayon::join`; they never overlap.
pub fn par_quick_sort(data: &mut [i64]) {
    if data.len() <= MAX_SEQUENTIAL {
        quick_sort::quick_sort_slice(data, &mut rand::rng());
        return;
    }

    let split = quick_sort::partition(data, &mut rand::rng());
    let (left, rest) = data.split_at_mut(split);
    let (_, right) = rest.split_at_mut(1);
    rayon::join(|| par_quick_sort(left), || par_quick_sort(right));
}

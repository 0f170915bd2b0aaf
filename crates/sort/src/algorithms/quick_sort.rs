use rand::Rng;

use crate::{Result, SortError};

pub fn sort(data: &mut [i64]) {
    quick_sort_slice(data, &mut rand::rng());
}

pub fn quick_sort_range<R: Rng + ?Sized>(
    data: &mut [i64],
    start: usize,
    end: usize,
    rng: &mut R,
) -> Result<()> {
    check_range(data.len(), end)?;
    if start >= end {
        return Ok(());
    }
    quick_sort_slice(&mut data[start..=end], rng);
    Ok(())
}

pub fn check_range(len: usize, end: usize) -> Result<()> {
    if end >= len {
        return Err(SortError::IndexOutOfBounds { index: end, len });
    }
    Ok(())
}

// Recurse into the smaller side, loop on the larger.
pub fn quick_sort_slice<R: Rng + ?Sized>(mut data: &mut [i64], rng: &mut R) {
    loop {
        match data.len() {
            0 | 1 => return,
            2 => {
                if data[0] > data[1] {
                    data.swap(0, 1);
                }
                return;
            }
            _ => {}
        }

        let split = partition(data, rng);
        let (left, rest) = data.split_at_mut(split);
        let (_, right) = rest.split_at_mut(1);

        if left.len() < right.len() {
            quick_sort_slice(left, rng);
            data = right;
        } else {
            quick_sort_slice(right, rng);
            data = left;
        }
    }
}

// Pivot slot is drawn from every index but the last.
pub fn partition<R: Rng + ?Sized>(data: &mut [i64], rng: &mut R) -> usize {
    debug_assert!(data.len() >= 2);

    let last = data.len() - 1;
    let pivot_index = rng.random_range(0..last);
    data.swap(pivot_index, last);
    let pivot = data[last];

    let mut j = 0usize;
    for i in 0..last {
        if data[i] < pivot {
            data.swap(i, j);
            j += 1;
        }
    }

    data.swap(j, last);
    j
}

use super::common;

pub fn sort(data: &mut [i64]) {
    if common::is_sorted_non_decreasing(data) {
        return;
    }
    let sorted = merge_sort(data);
    data.copy_from_slice(&sorted);
}

pub fn merge_sort(data: &[i64]) -> Vec<i64> {
    if data.len() < 2 {
        return data.to_vec();
    }

    let mid = data.len() >> 1;
    let left = merge_sort(&data[..mid]);
    let right = merge_sort(&data[mid..]);
    merge(&left, &right)
}

// Equal keys are taken from `right` first.
pub fn merge(left: &[i64], right: &[i64]) -> Vec<i64> {
    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut n = 0usize;
    let mut m = 0usize;

    while n < left.len() && m < right.len() {
        if left[n] < right[m] {
            result.push(left[n]);
            n += 1;
        } else {
            result.push(right[m]);
            m += 1;
        }
    }

    result.extend_from_slice(&left[n..]);
    result.extend_from_slice(&right[m..]);
    result
}

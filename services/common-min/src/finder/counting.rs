//! Counts, per value, how many of the three arrays contain it.
//!
//! Each array is deduplicated first so a value repeated inside one array is
//! counted once. The counts live in a `BTreeMap`, so the first key reaching
//! three is the smallest common value. Inputs are neither sorted nor copied.

use std::collections::{BTreeMap, HashSet};

use super::NOT_FOUND;

pub fn find_smallest_common(a: &[i32], b: &[i32], c: &[i32]) -> i32 {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();

    for values in [a, b, c] {
        let distinct: HashSet<i32> = values.iter().copied().collect();
        for value in distinct {
            *counts.entry(value).or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .find(|&(_, count)| count == 3)
        .map(|(value, _)| value)
        .unwrap_or(NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counting_overlapping_sets() {
        assert_eq!(find_smallest_common(&[1, 2, 3], &[2, 3, 4], &[1, 3, 4, 5]), 3);
    }

    #[test]
    fn test_counting_repeats_within_one_array() {
        // 5 appears three times but only in A.
        assert_eq!(find_smallest_common(&[5, 5, 5, 7], &[7, 1], &[7]), 7);
    }

    #[test]
    fn test_counting_repeats_within_two_arrays() {
        assert_eq!(find_smallest_common(&[2, 2], &[2, 2], &[3]), NOT_FOUND);
    }

    #[test]
    fn test_counting_no_common() {
        assert_eq!(find_smallest_common(&[12, 19, 24], &[112, 90, 3], &[70, 33, 42]), NOT_FOUND);
    }
}

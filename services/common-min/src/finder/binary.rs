//! Binary search of each element of the first array in the other two.

use super::NOT_FOUND;

pub fn find_smallest_common(a: &[i32], b: &[i32], c: &[i32]) -> i32 {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    let mut c = c.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    c.sort_unstable();

    a.iter()
        .copied()
        .find(|x| b.binary_search(x).is_ok() && c.binary_search(x).is_ok())
        .unwrap_or(NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_first_of_a_wins() {
        assert_eq!(find_smallest_common(&[1, 2, 3, 4], &[8, 7, 3], &[7, 3]), 3);
    }

    #[test]
    fn test_binary_duplicates_in_a() {
        assert_eq!(find_smallest_common(&[1, 4, 5, 5, 6], &[2, 5, 6, 7], &[3, 6, 8]), 6);
    }

    #[test]
    fn test_binary_no_common() {
        assert_eq!(find_smallest_common(&[12], &[42], &[91]), NOT_FOUND);
    }

    #[test]
    fn test_binary_common_only_in_b_and_c() {
        assert_eq!(find_smallest_common(&[1], &[2, 3], &[2, 3]), NOT_FOUND);
    }
}

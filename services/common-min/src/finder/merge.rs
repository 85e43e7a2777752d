//! Three-way merge over sorted copies of the inputs.
//!
//! Linear in the combined size once the arrays are sorted.

use super::NOT_FOUND;

pub fn find_smallest_common(a: &[i32], b: &[i32], c: &[i32]) -> i32 {
    let a = sorted(a);
    let b = sorted(b);
    let c = sorted(c);

    let (mut i, mut j, mut k) = (0, 0, 0);

    while i < a.len() && j < b.len() && k < c.len() {
        let (x, y, z) = (a[i], b[j], c[k]);

        if x == y && x == z {
            return x;
        }

        // Advance the smallest head; ties go to A, then B.
        if x <= y && x <= z {
            i += 1;
        } else if y <= x && y <= z {
            j += 1;
        } else {
            k += 1;
        }
    }

    NOT_FOUND
}

fn sorted(values: &[i32]) -> Vec<i32> {
    let mut values = values.to_vec();
    values.sort_unstable();
    values
}

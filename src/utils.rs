//! Common utilities used across the crate.

use ndarray::ArrayView1;

/// Index of the largest value in a row.
///
/// Ties resolve to the first occurrence. Returns 0 for an empty row.
#[inline]
pub fn argmax(row: ArrayView1<f64>) -> usize {
    let mut best = 0;
    let mut best_val = f64::NEG_INFINITY;
    for (idx, &val) in row.iter().enumerate() {
        if val > best_val {
            best = idx;
            best_val = val;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn argmax_picks_largest() {
        let row = array![0.1, 0.7, 0.2];
        assert_eq!(argmax(row.view()), 1);
    }

    #[test]
    fn argmax_ties_resolve_to_first() {
        let row = array![0.5, 0.5, 0.1];
        assert_eq!(argmax(row.view()), 0);
    }

    #[test]
    fn argmax_negative_values() {
        let row = array![-3.0, -1.0, -2.0];
        assert_eq!(argmax(row.view()), 1);
    }
}

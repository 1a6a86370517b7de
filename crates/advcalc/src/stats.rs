//! Aggregates over slices of a generic numeric type.
//!
//! Both functions treat an empty slice as zero. `average` casts the element
//! count into `T` once, so integer inputs truncate exactly like native
//! integer division; a count that does not fit in `T` yields `None`.

use num_traits::{NumCast, Zero};
use std::ops::Div;

/// Sum of `values`, starting from `T::zero()`.
pub fn sum<T>(values: &[T]) -> T
where
    T: Copy + Zero,
{
    values.iter().fold(T::zero(), |acc, &v| acc + v)
}

/// Arithmetic mean of `values`.
///
/// `Some(0)` when empty; `None` when `values.len()` is not representable in `T`
/// (e.g. 300 elements of `u8`).
pub fn average<T>(values: &[T]) -> Option<T>
where
    T: Copy + Zero + NumCast + Div<Output = T>,
{
    if values.is_empty() {
        return Some(T::zero());
    }
    let count = <T as NumCast>::from(values.len())?;
    Some(sum(values) / count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_slices_give_zero() {
        assert_eq!(sum::<i32>(&[]), 0);
        assert_eq!(average::<i32>(&[]), Some(0));
        assert_eq!(sum::<f64>(&[]), 0.0);
        assert_eq!(average::<f64>(&[]), Some(0.0));
    }

    #[test]
    fn integer_average_truncates() {
        assert_eq!(sum(&[1, 2, 4]), 7);
        assert_eq!(average(&[1, 2, 4]), Some(2));
        assert_eq!(average(&[-1i64, -2]), Some(-1));
    }

    #[test]
    fn float_average() {
        assert!((sum(&[30.8f64, 20.0]) - 50.8).abs() < 1e-12);
        let avg = average(&[1.0f64, 2.0, 4.0]).unwrap();
        assert!((avg - 7.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn count_wider_than_type_is_none() {
        assert_eq!(average(&vec![0u8; 300]), None);
        assert_eq!(average(&vec![0i8; 128]), None);
        // Largest representable counts still work.
        assert_eq!(average(&vec![1u8; 255]), Some(1));
        assert_eq!(average(&vec![0i8; 127]), Some(0));
    }

    proptest! {
        #[test]
        fn sum_matches_iter_sum(values in proptest::collection::vec(-1_000_000i64..1_000_000, 0..100)) {
            prop_assert_eq!(sum(&values), values.iter().sum::<i64>());
        }

        #[test]
        fn average_of_constant_is_constant(c in -1e6..1e6f64, n in 1usize..50) {
            let values = vec![c; n];
            let avg = average(&values).unwrap();
            prop_assert!((avg - c).abs() <= 1e-9 * c.abs().max(1.0));
        }
    }
}

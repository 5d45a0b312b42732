//! Utilities functions which do not linked to domain

use std::ops::Neg;

#[doc(hidden)]
#[macro_export]
/// Implements `From` trait for newtype-like enum variants
macro_rules! enum_trivial_from_impl {
    ($from:ty => $to:ty:$constructor:ident) => {
        impl From<$from> for $to {
            fn from(val: $from) -> Self {
                Self::$constructor(val)
            }
        }
    };
}

/// Allow splitting a signed value into its magnitude and sign
pub(crate) trait ToUnsigned: Default + Copy + PartialOrd + Neg<Output = Self> {
    /// Converts to absolute value and the flag of being non-negative
    fn unsigned_abs(self) -> (Self, bool) {
        if self >= Self::default() {
            (self, true)
        } else {
            (-self, false)
        }
    }
}

impl ToUnsigned for f64 {}

/// The sign of the most significant non-zero component.
///
/// When every component is zero the sign of the last one is returned,
/// which does not matter for the magnitude of the result.
pub(crate) fn leading_sign(components: &[f64]) -> f64 {
    components
        .iter()
        .find(|&&c| c != 0.0)
        .or_else(|| components.last())
        .map_or(1.0, |&c| if c.is_sign_negative() { -1.0 } else { 1.0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned() {
        assert_eq!(7.5_f64.unsigned_abs(), (7.5, true));
        assert_eq!((-7.5_f64).unsigned_abs(), (7.5, false));
        assert_eq!(0.0_f64.unsigned_abs(), (0.0, true));
    }

    #[test]
    fn negative_zero_is_not_negative() {
        let (abs, is_positive) = (-0.0_f64).unsigned_abs();
        assert_eq!(abs, 0.0);
        assert!(is_positive);
    }

    #[test]
    fn sign_of_the_first_non_zero() {
        assert_eq!(leading_sign(&[45.0, -59.0, -60.0]), 1.0);
        assert_eq!(leading_sign(&[-45.0, 59.0, 60.0]), -1.0);
        assert_eq!(leading_sign(&[0.0, -59.0, 60.0]), -1.0);
        assert_eq!(leading_sign(&[0.0, 0.0, -6.1]), -1.0);
        assert_eq!(leading_sign(&[0.0, 0.0, 6.1]), 1.0);
    }

    #[test]
    fn sign_of_all_zeros() {
        assert_eq!(leading_sign(&[0.0, 0.0, 0.0]), 1.0);
        assert_eq!(leading_sign(&[]), 1.0);
    }
}

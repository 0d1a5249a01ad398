use crate::{Bits, Float};

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping
/// the sign of negative zeros and then compares the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of
/// subsequent lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

/// The scaling factor for rounding away floating point error before
/// equality testing or hashing. It drops one least significant decimal
/// digit of `Float`'s precision.
#[cfg(feature = "f64")]
const ROUNDING_FACTOR: Float = 1e14;
#[cfg(not(feature = "f64"))]
const ROUNDING_FACTOR: Float = 1e5;

/// Helper function to normalize a floating point number before hashing or
/// equality testing.
///
/// This function zeros out not-a-number, reduces significant digits after
/// the decimal, and drops the sign of negative zero and returns the result
/// as a bit string. It is only public because the [`assert_close_enough`]
/// test macro uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    // Eliminate not-a-number.
    let mut f = if f.is_nan() { 0.0 } else { f };

    // Reduce precision.
    f = (ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0;
    }

    f.to_bits()
}

/// Normalize RGB coordinates for equality testing and hashing.
#[must_use = "function returns normalized bit strings and does not mutate original value"]
pub(crate) fn to_eq_coordinates(coordinates: &[Float; 3]) -> [Bits; 3] {
    let [c1, c2, c3] = *coordinates;
    [to_eq_bits(c1), to_eq_bits(c2), to_eq_bits(c3)]
}

/// Normalize HSV coordinates for equality testing and hashing.
///
/// In addition to the per-coordinate normalization of [`to_eq_bits`], the
/// hue sheds all full rotations and scales down to unit range before
/// rounding, so that hues differing by a multiple of 360 degrees compare
/// equal and hash alike.
#[must_use = "function returns normalized bit strings and does not mutate original value"]
pub(crate) fn to_eq_hsv_coordinates(coordinates: &[Float; 3]) -> [Bits; 3] {
    let [h, s, v] = *coordinates;
    let h = if h.is_nan() { 0.0 } else { h };
    [
        to_eq_bits(h.rem_euclid(360.0) / 360.0),
        to_eq_bits(s),
        to_eq_bits(v),
    ]
}

#[cfg(test)]
mod test {
    use super::{to_eq_bits, to_eq_coordinates, to_eq_hsv_coordinates};
    use crate::Float;

    #[test]
    fn test_eq_bits() {
        let delta = 2.0 * (10.0 as Float).powi(-(Float::DIGITS as i32));

        assert_eq!(to_eq_bits(Float::NAN), to_eq_bits(0.0));
        assert_eq!(to_eq_bits(-0.0), to_eq_bits(0.0));
        assert_eq!(to_eq_bits(0.12 + delta), to_eq_bits(0.12));
        assert_ne!(to_eq_bits(0.12), to_eq_bits(0.13));
    }

    #[test]
    fn test_hue_sheds_rotations() {
        assert_eq!(
            to_eq_hsv_coordinates(&[665.0, 0.1, 0.5]),
            to_eq_hsv_coordinates(&[305.0, 0.1, 0.5])
        );
        assert_eq!(
            to_eq_hsv_coordinates(&[-90.0, 1.0, 1.0]),
            to_eq_hsv_coordinates(&[270.0, 1.0, 1.0])
        );
        assert_ne!(
            to_eq_hsv_coordinates(&[90.0, 1.0, 1.0]),
            to_eq_hsv_coordinates(&[270.0, 1.0, 1.0])
        );
    }

    #[test]
    fn test_coordinates() {
        assert_eq!(
            to_eq_coordinates(&[Float::NAN, -0.0, 0.75]),
            to_eq_coordinates(&[0.0, 0.0, 0.75])
        );
    }
}

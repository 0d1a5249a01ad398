use crate::Float;

/// The angular width of one hue sector in degrees. Six sectors cover the
/// color wheel.
const SECTOR: Float = 60.0;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Convert the color coordinates to 24-bit representation.
///
/// This function assumes that the coordinates belong to an in-gamut RGB
/// color, i.e., that they range `0..=1`. Even if that is not the case, the
/// conversion automatically clamps coordinates to the range `0x00..=0xff`.
pub(crate) fn to_24bit(coordinates: &[Float; 3]) -> [u8; 3] {
    let [r, g, b] = *coordinates;
    [
        (r.clamp(0.0, 1.0) * 255.0).round() as u8,
        (g.clamp(0.0, 1.0) * 255.0).round() as u8,
        (b.clamp(0.0, 1.0) * 255.0).round() as u8,
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Select the hue for the given value and chroma.
///
/// The branch order is load-bearing: when several channels tie for the
/// maximum, green wins over blue and blue wins over red. Zero chroma has no
/// meaningful hue, so this function answers with zero instead of
/// not-a-number. The red fall-through may produce a negative hue, up to -60
/// degrees, when blue exceeds green; that raw quantity is returned without
/// wrapping it into `0..360`.
#[inline]
fn hue(value: Float, chroma: Float, r: Float, g: Float, b: Float) -> Float {
    if chroma == 0.0 {
        0.0
    } else if g == value {
        SECTOR * (2.0 + (b - r) / chroma)
    } else if b == value {
        SECTOR * (4.0 + (r - g) / chroma)
    } else {
        SECTOR * ((g - b) / chroma)
    }
}

/// Convert coordinates from RGB to HSV. This is a one-hop, direct
/// conversion.
///
/// Value is the channel maximum, chroma the spread between maximum and
/// minimum, and saturation the chroma relative to the value, or zero for
/// black. No coordinate is validated or clamped; out-of-range inputs flow
/// through the same arithmetic.
pub(crate) fn rgb_to_hsv(coordinates: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *coordinates;

    let value = r.max(g).max(b);
    let chroma = value - r.min(g).min(b);
    let saturation = if value == 0.0 { 0.0 } else { chroma / value };

    [hue(value, chroma, r, g, b), saturation, value]
}

/// Convert coordinates from HSV to RGB. This is a one-hop, direct
/// conversion.
///
/// Each channel follows the same piecewise formula, evaluated at offsets 5,
/// 3, and 1 for red, green, and blue. Since the offset folds into a
/// Euclidean remainder by 6, the reconstruction is periodic in the hue with
/// period 360 and accepts hues of any sign and magnitude.
pub(crate) fn hsv_to_rgb(coordinates: &[Float; 3]) -> [Float; 3] {
    let [h, s, v] = *coordinates;

    #[inline]
    fn channel(n: Float, h: Float, s: Float, v: Float) -> Float {
        let k = (n + h / SECTOR).rem_euclid(6.0);
        v - v * s * k.min(4.0 - k).clamp(0.0, 1.0)
    }

    [
        channel(5.0, h, s, v),
        channel(3.0, h, s, v),
        channel(1.0, h, s, v),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::{from_24bit, hsv_to_rgb, rgb_to_hsv, to_24bit};
    use crate::{assert_close_enough, Float};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    const BLACK: [Float; 3] = [0.0, 0.0, 0.0];
    const WHITE: [Float; 3] = [1.0, 1.0, 1.0];
    const RED: [Float; 3] = [1.0, 0.0, 0.0];
    const GREEN: [Float; 3] = [0.0, 1.0, 0.0];
    const BLUE: [Float; 3] = [0.0, 0.0, 1.0];

    const EPSILON: Float = 1e-6;

    fn assert_same_triple(actual: &[Float; 3], expected: &[Float; 3]) {
        assert_close_enough!(actual[0], expected[0]);
        assert_close_enough!(actual[1], expected[1]);
        assert_close_enough!(actual[2], expected[2]);
    }

    fn assert_within_epsilon(actual: &[Float; 3], expected: &[Float; 3]) {
        for (a, e) in actual.iter().zip(expected) {
            assert!(
                (a - e).abs() < EPSILON,
                "triples differ:\n{actual:?}\n{expected:?}"
            );
        }
    }

    #[test]
    fn test_primaries() {
        assert_close_enough!(rgb_to_hsv(&BLACK)[2], 0.0);
        assert_same_triple(&rgb_to_hsv(&WHITE), &[0.0, 0.0, 1.0]);
        assert_same_triple(&rgb_to_hsv(&RED), &[0.0, 1.0, 1.0]);
        assert_same_triple(&rgb_to_hsv(&GREEN), &[120.0, 1.0, 1.0]);
        assert_same_triple(&rgb_to_hsv(&BLUE), &[240.0, 1.0, 1.0]);
    }

    #[test]
    fn test_round_trip_named() {
        for rgb in [&BLACK, &WHITE, &RED, &GREEN, &BLUE] {
            assert_within_epsilon(&hsv_to_rgb(&rgb_to_hsv(rgb)), rgb);
        }
    }

    #[test]
    fn test_round_trip_grid() {
        // An 11x11x11 sweep of the unit cube, including all faces and
        // edges, i.e., all the places where a channel ties for the maximum
        // or the minimum.
        for r in 0..=10 {
            for g in 0..=10 {
                for b in 0..=10 {
                    let rgb = [
                        r as Float / 10.0,
                        g as Float / 10.0,
                        b as Float / 10.0,
                    ];
                    assert_within_epsilon(&hsv_to_rgb(&rgb_to_hsv(&rgb)), &rgb);
                }
            }
        }
    }

    #[test]
    fn test_round_trip_random() {
        let mut rng = StdRng::seed_from_u64(0x7469_6e67_65);
        for _ in 0..1_000 {
            let rgb = [
                rng.gen::<Float>(),
                rng.gen::<Float>(),
                rng.gen::<Float>(),
            ];
            assert_within_epsilon(&hsv_to_rgb(&rgb_to_hsv(&rgb)), &rgb);
        }
    }

    #[test]
    fn test_zero_value_always_black() {
        // Zero brightness dominates: every hue and saturation collapses to
        // black, hues outside 0..360 included.
        for h in -24..=24 {
            for s in 0..=10 {
                let hsv = [h as Float * 30.0, s as Float / 10.0, 0.0];
                assert_eq!(hsv_to_rgb(&hsv), BLACK);
            }
        }
    }

    #[test]
    fn test_zero_saturation_is_achromatic() {
        // Zero saturation makes the hue irrelevant: all three channels
        // reproduce the value exactly.
        for h in -24..=24 {
            for v in 0..=10 {
                let value = v as Float / 10.0;
                let rgb = hsv_to_rgb(&[h as Float * 30.0, 0.0, value]);
                assert_eq!(rgb, [value, value, value]);
            }
        }
    }

    #[test]
    fn test_green_beats_blue_on_tie() {
        // Green and blue tie for the maximum. Green's formula is checked
        // first and must answer, deterministically, with cyan.
        let hsv = rgb_to_hsv(&[0.2, 0.4, 0.4]);
        assert_same_triple(&hsv, &[180.0, 0.5, 0.4]);
    }

    #[test]
    fn test_red_branch_negative_hue() {
        // With red as the maximum and blue above green, the red
        // fall-through yields a raw negative hue. It is not wrapped into
        // 0..360, and the reconstruction still inverts it.
        let rgb = [0.8, 0.1, 0.3];
        let hsv = rgb_to_hsv(&rgb);
        assert!(hsv[0] < 0.0, "expected a negative hue, got {}", hsv[0]);
        assert_within_epsilon(&hsv_to_rgb(&hsv), &rgb);
    }

    #[test]
    fn test_reconstruction_is_periodic() {
        for (h1, h2) in [(480.0, 120.0), (-90.0, 270.0), (720.0, 0.0)] {
            let a = hsv_to_rgb(&[h1, 0.8, 0.6]);
            let b = hsv_to_rgb(&[h2, 0.8, 0.6]);
            assert_within_epsilon(&a, &b);
        }
    }

    #[test]
    fn test_24bit_bridging() {
        assert_eq!(to_24bit(&from_24bit(0x4d, 0x99, 0xe6)), [0x4d, 0x99, 0xe6]);
        // Out-of-range coordinates clamp instead of wrapping.
        assert_eq!(to_24bit(&[1.5, -0.25, 0.5]), [0xff, 0x00, 0x80]);
    }
}

use std::str::FromStr;

use crate::core::{
    format_hashed, from_24bit, hsv_to_rgb, parse_hashed, rgb_to_hsv, to_24bit, to_eq_coordinates,
    to_eq_hsv_coordinates,
};
use crate::error::ColorFormatError;
use crate::Float;

/// An additive RGB color.
///
/// Every coordinate is a relative channel intensity. In-gamut colors have
/// coordinates in unit range, but nothing enforces that: the type is a
/// plain value record and the conversions accept whatever it holds.
///
/// # Equality and Hashing
///
/// Instead of comparing raw floating point coordinates, this type
/// normalizes coordinates before equality testing or hashing. Both methods
/// perform the following steps:
///
///   * To turn coordinates into comparable entities, replace not-a-numbers
///     with positive zero;
///   * To allow for floating point error, multiply by 1e5/1e14 (depending
///     on [`Float`]'s type) and then round, dropping the least significant
///     digit;
///   * To make zeros comparable, replace negative zero with positive zero
///     (but only after rounding, as it may produce zeros);
///   * To convince Rust that coordinates are comparable, convert them to
///     bits.
///
/// ```
/// # use tinge::{Float, Rgb};
/// let delta = 2.0 * (10.0 as Float).powi(-(Float::DIGITS as i32));
/// assert_eq!(
///     Rgb::new(Float::NAN, 0.0, 0.12 + delta),
///     Rgb::new(0.0,        0.0, 0.12        )
/// );
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Rgb {
    /// The red channel.
    pub r: Float,
    /// The green channel.
    pub g: Float,
    /// The blue channel.
    pub b: Float,
}

/// A perceptual HSV color.
///
/// The hue is an angle on the color wheel in degrees, conventionally
/// `0..360`; saturation and value conventionally have unit range. As with
/// [`Rgb`], none of that is enforced.
///
/// # Equality and Hashing
///
/// Like [`Rgb`], this type normalizes coordinates to rounded bit strings
/// before equality testing or hashing. The hue additionally sheds all full
/// rotations first, so hues that differ by a multiple of 360 degrees
/// compare equal:
///
/// ```
/// # use tinge::Hsv;
/// assert_eq!(Hsv::new(540.0, 1.0, 1.0), Hsv::new(180.0, 1.0, 1.0));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Hsv {
    /// The hue in degrees.
    pub h: Float,
    /// The saturation.
    pub s: Float,
    /// The value, i.e., brightness.
    pub v: Float,
}

// --------------------------------------------------------------------------------------------------------------------

impl Rgb {
    /// Pure black, the zero of the additive model.
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    /// Pure white.
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);
    /// The red primary.
    pub const RED: Rgb = Rgb::new(1.0, 0.0, 0.0);
    /// The green primary.
    pub const GREEN: Rgb = Rgb::new(0.0, 1.0, 0.0);
    /// The blue primary.
    pub const BLUE: Rgb = Rgb::new(0.0, 0.0, 1.0);

    /// Create a new RGB color from its three channels.
    pub const fn new(r: Float, g: Float, b: Float) -> Self {
        Self { r, g, b }
    }

    /// Create a new RGB color from 24-bit integer coordinates, scaling
    /// each to unit range.
    ///
    /// ```
    /// # use tinge::Rgb;
    /// assert_eq!(Rgb::from_24bit(0xff, 0x00, 0x00), Rgb::RED);
    /// ```
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        from_24bit(r, g, b).into()
    }

    /// Convert this color to 24-bit integer coordinates.
    ///
    /// Coordinates outside unit range clamp to `0x00..=0xff`; in-range
    /// coordinates quantize to the nearest of the 256 steps.
    #[must_use = "method returns a new array and does not mutate original value"]
    pub fn to_24bit(&self) -> [u8; 3] {
        to_24bit(&[self.r, self.g, self.b])
    }

    /// Convert this color to HSV.
    ///
    /// The conversion is total and pure: it never fails, validates
    /// nothing, and is safe to call from any thread. The value is the
    /// channel maximum and the saturation is chroma over value, or zero
    /// for black. The hue is selected by whichever channel attains the
    /// maximum, green checked before blue before red; it is zero for
    /// achromatic colors and may come out negative (no wrap into
    /// `0..360`) when red is the maximum and blue exceeds green.
    ///
    /// ```
    /// # use tinge::{Hsv, Rgb};
    /// assert_eq!(Rgb::GREEN.to_hsv(), Hsv::new(120.0, 1.0, 1.0));
    /// assert_eq!(Rgb::new(0.0, 0.5, 0.5).to_hsv(), Hsv::new(180.0, 1.0, 0.5));
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to_hsv(&self) -> Hsv {
        rgb_to_hsv(&[self.r, self.g, self.b]).into()
    }
}

impl Hsv {
    /// Create a new HSV color from its three coordinates.
    pub const fn new(h: Float, s: Float, v: Float) -> Self {
        Self { h, s, v }
    }

    /// Convert this color to RGB.
    ///
    /// The conversion is total and pure. Each channel follows the same
    /// piecewise reconstruction, which is periodic in the hue with period
    /// 360 degrees. Zero value reconstructs to black no matter the hue and
    /// saturation, and zero saturation reconstructs to the achromatic
    /// gray at the value, no matter the hue.
    ///
    /// ```
    /// # use tinge::{Hsv, Rgb};
    /// assert_eq!(Hsv::new(240.0, 1.0, 1.0).to_rgb(), Rgb::BLUE);
    /// assert_eq!(Hsv::new(123.4, 0.0, 0.25).to_rgb(), Rgb::new(0.25, 0.25, 0.25));
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to_rgb(&self) -> Rgb {
        hsv_to_rgb(&[self.h, self.s, self.v]).into()
    }
}

// --------------------------------------------------------------------------------------------------------------------

impl From<[Float; 3]> for Rgb {
    fn from([r, g, b]: [Float; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for [Float; 3] {
    fn from(color: Rgb) -> Self {
        [color.r, color.g, color.b]
    }
}

impl From<[Float; 3]> for Hsv {
    fn from([h, s, v]: [Float; 3]) -> Self {
        Self { h, s, v }
    }
}

impl From<Hsv> for [Float; 3] {
    fn from(color: Hsv) -> Self {
        [color.h, color.s, color.v]
    }
}

impl FromStr for Rgb {
    type Err = ColorFormatError;

    /// Parse the string into an RGB color.
    ///
    /// This method recognizes the three and six digit hashed hexadecimal
    /// formats, with leading and trailing white space trimmed and hex
    /// digits in either case.
    ///
    /// ```
    /// # use tinge::Rgb;
    /// # use tinge::error::ColorFormatError;
    /// # use std::str::FromStr;
    /// let lime = Rgb::from_str("#a1d2ae")?;
    /// assert_eq!(lime, Rgb::from_24bit(0xa1, 0xd2, 0xae));
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [r, g, b] = parse_hashed(s.trim())?;
        Ok(Self::from_24bit(r, g, b))
    }
}

impl std::fmt::Display for Rgb {
    /// Format this color in hashed hexadecimal format.
    ///
    /// Formatting is lossy for colors that 24 bits cannot represent:
    /// coordinates clamp to unit range and quantize to 8 bits each.
    ///
    /// ```
    /// # use tinge::Rgb;
    /// assert_eq!(format!("{}", Rgb::from_24bit(0x4d, 0x99, 0xe6)), "#4d99e6");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_hashed(self.to_24bit(), f)
    }
}

// --------------------------------------------------------------------------------------------------------------------

impl PartialEq for Rgb {
    fn eq(&self, other: &Self) -> bool {
        to_eq_coordinates(&[self.r, self.g, self.b])
            == to_eq_coordinates(&[other.r, other.g, other.b])
    }
}

impl Eq for Rgb {}

impl std::hash::Hash for Rgb {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        let [n1, n2, n3] = to_eq_coordinates(&[self.r, self.g, self.b]);
        n1.hash(state);
        n2.hash(state);
        n3.hash(state);
    }
}

impl PartialEq for Hsv {
    fn eq(&self, other: &Self) -> bool {
        to_eq_hsv_coordinates(&[self.h, self.s, self.v])
            == to_eq_hsv_coordinates(&[other.h, other.s, other.v])
    }
}

impl Eq for Hsv {}

impl std::hash::Hash for Hsv {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        let [n1, n2, n3] = to_eq_hsv_coordinates(&[self.h, self.s, self.v]);
        n1.hash(state);
        n2.hash(state);
        n3.hash(state);
    }
}

// --------------------------------------------------------------------------------------------------------------------

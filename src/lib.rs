//! # Tinge
//!
//! Tinge converts between additive RGB and perceptual HSV, nothing more.
//!
//! The two conversions are exposed as methods on the two value types:
//!
//!   * [`Rgb::to_hsv`] computes value as the channel maximum, saturation as
//!     chroma over value, and hue from whichever channel attains the
//!     maximum, checking green before blue before red.
//!   * [`Hsv::to_rgb`] reconstructs each channel with the shared piecewise
//!     formula `v - v*s*max(0, min(k, 4-k, 1))`, which is periodic in hue
//!     with period 360.
//!
//! Both conversions are total. They never panic, never allocate, and never
//! validate: coordinates outside the conventional unit and degree ranges
//! flow through the same arithmetic. Callers that need clamping clamp
//! before converting.
//!
//! ```
//! # use tinge::{Hsv, Rgb};
//! let teal = Rgb::new(0.0, 0.5, 0.5).to_hsv();
//! assert_eq!(teal, Hsv::new(180.0, 1.0, 0.5));
//! assert_eq!(teal.to_rgb(), Rgb::new(0.0, 0.5, 0.5));
//! ```
//!
//! Beside the conversion core, [`Rgb`] bridges to the representations demo
//! and terminal code actually traffics in: 24-bit coordinates with
//! [`Rgb::from_24bit`] and [`Rgb::to_24bit`], and hashed hexadecimal
//! strings through [`FromStr`](std::str::FromStr) and
//! [`Display`](std::fmt::Display).
//!
//! The crate has one feature flag, **`f64`**, which is enabled by default
//! and selects `f64` as [`Float`] and `u64` as [`Bits`] instead of `f32`
//! and `u32`.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod color;
mod core;
pub mod error;

pub use color::{Hsv, Rgb};

#[doc(hidden)]
pub use core::to_eq_bits;

mod conversion;
mod equality;
mod string;

// conversion
pub(crate) use conversion::{from_24bit, hsv_to_rgb, rgb_to_hsv, to_24bit};

// equality
pub use equality::to_eq_bits;
pub(crate) use equality::{to_eq_coordinates, to_eq_hsv_coordinates};

// string
pub(crate) use string::{format_hashed, parse_hashed};

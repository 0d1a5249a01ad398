//! Utility module with tinge's errors.

/// An erroneous color format.
///
/// The conversions themselves are total and never fail; the only fallible
/// surface of this crate is parsing a color from its hashed hexadecimal
/// notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format that does not start with the `#` prefix.
    UnknownFormat,

    /// A color format with unexpected characters or an unexpected number of
    /// characters. For example, `#00` is missing a hexadecimal digit,
    /// whereas `#💩00` has the correct length but contains an unsuitable
    /// character.
    UnexpectedCharacters,

    /// A color format that has a malformed hexadecimal number as one of its
    /// coordinates. For example, `#efg` has a malformed third coordinate.
    MalformedHex,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ColorFormatError::*;

        match *self {
            UnknownFormat => f.write_str("color format should start with `#`"),
            UnexpectedCharacters => {
                f.write_str("color format should have 3 or 6 hexadecimal digits after `#`")
            }
            MalformedHex => f.write_str("color format has a malformed hexadecimal coordinate"),
        }
    }
}

impl std::error::Error for ColorFormatError {}

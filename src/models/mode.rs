use std::fmt;
use std::str::FromStr;

use crate::error::ChmodError;

/// A permission mode: rwx triads plus any higher bits, which are carried as-is.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Mode(u32);

impl Mode {
    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// The mode applied to directories: every triad that can read can also
    /// enter, so readable directories stay listable.
    pub const fn dir_mode(self) -> Self {
        let mut bits = self.0;
        if bits & 0o400 != 0 {
            bits |= 0o100;
        }
        if bits & 0o40 != 0 {
            bits |= 0o10;
        }
        if bits & 0o4 != 0 {
            bits |= 0o1;
        }
        Self(bits)
    }

    /// Parse the way chmod(1) reads a numeric mode: always octal, with an
    /// optional `0o` prefix.
    pub fn from_octal_str(input: &str) -> Result<Self, ChmodError> {
        let trimmed = input.trim();
        let digits = trimmed
            .strip_prefix("0o")
            .or_else(|| trimmed.strip_prefix("0O"))
            .unwrap_or(trimmed);
        parse_radix(digits, 8)
            .map(Self)
            .ok_or_else(|| ChmodError::InvalidMode(input.to_owned()))
    }
}

fn parse_radix(digits: &str, radix: u32) -> Option<u32> {
    // from_str_radix accepts a leading sign, which a mode never has
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u32::from_str_radix(digits, radix).ok()
}

impl From<u32> for Mode {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

/// Numeric strings are read as the integer they spell: plain digits are
/// decimal, and `0o`, `0x` and `0b` prefixes select the radix.
impl FromStr for Mode {
    type Err = ChmodError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let prefixed = |lower: &str, upper: &str| {
            trimmed
                .strip_prefix(lower)
                .or_else(|| trimmed.strip_prefix(upper))
        };

        let bits = if let Some(digits) = prefixed("0o", "0O") {
            parse_radix(digits, 8)
        } else if let Some(digits) = prefixed("0x", "0X") {
            parse_radix(digits, 16)
        } else if let Some(digits) = prefixed("0b", "0B") {
            parse_radix(digits, 2)
        } else {
            parse_radix(trimmed, 10)
        };

        bits.map(Self)
            .ok_or_else(|| ChmodError::InvalidMode(input.to_owned()))
    }
}

impl TryFrom<&str> for Mode {
    type Error = ChmodError;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        input.parse()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#05o}", self.0)
    }
}

//! Condition-code flags.
//!
//! `CMP` is the only writer. Each compare replaces all three flags, so exactly
//! one of `LT`, `GT`, `EQ` is set afterwards regardless of the previous state.

use std::cmp::Ordering;
use std::fmt;

/// Bit of `LT` in the packed `FL` register (`0b00000LGE`).
pub const FL_LT: u8 = 0b0000_0100;
/// Bit of `GT` in the packed `FL` register.
pub const FL_GT: u8 = 0b0000_0010;
/// Bit of `EQ` in the packed `FL` register.
pub const FL_EQ: u8 = 0b0000_0001;

/// The `FL` register.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    /// Set when the first compare operand was smaller.
    pub lt: bool,
    /// Set when the first compare operand was larger.
    pub gt: bool,
    /// Set when both compare operands were equal.
    pub eq: bool,
}

impl Flags {
    /// All flags clear (power-on state).
    pub const CLEAR: Self = Self {
        lt: false,
        gt: false,
        eq: false,
    };

    /// Computes the flags for `CMP a, b` using unsigned ordering.
    pub fn compare(a: u8, b: u8) -> Self {
        Self::from(a.cmp(&b))
    }

    /// Packs the flags into the `0b00000LGE` layout.
    pub const fn bits(self) -> u8 {
        (if self.lt { FL_LT } else { 0 })
            | (if self.gt { FL_GT } else { 0 })
            | (if self.eq { FL_EQ } else { 0 })
    }

    /// Unpacks flags from the `0b00000LGE` layout; upper bits are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        Self {
            lt: bits & FL_LT != 0,
            gt: bits & FL_GT != 0,
            eq: bits & FL_EQ != 0,
        }
    }
}

impl From<Ordering> for Flags {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Less => Self {
                lt: true,
                ..Self::CLEAR
            },
            Ordering::Greater => Self {
                gt: true,
                ..Self::CLEAR
            },
            Ordering::Equal => Self {
                eq: true,
                ..Self::CLEAR
            },
        }
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bit = |set: bool, c: char| if set { c } else { '-' };
        write!(
            f,
            "{}{}{}",
            bit(self.lt, 'L'),
            bit(self.gt, 'G'),
            bit(self.eq, 'E')
        )
    }
}

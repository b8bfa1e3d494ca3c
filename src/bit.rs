//! The two-valued logic signal and its boundary coercions

use crate::error::GateError;
use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};
use std::str::FromStr;

/// A two-valued logic signal, canonically written `0` or `1`.
///
/// `Bit` is the only value type the evaluation core accepts. Raw input — a
/// manual toggle, a scanned card label — must be reduced to a `Bit` at the
/// boundary, either strictly via [`FromStr`] (only `"0"` and `"1"` accepted)
/// or with the lenient [`Bit::coerce`] rule. Once constructed, a `Bit` can
/// never hold a third value.
///
/// # Examples
///
/// ```
/// use gate_engine::Bit;
///
/// let a: Bit = "1".parse().unwrap();
/// let b = Bit::coerce("0");
///
/// assert_eq!(a & b, Bit::Zero);
/// assert_eq!(a | b, Bit::One);
/// assert_eq!(!a, Bit::Zero);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bit {
    /// Logic low, written `0`
    #[cfg_attr(feature = "serde", serde(rename = "0"))]
    Zero,
    /// Logic high, written `1`
    #[cfg_attr(feature = "serde", serde(rename = "1"))]
    One,
}

impl Bit {
    /// Reduce raw boundary input to a `Bit`. Never fails.
    ///
    /// This is the complete reduction rule the engine expects every input
    /// acquisition path to apply: the leading integer of the input decides
    /// the bit — nonzero is [`Bit::One`]; zero, or input with no leading
    /// integer at all, is [`Bit::Zero`].
    ///
    /// # Examples
    ///
    /// ```
    /// use gate_engine::Bit;
    ///
    /// assert_eq!(Bit::coerce("1"), Bit::One);
    /// assert_eq!(Bit::coerce("0"), Bit::Zero);
    /// assert_eq!(Bit::coerce(" 7 "), Bit::One);
    /// assert_eq!(Bit::coerce("00"), Bit::Zero);
    /// assert_eq!(Bit::coerce("high"), Bit::Zero);
    /// assert_eq!(Bit::coerce(""), Bit::Zero);
    /// ```
    pub fn coerce(raw: &str) -> Bit {
        let unsigned = raw.trim();
        let unsigned = unsigned
            .strip_prefix(['+', '-'])
            .unwrap_or(unsigned);
        let end = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(unsigned.len());
        if unsigned[..end].bytes().any(|b| b != b'0') {
            Bit::One
        } else {
            Bit::Zero
        }
    }

    /// The complement of this bit
    pub fn flip(self) -> Bit {
        match self {
            Bit::Zero => Bit::One,
            Bit::One => Bit::Zero,
        }
    }

    /// `true` iff this bit is [`Bit::One`]
    pub fn is_one(self) -> bool {
        self == Bit::One
    }

    /// The canonical symbol, `"0"` or `"1"`
    pub fn as_str(self) -> &'static str {
        match self {
            Bit::Zero => "0",
            Bit::One => "1",
        }
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        if value {
            Bit::One
        } else {
            Bit::Zero
        }
    }
}

impl From<Bit> for bool {
    fn from(bit: Bit) -> Self {
        bit == Bit::One
    }
}

/// Strict parse: accepts exactly `"0"` or `"1"`.
///
/// Anything else is [`GateError::InvalidBit`]. Use [`Bit::coerce`] for the
/// lenient boundary reduction.
impl FromStr for Bit {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(Bit::Zero),
            "1" => Ok(Bit::One),
            other => Err(GateError::InvalidBit {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logical AND: `a & b`
impl BitAnd for Bit {
    type Output = Bit;

    fn bitand(self, rhs: Bit) -> Bit {
        Bit::from(self.is_one() && rhs.is_one())
    }
}

/// Logical OR: `a | b`
impl BitOr for Bit {
    type Output = Bit;

    fn bitor(self, rhs: Bit) -> Bit {
        Bit::from(self.is_one() || rhs.is_one())
    }
}

/// Logical XOR: `a ^ b`
impl BitXor for Bit {
    type Output = Bit;

    fn bitxor(self, rhs: Bit) -> Bit {
        Bit::from(self != rhs)
    }
}

/// Logical NOT: `!a`
impl Not for Bit {
    type Output = Bit;

    fn not(self) -> Bit {
        self.flip()
    }
}

//! The closed gate enumeration and its evaluation semantics

use crate::bit::Bit;
use crate::error::GateError;
use std::fmt;
use std::str::FromStr;

/// One of the six supported boolean gates.
///
/// The enumeration is closed: every lookup on `GateKind` is an exhaustive
/// match with no fallback arm, so adding a seventh gate is a compile-time
/// exercise in following the type errors. An invalid gate kind is therefore
/// unrepresentable inside the crate; it can only appear at a string
/// boundary, where [`FromStr`] rejects it with [`GateError::UnknownGate`].
///
/// # Examples
///
/// ```
/// use gate_engine::{Bit, GateKind};
///
/// let gate: GateKind = "nand".parse().unwrap();
/// assert_eq!(gate, GateKind::Nand);
/// assert_eq!(gate.evaluate(Bit::One, Bit::One), Bit::Zero);
/// assert_eq!(gate.symbol(), "⊼");
///
/// assert!("XNOR".parse::<GateKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum GateKind {
    /// 1 iff both inputs are 1
    And,
    /// 1 iff at least one input is 1
    Or,
    /// 1 iff the first input is 0; the second input is ignored
    Not,
    /// 0 iff both inputs are 1, else 1
    Nand,
    /// 1 iff both inputs are 0, else 0
    Nor,
    /// 1 iff the inputs differ
    Xor,
}

impl GateKind {
    /// All six gates, in the order the learning screens present them
    pub const ALL: [GateKind; 6] = [
        GateKind::And,
        GateKind::Or,
        GateKind::Not,
        GateKind::Xor,
        GateKind::Nand,
        GateKind::Nor,
    ];

    /// Apply this gate to a pair of inputs.
    ///
    /// Pure and total: no state, no side effects, identical inputs always
    /// yield the identical output. [`GateKind::Not`] consumes only `a`; the
    /// `b` argument is accepted and ignored so all six gates share one call
    /// shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use gate_engine::{Bit, GateKind};
    ///
    /// assert_eq!(GateKind::And.evaluate(Bit::One, Bit::One), Bit::One);
    /// assert_eq!(GateKind::Xor.evaluate(Bit::One, Bit::One), Bit::Zero);
    /// assert_eq!(GateKind::Not.evaluate(Bit::Zero, Bit::One), Bit::One);
    /// ```
    pub fn evaluate(self, a: Bit, b: Bit) -> Bit {
        let (a, b) = (bool::from(a), bool::from(b));
        Bit::from(match self {
            GateKind::And => a && b,
            GateKind::Or => a || b,
            GateKind::Not => !a,
            GateKind::Nand => !(a && b),
            GateKind::Nor => !(a || b),
            GateKind::Xor => a != b,
        })
    }

    /// The canonical upper-case name
    pub fn name(self) -> &'static str {
        match self {
            GateKind::And => "AND",
            GateKind::Or => "OR",
            GateKind::Not => "NOT",
            GateKind::Nand => "NAND",
            GateKind::Nor => "NOR",
            GateKind::Xor => "XOR",
        }
    }

    /// The Unicode operator glyph used next to the gate name
    pub fn symbol(self) -> &'static str {
        match self {
            GateKind::And => "⋀",
            GateKind::Or => "⋁",
            GateKind::Not => "¬",
            GateKind::Nand => "⊼",
            GateKind::Nor => "⊽",
            GateKind::Xor => "⊕",
        }
    }

    /// The icon identifier consumed by the presentation layer
    ///
    /// The concrete icon set is a UI concern; the contract here is only
    /// that the mapping is deterministic and covers every gate.
    pub fn icon_key(self) -> &'static str {
        match self {
            GateKind::And => "gate-and",
            GateKind::Or => "gate-or",
            GateKind::Not => "gate-not",
            GateKind::Nand => "gate-nand",
            GateKind::Nor => "gate-nor",
            GateKind::Xor => "gate-xor",
        }
    }

    /// The algebraic form of the gate's output
    pub fn algebraic(self) -> &'static str {
        match self {
            GateKind::And => "A · B",
            GateKind::Or => "A + B",
            GateKind::Not => "¬A",
            GateKind::Nand => "¬(A · B)",
            GateKind::Nor => "¬(A + B)",
            GateKind::Xor => "A ⊕ B",
        }
    }

    /// One-line teaching description, as shown on the learning screens
    pub fn description(self) -> &'static str {
        match self {
            GateKind::And => "Outputs 1 only when every input is 1.",
            GateKind::Or => "Outputs 1 when at least one input is 1.",
            GateKind::Not => "Inverts its input: 0 becomes 1 and 1 becomes 0.",
            GateKind::Nand => "The inverse of AND: outputs 0 only when every input is 1.",
            GateKind::Nor => "The inverse of OR: outputs 1 only when every input is 0.",
            GateKind::Xor => "Outputs 1 when exactly one input is 1.",
        }
    }
}

/// Apply `gate` to a pair of inputs.
///
/// Free-function form of [`GateKind::evaluate`], for callers that read
/// better with the gate as an argument.
///
/// # Examples
///
/// ```
/// use gate_engine::{evaluate, Bit, GateKind};
///
/// assert_eq!(evaluate(GateKind::Nor, Bit::Zero, Bit::Zero), Bit::One);
/// ```
pub fn evaluate(gate: GateKind, a: Bit, b: Bit) -> Bit {
    gate.evaluate(a, b)
}

/// Case-insensitive parse of a gate name.
///
/// This is the single entry point through which external labels (manual
/// selection values, classifier output) reach the closed enumeration.
/// Labels outside the six gates — including `"XNOR"` — are rejected with
/// [`GateError::UnknownGate`] rather than defaulted.
impl FromStr for GateKind {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AND" => Ok(GateKind::And),
            "OR" => Ok(GateKind::Or),
            "NOT" => Ok(GateKind::Not),
            "NAND" => Ok(GateKind::Nand),
            "NOR" => Ok(GateKind::Nor),
            "XOR" => Ok(GateKind::Xor),
            _ => Err(GateError::UnknownGate {
                label: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        for gate in GateKind::ALL {
            assert_eq!(gate.name().parse::<GateKind>().unwrap(), gate);
            assert_eq!(
                gate.name().to_ascii_lowercase().parse::<GateKind>().unwrap(),
                gate
            );
        }
        assert_eq!(" nand ".parse::<GateKind>().unwrap(), GateKind::Nand);
    }

    #[test]
    fn test_parse_rejects_unknown_labels() {
        for label in ["XNOR", "NAN", "", "AND OR"] {
            let err = label.parse::<GateKind>().unwrap_err();
            assert_eq!(
                err,
                GateError::UnknownGate {
                    label: label.to_string()
                }
            );
        }
    }

    #[test]
    fn test_lookups_are_distinct_per_gate() {
        // Total coverage with no fallback means no two gates may share a
        // symbol, icon, or name.
        for (i, a) in GateKind::ALL.iter().enumerate() {
            for b in &GateKind::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
                assert_ne!(a.symbol(), b.symbol());
                assert_ne!(a.icon_key(), b.icon_key());
            }
        }
    }

    #[test]
    fn test_display_matches_name() {
        for gate in GateKind::ALL {
            assert_eq!(gate.to_string(), gate.name());
        }
    }

    #[test]
    fn test_not_ignores_second_input() {
        for b in [Bit::Zero, Bit::One] {
            assert_eq!(GateKind::Not.evaluate(Bit::Zero, b), Bit::One);
            assert_eq!(GateKind::Not.evaluate(Bit::One, b), Bit::Zero);
        }
    }
}

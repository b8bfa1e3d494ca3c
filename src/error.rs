//! Error types for the gate engine
//!
//! Inside the crate the gate enumeration is closed, so an invalid gate kind
//! is unrepresentable. Errors exist only at the string boundaries: parsing a
//! gate name or bit literal, and accepting a classifier reading.

use std::fmt;
use std::io;

/// The error type for boundary validation failures
///
/// Every variant carries the offending input so the caller can report
/// exactly what was rejected instead of silently defaulting to a bit value.
#[derive(Debug, Clone, PartialEq)]
pub enum GateError {
    /// A gate label outside the closed six-variant enumeration
    ///
    /// Raised when parsing a gate name or mapping a classifier label onto
    /// [`GateKind`](crate::GateKind). `XNOR` is deliberately rejected: the
    /// enumeration is closed at the six gates the application teaches.
    UnknownGate {
        /// The label that failed to map onto a gate kind
        label: String,
    },

    /// A bit literal that is neither `"0"` nor `"1"`
    ///
    /// Raised only by the strict parse. The lenient boundary reduction
    /// ([`Bit::coerce`](crate::Bit::coerce)) never fails.
    InvalidBit {
        /// The rejected literal
        value: String,
    },

    /// A classifier reading below the acceptance threshold
    ///
    /// The reading must be re-captured; a low-confidence label is never
    /// coerced onto a gate or bit.
    LowConfidence {
        /// The label the classifier produced
        label: String,
        /// The reported confidence of the reading
        confidence: f32,
        /// The policy threshold the reading failed to meet
        threshold: f32,
    },
}

impl fmt::Display for GateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateError::UnknownGate { label } => write!(
                f,
                "Unknown gate kind {:?}. Expected one of: AND, OR, NOT, NAND, NOR, XOR.",
                label
            ),
            GateError::InvalidBit { value } => {
                write!(f, "Invalid bit {:?}. Expected \"0\" or \"1\".", value)
            }
            GateError::LowConfidence {
                label,
                confidence,
                threshold,
            } => write!(
                f,
                "Classifier reading {:?} has confidence {:.2}, below the acceptance threshold {:.2}. \
                 Re-scan the card instead of guessing.",
                label, confidence, threshold
            ),
        }
    }
}

impl std::error::Error for GateError {}

// Conversion to io::Error so callers mixing file output and evaluation can
// use a single error type, as the CLI does.
impl From<GateError> for io::Error {
    fn from(err: GateError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_gate_display() {
        let err = GateError::UnknownGate {
            label: "XNOR".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("XNOR"));
        assert!(msg.contains("AND, OR, NOT, NAND, NOR, XOR"));
    }

    #[test]
    fn test_invalid_bit_display() {
        let err = GateError::InvalidBit {
            value: "2".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Invalid bit"));
        assert!(msg.contains('2'));
    }

    #[test]
    fn test_low_confidence_display() {
        let err = GateError::LowConfidence {
            label: "AND".to_string(),
            confidence: 0.42,
            threshold: 0.60,
        };
        let msg = err.to_string();
        assert!(msg.contains("0.42"));
        assert!(msg.contains("0.60"));
    }

    #[test]
    fn test_gate_error_to_io_error() {
        let err = GateError::UnknownGate {
            label: "NOPE".to_string(),
        };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}

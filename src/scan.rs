//! Boundary mapping from classifier readings onto the closed enumerations
//!
//! Card scanning hands captured frames to an opaque on-device classifier
//! and gets back a label with a confidence score. That pipeline is entirely
//! external; the only contract the engine places on it is implemented here:
//! a reading either maps onto a [`GateKind`]/[`Bit`] or is rejected. No
//! image, model, or confidence state ever reaches the evaluation core.

use crate::bit::Bit;
use crate::error::GateError;
use crate::gate::GateKind;

/// A single classifier result for one scanned card
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanReading {
    /// The predicted label, e.g. `"NAND"` for a gate card or `"1"` for an
    /// input card
    pub label: String,
    /// The classifier's confidence in `label`, in `0.0..=1.0`
    pub confidence: f32,
}

impl ScanReading {
    /// Convenience constructor
    pub fn new(label: impl Into<String>, confidence: f32) -> ScanReading {
        ScanReading {
            label: label.into(),
            confidence,
        }
    }
}

/// Acceptance policy for classifier readings.
///
/// A reading below `min_confidence` is rejected outright — re-scanning is
/// always preferable to guessing a gate or bit from a shaky prediction.
///
/// # Examples
///
/// ```
/// use gate_engine::{Bit, GateKind, ScanPolicy, ScanReading};
///
/// let policy = ScanPolicy::default();
///
/// let gate = policy.gate_from(&ScanReading::new("XOR", 0.93)).unwrap();
/// assert_eq!(gate, GateKind::Xor);
///
/// let bit = policy.bit_from(&ScanReading::new("1", 0.88)).unwrap();
/// assert_eq!(bit, Bit::One);
///
/// assert!(policy.gate_from(&ScanReading::new("XOR", 0.31)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanPolicy {
    /// Minimum confidence a reading must reach to be accepted
    pub min_confidence: f32,
}

impl Default for ScanPolicy {
    fn default() -> Self {
        ScanPolicy {
            min_confidence: 0.60,
        }
    }
}

impl ScanPolicy {
    /// A policy with an explicit confidence threshold
    pub fn new(min_confidence: f32) -> ScanPolicy {
        ScanPolicy { min_confidence }
    }

    /// Map a gate-card reading onto the closed gate enumeration.
    ///
    /// Fails with [`GateError::LowConfidence`] below the threshold and
    /// [`GateError::UnknownGate`] for labels outside the six gates; a label
    /// the classifier was never trained to reject must not silently become
    /// a gate.
    pub fn gate_from(&self, reading: &ScanReading) -> Result<GateKind, GateError> {
        self.check_confidence(reading)?;
        reading.label.parse()
    }

    /// Reduce an input-card reading to a [`Bit`].
    ///
    /// Accepted readings go through the standard boundary reduction
    /// ([`Bit::coerce`]), so a noisy non-numeric label reads as 0 rather
    /// than failing. Only the confidence check can reject here.
    pub fn bit_from(&self, reading: &ScanReading) -> Result<Bit, GateError> {
        self.check_confidence(reading)?;
        Ok(Bit::coerce(&reading.label))
    }

    fn check_confidence(&self, reading: &ScanReading) -> Result<(), GateError> {
        if reading.confidence < self.min_confidence {
            return Err(GateError::LowConfidence {
                label: reading.label.clone(),
                confidence: reading.confidence,
                threshold: self.min_confidence,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_from_accepts_confident_reading() {
        let policy = ScanPolicy::default();
        let reading = ScanReading::new("nor", 0.91);
        assert_eq!(policy.gate_from(&reading).unwrap(), GateKind::Nor);
    }

    #[test]
    fn test_gate_from_rejects_low_confidence_before_label_check() {
        let policy = ScanPolicy::new(0.75);
        // Label is garbage too, but confidence must be the reported failure
        // so the UI asks for a re-scan instead of claiming a bad card.
        let reading = ScanReading::new("XNOR", 0.20);
        let err = policy.gate_from(&reading).unwrap_err();
        assert!(matches!(err, GateError::LowConfidence { .. }));
    }

    #[test]
    fn test_gate_from_rejects_unknown_label() {
        let policy = ScanPolicy::default();
        let reading = ScanReading::new("XNOR", 0.99);
        let err = policy.gate_from(&reading).unwrap_err();
        assert_eq!(
            err,
            GateError::UnknownGate {
                label: "XNOR".to_string()
            }
        );
    }

    #[test]
    fn test_bit_from_applies_coercion() {
        let policy = ScanPolicy::default();
        assert_eq!(
            policy.bit_from(&ScanReading::new("1", 0.80)).unwrap(),
            Bit::One
        );
        assert_eq!(
            policy.bit_from(&ScanReading::new("0", 0.80)).unwrap(),
            Bit::Zero
        );
        // Non-numeric label reads as 0, it does not error
        assert_eq!(
            policy.bit_from(&ScanReading::new("blurry", 0.80)).unwrap(),
            Bit::Zero
        );
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let policy = ScanPolicy::new(0.60);
        let reading = ScanReading::new("1", 0.60);
        assert_eq!(policy.bit_from(&reading).unwrap(), Bit::One);
    }
}

//! Tests for the classifier-reading boundary
//!
//! The scan flow captures three cards in sequence: input A, input B, then
//! the gate card. These tests walk that flow end to end against the
//! evaluation core, with the classifier itself mocked as readings.

use gate_engine::{Bit, GateError, GateKind, ScanPolicy, ScanReading, TruthTable};

#[test]
fn test_full_scan_flow() {
    let policy = ScanPolicy::default();

    let a = policy.bit_from(&ScanReading::new("1", 0.94)).unwrap();
    let b = policy.bit_from(&ScanReading::new("0", 0.89)).unwrap();
    let gate = policy.gate_from(&ScanReading::new("XOR", 0.97)).unwrap();

    assert_eq!(gate.evaluate(a, b), Bit::One);

    // The result screen highlights the scanned row in the table.
    let table = TruthTable::for_gate(gate);
    let row = table.row_for(a, b);
    assert_eq!(row.output, Bit::One);
}

#[test]
fn test_low_confidence_gate_reading_is_rejected() {
    let policy = ScanPolicy::new(0.80);
    let err = policy
        .gate_from(&ScanReading::new("AND", 0.55))
        .unwrap_err();
    assert_eq!(
        err,
        GateError::LowConfidence {
            label: "AND".to_string(),
            confidence: 0.55,
            threshold: 0.80,
        }
    );
}

#[test]
fn test_unknown_label_never_becomes_a_gate() {
    let policy = ScanPolicy::default();
    for label in ["XNOR", "BUFFER", "gate-and", ""] {
        assert!(
            policy.gate_from(&ScanReading::new(label, 0.99)).is_err(),
            "{:?} must not map onto the enumeration",
            label
        );
    }
}

#[test]
fn test_every_canonical_label_maps_back() {
    let policy = ScanPolicy::default();
    for gate in GateKind::ALL {
        let reading = ScanReading::new(gate.name(), 1.0);
        assert_eq!(policy.gate_from(&reading).unwrap(), gate);
    }
}

#[test]
fn test_bit_reading_uses_lenient_reduction() {
    let policy = ScanPolicy::default();
    // Anything that is not a nonzero number reads as 0.
    for label in ["0", "00", "", "card", "zero"] {
        assert_eq!(
            policy.bit_from(&ScanReading::new(label, 0.90)).unwrap(),
            Bit::Zero
        );
    }
    for label in ["1", "7", " 1 "] {
        assert_eq!(
            policy.bit_from(&ScanReading::new(label, 0.90)).unwrap(),
            Bit::One
        );
    }
}

#[test]
fn test_policy_threshold_is_caller_tunable() {
    let strict = ScanPolicy::new(0.95);
    let lax = ScanPolicy::new(0.10);
    let reading = ScanReading::new("NOR", 0.50);

    assert!(strict.gate_from(&reading).is_err());
    assert_eq!(lax.gate_from(&reading).unwrap(), GateKind::Nor);
}

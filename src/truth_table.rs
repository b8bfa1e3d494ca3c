//! Truth-table derivation and text rendering

use crate::bit::Bit;
use crate::gate::GateKind;
use std::fmt;
use std::ops::Index;

/// The fixed enumeration order of the two-bit input domain
pub const INPUT_ORDER: [(Bit, Bit); 4] = [
    (Bit::Zero, Bit::Zero),
    (Bit::Zero, Bit::One),
    (Bit::One, Bit::Zero),
    (Bit::One, Bit::One),
];

/// One input/output combination of a gate's truth table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TruthRow {
    /// First input
    pub input_a: Bit,
    /// Second input
    pub input_b: Bit,
    /// The gate's output for this input pair
    pub output: Bit,
}

/// The complete, ordered truth table of a gate.
///
/// Every table has exactly four rows, enumerating the input domain in the
/// fixed order (0,0), (0,1), (1,0), (1,1). This includes [`GateKind::Not`]:
/// the table keeps the ignored second input column so NOT renders uniformly
/// next to the two-input gates, which is how the table views present it.
/// Derivation is a pure function of the gate — the same gate always yields
/// the same table.
///
/// # Examples
///
/// ```
/// use gate_engine::{Bit, GateKind, TruthTable};
///
/// let table = TruthTable::for_gate(GateKind::Or);
/// assert_eq!(table.rows().len(), 4);
/// assert_eq!(table[0].output, Bit::Zero); // 0 + 0 = 0
/// assert_eq!(table[3].output, Bit::One);  // 1 + 1 = 1
///
/// // Highlight lookup for the currently selected inputs:
/// let row = table.row_for(Bit::One, Bit::Zero);
/// assert_eq!(row.output, Bit::One);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruthTable {
    gate: GateKind,
    rows: [TruthRow; 4],
}

impl TruthTable {
    /// Derive the truth table for `gate`.
    pub fn for_gate(gate: GateKind) -> TruthTable {
        let rows = INPUT_ORDER.map(|(a, b)| TruthRow {
            input_a: a,
            input_b: b,
            output: gate.evaluate(a, b),
        });
        TruthTable { gate, rows }
    }

    /// The gate this table was derived from
    pub fn gate(&self) -> GateKind {
        self.gate
    }

    /// All four rows, in the fixed domain order
    pub fn rows(&self) -> &[TruthRow; 4] {
        &self.rows
    }

    /// The row matching the given input pair.
    ///
    /// Total: the table enumerates the entire input domain, so every pair
    /// has exactly one row.
    pub fn row_for(&self, a: Bit, b: Bit) -> &TruthRow {
        &self.rows[Self::row_index(a, b)]
    }

    /// The position of the input pair within the fixed domain order
    pub fn row_index(a: Bit, b: Bit) -> usize {
        match (a, b) {
            (Bit::Zero, Bit::Zero) => 0,
            (Bit::Zero, Bit::One) => 1,
            (Bit::One, Bit::Zero) => 2,
            (Bit::One, Bit::One) => 3,
        }
    }

    /// Iterate over the rows in order
    pub fn iter(&self) -> std::slice::Iter<'_, TruthRow> {
        self.rows.iter()
    }
}

impl Index<usize> for TruthTable {
    type Output = TruthRow;

    fn index(&self, index: usize) -> &TruthRow {
        &self.rows[index]
    }
}

impl<'a> IntoIterator for &'a TruthTable {
    type Item = &'a TruthRow;
    type IntoIter = std::slice::Iter<'a, TruthRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Render the table as monospace text.
///
/// ```text
///  A B | XOR
/// -----+----
///  0 0 |  0
///  0 1 |  1
///  1 0 |  1
///  1 1 |  0
/// ```
impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " A B | {}", self.gate.name())?;
        writeln!(f, "-----+-{}", "-".repeat(self.gate.name().len()))?;
        for row in &self.rows {
            writeln!(f, " {} {} |  {}", row.input_a, row.input_b, row.output)?;
        }
        Ok(())
    }
}

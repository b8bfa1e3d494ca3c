//! # Gate Engine
//!
//! Pure evaluation of the six two-input boolean gates — AND, OR, NOT, NAND,
//! NOR, XOR — and derivation of their truth tables, plus the presentation
//! lookups (operator glyph, icon key) and boundary coercions the gate-cards
//! learning app performs at its input edges.
//!
//! ## Overview
//!
//! The engine is stateless and synchronous. Evaluation is a pure function
//! of `(GateKind, Bit, Bit)`: no I/O, no locks, no hidden state, so it may
//! be called concurrently from any number of threads without coordination.
//! The gate enumeration is closed at six variants and every lookup over it
//! is an exhaustive match — an invalid gate kind is a compile-time error
//! inside the crate and a [`GateError::UnknownGate`] at string boundaries.
//!
//! ## Evaluating a gate
//!
//! ```
//! use gate_engine::{evaluate, Bit, GateKind};
//!
//! assert_eq!(evaluate(GateKind::And, Bit::One, Bit::One), Bit::One);
//! assert_eq!(evaluate(GateKind::Xor, Bit::One, Bit::One), Bit::Zero);
//!
//! // NOT consumes only its first input; the second is ignored.
//! assert_eq!(evaluate(GateKind::Not, Bit::Zero, Bit::One), Bit::One);
//! ```
//!
//! ## Deriving a truth table
//!
//! Every table has exactly four rows in the fixed domain order
//! (0,0), (0,1), (1,0), (1,1) — including NOT, whose ignored second column
//! is kept so it renders uniformly next to the two-input gates:
//!
//! ```
//! use gate_engine::{Bit, GateKind, TruthTable};
//!
//! let table = TruthTable::for_gate(GateKind::Or);
//! for row in &table {
//!     assert_eq!(row.output, GateKind::Or.evaluate(row.input_a, row.input_b));
//! }
//!
//! // The row to highlight for the currently selected inputs:
//! let row = table.row_for(Bit::One, Bit::Zero);
//! assert_eq!(row.output, Bit::One);
//! ```
//!
//! ## Validating boundary input
//!
//! Raw strings never reach the evaluation core. Manual input goes through
//! the strict parse or the lenient [`Bit::coerce`] reduction; classifier
//! readings from card scanning go through a [`ScanPolicy`]:
//!
//! ```
//! use gate_engine::{Bit, GateKind, ScanPolicy, ScanReading};
//!
//! let gate: GateKind = "nand".parse().unwrap();
//! let a = Bit::coerce("1");
//!
//! let policy = ScanPolicy::default();
//! let b = policy.bit_from(&ScanReading::new("0", 0.97)).unwrap();
//!
//! assert_eq!(gate.evaluate(a, b), Bit::One);
//! ```
//!
//! ## Features
//!
//! - `serde` — `Serialize`/`Deserialize` on [`Bit`], [`GateKind`],
//!   [`TruthRow`], and [`ScanReading`].
//! - `cli` — the `gates` command-line binary (implies `serde`).

pub mod bit;
pub mod error;
pub mod gate;
pub mod scan;
pub mod truth_table;

pub use bit::Bit;
pub use error::GateError;
pub use gate::{evaluate, GateKind};
pub use scan::{ScanPolicy, ScanReading};
pub use truth_table::{TruthRow, TruthTable, INPUT_ORDER};

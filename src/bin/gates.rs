//! Gate Engine - Command Line Interface
//!
//! Evaluate gates, print truth tables, and list the gate reference data
//! from the terminal.

use clap::{Parser, Subcommand, ValueEnum};
use gate_engine::{Bit, GateError, GateKind, TruthTable};
use std::process;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Monospace text table
    Text,
    /// JSON, one object per row/gate
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "gates")]
#[command(about = "Boolean gate calculator and truth-table explorer", long_about = None)]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a gate and print the output bit
    Eval {
        /// Gate name (AND, OR, NOT, NAND, NOR, XOR; case-insensitive)
        #[arg(value_parser = GateKind::from_str)]
        gate: GateKind,
        /// First input, strictly 0 or 1
        #[arg(value_parser = Bit::from_str)]
        a: Bit,
        /// Second input, strictly 0 or 1 (ignored by NOT; defaults to 0)
        #[arg(value_parser = Bit::from_str)]
        b: Option<Bit>,
    },
    /// Print the truth table of a gate
    Table {
        /// Gate name (AND, OR, NOT, NAND, NOR, XOR; case-insensitive)
        #[arg(value_parser = GateKind::from_str)]
        gate: GateKind,
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
        /// Mark the row matching these inputs, e.g. --highlight 1,0
        #[arg(long, value_name = "A,B")]
        highlight: Option<String>,
    },
    /// List all gates with symbol, icon key, and description
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args.command) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(command: Command) -> Result<(), GateError> {
    match command {
        Command::Eval { gate, a, b } => {
            let b = b.unwrap_or(Bit::Zero);
            println!("{}", gate.evaluate(a, b));
        }
        Command::Table {
            gate,
            format,
            highlight,
        } => {
            let table = TruthTable::for_gate(gate);
            let highlight = highlight.as_deref().map(parse_highlight).transpose()?;
            match format {
                Format::Text => print_table(&table, highlight),
                Format::Json => {
                    let json = serde_json::json!({
                        "gate": table.gate(),
                        "rows": table.rows(),
                    });
                    println!("{}", serde_json::to_string_pretty(&json).expect("valid json"));
                }
            }
        }
        Command::List { format } => match format {
            Format::Text => {
                for gate in GateKind::ALL {
                    println!(
                        "{:<4} {}  {:<9}  {:<9}  {}",
                        gate.name(),
                        gate.symbol(),
                        gate.algebraic(),
                        gate.icon_key(),
                        gate.description()
                    );
                }
            }
            Format::Json => {
                let gates: Vec<_> = GateKind::ALL
                    .iter()
                    .map(|gate| {
                        serde_json::json!({
                            "gate": gate,
                            "symbol": gate.symbol(),
                            "iconKey": gate.icon_key(),
                            "algebraic": gate.algebraic(),
                            "description": gate.description(),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&gates).expect("valid json"));
            }
        },
    }
    Ok(())
}

/// Parse the `--highlight A,B` argument into a strict bit pair
fn parse_highlight(raw: &str) -> Result<(Bit, Bit), GateError> {
    let (a, b) = raw.split_once(',').ok_or_else(|| GateError::InvalidBit {
        value: raw.to_string(),
    })?;
    Ok((a.trim().parse()?, b.trim().parse()?))
}

fn print_table(table: &TruthTable, highlight: Option<(Bit, Bit)>) {
    let name = table.gate().name();
    println!(" A B | {}", name);
    println!("-----+-{}", "-".repeat(name.len()));
    for row in table {
        let marker = match highlight {
            Some((a, b)) if row.input_a == a && row.input_b == b => "  <--",
            _ => "",
        };
        println!(" {} {} |  {}{}", row.input_a, row.input_b, row.output, marker);
    }
}

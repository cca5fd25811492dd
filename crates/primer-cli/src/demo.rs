//! The fixed demonstration printed by `primer`.

use std::io::Write;

use primer_core::{evaluate, greet, Operation};
use tracing::{debug, trace};

use crate::error::CliError;

const GREETING_NAME: &str = "World";

const EXPRESSIONS: [(Operation, i32, i32); 2] =
    [(Operation::Add, 2, 3), (Operation::Multiply, 4, 5)];

/// Writes the greeting followed by one `lhs op rhs = result` line per
/// sample expression.
pub fn render<W: Write>(out: &mut W) -> Result<(), CliError> {
    writeln!(out, "{}", greet(GREETING_NAME))?;
    trace!(name = GREETING_NAME, "greeted");

    for (op, lhs, rhs) in EXPRESSIONS {
        let result = evaluate(op, lhs, rhs)?;
        debug!(%op, lhs, rhs, result, "evaluated expression");
        writeln!(out, "{lhs} {op} {rhs} = {result}")?;
    }

    Ok(())
}

//! JSON output for CLI commands

use std::io::{self, Write};

use serde::Serialize;
use serde_json::Value;

use super::errors::CliResult;

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    write_to(&mut io::stdout(), data)
}

fn write_to<W: Write>(writer: &mut W, data: Value) -> CliResult<()> {
    let response = Envelope { status: "ok", data };

    serde_json::to_writer(&mut *writer, &response)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}

#[derive(Serialize)]
struct Envelope {
    status: &'static str,
    data: Value,
}

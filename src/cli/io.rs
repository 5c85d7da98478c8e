//! Output handling for CLI
//!
//! JSON mode writes one envelope per line:
//! - `{"status":"ok","data":...}`
//! - `{"status":"error","code":...,"message":...}`

use std::io::Write;

use serde_json::Value;

use super::errors::CliResult;

/// Write a success envelope
pub fn write_response<W: Write>(out: &mut W, data: Value) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });

    serde_json::to_writer(&mut *out, &response)?;
    writeln!(out)?;
    out.flush()?;

    Ok(())
}

/// Write an error envelope
pub fn write_error<W: Write>(out: &mut W, code: &str, message: &str) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    });

    serde_json::to_writer(&mut *out, &response)?;
    writeln!(out)?;
    out.flush()?;

    Ok(())
}

/// Write a block of text followed by a newline
pub fn write_text<W: Write>(out: &mut W, text: &str) -> CliResult<()> {
    writeln!(out, "{}", text)?;
    out.flush()?;

    Ok(())
}

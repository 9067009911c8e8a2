//! JSON export

use serde::Serialize;
use std::io::Write;

use crate::error::{InvestError, InvestResult};

use super::snapshot::Snapshot;

/// Write a snapshot as JSON
pub fn export_json<T: Serialize, W: Write>(
    snapshot: &Snapshot<T>,
    writer: &mut W,
    pretty: bool,
) -> InvestResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, snapshot)
    } else {
        serde_json::to_writer(&mut *writer, snapshot)
    }
    .map_err(|e| InvestError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| InvestError::Export(e.to_string()))?;
    Ok(())
}

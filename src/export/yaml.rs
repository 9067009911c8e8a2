//! YAML export
//!
//! Same payload as JSON, with a short comment header for people reading
//! the file.

use serde::Serialize;
use std::io::Write;

use crate::error::{InvestError, InvestResult};

use super::snapshot::Snapshot;

/// Write a snapshot as YAML
pub fn export_yaml<T: Serialize, W: Write>(
    snapshot: &Snapshot<T>,
    writer: &mut W,
) -> InvestResult<()> {
    write_header(snapshot, writer).map_err(|e| InvestError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, snapshot).map_err(|e| InvestError::Export(e.to_string()))?;

    Ok(())
}

fn write_header<T: Serialize, W: Write>(
    snapshot: &Snapshot<T>,
    writer: &mut W,
) -> std::io::Result<()> {
    writeln!(writer, "# InvestPro {} snapshot", snapshot.section)?;
    writeln!(writer, "# Generated: {}", snapshot.exported_at)?;
    writeln!(writer, "# App Version: {}", snapshot.app_version)?;
    writeln!(writer, "#")?;
    writeln!(writer, "# Simulated data for demonstration only.")?;
    writeln!(writer)
}

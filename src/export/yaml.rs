//! YAML export and import
//!
//! Same structure as the JSON export, preceded by a comment header.

use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::export::json::FullExport;
use crate::models::FinanceSnapshot;

fn export_err(e: impl std::fmt::Display) -> FinanceError {
    FinanceError::Export(e.to_string())
}

/// Export the full snapshot to YAML
pub fn export_full_yaml<W: Write>(snapshot: &FinanceSnapshot, writer: &mut W) -> FinanceResult<()> {
    let export = FullExport::from_snapshot(snapshot);

    writeln!(writer, "# FinanceMaster Full Export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer, "#").map_err(export_err)?;
    writeln!(writer, "# Restore with: financemaster import <file>").map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(export_err)?;

    Ok(())
}

/// Parse and validate a YAML export (comment lines are ignored by the parser)
pub fn import_from_yaml(yaml_str: &str) -> FinanceResult<FullExport> {
    let export: FullExport =
        serde_yaml::from_str(yaml_str).map_err(|e| FinanceError::Import(e.to_string()))?;

    export.validate().map_err(FinanceError::Import)?;

    Ok(export)
}

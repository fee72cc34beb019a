//! Export module for FinanceMaster
//!
//! Provides complete data export functionality in multiple formats:
//! - CSV: transactions and budget progress (spreadsheet-compatible)
//! - JSON: machine-readable full export, importable
//! - YAML: human-readable full export, importable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_budgets_csv, export_transactions_csv};
pub use json::{export_full_json, import_from_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_full_yaml, import_from_yaml};

use std::path::Path;

use crate::error::FinanceResult;

/// Parse an export file, choosing YAML for `.yaml`/`.yml` and JSON otherwise
pub fn import_from_str(path: &Path, contents: &str) -> FinanceResult<FullExport> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
            import_from_yaml(contents)
        }
        _ => import_from_json(contents),
    }
}

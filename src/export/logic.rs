// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{PlanExport, rows_from_summary};
use crate::export::xlsx::export_xlsx;
use crate::models::plan_summary::PlanSummary;
use crate::ui::messages::warning;
use crate::utils::path::{ensure_parent_dir, expand_tilde};

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the computed plan to `file` in the given format.
    ///
    /// An existing file is replaced only with `force` or after confirmation.
    pub fn export(
        summary: &PlanSummary,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        if file.trim().is_empty() {
            return Err(AppError::Export("missing output file".into()));
        }

        let path = expand_tilde(file);
        ensure_writable(&path, force)?;
        ensure_parent_dir(&path)?;

        if summary.schedule.items.is_empty() {
            warning("No entries in the plan: exporting an empty schedule.");
        }

        match format {
            ExportFormat::Csv => export_csv(&rows_from_summary(summary), &path)?,
            ExportFormat::Json => export_json(&PlanExport::from_summary(summary), &path)?,
            ExportFormat::Xlsx => export_xlsx(&rows_from_summary(summary), &path)?,
        }

        Ok(())
    }
}

//! Activity log export for sharing and external analysis.
//!
//! Four formats:
//!
//! - **Text**: the canonical log lines verbatim, one per line — exactly
//!   what the sink's `export_as_text` produces.
//! - **CSV**: one row per record for spreadsheet tools.
//! - **JSON**: structured records for programmatic processing.
//! - **Excel**: a formatted worksheet for reports.
//!
//! The default filename is `activity_log_<ISO-date>` with the
//! format-appropriate extension.

use crate::libs::activity_log::ActivityLog;
use crate::libs::formatter::format_duration_secs;
use crate::libs::messages::Message;
use crate::libs::record::LogRecord;
use crate::msg_bail_anyhow;
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Canonical log lines, newline separated.
    Text,
    /// Comma-separated values for spreadsheet applications.
    Csv,
    /// Structured JSON for programmatic processing.
    Json,
    /// Excel worksheet with formatted headers.
    Excel,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

/// One record flattened to display strings for structured export.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportRecord {
    /// Sequential number in append order (1-based)
    pub index: usize,
    /// Monitored identity
    pub identity: String,
    /// Period state glyph (ACTIVE / INACTIVE)
    pub state: String,
    /// Period duration as human-readable text
    pub duration: String,
    /// Period start timestamp
    pub start: String,
    /// Period end timestamp
    pub end: String,
    /// Last presence hint seen during the period, if any
    pub hint: String,
    /// What produced the record (Transition / MonitorStop / Heartbeat)
    pub kind: String,
}

impl ExportRecord {
    fn from_record(index: usize, record: &LogRecord) -> Self {
        Self {
            index,
            identity: record.identity.clone(),
            state: record.state.glyph().to_string(),
            duration: format_duration_secs(record.duration_seconds),
            start: record.start_time.format("%Y-%m-%d %H:%M:%S").to_string(),
            end: record.end_time.format("%Y-%m-%d %H:%M:%S").to_string(),
            hint: record.presence_hint.clone().unwrap_or_default(),
            kind: format!("{:?}", record.kind),
        }
    }
}

/// Export handler: format plus output destination.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter, generating the dated default filename when no
    /// output path is given.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("activity_log_{}", Local::now().format("%Y-%m-%d"));
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, format.extension())));

        Self { format, output_path }
    }

    /// Writes the log in the configured format and returns the output path.
    pub async fn export(&self, log: &ActivityLog) -> Result<PathBuf> {
        match self.format {
            ExportFormat::Text => {
                let text = log.export_as_text().await?;
                if text.is_empty() {
                    msg_bail_anyhow!(Message::NoLogsToExport);
                }
                File::create(&self.output_path)?.write_all(text.as_bytes())?;
            }
            ExportFormat::Csv => {
                let records = self.gather_records(log).await?;
                self.export_csv(&records)?;
            }
            ExportFormat::Json => {
                let records = self.gather_records(log).await?;
                let json = serde_json::to_string_pretty(&records)?;
                File::create(&self.output_path)?.write_all(json.as_bytes())?;
            }
            ExportFormat::Excel => {
                let records = self.gather_records(log).await?;
                self.export_excel(&records)?;
            }
        }

        Ok(self.output_path.clone())
    }

    async fn gather_records(&self, log: &ActivityLog) -> Result<Vec<ExportRecord>> {
        let records = log.records().await?;
        if records.is_empty() {
            msg_bail_anyhow!(Message::NoLogsToExport);
        }
        Ok(records
            .iter()
            .enumerate()
            .map(|(i, record)| ExportRecord::from_record(i + 1, record))
            .collect())
    }

    fn export_csv(&self, records: &[ExportRecord]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;

        wtr.write_record(["Index", "Identity", "State", "Duration", "Start", "End", "Hint", "Kind"])?;
        for record in records {
            wtr.write_record(&[
                record.index.to_string(),
                record.identity.clone(),
                record.state.clone(),
                record.duration.clone(),
                record.start.clone(),
                record.end.clone(),
                record.hint.clone(),
                record.kind.clone(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_excel(&self, records: &[ExportRecord]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        let headers = ["Index", "Identity", "State", "Duration", "Start", "End", "Hint", "Kind"];
        for (col, header) in headers.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }

        for (i, record) in records.iter().enumerate() {
            let row = (i + 1) as u32;
            worksheet.write_number(row, 0, record.index as f64)?;
            worksheet.write_string(row, 1, &record.identity)?;
            worksheet.write_string(row, 2, &record.state)?;
            worksheet.write_string(row, 3, &record.duration)?;
            worksheet.write_string(row, 4, &record.start)?;
            worksheet.write_string(row, 5, &record.end)?;
            worksheet.write_string(row, 6, &record.hint)?;
            worksheet.write_string(row, 7, &record.kind)?;
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}

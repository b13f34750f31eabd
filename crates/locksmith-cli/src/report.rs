//! Report writers for audit results.
//!
//! Three sinks: a terminal table, a pretty-printed JSON file, and a CSV
//! file. All consume the same enriched credential list and do no further
//! computation.

use chrono::Local;
use clap::ValueEnum;
use comfy_table::{ContentArrangement, Table};
use locksmith_core::{Credential, LocksmithError, Result};
use std::fs;
use std::path::PathBuf;

/// Selectable report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReporterKind {
    /// Table on stdout.
    Console,
    /// Pretty-printed JSON file.
    Json,
    /// CSV file.
    Csv,
}

/// Sink for enriched credentials.
pub trait ReportWriter {
    /// Write the full credential list to the sink.
    fn write(&self, credentials: &[Credential]) -> Result<()>;
}

/// Build a writer for the requested format.
///
/// File formats fall back to `locksmith-report-YYYY-MM-DD.{json,csv}` when
/// no output path is given, with a warning.
pub fn create(kind: ReporterKind, output: Option<PathBuf>) -> Box<dyn ReportWriter> {
    match kind {
        ReporterKind::Console => Box::new(ConsoleReport),
        ReporterKind::Json => Box::new(JsonReport {
            output: output.unwrap_or_else(|| default_output("json")),
        }),
        ReporterKind::Csv => Box::new(CsvReport {
            output: output.unwrap_or_else(|| default_output("csv")),
        }),
    }
}

fn default_output(extension: &str) -> PathBuf {
    let date = Local::now().format("%Y-%m-%d");
    let path = PathBuf::from(format!("locksmith-report-{date}.{extension}"));
    tracing::warn!(
        "no output file specified, using default {}",
        path.display()
    );
    path
}

/// Terminal table report.
pub struct ConsoleReport;

impl ReportWriter for ConsoleReport {
    fn write(&self, credentials: &[Credential]) -> Result<()> {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec![
            "Id", "Title", "Username", "Password", "Reused", "Pwned", "HTTPS",
        ]);

        for cred in credentials {
            table.add_row(vec![
                cred.id.clone(),
                cred.title.clone(),
                cred.username.clone(),
                cred.password.clone(),
                cred.reuse_count.to_string(),
                cred.is_pwned.to_string(),
                cred.https_usage.to_string(),
            ]);
        }

        println!("{table}");
        Ok(())
    }
}

/// Pretty-printed JSON file report.
pub struct JsonReport {
    output: PathBuf,
}

impl ReportWriter for JsonReport {
    fn write(&self, credentials: &[Credential]) -> Result<()> {
        let json = serde_json::to_string_pretty(credentials)
            .map_err(|e| LocksmithError::Report(e.to_string()))?;
        fs::write(&self.output, json)?;
        tracing::info!("wrote JSON report to {}", self.output.display());
        Ok(())
    }
}

/// CSV file report.
pub struct CsvReport {
    output: PathBuf,
}

impl ReportWriter for CsvReport {
    fn write(&self, credentials: &[Credential]) -> Result<()> {
        let mut lines = vec!["Id,Title,Username,Password,ReuseCount,IsPwned,HttpsUsage".to_string()];

        for cred in credentials {
            lines.push(
                [
                    csv_field(&cred.id),
                    csv_field(&cred.title),
                    csv_field(&cred.username),
                    csv_field(&cred.password),
                    cred.reuse_count.to_string(),
                    cred.is_pwned.to_string(),
                    cred.https_usage.to_string(),
                ]
                .join(","),
            );
        }

        fs::write(&self.output, lines.join("\n"))?;
        tracing::info!("wrote CSV report to {}", self.output.display());
        Ok(())
    }
}

/// Quote a field when it contains a separator, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

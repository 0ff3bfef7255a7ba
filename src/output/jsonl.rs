#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per line:
//! 1. One result record per checked field, in check order
//! 2. One status record

use crate::config::ValidatorConfig;
use crate::report::CheckReport;
use crate::types::Field;
use serde::Serialize;

/// JSONL output formatter
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format a check report as JSONL
    pub fn format(&self, report: &CheckReport) -> String {
        let mut output = String::new();

        for outcome in &report.outcomes {
            let record = ResultRecord {
                record_type: "result",
                field: outcome.field,
                valid: outcome.is_valid(),
                code: outcome.error.as_ref().map(|e| e.code()),
                message: outcome.error.as_ref().map(|e| e.to_string()),
            };
            push_line(&mut output, &record);
        }

        let status = StatusRecord {
            record_type: "status",
            valid: report.is_valid(),
            fields_checked: report.outcomes.len() as u64,
        };
        push_line(&mut output, &status);

        output
    }

    /// Format the effective configuration as a single JSONL record
    pub fn format_config(&self, config: &ValidatorConfig) -> String {
        let mut output = String::new();
        let record = ConfigRecord {
            record_type: "config",
            config,
        };
        push_line(&mut output, &record);
        output
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn push_line<T: Serialize>(output: &mut String, record: &T) {
    if let Ok(json) = serde_json::to_string(record) {
        output.push_str(&json);
        output.push('\n');
    }
}

/// Result record for JSONL output
#[derive(Debug, Serialize)]
struct ResultRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    field: Field,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

/// Status record for JSONL output
#[derive(Debug, Serialize)]
struct StatusRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    valid: bool,
    fields_checked: u64,
}

/// Config record for JSONL output
#[derive(Debug, Serialize)]
struct ConfigRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    #[serde(flatten)]
    config: &'a ValidatorConfig,
}

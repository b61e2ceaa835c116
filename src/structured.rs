use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analysis::DomainReport;
use crate::stats::RunSummary;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AnalysisOutput {
    pub metadata: OutputMetadata,
    pub domains: Vec<DomainReport>,
    pub summary: RunSummary,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct OutputMetadata {
    pub tool_name: String,
    pub version: String,
    pub generated_at: DateTime<Utc>,
}

pub fn emit_json(domains: Vec<DomainReport>, summary: RunSummary) -> Result<()> {
    let output = AnalysisOutput {
        metadata: OutputMetadata {
            tool_name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
        },
        domains,
        summary,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

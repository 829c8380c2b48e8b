//! Report generation module
//!
//! Turns analysis results into human or machine readable summaries and
//! YARA rules.

use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::analyzer::RtfAnalyzer;

pub mod formatter;
pub mod templates;
pub mod yara;

pub use formatter::ReportFormatter;
pub use templates::{TemplateContext, TemplateEngine, TemplateValue};
pub use yara::{escape_yara_string, generate_yara_rule, generate_rules};

/// Report output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    PlainText,
    Json,
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "plain" => Ok(ReportFormat::PlainText),
            "json" => Ok(ReportFormat::Json),
            other => Err(ReportError::FormatError(format!("Unknown report format: {}", other))),
        }
    }
}

/// Observation as shown in a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportObservation {
    pub id: &'static str,
    pub description: &'static str,
}

/// Summary of a single analysed document
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub source: String,
    pub size: usize,
    pub sha256: String,
    pub observations: Vec<ReportObservation>,
    pub loose_strings: Vec<String>,
    pub strict_strings: Vec<String>,
}

impl AnalysisReport {
    pub fn new(source: impl Into<String>, analyzer: &RtfAnalyzer) -> Self {
        let findings = analyzer.findings();
        let info = analyzer.document_info();

        Self {
            source: source.into(),
            size: info.size,
            sha256: info.sha256.clone(),
            observations: findings
                .observations
                .iter()
                .map(|obs| ReportObservation {
                    id: obs.id(),
                    description: obs.description(),
                })
                .collect(),
            loose_strings: findings.loose_strings.iter().cloned().collect(),
            strict_strings: findings.strict_strings.iter().cloned().collect(),
        }
    }
}

/// Report generation errors
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Template error: {0}")]
    TemplateError(String),

    #[error("Format error: {0}")]
    FormatError(String),

    #[error("Rule {0} has no strings")]
    EmptyRule(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//! Report formatter implementation

use super::{AnalysisReport, ReportError, ReportFormat};

/// Formats report data into the supported output formats
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn format(report: &AnalysisReport, format: ReportFormat) -> Result<String, ReportError> {
        match format {
            ReportFormat::PlainText => Ok(Self::to_text(report)),
            ReportFormat::Json => Self::to_json(report),
        }
    }

    fn to_text(report: &AnalysisReport) -> String {
        let mut output = String::new();
        output.push_str("RTF Signature Report\n");
        output.push_str("====================\n\n");
        output.push_str(&format!("Source:  {}\n", report.source));
        output.push_str(&format!("Size:    {} bytes\n", report.size));
        output.push_str(&format!("SHA-256: {}\n", report.sha256));

        output.push_str("\nObservations:\n");
        if report.observations.is_empty() {
            output.push_str("  (none)\n");
        }
        for obs in &report.observations {
            output.push_str(&format!("  {}: {}\n", obs.id, obs.description));
        }

        for (title, strings) in [
            ("Loose strings", &report.loose_strings),
            ("Strict strings", &report.strict_strings),
        ] {
            output.push_str(&format!("\n{}:\n", title));
            if strings.is_empty() {
                output.push_str("  (none)\n");
            }
            for s in strings {
                output.push_str(&format!("  {}\n", s));
            }
        }

        output
    }

    fn to_json(report: &AnalysisReport) -> Result<String, ReportError> {
        serde_json::to_string_pretty(report)
            .map_err(|e| ReportError::SerializationError(e.to_string()))
    }
}

//! rtfsig - find the interesting parts of RTF files to signature
//!
//! The analyzer reads an RTF document as ASCII text, validates its header and
//! runs a set of scanners looking for identifiers that tend to be unique to a
//! document or its author: revision save IDs, picture identifiers and sizes,
//! and the document information group. Results are split into loose and
//! strict strings and can be turned into YARA rules.
//!
//! ```no_run
//! use rtfsig::{AnalysisConfig, RtfAnalyzer};
//!
//! let analyzer = RtfAnalyzer::from_file("sample.rtf", &AnalysisConfig::default())?;
//! for observation in &analyzer.findings().observations {
//!     println!("{}: {}", observation.id(), observation.description());
//! }
//! # Ok::<(), rtfsig::Error>(())
//! ```

pub mod analyzer;
pub mod config;
pub mod error;
pub mod hash_utils;
pub mod observations;
pub mod report;
pub mod scanner;
pub mod utils;

/// Version reported by the CLI and embedded in generated rules
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use analyzer::{AnalysisInput, DocumentInfo, Findings, RtfAnalyzer};
pub use config::{AnalysisConfig, Config, RuleConfig};
pub use error::{Error, Result};
pub use observations::{Observation, OBSERVATIONS};
pub use report::{
    generate_rules, generate_yara_rule, AnalysisReport, ReportError, ReportFormat,
    ReportFormatter,
};
pub use scanner::{Extraction, Scanner};

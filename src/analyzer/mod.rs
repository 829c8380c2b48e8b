//! RTF Analyzer Module
//!
//! Drives a single document through normalization, header validation and
//! every enabled scanner, collecting the results into [`Findings`]. A new
//! analyzer is created for each document; nothing is shared between runs.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument, warn};

use crate::{
    config::AnalysisConfig,
    error::{Error, Result},
    hash_utils::sha256_hex,
    observations::Observation,
    scanner::default_scanners,
};

pub mod findings;
pub mod normalizer;
pub mod validator;

pub use self::{
    findings::Findings,
    normalizer::{normalize, TextView},
    validator::{validate_header, HeaderCheck},
};

/// Where the document to analyse comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisInput {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

impl AnalysisInput {
    /// Builds an input from optional parts, as accepted by embedding callers.
    ///
    /// At least one part is required. When both are given the path is used
    /// and the buffer is ignored.
    pub fn from_parts(path: Option<PathBuf>, data: Option<Vec<u8>>) -> Result<Self> {
        match (path, data) {
            (Some(path), Some(_)) => {
                warn!("Both a path and a data buffer were supplied, using {}", path.display());
                Ok(AnalysisInput::Path(path))
            }
            (Some(path), None) => Ok(AnalysisInput::Path(path)),
            (None, Some(data)) => Ok(AnalysisInput::Bytes(data)),
            (None, None) => Err(Error::InvalidInput("Need one of filename or data".into())),
        }
    }

    fn into_bytes(self) -> Result<Vec<u8>> {
        match self {
            AnalysisInput::Path(path) => fs::read(&path).map_err(|e| Error::from_read(e, path)),
            AnalysisInput::Bytes(data) => Ok(data),
        }
    }
}

impl From<PathBuf> for AnalysisInput {
    fn from(path: PathBuf) -> Self {
        AnalysisInput::Path(path)
    }
}

impl From<&Path> for AnalysisInput {
    fn from(path: &Path) -> Self {
        AnalysisInput::Path(path.to_path_buf())
    }
}

impl From<Vec<u8>> for AnalysisInput {
    fn from(data: Vec<u8>) -> Self {
        AnalysisInput::Bytes(data)
    }
}

impl From<&[u8]> for AnalysisInput {
    fn from(data: &[u8]) -> Self {
        AnalysisInput::Bytes(data.to_vec())
    }
}

/// Size and hash of the analysed input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInfo {
    pub size: usize,
    pub sha256: String,
}

/// Analyzes one RTF document and holds the results
#[derive(Debug, Clone)]
pub struct RtfAnalyzer {
    findings: Findings,
    info: DocumentInfo,
}

impl RtfAnalyzer {
    /// Runs the full analysis over `input`.
    ///
    /// Fails on unreadable files and on documents without the RTF magic;
    /// every other deviation is recorded as an observation.
    #[instrument(skip(input, config))]
    pub fn analyze(input: impl Into<AnalysisInput>, config: &AnalysisConfig) -> Result<Self> {
        let data = input.into().into_bytes()?;
        let info = DocumentInfo {
            size: data.len(),
            sha256: sha256_hex(&data),
        };

        let findings = Self::analyze_bytes(&data, config)?;
        Ok(Self { findings, info })
    }

    pub fn from_file(path: impl AsRef<Path>, config: &AnalysisConfig) -> Result<Self> {
        Self::analyze(path.as_ref(), config)
    }

    pub fn from_bytes(data: &[u8], config: &AnalysisConfig) -> Result<Self> {
        Self::analyze(data, config)
    }

    fn analyze_bytes(data: &[u8], config: &AnalysisConfig) -> Result<Findings> {
        let mut findings = Findings::new();

        let view = normalize(data);
        if view.has_non_printable {
            findings.add_observation(Observation::NonPrintableBytes);
        }
        debug!("Decoded {} of {} bytes as ASCII", view.text.len(), view.raw_len);

        let header = validate_header(&view.text)?;
        if !header.standard_marker {
            findings.add_observation(Observation::NonStandardMarker);
        }

        for scanner in default_scanners(config) {
            debug!("Running {} scanner", scanner.name());
            findings.merge(scanner.scan(&view.text));
        }

        Ok(findings)
    }

    pub fn findings(&self) -> &Findings {
        &self.findings
    }

    pub fn into_findings(self) -> Findings {
        self.findings
    }

    pub fn document_info(&self) -> &DocumentInfo {
        &self.info
    }
}

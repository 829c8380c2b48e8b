//! Scanner Module
//!
//! Each scanner makes a single pass over the normalized RTF text looking for
//! one family of control words, and returns what it found as an
//! [`Extraction`]. Scanners are independent of each other; the analyzer
//! runs them in a fixed order and merges the results.

use std::collections::BTreeSet;

use crate::config::AnalysisConfig;
use crate::observations::Observation;

pub mod blip_scanner;
pub mod image_size_scanner;
pub mod info_group_scanner;
pub mod rsid_scanner;

pub use self::{
    blip_scanner::BlipScanner,
    image_size_scanner::ImageSizeScanner,
    info_group_scanner::InfoGroupScanner,
    rsid_scanner::RsidScanner,
};

/// Partial result produced by one scanner
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub loose_strings: BTreeSet<String>,
    pub strict_strings: BTreeSet<String>,
    pub observations: Vec<Observation>,
}

impl Extraction {
    pub fn add_loose(&mut self, value: impl Into<String>) {
        self.loose_strings.insert(value.into());
    }

    pub fn add_strict(&mut self, value: impl Into<String>) {
        self.strict_strings.insert(value.into());
    }

    pub fn observe(&mut self, observation: Observation) {
        self.observations.push(observation);
    }
}

/// A single extraction pass over the document text
pub trait Scanner: Send + Sync {
    /// Short name used in log output
    fn name(&self) -> &'static str;

    fn scan(&self, text: &str) -> Extraction;
}

/// Scanners enabled by `config`, in execution order
pub fn default_scanners(config: &AnalysisConfig) -> Vec<Box<dyn Scanner>> {
    let mut scanners: Vec<Box<dyn Scanner>> = vec![
        Box::new(RsidScanner),
        Box::new(BlipScanner),
        Box::new(ImageSizeScanner),
    ];
    if config.include_risky {
        scanners.push(Box::new(InfoGroupScanner));
    }
    scanners
}

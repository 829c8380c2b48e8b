//! Observation catalog
//!
//! Fixed set of anomalies and findings an analysis can raise. Each observation
//! has a stable identifier (`OBS001`..) used in reports and logs.

use std::{collections::BTreeMap, fmt};

use lazy_static::lazy_static;
use serde::Serialize;

/// A finding raised while analysing a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Observation {
    #[serde(rename = "OBS001")]
    NonPrintableBytes,
    #[serde(rename = "OBS002")]
    NonStandardMarker,
    #[serde(rename = "OBS003")]
    UnknownChangeId,
    #[serde(rename = "OBS004")]
    FixedImageSize,
    #[serde(rename = "OBS005")]
    InformationGroup,
    #[serde(rename = "OBS006")]
    ImageIdentifiers,
    #[serde(rename = "OBS007")]
    ChangeTracking,
}

impl Observation {
    pub const ALL: [Observation; 7] = [
        Observation::NonPrintableBytes,
        Observation::NonStandardMarker,
        Observation::UnknownChangeId,
        Observation::FixedImageSize,
        Observation::InformationGroup,
        Observation::ImageIdentifiers,
        Observation::ChangeTracking,
    ];

    /// Stable reference, e.g. `OBS001`
    pub fn id(self) -> &'static str {
        match self {
            Observation::NonPrintableBytes => "OBS001",
            Observation::NonStandardMarker => "OBS002",
            Observation::UnknownChangeId => "OBS003",
            Observation::FixedImageSize => "OBS004",
            Observation::InformationGroup => "OBS005",
            Observation::ImageIdentifiers => "OBS006",
            Observation::ChangeTracking => "OBS007",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Observation::NonPrintableBytes => "File contains bytes outside ASCII printable range",
            Observation::NonStandardMarker => {
                "Non-standard RTF file marker found (expected \\rtf1)"
            }
            Observation::UnknownChangeId => {
                "Change identifier found which is not in the RSID table (document likely modified)"
            }
            Observation::FixedImageSize => "Document contains images with a fixed width/height",
            Observation::InformationGroup => "Document contains information group tags",
            Observation::ImageIdentifiers => "Document contains image identifiers (bliptags)",
            Observation::ChangeTracking => "Document contains change tracking (RSID tags)",
        }
    }

    /// Looks up an observation by its reference
    pub fn from_id(id: &str) -> Option<Observation> {
        Observation::ALL.iter().copied().find(|obs| obs.id() == id)
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

lazy_static! {
    /// Reference to description mapping for every known observation
    pub static ref OBSERVATIONS: BTreeMap<&'static str, &'static str> = Observation::ALL
        .iter()
        .map(|obs| (obs.id(), obs.description()))
        .collect();
}

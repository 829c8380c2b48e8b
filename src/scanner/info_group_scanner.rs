//! Document information group scanner
//!
//! The `{\info ...}` group is optional and only written by some generators.
//! Values such as `{\author user}` are often far from unique, so these
//! strings need care when used as the only match in a rule. The scanner is
//! treated as risky and can be switched off.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use super::{Extraction, Scanner};
use crate::observations::Observation;

pub const INFO_TAGS: [&str; 11] = [
    "title", "subject", "author", "manager", "category", "keywords", "operator", "company",
    "creatim", "revtim", "doccomm",
];

lazy_static! {
    static ref INFO_TAG_RE: Regex = Regex::new(&format!(
        r"\{{\s*\\(?:{})\s+([^}}]+)\s*\}}",
        INFO_TAGS.join("|")
    ))
    .unwrap();
}

#[derive(Debug, Default)]
pub struct InfoGroupScanner;

impl Scanner for InfoGroupScanner {
    fn name(&self) -> &'static str {
        "info_group"
    }

    fn scan(&self, text: &str) -> Extraction {
        let mut extraction = Extraction::default();

        let mut found = 0;
        for m in INFO_TAG_RE.find_iter(text) {
            debug!("Document information tag: {}", m.as_str());
            extraction.add_loose(m.as_str());
            found += 1;
        }

        if found == 0 {
            debug!("Did not find any document information group tags");
        } else {
            debug!("Found {} document information group tags", found);
            extraction.observe(Observation::InformationGroup);
        }

        extraction
    }
}

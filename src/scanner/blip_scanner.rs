//! Image identifier scanner
//!
//! `\bliptag` stores a signed 32 bit identifier for a picture and
//! `\blipuid` a 128 bit one. Both are usually stable across copies of the
//! same image, which makes them good hunting material.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, error};

use super::{Extraction, Scanner};
use crate::observations::Observation;

lazy_static! {
    static ref BLIPTAG_RE: Regex = Regex::new(r"\\(bliptag-?\d+)").unwrap();
    static ref BLIPUID_RE: Regex = Regex::new(r"\\(blipuid\s+([a-f0-9]+))").unwrap();
}

#[derive(Debug, Default)]
pub struct BlipScanner;

impl BlipScanner {
    fn scan_bliptags(&self, text: &str, extraction: &mut Extraction) {
        if !text.contains("bliptag") {
            return;
        }

        let mut found = 0;
        for captures in BLIPTAG_RE.captures_iter(text) {
            debug!("Raw bliptag value is {}", &captures[1]);
            extraction.add_loose(&captures[1]);
            found += 1;
        }

        if found == 0 {
            error!("Found bliptag but could not parse the unique value, report a bug!");
        } else {
            debug!("Found {} bliptag tag(s) in this document", found);
            extraction.observe(Observation::ImageIdentifiers);
        }
    }

    // No observation here, only bliptags raise OBS006
    fn scan_blipuids(&self, text: &str, extraction: &mut Extraction) {
        if !text.contains("blipuid") {
            return;
        }

        let mut found = 0;
        for captures in BLIPUID_RE.captures_iter(text) {
            debug!("Raw blipuid value is {}", &captures[2]);
            extraction.add_loose(&captures[2]);
            extraction.add_strict(&captures[1]);
            found += 1;
        }

        if found == 0 {
            error!("Found blipuid but could not parse the unique value, report a bug!");
        } else {
            debug!("Found {} blipuid tag(s) in this document", found);
        }
    }
}

impl Scanner for BlipScanner {
    fn name(&self) -> &'static str {
        "blip"
    }

    fn scan(&self, text: &str) -> Extraction {
        let mut extraction = Extraction::default();
        self.scan_bliptags(text, &mut extraction);
        self.scan_blipuids(text, &mut extraction);
        extraction
    }
}

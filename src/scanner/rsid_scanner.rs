//! Revision save ID (RSID) scanner
//!
//! Word records an RSID table (`{\*\rsidtbl \rsid1\rsid2 ...}`) listing every
//! editing session, and tags text, paragraphs and sections with the session
//! that changed them. The table tends to be unique to a document or a small
//! family of documents. A change marker whose id is missing from the table
//! points at manual modification after the document was saved (or a parsing
//! bug here).

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use super::{Extraction, Scanner};
use crate::observations::Observation;

/// Control words that reference an entry of the RSID table
pub const CHANGE_MARKERS: [&str; 7] = [
    "insrsid", "rsidroot", "delrsid", "charrsid", "sectrsid", "pararsid", "tblrsid",
];

lazy_static! {
    static ref TABLE_RE: Regex = Regex::new(r"\\\*\\rsidtbl\s([^}]+)\}").unwrap();
    static ref TABLE_ENTRY_RE: Regex = Regex::new(r"\\rsid(\d+)").unwrap();
    static ref MARKER_RES: Vec<(&'static str, Regex)> = CHANGE_MARKERS
        .iter()
        .map(|marker| (*marker, Regex::new(&format!(r"\\{}(\d+)", marker)).unwrap()))
        .collect();
}

/// Declared revisions of a document
#[derive(Debug, Clone, Default)]
pub struct RevisionTable {
    pub raw: String,
    pub entries: Vec<String>,
    ids: HashSet<String>,
}

impl RevisionTable {
    /// Finds and parses the first RSID table in `text`
    pub fn find(text: &str) -> Option<RevisionTable> {
        let captures = TABLE_RE.captures(text)?;
        let raw = captures[1].trim().to_string();

        let mut table = RevisionTable {
            raw,
            ..Default::default()
        };
        for entry in TABLE_ENTRY_RE.captures_iter(&table.raw) {
            debug!("Found revision {}", &entry[1]);
            table.entries.push(entry[0].to_string());
            table.ids.insert(entry[1].to_string());
        }
        Some(table)
    }

    /// Ids are compared as written, `\rsid0012` does not declare `12`
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }
}

#[derive(Debug, Default)]
pub struct RsidScanner;

impl Scanner for RsidScanner {
    fn name(&self) -> &'static str {
        "rsid"
    }

    fn scan(&self, text: &str) -> Extraction {
        let mut extraction = Extraction::default();

        // TODO: brute force the change markers when the table is missing
        let Some(table) = RevisionTable::find(text) else {
            debug!("Did not find an RSID table");
            return extraction;
        };

        debug!("Found an RSID table in this document");
        extraction.observe(Observation::ChangeTracking);
        debug!("Raw RSID data is {}", table.raw);
        extraction.add_strict(table.raw.clone());
        for entry in &table.entries {
            extraction.add_loose(entry.clone());
        }

        for (marker, re) in MARKER_RES.iter() {
            for captures in re.captures_iter(text) {
                let unique_id = &captures[1];
                debug!("Found marker {}, change ID {}", marker, unique_id);

                if !table.contains(unique_id) {
                    debug!(
                        "Found change ID {} (control word {}) that is not in the RSID table. Potential bug or modified document",
                        unique_id, marker
                    );
                    extraction.observe(Observation::UnknownChangeId);
                }

                extraction.add_loose(format!("{}{}", marker, unique_id));
            }
        }

        extraction
    }
}

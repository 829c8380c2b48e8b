//! Fixed image dimension scanner

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use super::{Extraction, Scanner};
use crate::observations::Observation;

lazy_static! {
    // Greedy over the whole run of size tags, a single `\picw10` is far from unique
    static ref IMAGE_SIZE_RE: Regex =
        Regex::new(r"(?:\\(?:picw|pich|picwgoal|pichgoal)\d+\s*)+").unwrap();
}

/// Extracts `\picw`, `\pich`, `\picwgoal` and `\pichgoal` runs, which define
/// the size (and scaled size) of an embedded picture.
///
/// Common dimensions are shared by many documents, so matches are only
/// loose strings.
#[derive(Debug, Default)]
pub struct ImageSizeScanner;

impl Scanner for ImageSizeScanner {
    fn name(&self) -> &'static str {
        "image_size"
    }

    fn scan(&self, text: &str) -> Extraction {
        let mut extraction = Extraction::default();

        let mut found = 0;
        for m in IMAGE_SIZE_RE.find_iter(text) {
            debug!("Image size: {}", m.as_str());
            extraction.add_loose(m.as_str().trim());
            found += 1;
        }

        if found > 0 {
            debug!("Found {} embedded image(s) with set height/width", found);
            extraction.observe(Observation::FixedImageSize);
        }

        extraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_run_is_one_string() {
        let extraction = ImageSizeScanner.scan(
            "{\\rtf1}{\\pict{\\*\\picprop}\\wmetafile8\\picw10\\pich10\\picwgoal10\\pichgoal10 0011}",
        );
        assert_eq!(extraction.observations, vec![Observation::FixedImageSize]);
        assert_eq!(extraction.loose_strings.len(), 1);
        assert!(extraction
            .loose_strings
            .contains("\\picw10\\pich10\\picwgoal10\\pichgoal10"));
    }

    #[test]
    fn test_separate_runs_single_observation() {
        let extraction =
            ImageSizeScanner.scan("{\\rtf1}{\\pict\\picw10\\pich20}{\\pict\\picw30 \\pich40\n}");
        assert_eq!(extraction.observations, vec![Observation::FixedImageSize]);
        assert!(extraction.loose_strings.contains("\\picw10\\pich20"));
        assert!(extraction.loose_strings.contains("\\picw30 \\pich40"));
    }

    #[test]
    fn test_tag_without_value_is_ignored() {
        let extraction = ImageSizeScanner.scan("{\\rtf1}{\\pict\\picwgoal}");
        assert!(extraction.observations.is_empty());
        assert!(extraction.loose_strings.is_empty());
    }
}

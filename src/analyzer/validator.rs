//! Structural validation of the RTF header

use tracing::debug;

use crate::error::{Error, Result};

/// Every RTF document opens with this group and control word prefix
pub const RTF_MAGIC: &str = "{\\rt";

/// Expected remainder of `\rtf1`
pub const RTF_VERSION: &str = "f1";

/// Outcome of a successful header check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderCheck {
    pub standard_marker: bool,
}

/// Validates the header of a normalized document.
///
/// A bad magic is fatal. A marker other than `\rtf1` is tolerated but
/// reported, old or poorly written scanners are often evaded that way.
pub fn validate_header(text: &str) -> Result<HeaderCheck> {
    if text.get(0..4) != Some(RTF_MAGIC) {
        return Err(Error::Parsing(
            "This file does not look like an RTF, magic bytes don't validate".into(),
        ));
    }

    let standard_marker = text.get(4..6) == Some(RTF_VERSION);
    if !standard_marker {
        debug!("Non-standard RTF marker: {:?}", text.get(4..6).unwrap_or(&text[4..]));
    }

    Ok(HeaderCheck { standard_marker })
}

//! Sample documents shared by the integration tests.
//!
//! These exercise the scanners, they are not meant to be valid RTF documents.

#![allow(dead_code)]

pub struct TestFixtures;

impl TestFixtures {
    pub const MINIMAL: &'static [u8] = b"{\\rtf1}";
    pub const INVALID_HEADER: &'static [u8] = b"{\\rxf1}";
    pub const MODIFIED_HEADER: &'static [u8] = b"{\\rtXY";
    pub const BINARY: &'static [u8] = b"{\\rtf1}\x13\x37";
    pub const INFO_GROUP: &'static [u8] =
        b"{\\rtf1}{\\info{\\title My first document}{\\author edeca}{\\operator Neo}}";
    pub const PICTURE: &'static [u8] =
        b"{\\rtf1}{\\pict{\\*\\picprop}\\wmetafile8\\picw10\\pich10\\picwgoal10\\pichgoal10 0011}";
    pub const BLIPTAG: &'static [u8] =
        b"{\\rtf1}\\bliptag-1234567890\\blipupi-111{\\*\\blipuid 0011223344556677889900aabbccddeeff}";
    pub const INVALID_BLIPTAG: &'static [u8] = b"{\\rtf1}\\bliptag-nope";
    pub const INVALID_BLIPUID: &'static [u8] = b"{\\rtf1}\\blipuid zzzz";
    pub const REVISION_TABLE: &'static [u8] = b"{\\rtf1}{\\*\\rsidtbl \\rsid1234\\rsid5678}";
    pub const REVISION_TAGS: &'static [u8] =
        b"{\\rtf1}{\\*\\rsidtbl \\rsid1234\\rsid5678}\\pard \\pararsid1234";
    pub const INVALID_REVISION_TAG: &'static [u8] =
        b"{\\rtf1}{\\*\\rsidtbl \\rsid1234\\rsid5678}\\pard \\pararsid9012";

    /// A document touching every scanner at once
    pub fn get_full_document() -> Vec<u8> {
        let mut doc = b"{\\rtf1\\ansi\\ansicpg1252\\deff0".to_vec();
        doc.extend_from_slice(b"{\\*\\rsidtbl \\rsid1234\\rsid5678\\rsid9999}\r\n");
        doc.extend_from_slice(b"{\\info{\\author edeca}{\\company ACME Corp}{\\creatim\\yr2020}}\r\n");
        doc.extend_from_slice(b"\\pard\\plain \\sectrsid1234\\pararsid5678 ");
        doc.extend_from_slice(b"{\\insrsid9999 Hello}{\\delrsid4242 old}\r\n");
        doc.extend_from_slice(b"{\\pict{\\*\\picprop}\\picw200\\pich100\\picwgoal3000\\pichgoal1500\r\n");
        doc.extend_from_slice(b"\\bliptag-99{\\*\\blipuid 9d2f00aa}0011}}");
        doc
    }
}

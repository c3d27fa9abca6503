use std::sync::OnceLock;

use regex::Regex;

use crate::text::Span;

/// ATX heading (`# Title`) with owned marker knowledge.
pub struct AtxHeading;

impl AtxHeading {
    pub const MAX_DEPTH: u8 = 6;

    /// Span of the hash run when the line opens with `#{1,6}` and whitespace.
    ///
    /// The trailing whitespace is not part of the marker.
    pub fn marker(line_text: &str) -> Option<Span> {
        static MARKER_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = MARKER_REGEX
            .get_or_init(|| Regex::new(r"^(#{1,6})\s+").expect("Invalid heading marker regex"));
        let hashes = re.captures(line_text)?.get(1)?;
        Some(Span::new(hashes.start(), hashes.end()))
    }

    /// Depth of a heading recognised from the raw line alone.
    ///
    /// Matches `#{1,6}` followed by whitespace or end of line; used to recover
    /// headings the parser did not attribute a position to.
    pub fn scan_depth(line_text: &str) -> Option<u8> {
        static SCAN_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = SCAN_REGEX
            .get_or_init(|| Regex::new(r"^(#{1,6})(\s|$)").expect("Invalid heading scan regex"));
        let hashes = re.captures(line_text)?.get(1)?;
        u8::try_from(hashes.len()).ok()
    }

    /// Clamps a parser-reported depth into `1..=6`.
    pub fn clamp_depth(depth: u8) -> u8 {
        depth.clamp(1, Self::MAX_DEPTH)
    }
}

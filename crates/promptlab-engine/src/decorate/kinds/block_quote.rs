use std::sync::OnceLock;

use regex::Regex;

use crate::text::Span;

/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Span of the leading chevron run, relative to the line start.
    ///
    /// Matches optional indentation followed by one or more `>`; a single
    /// space after the run is consumed but left out of the marker.
    pub fn marker(line_text: &str) -> Option<Span> {
        static MARKER_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = MARKER_REGEX.get_or_init(|| {
            let prefix = regex::escape(&Self::PREFIX.to_string());
            Regex::new(&format!(r"^(\s*{prefix}+)\s?")).expect("Invalid blockquote marker regex")
        });
        let run = re.captures(line_text)?.get(1)?;
        Some(Span::new(run.start(), run.end()))
    }
}

use std::sync::OnceLock;

use regex::Regex;

use crate::text::Span;

/// A matched list marker token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMarker {
    /// Span of the numeral or bullet, relative to the line start.
    pub span: Span,
    /// Text the host displays in place of the token.
    pub display: String,
}

/// List item marker knowledge (`-`, `*`, `+`, `1.`, `1)`).
pub struct ListItemMarker;

impl ListItemMarker {
    /// Finds the marker at the start of `line_text`.
    ///
    /// Leading indentation and the following whitespace are excluded from the
    /// span. Unordered bullets display as `bullet`; ordered numerals keep
    /// their literal text.
    pub fn find(line_text: &str, ordered: bool, bullet: &str) -> Option<ListMarker> {
        static ORDERED_REGEX: OnceLock<Regex> = OnceLock::new();
        static UNORDERED_REGEX: OnceLock<Regex> = OnceLock::new();

        let re = if ordered {
            ORDERED_REGEX.get_or_init(|| {
                Regex::new(r"^(\s*)(\d+[.)])\s+").expect("Invalid ordered list marker regex")
            })
        } else {
            UNORDERED_REGEX.get_or_init(|| {
                Regex::new(r"^(\s*)([-*+])\s+").expect("Invalid unordered list marker regex")
            })
        };

        let token = re.captures(line_text)?.get(2)?;
        let display = if ordered {
            token.as_str().to_string()
        } else {
            bullet.to_string()
        };
        Some(ListMarker {
            span: Span::new(token.start(), token.end()),
            display,
        })
    }
}

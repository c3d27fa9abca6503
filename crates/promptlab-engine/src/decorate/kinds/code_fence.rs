use std::sync::OnceLock;

use regex::Regex;

use crate::text::Span;

/// Fenced code block delimiter knowledge.
pub struct CodeFence;

impl CodeFence {
    /// Characters a fence may be built from.
    pub const FENCE_CHARS: [char; 2] = ['`', '~'];
    /// Shortest run that opens a fence.
    pub const MIN_RUN: usize = 3;

    /// Span of the fence run (three or more backticks or tildes), relative to
    /// the line start. Indentation and the info string are excluded.
    pub fn marker(line_text: &str) -> Option<Span> {
        static FENCE_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = FENCE_REGEX.get_or_init(|| {
            let runs: Vec<String> = Self::FENCE_CHARS
                .iter()
                .map(|c| format!("{}{{{},}}", regex::escape(&c.to_string()), Self::MIN_RUN))
                .collect();
            Regex::new(&format!(r"^(\s*)({})", runs.join("|"))).expect("Invalid code fence regex")
        });
        let run = re.captures(line_text)?.get(2)?;
        Some(Span::new(run.start(), run.end()))
    }
}

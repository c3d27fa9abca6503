//! Turns collected records into decorations.

use std::collections::BTreeSet;

use crate::{
    syntax::{NodeKind, SyntaxNode},
    text::{DocSnapshot, Span},
};

use super::{
    collect::{Collected, LineSpan, ListItemRecord},
    kinds::{AtxHeading, BlockQuote, CodeFence, CodeSpan, Emphasis, ListItemMarker, Split, Strong},
    types::{Decoration, DecorationOptions},
};

/// Emits decorations for one snapshot, deduplicating per line and category.
///
/// Output order is unspecified; the commit pass sorts it.
pub struct Synthesizer<'s> {
    snapshot: &'s DocSnapshot,
    options: &'s DecorationOptions,
    pending: Vec<Decoration>,
    heading_lines: BTreeSet<usize>,
    list_lines: BTreeSet<usize>,
    code_lines: BTreeSet<usize>,
}

impl<'s> Synthesizer<'s> {
    pub fn new(snapshot: &'s DocSnapshot, options: &'s DecorationOptions) -> Self {
        Self {
            snapshot,
            options,
            pending: Vec::new(),
            heading_lines: BTreeSet::new(),
            list_lines: BTreeSet::new(),
            code_lines: BTreeSet::new(),
        }
    }

    /// Runs every category. The heading fallback goes last because it needs
    /// the parser's heading lines and the code block lines.
    pub fn run(mut self, collected: &Collected<'_>) -> Vec<Decoration> {
        self.headings(&collected.headings);
        self.list_items(&collected.list_items);
        self.blockquotes(&collected.blockquotes);
        self.code_blocks(&collected.code_blocks);
        self.inline(&collected.strong, Strong::split, Inline::Strong);
        self.inline(&collected.emphasis, Emphasis::split, Inline::Emphasis);
        self.inline(&collected.inline_code, CodeSpan::split, Inline::Code);
        self.fallback_headings();
        self.pending
    }

    fn headings(&mut self, headings: &[&SyntaxNode]) {
        for node in headings {
            let Some(line) = node.start_line() else {
                log::trace!("heading without position left to the line scan");
                continue;
            };
            if line < 1 || line > self.snapshot.line_count() {
                continue;
            }
            let depth = match node.kind {
                NodeKind::Heading { depth } => depth,
                _ => 1,
            };
            if self.heading_lines.insert(line) {
                self.add_heading(line, depth);
            }
        }
    }

    /// Recovers ATX headings the parser did not attribute to a line.
    fn fallback_headings(&mut self) {
        let snapshot = self.snapshot;
        for line in snapshot.lines() {
            if self.heading_lines.contains(&line.number) || self.code_lines.contains(&line.number) {
                continue;
            }
            if let Some(depth) = AtxHeading::scan_depth(&line.text) {
                log::trace!("line {} recovered as heading by scan", line.number);
                self.heading_lines.insert(line.number);
                self.add_heading(line.number, depth);
            }
        }
    }

    fn add_heading(&mut self, number: usize, depth: u8) {
        let Some(line) = self.snapshot.line(number) else {
            return;
        };
        let classes = &self.options.classes;
        let depth = AtxHeading::clamp_depth(depth);

        self.pending
            .push(Decoration::line(line.from(), classes.heading_line(depth)));
        self.pending.push(Decoration::widget(
            line.from(),
            depth,
            classes.heading_divider(depth),
        ));
        if let Some(marker) = AtxHeading::marker(&line.text) {
            self.pending.push(Decoration::mark(
                marker.offset_by(line.from()),
                classes.heading_marker(),
            ));
        }
    }

    fn list_items(&mut self, items: &[ListItemRecord]) {
        for item in items {
            let Some(line) = self.snapshot.line(item.line) else {
                continue;
            };
            if !self.list_lines.insert(item.line) {
                continue;
            }
            let classes = &self.options.classes;
            self.pending
                .push(Decoration::line(line.from(), classes.list_line(item.ordered)));
            if let Some(marker) = ListItemMarker::find(&line.text, item.ordered, &self.options.bullet) {
                self.pending.push(Decoration::marker(
                    marker.span.offset_by(line.from()),
                    classes.list_marker(),
                    marker.display,
                ));
            }
        }
    }

    fn blockquotes(&mut self, spans: &[LineSpan]) {
        let (lines, starts) = self.expand(spans);
        for number in lines {
            let Some(line) = self.snapshot.line(number) else {
                continue;
            };
            let classes = &self.options.classes;
            self.pending
                .push(Decoration::line(line.from(), classes.blockquote_line()));
            if starts.contains(&number)
                && let Some(marker) = BlockQuote::marker(&line.text)
            {
                self.pending.push(Decoration::mark(
                    marker.offset_by(line.from()),
                    classes.blockquote_marker(),
                ));
            }
        }
    }

    fn code_blocks(&mut self, spans: &[LineSpan]) {
        let (lines, starts) = self.expand(spans);
        for &number in &lines {
            let Some(line) = self.snapshot.line(number) else {
                continue;
            };
            let classes = &self.options.classes;
            self.pending
                .push(Decoration::line(line.from(), classes.codeblock_line()));
            if starts.contains(&number)
                && let Some(marker) = CodeFence::marker(&line.text)
            {
                self.pending.push(Decoration::mark(
                    marker.offset_by(line.from()),
                    classes.codeblock_marker(),
                ));
            }
        }
        self.code_lines.extend(lines);
    }

    /// Expands line spans, clamped to the document, into unique covered lines
    /// and the first line of each span.
    fn expand(&self, spans: &[LineSpan]) -> (BTreeSet<usize>, BTreeSet<usize>) {
        let mut lines = BTreeSet::new();
        let mut starts = BTreeSet::new();
        for span in spans {
            let start = span.start_line.max(1);
            let end = span.end_line.min(self.snapshot.line_count());
            if start > end {
                continue;
            }
            starts.insert(start);
            lines.extend(start..=end);
        }
        (lines, starts)
    }

    fn inline(&mut self, ranges: &[Span], splitter: fn(&str, Span) -> Split, kind: Inline) {
        let classes = &self.options.classes;
        let (content_class, marker_class) = match kind {
            Inline::Strong => (classes.strong(), classes.strong_marker()),
            Inline::Emphasis => (classes.emphasis(), classes.emphasis_marker()),
            Inline::Code => (classes.inline_code(), classes.code_marker()),
        };

        for &range in ranges {
            let split = match self.snapshot.slice(range) {
                Some(slice) => splitter(slice, range),
                None => Split::ContentOnly(range),
            };
            if let Some(content) = split.content() {
                self.pending
                    .push(Decoration::mark(content, content_class.clone()));
            }
            for marker in split.markers() {
                self.pending
                    .push(Decoration::mark(marker, marker_class.clone()));
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Inline {
    Strong,
    Emphasis,
    Code,
}

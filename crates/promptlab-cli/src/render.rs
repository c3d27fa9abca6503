//! Terminal preview of a decorated template.
//!
//! Mirrors what the editor surface shows: heading, quote and emphasis markers
//! are hidden on every line except the active one, list bullets are replaced
//! by their display text, code fences and backticks stay visible but dimmed,
//! and headings get a divider drawn above them.

use std::io::Write;

use crossterm::{
    queue,
    style::{Attribute, Color, ContentStyle, Print, PrintStyledContent, StyledContent},
};
use promptlab_engine::{
    ClassNames, Decoration, DecorationKind, DecorationSet, DocSnapshot, Span,
};

const DIVIDER_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStyle {
    pub heading: Option<u8>,
    pub quote: bool,
    pub code_block: bool,
    pub marker: bool,
    pub strong: bool,
    pub emphasis: bool,
    pub code: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub style: TextStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedLine {
    /// Heading depth of a divider drawn above the line.
    pub divider: Option<u8>,
    pub segments: Vec<Segment>,
}

impl RenderedLine {
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Lays out one line, showing raw markers only when `active`.
pub fn render_line(
    doc: &DocSnapshot,
    set: &DecorationSet,
    classes: &ClassNames,
    number: usize,
    active: bool,
) -> RenderedLine {
    let Some(line) = doc.line(number) else {
        return RenderedLine::default();
    };
    let (start, end) = (line.from(), line.to());

    let mut rendered = RenderedLine::default();
    let mut base = TextStyle::default();
    for d in set.iter().filter(|d| d.from == start && d.to == start) {
        match &d.kind {
            DecorationKind::Widget { depth, .. } => {
                rendered.divider = Some(*depth);
                base.heading = Some(*depth);
            }
            DecorationKind::Line { class } => {
                base.quote |= *class == classes.blockquote_line();
                base.code_block |= *class == classes.codeblock_line();
            }
            DecorationKind::Mark { .. } => {}
        }
    }

    let marks: Vec<&Decoration> = set
        .marks()
        .filter(|d| d.from < end && d.to > start)
        .collect();

    let mut bounds = vec![start, end];
    for d in &marks {
        bounds.push(d.from.clamp(start, end));
        bounds.push(d.to.clamp(start, end));
    }
    bounds.sort_unstable();
    bounds.dedup();

    for window in bounds.windows(2) {
        let (a, b) = (window[0], window[1]);
        let covering: Vec<&Decoration> = marks
            .iter()
            .copied()
            .filter(|d| d.from <= a && d.to >= b)
            .collect();

        let mut style = base;
        let mut display = None;
        let mut hidden = false;
        for d in &covering {
            let class = d.class();
            if is_code_marker(classes, class) {
                style.marker = true;
            }
            if is_hidden_marker(classes, class) {
                style.marker = true;
                hidden = true;
                if let DecorationKind::Mark {
                    marker_text: Some(text),
                    ..
                } = &d.kind
                    && a == d.from.max(start)
                {
                    display = Some(text.clone());
                }
            }
            style.strong |= class == classes.strong();
            style.emphasis |= class == classes.emphasis();
            style.code |= class == classes.inline_code();
        }

        let text = if hidden && !active {
            match display {
                Some(text) => text,
                None => continue,
            }
        } else {
            match doc.slice(Span::new(a, b)) {
                Some(text) => text.to_string(),
                None => continue,
            }
        };
        rendered.segments.push(Segment { text, style });
    }

    rendered
}

/// Markers replaced (list bullets) or removed everywhere but the active line.
fn is_hidden_marker(classes: &ClassNames, class: &str) -> bool {
    [
        classes.heading_marker(),
        classes.list_marker(),
        classes.blockquote_marker(),
        classes.strong_marker(),
        classes.emphasis_marker(),
    ]
    .iter()
    .any(|marker| marker == class)
}

/// Fence and backtick markers stay visible; they are only dimmed.
fn is_code_marker(classes: &ClassNames, class: &str) -> bool {
    class == classes.codeblock_marker() || class == classes.code_marker()
}

/// Writes every line of `doc` with terminal styling.
pub fn print_preview<W: Write>(
    out: &mut W,
    doc: &DocSnapshot,
    set: &DecorationSet,
    classes: &ClassNames,
    active_line: Option<usize>,
) -> std::io::Result<()> {
    for line in doc.lines() {
        let rendered = render_line(doc, set, classes, line.number, active_line == Some(line.number));
        if let Some(depth) = rendered.divider {
            let width = DIVIDER_WIDTH.saturating_sub(usize::from(depth) * 4);
            let mut rule = ContentStyle::new();
            rule.foreground_color = Some(Color::DarkGrey);
            queue!(
                out,
                PrintStyledContent(StyledContent::new(rule, "─".repeat(width))),
                Print("\n")
            )?;
        }
        for segment in rendered.segments {
            queue!(
                out,
                PrintStyledContent(StyledContent::new(content_style(segment.style), segment.text))
            )?;
        }
        queue!(out, Print("\n"))?;
    }
    out.flush()
}

fn content_style(style: TextStyle) -> ContentStyle {
    let mut content = ContentStyle::new();
    if style.heading.is_some() {
        content.foreground_color = Some(Color::Cyan);
        content.attributes.set(Attribute::Bold);
    }
    if style.quote {
        content.foreground_color = Some(Color::Green);
    }
    if style.code_block || style.code {
        content.foreground_color = Some(Color::Yellow);
    }
    if style.marker {
        content.attributes.set(Attribute::Dim);
    }
    if style.strong {
        content.attributes.set(Attribute::Bold);
    }
    if style.emphasis {
        content.attributes.set(Attribute::Italic);
    }
    content
}

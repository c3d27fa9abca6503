use crate::text::Span;

/// What a [`Decoration`] renders as.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DecorationKind {
    /// Styles the whole line starting at `from`. Zero-width.
    Line { class: String },
    /// Styles the characters in `from..to`.
    Mark {
        class: String,
        /// Literal text the host substitutes for the marked characters.
        marker_text: Option<String>,
    },
    /// A block element drawn before the line starting at `from`. Zero-width.
    Widget { class: String, depth: u8 },
}

/// A single rendering annotation over a document snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decoration {
    pub from: usize,
    pub to: usize,
    pub kind: DecorationKind,
}

impl Decoration {
    pub fn line(line_start: usize, class: impl Into<String>) -> Self {
        Self {
            from: line_start,
            to: line_start,
            kind: DecorationKind::Line {
                class: class.into(),
            },
        }
    }

    pub fn mark(span: Span, class: impl Into<String>) -> Self {
        Self {
            from: span.start,
            to: span.end,
            kind: DecorationKind::Mark {
                class: class.into(),
                marker_text: None,
            },
        }
    }

    /// A mark that the host displays as `marker_text` instead of the source characters.
    pub fn marker(span: Span, class: impl Into<String>, marker_text: impl Into<String>) -> Self {
        Self {
            from: span.start,
            to: span.end,
            kind: DecorationKind::Mark {
                class: class.into(),
                marker_text: Some(marker_text.into()),
            },
        }
    }

    pub fn widget(line_start: usize, depth: u8, class: impl Into<String>) -> Self {
        Self {
            from: line_start,
            to: line_start,
            kind: DecorationKind::Widget {
                class: class.into(),
                depth,
            },
        }
    }

    /// Stacking order among decorations sharing a `from` offset.
    ///
    /// Widgets anchor before their line's first character, then line styling,
    /// then inline marks.
    pub fn side(&self) -> i8 {
        match self.kind {
            DecorationKind::Widget { .. } => -2,
            DecorationKind::Line { .. } => -1,
            DecorationKind::Mark { .. } => 0,
        }
    }

    pub fn class(&self) -> &str {
        match &self.kind {
            DecorationKind::Line { class }
            | DecorationKind::Mark { class, .. }
            | DecorationKind::Widget { class, .. } => class,
        }
    }

    pub fn span(&self) -> Span {
        Span::new(self.from, self.to)
    }
}

/// CSS class vocabulary shared with the host surface's stylesheet.
///
/// Every class is `{prefix}-{name}`. Line decorations combine a base class with
/// a variant, e.g. `cm-md-heading cm-md-heading-h2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNames {
    prefix: String,
}

impl ClassNames {
    pub const DEFAULT_PREFIX: &'static str = "cm-md";

    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn class(&self, name: &str) -> String {
        format!("{}-{name}", self.prefix)
    }

    pub fn heading_line(&self, depth: u8) -> String {
        format!("{} {}", self.class("heading"), self.class(&format!("heading-h{depth}")))
    }

    pub fn heading_divider(&self, depth: u8) -> String {
        format!("{} {}", self.class("divider"), self.class(&format!("divider-h{depth}")))
    }

    pub fn heading_marker(&self) -> String {
        self.class("heading-marker")
    }

    pub fn list_line(&self, ordered: bool) -> String {
        let variant = if ordered { "ordered" } else { "unordered" };
        format!(
            "{} {}",
            self.class("list-item"),
            self.class(&format!("list-item-{variant}"))
        )
    }

    pub fn list_marker(&self) -> String {
        self.class("list-marker")
    }

    pub fn blockquote_line(&self) -> String {
        self.class("blockquote")
    }

    pub fn blockquote_marker(&self) -> String {
        self.class("blockquote-marker")
    }

    pub fn codeblock_line(&self) -> String {
        self.class("codeblock")
    }

    pub fn codeblock_marker(&self) -> String {
        self.class("codeblock-marker")
    }

    pub fn strong(&self) -> String {
        self.class("strong")
    }

    pub fn emphasis(&self) -> String {
        self.class("emphasis")
    }

    pub fn inline_code(&self) -> String {
        self.class("inline-code")
    }

    /// Strong delimiters: the shared inline-marker class plus a strong-specific one.
    pub fn strong_marker(&self) -> String {
        format!("{} {}", self.class("inline-marker"), self.class("strong-marker"))
    }

    /// Emphasis delimiters: the shared inline-marker class plus an emphasis-specific one.
    pub fn emphasis_marker(&self) -> String {
        format!(
            "{} {}",
            self.class("inline-marker"),
            self.class("emphasis-marker")
        )
    }

    pub fn code_marker(&self) -> String {
        self.class("code-marker")
    }
}

impl Default for ClassNames {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PREFIX)
    }
}

/// Engine settings that shape the emitted decorations but not which lines match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecorationOptions {
    pub classes: ClassNames,
    /// Display text substituted for every unordered list bullet.
    pub bullet: String,
}

impl DecorationOptions {
    pub const DEFAULT_BULLET: &'static str = "•";
}

impl Default for DecorationOptions {
    fn default() -> Self {
        Self {
            classes: ClassNames::default(),
            bullet: Self::DEFAULT_BULLET.to_string(),
        }
    }
}

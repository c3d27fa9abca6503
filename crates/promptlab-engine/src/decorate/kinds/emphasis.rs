use crate::text::Span;

use super::Split;

/// Strong emphasis delimited by `**` or `__`.
pub struct Strong;

impl Strong {
    pub const DELIMITERS: [&'static str; 2] = ["**", "__"];
    pub const MARKER_LEN: usize = 2;

    /// Splits a strong node's `range` whose source text is `slice`.
    ///
    /// Valid when the slice opens and closes with the same doubled delimiter
    /// and is at least four bytes long.
    pub fn split(slice: &str, range: Span) -> Split {
        let valid = slice.len() >= 2 * Self::MARKER_LEN
            && Self::DELIMITERS
                .iter()
                .any(|d| slice.starts_with(d) && slice.ends_with(d));
        if valid {
            Split::delimited(range, Self::MARKER_LEN)
        } else {
            Split::ContentOnly(range)
        }
    }
}

/// Emphasis delimited by a single `*` or `_`.
pub struct Emphasis;

impl Emphasis {
    pub const DELIMITERS: [u8; 2] = [b'*', b'_'];

    /// Splits an emphasis node's `range` whose source text is `slice`.
    ///
    /// The opening character must not be part of a doubled delimiter, which
    /// would make it a strong marker.
    pub fn split(slice: &str, range: Span) -> Split {
        let b = slice.as_bytes();
        let valid = match b.first() {
            Some(&open) if Self::DELIMITERS.contains(&open) => {
                b.len() >= 2 && b.get(1) != Some(&open) && b.last() == Some(&open)
            }
            _ => false,
        };
        if valid {
            Split::delimited(range, 1)
        } else {
            Split::ContentOnly(range)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn whole(slice: &str) -> Span {
        Span::new(0, slice.len())
    }

    #[rstest]
    #[case("**bold**")]
    #[case("__bold__")]
    fn strong_splits_valid_delimiters(#[case] slice: &str) {
        assert_eq!(
            Strong::split(slice, whole(slice)),
            Split::Delimited {
                open: Span::new(0, 2),
                close: Span::new(6, 8),
                content: Some(Span::new(2, 6)),
            }
        );
    }

    #[test]
    fn strong_empty_interior_keeps_markers() {
        let split = Strong::split("****", Span::new(10, 14));
        assert_eq!(split.markers(), vec![Span::new(10, 12), Span::new(12, 14)]);
        assert_eq!(split.content(), None);
    }

    #[rstest]
    #[case("**bold__")]
    #[case("***")]
    #[case("bold")]
    fn strong_invalid_is_content_only(#[case] slice: &str) {
        assert_eq!(
            Strong::split(slice, whole(slice)),
            Split::ContentOnly(whole(slice))
        );
    }

    #[rstest]
    #[case("*it*")]
    #[case("_it_")]
    fn emphasis_splits_single_delimiters(#[case] slice: &str) {
        assert_eq!(
            Emphasis::split(slice, whole(slice)),
            Split::Delimited {
                open: Span::new(0, 1),
                close: Span::new(3, 4),
                content: Some(Span::new(1, 3)),
            }
        );
    }

    #[rstest]
    #[case("**it**")]
    #[case("__it__")]
    #[case("*it_")]
    #[case("*")]
    #[case("it")]
    #[case("")]
    fn emphasis_invalid_is_content_only(#[case] slice: &str) {
        assert_eq!(
            Emphasis::split(slice, whole(slice)),
            Split::ContentOnly(whole(slice))
        );
    }
}

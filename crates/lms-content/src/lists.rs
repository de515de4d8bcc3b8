//! Bullet and numbered list grouping.
//!
//! A group is a maximal run of consecutive list lines that starts either at
//! the beginning of the document or right after a newline. Any other line,
//! blank or not, ends the group.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Run of `- item` / `* item` lines.
static UNORDERED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|\n)([ \t]*[-*] .+(?:\n[ \t]*[-*] .+)*)").unwrap()
});

/// Bullet marker plus its indentation and trailing whitespace.
static UNORDERED_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*[-*]\s+").unwrap());

/// Run of `1. item` lines.
static ORDERED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|\n)([ \t]*[0-9]+\. .+(?:\n[ \t]*[0-9]+\. .+)*)").unwrap()
});

/// Numeral marker plus its indentation and trailing whitespace.
static ORDERED_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*[0-9]+\.\s+").unwrap());

/// List flavour produced by a grouping pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn group_re(self) -> &'static Regex {
        match self {
            Self::Unordered => &*UNORDERED_RE,
            Self::Ordered => &*ORDERED_RE,
        }
    }

    fn marker_re(self) -> &'static Regex {
        match self {
            Self::Unordered => &*UNORDERED_MARKER_RE,
            Self::Ordered => &*ORDERED_MARKER_RE,
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Self::Unordered => "ul",
            Self::Ordered => "ol",
        }
    }
}

/// Group bullet lines into `<ul>` elements.
pub(crate) fn unordered(text: &str) -> String {
    group(text, ListKind::Unordered)
}

/// Group numbered lines into `<ol>` elements. Source numerals are dropped.
pub(crate) fn ordered(text: &str) -> String {
    group(text, ListKind::Ordered)
}

fn group(text: &str, kind: ListKind) -> String {
    kind.group_re()
        .replace_all(text, |caps: &Captures| {
            let tag = kind.tag();
            let mut out = String::from(&caps[1]);
            out.push('<');
            out.push_str(tag);
            out.push('>');
            for line in caps[2].split('\n') {
                out.push_str("<li>");
                out.push_str(&kind.marker_re().replace(line, ""));
                out.push_str("</li>");
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
            out
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unordered_groups_contiguous_lines() {
        assert_eq!(
            unordered("- a\n- b\n- c"),
            "<ul><li>a</li><li>b</li><li>c</li></ul>"
        );
    }

    #[test]
    fn test_unordered_mixed_markers_and_indent() {
        assert_eq!(
            unordered("  * one\n\t- two"),
            "<ul><li>one</li><li>two</li></ul>"
        );
    }

    #[test]
    fn test_unordered_blank_line_splits_groups() {
        assert_eq!(
            unordered("- a\n\n- b"),
            "<ul><li>a</li></ul>\n\n<ul><li>b</li></ul>"
        );
    }

    #[test]
    fn test_unordered_prose_line_ends_group() {
        assert_eq!(
            unordered("intro\n- a\n- b\noutro"),
            "intro\n<ul><li>a</li><li>b</li></ul>\noutro"
        );
    }

    #[test]
    fn test_unordered_requires_space_after_marker() {
        assert_eq!(unordered("-a\n*b"), "-a\n*b");
    }

    #[test]
    fn test_ordered_discards_numerals() {
        assert_eq!(
            ordered("3. three\n7. seven"),
            "<ol><li>three</li><li>seven</li></ol>"
        );
    }

    #[test]
    fn test_ordered_ignores_bullets() {
        assert_eq!(ordered("- a"), "- a");
    }
}

//! Plain-text previews for listings.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Default preview length in characters.
pub const DEFAULT_EXCERPT_LEN: usize = 120;

/// Suffix appended when a preview is truncated.
pub const ELLIPSIS: &str = "...";

/// Smallest character index at which a space is accepted as a cut point.
///
/// A cut earlier than this would leave an unhelpfully short preview, so the
/// text is cut mid-word at the length limit instead.
///
/// The bound is inclusive: a space at exactly index 40 is a valid cut. The
/// older web client required the space to sit strictly after index 40, so
/// the two disagree only when the last space in the prefix is at index 40.
pub const MIN_WORD_BOUNDARY: usize = 40;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Remove anything shaped like `<...>`.
///
/// Purely textual: literal angle-bracketed prose is removed as well.
///
/// # Examples
///
/// ```
/// use lms_content::strip_tags;
///
/// assert_eq!(strip_tags("<p>hi <b>there</b></p>"), "hi there");
/// ```
pub fn strip_tags(text: &str) -> Cow<'_, str> {
    TAG_RE.replace_all(text, "")
}

/// Build a short plain-text preview of `raw`.
///
/// Tags are stripped first. Text of at most `max_len` characters is returned
/// as is. Longer text is cut to its first `max_len` characters and, when the
/// last space in that prefix sits at or after [`MIN_WORD_BOUNDARY`], further
/// back to that space. Truncated previews end with [`ELLIPSIS`].
///
/// Lengths count `char`s, so multi-byte text is never split inside a code
/// point. Only the ASCII space is treated as a word separator.
///
/// # Examples
///
/// ```
/// use lms_content::excerpt;
///
/// assert_eq!(excerpt(None, 10), "");
/// assert_eq!(excerpt("hello", 10), "hello");
/// assert_eq!(excerpt("a".repeat(100).as_str(), 60), format!("{}...", "a".repeat(60)));
/// ```
pub fn excerpt<'a>(raw: impl Into<Option<&'a str>>, max_len: usize) -> String {
    let raw: Option<&str> = raw.into();
    let Some(raw) = raw.filter(|raw| !raw.is_empty()) else {
        return String::new();
    };

    let stripped = strip_tags(raw);
    let prefix_end = stripped.char_indices().nth(max_len).map(|(byte_idx, _)| byte_idx);
    let Some(prefix_end) = prefix_end else {
        return stripped.into_owned();
    };

    let prefix = &stripped[..prefix_end];
    let cut = match prefix.rfind(' ') {
        Some(byte_idx) if prefix[..byte_idx].chars().count() >= MIN_WORD_BOUNDARY => byte_idx,
        _ => prefix_end,
    };

    let mut out = String::with_capacity(cut + ELLIPSIS.len());
    out.push_str(&stripped[..cut]);
    out.push_str(ELLIPSIS);
    out
}

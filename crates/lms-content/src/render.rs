//! Markup to HTML rendering.
//!
//! Rendering is a fixed sequence of independent global substitutions. Order
//! matters and is part of the output contract:
//!
//! 1. empty input yields [`NO_CONTENT_HTML`]
//! 2. input that already looks like HTML is returned untouched
//! 3. line endings are normalized and the document is trimmed
//! 4. fenced code is lifted out into [`CodeBlocks`]
//! 5. the rest is HTML-escaped
//! 6. images, then links
//! 7. headings, six hashes down to one
//! 8. inline code
//! 9. unordered, then ordered lists
//! 10. blank-line paragraphs, inner newlines as `<br/>`
//! 11. fenced code restored as escaped `<pre><code>`
//!
//! Block elements from steps 7 and 9 are still wrapped in `<p>` by step 10.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::code_block::{CodeBlocks, strip_fences};
use crate::escape::escape_html;
use crate::lists;

/// Output for empty or absent content.
pub const NO_CONTENT_HTML: &str = "<p>No content</p>";

/// An opening, closing or self-closing tag somewhere in the text.
///
/// Whitespace is tolerated after `<`, so prose such as `a < b and c > d`
/// counts as HTML as well.
static HTML_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?\s*[a-z][\s\S]*>").unwrap());

static LINE_ENDING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n?").unwrap());

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Heading patterns, longest marker first.
static HEADING_RES: LazyLock<Vec<(usize, Regex)>> = LazyLock::new(|| {
    (1..=6)
        .rev()
        .map(|level| {
            let pattern = format!(r"(?m)^{}\s*(.*)$", "#".repeat(level));
            (level, Regex::new(&pattern).unwrap())
        })
        .collect()
});

static INLINE_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

static PARAGRAPH_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Whether `text` should be treated as ready-made HTML.
///
/// This is a coarse, whole-document switch rather than a parser: one
/// tag-like substring anywhere outside a fenced code block is enough. Tags
/// inside fences are ignored because fenced content is always shown
/// literally.
///
/// # Examples
///
/// ```
/// use lms_content::looks_like_html;
///
/// assert!(looks_like_html("<p>Hello</p>"));
/// assert!(looks_like_html("a < b and c > d"));
/// assert!(!looks_like_html("```<b>hi</b>```"));
/// assert!(!looks_like_html("# Plain markup"));
/// ```
pub fn looks_like_html(text: &str) -> bool {
    HTML_TAG_RE.is_match(&strip_fences(text))
}

/// Render lesson or course body text to HTML.
///
/// Accepts `&str` or `Option<&str>`; absent and empty input both produce
/// [`NO_CONTENT_HTML`]. Input that [`looks_like_html`] is returned as is.
/// Everything else goes through the markup passes described in the module
/// docs. Output is deterministic and rendering never fails.
///
/// # Examples
///
/// ```
/// use lms_content::render_content;
///
/// assert_eq!(render_content(None), "<p>No content</p>");
/// assert_eq!(render_content("<em>ready</em>"), "<em>ready</em>");
/// assert_eq!(
///     render_content("Line one\nline two\n\nNext"),
///     "<p>Line one<br/>line two</p>\n<p>Next</p>"
/// );
/// ```
pub fn render_content<'a>(raw: impl Into<Option<&'a str>>) -> String {
    let raw: Option<&str> = raw.into();
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => {
            tracing::trace!("Empty content, using placeholder");
            return NO_CONTENT_HTML.to_owned();
        }
    };

    if looks_like_html(raw) {
        tracing::trace!(len = raw.len(), "Content looks like HTML, passing through");
        return raw.to_owned();
    }

    let text = LINE_ENDING_RE.replace_all(raw, "\n");
    let (text, code_blocks) = CodeBlocks::extract(text.trim());
    tracing::trace!(code_blocks = code_blocks.len(), "Rendering markup");

    let text = escape_html(&text).into_owned();
    let text = render_media(&text);
    let text = render_headings(text);
    let text = INLINE_CODE_RE.replace_all(&text, "<code>$1</code>");
    let text = lists::unordered(&text);
    let text = lists::ordered(&text);

    let html = wrap_paragraphs(&text);
    code_blocks.restore(&html)
}

/// Images first: `![alt](url)` is a link pattern with a leading `!`.
fn render_media(text: &str) -> String {
    let text = IMAGE_RE.replace_all(text, |caps: &Captures| {
        format!(r#"<img src="{}" alt="{}" />"#, &caps[2], &caps[1])
    });
    LINK_RE
        .replace_all(&text, |caps: &Captures| {
            format!(
                r#"<a href="{}" target="_blank" rel="noreferrer">{}</a>"#,
                &caps[2], &caps[1]
            )
        })
        .into_owned()
}

fn render_headings(mut text: String) -> String {
    for (level, re) in HEADING_RES.iter() {
        text = re
            .replace_all(&text, |caps: &Captures| {
                format!("<h{level}>{}</h{level}>", &caps[1])
            })
            .into_owned();
    }
    text
}

fn wrap_paragraphs(text: &str) -> String {
    PARAGRAPH_BREAK_RE
        .split(text)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(|block| format!("<p>{}</p>", block.replace('\n', "<br/>")))
        .collect::<Vec<_>>()
        .join("\n")
}

//! Fenced code block protection.
//!
//! Fenced regions are lifted out of the document before any other pass runs
//! and replaced by `{{CODE_BLOCK_N}}` placeholders on their own paragraph.
//! After the markup passes and paragraph wrapping, [`CodeBlocks::restore`]
//! swaps each placeholder for an escaped `<pre><code>` block.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::escape::escape_html;

/// Non-greedy triple-backtick fence, may span lines.
static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```(.*?)```").unwrap());

/// Placeholder left behind by [`CodeBlocks::extract`].
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{CODE_BLOCK_(\d+)\}\}").unwrap());

/// Fenced code bodies captured from a document, indexed by placeholder number.
///
/// Bodies are stored verbatim (unescaped). Everything between the fences is
/// kept, including a leading info string such as `rust` and the newlines
/// adjacent to the fences.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CodeBlocks {
    blocks: Vec<String>,
}

impl CodeBlocks {
    /// Replace every fenced region in `text` with a numbered placeholder.
    ///
    /// Each placeholder is surrounded by blank lines so that it always forms
    /// its own paragraph. An unmatched trailing fence is left in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use lms_content::CodeBlocks;
    ///
    /// let (text, blocks) = CodeBlocks::extract("before ```x = 1``` after");
    /// assert_eq!(text, "before \n\n{{CODE_BLOCK_0}}\n\n after");
    /// assert_eq!(blocks.get(0), Some("x = 1"));
    /// ```
    pub fn extract(text: &str) -> (String, Self) {
        let mut blocks = Vec::new();
        let replaced = FENCE_RE.replace_all(text, |caps: &Captures| {
            blocks.push(caps[1].to_owned());
            format!("\n\n{{{{CODE_BLOCK_{}}}}}\n\n", blocks.len() - 1)
        });
        (replaced.into_owned(), Self { blocks })
    }

    /// Replace placeholders in rendered HTML with `<pre><code>` blocks.
    ///
    /// Code bodies are HTML-escaped here. A placeholder whose number has no
    /// captured body (for example one typed literally by an author) becomes
    /// an empty code block.
    pub fn restore(&self, html: &str) -> String {
        PLACEHOLDER_RE
            .replace_all(html, |caps: &Captures| {
                let code = caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|idx| self.get(idx))
                    .unwrap_or("");
                format!("<pre><code>{}</code></pre>", escape_html(code))
            })
            .into_owned()
    }

    /// Raw body of the `index`-th fenced block.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.blocks.get(index).map(String::as_str)
    }

    /// Number of captured blocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether no fenced blocks were captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Remove fenced regions entirely, leaving the surrounding prose.
pub(crate) fn strip_fences(text: &str) -> Cow<'_, str> {
    FENCE_RE.replace_all(text, "")
}

//! Content formatting for lesson and course bodies.
//!
//! Bodies arrive from the API as plain prose, a small markup dialect, or
//! ready-made HTML. This crate turns them into embeddable HTML and into short
//! plain-text previews:
//!
//! - [`render_content`]: markup to HTML through a fixed sequence of regex passes
//! - [`excerpt`]: tag-stripped preview truncated at a word boundary
//!
//! Both functions are pure and never fail; unmatched syntax falls through to
//! the next pass and ends up as paragraph text.
//!
//! # Supported markup
//!
//! - `# Heading` through `###### Heading`
//! - `` `inline code` `` and triple-backtick fenced blocks
//! - `- item` / `* item` and `1. item` lists (no nesting)
//! - `[text](url)` links and `![alt](url)` images
//! - blank-line separated paragraphs, single newlines become `<br/>`
//!
//! # Example
//!
//! ```
//! use lms_content::{excerpt, render_content};
//!
//! let html = render_content("# Arrays\n\n- fixed size\n- contiguous");
//! assert_eq!(
//!     html,
//!     "<p><h1>Arrays</h1></p>\n<p><ul><li>fixed size</li><li>contiguous</li></ul></p>"
//! );
//!
//! assert_eq!(excerpt("<p>hi <b>there</b></p>", 50), "hi there");
//! ```

mod code_block;
mod escape;
mod excerpt;
mod lists;
mod render;

pub use code_block::CodeBlocks;
pub use escape::escape_html;
pub use excerpt::{DEFAULT_EXCERPT_LEN, ELLIPSIS, MIN_WORD_BOUNDARY, excerpt, strip_tags};
pub use render::{NO_CONTENT_HTML, looks_like_html, render_content};

//! Sanitized HTML rendering for untrusted Markdown.

mod config;
mod markdown;
mod sanitize;

pub use config::Config;
pub use markdown::{MarkdownRenderer, RenderOptions};
pub use sanitize::{HtmlSanitizer, clean_default};

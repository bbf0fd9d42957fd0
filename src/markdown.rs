//! Markdown rendering with GitHub Flavored Markdown support.
//!
//! This module provides markdown rendering using comrak with GFM extensions
//! (tables, strikethrough, autolinks, task lists) and ammonia sanitization
//! so the output is safe to insert into a document unescaped.

mod options;
mod renderer;

pub use options::RenderOptions;
pub use renderer::MarkdownRenderer;

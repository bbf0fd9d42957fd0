//! Markdown rendering with GitHub Flavored Markdown support.

use anyhow::{Context, Result};
use comrak::{Arena, Options, format_html, parse_document};
use std::path::Path;
use tracing::error;

use super::RenderOptions;
use crate::sanitize::{self, HtmlSanitizer};

/// Renders untrusted markdown to sanitized HTML.
///
/// Converts markdown with comrak using GFM extensions (tables,
/// strikethrough, autolinks, task lists), then strips unsafe markup with
/// ammonia restricted to the HTML profile. Rendering never fails: any
/// conversion error degrades to a sanitized rendering of the raw source
/// text, so callers always receive displayable HTML.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
    sanitizer: HtmlSanitizer,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with the default rendering options.
    ///
    /// Soft line breaks render as `<br>`, GFM extensions are enabled,
    /// heading ids are disabled, and the extended dialect is allowed.
    pub fn new() -> Self {
        Self::with_options(RenderOptions::default())
    }

    /// Creates renderer with explicit rendering options.
    ///
    /// # Arguments
    ///
    /// * `options`: Rendering options, fixed for the renderer's lifetime
    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            options: options.to_comrak(),
            sanitizer: HtmlSanitizer::html_profile(),
        }
    }

    /// Renders markdown content to sanitized HTML.
    ///
    /// Empty input returns an empty string without parsing. Otherwise the
    /// content is converted to HTML and sanitized with the HTML profile.
    /// When conversion fails, logs a diagnostic and falls back to
    /// sanitizing the raw input text rather than any partially-produced
    /// HTML, keeping unsafe markup out of the output.
    ///
    /// The async signature is part of the interface contract; comrak
    /// executes synchronously, so the returned future resolves
    /// immediately.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown content to render
    ///
    /// # Returns
    ///
    /// Sanitized HTML, safe for direct insertion into a document
    pub async fn render(&self, content: &str) -> String {
        if content.is_empty() {
            return String::new();
        }

        match self.convert(content) {
            Ok(html) => self.sanitizer.clean(&html),
            Err(err) => {
                error!("markdown rendering failed: {err:#}");
                self.render_fallback(content)
            }
        }
    }

    /// Renders markdown file at given path.
    ///
    /// Convenience method that reads the file and renders its content.
    ///
    /// # Arguments
    ///
    /// * `path`: Path to markdown file
    ///
    /// # Returns
    ///
    /// Sanitized HTML string
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read; rendering itself never
    /// fails
    pub async fn render_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read markdown file")?;
        Ok(self.render(&content).await)
    }

    /// Converts markdown to HTML with comrak.
    ///
    /// Parses into an AST and formats back out as HTML. Raw HTML in the
    /// source passes through here untouched; sanitization happens in the
    /// caller.
    ///
    /// # Errors
    ///
    /// Returns error if HTML formatting or UTF8 conversion fails
    fn convert(&self, content: &str) -> Result<String> {
        let arena = Arena::new();
        let root = parse_document(&arena, content, &self.options);

        let mut html = Vec::new();
        format_html(root, &self.options, &mut html)
            .context("Failed to format markdown AST as HTML")?;

        String::from_utf8(html).context("Markdown conversion produced invalid UTF8")
    }

    /// Sanitizes the raw source text for the failure path.
    ///
    /// Uses default sanitizer settings on the original input, so markdown
    /// syntax shows up as literal text and embedded HTML is stripped.
    fn render_fallback(&self, content: &str) -> String {
        sanitize::clean_default(content)
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

//! HTML sanitization for rendered markdown.
//!
//! Wraps ammonia with the rule sets used by the renderer: a restricted
//! HTML profile for converted markdown and the library defaults for the
//! raw-text fallback path.

use ammonia::Builder;

/// Sanitizes HTML with a rule set restricted to standard document markup.
///
/// The profile starts from ammonia's default allowlist, which permits
/// ordinary HTML elements and excludes scripts, event-handler attributes,
/// dangerous URL schemes, and the SVG/MathML namespaces. On top of that it
/// strips comments, allows the checkbox inputs that GFM task lists
/// produce, and forces `rel="noopener noreferrer"` on links.
pub struct HtmlSanitizer {
    cleaner: Builder<'static>,
}

impl HtmlSanitizer {
    /// Creates sanitizer with the HTML profile rule set.
    pub fn html_profile() -> Self {
        let mut cleaner = Builder::default();
        cleaner
            .strip_comments(true)
            .add_tags(&["input"])
            .add_tag_attributes("input", &["type", "checked", "disabled"])
            .link_rel(Some("noopener noreferrer"));
        Self { cleaner }
    }

    /// Sanitizes an HTML string with the profile.
    ///
    /// Cleaning is idempotent: output fed back in comes out unchanged.
    ///
    /// # Arguments
    ///
    /// * `html`: HTML to sanitize
    ///
    /// # Returns
    ///
    /// Sanitized HTML string
    pub fn clean(&self, html: &str) -> String {
        self.cleaner.clean(html).to_string()
    }
}

impl Default for HtmlSanitizer {
    fn default() -> Self {
        Self::html_profile()
    }
}

/// Sanitizes an HTML string with ammonia's default settings.
///
/// Used by the rendering fallback path, where the input is the raw
/// markdown source rather than converted HTML.
pub fn clean_default(html: &str) -> String {
    ammonia::clean(html)
}

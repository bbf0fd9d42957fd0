//! Renderer configuration.

use comrak::Options;

/// Markdown rendering options, fixed when a renderer is constructed.
///
/// Defaults match the production configuration: soft breaks render as
/// `<br>`, GFM extensions are enabled, headings carry no generated ids,
/// and the extended dialect is allowed.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Render soft line breaks as `<br>` elements.
    pub breaks: bool,

    /// Enable GitHub Flavored Markdown extensions: tables, strikethrough,
    /// autolinks, task lists.
    pub gfm: bool,

    /// Generate `id` attributes on headings.
    pub header_ids: bool,

    /// Obfuscate autolinked email addresses. Accepted for configuration
    /// compatibility; comrak emits addresses verbatim either way.
    pub mangle: bool,

    /// Restrict parsing to strict CommonMark. Takes precedence over `gfm`,
    /// so the GFM extensions are disabled when set.
    pub pedantic: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            breaks: true,
            gfm: true,
            header_ids: false,
            mangle: false,
            pedantic: false,
        }
    }
}

impl RenderOptions {
    /// Builds comrak options from this configuration.
    ///
    /// Raw HTML is allowed through the converter unconditionally; the
    /// sanitizer downstream is responsible for stripping unsafe markup.
    pub(crate) fn to_comrak<'a>(&self) -> Options<'a> {
        let mut options = Options::default();

        // Extension options (GFM features)
        if self.gfm && !self.pedantic {
            options.extension.strikethrough = true;
            options.extension.table = true;
            options.extension.autolink = true;
            options.extension.tasklist = true;
        }

        if self.header_ids {
            options.extension.header_ids = Some(String::new());
        }

        // Render options
        options.render.hardbreaks = self.breaks;
        options.render.unsafe_ = true;

        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        // Arrange & Act
        let options = RenderOptions::default();

        // Assert
        assert!(options.breaks, "Soft breaks should default to <br>");
        assert!(options.gfm, "GFM extensions should default to enabled");
        assert!(!options.header_ids, "Heading ids should default to disabled");
        assert!(!options.mangle, "Email mangling should default to disabled");
        assert!(!options.pedantic, "Pedantic mode should default to disabled");
    }

    #[test]
    fn test_to_comrak_gfm_extensions() {
        // Arrange
        let options = RenderOptions::default();

        // Act
        let comrak = options.to_comrak();

        // Assert
        assert!(comrak.extension.table, "Tables should be enabled");
        assert!(
            comrak.extension.strikethrough,
            "Strikethrough should be enabled"
        );
        assert!(comrak.extension.autolink, "Autolinks should be enabled");
        assert!(comrak.extension.tasklist, "Task lists should be enabled");
        assert!(comrak.render.hardbreaks, "Hardbreaks should be enabled");
    }

    #[test]
    fn test_to_comrak_pedantic_disables_extensions() {
        // Arrange
        let options = RenderOptions {
            pedantic: true,
            ..RenderOptions::default()
        };

        // Act
        let comrak = options.to_comrak();

        // Assert
        assert!(!comrak.extension.table, "Pedantic should disable tables");
        assert!(
            !comrak.extension.strikethrough,
            "Pedantic should disable strikethrough"
        );
        assert!(
            !comrak.extension.autolink,
            "Pedantic should disable autolinks"
        );
        assert!(
            !comrak.extension.tasklist,
            "Pedantic should disable task lists"
        );
    }

    #[test]
    fn test_to_comrak_header_ids_disabled_by_default() {
        // Arrange
        let options = RenderOptions::default();

        // Act
        let comrak = options.to_comrak();

        // Assert
        assert!(
            comrak.extension.header_ids.is_none(),
            "Heading id generation should be off by default"
        );
    }

    #[test]
    fn test_to_comrak_header_ids_enabled() {
        // Arrange
        let options = RenderOptions {
            header_ids: true,
            ..RenderOptions::default()
        };

        // Act
        let comrak = options.to_comrak();

        // Assert
        assert!(
            comrak.extension.header_ids.is_some(),
            "Heading id generation should follow the option"
        );
    }

    #[test]
    fn test_to_comrak_breaks_disabled() {
        // Arrange
        let options = RenderOptions {
            breaks: false,
            ..RenderOptions::default()
        };

        // Act
        let comrak = options.to_comrak();

        // Assert
        assert!(
            !comrak.render.hardbreaks,
            "Hardbreaks should follow the breaks option"
        );
    }
}

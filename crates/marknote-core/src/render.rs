//! Markdown to HTML rendering.
//!
//! Rendering is a pure function of the input text. `ComrakRenderer` uses
//! CommonMark with the GitHub Flavored Markdown extensions; raw HTML in the
//! source is omitted and unsafe link schemes are dropped, so the output is safe
//! to inject into the note list.

use crate::error::RenderError;
use crate::util::escape_html;

/// Converts markdown text into HTML.
pub trait MarkdownRenderer {
    fn render(&self, markdown: &str) -> Result<String, RenderError>;
}

impl<R: MarkdownRenderer + ?Sized> MarkdownRenderer for &R {
    fn render(&self, markdown: &str) -> Result<String, RenderError> {
        (**self).render(markdown)
    }
}

/// `comrak`-backed renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComrakRenderer {
    gfm: bool,
}

impl Default for ComrakRenderer {
    fn default() -> Self {
        Self { gfm: true }
    }
}

impl ComrakRenderer {
    /// Plain CommonMark without GFM extensions
    #[must_use]
    pub const fn commonmark() -> Self {
        Self { gfm: false }
    }
}

impl MarkdownRenderer for ComrakRenderer {
    fn render(&self, markdown: &str) -> Result<String, RenderError> {
        let mut options = comrak::Options::default();
        if self.gfm {
            options.extension.strikethrough = true;
            options.extension.table = true;
            options.extension.autolink = true;
            options.extension.tasklist = true;
        }
        options.render.unsafe_ = false;

        Ok(comrak::markdown_to_html(markdown, &options))
    }
}

/// HTML shown for a note whose markdown could not be rendered.
#[must_use]
pub fn fallback_html(markdown: &str) -> String {
    format!("<pre>{}</pre>\n", escape_html(markdown))
}

/// Render `markdown`, degrading to [`fallback_html`] on failure.
pub fn render_or_fallback<R: MarkdownRenderer + ?Sized>(renderer: &R, markdown: &str) -> String {
    match renderer.render(markdown) {
        Ok(html) => html,
        Err(error) => {
            tracing::warn!("Markdown rendering failed, showing raw text: {}", error);
            fallback_html(markdown)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenRenderer;

    impl MarkdownRenderer for BrokenRenderer {
        fn render(&self, _markdown: &str) -> Result<String, RenderError> {
            Err(RenderError("boom".to_string()))
        }
    }

    #[test]
    fn renders_heading() {
        let html = ComrakRenderer::default().render("# Hi").unwrap();
        assert_eq!(html.trim(), "<h1>Hi</h1>");
    }

    #[test]
    fn renders_gfm_extensions() {
        let renderer = ComrakRenderer::default();
        let html = renderer.render("~~gone~~\n\n- [x] done").unwrap();
        assert!(html.contains("<del>gone</del>"));
        assert!(html.contains("checkbox"));

        let table = renderer.render("| a | b |\n|---|---|\n| 1 | 2 |").unwrap();
        assert!(table.contains("<table>"));
    }

    #[test]
    fn commonmark_leaves_strikethrough_alone() {
        let html = ComrakRenderer::commonmark().render("~~gone~~").unwrap();
        assert!(!html.contains("<del>"));
    }

    #[test]
    fn omits_raw_html() {
        let html = ComrakRenderer::default()
            .render("<script>alert(1)</script>\n\nhello")
            .unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("<p>hello</p>"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let renderer = ComrakRenderer::default();
        let source = "Some *emphasis* and `code`";
        assert_eq!(renderer.render(source), renderer.render(source));
    }

    #[test]
    fn failing_renderer_falls_back_to_escaped_text() {
        let html = render_or_fallback(&BrokenRenderer, "<b>hi</b> & bye");
        assert_eq!(html, "<pre>&lt;b&gt;hi&lt;/b&gt; &amp; bye</pre>\n");
    }
}

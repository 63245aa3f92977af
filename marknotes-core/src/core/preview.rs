//! Markdown preview rendering and editor/preview scroll sync.

use pulldown_cmark::{html as md_html, Options, Parser};

/// Converts a CommonMark markdown string to an HTML string.
///
/// Enables the GFM extensions the preview supports: tables, strikethrough and
/// task lists. Inline HTML is passed through untouched; fenced code blocks
/// carry a `language-*` class for the host's syntax highlighter.
pub fn render_markdown_to_html(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);
    let parser = Parser::new_ext(text, options);
    let mut html_output = String::new();
    md_html::push_html(&mut html_output, parser);
    html_output
}

/// How far the editor is scrolled, as a fraction in `[0, 1]`.
///
/// Content that fits without scrolling reports `0`.
pub fn scroll_fraction(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let max_scroll = scroll_height - client_height;
    if !max_scroll.is_finite() || max_scroll <= 0.0 || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / max_scroll).clamp(0.0, 1.0)
}

/// The preview scroll offset that matches `fraction` of the editor.
pub fn scroll_offset(fraction: f64, scroll_height: f64, client_height: f64) -> f64 {
    let max_scroll = (scroll_height - client_height).max(0.0);
    max_scroll * fraction.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_markdown_bold() {
        assert!(render_markdown_to_html("**hi**").contains("<strong>hi</strong>"));
    }

    #[test]
    fn test_render_markdown_heading() {
        assert!(render_markdown_to_html("# Title").contains("<h1>Title</h1>"));
    }

    #[test]
    fn test_render_markdown_table_and_strikethrough() {
        let html = render_markdown_to_html("| a | b |\n|---|---|\n| 1 | 2 |\n\n~~gone~~");
        assert!(html.contains("<table>"));
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn test_render_markdown_task_list() {
        let html = render_markdown_to_html("- [x] done");
        assert!(html.contains("checkbox"));
    }

    #[test]
    fn test_render_markdown_passes_inline_html() {
        assert!(render_markdown_to_html("a <kbd>b</kbd>").contains("<kbd>b</kbd>"));
    }

    #[test]
    fn test_render_markdown_code_language_class() {
        let html = render_markdown_to_html("```rust\nfn main() {}\n```");
        assert!(html.contains("class=\"language-rust\""));
    }

    #[test]
    fn test_render_markdown_empty() {
        assert_eq!(render_markdown_to_html(""), "");
    }

    #[test]
    fn test_scroll_fraction() {
        assert_eq!(scroll_fraction(0.0, 1000.0, 500.0), 0.0);
        assert_eq!(scroll_fraction(250.0, 1000.0, 500.0), 0.5);
        assert_eq!(scroll_fraction(500.0, 1000.0, 500.0), 1.0);
        assert_eq!(scroll_fraction(900.0, 1000.0, 500.0), 1.0);
    }

    #[test]
    fn test_scroll_fraction_without_overflow_is_zero() {
        assert_eq!(scroll_fraction(0.0, 400.0, 500.0), 0.0);
        assert_eq!(scroll_fraction(0.0, 500.0, 500.0), 0.0);
    }

    #[test]
    fn test_scroll_fraction_with_non_finite_geometry_is_zero() {
        assert_eq!(scroll_fraction(10.0, f64::NAN, 500.0), 0.0);
        assert_eq!(scroll_fraction(10.0, 1000.0, f64::NAN), 0.0);
        assert_eq!(scroll_fraction(10.0, f64::INFINITY, 500.0), 0.0);
        assert_eq!(scroll_fraction(f64::NAN, 1000.0, 500.0), 0.0);
    }

    #[test]
    fn test_scroll_offset() {
        assert_eq!(scroll_offset(0.5, 2000.0, 1000.0), 500.0);
        assert_eq!(scroll_offset(2.0, 2000.0, 1000.0), 1000.0);
        assert_eq!(scroll_offset(0.5, 800.0, 1000.0), 0.0);
    }
}

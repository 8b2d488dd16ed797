//! Standalone HTML viewer pages
//!
//! A page embeds one diagram's source inside `<pre class="mermaid">`, loads
//! Mermaid from a CDN to draw it, and ships a small script for zooming
//! (slider, buttons, Ctrl/Cmd + wheel), drag-to-pan and fit-to-width on load.
//! Nothing here interprets the diagram source.

use regex::{Captures, Regex};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, span, trace, Level};

use crate::core::{PreviewError, RenderOptions, Result, Theme};

/// Mermaid build loaded by every generated page
pub const MERMAID_CDN: &str = "https://cdn.jsdelivr.net/npm/mermaid@10/dist/mermaid.min.js";

/// Zoom range offered by the viewer
pub const MIN_ZOOM: f64 = 0.25;
pub const MAX_ZOOM: f64 = 4.0;
/// Upper bound for the automatic fit-to-width zoom
pub const MAX_FIT_ZOOM: f64 = 2.5;
/// Delay before fitting, giving Mermaid time to draw
pub const FIT_DELAY_MS: u32 = 250;

const VIEWER_TEMPLATE: &str = include_str!("viewer.html");

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\{(\w+)\}\}").unwrap());

/// Escape text for a markup text node
///
/// `&` is replaced first so the entities introduced for `<` and `>` are not
/// escaped a second time.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render a complete viewer document for one diagram
pub fn render_page(code: &str, title: &str, options: &RenderOptions) -> String {
    let render_span = span!(Level::DEBUG, "render_page", code_len = code.len());
    let _enter = render_span.enter();

    let palette = options.palette();
    let title = escape_html(title);
    let code = escape_html(code);
    let mermaid_config = serde_json::json!({
        "startOnLoad": true,
        "theme": options.theme,
        "themeVariables": {
            "fontSize": format!("{}px", options.font_size),
            "lineHeight": format!("{}px", options.line_height),
        },
    })
    .to_string()
    .replace("</", "<\\/");

    let page = PLACEHOLDER.replace_all(VIEWER_TEMPLATE, |caps: &Captures| -> String {
        match &caps[1] {
            "title" => title.clone(),
            "code" => code.clone(),
            "background" => palette.background.to_string(),
            "foreground" => palette.foreground.to_string(),
            "border" => palette.border.to_string(),
            "toolbar_background" => palette.toolbar_background.to_string(),
            "initial_zoom" => options.initial_zoom.to_string(),
            "min_zoom" => MIN_ZOOM.to_string(),
            "max_zoom" => MAX_ZOOM.to_string(),
            "max_fit_zoom" => MAX_FIT_ZOOM.to_string(),
            "fit_delay_ms" => FIT_DELAY_MS.to_string(),
            "mermaid_src" => MERMAID_CDN.to_string(),
            "mermaid_config" => mermaid_config.clone(),
            other => {
                trace!(placeholder = other, "Unknown template placeholder left as-is");
                caps[0].to_string()
            }
        }
    });

    debug!(
        theme = %options.theme,
        dark = Theme::classify(&options.theme).is_dark(),
        len = page.len(),
        "Rendered viewer page"
    );
    page.into_owned()
}

/// Render a viewer page and write it to `out_path`, replacing any existing file
pub fn write_page(code: &str, title: &str, out_path: &Path, options: &RenderOptions) -> Result<()> {
    let page = render_page(code, title, options);
    fs::write(out_path, page).map_err(|e| PreviewError::write(out_path, e))?;
    debug!(path = %out_path.display(), "Wrote viewer page");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dark_options() -> RenderOptions {
        RenderOptions {
            theme: "Dark".to_string(),
            ..RenderOptions::default()
        }
    }

    #[test]
    fn test_escape_order() {
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("A-->B"), "A--&gt;B");
        assert_eq!(escape_html("<&>"), "&lt;&amp;&gt;");
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_page_embeds_escaped_code() {
        let page = render_page("graph TD; A-->B", "doc.md – diagram 1/1", &RenderOptions::default());
        assert!(page.contains("<pre class=\"mermaid\">\ngraph TD; A--&gt;B\n"));
        assert!(page.contains("<title>doc.md – diagram 1/1</title>"));
        assert!(page.contains("<strong>doc.md – diagram 1/1</strong>"));
    }

    #[test]
    fn test_page_has_no_unfilled_placeholders() {
        let page = render_page("graph LR; X-->Y", "t", &RenderOptions::default());
        assert!(!page.contains("{{"));
        assert!(!page.contains("mermaid_config"));
    }

    #[test]
    fn test_code_placeholders_are_not_expanded() {
        let page = render_page("graph TD; A[\"{{title}}\"]", "Secret", &RenderOptions::default());
        assert!(page.contains("A[\"{{title}}\"]"));
    }

    #[test]
    fn test_light_palette_by_default() {
        let page = render_page("graph TD", "t", &RenderOptions::default());
        assert!(page.contains("background: #ffffff;"));
        assert!(page.contains("color: #111111;"));
    }

    #[test]
    fn test_dark_palette() {
        let page = render_page("graph TD", "t", &dark_options());
        assert!(page.contains("background: #0b0b0c;"));
        assert!(page.contains("color: #f2f2f2;"));
        assert!(page.contains("rgba(255,255,255,.06)"));
    }

    #[test]
    fn test_mermaid_config() {
        let options = RenderOptions {
            theme: "forest".to_string(),
            font_size: 16,
            line_height: 22,
            initial_zoom: 0.8,
            open: false,
        };
        let page = render_page("graph TD", "t", &options);
        assert!(page.contains("\"theme\":\"forest\""));
        assert!(page.contains("\"fontSize\":\"16px\""));
        assert!(page.contains("\"lineHeight\":\"22px\""));
        assert!(page.contains("\"startOnLoad\":true"));
        assert!(page.contains("value=\"0.8\""));
        assert!(page.contains("const INITIAL_ZOOM = 0.8;"));
        assert!(page.contains(MERMAID_CDN));
    }

    #[test]
    fn test_theme_name_is_json_escaped() {
        let options = RenderOptions {
            theme: "x\"</script>".to_string(),
            ..RenderOptions::default()
        };
        let page = render_page("graph TD", "t", &options);
        assert!(page.contains(r#""theme":"x\"<\/script>""#));
        assert!(!page.contains("x\\\"</script>"));
    }

    #[test]
    fn test_write_page_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("doc_1.html");
        fs::write(&out, "stale").unwrap();

        write_page("graph TD; A-->B", "doc.md", &out, &RenderOptions::default()).unwrap();
        let written = fs::read_to_string(&out).unwrap();
        assert!(written.starts_with("<!doctype html>"));
        assert!(written.contains("graph TD; A--&gt;B"));
    }

    #[test]
    fn test_write_page_missing_parent() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("missing").join("doc_1.html");
        let err = write_page("graph TD", "doc.md", &out, &RenderOptions::default()).unwrap_err();
        assert!(matches!(err, PreviewError::Write { .. }));
        assert_eq!(err.exit_code(), 1);
    }
}

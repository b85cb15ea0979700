//! Shell template abstraction.

use crate::escape::html_escape;

/// Head content for the shell.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    /// Page title.
    pub title: Option<String>,
    /// Named meta tags.
    pub meta: Vec<(String, String)>,
    /// `http-equiv` meta tags.
    pub http_equiv: Vec<(String, String)>,
    /// Raw link and style tags.
    pub links: Vec<String>,
}

impl HeadContent {
    /// Create new head content with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add an `http-equiv` meta tag (e.g. `refresh`).
    pub fn with_http_equiv(mut self, name: &str, content: &str) -> Self {
        self.http_equiv.push((name.to_string(), content.to_string()));
        self
    }

    /// Add inline CSS styles.
    pub fn with_style(mut self, css: &str) -> Self {
        self.links.push(format!("<style>{}</style>", css));
        self
    }

    /// Render head content to HTML.
    pub fn render(&self) -> String {
        let mut html = String::from("<meta charset=\"utf-8\">\n");

        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{}</title>\n", html_escape(title)));
        }

        for (name, content) in &self.meta {
            html.push_str(&format!(
                "<meta name=\"{}\" content=\"{}\">\n",
                html_escape(name),
                html_escape(content)
            ));
        }

        for (name, content) in &self.http_equiv {
            html.push_str(&format!(
                "<meta http-equiv=\"{}\" content=\"{}\">\n",
                html_escape(name),
                html_escape(content)
            ));
        }

        for link in &self.links {
            html.push_str(link);
            html.push('\n');
        }

        html
    }
}

/// Shell template wrapped around streamed sections.
#[derive(Debug, Clone)]
pub struct Shell {
    /// Document language.
    pub lang: String,
    /// Head content.
    pub head: HeadContent,
    /// HTML before sections (opening body, banner, navigation).
    pub body_start: String,
    /// HTML after sections (closing tags).
    pub body_end: String,
}

impl Shell {
    /// Create a new shell with basic structure.
    pub fn new(head: HeadContent) -> Self {
        Self {
            lang: "en".to_string(),
            head,
            body_start: "<body>\n<main>\n".to_string(),
            body_end: "</main>\n</body>\n</html>".to_string(),
        }
    }

    /// Set custom body start HTML.
    pub fn with_body_start(mut self, html: impl Into<String>) -> Self {
        self.body_start = html.into();
        self
    }

    /// Set custom body end HTML.
    pub fn with_body_end(mut self, html: impl Into<String>) -> Self {
        self.body_end = html.into();
        self
    }

    /// Render the opening part of the shell (before sections).
    pub fn render_opening(&self) -> String {
        let mut html = format!("<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n", html_escape(&self.lang));
        html.push_str(&self.head.render());
        html.push_str("</head>\n");
        html.push_str(&self.body_start);
        html
    }

    /// Render the closing part of the shell (after sections).
    pub fn render_closing(&self) -> String {
        self.body_end.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_render() {
        let head = HeadContent::new("Opinions & Crypto")
            .with_meta("viewport", "width=device-width, initial-scale=1")
            .with_http_equiv("refresh", "3; url=/#newsletter")
            .with_style("body{margin:0}");
        let html = head.render();

        assert!(html.starts_with("<meta charset=\"utf-8\">"));
        assert!(html.contains("<title>Opinions &amp; Crypto</title>"));
        assert!(html.contains(r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#));
        assert!(html.contains(r#"<meta http-equiv="refresh" content="3; url=/#newsletter">"#));
        assert!(html.contains("<style>body{margin:0}</style>"));
    }

    #[test]
    fn test_shell_wraps_sections() {
        let shell = Shell::new(HeadContent::new("t"))
            .with_body_start("<body><nav></nav>")
            .with_body_end("</body></html>");

        let opening = shell.render_opening();
        assert!(opening.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(opening.ends_with("<body><nav></nav>"));
        assert_eq!(shell.render_closing(), "</body></html>");
    }
}

//! HTML escaping.

/// Escape text for use in element content or a double-quoted attribute.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_markup() {
        assert_eq!(
            html_escape(r#"<a href="x">Grimaldi's & co</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Grimaldi&#39;s &amp; co&lt;/a&gt;"
        );
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(html_escape("messi.base.eth"), "messi.base.eth");
    }
}

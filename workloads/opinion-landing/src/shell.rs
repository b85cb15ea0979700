//! Document shell: head, banner, navigation and footer.

use omc_streaming::{html_escape, HeadContent, Shell};

use crate::data::HeaderContent;
use crate::styles::LANDING_STYLES;

/// Build the shell. `refresh` adds a meta refresh back to the form.
pub fn create_shell(header: &HeaderContent, refresh: Option<u64>) -> Shell {
    let mut head = HeadContent::new("OpinionMarketCap | Trade Opinions, Not Just Crypto")
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_meta(
            "description",
            "The first decentralized opinion exchange platform on Base",
        )
        .with_style(LANDING_STYLES);

    if let Some(seconds) = refresh {
        head = head.with_http_equiv("refresh", &format!("{}; url=/#newsletter", seconds));
    }

    Shell::new(head)
        .with_body_start(render_body_start(header))
        .with_body_end("\n</main>\n</body>\n</html>")
}

fn render_body_start(header: &HeaderContent) -> String {
    let links: String = header
        .links
        .iter()
        .map(|link| {
            format!(
                r#"
                <a href="{}" class="nav-link">{} <span aria-hidden="true">↗</span></a>"#,
                html_escape(&link.href),
                html_escape(&link.label)
            )
        })
        .collect();

    format!(
        r#"<body>
<div class="top-banner">{banner}</div>
<nav class="site-nav">
    <div class="container nav-inner">
        <div class="nav-brand">
            <span class="brand-icon" aria-hidden="true">📈</span>
            <span class="brand-name">{brand}</span>{links}
        </div>
        <button type="button" class="btn wallet-button">{wallet}</button>
    </div>
</nav>
<main>
"#,
        banner = html_escape(&header.banner),
        brand = html_escape(&header.brand),
        links = links,
        wallet = html_escape(&header.wallet_label),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_has_banner_nav_and_links() {
        let opening = create_shell(&HeaderContent::default(), None).render_opening();
        assert!(opening.contains(r#"<div class="top-banner">🚀 Built on Base blockchain"#));
        assert!(opening.contains(r#"<a href="/roadmap" class="nav-link">Roadmap"#));
        assert!(opening.contains(r#"<a href="/twitter" class="nav-link">Twitter"#));
        assert!(opening.contains(">Connect Wallet</button>"));
        assert!(!opening.contains("http-equiv"));
    }

    #[test]
    fn test_refresh_meta() {
        let opening = create_shell(&HeaderContent::default(), Some(3)).render_opening();
        assert!(opening.contains(r#"<meta http-equiv="refresh" content="3; url=/#newsletter">"#));
    }
}

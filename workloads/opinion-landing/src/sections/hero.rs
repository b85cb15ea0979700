//! Hero banner with platform stats.

use omc_streaming::html_escape;

use crate::data::HeroContent;

/// Render the hero section.
pub fn render_hero(content: &HeroContent) -> String {
    let stats: String = content
        .stats
        .iter()
        .map(|stat| {
            format!(
                r#"
            <div class="card stat-card">
                <div class="stat-value">{}</div>
                <div class="stat-label">{}</div>
            </div>"#,
                html_escape(&stat.value),
                html_escape(&stat.label)
            )
        })
        .collect();

    format!(
        r#"<section class="hero container" data-section="hero">
    <h1 class="hero-title">{}</h1>
    <p class="hero-subtitle">{}</p>
    <div class="hero-actions">
        <button type="button" class="btn">{}</button>
        <button type="button" class="btn-outline">{}</button>
    </div>
    <div class="stats-grid">{}
    </div>
</section>
"#,
        html_escape(&content.title),
        html_escape(&content.subtitle),
        html_escape(&content.primary_cta),
        html_escape(&content.secondary_cta),
        stats
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_renders_title_and_stats() {
        let html = render_hero(&HeroContent::default());
        assert!(html.contains(r#"<h1 class="hero-title">Trade Opinions, Not Just Crypto</h1>"#));
        assert_eq!(html.matches("stat-card").count(), 3);
        assert!(html.contains(r#"<div class="stat-value">$5.82M</div>"#));
    }
}

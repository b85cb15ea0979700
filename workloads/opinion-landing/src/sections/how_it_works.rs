//! "How It Works" cards.

use omc_streaming::html_escape;

use crate::data::HowItWorksContent;

/// Render the how-it-works section.
pub fn render_how_it_works(content: &HowItWorksContent) -> String {
    let cards: String = content
        .cards
        .iter()
        .map(|card| {
            let example = card
                .example
                .as_ref()
                .map(|text| format!(r#"<div class="step-example">{}</div>"#, html_escape(text)))
                .unwrap_or_default();

            format!(
                r#"
        <div class="card step-card">
            <h3>{}</h3>
            <p>{}</p>
            {}
        </div>"#,
                html_escape(&card.title),
                html_escape(&card.body),
                example
            )
        })
        .collect();

    format!(
        r#"<section class="how-it-works container" data-section="how-it-works">
    <h2>{}</h2>
    <div class="steps">{}
    </div>
</section>
"#,
        html_escape(&content.title),
        cards
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_four_cards_and_one_example() {
        let html = render_how_it_works(&HowItWorksContent::default());
        assert_eq!(html.matches(r#"class="card step-card""#).count(), 4);
        assert_eq!(html.matches("step-example").count(), 1);
        assert!(html.contains("you receive 950 USDC (95%)"));
    }
}

//! Static content for the landing page.

use serde::{Deserialize, Serialize};

/// A navigation link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

/// Top banner, brand and navigation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderContent {
    pub banner: String,
    pub brand: String,
    pub links: Vec<NavLink>,
    /// Label of the wallet button. The button has no handler yet.
    pub wallet_label: String,
}

impl Default for HeaderContent {
    fn default() -> Self {
        Self {
            banner: "🚀 Built on Base blockchain - The most efficient L2 for Web3 social applications"
                .to_string(),
            brand: "OpinionMarketCap".to_string(),
            links: vec![NavLink::new("Roadmap", "/roadmap"), NavLink::new("Twitter", "/twitter")],
            wallet_label: "Connect Wallet".to_string(),
        }
    }
}

/// A headline number under the hero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

impl Stat {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Hero banner with platform stats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    pub primary_cta: String,
    pub secondary_cta: String,
    pub stats: Vec<Stat>,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            title: "Trade Opinions, Not Just Crypto".to_string(),
            subtitle: "The first decentralized opinion exchange platform on Base".to_string(),
            primary_cta: "Start Trading".to_string(),
            secondary_cta: "Learn More".to_string(),
            stats: vec![
                Stat::new("1,234", "Active Questions"),
                Stat::new("$5.82M", "Total Volume in USDC"),
                Stat::new("892", "Active Traders"),
            ],
        }
    }
}

/// One "How It Works" card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepCard {
    pub title: String,
    pub body: String,
    /// Worked example shown in a shaded box.
    pub example: Option<String>,
}

impl StepCard {
    pub fn new(title: &str, body: &str) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
            example: None,
        }
    }

    pub fn with_example(mut self, example: &str) -> Self {
        self.example = Some(example.to_string());
        self
    }
}

/// "How It Works" section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HowItWorksContent {
    pub title: String,
    pub cards: Vec<StepCard>,
}

impl Default for HowItWorksContent {
    fn default() -> Self {
        Self {
            title: "How It Works".to_string(),
            cards: vec![
                StepCard::new("Change Opinions", "Buy the right to change opinions using USDC")
                    .with_example(
                        "Example: If someone changes your opinion for 1000 USDC, you receive 950 USDC (95%)",
                    ),
                StepCard::new(
                    "Exponential Growth",
                    "~15% price increase per trade. After 100 trades, opinions can cost millions to change!",
                ),
                StepCard::new(
                    "Permanent Opinions",
                    "Engrave unchangeable opinions for 100,000,000 USDC",
                ),
                StepCard::new(
                    "Add Question and make a passive income",
                    "First phase, only admin adds question. Soon, users can add questions for a fee and earn 4% on each",
                ),
            ],
        }
    }
}

/// Copy around the newsletter form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsletterContent {
    pub title: String,
    pub blurb: String,
    pub placeholder: String,
    pub submit_label: String,
    pub pending_label: String,
}

impl Default for NewsletterContent {
    fn default() -> Self {
        Self {
            title: "Stay Updated".to_string(),
            blurb: "Get early access and updates about OpinionMarketCap".to_string(),
            placeholder: "Enter your email".to_string(),
            submit_label: "Subscribe".to_string(),
            pending_label: "Subscribing...".to_string(),
        }
    }
}

/// Full page content.
#[derive(Debug, Clone, Default)]
pub struct LandingPageContent {
    pub header: HeaderContent,
    pub hero: HeroContent,
    /// Title above the questions table.
    pub questions_title: String,
    /// Number of rows requested from the question source.
    pub questions_limit: usize,
    pub how_it_works: HowItWorksContent,
    pub newsletter: NewsletterContent,
}

impl LandingPageContent {
    pub fn load() -> Self {
        Self {
            questions_title: "Top Questions".to_string(),
            questions_limit: 5,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_fills_table_settings() {
        let content = LandingPageContent::load();
        assert_eq!(content.questions_title, "Top Questions");
        assert_eq!(content.questions_limit, 5);
    }

    #[test]
    fn test_hero_has_three_stats() {
        let hero = HeroContent::default();
        let labels: Vec<&str> = hero.stats.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["Active Questions", "Total Volume in USDC", "Active Traders"]);
    }

    #[test]
    fn test_only_first_card_has_example() {
        let cards = HowItWorksContent::default().cards;
        assert_eq!(cards.len(), 4);
        assert!(cards[0].example.is_some());
        assert!(cards[1..].iter().all(|c| c.example.is_none()));
    }

    #[test]
    fn test_header_links() {
        let header = HeaderContent::default();
        let hrefs: Vec<&str> = header.links.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(hrefs, ["/roadmap", "/twitter"]);
    }
}

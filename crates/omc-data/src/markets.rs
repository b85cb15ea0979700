//! Market question data.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::transport::FetchError;

/// A question listed on the market, with its current leading opinion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketQuestion {
    /// Rank shown in the first column.
    pub id: u32,
    pub question: String,
    /// Current leading answer.
    pub current_answer: String,
    /// Price to change the opinion, in whole USDC.
    pub price_usdc: u64,
    /// 24h change in percent. Negative means the price fell.
    pub change_pct: f64,
    /// Traded volume, pre-formatted (e.g. `125K`).
    pub volume: String,
    /// Handle of the current opinion owner.
    pub owner: String,
}

/// Direction of a 24h change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDirection {
    Up,
    Down,
}

impl MarketQuestion {
    pub fn new(
        id: u32,
        question: &str,
        current_answer: &str,
        price_usdc: u64,
        change_pct: f64,
        volume: &str,
        owner: &str,
    ) -> Self {
        Self {
            id,
            question: question.to_string(),
            current_answer: current_answer.to_string(),
            price_usdc,
            change_pct,
            volume: volume.to_string(),
            owner: owner.to_string(),
        }
    }

    /// Zero counts as up.
    pub fn direction(&self) -> ChangeDirection {
        if self.change_pct >= 0.0 {
            ChangeDirection::Up
        } else {
            ChangeDirection::Down
        }
    }

    /// Absolute change as shown in the table, e.g. `5.2%`.
    pub fn change_label(&self) -> String {
        format!("{}%", self.change_pct.abs())
    }
}

/// Read-only access to the ranked list of market questions.
///
/// The landing page only consumes this trait, so the static list can be
/// replaced by a live provider without touching the renderers.
#[async_trait(?Send)]
pub trait QuestionSource {
    /// Up to `limit` questions, highest ranked first.
    async fn top_questions(&self, limit: usize) -> Result<Vec<MarketQuestion>, FetchError>;
}

/// Fixed question list shown before the market goes live.
#[derive(Debug, Clone)]
pub struct StaticQuestionSource {
    questions: Vec<MarketQuestion>,
}

impl StaticQuestionSource {
    pub fn new(questions: Vec<MarketQuestion>) -> Self {
        Self { questions }
    }
}

impl Default for StaticQuestionSource {
    fn default() -> Self {
        Self::new(vec![
            MarketQuestion::new(1, "Goat of soccer?", "Messi", 2450, 15.5, "125K", "messi.base.eth"),
            MarketQuestion::new(2, "Greatest NFT project?", "BAYC", 1850, -5.2, "82K", "punk.base.eth"),
            MarketQuestion::new(3, "Best Pizza in NY?", "Grimaldi's", 3200, 25.8, "151K", "nyc.base.eth"),
            MarketQuestion::new(
                4,
                "Most trusted crypto-exchange?",
                "Binance",
                4100,
                12.3,
                "203K",
                "trader.base.eth",
            ),
            MarketQuestion::new(5, "Best Hip Hop Album ever?", "Illmatic", 2800, -8.4, "95K", "beats.base.eth"),
        ])
    }
}

#[async_trait(?Send)]
impl QuestionSource for StaticQuestionSource {
    async fn top_questions(&self, limit: usize) -> Result<Vec<MarketQuestion>, FetchError> {
        Ok(self.questions.iter().take(limit).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_static_source_has_five_rows_in_rank_order() {
        let rows = block_on(StaticQuestionSource::default().top_questions(10)).unwrap();
        assert_eq!(rows.len(), 5);
        let ids: Vec<u32> = rows.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(rows[2].current_answer, "Grimaldi's");
        assert_eq!(rows[4].owner, "beats.base.eth");
    }

    #[test]
    fn test_limit_truncates() {
        let rows = block_on(StaticQuestionSource::default().top_questions(2)).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].question, "Greatest NFT project?");
    }

    #[test]
    fn test_direction_and_label() {
        let up = MarketQuestion::new(1, "q", "a", 1, 15.5, "1K", "o");
        assert_eq!(up.direction(), ChangeDirection::Up);
        assert_eq!(up.change_label(), "15.5%");

        let down = MarketQuestion::new(2, "q", "a", 1, -8.4, "1K", "o");
        assert_eq!(down.direction(), ChangeDirection::Down);
        assert_eq!(down.change_label(), "8.4%");
    }

    #[test]
    fn test_zero_change_counts_as_up() {
        let flat = MarketQuestion::new(1, "q", "a", 1, 0.0, "1K", "o");
        assert_eq!(flat.direction(), ChangeDirection::Up);
        assert_eq!(flat.change_label(), "0%");
    }
}

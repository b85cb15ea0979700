//! Top questions table.

use omc_data::{ChangeDirection, MarketQuestion};
use omc_streaming::html_escape;

const COLUMNS: [&str; 8] = [
    "#",
    "Question",
    "Current Opinion",
    "Price (USDC)",
    "24h Change",
    "Volume",
    "Owner",
    "Action",
];

/// Render the questions table.
pub fn render_questions(title: &str, questions: &[MarketQuestion]) -> String {
    let header: String = COLUMNS
        .iter()
        .map(|c| format!("<th>{}</th>", html_escape(c)))
        .collect();

    let rows: String = questions.iter().map(render_row).collect();

    format!(
        r#"<section class="questions container" data-section="questions">
    <h2>{}</h2>
    <div class="card">
        <div class="table-scroll">
            <table class="questions-table">
                <thead><tr>{}</tr></thead>
                <tbody>{}
                </tbody>
            </table>
        </div>
    </div>
</section>
"#,
        html_escape(title),
        header,
        rows
    )
}

fn render_row(q: &MarketQuestion) -> String {
    let (class, arrow) = match q.direction() {
        ChangeDirection::Up => ("change-up", "▲"),
        ChangeDirection::Down => ("change-down", "▼"),
    };

    format!(
        r#"
                    <tr data-question-id="{id}">
                        <td>{id}</td>
                        <td>{question}</td>
                        <td>{answer}</td>
                        <td>${price}</td>
                        <td class="{class}"><span class="change-arrow" aria-hidden="true">{arrow}</span>{change}</td>
                        <td>${volume}</td>
                        <td>{owner}</td>
                        <td><button type="button" class="btn btn-small">Change Opinion</button></td>
                    </tr>"#,
        id = q.id,
        question = html_escape(&q.question),
        answer = html_escape(&q.current_answer),
        price = q.price_usdc,
        class = class,
        arrow = arrow,
        change = html_escape(&q.change_label()),
        volume = html_escape(&q.volume),
        owner = html_escape(&q.owner),
    )
}

/// Render the table shell shown when the question source fails.
pub fn render_questions_unavailable(title: &str) -> String {
    format!(
        r#"<section class="questions container" data-section="questions">
    <h2>{}</h2>
    <div class="card"><p class="questions-empty">Market data is unavailable right now.</p></div>
</section>
"#,
        html_escape(title)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use omc_data::{QuestionSource, StaticQuestionSource};

    fn rendered() -> String {
        let rows = block_on(StaticQuestionSource::default().top_questions(5)).unwrap();
        render_questions("Top Questions", &rows)
    }

    #[test]
    fn test_exactly_five_rows() {
        let html = rendered();
        assert_eq!(html.matches("<tr data-question-id=").count(), 5);
        assert_eq!(html.matches("<th>").count(), COLUMNS.len());
    }

    #[test]
    fn test_change_indicators() {
        let html = rendered();
        // Rows 1, 3, 4 rose; rows 2 and 5 fell.
        assert_eq!(html.matches(r#"class="change-up""#).count(), 3);
        assert_eq!(html.matches(r#"class="change-down""#).count(), 2);
        assert!(html.contains(r#"<td class="change-up"><span class="change-arrow" aria-hidden="true">▲</span>15.5%</td>"#));
        assert!(html.contains(r#"<td class="change-down"><span class="change-arrow" aria-hidden="true">▼</span>5.2%</td>"#));
        assert!(html.contains("▼</span>8.4%"));
        assert!(!html.contains("-5.2"));
    }

    #[test]
    fn test_cells_are_escaped_and_prefixed() {
        let html = rendered();
        assert!(html.contains("<td>Grimaldi&#39;s</td>"));
        assert!(html.contains("<td>$2450</td>"));
        assert!(html.contains("<td>$125K</td>"));
        assert!(html.contains("<td>messi.base.eth</td>"));
    }

    #[test]
    fn test_zero_change_shows_up_indicator() {
        let flat = MarketQuestion::new(9, "Flat?", "Yes", 10, 0.0, "1K", "flat.base.eth");
        let html = render_questions("Top Questions", &[flat]);
        assert!(html.contains("▲</span>0%"));
    }

    #[test]
    fn test_unavailable_has_no_rows() {
        let html = render_questions_unavailable("Top Questions");
        assert!(!html.contains("<tr"));
        assert!(html.contains(r#"data-section="questions""#));
    }
}

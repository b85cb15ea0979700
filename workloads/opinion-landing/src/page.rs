//! Page assembly.

use std::fmt::Display;

use futures::Sink;
use omc_core::WorkloadError;
use omc_data::{DependencyTag, QuestionSource};
use omc_newsletter::SubscriptionForm;
use omc_observability::StructuredLogger;
use omc_streaming::{Shell, StreamingSink};

use crate::data::LandingPageContent;
use crate::script::landing_page_script;
use crate::sections::{
    render_hero, render_how_it_works, render_newsletter, render_questions, render_questions_unavailable,
};
use crate::shell::create_shell;

/// A rendered page, ready to stream.
pub struct RenderedPage {
    pub shell: Shell,
    /// Named sections, in document order.
    pub sections: Vec<(&'static str, String)>,
}

impl RenderedPage {
    /// Concatenate the page into one document.
    #[cfg(test)]
    pub fn to_html(&self) -> String {
        let mut html = self.shell.render_opening();
        for (_, section) in &self.sections {
            html.push_str(section);
        }
        html.push_str(&self.closing());
        html
    }

    fn closing(&self) -> String {
        format!("{}\n{}", landing_page_script(), self.shell.render_closing())
    }
}

/// Render the landing page for the given form state.
///
/// `refresh` is set after a plain form POST so the page returns to idle
/// once the status message has been shown for the reset delay.
pub async fn render_page<Q: QuestionSource>(
    content: &LandingPageContent,
    questions: &Q,
    form: &SubscriptionForm,
    reset_ms: u64,
    refresh: Option<u64>,
    logger: &StructuredLogger,
) -> RenderedPage {
    let questions_html = match questions.top_questions(content.questions_limit).await {
        Ok(rows) => render_questions(&content.questions_title, &rows),
        Err(e) => {
            logger
                .warn_builder("question source failed")
                .field("dependency", DependencyTag::Markets.name())
                .field("error", e.to_string())
                .emit();
            render_questions_unavailable(&content.questions_title)
        }
    };

    RenderedPage {
        shell: create_shell(&content.header, refresh),
        sections: vec![
            ("hero", render_hero(&content.hero)),
            ("questions", questions_html),
            ("how-it-works", render_how_it_works(&content.how_it_works)),
            ("newsletter", render_newsletter(&content.newsletter, form, reset_ms)),
        ],
    }
}

/// Stream a rendered page: shell first, then each section, then closing.
pub async fn stream_page<S, E>(sink: &mut StreamingSink<S, E>, page: &RenderedPage) -> Result<(), WorkloadError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    sink.send_shell(&page.shell.render_opening()).await?;
    for (name, html) in &page.sections {
        sink.send_section(name, html).await?;
    }
    sink.finish(&page.closing()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use omc_core::{RequestId, TimingContext};
    use omc_data::{FetchError, MarketQuestion, StaticQuestionSource};

    struct DownSource;

    #[async_trait(?Send)]
    impl QuestionSource for DownSource {
        async fn top_questions(&self, _limit: usize) -> Result<Vec<MarketQuestion>, FetchError> {
            Err(FetchError::Request("markets offline".to_string()))
        }
    }

    fn logger() -> StructuredLogger {
        StructuredLogger::new(RequestId::from_string("test"))
    }

    fn page<Q: QuestionSource>(source: &Q, refresh: Option<u64>) -> RenderedPage {
        block_on(render_page(
            &LandingPageContent::load(),
            source,
            &SubscriptionForm::default(),
            3000,
            refresh,
            &logger(),
        ))
    }

    #[test]
    fn test_sections_in_document_order() {
        let page = page(&StaticQuestionSource::default(), None);
        let names: Vec<&str> = page.sections.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["hero", "questions", "how-it-works", "newsletter"]);
    }

    #[test]
    fn test_full_document() {
        let html = page(&StaticQuestionSource::default(), None).to_html();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>"));
        assert_eq!(html.matches("<tr data-question-id=").count(), 5);
        assert!(html.contains("<script>"));
        assert!(html.find(r#"id="newsletter-form""#).unwrap() < html.find("<script>").unwrap());
    }

    #[test]
    fn test_source_failure_still_renders_page() {
        let html = page(&DownSource, None).to_html();
        assert!(html.contains("Market data is unavailable right now."));
        assert!(html.contains(r#"id="newsletter-form""#));
    }

    #[test]
    fn test_streamed_output_matches_document() {
        let page = page(&StaticQuestionSource::default(), Some(3));
        let mut sink: StreamingSink<Vec<Vec<u8>>, std::convert::Infallible> =
            StreamingSink::new(Vec::new(), TimingContext::new());
        block_on(stream_page(&mut sink, &page)).unwrap();

        assert_eq!(sink.sections_sent().len(), 4);
        let streamed: String = sink
            .into_inner()
            .iter()
            .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
            .collect();
        assert_eq!(streamed, page.to_html());
        assert!(streamed.contains(r#"http-equiv="refresh""#));
    }
}

//! Newsletter signup section.

use omc_newsletter::{SubmissionStatus, SubscriptionForm};
use omc_streaming::html_escape;

use crate::data::NewsletterContent;

/// Render the newsletter section for the current form state.
///
/// The same markup serves the scripted and the plain-form path: the client
/// script takes over the form once loaded and toggles the same attributes.
pub fn render_newsletter(content: &NewsletterContent, form: &SubscriptionForm, reset_ms: u64) -> String {
    let status = form.status();
    let disabled = if form.is_submit_disabled() { " disabled" } else { "" };
    let label = if status == SubmissionStatus::Pending {
        &content.pending_label
    } else {
        &content.submit_label
    };

    format!(
        r#"<section class="newsletter" id="newsletter" data-section="newsletter">
    <div class="newsletter-content">
        <h2>{title}</h2>
        <p>{blurb}</p>
        <form class="newsletter-form" id="newsletter-form" action="/api/subscribe" method="POST" data-status="{status}" data-reset-ms="{reset_ms}">
            <input type="email" name="email" value="{email}" placeholder="{placeholder}" required aria-label="Email address">
            <button type="submit" data-label="{submit}" data-pending-label="{pending}"{disabled}>{label} <span aria-hidden="true">→</span></button>
        </form>
        {success}
        {error}
    </div>
</section>
"#,
        title = html_escape(&content.title),
        blurb = html_escape(&content.blurb),
        status = status.as_str(),
        reset_ms = reset_ms,
        email = html_escape(form.email()),
        placeholder = html_escape(&content.placeholder),
        submit = html_escape(&content.submit_label),
        pending = html_escape(&content.pending_label),
        disabled = disabled,
        label = html_escape(label),
        success = status_message(SubmissionStatus::Success, status),
        error = status_message(SubmissionStatus::Error, status),
    )
}

/// Message paragraph for `kind`, hidden unless it is the current status.
fn status_message(kind: SubmissionStatus, current: SubmissionStatus) -> String {
    let hidden = if kind == current { "" } else { " hidden" };
    format!(
        r#"<p class="newsletter-message newsletter-{}" role="status"{}>{}</p>"#,
        kind.as_str(),
        hidden,
        html_escape(kind.message().unwrap_or_default())
    )
}

//! Client script for the newsletter form.
//!
//! Mirrors `SubscriptionForm` in the browser: each submission gets an id,
//! and a reset timer only returns the form to idle if its id is still the
//! latest one.

pub fn landing_page_script() -> &'static str {
    r#"<script>
(function () {
    const form = document.getElementById('newsletter-form');
    if (!form) return;

    const input = form.querySelector('input[name="email"]');
    const button = form.querySelector('button[type="submit"]');
    const success = document.querySelector('.newsletter-success');
    const failure = document.querySelector('.newsletter-error');
    const resetMs = parseInt(form.dataset.resetMs, 10) || 3000;
    let latest = 0;

    function show(status) {
        form.dataset.status = status;
        const pending = status === 'pending';
        button.disabled = pending;
        button.firstChild.textContent = (pending ? button.dataset.pendingLabel : button.dataset.label) + ' ';
        success.hidden = status !== 'success';
        failure.hidden = status !== 'error';
    }

    form.addEventListener('submit', async (e) => {
        e.preventDefault();
        if (form.dataset.status === 'pending') return;

        const id = ++latest;
        show('pending');

        let ok = false;
        try {
            const response = await fetch(form.action, {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify({ email: input.value })
            });
            ok = response.ok;
        } catch (err) {
            ok = false;
        }

        if (id !== latest) return;
        if (ok) input.value = '';
        show(ok ? 'success' : 'error');

        setTimeout(() => {
            if (id === latest && form.dataset.status !== 'pending') show('idle');
        }, resetMs);
    });
})();
</script>"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_posts_json_to_form_action() {
        let script = landing_page_script();
        assert!(script.starts_with("<script>"));
        assert!(script.ends_with("</script>"));
        assert!(script.contains("fetch(form.action"));
        assert!(script.contains("'Content-Type': 'application/json'"));
    }

    #[test]
    fn test_reset_is_tied_to_submission() {
        let script = landing_page_script();
        assert!(script.contains("const id = ++latest;"));
        assert!(script.contains("if (id === latest"));
    }
}

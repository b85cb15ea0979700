//! Landing page stylesheet.

pub const LANDING_STYLES: &str = r##"
:root {
    --brand: #4763FF;
    --text: #111;
    --muted: #666;
    --border: #eaeaea;
    --shade: #F3F4F6;
    --up: #10B981;
    --down: #EF4444;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    min-height: 100vh;
    background: white;
    color: var(--text);
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
}

.container {
    max-width: 1280px;
    margin: 0 auto;
    padding: 0 16px;
}

.card {
    border-radius: 12px;
    border: 1px solid var(--border);
    box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
    background: white;
}

/* Banner and navigation */
.top-banner {
    background: var(--brand);
    color: white;
    padding: 12px 0;
    text-align: center;
    font-weight: 500;
}

.site-nav {
    border-bottom: 1px solid var(--border);
    background: white;
}

.nav-inner {
    display: flex;
    justify-content: space-between;
    align-items: center;
    height: 64px;
}

.nav-brand {
    display: flex;
    align-items: center;
}

.brand-name {
    margin-left: 8px;
    font-size: 20px;
    font-weight: 600;
}

.nav-link {
    color: var(--brand);
    display: flex;
    align-items: center;
    text-decoration: none;
    margin-left: 16px;
}

/* Buttons */
.btn {
    background: var(--brand);
    color: white;
    padding: 10px 24px;
    border-radius: 8px;
    border: none;
    display: inline-flex;
    align-items: center;
    gap: 8px;
    cursor: pointer;
    font-size: 16px;
    font-weight: 500;
}

.btn-small {
    padding: 8px 16px;
    font-size: 14px;
}

.btn-outline {
    background: transparent;
    color: var(--brand);
    border: 2px solid var(--brand);
    padding: 10px 24px;
    border-radius: 8px;
    cursor: pointer;
    font-size: 16px;
    font-weight: 500;
}

/* Hero */
.hero {
    text-align: center;
    padding-top: 96px;
    padding-bottom: 64px;
}

.hero-title {
    font-size: 64px;
    font-weight: bold;
    margin-bottom: 24px;
}

.hero-subtitle {
    font-size: 24px;
    color: var(--muted);
    margin-bottom: 24px;
}

.hero-actions {
    display: flex;
    gap: 16px;
    justify-content: center;
}

.stats-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 24px;
    max-width: 896px;
    margin: 48px auto 0;
}

.stat-card { padding: 24px; }

.stat-value {
    font-size: 36px;
    font-weight: bold;
    margin-bottom: 8px;
}

.stat-label { color: var(--muted); }

/* Questions table */
.questions { margin-top: 64px; margin-bottom: 64px; }

.questions h2 {
    font-size: 24px;
    font-weight: bold;
    margin-bottom: 8px;
}

.table-scroll { overflow-x: auto; }

.questions-table {
    width: 100%;
    border-collapse: collapse;
}

.questions-table th {
    text-align: left;
    padding: 16px;
    border-bottom: 1px solid var(--border);
    font-weight: 500;
}

.questions-table td {
    padding: 16px;
    border-bottom: 1px solid var(--border);
}

.change-up { color: var(--up); }
.change-down { color: var(--down); }
.change-arrow { margin-right: 4px; }

.questions-empty {
    padding: 24px;
    color: var(--muted);
}

/* How it works */
.how-it-works {
    margin-top: 64px;
    margin-bottom: 64px;
    max-width: 960px;
}

.how-it-works h2 {
    font-size: 36px;
    font-weight: bold;
    text-align: center;
    margin-bottom: 48px;
}

.steps {
    display: flex;
    flex-direction: column;
    gap: 24px;
}

.step-card { padding: 24px; }

.step-card h3 {
    font-size: 28px;
    font-weight: bold;
    margin-bottom: 16px;
}

.step-card p {
    font-size: 20px;
    color: var(--muted);
}

.step-example {
    background: var(--shade);
    padding: 24px;
    border-radius: 8px;
    font-size: 16px;
    color: var(--muted);
    margin-top: 24px;
}

/* Newsletter */
.newsletter {
    background: var(--brand);
    color: white;
    padding: 64px 0;
}

.newsletter-content {
    max-width: 640px;
    margin: 0 auto;
    text-align: center;
}

.newsletter h2 {
    font-size: 24px;
    font-weight: bold;
    margin-bottom: 16px;
}

.newsletter-content > p { margin-bottom: 32px; }

.newsletter-form {
    display: flex;
    gap: 16px;
    justify-content: center;
}

.newsletter-form input {
    padding: 12px 16px;
    border-radius: 8px;
    border: none;
    width: 100%;
    max-width: 320px;
}

.newsletter-form button {
    background: white;
    color: var(--brand);
    padding: 12px 24px;
    border-radius: 8px;
    border: none;
    display: flex;
    align-items: center;
    gap: 8px;
    font-weight: 500;
    cursor: pointer;
}

.newsletter-form button:disabled {
    cursor: not-allowed;
    opacity: 0.7;
}

.newsletter-message {
    color: white;
    margin-top: 16px;
}

@media (max-width: 768px) {
    .hero-title { font-size: 40px; }
    .stats-grid { grid-template-columns: 1fr; }
    .newsletter-form { flex-direction: column; align-items: center; }
}
"##;

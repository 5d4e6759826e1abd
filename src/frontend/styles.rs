use leptos::*;

// CSS-in-Rust: Catppuccin Mocha palette on a bordered grid
const MAIN_STYLES: &str = r#"
@import url("https://fonts.googleapis.com/css2?family=DM+Mono:ital,wght@0,300;0,400;0,500&display=swap");

body {
    font-family: "DM Mono", monospace;
    letter-spacing: -0.05ch;
    background-color: #1e1e2e;
    color: #cdd6f4;
    margin: 0;
    padding: 20px;
}

a {
    color: #89b4fa;
    text-decoration: none;
}

.app {
    max-width: 1200px;
    margin: 0 auto;
}

.main-grid {
    display: grid;
    grid-template-columns: repeat(6, 1fr);
    gap: 20px;
    margin: 20px 0;
}

.border-container {
    position: relative;
    padding: 20px;
    border: 2px solid #45475a;
    transition: border-color 0.2s ease-out;
    background-color: #1e1e2e;
}

.border-container::before {
    position: absolute;
    top: -12px;
    left: 20px;
    background-color: #1e1e2e;
    padding: 0 8px;
    font-size: 14px;
    color: #45475a;
    transition: color 0.2s ease-out;
}

.header-section {
    display: flex;
    justify-content: space-between;
    align-items: center;
    flex-wrap: wrap;
    gap: 15px;
}
.header-section::before { content: "academic-net"; }
.header-section:hover { border-color: #cba6f7; }
.header-section:hover::before { color: #cba6f7; }

.brand {
    color: #cdd6f4;
    font-size: 2rem;
    font-weight: 500;
}

.tagline {
    color: #bac2de;
    font-size: 0.95rem;
    margin-top: 6px;
}

.nav-links {
    display: flex;
    gap: 18px;
}

.nav-links a[aria-current] {
    color: #f9e2af;
}

.user-area {
    display: flex;
    align-items: center;
    gap: 10px;
    color: #bac2de;
}

.filters-section { grid-column: 1 / span 6; }
.filters-section::before { content: "filters"; }
.filters-section:hover { border-color: #89b4fa; }
.filters-section:hover::before { color: #89b4fa; }

.search-section { grid-column: 1 / span 6; }
.search-section::before { content: "search"; }
.search-section:hover { border-color: #fab387; }
.search-section:hover::before { color: #fab387; }

.files-section { grid-column: 1 / span 6; }
.files-section::before { content: "documents"; }
.files-section:hover { border-color: #f38ba8; }
.files-section:hover::before { color: #f38ba8; }

.storage-section { grid-column: 1 / span 6; }
.storage-section::before { content: "statistics"; }

.leaderboard-section { grid-column: 1 / span 6; }
.leaderboard-section::before { content: "leaderboard"; }
.leaderboard-section:hover { border-color: #f9e2af; }
.leaderboard-section:hover::before { color: #f9e2af; }

.request-form-section { grid-column: 1 / span 2; }
.request-form-section::before { content: "request"; }
.requests-section { grid-column: 3 / span 4; }
.requests-section::before { content: "open requests"; }

.filter-bar, .search-controls, .meta-selects {
    display: flex;
    flex-wrap: wrap;
    gap: 12px;
    align-items: center;
}

.filter-actions {
    margin-left: auto;
}

.meta-select, .text-input, .text-area, .search-input {
    background-color: #1e1e2e;
    color: #cdd6f4;
    font-family: "DM Mono", monospace;
    font-size: 14px;
    padding: 10px 12px;
    box-sizing: border-box;
}

.search-input {
    flex: 1;
    min-width: 220px;
}

.text-input, .text-area {
    width: 100%;
}

.text-area {
    min-height: 90px;
    resize: vertical;
}

.meta-select:focus, .text-input:focus, .text-area:focus, .search-input:focus {
    outline: none;
    border-color: #fab387;
}

.action-btn, .primary-btn, .choose-files-btn, .page-btn, .tab-btn {
    background-color: #1e1e2e;
    border: 2px solid #45475a;
    color: #cdd6f4;
    padding: 10px 16px;
    cursor: pointer;
    font-family: "DM Mono", monospace;
    font-size: 14px;
    transition: border-color 0.2s ease-out;
    margin: 4px;
}

.action-btn:hover, .page-btn:hover:not(:disabled), .choose-files-btn:hover {
    border-color: #89b4fa;
}

.primary-btn { border-color: #a6e3a1; }
.primary-btn:hover:not(:disabled) { color: #a6e3a1; }

.delete-btn:hover { border-color: #f38ba8; color: #f38ba8; }

button:disabled {
    border-color: #313244;
    color: #6c7086;
    cursor: not-allowed;
}

.page-btn.active, .tab-btn.active {
    border-color: #cba6f7;
    color: #cba6f7;
}

.files-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
    gap: 20px;
    margin-top: 10px;
}

.file-item {
    border: 2px solid #45475a;
    padding: 20px;
    position: relative;
    transition: border-color 0.2s ease-out;
}
.file-item::before {
    content: "file";
    position: absolute;
    top: -12px;
    left: 20px;
    background-color: #1e1e2e;
    padding: 0 8px;
    font-size: 12px;
    color: #45475a;
}
.file-item:hover { border-color: #f38ba8; }
.file-item:hover::before { color: #f38ba8; }

.file-item-header {
    display: flex;
    justify-content: space-between;
    align-items: start;
    gap: 10px;
    margin-bottom: 12px;
}

.file-title {
    color: #cdd6f4;
    font-weight: 500;
    word-break: break-word;
}

.file-type-badge {
    border: 1px solid;
    padding: 2px 8px;
    font-size: 12px;
    text-transform: lowercase;
}

.file-meta {
    color: #a6adc8;
    font-size: 13px;
    margin: 4px 0;
}

.file-rating, .star-btn.lit {
    color: #f9e2af;
}

.files-table {
    width: 100%;
    border-collapse: collapse;
}
.files-table th, .files-table td {
    text-align: left;
    padding: 8px;
    border-bottom: 1px solid #313244;
}
.files-table th { color: #6c7086; font-weight: 400; }
.files-table tr.highlight td { color: #a6e3a1; }

.pagination {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    gap: 4px;
    margin-top: 20px;
}

.page-summary, .debug-line, .empty-hint {
    color: #6c7086;
    font-size: 12px;
    margin-left: 10px;
}

.empty-state, .loading {
    text-align: center;
    padding: 40px 20px;
    color: #bac2de;
}
.empty-icon { font-size: 32px; margin-bottom: 10px; }

.detail-grid {
    display: grid;
    grid-template-columns: repeat(6, 1fr);
    gap: 20px;
    margin: 20px 0;
}
.detail-header { grid-column: 1 / span 6; }
.detail-header::before { content: "document"; }
.rating-section { grid-column: 1 / span 2; }
.rating-section::before { content: "rating"; }
.comments-section { grid-column: 3 / span 4; }
.comments-section::before { content: "comments"; }

.detail-title { margin: 0; font-size: 1.6rem; font-weight: 500; }
.file-description { color: #bac2de; margin: 16px 0; line-height: 1.5; }
.detail-actions { display: flex; flex-wrap: wrap; gap: 8px; align-items: start; }
.report-form { width: 100%; }

.star-btn {
    background: none;
    border: none;
    color: #45475a;
    font-size: 22px;
    cursor: pointer;
}

.comment-list { list-style: none; padding: 0; }
.comment-item { border-bottom: 1px solid #313244; padding: 10px 0; }
.comment-meta { display: flex; justify-content: space-between; font-size: 12px; color: #6c7086; }
.comment-author { color: #89b4fa; }
.comment-text { margin-top: 6px; white-space: pre-wrap; }

.request-list { list-style: none; padding: 0; }
.request-item { border-bottom: 1px solid #313244; padding: 10px 0; }

.section-title { font-size: 1.1rem; font-weight: 500; margin: 0 0 12px 0; }

.storage-stats-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 15px;
    margin: 15px 0;
}
.stat-box { text-align: center; padding: 15px; }
.stat-box:hover { border-color: #a6e3a1; }
.stat-box .stat-value { font-size: 22px; font-weight: 500; margin-bottom: 5px; }
.stat-box .stat-label { color: #bac2de; font-size: 12px; }

.modal-backdrop {
    position: fixed;
    inset: 0;
    background-color: rgba(17, 17, 27, 0.8);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 10;
}

.modal {
    width: min(520px, 92vw);
    max-height: 90vh;
    overflow-y: auto;
}
.auth-modal::before { content: "account"; }
.upload-modal::before { content: "upload"; }
.modal-title { margin: 0 0 16px 0; font-size: 1.2rem; font-weight: 500; }
.modal-tabs { display: flex; gap: 8px; margin-bottom: 16px; }

.form-field { margin-bottom: 16px; }
.field-label { display: block; color: #bac2de; font-size: 13px; margin-bottom: 6px; }
.form-actions { display: flex; justify-content: flex-end; gap: 8px; }
.selected-file { color: #a6adc8; font-size: 13px; margin-top: 6px; }

.form-error {
    color: #f38ba8;
    border-color: #f38ba8;
    margin-bottom: 16px;
    padding: 12px;
}

.notice { color: #fab387; margin-top: 20px; }

@media (max-width: 768px) {
    .main-grid, .detail-grid {
        grid-template-columns: 1fr;
    }
    .main-grid > *, .detail-grid > * {
        grid-column: 1 !important;
    }
    .storage-stats-grid {
        grid-template-columns: 1fr;
    }
}
"#;

// CSS-in-Rust: Component that injects styles
#[component]
pub fn StyleProvider() -> impl IntoView {
    view! {
        <style>{MAIN_STYLES}</style>
    }
}

use leptos::*;
use leptos_meta::Title;
use leptos_router::{use_params_map, A};

use super::browser;
use super::session::use_session;
use crate::format::{file_type_color, multiline_html, rating_label, semester_label, stars};
use crate::{validate, Comment, FileDetail};

#[component]
pub fn FileDetailPage() -> impl IntoView {
    let session = use_session();
    let params = use_params_map();
    let file_id = create_memo(move |_| params.with(|p| p.get("id").cloned().unwrap_or_default()));

    let detail = create_rw_signal(None::<FileDetail>);
    let (load_error, set_load_error) = create_signal(None::<String>);
    let (is_loading, set_is_loading) = create_signal(false);
    // only flips on load, so rating or commenting does not rebuild the view
    let has_detail = create_memo(move |_| detail.with(Option::is_some));

    create_effect(move |_| {
        let id = file_id.get();
        if id.is_empty() {
            return;
        }
        let client = session.client();
        set_is_loading.set(true);
        set_load_error.set(None);
        spawn_local(async move {
            match client.file(&id).await {
                Ok(file) => detail.set(Some(file)),
                Err(e) => {
                    browser::warn(&format!("Error loading file {}: {}", id, e));
                    detail.set(None);
                    set_load_error.set(Some(e.to_string()));
                }
            }
            set_is_loading.set(false);
        });
    });

    let page_title = move || {
        detail.with(|d| match d {
            Some(file) => format!("Academic-Net | {}", file.summary.display_title()),
            None => "Academic-Net".to_string(),
        })
    };

    view! {
        <Title text=page_title />
        <div class="detail-page">
            <A href="/" class="back-link">"← back to documents"</A>
            <Show when=move || !is_loading.get() fallback=|| view! { <div class="loading">"loading document..."</div> }>
                {move || match (has_detail.get(), load_error.get()) {
                    (true, _) => view! { <FileDetailView file_id=file_id.get() detail=detail /> }.into_view(),
                    (false, Some(error)) => view! { <div class="form-error border-container">{error}</div> }.into_view(),
                    (false, None) => view! { <div class="loading">"document not found"</div> }.into_view(),
                }}
            </Show>
        </div>
    }
}

#[component]
fn FileDetailView(file_id: String, detail: RwSignal<Option<FileDetail>>) -> impl IntoView {
    let session = use_session();
    let file_id = store_value(file_id);
    let field = move |f: fn(&FileDetail) -> String| detail.with(|d| d.as_ref().map(f).unwrap_or_default());

    let (is_downloading, set_is_downloading) = create_signal(false);
    let on_download = move |_| {
        set_is_downloading.set(true);
        let client = session.client();
        let id = file_id.get_value();
        spawn_local(async move {
            match client.download_url(&id).await {
                Ok(url) => {
                    browser::open_in_new_tab(&url);
                    detail.update(|d| {
                        if let Some(d) = d {
                            d.summary.downloads += 1;
                        }
                    });
                }
                Err(e) => session.report_error("Download", &e),
            }
            set_is_downloading.set(false);
        });
    };

    let badge_color = move || detail.with(|d| file_type_color(d.as_ref().map_or("", |d| d.summary.file_type.as_str())));

    view! {
        <div class="detail-grid">
            <div class="detail-header border-container">
                <div class="file-item-header">
                    <h1 class="detail-title">{move || field(|d| d.summary.display_title().to_string())}</h1>
                    <span
                        class="file-type-badge"
                        style=move || format!("color: {0}; border-color: {0};", badge_color())
                    >
                        {move || field(|d| d.summary.file_type.clone())}
                    </span>
                </div>
                <div class="file-meta">
                    {move || field(|d| d.summary.subject.clone())} " · "
                    {move || field(|d| semester_label(d.summary.semester))}
                </div>
                <div class="file-meta">
                    {move || field(|d| d.summary.university.clone())} " · "
                    {move || field(|d| d.summary.branch.clone())}
                </div>
                <div class="file-meta">
                    {move || field(|d| format!("{} downloads", d.summary.downloads))}
                    {move || field(|d| {
                        if d.summary.uploader.is_empty() {
                            String::new()
                        } else {
                            format!(" · uploaded by {}", d.summary.uploader)
                        }
                    })}
                    {move || field(|d| {
                        d.summary
                            .created_at
                            .as_deref()
                            .map(|ts| format!(" · {}", browser::format_timestamp(ts)))
                            .unwrap_or_default()
                    })}
                </div>
                <div
                    class="file-description"
                    inner_html=move || field(|d| multiline_html(&d.description))
                ></div>
                <div class="detail-actions">
                    <button
                        type="button"
                        class="primary-btn border-container"
                        disabled=move || is_downloading.get()
                        on:click=on_download
                    >
                        {move || if is_downloading.get() { "preparing..." } else { "download" }}
                    </button>
                    <ReportButton file_id=file_id.get_value() />
                </div>
            </div>

            <div class="rating-section border-container">
                <RatingWidget file_id=file_id.get_value() detail=detail />
            </div>

            <div class="comments-section border-container">
                <CommentsSection file_id=file_id.get_value() detail=detail />
            </div>
        </div>
    }
}

#[component]
fn RatingWidget(file_id: String, detail: RwSignal<Option<FileDetail>>) -> impl IntoView {
    let session = use_session();
    let file_id = store_value(file_id);
    let (hovered, set_hovered) = create_signal(0u8);
    let (is_rating, set_is_rating) = create_signal(false);

    let avg_rating = move || detail.with(|d| d.as_ref().and_then(|d| d.summary.avg_rating));
    let rating_count = move || detail.with(|d| d.as_ref().map_or(0, |d| d.summary.rating_count));

    let rate = move |value: u8| {
        if is_rating.get_untracked() || !session.require_login() {
            return;
        }
        let value = match validate::rating(value) {
            Ok(value) => value,
            Err(e) => {
                browser::alert(&e.to_string());
                return;
            }
        };
        set_is_rating.set(true);
        let client = session.client();
        let id = file_id.get_value();
        spawn_local(async move {
            match client.rate(&id, value).await {
                Ok(response) => detail.update(|d| {
                    if let Some(d) = d {
                        d.summary.apply_rating(&response);
                    }
                }),
                Err(e) => session.report_error("Rating", &e),
            }
            set_is_rating.set(false);
        });
    };

    view! {
        <div class="rating-widget">
            <div class="rating-current">
                <span class="file-rating">{move || stars(avg_rating())}</span>
                <span class="rating-label">{move || rating_label(avg_rating(), rating_count())}</span>
            </div>
            <div class="rating-input" on:mouseleave=move |_| set_hovered.set(0)>
                "rate this: "
                {(1..=5u8)
                    .map(|value| view! {
                        <button
                            type="button"
                            class="star-btn"
                            class:lit=move || hovered.get() >= value
                            disabled=move || is_rating.get()
                            on:mouseenter=move |_| set_hovered.set(value)
                            on:click=move |_| rate(value)
                        >
                            "★"
                        </button>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn CommentsSection(file_id: String, detail: RwSignal<Option<FileDetail>>) -> impl IntoView {
    let session = use_session();
    let file_id = store_value(file_id);
    let (text, set_text) = create_signal(String::new());
    let (is_posting, set_is_posting) = create_signal(false);

    let comments = move || detail.with(|d| d.as_ref().map(|d| d.comments.clone()).unwrap_or_default());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if is_posting.get_untracked() || !session.require_login() {
            return;
        }
        let body = match validate::comment(&text.get_untracked()) {
            Ok(body) => body,
            Err(e) => {
                browser::alert(&e.to_string());
                return;
            }
        };
        set_is_posting.set(true);
        let client = session.client();
        let id = file_id.get_value();
        spawn_local(async move {
            match client.comment(&id, body).await {
                Ok(comment) => {
                    set_text.set(String::new());
                    detail.update(|d| {
                        if let Some(d) = d {
                            d.comments.push(comment);
                        }
                    });
                }
                Err(e) => session.report_error("Comment", &e),
            }
            set_is_posting.set(false);
        });
    };

    view! {
        <div>
            <h2 class="section-title">{move || format!("comments ({})", comments().len())}</h2>
            <Show
                when=move || !comments().is_empty()
                fallback=|| view! { <div class="empty-hint">"no comments yet, be the first"</div> }
            >
                <ul class="comment-list">
                    <For
                        each=comments
                        key=|c| (c.id.clone(), c.text.clone())
                        let:comment
                    >
                        <CommentItem comment=comment />
                    </For>
                </ul>
            </Show>
            <form class="comment-form" on:submit=on_submit>
                <textarea
                    class="text-area border-container"
                    prop:value=move || text.get()
                    on:input=move |e| set_text.set(event_target_value(&e))
                    placeholder=move || {
                        if session.is_logged_in() { "add a comment..." } else { "log in to comment" }
                    }
                ></textarea>
                <button
                    type="submit"
                    class="primary-btn border-container"
                    disabled=move || is_posting.get()
                >
                    {move || if is_posting.get() { "posting..." } else { "post comment" }}
                </button>
            </form>
        </div>
    }
}

#[component]
fn CommentItem(comment: Comment) -> impl IntoView {
    let when = comment
        .created_at
        .as_deref()
        .map(browser::format_timestamp)
        .unwrap_or_default();
    let author = if comment.user.is_empty() {
        "anonymous".to_string()
    } else {
        comment.user
    };

    view! {
        <li class="comment-item">
            <div class="comment-meta">
                <span class="comment-author">{author}</span>
                <span class="comment-date">{when}</span>
            </div>
            <div class="comment-text">{comment.text}</div>
        </li>
    }
}

#[component]
fn ReportButton(file_id: String) -> impl IntoView {
    let session = use_session();
    let file_id = store_value(file_id);
    let (is_open, set_is_open) = create_signal(false);
    let (reason, set_reason) = create_signal(String::new());
    let (is_sending, set_is_sending) = create_signal(false);

    let send = move |_| {
        if is_sending.get_untracked() || !session.require_login() {
            return;
        }
        let reason = match validate::report_reason(&reason.get_untracked()) {
            Ok(reason) => reason,
            Err(e) => {
                browser::alert(&e.to_string());
                return;
            }
        };
        if !browser::confirm("Report this file to the moderators?") {
            return;
        }
        set_is_sending.set(true);
        let client = session.client();
        let id = file_id.get_value();
        spawn_local(async move {
            match client.report(&id, reason).await {
                Ok(response) if response.ok => {
                    browser::alert("Thanks, the moderators will take a look.");
                    set_reason.set(String::new());
                    set_is_open.set(false);
                }
                Ok(_) => browser::alert("The report was not accepted, please try again later."),
                Err(e) => session.report_error("Report", &e),
            }
            set_is_sending.set(false);
        });
    };

    view! {
        <button
            type="button"
            class="action-btn delete-btn border-container"
            on:click=move |_| set_is_open.update(|open| *open = !*open)
        >
            "report"
        </button>
        <Show when=move || is_open.get()>
            <div class="report-form">
                <textarea
                    class="text-area border-container"
                    prop:value=move || reason.get()
                    on:input=move |e| set_reason.set(event_target_value(&e))
                    placeholder="what is wrong with this file?"
                ></textarea>
                <button
                    type="button"
                    class="action-btn delete-btn border-container"
                    disabled=move || is_sending.get()
                    on:click=send
                >
                    {move || if is_sending.get() { "sending..." } else { "send report" }}
                </button>
            </div>
        </Show>
    }
}

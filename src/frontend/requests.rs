use leptos::*;
use leptos_meta::Title;

use super::browser;
use super::metadata::MetadataSelects;
use super::session::use_session;
use crate::format::semester_label;
use crate::{validate, MissingRequest, SEMESTERS};

#[component]
pub fn RequestsPage() -> impl IntoView {
    let session = use_session();
    let requests = create_rw_signal(Vec::<MissingRequest>::new());
    let (is_loading, set_is_loading) = create_signal(false);
    let reload = create_rw_signal(0u32);

    create_effect(move |_| {
        let _ = reload.get();
        let client = session.client();
        set_is_loading.set(true);
        spawn_local(async move {
            match client.missing_requests().await {
                Ok(list) => requests.set(list),
                Err(e) => browser::warn(&format!("Error loading missing requests: {}", e)),
            }
            set_is_loading.set(false);
        });
    });

    view! {
        <Title text="Academic-Net | Missing documents" />
        <div class="main-grid">
            <div class="request-form-section border-container">
                <RequestForm on_submitted=Callback::new(move |_| reload.update(|n| *n += 1)) />
            </div>
            <div class="requests-section border-container">
                <Show
                    when=move || !is_loading.get()
                    fallback=|| view! { <div class="loading">"loading requests..."</div> }
                >
                    <Show
                        when=move || !requests.with(Vec::is_empty)
                        fallback=|| view! { <div class="empty-hint">"no open requests"</div> }
                    >
                        <ul class="request-list">
                            <For
                                each=move || requests.get()
                                key=|r| (r.id.clone(), r.subject.clone(), r.university.clone())
                                let:request
                            >
                                <li class="request-item">
                                    <div class="file-title">{request.subject.clone()}</div>
                                    <div class="file-meta">
                                        {semester_label(request.semester)} " · " {request.university.clone()}
                                    </div>
                                    <div class="file-meta">
                                        {
                                            let by = if request.requested_by.is_empty() {
                                                String::new()
                                            } else {
                                                format!("requested by {}", request.requested_by)
                                            };
                                            let when = request
                                                .created_at
                                                .as_deref()
                                                .map(|ts| format!(" on {}", browser::format_timestamp(ts)))
                                                .unwrap_or_default();
                                            format!("{}{}", by, when)
                                        }
                                    </div>
                                </li>
                            </For>
                        </ul>
                    </Show>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn RequestForm(on_submitted: Callback<()>) -> impl IntoView {
    let session = use_session();
    let university = create_rw_signal(String::new());
    let subject = create_rw_signal(String::new());
    let semester = create_rw_signal(None::<u8>);
    let (is_sending, set_is_sending) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if is_sending.get_untracked() || !session.require_login() {
            return;
        }
        let form = match validate::missing_request(
            &subject.get_untracked(),
            semester.get_untracked(),
            &university.get_untracked(),
        ) {
            Ok(form) => form,
            Err(e) => {
                browser::alert(&e.to_string());
                return;
            }
        };

        set_is_sending.set(true);
        let client = session.client();
        spawn_local(async move {
            match client.submit_missing_request(&form).await {
                Ok(()) => {
                    subject.set(String::new());
                    on_submitted.call(());
                }
                Err(e) => session.report_error("Request", &e),
            }
            set_is_sending.set(false);
        });
    };

    view! {
        <form on:submit=on_submit>
            <h2 class="section-title">"request a missing document"</h2>
            <div class="form-field">
                <label class="field-label">"university"</label>
                <MetadataSelects university=university />
            </div>
            <div class="form-field">
                <label class="field-label">"subject"</label>
                <input
                    type="text"
                    class="text-input border-container"
                    prop:value=move || subject.get()
                    on:input=move |e| subject.set(event_target_value(&e))
                    placeholder="e.g. Fluid Mechanics"
                />
            </div>
            <div class="form-field">
                <label class="field-label">"semester"</label>
                <select
                    class="meta-select border-container"
                    on:change=move |e| semester.set(event_target_value(&e).parse().ok())
                >
                    <option value="" prop:selected=move || semester.get().is_none()>
                        "Choose semester"
                    </option>
                    {SEMESTERS
                        .map(|s| view! {
                            <option value=s.to_string() prop:selected=move || semester.get() == Some(s)>
                                {semester_label(Some(s))}
                            </option>
                        })
                        .collect_view()}
                </select>
            </div>
            <button
                type="submit"
                class="primary-btn border-container"
                disabled=move || is_sending.get()
            >
                {move || if is_sending.get() { "sending..." } else { "send request" }}
            </button>
        </form>
    }
}

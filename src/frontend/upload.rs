use gloo_file::{File, FileList};
use leptos::*;

use super::browser;
use super::metadata::MetadataSelects;
use super::session::{use_listing, use_session};
use crate::format::format_file_size;
use crate::validate::UploadMeta;
use crate::SEMESTERS;

#[component]
pub fn UploadModal() -> impl IntoView {
    let session = use_session();
    let listing = use_listing();

    let (selected_file, set_selected_file) = create_signal(None::<File>);
    let (is_uploading, set_is_uploading) = create_signal(false);
    let (upload_error, set_upload_error) = create_signal(None::<String>);
    let file_input_ref = create_node_ref::<html::Input>();

    let title = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());
    let semester = create_rw_signal(None::<u8>);
    // start from whatever the list is filtered by
    let university = create_rw_signal(listing.university.get_untracked());
    let branch = create_rw_signal(listing.branch.get_untracked());
    let subject = create_rw_signal(listing.subject.get_untracked());

    let on_file_change = move |_ev: ev::Event| {
        let Some(input) = file_input_ref.get_untracked() else {
            browser::warn("Input ref not found");
            return;
        };
        let file = input
            .files()
            .and_then(|files| FileList::from(files).first().cloned());
        if let Some(file) = &file {
            if title.get_untracked().trim().is_empty() {
                let name = file.name();
                let stem = name.rsplit_once('.').map_or(name.as_str(), |(stem, _)| stem);
                title.set(stem.replace(['_', '-'], " "));
            }
        }
        set_selected_file.set(file);
    };

    let close = move || session.show_upload.set(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if is_uploading.get_untracked() {
            return;
        }

        let meta = UploadMeta {
            title: title.get_untracked(),
            university: university.get_untracked(),
            branch: branch.get_untracked(),
            semester: semester.get_untracked(),
            subject: subject.get_untracked(),
            description: description.get_untracked(),
        };
        let file = selected_file.get_untracked();
        if let Err(e) = meta.validate(file.as_ref().map(|f| f.size())) {
            set_upload_error.set(Some(e.to_string()));
            return;
        }
        let Some(file) = file else {
            return;
        };

        set_upload_error.set(None);
        set_is_uploading.set(true);
        let client = session.client();

        spawn_local(async move {
            browser::log(&format!("Uploading {} ({} bytes)", file.name(), file.size()));
            let result = client.upload(&meta, &file).await;
            set_is_uploading.set(false);
            match result {
                Ok(response) => {
                    let title = response
                        .file
                        .as_ref()
                        .map(|f| f.display_title().to_string())
                        .unwrap_or(meta.title);
                    browser::log(&format!("Upload successful: {}", title));
                    session.show_upload.set(false);
                    listing.refresh();
                }
                Err(e) if e.is_unauthorized() => session.report_error("Upload", &e),
                Err(e) => set_upload_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| close()>
            <div class="modal border-container upload-modal" on:click=|ev| ev.stop_propagation()>
                <h2 class="modal-title">"upload a document"</h2>

                <Show when=move || upload_error.get().is_some()>
                    <div class="form-error border-container">
                        {move || upload_error.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-field">
                        <input
                            type="file"
                            ref=file_input_ref
                            on:change=on_file_change
                            accept=".pdf,.doc,.docx,.ppt,.pptx,.xls,.xlsx,.txt,.zip,image/*"
                            style="display: none;"
                        />
                        <button
                            type="button"
                            class="choose-files-btn border-container"
                            on:click=move |_| {
                                if let Some(input) = file_input_ref.get_untracked() {
                                    input.click();
                                }
                            }
                        >
                            "choose file"
                        </button>
                        <div class="selected-file">
                            {move || match selected_file.get() {
                                Some(file) => format!("{} ({})", file.name(), format_file_size(file.size())),
                                None => "no file selected".to_string(),
                            }}
                        </div>
                    </div>

                    <div class="form-field">
                        <label class="field-label">"title"</label>
                        <input
                            type="text"
                            class="text-input border-container"
                            prop:value=move || title.get()
                            on:input=move |e| title.set(event_target_value(&e))
                            placeholder="e.g. Operating Systems unit 3 notes"
                        />
                    </div>

                    <div class="form-field">
                        <label class="field-label">"where it belongs"</label>
                        <MetadataSelects university=university branch=branch subject=subject />
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
                                        {format!("Semester {}", s)}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                    </div>

                    <div class="form-field">
                        <label class="field-label">"description"</label>
                        <textarea
                            class="text-area border-container"
                            prop:value=move || description.get()
                            on:input=move |e| description.set(event_target_value(&e))
                            placeholder="what does this document cover?"
                        ></textarea>
                    </div>

                    <Show when=move || session.debug_mode()>
                        <div class="debug-line">
                            "debug: " {move || if selected_file.get().is_some() { "1 file" } else { "0 files" }} " | "
                            {move || if is_uploading.get() { "uploading..." } else { "ready" }}
                        </div>
                    </Show>

                    <div class="form-actions">
                        <button type="button" class="action-btn border-container" on:click=move |_| close()>
                            "cancel"
                        </button>
                        <button
                            type="submit"
                            class="primary-btn border-container"
                            disabled=move || selected_file.get().is_none() || is_uploading.get()
                        >
                            {move || if is_uploading.get() { "uploading..." } else { "upload" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

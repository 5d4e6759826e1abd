use gloo_timers::future::TimeoutFuture;
use leptos::*;
use leptos_meta::Title;
use leptos_router::A;

use super::browser;
use super::metadata::MetadataSelects;
use super::session::{use_listing, use_session, Listing};
use crate::format::{file_type_color, rating_label, semester_label, stars};
use crate::pagination::PER_PAGE_CHOICES;
use crate::{FileSummary, Pagination, SortOrder, ViewMode, SEMESTERS};

const SEARCH_DEBOUNCE_MS: u32 = 300;

#[component]
pub fn FileListPage() -> impl IntoView {
    let session = use_session();
    let listing = use_listing();

    create_effect(move |_| {
        let query = listing.query();
        let _ = listing.reload.get();
        let client = session.tracked_client();

        listing.loading.set(true);
        spawn_local(async move {
            match client.files(query).await {
                Ok(response) => {
                    browser::log(&format!(
                        "Loaded {} of {} files",
                        response.files.len(),
                        response.total
                    ));
                    batch(|| {
                        listing.files.set(response.files);
                        listing.total.set(response.total);
                    });
                }
                Err(e) => {
                    browser::warn(&format!("Error loading files: {}", e));
                    if e.is_unauthorized() {
                        session.sign_out();
                    }
                    batch(|| {
                        listing.files.set(Vec::new());
                        listing.total.set(0);
                    });
                }
            }
            listing.loading.set(false);
        });
    });

    view! {
        <Title text="Academic-Net | Browse documents" />
        <div class="main-grid">
            <div class="filters-section border-container">
                <FilterBar listing=listing />
            </div>
            <div class="search-section border-container">
                <SearchSection listing=listing />
            </div>
            <div class="files-section border-container">
                <FilesSection listing=listing />
                <PaginationBar listing=listing />
            </div>
        </div>
    }
}

#[component]
fn FilterBar(listing: Listing) -> impl IntoView {
    let session = use_session();
    let reset_page = Callback::new(move |_| listing.page.set(1));

    view! {
        <div class="filter-bar">
            <MetadataSelects
                university=listing.university
                branch=listing.branch
                subject=listing.subject
                allow_any=true
                on_change=reset_page
            />
            <select
                class="meta-select border-container"
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    batch(|| {
                        listing.semester.set(value.parse().ok());
                        listing.page.set(1);
                    });
                }
            >
                <option value="" prop:selected=move || listing.semester.get().is_none()>
                    "All semesters"
                </option>
                {SEMESTERS
                    .map(|s| view! {
                        <option value=s.to_string() prop:selected=move || listing.semester.get() == Some(s)>
                            {semester_label(Some(s))}
                        </option>
                    })
                    .collect_view()}
            </select>
            <div class="filter-actions">
                <button
                    type="button"
                    class="action-btn border-container"
                    on:click=move |_| listing.clear_filters()
                >
                    "clear filters"
                </button>
                <button
                    type="button"
                    class="primary-btn border-container"
                    on:click=move |_| {
                        if session.require_login() {
                            session.show_upload.set(true);
                        }
                    }
                >
                    "upload"
                </button>
            </div>
        </div>
    }
}

#[component]
fn SearchSection(listing: Listing) -> impl IntoView {
    let (search_input, set_search_input) = create_signal(listing.search.get_untracked());
    let generation = store_value(0u32);

    // keep the box in sync when filters are cleared elsewhere
    create_effect(move |_| set_search_input.set(listing.search.get()));

    let on_input = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        set_search_input.set(value.clone());
        generation.update_value(|g| *g = g.wrapping_add(1));
        let current = generation.get_value();

        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if generation.try_get_value() == Some(current) {
                batch(|| {
                    listing.search.set(value);
                    listing.page.set(1);
                });
            }
        });
    };

    view! {
        <div class="search-controls">
            <input
                type="text"
                class="search-input border-container"
                placeholder="search documents..."
                prop:value=search_input
                on:input=on_input
            />
            <select
                class="meta-select border-container"
                on:change=move |ev| {
                    let sort = SortOrder::parse(&event_target_value(&ev));
                    batch(|| {
                        listing.sort.set(sort);
                        listing.page.set(1);
                    });
                }
            >
                {SortOrder::ALL
                    .into_iter()
                    .map(|sort| view! {
                        <option value=sort.as_str() prop:selected=move || listing.sort.get() == sort>
                            {sort.label()}
                        </option>
                    })
                    .collect_view()}
            </select>
            <select
                class="meta-select border-container"
                on:change=move |ev| {
                    if let Ok(per_page) = event_target_value(&ev).parse::<u32>() {
                        batch(|| {
                            listing.per_page.set(per_page);
                            listing.page.set(1);
                        });
                    }
                }
            >
                {PER_PAGE_CHOICES
                    .into_iter()
                    .map(|n| view! {
                        <option value=n.to_string() prop:selected=move || listing.per_page.get() == n>
                            {format!("{} per page", n)}
                        </option>
                    })
                    .collect_view()}
            </select>
            <button
                type="button"
                class="action-btn border-container"
                on:click=move |_| listing.toggle_view()
            >
                {move || match listing.view_mode.get() {
                    ViewMode::Grid => "list view",
                    ViewMode::List => "grid view",
                }}
            </button>
        </div>
    }
}

#[component]
fn FilesSection(listing: Listing) -> impl IntoView {
    let files_view = move || {
        if listing.files.with(Vec::is_empty) {
            return view! {
                <div class="empty-state">
                    <div class="empty-icon">"[ ]"</div>
                    <div>"no documents match these filters"</div>
                    <div class="empty-hint">
                        "can't find what you need? "
                        <A href="/requests">"request it"</A>
                    </div>
                </div>
            }
            .into_view();
        }

        match listing.view_mode.get() {
            ViewMode::Grid => view! {
                <div class="files-grid">
                    <For each=move || listing.files.get() key=|file| file.id.clone() let:file>
                        <FileCard file=file />
                    </For>
                </div>
            }
            .into_view(),
            ViewMode::List => view! {
                <table class="files-table">
                    <thead>
                        <tr>
                            <th>"title"</th>
                            <th>"subject"</th>
                            <th>"semester"</th>
                            <th>"rating"</th>
                            <th>"downloads"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=move || listing.files.get() key=|file| file.id.clone() let:file>
                            <FileRow file=file />
                        </For>
                    </tbody>
                </table>
            }
            .into_view(),
        }
    };

    view! {
        <Show
            when=move || !listing.loading.get()
            fallback=|| view! { <div class="loading">"loading documents..."</div> }
        >
            {files_view}
        </Show>
    }
}

#[component]
fn FileCard(file: FileSummary) -> impl IntoView {
    let href = format!("/files/{}", file.id);
    let title = file.display_title().to_string();
    let color = file_type_color(&file.file_type);
    let rating = rating_label(file.avg_rating, file.rating_count);
    let uploader = (!file.uploader.is_empty()).then(|| format!(" · by {}", file.uploader));

    view! {
        <div class="file-item">
            <div class="file-item-header">
                <A href=href class="file-title">{title}</A>
                <span
                    class="file-type-badge"
                    style=format!("color: {}; border-color: {};", color, color)
                >
                    {file.file_type}
                </span>
            </div>
            <div class="file-meta">{file.subject} " · " {semester_label(file.semester)}</div>
            <div class="file-meta">{file.university} " · " {file.branch}</div>
            <div class="file-rating" title=rating>
                {stars(file.avg_rating)}
            </div>
            <div class="file-meta">
                {format!("{} downloads", file.downloads)}
                {uploader}
            </div>
        </div>
    }
}

#[component]
fn FileRow(file: FileSummary) -> impl IntoView {
    let href = format!("/files/{}", file.id);
    let title = file.display_title().to_string();
    let rating = rating_label(file.avg_rating, file.rating_count);
    let semester = file.semester.map(|s| s.to_string()).unwrap_or_default();

    view! {
        <tr>
            <td><A href=href>{title}</A></td>
            <td>{file.subject}</td>
            <td>{semester}</td>
            <td title=rating>{stars(file.avg_rating)}</td>
            <td>{file.downloads}</td>
        </tr>
    }
}

#[component]
fn PaginationBar(listing: Listing) -> impl IntoView {
    let session = use_session();
    let pagination = create_memo(move |_| {
        Pagination::new(listing.page.get(), listing.per_page.get(), listing.total.get())
    });

    view! {
        <div class="pagination">
            <button
                type="button"
                class="page-btn border-container"
                disabled=move || !pagination.get().has_prev()
                on:click=move |_| listing.page.update(|p| *p = p.saturating_sub(1).max(1))
            >
                "prev"
            </button>
            <For each=move || pagination.get().window() key=|page| *page let:page>
                <button
                    type="button"
                    class="page-btn border-container"
                    class:active=move || pagination.get().page == page
                    on:click=move |_| listing.page.set(page)
                >
                    {page}
                </button>
            </For>
            <button
                type="button"
                class="page-btn border-container"
                disabled=move || !pagination.get().has_next()
                on:click=move |_| listing.page.update(|p| *p += 1)
            >
                "next"
            </button>
            <span class="page-summary">{move || pagination.get().summary()}</span>
            <Show when=move || session.debug_mode()>
                <span class="debug-line">
                    {move || {
                        let p = pagination.get();
                        format!("debug: page {} of {}", p.page, p.total_pages())
                    }}
                </span>
            </Show>
        </div>
    }
}

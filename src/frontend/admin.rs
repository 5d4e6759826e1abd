use leptos::*;
use leptos_meta::Title;

use super::browser;
use super::leaderboard::LeaderboardTable;
use super::session::use_session;
use crate::{AdminStats, LeaderboardEntry};

const TOP_CONTRIBUTORS: usize = 5;

#[component]
pub fn AdminPage() -> impl IntoView {
    let session = use_session();

    view! {
        <Title text="Academic-Net | Admin" />
        <Show
            when=move || session.is_admin()
            fallback=|| view! {
                <div class="border-container notice">
                    "admin statistics are only available to administrators"
                </div>
            }
        >
            <AdminDashboard />
        </Show>
    }
}

#[component]
fn AdminDashboard() -> impl IntoView {
    let session = use_session();
    let (stats, set_stats) = create_signal(None::<AdminStats>);
    let (top, set_top) = create_signal(Vec::<LeaderboardEntry>::new());
    let (is_loading, set_is_loading) = create_signal(false);

    let load = move || {
        set_is_loading.set(true);
        let client = session.client();
        spawn_local(async move {
            let (stats_result, leaders_result) =
                futures::join!(client.admin_stats(), client.leaderboard());

            match stats_result {
                Ok(s) => set_stats.set(Some(s)),
                Err(e) => {
                    set_stats.set(None);
                    session.report_error("Loading statistics", &e);
                }
            }
            match leaders_result {
                Ok(mut list) => {
                    list.truncate(TOP_CONTRIBUTORS);
                    set_top.set(list);
                }
                Err(e) => browser::warn(&format!("Error loading leaderboard: {}", e)),
            }
            set_is_loading.set(false);
        });
    };

    load();

    view! {
        <div class="main-grid">
            <div class="storage-section border-container">
                <Show
                    when=move || stats.get().is_some()
                    fallback=move || view! {
                        <div class="loading">
                            {move || if is_loading.get() { "loading statistics..." } else { "no statistics" }}
                        </div>
                    }
                >
                    {move || {
                        stats.get().map(|info| view! {
                            <div class="storage-stats-grid">
                                <div class="stat-box border-container">
                                    <div class="stat-value">{info.uploads}</div>
                                    <div class="stat-label">"uploads"</div>
                                </div>
                                <div class="stat-box border-container">
                                    <div class="stat-value">{info.downloads}</div>
                                    <div class="stat-label">"downloads"</div>
                                </div>
                                <div class="stat-box border-container">
                                    <div class="stat-value">{info.active_users}</div>
                                    <div class="stat-label">"active users"</div>
                                </div>
                            </div>
                        })
                    }}
                </Show>
                <button
                    type="button"
                    class="action-btn border-container"
                    disabled=move || is_loading.get()
                    on:click=move |_| load()
                >
                    "refresh"
                </button>
            </div>
            <div class="leaderboard-section border-container">
                <h2 class="section-title">"top contributors"</h2>
                <LeaderboardTable entries=top />
            </div>
        </div>
    }
}

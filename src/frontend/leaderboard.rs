use leptos::*;
use leptos_meta::Title;

use super::browser;
use super::session::use_session;
use crate::LeaderboardEntry;

#[component]
pub fn LeaderboardPage() -> impl IntoView {
    let session = use_session();
    let (entries, set_entries) = create_signal(Vec::<LeaderboardEntry>::new());
    let (is_loading, set_is_loading) = create_signal(true);

    spawn_local(async move {
        match session.client().leaderboard().await {
            Ok(list) => set_entries.set(list),
            Err(e) => browser::warn(&format!("Error loading leaderboard: {}", e)),
        }
        set_is_loading.set(false);
    });

    view! {
        <Title text="Academic-Net | Leaderboard" />
        <div class="leaderboard-section border-container">
            <Show
                when=move || !is_loading.get()
                fallback=|| view! { <div class="loading">"loading leaderboard..."</div> }
            >
                <LeaderboardTable entries=entries />
            </Show>
        </div>
    }
}

/// Ranked contributor table; the signed-in user's row is highlighted.
#[component]
pub fn LeaderboardTable(#[prop(into)] entries: Signal<Vec<LeaderboardEntry>>) -> impl IntoView {
    let session = use_session();
    let current_name = move || session.user.with(|u| u.as_ref().map(|u| u.name.clone()));
    let ranked = move || entries.get().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <Show
            when=move || !entries.with(Vec::is_empty)
            fallback=|| view! { <div class="empty-hint">"no contributions yet"</div> }
        >
            <table class="files-table leaderboard">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"contributor"</th>
                        <th>"points"</th>
                    </tr>
                </thead>
                <tbody>
                    <For each=ranked key=|(rank, entry)| (*rank, entry.user.clone()) let:row>
                        {
                            let (rank, entry) = row;
                            let user = entry.user.clone();
                            view! {
                                <tr class:highlight=move || current_name().as_deref() == Some(user.as_str())>
                                    <td>{rank + 1}</td>
                                    <td>{entry.user}</td>
                                    <td>{entry.points}</td>
                                </tr>
                            }
                        }
                    </For>
                </tbody>
            </table>
        </Show>
    }
}

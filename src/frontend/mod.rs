use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{Route, Router, Routes, A};
use wasm_bindgen::prelude::*;

mod admin;
mod auth;
mod browser;
mod client;
mod detail;
mod files;
mod leaderboard;
mod metadata;
mod requests;
mod session;
mod styles;
mod upload;

pub use client::ApiClient;

use admin::AdminPage;
use auth::AuthModal;
use detail::FileDetailPage;
use files::FileListPage;
use leaderboard::LeaderboardPage;
use requests::RequestsPage;
use session::{use_session, Listing, Session};
use styles::StyleProvider;
use upload::UploadModal;

use crate::ClientConfig;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    provide_meta_context();

    let session = Session::restore(config);
    provide_context(session);
    provide_context(Listing::new());

    view! {
        <StyleProvider />
        <Title text="Academic-Net" />
        <Router>
            <div class="app">
                <Header />
                <main>
                    <Routes>
                        <Route path="/" view=FileListPage />
                        <Route path="/files/:id" view=FileDetailPage />
                        <Route path="/requests" view=RequestsPage />
                        <Route path="/leaderboard" view=LeaderboardPage />
                        <Route path="/admin" view=AdminPage />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>
                <Show when=move || session.show_auth.get()>
                    <AuthModal />
                </Show>
                <Show when=move || session.show_upload.get()>
                    <UploadModal />
                </Show>
            </div>
        </Router>
    }
}

#[component]
fn Header() -> impl IntoView {
    let session = use_session();

    let user_label = move || {
        session.user.with(|u| match u {
            Some(user) if !user.name.is_empty() => format!("{} · {} pts", user.name, user.points),
            Some(user) => user.email.clone(),
            None => String::new(),
        })
    };

    view! {
        <header class="header-section border-container">
            <div>
                <A href="/" class="brand">"academic-net"</A>
                <div class="tagline">"notes, papers and slides shared by students"</div>
            </div>
            <nav class="nav-links">
                <A href="/" exact=true>"documents"</A>
                <A href="/requests">"requests"</A>
                <A href="/leaderboard">"leaderboard"</A>
                <Show when=move || session.is_admin()>
                    <A href="/admin">"admin"</A>
                </Show>
            </nav>
            <div class="user-area">
                <Show
                    when=move || session.is_logged_in()
                    fallback=move || view! {
                        <button
                            type="button"
                            class="primary-btn border-container"
                            on:click=move |_| session.show_auth.set(true)
                        >
                            "login / sign up"
                        </button>
                    }
                >
                    <span>{user_label}</span>
                    <button
                        type="button"
                        class="action-btn delete-btn border-container"
                        on:click=move |_| session.sign_out()
                    >
                        "logout"
                    </button>
                </Show>
            </div>
        </header>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="Academic-Net | Not found" />
        <div class="empty-state border-container">
            <div class="empty-icon">"404"</div>
            <div>"this page does not exist"</div>
            <A href="/">"back to documents"</A>
        </div>
    }
}

#[wasm_bindgen]
pub fn run() {
    console_error_panic_hook::set_once();
    wasm_bindgen_futures::spawn_local(async {
        let config = client::load_client_config().await;
        browser::log(&format!("Using API at {}", config.api_base));
        mount_to_body(move || view! { <App config=config /> });
    });
}

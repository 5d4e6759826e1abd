use leptos::*;

use super::metadata::MetadataSelects;
use super::session::use_session;
use crate::{validate, LoginRequest, RegisterRequest};

#[derive(Clone, Copy, PartialEq)]
enum AuthTab {
    Login,
    Signup,
}

#[component]
pub fn AuthModal() -> impl IntoView {
    let session = use_session();
    let (tab, set_tab) = create_signal(AuthTab::Login);
    let (auth_error, set_auth_error) = create_signal(None::<String>);
    let (is_submitting, set_is_submitting) = create_signal(false);

    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let university = create_rw_signal(String::new());
    let branch = create_rw_signal(String::new());

    let switch_tab = move |next: AuthTab| {
        set_auth_error.set(None);
        set_tab.set(next);
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        set_auth_error.set(None);

        let client = session.client();
        let current_tab = tab.get_untracked();
        let login = LoginRequest {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        let register = RegisterRequest {
            name: name.get_untracked().trim().to_string(),
            email: login.email.clone(),
            password: login.password.clone(),
            university: university.get_untracked(),
            branch: branch.get_untracked(),
        };

        let checked = match current_tab {
            AuthTab::Login => validate::login(&login),
            AuthTab::Signup => validate::register(&register),
        };
        if let Err(e) = checked {
            set_auth_error.set(Some(e.to_string()));
            return;
        }

        set_is_submitting.set(true);
        spawn_local(async move {
            let result = match current_tab {
                AuthTab::Login => client.login(&login).await,
                AuthTab::Signup => client.register(&register).await,
            };
            set_is_submitting.set(false);
            match result {
                Ok(auth) => {
                    password.set(String::new());
                    // closes the modal, so nothing may touch its signals after this
                    session.sign_in(auth);
                }
                Err(e) => set_auth_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| session.show_auth.set(false)>
            <div class="modal border-container auth-modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal-tabs">
                    <button
                        type="button"
                        class="tab-btn"
                        class:active=move || tab.get() == AuthTab::Login
                        on:click=move |_| switch_tab(AuthTab::Login)
                    >
                        "login"
                    </button>
                    <button
                        type="button"
                        class="tab-btn"
                        class:active=move || tab.get() == AuthTab::Signup
                        on:click=move |_| switch_tab(AuthTab::Signup)
                    >
                        "sign up"
                    </button>
                </div>

                <Show when=move || auth_error.get().is_some()>
                    <div class="form-error border-container">
                        {move || auth_error.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <Show when=move || tab.get() == AuthTab::Signup>
                        <div class="form-field">
                            <label class="field-label">"name"</label>
                            <input
                                type="text"
                                class="text-input border-container"
                                prop:value=move || name.get()
                                on:input=move |e| name.set(event_target_value(&e))
                                placeholder="your full name"
                            />
                        </div>
                    </Show>

                    <div class="form-field">
                        <label class="field-label">"email"</label>
                        <input
                            type="email"
                            class="text-input border-container"
                            prop:value=move || email.get()
                            on:input=move |e| email.set(event_target_value(&e))
                            placeholder="you@college.edu"
                            required
                        />
                    </div>

                    <div class="form-field">
                        <label class="field-label">"password"</label>
                        <input
                            type="password"
                            class="text-input border-container"
                            prop:value=move || password.get()
                            on:input=move |e| password.set(event_target_value(&e))
                            placeholder="enter password"
                            required
                        />
                    </div>

                    <Show when=move || tab.get() == AuthTab::Signup>
                        <div class="form-field">
                            <label class="field-label">"university & branch"</label>
                            <MetadataSelects university=university branch=branch />
                        </div>
                    </Show>

                    <div class="form-actions">
                        <button
                            type="button"
                            class="action-btn border-container"
                            on:click=move |_| session.show_auth.set(false)
                        >
                            "cancel"
                        </button>
                        <button
                            type="submit"
                            class="primary-btn border-container"
                            disabled=move || is_submitting.get()
                        >
                            {move || match (is_submitting.get(), tab.get()) {
                                (true, _) => "please wait...",
                                (false, AuthTab::Login) => "login",
                                (false, AuthTab::Signup) => "create account",
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

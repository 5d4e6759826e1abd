use leptos::*;

use super::browser::{self, TOKEN_KEY, USER_KEY, VIEW_MODE_KEY};
use super::client::ApiClient;
use crate::pagination::DEFAULT_PER_PAGE;
use crate::{ApiError, AuthResponse, ClientConfig, FileQuery, FileSummary, SortOrder, User, ViewMode};

/// Who is signed in, plus the modals that every page can open.
#[derive(Clone, Copy)]
pub struct Session {
    pub config: StoredValue<ClientConfig>,
    pub token: RwSignal<Option<String>>,
    pub user: RwSignal<Option<User>>,
    pub show_auth: RwSignal<bool>,
    pub show_upload: RwSignal<bool>,
}

impl Session {
    /// Picks up a token and profile left in local storage by an earlier visit.
    pub fn restore(config: ClientConfig) -> Self {
        let token = browser::storage_get(TOKEN_KEY).filter(|t| !t.is_empty());
        let user = token
            .as_ref()
            .and_then(|_| browser::storage_get(USER_KEY))
            .and_then(|raw| serde_json::from_str::<User>(&raw).ok());

        if token.is_some() {
            browser::log("Restored session from local storage");
        }

        Self::new(config, token, user)
    }

    pub fn new(config: ClientConfig, token: Option<String>, user: Option<User>) -> Self {
        Self {
            config: store_value(config),
            token: create_rw_signal(token),
            user: create_rw_signal(user),
            show_auth: create_rw_signal(false),
            show_upload: create_rw_signal(false),
        }
    }

    pub fn debug_mode(&self) -> bool {
        self.config.with_value(|c| c.debug_mode)
    }

    pub fn client(&self) -> ApiClient {
        let base = self.config.with_value(|c| c.api_base.clone());
        ApiClient::new(base, self.token.get_untracked())
    }

    /// Same as `client`, but subscribes the calling effect to the token, so
    /// signing in or out refetches with the right credentials.
    pub fn tracked_client(&self) -> ApiClient {
        let base = self.config.with_value(|c| c.api_base.clone());
        ApiClient::new(base, self.token.get())
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.with(Option::is_some)
    }

    pub fn is_admin(&self) -> bool {
        self.user.with(|u| u.as_ref().is_some_and(User::is_admin))
    }

    pub fn sign_in(&self, auth: AuthResponse) {
        browser::storage_set(TOKEN_KEY, &auth.token);
        match serde_json::to_string(&auth.user) {
            Ok(raw) => browser::storage_set(USER_KEY, &raw),
            Err(e) => browser::warn(&format!("Failed to store user profile: {}", e)),
        }
        batch(|| {
            self.token.set(Some(auth.token));
            self.user.set(Some(auth.user));
            self.show_auth.set(false);
        });
    }

    pub fn sign_out(&self) {
        browser::storage_remove(TOKEN_KEY);
        browser::storage_remove(USER_KEY);
        batch(|| {
            self.token.set(None);
            self.user.set(None);
            self.show_upload.set(false);
        });
    }

    /// Opens the login modal when nobody is signed in. Returns whether someone is.
    pub fn require_login(&self) -> bool {
        let logged_in = self.token.with_untracked(Option::is_some);
        if !logged_in {
            self.show_auth.set(true);
        }
        logged_in
    }

    /// Surfaces a failed user action. An expired token also ends the session.
    pub fn report_error(&self, action: &str, err: &ApiError) {
        browser::warn(&format!("{} failed: {:?}", action, err));
        if err.is_unauthorized() {
            self.sign_out();
            self.show_auth.set(true);
        }
        browser::alert(&format!("{} failed: {}", action, err));
    }
}

pub fn use_session() -> Session {
    expect_context::<Session>()
}

/// Filters, paging and the last fetched page of the file list.
#[derive(Clone, Copy)]
pub struct Listing {
    pub university: RwSignal<String>,
    pub branch: RwSignal<String>,
    pub semester: RwSignal<Option<u8>>,
    pub subject: RwSignal<String>,
    pub search: RwSignal<String>,
    pub sort: RwSignal<SortOrder>,
    pub page: RwSignal<u32>,
    pub per_page: RwSignal<u32>,
    pub view_mode: RwSignal<ViewMode>,
    pub files: RwSignal<Vec<FileSummary>>,
    pub total: RwSignal<u64>,
    pub loading: RwSignal<bool>,
    pub reload: RwSignal<u32>,
}

impl Listing {
    pub fn new() -> Self {
        let view_mode = browser::storage_get(VIEW_MODE_KEY)
            .map(|v| ViewMode::parse(&v))
            .unwrap_or_default();

        Self {
            university: create_rw_signal(String::new()),
            branch: create_rw_signal(String::new()),
            semester: create_rw_signal(None),
            subject: create_rw_signal(String::new()),
            search: create_rw_signal(String::new()),
            sort: create_rw_signal(SortOrder::default()),
            page: create_rw_signal(1),
            per_page: create_rw_signal(DEFAULT_PER_PAGE),
            view_mode: create_rw_signal(view_mode),
            files: create_rw_signal(Vec::new()),
            total: create_rw_signal(0),
            loading: create_rw_signal(false),
            reload: create_rw_signal(0),
        }
    }

    /// Current query; reading it subscribes to every filter.
    pub fn query(&self) -> FileQuery {
        FileQuery {
            university: self.university.get(),
            branch: self.branch.get(),
            semester: self.semester.get(),
            subject: self.subject.get(),
            search: self.search.get(),
            page: self.page.get(),
            per_page: self.per_page.get(),
            sort: self.sort.get(),
        }
    }

    pub fn toggle_view(&self) {
        let next = self.view_mode.get_untracked().toggled();
        browser::storage_set(VIEW_MODE_KEY, next.as_str());
        self.view_mode.set(next);
    }

    /// Refetch from the first page, e.g. after an upload.
    pub fn refresh(&self) {
        batch(|| {
            self.page.set(1);
            self.reload.update(|n| *n += 1);
        });
    }

    pub fn clear_filters(&self) {
        batch(|| {
            self.university.set(String::new());
            self.branch.set(String::new());
            self.semester.set(None);
            self.subject.set(String::new());
            self.search.set(String::new());
            self.page.set(1);
        });
    }
}

pub fn use_listing() -> Listing {
    expect_context::<Listing>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracked_client_follows_token() {
        let runtime = create_runtime();
        let session = Session::new(ClientConfig::default(), Some("stale".to_string()), None);
        let seen = create_rw_signal(Vec::<ApiClient>::new());

        create_effect(move |_| {
            let client = session.tracked_client();
            seen.update(|clients| clients.push(client));
        });
        session.token.set(None);

        assert_eq!(
            seen.get_untracked(),
            vec![
                ApiClient::new("/api", Some("stale".to_string())),
                ApiClient::new("/api", None),
            ]
        );
        runtime.dispose();
    }
}

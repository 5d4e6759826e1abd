//! Thin wrappers over the browser APIs the client touches directly.

use leptos_dom::helpers::window;
use wasm_bindgen::JsValue;
use web_sys::Storage;

pub const TOKEN_KEY: &str = "academic_net_token";
pub const USER_KEY: &str = "academic_net_user";
pub const VIEW_MODE_KEY: &str = "academic_net_view";

pub fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

/// Blocking message box for failed user actions.
pub fn alert(message: &str) {
    if window().alert_with_message(message).is_err() {
        warn(message);
    }
}

pub fn confirm(message: &str) -> bool {
    window().confirm_with_message(message).unwrap_or(false)
}

pub fn open_in_new_tab(url: &str) {
    if let Err(e) = window().open_with_url_and_target(url, "_blank") {
        warn(&format!("Could not open {}: {:?}", url, e));
    }
}

fn local_storage() -> Option<Storage> {
    window().local_storage().ok().flatten()
}

pub fn storage_get(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

pub fn storage_set(key: &str, value: &str) {
    match local_storage() {
        Some(storage) => {
            if storage.set_item(key, value).is_err() {
                warn(&format!("Failed to write {} to local storage", key));
            }
        }
        None => warn("Local storage is not available"),
    }
}

pub fn storage_remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// Renders a server timestamp as a local date, or returns it untouched.
pub fn format_timestamp(timestamp: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(timestamp));
    if date.get_time().is_nan() {
        timestamp.to_string()
    } else {
        String::from(date.to_locale_date_string("en-IN", &JsValue::UNDEFINED))
    }
}

//! Helpers for reaching the storefront API.

/// Backend origin derived from the current window location; the API server
/// listens on port 8000 in every environment.
///
/// Returns an empty string if no window is available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    format!(
        "{}//{}:8000",
        location.protocol().unwrap_or_else(|_| "http:".into()),
        location.hostname().unwrap_or_else(|_| "127.0.0.1".into()),
    )
}

/// Build a full API URL from a path starting with "/api/".
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

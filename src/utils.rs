// src/utils.rs
use crate::error::ClipboardError;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};

/// Get the base path the page is served from.
/// Works both at a site root and under a sub-path (e.g. GitHub Pages).
pub fn get_base_url() -> String {
    gloo_utils::window()
        .location()
        .pathname()
        .map(|path| base_from_pathname(&path))
        .unwrap_or_default()
}

/// Directory part of a location pathname, without the trailing slash.
pub fn base_from_pathname(pathname: &str) -> String {
    match pathname.rfind('/') {
        Some(idx) => pathname[..idx].to_string(),
        None => String::new(),
    }
}

/// Build a resource URL with the correct base path
pub fn resource_url(path: &str) -> String {
    join_base(&get_base_url(), path)
}

pub fn join_base(base: &str, path: &str) -> String {
    if is_external(path) {
        return path.to_string();
    }
    let clean_path = path.trim_start_matches("./").trim_start_matches('/');

    if base.is_empty() {
        format!("/{}", clean_path)
    } else {
        format!("{}/{}", base.trim_end_matches('/'), clean_path)
    }
}

fn is_external(path: &str) -> bool {
    path.starts_with("http://")
        || path.starts_with("https://")
        || path.starts_with("data:")
        || path.starts_with("//")
}

/// Writes `text` to the system clipboard. The write completes in the
/// background; a rejection is only logged.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let navigator = gloo_utils::window().navigator();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
        .ok_or(ClipboardError::Unavailable)?;
    let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
        .ok_or(ClipboardError::Unavailable)?;
    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| ClipboardError::Rejected(format!("{:?}", e)))?
        .dyn_into::<Promise>()
        .map_err(|_| ClipboardError::Unavailable)?;

    spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            log::warn!("{}", ClipboardError::Rejected(format!("{:?}", e)));
        }
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_from_pathname() {
        assert_eq!(base_from_pathname("/"), "");
        assert_eq!(base_from_pathname("/index.html"), "");
        assert_eq!(base_from_pathname("/invitation/"), "/invitation");
        assert_eq!(base_from_pathname("/invitation/index.html"), "/invitation");
        assert_eq!(base_from_pathname(""), "");
    }

    #[test]
    fn test_resource_url_formatting() {
        // With leading slash
        assert_eq!(join_base("", "/wedding-song.mp3"), "/wedding-song.mp3");
        // Relative to the page
        assert_eq!(join_base("", "./images/025.jpg"), "/images/025.jpg");
        assert_eq!(
            join_base("/invitation", "./images/025.jpg"),
            "/invitation/images/025.jpg"
        );
        assert_eq!(
            join_base("/invitation/", "images/025.jpg?retry=1"),
            "/invitation/images/025.jpg?retry=1"
        );
    }

    #[test]
    fn test_external_urls_are_untouched() {
        let url = "https://t1.daumcdn.net/roughmap/imgmap/abc";
        assert_eq!(join_base("/invitation", url), url);
    }
}

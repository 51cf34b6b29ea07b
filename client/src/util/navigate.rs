//! Outbound navigation to external links.

#[cfg(test)]
#[path = "navigate_test.rs"]
mod navigate_test;

/// Usable link target: trimmed and non-empty.
#[must_use]
pub fn normalize_link(link: Option<&str>) -> Option<&str> {
    link.map(str::trim).filter(|l| !l.is_empty())
}

/// Open `url` in a new browsing context.
pub fn open_external(url: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.open_with_url_and_target_and_features(url, "_blank", "noopener") {
            log::warn!("failed to open {url}: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::debug!("open_external({url}) skipped outside the browser");
    }
}

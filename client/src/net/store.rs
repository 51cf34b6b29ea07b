//! Read-only client for the remote content document store.
//!
//! Client-side (csr): real HTTP reads via `gloo-net`.
//! Native builds (tests): reads resolve to `Ok(None)` since there is no
//! browser fetch available.
//!
//! ERROR HANDLING
//! ==============
//! A missing path is not an error: the store answers JSON `null` and callers
//! get `Ok(None)`. Transport, status, and decode failures are reported as
//! `StoreError` so the caller decides how to degrade.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use serde::de::DeserializeOwned;

/// Base URL used when none is set at build time; the dev host serves this path.
pub const DEFAULT_STORE_BASE_URL: &str = "/content";

/// Named subtree a page section reads from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionPath {
    Hero,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Contact,
}

impl SectionPath {
    /// Every section in page order.
    pub const ALL: [SectionPath; 7] = [
        SectionPath::Hero,
        SectionPath::Experience,
        SectionPath::Education,
        SectionPath::Skills,
        SectionPath::Projects,
        SectionPath::Certifications,
        SectionPath::Contact,
    ];

    /// Store key for this section's subtree.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Certifications => "certifications",
            Self::Contact => "contact",
        }
    }

    /// DOM id of the section element, used as the navigation anchor.
    #[must_use]
    pub fn anchor_id(self) -> &'static str {
        match self {
            Self::Hero => "home",
            other => other.key(),
        }
    }

    #[must_use]
    pub fn nav_label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            other => other.default_title(),
        }
    }

    /// Heading shown while loading or when the content carries no title.
    #[must_use]
    pub fn default_title(self) -> &'static str {
        match self {
            Self::Hero => "",
            Self::Experience => "Experience",
            Self::Education => "Education",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Certifications => "Certifications",
            Self::Contact => "Contact",
        }
    }
}

/// Errors from a subtree read.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("content request failed: {0}")]
    Network(String),
    #[error("content request returned status {0}")]
    Status(u16),
    #[error("content body could not be decoded: {0}")]
    Decode(String),
}

/// Store base URL baked in at build time via `PORTFOLIO_STORE_URL`, e.g.
/// `https://<project>.firebaseio.com`; falls back to [`DEFAULT_STORE_BASE_URL`].
#[must_use]
pub fn store_base_url() -> &'static str {
    option_env!("PORTFOLIO_STORE_URL").unwrap_or(DEFAULT_STORE_BASE_URL)
}

/// REST URL of one subtree: `{base}/{key}.json`.
#[must_use]
pub fn subtree_url(base: &str, path: SectionPath) -> String {
    format!("{}/{}.json", base.trim_end_matches('/'), path.key())
}

/// Decode a subtree body. JSON `null` means the path does not exist.
///
/// # Errors
///
/// Returns `StoreError::Decode` if the body is not valid JSON for `T`.
pub fn parse_snapshot<T: DeserializeOwned>(body: &str) -> Result<Option<T>, StoreError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| StoreError::Decode(e.to_string()))?;
    if value.is_null() {
        return Ok(None);
    }
    serde_json::from_value(value)
        .map(Some)
        .map_err(|e| StoreError::Decode(e.to_string()))
}

/// Read one section subtree from the store.
///
/// # Errors
///
/// Returns an error if the request fails, the store answers a non-success
/// status, or the body cannot be decoded.
pub async fn fetch_subtree<T: DeserializeOwned>(path: SectionPath) -> Result<Option<T>, StoreError> {
    #[cfg(feature = "csr")]
    {
        let url = subtree_url(store_base_url(), path);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(StoreError::Status(resp.status()));
        }
        let body = resp.text().await.map_err(|e| StoreError::Network(e.to_string()))?;
        parse_snapshot(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
        Ok(None)
    }
}

//! Single-item selection backing a section's detail modal.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use crate::net::types::Showcase;
use crate::util::navigate::normalize_link;

/// What a click on the enlarged image does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageClick {
    /// Navigate and close only when the item has a link (certificates).
    FollowLink,
    /// Always close; navigate too when a link exists (projects).
    FollowLinkAndClose,
}

/// At most one selected item; `Some` means the modal is open.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection<T> {
    current: Option<T>,
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<T: Showcase> Selection<T> {
    /// Open the modal on `item`, replacing any previous selection.
    pub fn select(&mut self, item: T) {
        self.current = Some(item);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Click on the enlarged image: returns the link to open and closes the
    /// modal. Without a usable link nothing happens.
    pub fn activate_image(&mut self) -> Option<String> {
        let link = self
            .current
            .as_ref()
            .and_then(|item| normalize_link(item.link()))
            .map(str::to_owned)?;
        self.current = None;
        Some(link)
    }

    /// Click on the enlarged image: always closes the modal and returns the
    /// link to open, if any.
    pub fn activate_image_and_close(&mut self) -> Option<String> {
        let item = self.current.take()?;
        normalize_link(item.link()).map(str::to_owned)
    }

    /// Dispatch an image click according to `policy`.
    pub fn click_image(&mut self, policy: ImageClick) -> Option<String> {
        match policy {
            ImageClick::FollowLink => self.activate_image(),
            ImageClick::FollowLinkAndClose => self.activate_image_and_close(),
        }
    }
}

//! Load lifecycle for a remote-content section.
//!
//! DESIGN
//! ======
//! Each section owns one `LoadStatus` for its lifetime. `begin` hands out the
//! right to issue the read exactly once, and `resolve` only applies while a
//! read is outstanding, so settled sections are never re-requested or
//! overwritten.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

use crate::net::types::{ListContent, SectionContent};

/// Placeholder slots shown by list sections while their read is pending.
pub const PLACEHOLDER_SLOTS: usize = 3;

/// Tri-state load status, plus the pre-mount state.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadStatus<T> {
    #[default]
    NotYetRequested,
    Loading,
    Loaded(T),
    LoadedEmpty,
}

impl<T> LoadStatus<T> {
    /// Move to `Loading`. Returns `true` only on the call that should issue the read.
    pub fn begin(&mut self) -> bool {
        if matches!(self, Self::NotYetRequested) {
            *self = Self::Loading;
            true
        } else {
            false
        }
    }

    /// Settle an outstanding read. `None` means the path held no content.
    pub fn resolve(&mut self, content: Option<T>) {
        if !matches!(self, Self::Loading) {
            return;
        }
        *self = match content {
            Some(content) => Self::Loaded(content),
            None => Self::LoadedEmpty,
        };
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Loaded(_) | Self::LoadedEmpty)
    }

    #[must_use]
    pub fn content(&self) -> Option<&T> {
        match self {
            Self::Loaded(content) => Some(content),
            _ => None,
        }
    }
}

/// What a list section renders into its item area.
#[derive(Clone, Debug, PartialEq)]
pub enum SlotPlan<I> {
    /// Fixed number of loading placeholders.
    Placeholders(usize),
    /// Real items; possibly empty once settled.
    Items(Vec<I>),
}

/// Item area for the current status: fixed placeholders until settled.
#[must_use]
pub fn slot_plan<C: ListContent>(status: &LoadStatus<C>, placeholders: usize) -> SlotPlan<C::Item> {
    if !status.is_settled() {
        return SlotPlan::Placeholders(placeholders);
    }
    SlotPlan::Items(status.content().map_or_else(Vec::new, |c| c.items().to_vec()))
}

/// Section heading: the content's own title when present, the default otherwise.
#[must_use]
pub fn section_title<C: SectionContent>(status: &LoadStatus<C>) -> String {
    status
        .content()
        .and_then(SectionContent::title)
        .filter(|t| !t.trim().is_empty())
        .unwrap_or(C::PATH.default_title())
        .to_owned()
}

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each content section owns its load status and selection; shared plumbing
//! (shell, placeholders, modal, carousel, hover words) lives beside them.

pub mod carousel;
pub mod certifications;
pub mod contact;
pub mod content_section;
pub mod detail_modal;
pub mod education;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod hover_words;
pub mod navbar;
pub mod projects;
pub mod skills;

//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The site is a single scrolling page; section anchors replace routing.

pub mod home;

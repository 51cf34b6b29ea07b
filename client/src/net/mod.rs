//! Networking modules for the remote content store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `store` performs the single read each section issues, and `types` defines
//! the content shapes stored under each section path.

pub mod store;
pub mod types;

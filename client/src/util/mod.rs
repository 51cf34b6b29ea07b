//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (document theme class, window
//! navigation, animation frames, viewport observers) from component logic so
//! the logic stays testable without a browser.

pub mod dark_mode;
pub mod frame_loop;
pub mod motion;
pub mod navigate;
pub mod palette;
pub mod reveal;

//! Section-local client state.
//!
//! DESIGN
//! ======
//! Each model is owned by a single component instance: no state is shared
//! between sections, and transient pointer state never outlives its gesture.

pub mod carousel;
pub mod pointer;
pub mod section;
pub mod selection;

//! Form state for the portal pages.
//!
//! DESIGN
//! ======
//! Each page owns one plain-data form struct held in an `RwSignal`. The
//! structs carry validation and outcome handling so pages stay thin and the
//! rules are testable without a browser.

pub mod forgot;
pub mod notify;
pub mod reset;
pub mod submit;
pub mod toast;

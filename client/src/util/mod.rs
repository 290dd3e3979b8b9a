//! Helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `clock` is the only place the client reads the current date; everything
//! downstream takes "today" as a parameter.

pub mod clock;
pub mod format;

//! Per-page client state over the `market` domain types.
//!
//! DESIGN
//! ======
//! Each page keeps one plain struct in an `RwSignal` and mutates it through
//! the methods here, so the rules are testable without a reactive runtime.
//! The catalog itself is read-only and shared through context.

pub mod browse;
pub mod calendar;
pub mod chef_dashboard;
pub mod customer_dashboard;

use std::sync::Arc;

use leptos::prelude::*;
use market::Catalog;

/// Read the catalog provided by `App`.
pub fn use_catalog() -> Arc<Catalog> {
    expect_context::<Arc<Catalog>>()
}

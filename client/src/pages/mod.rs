//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page reads the catalog from context, owns its route-scoped state
//! signal and delegates rendering details to `components`.

pub mod book;
pub mod browse;
pub mod chef_dashboard;
pub mod chef_profile;
pub mod customer_dashboard;
pub mod home;

//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render one card, widget or panel from props. Page-level state
//! stays in `pages`; components report user intent back through callbacks.

pub mod availability_calendar;
pub mod avatar;
pub mod booking_calendar;
pub mod booking_card;
pub mod booking_summary;
pub mod chef_booking_card;
pub mod chef_card;
pub mod chef_gallery;
pub mod chef_profile_editor;
pub mod customer_profile_form;
pub mod earnings_overview;
pub mod favorite_chefs;
pub mod progress_steps;
pub mod reviews_list;
pub mod site_header;
pub mod stat_card;

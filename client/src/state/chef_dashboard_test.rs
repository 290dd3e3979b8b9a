use super::*;
use time::macros::date;

fn state() -> ChefDashboardState {
    ChefDashboardState::from_catalog(&Catalog::sample()).unwrap()
}

// =============================================================
// construction
// =============================================================

#[test]
fn loads_signed_in_chef() {
    let state = state();
    assert_eq!(state.chef.id, "1");
    assert_eq!(state.tab, ChefTab::Overview);
    assert_eq!(state.bookings.len(), 5);
    assert!(state.editor.is_none());
}

#[test]
fn unknown_signed_in_chef_errors() {
    let mut catalog = Catalog::sample();
    catalog.signed_in_chef_id = "zzz".into();
    assert_eq!(ChefDashboardState::from_catalog(&catalog), Err(CatalogError::ChefNotFound("zzz".into())));
}

// =============================================================
// booking actions
// =============================================================

#[test]
fn accept_then_complete_updates_earnings() {
    let mut state = state();
    assert_eq!(state.act("chef-booking-2", StatusAction::Confirm), Ok(Some(BookingStatus::Confirmed)));
    assert_eq!(state.act("chef-booking-2", StatusAction::Complete), Ok(Some(BookingStatus::Completed)));
    let view = state.view();
    assert_eq!(view.stats.completed, 3);
    assert_eq!(view.stats.earnings, 255 + 340 + 285);
}

#[test]
fn decline_cancels_pending() {
    let mut state = state();
    assert_eq!(state.act("chef-booking-4", StatusAction::Decline), Ok(Some(BookingStatus::Cancelled)));
    assert_eq!(state.view().stats.pending, 1);
}

#[test]
fn completing_pending_is_refused() {
    let mut state = state();
    assert!(state.act("chef-booking-2", StatusAction::Complete).is_err());
}

// =============================================================
// availability
// =============================================================

#[test]
fn toggle_day_respects_past_lock() {
    let mut state = state();
    let today = date!(2024 - 12 - 10);
    assert!(!state.toggle_day(today, today));
    assert!(state.toggle_day(date!(2024 - 12 - 12), today));
    assert!(state.availability.is_available(date!(2024 - 12 - 12)));
}

// =============================================================
// profile editor
// =============================================================

#[test]
fn save_applies_edits_to_session_chef() {
    let mut state = state();
    state.start_editing();
    if let Some(editor) = state.editor.as_mut() {
        editor.hourly_rate = 99;
        editor.add_cuisine("Tuscan").unwrap();
    }
    state.save_profile();
    assert!(state.editor.is_none());
    assert_eq!(state.chef.hourly_rate, 99);
    assert!(state.chef.cuisines.iter().any(|c| c == "Tuscan"));
}

#[test]
fn cancel_discards_edits() {
    let mut state = state();
    state.start_editing();
    if let Some(editor) = state.editor.as_mut() {
        editor.name = "Someone Else".into();
    }
    state.cancel_editing();
    state.save_profile();
    assert_eq!(state.chef.name, "Chef Maria Rodriguez");
}

use super::*;

#[test]
fn starts_on_bookings_tab_with_catalog_bookings() {
    let catalog = Catalog::sample();
    let state = CustomerDashboardState::from_catalog(&catalog);
    assert_eq!(state.tab, CustomerTab::Bookings);
    assert_eq!(state.bookings, catalog.customer_bookings);
}

#[test]
fn cancel_moves_booking_out_of_groups() {
    let catalog = Catalog::sample();
    let mut state = CustomerDashboardState::from_catalog(&catalog);
    assert_eq!(state.cancel("booking-1"), Ok(Some(BookingStatus::Cancelled)));
    let view = state.view(&catalog);
    assert!(view.upcoming.is_empty());
    assert_eq!(view.stats.upcoming, 0);
    assert!(view.has_bookings);
    // The catalog copy is untouched.
    assert_eq!(catalog.customer_bookings[0].status, BookingStatus::Confirmed);
}

#[test]
fn cancel_completed_booking_is_refused() {
    let catalog = Catalog::sample();
    let mut state = CustomerDashboardState::from_catalog(&catalog);
    assert!(state.cancel("booking-3").is_err());
    assert_eq!(state.bookings[2].status, BookingStatus::Completed);
}

#[test]
fn cancel_unknown_booking_is_none() {
    let mut state = CustomerDashboardState::from_catalog(&Catalog::sample());
    assert_eq!(state.cancel("missing"), Ok(None));
}

#[test]
fn tab_labels() {
    let labels: Vec<&str> = CustomerTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, ["My Bookings", "Favorites", "Profile"]);
}

// =============================================================================
// profile editing
// =============================================================================

#[test]
fn save_profile_updates_session_customer_and_greeting() {
    let catalog = Catalog::sample();
    let mut state = CustomerDashboardState::from_catalog(&catalog);
    state.start_editing();
    if let Some(form) = state.editor.as_mut() {
        form.name = "Sam Johnson".into();
        form.location = "Oakland, CA".into();
    }

    assert!(state.save_profile());
    assert!(state.editor.is_none());
    assert_eq!(state.customer.location, "Oakland, CA");
    assert_eq!(state.view(&catalog).greeting(), "Welcome back, Sam!");
    assert_eq!(catalog.customer.name, "Sarah Johnson");
}

#[test]
fn save_profile_keeps_incomplete_form_open() {
    let mut state = CustomerDashboardState::from_catalog(&Catalog::sample());
    state.start_editing();
    if let Some(form) = state.editor.as_mut() {
        form.email.clear();
    }

    assert!(!state.save_profile());
    assert!(state.editor.is_some());
    assert_eq!(state.customer.email, "sarah.johnson@example.com");
}

#[test]
fn cancel_editing_discards_changes() {
    let mut state = CustomerDashboardState::from_catalog(&Catalog::sample());
    state.start_editing();
    if let Some(form) = state.editor.as_mut() {
        form.phone = "000".into();
    }
    state.cancel_editing();

    assert!(state.editor.is_none());
    assert_eq!(state.customer.phone, "+1 (555) 123-4567");
    assert!(!state.save_profile());
}

//! Customer dashboard session state.
//!
//! Holds session copies of the customer's bookings and account so
//! cancellations and profile edits show up immediately. The catalog is never
//! modified.

#[cfg(test)]
#[path = "customer_dashboard_test.rs"]
mod customer_dashboard_test;

use market::dashboard::{self, CustomerDashboard};
use market::profile::CustomerProfileEditor;
use market::status::StatusError;
use market::{Actor, BookingStatus, Catalog, CustomerBooking, StatusAction, User};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CustomerTab {
    #[default]
    Bookings,
    Favorites,
    Profile,
}

impl CustomerTab {
    pub const ALL: [Self; 3] = [Self::Bookings, Self::Favorites, Self::Profile];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Bookings => "My Bookings",
            Self::Favorites => "Favorites",
            Self::Profile => "Profile",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CustomerDashboardState {
    pub tab: CustomerTab,
    pub bookings: Vec<CustomerBooking>,
    /// Session copy of the signed-in customer; profile saves land here.
    pub customer: User,
    /// Open profile form, if editing.
    pub editor: Option<CustomerProfileEditor>,
}

impl CustomerDashboardState {
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            tab: CustomerTab::default(),
            bookings: catalog.customer_bookings.clone(),
            customer: catalog.customer.clone(),
            editor: None,
        }
    }

    /// Cancel a booking on the customer's behalf.
    ///
    /// # Errors
    ///
    /// Returns the refusal from the status rules when the booking can no
    /// longer be cancelled.
    pub fn cancel(&mut self, id: &str) -> Result<Option<BookingStatus>, StatusError> {
        dashboard::apply_action(&mut self.bookings, id, StatusAction::Cancel, Actor::Customer)
    }

    pub fn start_editing(&mut self) {
        self.editor = Some(CustomerProfileEditor::from_user(&self.customer));
    }

    /// Apply the open form to the session customer and close it. A form
    /// missing its name or email stays open and nothing is applied.
    pub fn save_profile(&mut self) -> bool {
        match self.editor.take() {
            Some(editor) if editor.can_save() => {
                self.customer = editor.apply_to(&self.customer);
                true
            }
            open => {
                self.editor = open;
                false
            }
        }
    }

    pub fn cancel_editing(&mut self) {
        self.editor = None;
    }

    /// Dashboard projection of the session bookings and account.
    #[must_use]
    pub fn view(&self, catalog: &Catalog) -> CustomerDashboard {
        CustomerDashboard::build(&self.customer, &self.bookings, catalog.favorite_chefs())
    }
}

//! Chef dashboard session state: booking actions, availability and the
//! profile editor.

#[cfg(test)]
#[path = "chef_dashboard_test.rs"]
mod chef_dashboard_test;

use market::calendar::Availability;
use market::catalog::CatalogError;
use market::dashboard::{self, ChefDashboard};
use market::profile::ProfileEditor;
use market::status::StatusError;
use market::{Actor, BookingStatus, Catalog, Chef, ChefBooking, StatusAction};
use time::Date;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChefTab {
    #[default]
    Overview,
    Bookings,
    Availability,
    Profile,
}

impl ChefTab {
    pub const ALL: [Self; 4] = [Self::Overview, Self::Bookings, Self::Availability, Self::Profile];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Bookings => "Bookings",
            Self::Availability => "Availability",
            Self::Profile => "Profile",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChefDashboardState {
    pub tab: ChefTab,
    /// Session copy of the signed-in chef; profile saves land here.
    pub chef: Chef,
    pub bookings: Vec<ChefBooking>,
    pub availability: Availability,
    /// Open profile form, if editing.
    pub editor: Option<ProfileEditor>,
}

impl ChefDashboardState {
    /// # Errors
    ///
    /// Fails when the catalog's signed-in chef id is unknown.
    pub fn from_catalog(catalog: &Catalog) -> Result<Self, CatalogError> {
        let chef = catalog.chef(&catalog.signed_in_chef_id)?.clone();
        Ok(Self {
            tab: ChefTab::default(),
            chef,
            bookings: catalog.chef_bookings.clone(),
            availability: Availability::default(),
            editor: None,
        })
    }

    /// Apply a chef-side status action to a session booking.
    ///
    /// # Errors
    ///
    /// Returns the refusal from the status rules.
    pub fn act(&mut self, id: &str, action: StatusAction) -> Result<Option<BookingStatus>, StatusError> {
        dashboard::apply_action(&mut self.bookings, id, action, Actor::Chef)
    }

    pub fn toggle_day(&mut self, date: Date, today: Date) -> bool {
        self.availability.toggle(date, today)
    }

    pub fn start_editing(&mut self) {
        self.editor = Some(ProfileEditor::from_chef(&self.chef));
    }

    /// Apply the open form to the session chef and close it.
    pub fn save_profile(&mut self) {
        if let Some(editor) = self.editor.take() {
            self.chef = editor.apply_to(&self.chef);
        }
    }

    pub fn cancel_editing(&mut self) {
        self.editor = None;
    }

    #[must_use]
    pub fn view(&self) -> ChefDashboard {
        ChefDashboard::build(&self.chef, &self.bookings)
    }
}

//! Month grid layout shared by the booking and availability calendars.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use market::calendar::MonthCursor;
use time::Date;

/// One cell of a month grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayCell {
    /// Padding before the first day so columns line up with weekdays.
    Blank,
    Day(Date),
}

/// Displayed month of a calendar widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarState {
    pub cursor: MonthCursor,
}

impl CalendarState {
    /// Open on the month containing `date`.
    #[must_use]
    pub fn showing(date: Date) -> Self {
        Self { cursor: MonthCursor::containing(date) }
    }

    pub fn next_month(&mut self) {
        self.cursor = self.cursor.next();
    }

    pub fn previous_month(&mut self) {
        self.cursor = self.cursor.previous();
    }

    #[must_use]
    pub fn title(&self) -> String {
        self.cursor.title()
    }

    /// Leading blanks followed by every day of the month.
    #[must_use]
    pub fn cells(&self) -> Vec<DayCell> {
        let blanks = usize::from(self.cursor.leading_blanks());
        std::iter::repeat_n(DayCell::Blank, blanks).chain(self.cursor.days().map(DayCell::Day)).collect()
    }
}

use super::*;
use time::macros::date;

#[test]
fn showing_opens_on_containing_month() {
    let state = CalendarState::showing(date!(2024 - 12 - 15));
    assert_eq!(state.title(), "December 2024");
}

#[test]
fn cells_start_with_weekday_padding() {
    // November 2024 starts on a Friday.
    let state = CalendarState::showing(date!(2024 - 11 - 03));
    let cells = state.cells();
    assert_eq!(cells.len(), 5 + 30);
    assert!(cells[..5].iter().all(|cell| *cell == DayCell::Blank));
    assert_eq!(cells[5], DayCell::Day(date!(2024 - 11 - 01)));
    assert_eq!(cells.last(), Some(&DayCell::Day(date!(2024 - 11 - 30))));
}

#[test]
fn sunday_start_has_no_padding() {
    let state = CalendarState::showing(date!(2024 - 12 - 20));
    assert_eq!(state.cells()[0], DayCell::Day(date!(2024 - 12 - 01)));
}

#[test]
fn month_navigation() {
    let mut state = CalendarState::showing(date!(2024 - 12 - 20));
    state.next_month();
    assert_eq!(state.title(), "January 2025");
    state.previous_month();
    state.previous_month();
    assert_eq!(state.title(), "November 2024");
}

//! Date picker for the booking wizard.
//!
//! Days are selectable only when `market::calendar::is_bookable` allows them;
//! clicks on other days do nothing.

#[cfg(test)]
#[path = "booking_calendar_test.rs"]
mod booking_calendar_test;

use leptos::prelude::*;
use market::calendar::{self, DAY_NAMES};
use time::Date;

use crate::state::calendar::{CalendarState, DayCell};

#[component]
pub fn BookingCalendar(
    #[prop(into)] selected: Signal<Option<Date>>,
    today: Date,
    on_select: Callback<Date>,
) -> impl IntoView {
    let month = RwSignal::new(CalendarState::showing(selected.get_untracked().unwrap_or(today)));

    let cells = move || {
        month
            .get()
            .cells()
            .into_iter()
            .map(|cell| match cell {
                DayCell::Blank => view! { <span class="calendar__blank"></span> }.into_any(),
                DayCell::Day(date) => {
                    let bookable = calendar::is_bookable(date, today);
                    view! {
                        <button
                            type="button"
                            class="calendar__day"
                            class:calendar__day--selected=move || selected.get() == Some(date)
                            class:calendar__day--disabled=!bookable
                            disabled=!bookable
                            on:click=move |_| {
                                if bookable {
                                    on_select.run(date);
                                }
                            }
                        >
                            {date.day()}
                        </button>
                    }
                        .into_any()
                }
            })
            .collect_view()
    };

    view! {
        <div class="calendar">
            <div class="calendar__header">
                <button type="button" class="btn btn--ghost" on:click=move |_| month.update(CalendarState::previous_month)>
                    "‹"
                </button>
                <span class="calendar__title">{move || month.get().title()}</span>
                <button type="button" class="btn btn--ghost" on:click=move |_| month.update(CalendarState::next_month)>
                    "›"
                </button>
            </div>
            <div class="calendar__grid">
                {DAY_NAMES.into_iter().map(|name| view! { <span class="calendar__weekday">{name}</span> }).collect_view()}
                {cells}
            </div>
            <p class="calendar__legend">"Chefs are unavailable on Sundays and Mondays."</p>
        </div>
    }
}

//! Chef-side calendar for marking available days.

#[cfg(test)]
#[path = "availability_calendar_test.rs"]
mod availability_calendar_test;

use leptos::prelude::*;
use market::calendar::{self, Availability, DAY_NAMES};
use time::Date;

use crate::state::calendar::{CalendarState, DayCell};

#[component]
pub fn AvailabilityCalendar(
    #[prop(into)] availability: Signal<Availability>,
    today: Date,
    on_toggle: Callback<Date>,
) -> impl IntoView {
    let month = RwSignal::new(CalendarState::showing(today));

    let cells = move || {
        month
            .get()
            .cells()
            .into_iter()
            .map(|cell| match cell {
                DayCell::Blank => view! { <span class="calendar__blank"></span> }.into_any(),
                DayCell::Day(date) => {
                    let past = calendar::is_past(date, today);
                    view! {
                        <button
                            type="button"
                            class="calendar__day"
                            class:calendar__day--available=move || availability.with(|a| a.is_available(date))
                            class:calendar__day--disabled=past
                            disabled=past
                            on:click=move |_| on_toggle.run(date)
                        >
                            {date.day()}
                        </button>
                    }
                        .into_any()
                }
            })
            .collect_view()
    };

    let upcoming = move || {
        availability.with(|a| {
            a.days()
                .map(|date| view! { <li>{calendar::full_date(date)}</li> })
                .collect_view()
        })
    };

    view! {
        <section class="card availability">
            <h3 class="card__title">"Manage Availability"</h3>
            <p class="card__description">"Click a future date to mark yourself available or unavailable."</p>
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
            </div>
            <h4>"Available dates"</h4>
            <ul class="availability__list">{upcoming}</ul>
        </section>
    }
}

//! Chef dashboard: overview, booking requests, availability and profile.
//!
//! DESIGN
//! ======
//! `ChefDashboardState` is the session source of truth. The profile form is
//! mirrored into its own signal so typing in the form does not rebuild the
//! rest of the page; it is copied back into the state on save.

#[cfg(test)]
#[path = "chef_dashboard_test.rs"]
mod chef_dashboard_test;

use leptos::prelude::*;
use market::dashboard::{ChefStats, EarningsSummary};
use market::profile::ProfileEditor;
use market::{Chef, ChefBooking, StatusAction};
use time::Date;

use crate::components::availability_calendar::AvailabilityCalendar;
use crate::components::avatar::Avatar;
use crate::components::chef_booking_card::ChefBookingCard;
use crate::components::chef_profile_editor::ChefProfileEditor;
use crate::components::earnings_overview::EarningsOverview;
use crate::components::site_header::SiteHeader;
use crate::components::stat_card::StatCard;
use crate::state::chef_dashboard::{ChefDashboardState, ChefTab};
use crate::state::use_catalog;
use crate::util::{clock, format};

#[component]
pub fn ChefDashboardPage() -> impl IntoView {
    let catalog = use_catalog();
    let body = match ChefDashboardState::from_catalog(&catalog) {
        Ok(state) => view! { <ChefDashboardView state=RwSignal::new(state) earnings=catalog.earnings/> }.into_any(),
        Err(err) => view! {
            <div class="empty-state">
                <h3>"Dashboard unavailable"</h3>
                <p>{err.to_string()}</p>
            </div>
        }
            .into_any(),
    };

    view! {
        <SiteHeader/>
        <main class="dashboard">{body}</main>
    }
}

#[component]
fn ChefDashboardView(state: RwSignal<ChefDashboardState>, earnings: EarningsSummary) -> impl IntoView {
    let today = clock::today();
    let editor = RwSignal::new(None::<ProfileEditor>);
    let notice = RwSignal::new(None::<String>);

    let dashboard = Memo::new(move |_| state.with(ChefDashboardState::view));
    let tab = move || state.with(|s| s.tab);

    let on_action = Callback::new(move |(id, action): (String, StatusAction)| {
        match state.try_update(|s| s.act(&id, action)) {
            Some(Err(err)) => {
                leptos::logging::warn!("booking {id}: {err}");
                notice.set(Some(err.to_string()));
            }
            Some(Ok(None)) => {
                leptos::logging::warn!("booking {id} not found");
                notice.set(Some(format!("booking {id} not found")));
            }
            _ => notice.set(None),
        }
    });
    let on_toggle = Callback::new(move |date: Date| {
        state.update(|s| {
            s.toggle_day(date, today);
        });
    });
    let availability = Signal::derive(move || state.with(|s| s.availability.clone()));

    let on_edit = Callback::new(move |()| {
        state.update(ChefDashboardState::start_editing);
        editor.set(state.with_untracked(|s| s.editor.clone()));
    });
    let on_save = Callback::new(move |()| {
        let form = editor.get_untracked();
        state.update(|s| {
            s.editor = form;
            s.save_profile();
        });
        editor.set(None);
    });
    let on_cancel = Callback::new(move |()| {
        state.update(ChefDashboardState::cancel_editing);
        editor.set(None);
    });

    let stat = move |get: fn(&ChefStats) -> String| Signal::derive(move || dashboard.with(|d| get(&d.stats)));

    view! {
        <header class="dashboard__header">
            {move || {
                let chef = dashboard.with(|d| d.chef.clone());
                view! {
                    <Avatar name=chef.name.clone() src=chef.image.clone() large=true/>
                    <div>
                        <h1>{format!("Welcome back, {}!", chef.name)}</h1>
                        <p class="muted">{chef.specialty.clone()}</p>
                    </div>
                }
            }}
        </header>

        <div class="stat-grid">
            <StatCard label="Pending Requests" value=stat(|s| s.pending.to_string())/>
            <StatCard label="Confirmed" value=stat(|s| s.confirmed.to_string())/>
            <StatCard label="Total Earnings" value=stat(|s| format::money(s.earnings))/>
            <StatCard label="Average Rating" value=stat(|s| format!("{:.1}", s.average_rating))/>
        </div>

        {move || notice.get().map(|text| view! { <p class="notice notice--error">{text}</p> })}

        <nav class="tabs">
            {ChefTab::ALL
                .into_iter()
                .map(|t| {
                    view! {
                        <button
                            type="button"
                            class="tabs__tab"
                            class:tabs__tab--active=move || tab() == t
                            on:click=move |_| state.update(|s| s.tab = t)
                        >
                            {t.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>

        {move || match tab() {
            ChefTab::Overview => view! {
                <div class="dashboard__columns">
                    <BookingList
                        title="Recent Bookings"
                        empty="No bookings yet"
                        bookings=Signal::derive(move || dashboard.with(|d| d.recent.clone()))
                        on_action
                    />
                    <EarningsOverview earnings/>
                </div>
            }
                .into_any(),
            ChefTab::Bookings => view! {
                <BookingList
                    title="Pending Requests"
                    empty="No pending requests"
                    bookings=Signal::derive(move || dashboard.with(|d| d.pending.clone()))
                    on_action
                />
                <BookingList
                    title="Confirmed Bookings"
                    empty="No confirmed bookings"
                    bookings=Signal::derive(move || dashboard.with(|d| d.confirmed.clone()))
                    on_action
                />
                <BookingList
                    title="Recent Completed"
                    empty="No completed bookings"
                    bookings=Signal::derive(move || dashboard.with(|d| d.recent_completed().to_vec()))
                    on_action
                />
            }
                .into_any(),
            ChefTab::Availability => view! { <AvailabilityCalendar availability today on_toggle/> }.into_any(),
            ChefTab::Profile => view! {
                <Show
                    when=move || editor.with(Option::is_some)
                    fallback=move || {
                        let chef = dashboard.with(|d| d.chef.clone());
                        view! { <ProfileSummary chef on_edit/> }
                    }
                >
                    <ChefProfileEditor editor on_save on_cancel/>
                </Show>
            }
                .into_any(),
        }}
    }
}

#[component]
fn BookingList(
    title: &'static str,
    empty: &'static str,
    bookings: Signal<Vec<ChefBooking>>,
    on_action: Callback<(String, StatusAction)>,
) -> impl IntoView {
    view! {
        <section class="booking-group">
            <h3>{title}</h3>
            {move || {
                let list = bookings.get();
                if list.is_empty() {
                    view! { <p class="muted">{empty}</p> }.into_any()
                } else {
                    list.into_iter()
                        .map(|booking| view! { <ChefBookingCard booking on_action/> })
                        .collect_view()
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn ProfileSummary(chef: Chef, on_edit: Callback<()>) -> impl IntoView {
    view! {
        <section class="card">
            <div class="card__header">
                <h3 class="card__title">"Chef Profile"</h3>
                <button type="button" class="btn btn--outline" on:click=move |_| on_edit.run(())>
                    "Edit Profile"
                </button>
            </div>
            <dl class="profile-info">
                <div><dt>"Name"</dt><dd>{chef.name.clone()}</dd></div>
                <div><dt>"Specialty"</dt><dd>{chef.specialty.clone()}</dd></div>
                <div><dt>"Location"</dt><dd>{chef.location.clone()}</dd></div>
                <div><dt>"Hourly Rate"</dt><dd>{chef.rate_label()}</dd></div>
            </dl>
            <p class="profile-info__bio">{chef.bio.clone()}</p>
            <ul class="tags">
                {chef.cuisines.into_iter().map(|c| view! { <li class="tag">{c}</li> }).collect_view()}
            </ul>
        </section>
    }
}

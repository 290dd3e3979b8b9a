//! Customer dashboard: bookings grouped by status, favorites and profile.
//!
//! The account form is mirrored into its own signal while open, the same way
//! the chef dashboard handles its profile form.

use leptos::prelude::*;
use leptos_router::components::A;
use market::dashboard::{CustomerDashboard, CustomerStats};
use market::profile::CustomerProfileEditor;
use market::{CustomerBooking, User};

use crate::components::avatar::Avatar;
use crate::components::booking_card::BookingCard;
use crate::components::customer_profile_form::CustomerProfileForm;
use crate::components::favorite_chefs::FavoriteChefs;
use crate::components::site_header::SiteHeader;
use crate::components::stat_card::StatCard;
use crate::state::customer_dashboard::{CustomerDashboardState, CustomerTab};
use crate::state::use_catalog;
use crate::util::format;

#[component]
pub fn CustomerDashboardPage() -> impl IntoView {
    let catalog = use_catalog();
    let state = RwSignal::new(CustomerDashboardState::from_catalog(&catalog));
    let notice = RwSignal::new(None::<String>);

    let dashboard = Memo::new({
        let catalog = catalog.clone();
        move |_| state.with(|s| s.view(&catalog))
    });
    let tab = move || state.with(|s| s.tab);

    let on_cancel = Callback::new(move |id: String| {
        let result = state.try_update(|s| s.cancel(&id));
        match result {
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

    let editor = RwSignal::new(None::<CustomerProfileEditor>);
    let on_edit = Callback::new(move |()| {
        state.update(CustomerDashboardState::start_editing);
        editor.set(state.with_untracked(|s| s.editor.clone()));
    });
    let on_save = Callback::new(move |()| {
        let form = editor.get_untracked();
        let saved = state.try_update(|s| {
            s.editor = form;
            s.save_profile()
        });
        if saved == Some(true) {
            editor.set(None);
        }
    });
    let on_cancel_edit = Callback::new(move |()| {
        state.update(CustomerDashboardState::cancel_editing);
        editor.set(None);
    });

    let stat = move |get: fn(&CustomerStats) -> usize| {
        Signal::derive(move || dashboard.with(|d| get(&d.stats).to_string()))
    };

    view! {
        <SiteHeader/>
        <main class="dashboard">
            <header class="dashboard__header">
                {move || {
                    let customer = dashboard.with(|d| d.customer.clone());
                    view! {
                        <Avatar name=customer.name.clone() src=customer.avatar.clone() large=true/>
                        <div>
                            <h1>{move || dashboard.with(CustomerDashboard::greeting)}</h1>
                            <p class="muted">{format::member_since(customer.joined_date)}</p>
                        </div>
                    }
                }}
                <A href="/browse" attr:class="btn btn--primary">"Book a Chef"</A>
            </header>

            <div class="stat-grid">
                <StatCard label="Upcoming" value=stat(|s| s.upcoming)/>
                <StatCard label="Pending" value=stat(|s| s.pending)/>
                <StatCard label="Completed" value=stat(|s| s.completed)/>
                <StatCard label="Favorite Chefs" value=stat(|s| s.favorites)/>
            </div>

            {move || notice.get().map(|text| view! { <p class="notice notice--error">{text}</p> })}

            <nav class="tabs">
                {CustomerTab::ALL
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
                CustomerTab::Bookings => view! { <BookingsTab dashboard on_cancel/> }.into_any(),
                CustomerTab::Favorites => {
                    let chefs = dashboard.with(|d| d.favorites.clone());
                    view! { <FavoriteChefs chefs/> }.into_any()
                }
                CustomerTab::Profile => view! {
                    <Show
                        when=move || editor.with(Option::is_some)
                        fallback=move || {
                            let customer = dashboard.with(|d| d.customer.clone());
                            view! { <ProfileTab customer on_edit/> }
                        }
                    >
                        <CustomerProfileForm editor on_save on_cancel=on_cancel_edit/>
                    </Show>
                }
                    .into_any(),
            }}
        </main>
    }
}

#[component]
fn BookingsTab(dashboard: Memo<CustomerDashboard>, on_cancel: Callback<String>) -> impl IntoView {
    let group = move |title: &'static str, get: fn(&CustomerDashboard) -> Vec<CustomerBooking>| {
        move || {
            let bookings = dashboard.with(get);
            (!bookings.is_empty()).then(|| {
                view! {
                    <section class="booking-group">
                        <h3>{title}</h3>
                        {bookings
                            .into_iter()
                            .map(|booking| view! { <BookingCard booking on_cancel/> })
                            .collect_view()}
                    </section>
                }
            })
        }
    };

    view! {
        <Show
            when=move || dashboard.with(|d| d.has_bookings)
            fallback=|| {
                view! {
                    <div class="empty-state">
                        <h3>"No bookings yet"</h3>
                        <p>"Find a chef and book your first experience."</p>
                        <A href="/browse" attr:class="btn btn--primary">"Browse Chefs"</A>
                    </div>
                }
            }
        >
            {group("Upcoming", |d| d.upcoming.clone())}
            {group("Pending", |d| d.pending.clone())}
            {group("Past", |d| d.past.clone())}
        </Show>
    }
}

#[component]
fn ProfileTab(customer: User, on_edit: Callback<()>) -> impl IntoView {
    view! {
        <section class="card">
            <div class="card__header">
                <h3 class="card__title">"Profile Information"</h3>
                <button type="button" class="btn btn--outline" on:click=move |_| on_edit.run(())>
                    "Edit Profile"
                </button>
            </div>
            <dl class="profile-info">
                <div><dt>"Name"</dt><dd>{customer.name}</dd></div>
                <div><dt>"Email"</dt><dd>{customer.email}</dd></div>
                <div><dt>"Phone"</dt><dd>{customer.phone}</dd></div>
                <div><dt>"Location"</dt><dd>{customer.location}</dd></div>
                <div><dt>"Member Since"</dt><dd>{format::full_date(customer.joined_date)}</dd></div>
            </dl>
            {customer.bio.map(|bio| view! { <p class="profile-info__bio">{bio}</p> })}
        </section>
    }
}

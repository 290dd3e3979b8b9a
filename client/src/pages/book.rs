//! Booking wizard page.
//!
//! DESIGN
//! ======
//! The page holds one `BookingWizard` in a signal. Every form control writes
//! through `BookingWizard::update`, so edits are ignored once the booking is
//! confirmed, and the Back/Next buttons mirror `can_retreat`/`can_advance`.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use market::booking::BookingDraft;
use market::pricing;
use market::{BookingStage, BookingWizard, GuestCount, Quote, ServiceType, SessionHours, TimeSlot};
use time::Date;

use crate::components::booking_calendar::BookingCalendar;
use crate::components::booking_summary::BookingSummary;
use crate::components::progress_steps::ProgressSteps;
use crate::components::site_header::SiteHeader;
use crate::state::use_catalog;
use crate::util::{clock, format};

#[component]
pub fn BookingPage() -> impl IntoView {
    let catalog = use_catalog();
    let params = use_params_map();
    let chef_id = params.with_untracked(|p| p.get("chef_id")).unwrap_or_default();

    let body = match catalog.chef(&chef_id) {
        Ok(chef) => {
            let wizard = RwSignal::new(BookingWizard::new(chef.clone()));
            view! { <BookingFlow wizard/> }.into_any()
        }
        Err(err) => view! {
            <div class="empty-state">
                <h3>"Chef not found"</h3>
                <p>{err.to_string()}</p>
                <A href="/browse" attr:class="btn btn--primary">"Browse Chefs"</A>
            </div>
        }
            .into_any(),
    };

    view! {
        <SiteHeader/>
        <main class="booking">{body}</main>
    }
}

/// Write a draft edit through the wizard.
fn edit(wizard: RwSignal<BookingWizard>, change: impl FnOnce(&mut BookingDraft)) {
    wizard.update(|w| {
        w.update(change);
    });
}

/// Reactive read of one draft value.
fn draft_value<T: 'static>(
    wizard: RwSignal<BookingWizard>,
    get: fn(&BookingDraft) -> T,
) -> impl Fn() -> T + Copy + Send + Sync + 'static {
    move || wizard.with(|w| get(w.draft()))
}

#[component]
fn BookingFlow(wizard: RwSignal<BookingWizard>) -> impl IntoView {
    // Memo so the step form is rebuilt only when the stage changes.
    let stage = Memo::new(move |_| wizard.with(BookingWizard::stage));
    let chef_name = wizard.with_untracked(|w| w.chef().name.clone());

    let content = move || match stage.get() {
        BookingStage::Service => view! { <ServiceStep wizard/> }.into_any(),
        BookingStage::DateTime => view! { <DateTimeStep wizard/> }.into_any(),
        BookingStage::Details => view! { <DetailsStep wizard/> }.into_any(),
        BookingStage::Payment => view! { <PaymentStep wizard/> }.into_any(),
        BookingStage::Confirmation => view! { <ConfirmationStep wizard/> }.into_any(),
    };

    view! {
        <header class="booking__header">
            <h1>{format!("Book {chef_name}")}</h1>
            <ProgressSteps wizard/>
        </header>
        <div class="booking__layout">
            <section class="card booking__stage">
                <h2 class="card__title">{move || stage.get().title()}</h2>
                <p class="card__description">{move || stage.get().description()}</p>
                {content}
                <Show when=move || !stage.get().is_terminal()>
                    <div class="booking__nav">
                        <button
                            type="button"
                            class="btn btn--outline"
                            disabled=move || !wizard.with(BookingWizard::can_retreat)
                            on:click=move |_| {
                                wizard.update(|w| {
                                    w.retreat();
                                });
                            }
                        >
                            "Back"
                        </button>
                        <button
                            type="button"
                            class="btn btn--primary"
                            disabled=move || !wizard.with(BookingWizard::can_advance)
                            on:click=move |_| {
                                wizard.update(|w| {
                                    w.advance();
                                });
                            }
                        >
                            {move || wizard.with(BookingWizard::forward_label)}
                        </button>
                    </div>
                </Show>
            </section>
            <BookingSummary wizard/>
        </div>
    }
}

#[component]
fn ServiceStep(wizard: RwSignal<BookingWizard>) -> impl IntoView {
    let base_rate = wizard.with_untracked(|w| w.chef().hourly_rate);
    let selected = draft_value(wizard, |d| d.service_type);

    ServiceType::ALL
        .into_iter()
        .map(|service| {
            let price = pricing::effective_hourly_rate(base_rate, service)
                .map_or_else(|| "Custom Quote".to_owned(), |rate| format!("{}/hour", format::money(rate)));
            view! {
                <label class="option-card" class:option-card--selected=move || selected() == Some(service)>
                    <input
                        type="radio"
                        name="service-type"
                        value=service.as_str()
                        prop:checked=move || selected() == Some(service)
                        on:change=move |ev| {
                            let raw = event_target_value(&ev);
                            edit(wizard, |d| d.set_service_type_value(&raw));
                        }
                    />
                    <span class="option-card__title">{service.label()}</span>
                    <span class="option-card__description">{service.description()}</span>
                    <span class="option-card__price">{price}</span>
                </label>
            }
        })
        .collect_view()
}

#[component]
fn DateTimeStep(wizard: RwSignal<BookingWizard>) -> impl IntoView {
    let today = clock::today();
    let on_select = Callback::new(move |date: Date| {
        wizard.update(|w| {
            w.select_date(date, today);
        });
    });
    let selected_date = Signal::derive(draft_value(wizard, |d| d.date));
    let time_value = draft_value(wizard, |d| d.time.map(TimeSlot::as_value).unwrap_or_default());
    let hours_value = draft_value(wizard, |d| d.hours.get().to_string());
    let guests_value = draft_value(wizard, |d| d.guests.get().to_string());

    view! {
        <BookingCalendar selected=selected_date today on_select/>
        <div class="form-grid">
            <label class="field">
                "Start time"
                <select
                    prop:value=time_value
                    on:change=move |ev| {
                        let time = event_target_value(&ev).parse::<TimeSlot>().ok();
                        edit(wizard, |d| d.time = time);
                    }
                >
                    <option value="">"Select a time"</option>
                    {TimeSlot::all().map(|slot| view! { <option value=slot.as_value()>{slot.label()}</option> }).collect_view()}
                </select>
            </label>
            <label class="field">
                "Duration"
                <select
                    prop:value=hours_value
                    on:change=move |ev| {
                        if let Ok(hours) = event_target_value(&ev).parse::<SessionHours>() {
                            edit(wizard, |d| d.hours = hours);
                        }
                    }
                >
                    {SessionHours::all().map(|h| view! { <option value=h.get().to_string()>{h.label()}</option> }).collect_view()}
                </select>
            </label>
            <label class="field">
                "Guests"
                <select
                    prop:value=guests_value
                    on:change=move |ev| {
                        if let Ok(guests) = event_target_value(&ev).parse::<GuestCount>() {
                            edit(wizard, |d| d.guests = guests);
                        }
                    }
                >
                    {GuestCount::all().map(|g| view! { <option value=g.get().to_string()>{g.label()}</option> }).collect_view()}
                </select>
            </label>
        </div>
    }
}

/// Text input bound to one draft string field.
#[component]
fn DraftInput(
    wizard: RwSignal<BookingWizard>,
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] required: bool,
    get: fn(&BookingDraft) -> String,
    set: fn(&mut BookingDraft, String),
) -> impl IntoView {
    let value = draft_value(wizard, get);
    view! {
        <label class="field">
            {label}
            {required.then_some(" *")}
            <input
                type=kind
                required=required
                prop:value=value
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    edit(wizard, |d| set(d, text));
                }
            />
        </label>
    }
}

#[component]
fn DetailsStep(wizard: RwSignal<BookingWizard>) -> impl IntoView {
    let requests = draft_value(wizard, |d| d.special_requests.clone());
    let dietary = draft_value(wizard, |d| d.dietary_restrictions.clone());

    view! {
        <div class="form-grid">
            <DraftInput wizard label="Event location" required=true get=|d| d.location.clone() set=|d, v| d.location = v/>
            <DraftInput wizard label="Your name" required=true get=|d| d.contact_name.clone() set=|d, v| d.contact_name = v/>
            <DraftInput
                wizard
                label="Email"
                kind="email"
                required=true
                get=|d| d.contact_email.clone()
                set=|d, v| d.contact_email = v
            />
            <DraftInput wizard label="Phone" kind="tel" get=|d| d.contact_phone.clone() set=|d, v| d.contact_phone = v/>
        </div>
        <label class="field">
            "Special requests"
            <textarea
                rows="3"
                prop:value=requests
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    edit(wizard, |d| d.special_requests = text);
                }
            ></textarea>
        </label>
        <label class="field">
            "Dietary restrictions"
            <textarea
                rows="3"
                prop:value=dietary
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    edit(wizard, |d| d.dietary_restrictions = text);
                }
            ></textarea>
        </label>
    }
}

#[component]
fn PaymentStep(wizard: RwSignal<BookingWizard>) -> impl IntoView {
    let total = move || wizard.with(BookingWizard::live_quote).map(|quote| format::quote_total(&quote));
    view! {
        <div class="payment">
            <p>"Payments are processed securely when the chef confirms your booking. No card is charged today."</p>
            {move || total().map(|total| view! { <p class="payment__total">{format!("Amount due on confirmation: {total}")}</p> })}
        </div>
    }
}

#[component]
fn ConfirmationStep(wizard: RwSignal<BookingWizard>) -> impl IntoView {
    let (chef_name, draft, quote) =
        wizard.with_untracked(|w| (w.chef().name.clone(), w.draft().clone(), w.confirmed_quote().copied()));
    let when = match (draft.date, draft.time) {
        (Some(date), Some(time)) => format!("{} at {}", format::full_date(date), time.label()),
        _ => String::new(),
    };
    let service = draft.service_type.map(ServiceType::label).unwrap_or_default();
    let total = quote.as_ref().map(format::quote_total).unwrap_or_default();
    let custom = matches!(quote, Some(Quote::Custom));

    view! {
        <div class="confirmation">
            <h3>"Booking Request Sent!"</h3>
            <p>{format!("{chef_name} will review your request and confirm within 24 hours.")}</p>
            <dl class="confirmation__details">
                <div><dt>"Service"</dt><dd>{service}</dd></div>
                <div><dt>"When"</dt><dd>{when}</dd></div>
                <div><dt>"Duration"</dt><dd>{draft.hours.label()}</dd></div>
                <div><dt>"Guests"</dt><dd>{draft.guests.label()}</dd></div>
                <div><dt>"Location"</dt><dd>{draft.location.clone()}</dd></div>
                <div><dt>"Total"</dt><dd>{total}</dd></div>
            </dl>
            {custom.then(|| view! { <p>"The chef will send a custom quote for your event."</p> })}
            <div class="confirmation__actions">
                <A href="/dashboard" attr:class="btn btn--primary">"View My Bookings"</A>
                <A href="/browse" attr:class="btn btn--outline">"Browse More Chefs"</A>
            </div>
        </div>
    }
}

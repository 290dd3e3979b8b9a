//! Chef listing with filter sidebar and sort select.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use market::listing::{self, ALL_OPTION, CUISINE_OPTIONS, LOCATION_OPTIONS, PRICE_CEILING, PRICE_FLOOR, PRICE_STEP, SortKey};

use crate::components::chef_card::ChefCard;
use crate::components::site_header::SiteHeader;
use crate::state::browse::BrowseState;
use crate::state::use_catalog;
use crate::util::format;

/// `all` option followed by the fixed choices.
fn select_options(options: &'static [&'static str], all_label: &'static str) -> impl IntoView {
    std::iter::once(view! { <option value=ALL_OPTION>{all_label}</option> })
        .chain(options.iter().map(|option| view! { <option value=*option>{*option}</option> }))
        .collect_view()
}

#[component]
pub fn BrowsePage() -> impl IntoView {
    let catalog = use_catalog();
    let query = use_query_map();
    let state = RwSignal::new(BrowseState::with_query(query.with_untracked(|q| q.get("q"))));

    let chefs = catalog.chefs.clone();
    let results =
        Memo::new(move |_| state.with(|s| s.results(&chefs).iter().map(|chef| chef.id.clone()).collect::<Vec<_>>()));

    let grid = move || {
        let ids = results.get();
        if ids.is_empty() {
            return view! {
                <div class="empty-state">
                    <h3>"No chefs found"</h3>
                    <p>"Try adjusting your filters or search terms to find more chefs."</p>
                    <button type="button" class="btn btn--outline" on:click=move |_| state.update(BrowseState::clear_filters)>
                        "Clear Filters"
                    </button>
                </div>
            }
                .into_any();
        }
        ids.into_iter()
            .filter_map(|id| catalog.chef(&id).ok().cloned())
            .map(|chef| view! { <ChefCard chef/> })
            .collect_view()
            .into_any()
    };

    view! {
        <SiteHeader/>
        <main class="browse">
            <aside class="browse__filters" class:browse__filters--open=move || state.with(|s| s.filters_open)>
                <div class="browse__filters-header">
                    <h2>"Filters"</h2>
                    <button type="button" class="btn btn--ghost browse__filters-toggle" on:click=move |_| state.update(BrowseState::toggle_filters)>
                        {move || if state.with(|s| s.filters_open) { "Hide" } else { "Show" }}
                    </button>
                </div>
                <label class="field">
                    "Search"
                    <input
                        type="search"
                        placeholder="Chef name or specialty..."
                        prop:value=move || state.with(|s| s.filter.query.clone())
                        on:input=move |ev| state.update(|s| s.set_query(event_target_value(&ev)))
                    />
                </label>
                <label class="field">
                    "Cuisine Type"
                    <select
                        prop:value=move || state.with(|s| listing::choice_value(s.filter.cuisine.as_deref()).to_owned())
                        on:change=move |ev| state.update(|s| s.set_cuisine(&event_target_value(&ev)))
                    >
                        {select_options(&CUISINE_OPTIONS, "All Cuisines")}
                    </select>
                </label>
                <label class="field">
                    "Location"
                    <select
                        prop:value=move || state.with(|s| listing::choice_value(s.filter.location.as_deref()).to_owned())
                        on:change=move |ev| state.update(|s| s.set_location(&event_target_value(&ev)))
                    >
                        {select_options(&LOCATION_OPTIONS, "All Locations")}
                    </select>
                </label>
                <fieldset class="field price-range">
                    <legend>"Price Range (per hour)"</legend>
                    <input
                        type="range"
                        min=PRICE_FLOOR.to_string()
                        max=PRICE_CEILING.to_string()
                        step=PRICE_STEP.to_string()
                        prop:value=move || state.with(|s| s.price().min().to_string())
                        on:input=move |ev| state.update(|s| s.set_min_price(&event_target_value(&ev)))
                    />
                    <input
                        type="range"
                        min=PRICE_FLOOR.to_string()
                        max=PRICE_CEILING.to_string()
                        step=PRICE_STEP.to_string()
                        prop:value=move || state.with(|s| s.price().max().to_string())
                        on:input=move |ev| state.update(|s| s.set_max_price(&event_target_value(&ev)))
                    />
                    <div class="price-range__labels">
                        <span>{move || format::money(state.with(|s| s.price().min()))}</span>
                        <span>{move || format::money(state.with(|s| s.price().max()))}</span>
                    </div>
                </fieldset>
                <button
                    type="button"
                    class="btn btn--outline browse__clear"
                    disabled=move || !state.with(BrowseState::has_active_filters)
                    on:click=move |_| state.update(BrowseState::clear_filters)
                >
                    "Clear All Filters"
                </button>
            </aside>

            <section class="browse__results">
                <header class="browse__results-header">
                    <div>
                        <h1>"Find Your Perfect Chef"</h1>
                        <p>{move || listing::results_label(results.with(Vec::len))}</p>
                    </div>
                    <label class="field field--inline">
                        "Sort by:"
                        <select
                            prop:value=move || state.with(|s| s.sort.as_str().to_owned())
                            on:change=move |ev| state.update(|s| s.set_sort(&event_target_value(&ev)))
                        >
                            {SortKey::ALL
                                .iter()
                                .map(|key| view! { <option value=key.as_str()>{key.label()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                </header>
                <div class="chef-grid">{grid}</div>
            </section>
        </main>
    }
}

//! Listing card for one chef on the browse and home pages.

use leptos::prelude::*;
use leptos_router::components::A;
use market::Chef;

use crate::util::format;

/// Cuisine badges shown before the `+N more` overflow.
const CARD_CUISINES: usize = 3;

#[component]
pub fn ChefCard(chef: Chef) -> impl IntoView {
    let (shown, more) = chef.cuisine_preview(CARD_CUISINES);
    let badges = shown.iter().map(|cuisine| view! { <span class="badge badge--secondary">{cuisine.clone()}</span> }).collect_view();
    let profile_href = format!("/chef/{}", chef.id);
    let available = chef.is_available;

    view! {
        <article class="chef-card">
            <div class="chef-card__media">
                <img class="chef-card__image" src=chef.image.clone() alt=chef.name.clone()/>
                <Show when=move || available>
                    <span class="chef-card__available">"Available"</span>
                </Show>
            </div>
            <div class="chef-card__body">
                <header class="chef-card__header">
                    <div>
                        <h3 class="chef-card__name">{chef.name.clone()}</h3>
                        <p class="chef-card__location">{chef.location.clone()}</p>
                    </div>
                    <div class="chef-card__rating">
                        <span class="chef-card__stars">"★ " {format!("{:.1}", chef.rating)}</span>
                        <span class="chef-card__reviews">{format!("({} reviews)", chef.review_count)}</span>
                    </div>
                </header>
                <p class="chef-card__specialty">{chef.specialty.clone()}</p>
                <div class="chef-card__cuisines">
                    {badges}
                    {(more > 0).then(|| view! { <span class="badge badge--outline">{format!("+{more} more")}</span> })}
                </div>
                <footer class="chef-card__footer">
                    <span class="chef-card__experience">{format!("{}+ years", chef.experience)}</span>
                    <span class="chef-card__rate">{format::money(chef.hourly_rate)} <small>"/hour"</small></span>
                </footer>
                <A href=profile_href attr:class="btn btn--primary chef-card__cta">"View Profile"</A>
            </div>
        </article>
    }
}

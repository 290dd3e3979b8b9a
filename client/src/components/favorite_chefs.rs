//! Favourite chef tiles on the customer dashboard.

use leptos::prelude::*;
use leptos_router::components::A;
use market::Chef;

use crate::components::avatar::Avatar;
use crate::util::format;

/// Cuisine badges per favourite tile before the `+N` overflow.
const FAVORITE_CUISINES: usize = 2;

#[component]
pub fn FavoriteChefs(chefs: Vec<Chef>) -> impl IntoView {
    if chefs.is_empty() {
        return view! {
            <div class="empty-state">
                <h3>"No favorite chefs yet"</h3>
                <p>"Save chefs you love to find them quickly later."</p>
                <A href="/browse" attr:class="btn btn--primary">"Browse Chefs"</A>
            </div>
        }
            .into_any();
    }

    let tiles = chefs
        .into_iter()
        .map(|chef| {
            let (shown, more) = chef.cuisine_preview(FAVORITE_CUISINES);
            let badges = shown.iter().map(|c| view! { <span class="badge badge--secondary">{c.clone()}</span> }).collect_view();
            let overflow = (more > 0).then(|| view! { <span class="badge badge--outline">{format!("+{more}")}</span> });
            let book_href = format!("/book/{}", chef.id);
            let profile_href = format!("/chef/{}", chef.id);
            view! {
                <article class="favorite-chef">
                    <Avatar name=chef.name.clone() src=chef.image.clone() large=true/>
                    <h4>{chef.name.clone()}</h4>
                    <p class="favorite-chef__specialty">{chef.specialty.clone()}</p>
                    <p class="favorite-chef__rating">{format::rating_summary(chef.rating, chef.review_count)}</p>
                    <div class="favorite-chef__cuisines">{badges}{overflow}</div>
                    <p class="favorite-chef__rate">{chef.rate_label()}</p>
                    <div class="favorite-chef__actions">
                        <A href=profile_href attr:class="btn btn--outline">"View Profile"</A>
                        <A href=book_href attr:class="btn btn--primary">"Book Again"</A>
                    </div>
                </article>
            }
        })
        .collect_view();

    view! { <div class="favorite-chefs">{tiles}</div> }.into_any()
}

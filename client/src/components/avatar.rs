//! Round avatar with initials fallback.

use leptos::prelude::*;
use market::chef::initials;

#[component]
pub fn Avatar(name: String, #[prop(optional, into)] src: Option<String>, #[prop(optional)] large: bool) -> impl IntoView {
    let fallback = initials(&name);
    let image = src.filter(|src| !src.is_empty());
    view! {
        <span class="avatar" class:avatar--large=large>
            {match image {
                Some(src) => view! { <img class="avatar__image" src=src alt=name/> }.into_any(),
                None => view! { <span class="avatar__fallback">{fallback}</span> }.into_any(),
            }}
        </span>
    }
}

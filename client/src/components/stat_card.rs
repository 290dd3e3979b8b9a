use leptos::prelude::*;

/// Small figure tile on the dashboards.
#[component]
pub fn StatCard(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{move || value.get()}</span>
            {hint.map(|hint| view! { <span class="stat-card__hint">{hint}</span> })}
        </div>
    }
}

//! Portfolio image grid with a click-to-enlarge viewer.

use leptos::prelude::*;

#[component]
pub fn ChefGallery(images: Vec<String>, chef_name: String) -> impl IntoView {
    let open = RwSignal::new(None::<String>);

    let tiles = images
        .into_iter()
        .enumerate()
        .map(|(i, src)| {
            let alt = format!("{chef_name} dish {}", i + 1);
            let target = src.clone();
            view! {
                <button type="button" class="gallery__tile" on:click=move |_| open.set(Some(target.clone()))>
                    <img src=src alt=alt/>
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="gallery">{tiles}</div>
        {move || {
            open.get()
                .map(|src| {
                    view! {
                        <div class="dialog-backdrop" on:click=move |_| open.set(None)>
                            <img class="gallery__enlarged" src=src alt="Enlarged dish"/>
                        </div>
                    }
                })
        }}
    }
}

//! Profile form for the signed-in chef. Edits stay in the session.

use leptos::prelude::*;
use market::profile::ProfileEditor;

type EditorSignal = RwSignal<Option<ProfileEditor>>;

/// Apply `edit` to the open form, if any.
fn edit_open(editor: EditorSignal, edit: impl FnOnce(&mut ProfileEditor)) {
    editor.update(|open| {
        if let Some(form) = open.as_mut() {
            edit(form);
        }
    });
}

/// Reactive getter for one text field of the open form.
fn field(editor: EditorSignal, get: fn(&ProfileEditor) -> String) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    move || editor.with(|open| open.as_ref().map(get).unwrap_or_default())
}

/// Editable form bound to the dashboard's open editor.
///
/// `editor` is `None` while the form is closed; the parent owns opening,
/// saving and cancelling.
#[component]
pub fn ChefProfileEditor(editor: EditorSignal, on_save: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let new_cuisine = RwSignal::new(String::new());
    let cuisine_error = RwSignal::new(None::<String>);

    let add_cuisine = move || {
        let raw = new_cuisine.get_untracked();
        let result = editor.try_update(|open| open.as_mut().map(|form| form.add_cuisine(&raw))).flatten();
        match result {
            Some(Ok(())) => {
                new_cuisine.set(String::new());
                cuisine_error.set(None);
            }
            Some(Err(err)) => cuisine_error.set(Some(err.to_string())),
            None => {}
        }
    };

    let cuisines = move || {
        editor
            .with(|open| open.as_ref().map(|form| form.cuisines().to_vec()).unwrap_or_default())
            .into_iter()
            .map(|cuisine| {
                let target = cuisine.clone();
                view! {
                    <span class="badge badge--secondary">
                        {cuisine}
                        <button
                            type="button"
                            class="badge__remove"
                            aria-label="Remove cuisine"
                            on:click=move |_| {
                                let target = target.clone();
                                edit_open(editor, move |form| {
                                    form.remove_cuisine(&target);
                                });
                            }
                        >
                            "×"
                        </button>
                    </span>
                }
            })
            .collect_view()
    };

    view! {
        <form
            class="card profile-editor"
            on:submit=move |ev| {
                ev.prevent_default();
                on_save.run(());
            }
        >
            <h3 class="card__title">"Edit Profile"</h3>
            <label class="field">
                "Name"
                <input
                    type="text"
                    prop:value=field(editor, |form| form.name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        edit_open(editor, |form| form.name = value);
                    }
                />
            </label>
            <label class="field">
                "Specialty"
                <input
                    type="text"
                    prop:value=field(editor, |form| form.specialty.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        edit_open(editor, |form| form.specialty = value);
                    }
                />
            </label>
            <label class="field">
                "Location"
                <input
                    type="text"
                    prop:value=field(editor, |form| form.location.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        edit_open(editor, |form| form.location = value);
                    }
                />
            </label>
            <label class="field">
                "Hourly rate ($)"
                <input
                    type="number"
                    min="0"
                    prop:value=field(editor, |form| form.hourly_rate.to_string())
                    on:input=move |ev| {
                        if let Ok(rate) = event_target_value(&ev).parse::<u32>() {
                            edit_open(editor, |form| form.hourly_rate = rate);
                        }
                    }
                />
            </label>
            <label class="field">
                "Bio"
                <textarea
                    rows="5"
                    prop:value=field(editor, |form| form.bio.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        edit_open(editor, |form| form.bio = value);
                    }
                ></textarea>
            </label>
            <div class="field">
                <span>"Cuisines"</span>
                <div class="profile-editor__cuisines">{cuisines}</div>
                <div class="profile-editor__add">
                    <input
                        type="text"
                        placeholder="Add a cuisine"
                        prop:value=move || new_cuisine.get()
                        on:input=move |ev| new_cuisine.set(event_target_value(&ev))
                    />
                    <button type="button" class="btn btn--outline" on:click=move |_| add_cuisine()>
                        "Add"
                    </button>
                </div>
                {move || cuisine_error.get().map(|msg| view! { <p class="field__error">{msg}</p> })}
            </div>
            <div class="profile-editor__actions">
                <button type="button" class="btn btn--outline" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button type="submit" class="btn btn--primary">
                    "Save Changes"
                </button>
            </div>
        </form>
    }
}

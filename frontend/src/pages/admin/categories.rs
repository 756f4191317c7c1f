use leptos::*;

use super::products::editable_categories;
use super::use_admin;
use crate::services::api;

#[component]
pub fn CategoriesTab() -> impl IntoView {
    let ctx = use_admin();
    let name = create_rw_signal(String::new());

    let categories = create_resource(
        move || ctx.revision(),
        move |_| async move { api::fetch_categories().await.map(editable_categories) },
    );

    let add = create_action(move |name: &String| {
        let name = name.clone();
        async move {
            match api::add_category(&ctx.token(), &name).await {
                Ok(_) => ctx.saved(format!("Added {}", name)),
                Err(e) => ctx.failed(e),
            }
        }
    });

    let remove = create_action(move |name: &String| {
        let name = name.clone();
        async move {
            match api::remove_category(&ctx.token(), &name).await {
                Ok(_) => ctx.saved(format!("Removed {}", name)),
                Err(e) => ctx.failed(e),
            }
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let value = name.get_untracked().trim().to_string();
        if value.is_empty() {
            return;
        }
        add.dispatch(value);
        name.set(String::new());
    };

    view! {
        <div class="tab-header">
            <h2>"Categories"</h2>
        </div>
        <form class="inline-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="New category name"
                prop:value=name
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <button type="submit" class="btn btn-primary" disabled=move || add.pending().get()>"Add"</button>
        </form>
        <Transition fallback=|| view! { <p class="loading">"Loading categories..."</p> }>
            {move || categories.get().map(|result| match result {
                Ok(list) => view! {
                    <ul class="chip-list">
                        {list.into_iter().map(|category| {
                            let target = category.clone();
                            view! {
                                <li class="chip">
                                    {category}
                                    <button class="chip-remove" title="Remove" on:click=move |_| remove.dispatch(target.clone())>"✕"</button>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                }
                .into_view(),
                Err(e) => {
                    ctx.failed(e);
                    ().into_view()
                }
            })}
        </Transition>
    }
}

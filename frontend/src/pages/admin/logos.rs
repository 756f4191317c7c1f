//! Partner logos shown in the home page marquee.

use leptos::*;

use super::use_admin;
use crate::components::ImageInput;
use crate::services::api;
use crate::types::{LogoDraft, VendorLogo};

#[component]
pub fn LogosTab() -> impl IntoView {
    let ctx = use_admin();
    let name = create_rw_signal(String::new());
    let image = create_rw_signal(String::new());

    let logos = create_resource(move || ctx.revision(), |_| api::fetch_logos());

    let save = create_action(move |draft: &LogoDraft| {
        let draft = draft.clone();
        async move {
            match api::save_logo(&ctx.token(), &draft).await {
                Ok(logo) => {
                    name.set(String::new());
                    image.set(String::new());
                    ctx.saved(format!("Added {}", logo.name));
                }
                Err(e) => ctx.failed(e),
            }
        }
    });

    let remove = create_action(move |logo: &VendorLogo| {
        let logo = logo.clone();
        async move {
            match api::delete_logo(&ctx.token(), &logo.id).await {
                Ok(_) => ctx.saved(format!("Removed {}", logo.name)),
                Err(e) => ctx.failed(e),
            }
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        save.dispatch(LogoDraft {
            id: None,
            name: name.get_untracked(),
            image: image.get_untracked(),
        });
    };

    view! {
        <div class="tab-header">
            <h2>"Vendor Logos"</h2>
        </div>
        <form class="editor" on:submit=on_submit>
            <div class="field">
                <label>"Brand Name"</label>
                <input type="text" required prop:value=name on:input=move |ev| name.set(event_target_value(&ev))/>
            </div>
            <ImageInput label="Logo" value=image/>
            <button type="submit" class="btn btn-primary" disabled=move || save.pending().get()>"Add Logo"</button>
        </form>
        <Transition fallback=|| view! { <p class="loading">"Loading logos..."</p> }>
            {move || logos.get().map(|result| match result {
                Ok(list) => view! {
                    <div class="logo-grid">
                        {list.into_iter().map(|logo| {
                            let target = logo.clone();
                            view! {
                                <div class="logo-tile">
                                    <img src=logo.image.clone() alt=logo.name.clone()/>
                                    <span>{logo.name.clone()}</span>
                                    <button class="btn btn-small btn-danger" on:click=move |_| remove.dispatch(target.clone())>"Delete"</button>
                                </div>
                            }
                        }).collect_view()}
                    </div>
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

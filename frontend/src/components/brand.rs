//! Site logo: uploaded image, or the two-tone brand text

use leptos::*;

use crate::state::use_app_state;

#[component]
pub fn Brand() -> impl IntoView {
    let settings = use_app_state().settings;

    move || {
        let current = settings.get();
        if current.logo_image.is_empty() {
            let (head, tail) = current.logo_parts();
            view! {
                <span class="brand-text">
                    <span class="brand-head" style=format!("color: {}", current.logo_color)>{head}</span>
                    <span class="brand-tail">{tail}</span>
                </span>
            }
            .into_view()
        } else {
            view! { <img class="brand-image" src=current.logo_image alt=current.logo_text/> }.into_view()
        }
    }
}

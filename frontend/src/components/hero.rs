//! Page heading with eyebrow tag, title and subtitle

use leptos::*;

#[component]
pub fn PageHeading(
    /// Small label above the title
    #[prop(into)]
    tag: String,
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <div class="page-heading">
            <span class="eyebrow">{tag}</span>
            <h1>{title}</h1>
            {subtitle.map(|s| view! { <p class="subtitle">{s}</p> })}
        </div>
    }
}

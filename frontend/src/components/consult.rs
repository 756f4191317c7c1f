//! Free-form question box answered by the AI business consultant.

use leptos::*;

use crate::services::api;

#[component]
pub fn ConsultBox() -> impl IntoView {
    let (query, set_query) = create_signal(String::new());

    let ask = create_action(|query: &String| {
        let query = query.clone();
        async move { api::consult(&query).await }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let q = query.get_untracked();
        if !q.trim().is_empty() {
            ask.dispatch(q);
        }
    };

    view! {
        <div class="consult-box">
            <h3>"Ask our AI procurement consultant"</h3>
            <form on:submit=on_submit>
                <input
                    type="text"
                    placeholder="e.g. Which CRM suits a 20-person sales team?"
                    prop:value=query
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-primary" disabled=move || ask.pending().get()>
                    {move || if ask.pending().get() { "Thinking..." } else { "Ask" }}
                </button>
            </form>
            {move || ask.value().get().map(|result| match result {
                Ok(answer) => view! { <p class="consult-answer">{answer}</p> }.into_view(),
                Err(e) => view! { <div class="error-message">{e.to_string()}</div> }.into_view(),
            })}
        </div>
    }
}

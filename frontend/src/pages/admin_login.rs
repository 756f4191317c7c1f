//! Admin portal login with the optional demo bypass.

use leptos::*;
use leptos_meta::Title;
use leptos_router::*;

use crate::services::{api, session};
use crate::state::use_app_state;
use crate::types::{AppResult, Credentials, Session};

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let state = use_app_state();
    let navigate = use_navigate();
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let finish = move |result: AppResult<Session>| match result {
        Ok(session_data) => {
            session::remember(&session_data);
            state.refresh_session();
            navigate("/admin", Default::default());
        }
        Err(e) => set_error.set(Some(e.to_string())),
    };

    let login = create_action({
        let finish = finish.clone();
        move |credentials: &Credentials| {
            let credentials = credentials.clone();
            let finish = finish.clone();
            async move { finish(api::admin_login(&credentials).await) }
        }
    });
    let demo = create_action(move |_: &()| {
        let finish = finish.clone();
        async move { finish(api::demo_admin().await) }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        login.dispatch(Credentials {
            email: email.get_untracked(),
            password: password.get_untracked(),
        });
    };

    let busy = move || login.pending().get() || demo.pending().get();

    view! {
        <Title text="Admin Portal | BantConfirm"/>
        <div class="page auth-page">
            <form class="auth-card dark" on:submit=on_submit>
                <span class="eyebrow">"Restricted Access"</span>
                <h1>"Admin Portal"</h1>
                {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}
                <div class="field">
                    <label>"Admin Email"</label>
                    <input type="email" required prop:value=email on:input=move |ev| email.set(event_target_value(&ev))/>
                </div>
                <div class="field">
                    <label>"Password"</label>
                    <input type="password" required prop:value=password on:input=move |ev| password.set(event_target_value(&ev))/>
                </div>
                <button type="submit" class="btn btn-primary wide" disabled=busy>"Enter Console"</button>
                <button
                    type="button"
                    class="btn btn-secondary wide"
                    disabled=busy
                    on:click=move |_| {
                        set_error.set(None);
                        demo.dispatch(());
                    }
                >
                    "Demo Access"
                </button>
            </form>
        </div>
    }
}

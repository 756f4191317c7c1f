use leptos::*;
use leptos_meta::Title;
use leptos_router::*;

use crate::services::{api, session};
use crate::state::use_app_state;
use crate::types::{Credentials, Role};

#[component]
pub fn UserLoginPage() -> impl IntoView {
    let state = use_app_state();
    let navigate = use_navigate();
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let login = create_action(move |credentials: &Credentials| {
        let credentials = credentials.clone();
        let navigate = navigate.clone();
        async move {
            match api::login(&credentials).await {
                Ok(session_data) => {
                    session::remember(&session_data);
                    state.refresh_session();
                    let target = if session_data.role == Role::Admin { "/admin" } else { "/" };
                    navigate(target, Default::default());
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        login.dispatch(Credentials {
            email: email.get_untracked(),
            password: password.get_untracked(),
        });
    };

    view! {
        <Title text="Login | BantConfirm"/>
        <div class="page auth-page">
            <button class="link-button back" on:click=move |_| {
                if let Ok(history) = gloo_utils::window().history() {
                    let _ = history.back();
                }
            }>"← Back"</button>
            <form class="auth-card" on:submit=on_submit>
                <h1>"Welcome Back"</h1>
                <p class="subtitle">"Sign in to track and post verified requirements."</p>
                {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}
                <div class="field">
                    <label>"Business Email"</label>
                    <input type="email" required prop:value=email on:input=move |ev| email.set(event_target_value(&ev))/>
                </div>
                <div class="field">
                    <label>"Password"</label>
                    <input type="password" required prop:value=password on:input=move |ev| password.set(event_target_value(&ev))/>
                </div>
                <button type="submit" class="btn btn-primary wide" disabled=move || login.pending().get()>
                    {move || if login.pending().get() { "Signing in..." } else { "Login" }}
                </button>
                <p class="auth-switch">"New to BantConfirm? " <A href="/user-signup">"Create an account"</A></p>
            </form>
        </div>
    }
}

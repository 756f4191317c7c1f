use leptos::*;
use leptos_meta::Title;
use leptos_router::*;

use crate::services::{api, session};
use crate::state::use_app_state;
use crate::types::SignupForm;

#[component]
pub fn UserSignupPage() -> impl IntoView {
    let state = use_app_state();
    let navigate = use_navigate();
    let form = create_rw_signal(SignupForm::default());
    let (error, set_error) = create_signal(None::<String>);

    let signup = create_action(move |form: &SignupForm| {
        let form = form.clone();
        let navigate = navigate.clone();
        async move {
            match api::signup(&form).await {
                Ok(session_data) => {
                    session::remember(&session_data);
                    state.refresh_session();
                    navigate("/", Default::default());
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        signup.dispatch(form.get_untracked());
    };

    let input = move |label: &'static str,
                      kind: &'static str,
                      required: bool,
                      get: fn(&SignupForm) -> String,
                      set: fn(&mut SignupForm, String)| {
        view! {
            <div class="field">
                <label>{label}</label>
                <input
                    type=kind
                    required=required
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </div>
        }
    };

    view! {
        <Title text="Sign Up | BantConfirm"/>
        <div class="page auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Create Your Account"</h1>
                <p class="subtitle">"Post requirements faster with your details saved."</p>
                {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}
                {input("Full Name", "text", true, |f| f.name.clone(), |f, v| f.name = v)}
                {input("Company Name", "text", false, |f| f.company_name.clone(), |f, v| f.company_name = v)}
                {input("Mobile", "tel", true, |f| f.mobile.clone(), |f, v| f.mobile = v)}
                {input("Business Email", "email", true, |f| f.email.clone(), |f, v| f.email = v)}
                {input("Location", "text", true, |f| f.location.clone(), |f, v| f.location = v)}
                {input("Password", "password", true, |f| f.password.clone(), |f, v| f.password = v)}
                <button type="submit" class="btn btn-primary wide" disabled=move || signup.pending().get()>
                    {move || if signup.pending().get() { "Creating account..." } else { "Sign Up" }}
                </button>
                <p class="auth-switch">"Already registered? " <A href="/user-login">"Login"</A></p>
            </form>
        </div>
    }
}

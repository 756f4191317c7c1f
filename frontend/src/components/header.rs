use leptos::*;
use leptos_router::*;

use crate::components::Brand;
use crate::services::{api, session};
use crate::state::use_app_state;

#[component]
pub fn Header() -> impl IntoView {
    let state = use_app_state();
    let location = use_location();
    let (menu_open, set_menu_open) = create_signal(false);

    // Pick up logins from this tab on navigation, and from other tabs via `storage`
    create_effect(move |_| {
        location.pathname.track();
        state.refresh_session();
        set_menu_open.set(false);
    });
    let storage_listener = window_event_listener(ev::storage, move |_| {
        log::debug!("storage changed in another tab");
        state.refresh_session();
    });
    on_cleanup(move || storage_listener.remove());

    let navigate = use_navigate();
    let on_logout = move |_: ev::MouseEvent| {
        let user_token = session::user_token();
        let admin_token = session::admin_token();
        session::forget_user();
        session::forget_admin();
        state.refresh_session();

        spawn_local(async move {
            for token in user_token.into_iter().chain(admin_token) {
                if let Err(e) = api::logout(&token).await {
                    log::warn!("Logout request failed: {}", e);
                }
            }
        });
        navigate("/user-login", Default::default());
    };

    let signed_in = move || state.user.get().is_some() || state.is_admin.get();

    view! {
        <header class="site-header">
            <nav class="nav-bar">
                <A href="/" class="logo">
                    <Brand/>
                </A>
                <div class="nav-links" class:open=move || menu_open.get()>
                    <A href="/products" class="nav-link" active_class="active">"Solutions"</A>
                    <A href="/blog" class="nav-link" active_class="active">"Insights"</A>
                    <Show when=move || state.is_admin.get() fallback=|| ()>
                        <A href="/admin" class="nav-link" active_class="active">"Admin Dashboard"</A>
                    </Show>
                </div>
                <div class="nav-actions">
                    <Show
                        when=signed_in
                        fallback=|| view! {
                            <A href="/user-login" class="nav-link">"Login"</A>
                            <A href="/user-signup" class="btn btn-dark btn-small">"Sign Up"</A>
                        }
                    >
                        {move || state.user.get().filter(|_| !state.is_admin.get()).map(|user| view! {
                            <span class="greeting">"Hi, " {user.first_name().to_string()}</span>
                        })}
                        <button class="nav-link link-button" on:click=on_logout.clone()>"Logout"</button>
                    </Show>
                    <A href="/lead-wizard" class="btn btn-accent">"Post Requirement"</A>
                    <button
                        class="menu-toggle"
                        aria-label="Menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        "☰"
                    </button>
                </div>
            </nav>
        </header>
    }
}

//! Admin console: tabbed back-office over the marketplace records.
//!
//! Every tab receives the admin token through [`AdminContext`]. A rejected
//! token clears the session and sends the browser back to `/login`.

mod blogs;
mod categories;
mod leads;
mod logos;
mod overview;
mod products;
mod settings;
mod vendors;

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use leptos_meta::Title;
use leptos_router::*;

use crate::services::{api, session, use_store_revision, StoreRevision};
use crate::state::use_app_state;
use crate::types::AppError;
use crate::NOTICE_MILLIS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminTab {
    Overview,
    Leads,
    Products,
    Categories,
    Logos,
    Vendors,
    Blogs,
    Settings,
}

impl AdminTab {
    pub const ALL: [AdminTab; 8] = [
        Self::Overview,
        Self::Leads,
        Self::Products,
        Self::Categories,
        Self::Logos,
        Self::Vendors,
        Self::Blogs,
        Self::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Overview => "OVERVIEW",
            Self::Leads => "LEADS",
            Self::Products => "PRODUCTS",
            Self::Categories => "CATEGORIES",
            Self::Logos => "LOGOS",
            Self::Vendors => "VENDORS",
            Self::Blogs => "BLOGS",
            Self::Settings => "SETTINGS",
        }
    }
}

/// Flash message shown above the active tab.
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn css_class(&self) -> &'static str {
        match self {
            Notice::Success(_) => "notice notice-success",
            Notice::Error(_) => "notice notice-error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Notice::Success(m) | Notice::Error(m) => m,
        }
    }
}

/// Shared by every tab.
#[derive(Clone, Copy)]
pub struct AdminContext {
    token: StoredValue<String>,
    notice: RwSignal<Option<Notice>>,
    revision: StoreRevision,
    expired: RwSignal<bool>,
}

impl AdminContext {
    pub fn token(&self) -> String {
        self.token.get_value()
    }

    pub fn revision(&self) -> u64 {
        self.revision.get()
    }

    /// Record a successful write: refetch lists and flash `message`.
    pub fn saved(&self, message: impl Into<String>) {
        self.revision.bump();
        self.flash(Notice::Success(message.into()));
    }

    /// Show an error, or end the session when the token was rejected.
    pub fn failed(&self, err: AppError) {
        if err.is_auth() {
            self.expired.set(true);
            return;
        }
        log::error!("❌ Admin action failed: {}", err);
        self.flash(Notice::Error(err.to_string()));
    }

    fn flash(&self, notice: Notice) {
        let slot = self.notice;
        slot.set(Some(notice.clone()));
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_MILLIS).await;
            // Only clear if no newer notice replaced it
            if slot.get_untracked().as_ref() == Some(&notice) {
                slot.set(None);
            }
        });
    }
}

pub fn use_admin() -> AdminContext {
    expect_context::<AdminContext>()
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let Some(token) = session::admin_token() else {
        return view! { <Redirect path="/login"/> }.into_view();
    };

    let state = use_app_state();
    let ctx = AdminContext {
        token: store_value(token.clone()),
        notice: create_rw_signal(None),
        revision: use_store_revision(),
        expired: create_rw_signal(false),
    };
    provide_context(ctx);

    // Stale tokens from a restarted backend are rejected here
    spawn_local(async move {
        if let Err(e) = api::fetch_session(&token).await {
            ctx.failed(e);
        }
    });

    let navigate = use_navigate();
    create_effect(move |_| {
        if ctx.expired.get() {
            session::forget_admin();
            state.refresh_session();
            navigate("/login", Default::default());
        }
    });

    let active = create_rw_signal(AdminTab::Overview);

    view! {
        <Title text=move || format!("{} | Admin Console", active.get().label())/>
        <div class="page admin">
            <aside class="admin-tabs">
                {AdminTab::ALL.iter().map(|tab| {
                    let tab = *tab;
                    view! {
                        <button
                            class="admin-tab"
                            class:active=move || active.get() == tab
                            on:click=move |_| active.set(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                }).collect_view()}
            </aside>
            <main class="admin-content">
                {move || ctx.notice.get().map(|n| view! { <div class=n.css_class()>{n.message().to_string()}</div> })}
                {move || match active.get() {
                    AdminTab::Overview => view! { <overview::OverviewTab/> }.into_view(),
                    AdminTab::Leads => view! { <leads::LeadsTab/> }.into_view(),
                    AdminTab::Products => view! { <products::ProductsTab/> }.into_view(),
                    AdminTab::Categories => view! { <categories::CategoriesTab/> }.into_view(),
                    AdminTab::Logos => view! { <logos::LogosTab/> }.into_view(),
                    AdminTab::Vendors => view! { <vendors::VendorsTab/> }.into_view(),
                    AdminTab::Blogs => view! { <blogs::BlogsTab/> }.into_view(),
                    AdminTab::Settings => view! { <settings::SettingsTab/> }.into_view(),
                }}
            </main>
        </div>
    }
    .into_view()
}

/// Text input bound to a field of an editor signal.
pub(crate) fn text_field<T: 'static>(
    form: RwSignal<T>,
    label: &'static str,
    get: fn(&T) -> String,
    set: fn(&mut T, String),
) -> impl IntoView {
    view! {
        <div class="field">
            <label>{label}</label>
            <input
                type="text"
                prop:value=move || form.with(get)
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            />
        </div>
    }
}

/// Multi-line input bound to a field of an editor signal.
pub(crate) fn text_area<T: 'static>(
    form: RwSignal<T>,
    label: &'static str,
    get: fn(&T) -> String,
    set: fn(&mut T, String),
) -> impl IntoView {
    view! {
        <div class="field">
            <label>{label}</label>
            <textarea
                rows="4"
                prop:value=move || form.with(get)
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            ></textarea>
        </div>
    }
}

/// Checkbox bound to a flag of an editor signal.
pub(crate) fn check_field<T: 'static>(
    form: RwSignal<T>,
    label: &'static str,
    get: fn(&T) -> bool,
    set: fn(&mut T, bool),
) -> impl IntoView {
    view! {
        <label class="check-field">
            <input
                type="checkbox"
                prop:checked=move || form.with(get)
                on:change=move |ev| form.update(|f| set(f, event_target_checked(&ev)))
            />
            {label}
        </label>
    }
}

/// One entry per non-blank line.
pub(crate) fn lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_labels_in_console_order() {
        let labels: Vec<_> = AdminTab::ALL.iter().map(AdminTab::label).collect();
        assert_eq!(
            labels,
            ["OVERVIEW", "LEADS", "PRODUCTS", "CATEGORIES", "LOGOS", "VENDORS", "BLOGS", "SETTINGS"]
        );
    }

    #[test]
    fn test_lines_drop_blanks() {
        assert_eq!(
            lines("24/7 support\n\n  GST invoicing \n"),
            vec!["24/7 support".to_string(), "GST invoicing".to_string()]
        );
    }

    #[test]
    fn test_notice_message() {
        let notice = Notice::Error("No leads to download".into());
        assert_eq!(notice.message(), "No leads to download");
        assert_eq!(notice.css_class(), "notice notice-error");
    }
}

//! Branding, notification and SEO settings.

use leptos::*;

use super::{check_field, text_area, text_field, use_admin};
use crate::components::ImageInput;
use crate::services::api;
use crate::state::use_app_state;
use crate::types::SiteSettings;

#[component]
pub fn SettingsTab() -> impl IntoView {
    let ctx = use_admin();
    let state = use_app_state();

    let current = state.settings.get_untracked();
    let logo_image = create_rw_signal(current.logo_image.clone());
    let favicon = create_rw_signal(current.favicon.clone());
    let form = create_rw_signal(current);

    // Settings may still be loading when the tab opens
    create_effect(move |_| {
        let latest = state.settings.get();
        logo_image.set(latest.logo_image.clone());
        favicon.set(latest.favicon.clone());
        form.set(latest);
    });

    let save = create_action(move |_: &()| {
        let mut payload: SiteSettings = form.get_untracked();
        payload.logo_image = logo_image.get_untracked();
        payload.favicon = favicon.get_untracked();
        async move {
            match api::update_settings(&ctx.token(), &payload).await {
                Ok(saved) => {
                    state.settings.set(saved);
                    ctx.saved("Settings saved");
                }
                Err(e) => ctx.failed(e),
            }
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        save.dispatch(());
    };

    view! {
        <form class="editor settings" on:submit=on_submit>
            <h2>"Site Settings"</h2>

            <h3>"Branding"</h3>
            <div class="form-grid">
                {text_field(form, "Logo Text", |f| f.logo_text.clone(), |f, v| f.logo_text = v)}
                <div class="field">
                    <label>"Logo Accent Color"</label>
                    <input
                        type="color"
                        prop:value=move || form.with(|f| f.logo_color.clone())
                        on:input=move |ev| form.update(|f| f.logo_color = event_target_value(&ev))
                    />
                </div>
            </div>
            <ImageInput label="Logo Image" value=logo_image/>
            <ImageInput label="Favicon" value=favicon/>

            <h3>"WhatsApp Gateway"</h3>
            <div class="form-grid">
                {text_field(form, "API Key", |f| f.whatsapp_api_key.clone(), |f, v| f.whatsapp_api_key = v)}
                {text_field(form, "Instance ID", |f| f.whatsapp_instance_id.clone(), |f, v| f.whatsapp_instance_id = v)}
            </div>

            <h3>"Notifications"</h3>
            <div class="check-grid">
                {check_field(form, "Email admin on new leads", |f| f.notify_admin_email, |f, v| f.notify_admin_email = v)}
                {check_field(form, "WhatsApp admin on new leads", |f| f.notify_admin_whatsapp, |f, v| f.notify_admin_whatsapp = v)}
                {check_field(form, "Confirm to user after posting", |f| f.notify_user_post, |f, v| f.notify_user_post = v)}
                {check_field(form, "Notify vendor on assignment", |f| f.notify_vendor_lead, |f, v| f.notify_vendor_lead = v)}
                {check_field(form, "Alert on user login", |f| f.notify_user_login, |f, v| f.notify_user_login = v)}
            </div>

            <h3>"SEO"</h3>
            {text_area(form, "Meta Description", |f| f.meta_description.clone(), |f, v| f.meta_description = v)}
            {text_field(form, "Meta Keywords", |f| f.meta_keywords.clone(), |f, v| f.meta_keywords = v)}

            <h3>"Social Links"</h3>
            <div class="form-grid">
                {text_field(form, "LinkedIn", |f| f.social_links.linkedin.clone(), |f, v| f.social_links.linkedin = v)}
                {text_field(form, "Facebook", |f| f.social_links.facebook.clone(), |f, v| f.social_links.facebook = v)}
                {text_field(form, "Twitter", |f| f.social_links.twitter.clone(), |f, v| f.social_links.twitter = v)}
                {text_field(form, "Instagram", |f| f.social_links.instagram.clone(), |f, v| f.social_links.instagram = v)}
            </div>

            <div class="editor-actions">
                <button type="submit" class="btn btn-primary" disabled=move || save.pending().get()>"Save Settings"</button>
            </div>
        </form>
    }
}

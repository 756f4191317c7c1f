use leptos::*;
use leptos_meta::Title;
use leptos_router::*;

use crate::components::PageHeading;
use crate::services::api;
use crate::types::VendorRegistration;

pub(crate) const VENDOR_CATEGORIES: [&str; 4] = ["SOFTWARE", "TELECOM", "MARKETING", "IT HARDWARE"];

#[component]
pub fn VendorRegistrationPage() -> impl IntoView {
    let form = create_rw_signal(VendorRegistration {
        category: VENDOR_CATEGORIES[0].to_string(),
        ..Default::default()
    });
    let (error, set_error) = create_signal(None::<String>);
    let (submitted, set_submitted) = create_signal(false);

    let register = create_action(move |form: &VendorRegistration| {
        let form = form.clone();
        async move {
            match api::register_vendor(&form).await {
                Ok(vendor) => {
                    log::info!("✅ Vendor application received: {}", vendor.company_name);
                    set_submitted.set(true);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        register.dispatch(form.get_untracked());
    };

    let input = move |label: &'static str,
                      kind: &'static str,
                      get: fn(&VendorRegistration) -> String,
                      set: fn(&mut VendorRegistration, String)| {
        view! {
            <div class="field">
                <label>{label}</label>
                <input
                    type=kind
                    required
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </div>
        }
    };

    view! {
        <Title text="Become a Vendor | BantConfirm"/>
        <div class="page vendor-registration">
            <Show
                when=move || !submitted.get()
                fallback=|| view! {
                    <div class="result-card">
                        <div class="result-icon">"✓"</div>
                        <h2>"Application Received"</h2>
                        <p>"Our partner team will verify your details and reach out within 48 hours."</p>
                        <A href="/" class="btn btn-primary">"Back to Home"</A>
                    </div>
                }
            >
                <PageHeading
                    tag="Partner Network"
                    title="Become a Verified Vendor"
                    subtitle="Receive BANT-qualified requirements matched to your expertise."
                />
                <form class="form-card" on:submit=on_submit>
                    {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}
                    <div class="form-grid">
                        {input("Contact Person", "text", |f| f.name.clone(), |f, v| f.name = v)}
                        {input("Company Name", "text", |f| f.company_name.clone(), |f, v| f.company_name = v)}
                        {input("Mobile", "tel", |f| f.mobile.clone(), |f, v| f.mobile = v)}
                        {input("Business Email", "email", |f| f.email.clone(), |f, v| f.email = v)}
                        {input("Location", "text", |f| f.location.clone(), |f, v| f.location = v)}
                        <div class="field">
                            <label>"Category"</label>
                            <select
                                prop:value=move || form.with(|f| f.category.clone())
                                on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))
                            >
                                {VENDOR_CATEGORIES.iter().map(|c| view! { <option value=*c>{*c}</option> }).collect_view()}
                            </select>
                        </div>
                    </div>
                    {input("Product Expertise", "text", |f| f.product_expertise.clone(), |f, v| f.product_expertise = v)}
                    <div class="field">
                        <label>"Anything else we should know?"</label>
                        <textarea
                            rows="3"
                            prop:value=move || form.with(|f| f.custom_box.clone())
                            on:input=move |ev| form.update(|f| f.custom_box = event_target_value(&ev))
                        ></textarea>
                    </div>
                    <button type="submit" class="btn btn-primary wide" disabled=move || register.pending().get()>
                        {move || if register.pending().get() { "Submitting..." } else { "Submit Application" }}
                    </button>
                </form>
            </Show>
        </div>
    }
}

//! Vendor directory: verification and manual onboarding.

use leptos::*;

use super::{check_field, text_area, text_field, use_admin};
use crate::pages::vendor_registration::VENDOR_CATEGORIES;
use crate::services::api;
use crate::types::{Vendor, VendorDraft};

#[component]
pub fn VendorsTab() -> impl IntoView {
    let ctx = use_admin();
    let editing = create_rw_signal(None::<VendorDraft>);

    let vendors = create_resource(
        move || ctx.revision(),
        move |_| async move { api::fetch_vendors(&ctx.token()).await },
    );

    let remove = create_action(move |vendor: &Vendor| {
        let vendor = vendor.clone();
        async move {
            match api::delete_vendor(&ctx.token(), &vendor.id).await {
                Ok(_) => ctx.saved(format!("Removed {}", vendor.company_name)),
                Err(e) => ctx.failed(e),
            }
        }
    });

    let add_new = move |_: ev::MouseEvent| {
        editing.set(Some(VendorDraft {
            category: VENDOR_CATEGORIES[0].to_string(),
            ..Default::default()
        }))
    };

    view! {
        <div class="tab-header">
            <h2>"Vendors"</h2>
            <button class="btn btn-primary" on:click=add_new>"+ Add Vendor"</button>
        </div>
        {move || editing.get().map(|draft| view! { <VendorEditor draft=draft editing=editing/> })}
        <Transition fallback=|| view! { <p class="loading">"Loading vendors..."</p> }>
            {move || vendors.get().map(|result| match result {
                Ok(list) if list.is_empty() => {
                    view! { <p class="empty-state">"No vendors registered yet."</p> }.into_view()
                }
                Ok(list) => view! {
                    <table class="admin-table">
                        <thead>
                            <tr>
                                <th>"Company"</th><th>"Contact"</th><th>"Category"</th>
                                <th>"Location"</th><th>"Joined"</th><th>"Verified"</th><th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {list.into_iter().map(|vendor| {
                                let edit = VendorDraft::from(&vendor);
                                let target = vendor.clone();
                                view! {
                                    <tr>
                                        <td>{vendor.company_name.clone()}</td>
                                        <td>{format!("{} · {}", vendor.name, vendor.mobile)}</td>
                                        <td>{vendor.category.clone()}</td>
                                        <td>{vendor.location.clone()}</td>
                                        <td>{vendor.date_joined.clone().unwrap_or_default()}</td>
                                        <td>
                                            {if vendor.verified {
                                                view! { <span class="badge badge-success">"Verified"</span> }
                                            } else {
                                                view! { <span class="badge badge-warning">"Pending"</span> }
                                            }}
                                        </td>
                                        <td class="row-actions">
                                            <button class="btn btn-small" on:click=move |_| editing.set(Some(edit.clone()))>"Edit"</button>
                                            <button class="btn btn-small btn-danger" on:click=move |_| remove.dispatch(target.clone())>"Delete"</button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                }
                .into_view(),
                Err(e) => {
                    ctx.failed(e);
                    ().into_view()
                }
            })}
        </Transition>
    }
}

#[component]
fn VendorEditor(draft: VendorDraft, editing: RwSignal<Option<VendorDraft>>) -> impl IntoView {
    let ctx = use_admin();
    let title = if draft.id.is_some() { "Edit Vendor" } else { "New Vendor" };
    let form = create_rw_signal(draft);

    let save = create_action(move |_: &()| {
        let payload = form.get_untracked();
        async move {
            match api::save_vendor(&ctx.token(), &payload).await {
                Ok(vendor) => {
                    editing.set(None);
                    ctx.saved(format!("Saved {}", vendor.company_name));
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
        <form class="editor" on:submit=on_submit>
            <h3>{title}</h3>
            <div class="form-grid">
                {text_field(form, "Contact Person", |f| f.name.clone(), |f, v| f.name = v)}
                {text_field(form, "Company Name", |f| f.company_name.clone(), |f, v| f.company_name = v)}
                {text_field(form, "Mobile", |f| f.mobile.clone(), |f, v| f.mobile = v)}
                {text_field(form, "Email", |f| f.email.clone(), |f, v| f.email = v)}
                {text_field(form, "Location", |f| f.location.clone(), |f, v| f.location = v)}
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
            {text_field(form, "Product Expertise", |f| f.product_expertise.clone(), |f, v| f.product_expertise = v)}
            {text_area(form, "Notes", |f| f.custom_box.clone(), |f, v| f.custom_box = v)}
            {check_field(form, "Verified partner", |f| f.verified, |f, v| f.verified = v)}
            <div class="editor-actions">
                <button type="button" class="btn btn-secondary" on:click=move |_| editing.set(None)>"Cancel"</button>
                <button type="submit" class="btn btn-primary" disabled=move || save.pending().get()>"Save Vendor"</button>
            </div>
        </form>
    }
}

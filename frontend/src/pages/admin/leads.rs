//! Lead pipeline: table, detail panel with vendor assignment, CSV export.

use leptos::*;

use super::use_admin;
use crate::services::{api, files};
use crate::types::{Lead, LeadPatch, LeadStatus, Vendor};

/// Company name of the assigned vendor, or "Unassigned".
pub fn vendor_label(lead: &Lead, vendors: &[Vendor]) -> String {
    lead.assigned_vendor_id
        .as_deref()
        .and_then(|id| vendors.iter().find(|v| v.id == id))
        .map(|v| v.company_name.clone())
        .unwrap_or_else(|| "Unassigned".to_string())
}

#[component]
pub fn LeadsTab() -> impl IntoView {
    let ctx = use_admin();
    let selected = create_rw_signal(None::<Lead>);

    let data = create_resource(
        move || ctx.revision(),
        move |_| async move {
            let token = ctx.token();
            let leads = api::fetch_leads(&token).await?;
            let vendors = api::fetch_vendors(&token).await?;
            Ok::<_, crate::types::AppError>((leads, vendors))
        },
    );

    let download = create_action(move |_: &()| async move {
        match api::export_leads(&ctx.token()).await {
            Ok((file_name, csv)) => match files::download_text(&file_name, &csv, "text/csv;charset=utf-8;") {
                Ok(()) => log::info!("📥 Exported {}", file_name),
                Err(e) => ctx.failed(e),
            },
            Err(e) => ctx.failed(e),
        }
    });

    view! {
        <div class="tab-header">
            <h2>"Lead Pipeline"</h2>
            <button class="btn btn-primary" on:click=move |_| download.dispatch(())>"Download CSV"</button>
        </div>
        <Transition fallback=|| view! { <p class="loading">"Loading leads..."</p> }>
            {move || data.get().map(|result| match result {
                Ok((leads, _)) if leads.is_empty() => {
                    view! { <p class="empty-state">"No leads yet."</p> }.into_view()
                }
                Ok((leads, vendors)) => {
                    let detail_vendors = vendors.clone();
                    view! {
                        <table class="admin-table">
                            <thead>
                                <tr>
                                    <th>"Date"</th><th>"Contact"</th><th>"Company"</th><th>"Requirement"</th>
                                    <th>"Score"</th><th>"Status"</th><th>"Vendor"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {leads.into_iter().map(|lead| {
                                    let vendor = vendor_label(&lead, &vendors);
                                    let row = lead.clone();
                                    view! {
                                        <tr class="clickable" on:click=move |_| selected.set(Some(row.clone()))>
                                            <td>{lead.date.clone()}</td>
                                            <td>{lead.contact_name.clone()}</td>
                                            <td>{lead.company_name.clone()}</td>
                                            <td class="truncate">{lead.requirement.clone()}</td>
                                            <td>{lead.intent_score.map(|s| s.to_string()).unwrap_or_else(|| "-".into())}</td>
                                            <td><span class=lead.status.css_class()>{lead.status.as_str()}</span></td>
                                            <td>{vendor}</td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                        {move || selected.get().map(|lead| {
                            view! { <LeadDetail lead=lead vendors=detail_vendors.clone() selected=selected/> }
                        })}
                    }
                    .into_view()
                }
                Err(e) => {
                    ctx.failed(e);
                    ().into_view()
                }
            })}
        </Transition>
    }
}

#[component]
fn LeadDetail(lead: Lead, vendors: Vec<Vendor>, selected: RwSignal<Option<Lead>>) -> impl IntoView {
    let ctx = use_admin();
    let id = store_value(lead.id.clone());
    let vendor_id = create_rw_signal(lead.assigned_vendor_id.clone().unwrap_or_default());
    let remarks = create_rw_signal(lead.remarks.clone());
    let status = create_rw_signal(lead.status);

    let save = create_action(move |_: &()| {
        let patch = LeadPatch {
            assigned_vendor_id: Some(vendor_id.get_untracked()),
            remarks: Some(remarks.get_untracked()),
            status: Some(status.get_untracked()),
        };
        async move {
            match api::update_lead(&ctx.token(), &id.get_value(), &patch).await {
                Ok(updated) => {
                    selected.set(Some(updated));
                    ctx.saved("Lead updated");
                }
                Err(e) => ctx.failed(e),
            }
        }
    });

    let remove = create_action(move |_: &()| async move {
        match api::delete_lead(&ctx.token(), &id.get_value()).await {
            Ok(_) => {
                selected.set(None);
                ctx.saved("Lead deleted");
            }
            Err(e) => ctx.failed(e),
        }
    });

    let details = [
        ("Contact", lead.contact_name.clone()),
        ("Company", lead.company_name.clone()),
        ("Email", lead.email.clone()),
        ("Mobile", lead.mobile.clone()),
        ("Location", lead.location.clone()),
        ("Budget", lead.budget.clone()),
        ("Authority", lead.authority.clone()),
        ("Timeline", lead.timeline.clone()),
        ("Date", lead.date.clone()),
    ];

    view! {
        <div class="modal-backdrop" on:click=move |_| selected.set(None)></div>
        <div class="modal">
            <div class="modal-header">
                <h3>"Lead Detail"</h3>
                <button class="link-button" on:click=move |_| selected.set(None)>"✕"</button>
            </div>
            <dl class="detail-list">
                {details.into_iter().map(|(k, v)| view! { <dt>{k}</dt><dd>{v}</dd> }).collect_view()}
                <dt>"Requirement"</dt>
                <dd>{lead.requirement.clone()}</dd>
                <dt>"Intent Score"</dt>
                <dd>{lead.intent_score.map(|s| format!("{}/100", s)).unwrap_or_else(|| "-".into())}</dd>
            </dl>
            <div class="field">
                <label>"Assign Vendor"</label>
                <select prop:value=move || vendor_id.get() on:change=move |ev| vendor_id.set(event_target_value(&ev))>
                    <option value="">"Unassigned"</option>
                    {vendors.into_iter().map(|v| view! {
                        <option value=v.id.clone()>{v.company_name.clone()}</option>
                    }).collect_view()}
                </select>
            </div>
            <div class="field">
                <label>"Status"</label>
                <select
                    prop:value=move || status.get().as_str()
                    on:change=move |ev| status.set(match event_target_value(&ev).as_str() {
                        "Qualified" => LeadStatus::Qualified,
                        _ => LeadStatus::Pending,
                    })
                >
                    <option value="Qualified">"Qualified"</option>
                    <option value="Pending">"Pending"</option>
                </select>
            </div>
            <div class="field">
                <label>"Remarks"</label>
                <textarea rows="4" prop:value=remarks on:input=move |ev| remarks.set(event_target_value(&ev))></textarea>
            </div>
            <div class="modal-actions">
                <button class="btn btn-danger" on:click=move |_| remove.dispatch(())>"Delete"</button>
                <button class="btn btn-primary" on:click=move |_| save.dispatch(()) disabled=move || save.pending().get()>
                    "Save"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vendor_label() {
        let vendors = vec![Vendor {
            id: "1".into(),
            company_name: "Nexus Solutions".into(),
            ..Default::default()
        }];
        let mut lead = Lead::default();
        assert_eq!(vendor_label(&lead, &vendors), "Unassigned");

        lead.assigned_vendor_id = Some("1".into());
        assert_eq!(vendor_label(&lead, &vendors), "Nexus Solutions");

        lead.assigned_vendor_id = Some("gone".into());
        assert_eq!(vendor_label(&lead, &vendors), "Unassigned");
    }
}

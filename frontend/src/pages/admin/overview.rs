use leptos::*;

use super::use_admin;
use crate::services::api;

#[component]
pub fn OverviewTab() -> impl IntoView {
    let ctx = use_admin();
    let overview = create_resource(
        move || ctx.revision(),
        move |_| async move { api::fetch_overview(&ctx.token()).await },
    );

    view! {
        <Transition fallback=|| view! { <p class="loading">"Loading..."</p> }>
            {move || overview.get().map(|result| match result {
                Ok(counts) => {
                    let stats = [
                        ("⚡", "QUALIFIED LEADS", counts.leads),
                        ("🏢", "SELLERS/VENDORS", counts.vendors),
                        ("📦", "MARKET ITEMS", counts.products),
                    ];
                    view! {
                        <div class="stat-row">
                            {stats.into_iter().map(|(icon, name, value)| view! {
                                <div class="stat-card">
                                    <span class="stat-icon">{icon}</span>
                                    <span class="stat-name">{name}</span>
                                    <strong class="stat-value">{value}</strong>
                                </div>
                            }).collect_view()}
                        </div>
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

//! Full catalog with search and category filter.

use leptos::*;
use leptos_meta::Title;

use crate::components::{CategoryTabs, PageHeading, ProductGrid};
use crate::services::{api, use_store_revision};
use crate::types::ProductQuery;
use crate::ALL_SOLUTIONS;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let revision = use_store_revision();
    let active = create_rw_signal(ALL_SOLUTIONS.to_string());
    let (search, set_search) = create_signal(String::new());

    let categories = create_resource(move || revision.get(), |_| async move {
        api::fetch_categories()
            .await
            .unwrap_or_else(|_| vec![ALL_SOLUTIONS.to_string()])
    });
    let products = create_resource(
        move || (revision.get(), active.get(), search.get()),
        |(_, category, search)| async move {
            let query = ProductQuery {
                category: Some(category),
                search: Some(search),
                limit: None,
            };
            api::fetch_products(&query).await.unwrap_or_else(|e| {
                log::warn!("Could not load products: {}", e);
                Vec::new()
            })
        },
    );

    let reset = move |_| {
        set_search.set(String::new());
        active.set(ALL_SOLUTIONS.to_string());
    };

    view! {
        <Title text="Explore Solutions - Verified B2B Marketplace | BantConfirm"/>
        <div class="page">
            <PageHeading
                tag="Marketplace"
                title="Find the Right Business Solutions"
                subtitle="Browse CRM, ERP, Cloud Telephony, and IT Hardware from verified vendors."
            />
            <input
                class="search-input wide"
                type="search"
                placeholder="Search Tally, Zoho, Airtel, Microsoft License..."
                prop:value=search
                on:input=move |ev| set_search.set(event_target_value(&ev))
            />
            <Suspense fallback=|| ()>
                <CategoryTabs
                    categories=Signal::derive(move || categories.get().unwrap_or_default())
                    active=active
                />
            </Suspense>
            <Transition fallback=|| view! { <p class="loading">"Loading solutions..."</p> }>
                {move || {
                    let found = products.get().unwrap_or_default();
                    if found.is_empty() {
                        view! {
                            <div class="empty-state">
                                <h3>"No solutions found"</h3>
                                <p>"Try adjusting your filters or search terms."</p>
                                <button class="btn btn-secondary" on:click=reset>"Reset all filters"</button>
                            </div>
                        }
                        .into_view()
                    } else {
                        view! { <ProductGrid products=Signal::derive(move || found.clone())/> }.into_view()
                    }
                }}
            </Transition>
        </div>
    }
}

//! Landing page: hero, partner logo marquee, category tabs over top products.

use leptos::*;
use leptos_meta::Title;
use leptos_router::*;

use crate::components::{CategoryTabs, ProductGrid};
use crate::services::{api, use_store_revision};
use crate::types::ProductQuery;
use crate::{ALL_SOLUTIONS, HOME_PRODUCT_LIMIT};

const REASONS: [(&str, &str, &str); 3] = [
    ("⚡", "AI-Verified Intent", "Every requirement is scored against Budget, Authority, Need and Timing before a vendor sees it."),
    ("🏢", "Audited Vendors", "Partners are verified before they receive a single lead. No directories, no cold lists."),
    ("🔒", "No Data Selling", "Your details reach only the vendors matched to your requirement."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let revision = use_store_revision();
    let active = create_rw_signal(ALL_SOLUTIONS.to_string());
    let (search, set_search) = create_signal(String::new());

    let logos = create_resource(move || revision.get(), |_| async move {
        api::fetch_logos().await.unwrap_or_else(|e| {
            log::warn!("Could not load vendor logos: {}", e);
            Vec::new()
        })
    });
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
                limit: Some(HOME_PRODUCT_LIMIT),
            };
            api::fetch_products(&query).await.unwrap_or_else(|e| {
                log::warn!("Could not load products: {}", e);
                Vec::new()
            })
        },
    );

    // Marquee repeats the logo strip so the scroll loops seamlessly
    let marquee = move || {
        let strip = logos.get().unwrap_or_default();
        let len = strip.len();
        strip
            .into_iter()
            .cycle()
            .take(len * 3)
            .map(|logo| view! {
                <div class="marquee-item"><img src=logo.image alt=logo.name/></div>
            })
            .collect_view()
    };

    view! {
        <Title text="BantConfirm - India's Smartest B2B AI Marketplace"/>
        <section class="hero">
            <span class="eyebrow">"AI-Driven B2B Procurement"</span>
            <h1>"The IT Marketplace for MSMEs & Enterprises"</h1>
            <p class="subtitle">"Software, IT Hardware & Services"</p>
            <p>
                "Discover, Compare, and Buy Enterprise-grade IT Solutions. We connect Indian "
                "businesses with verified top-tier vendors using AI-driven BANT matching."
            </p>
            <div class="hero-actions">
                <A href="/products" class="btn btn-primary">"Explore Solutions"</A>
                <A href="/lead-wizard" class="btn btn-accent">"Post My Requirement"</A>
            </div>
        </section>

        <section class="marquee">
            <h4>"Empowering Businesses with Global Partners"</h4>
            <div class="marquee-track">
                <Suspense fallback=|| ()>{marquee}</Suspense>
            </div>
        </section>

        <section class="reasons">
            <h2>"Why BantConfirm?"</h2>
            <p class="subtitle">"No data selling. No fake leads. Only AI-verified requirements and trusted partners."</p>
            <div class="card-row">
                {REASONS.iter().map(|(icon, title, text)| view! {
                    <div class="card">
                        <div class="card-icon">{*icon}</div>
                        <h3>{*title}</h3>
                        <p>{*text}</p>
                    </div>
                }).collect_view()}
            </div>
        </section>

        <section class="catalog-preview">
            <h2>"Trending Solutions"</h2>
            <div class="catalog-controls">
                <Suspense fallback=|| ()>
                    <CategoryTabs
                        categories=Signal::derive(move || categories.get().unwrap_or_default())
                        active=active
                    />
                </Suspense>
                <input
                    class="search-input"
                    type="search"
                    placeholder="Search Tally, Zoho, Airtel..."
                    prop:value=search
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
            </div>
            <Transition fallback=|| view! { <p class="loading">"Loading solutions..."</p> }>
                <ProductGrid products=Signal::derive(move || products.get().unwrap_or_default())/>
            </Transition>
            <A href="/products" class="btn btn-secondary">"View Full Catalog"</A>
        </section>
    }
}

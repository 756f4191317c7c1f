use leptos::*;
use leptos_router::*;

use crate::types::Product;

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let href = format!("/products/{}", product.slug);

    view! {
        <A href=href class="product-card">
            <div class="product-image">
                <img src=product.image.clone() alt=product.name.clone() loading="lazy"/>
                <span class="badge">{product.category.clone()}</span>
            </div>
            <div class="product-body">
                <h3>{product.name.clone()}</h3>
                <p class="product-summary">{product.short_description.clone()}</p>
                <div class="product-meta">
                    <span class="price">{product.price.clone()}</span>
                    <span class="rating">"★ " {format!("{:.1}", product.rating)}</span>
                </div>
                <div class="product-vendor">
                    {product.vendor_name.clone()}
                    <span class="vendor-rating">{format!(" • {:.1}", product.vendor_rating)}</span>
                </div>
            </div>
        </A>
    }
}

/// Grid of product cards with an empty-state message.
#[component]
pub fn ProductGrid(
    #[prop(into)] products: Signal<Vec<Product>>,
    #[prop(optional, into)] empty: Option<String>,
) -> impl IntoView {
    let empty = empty.unwrap_or_else(|| "No solutions match your search.".to_string());

    view! {
        <Show
            when=move || !products.with(Vec::is_empty)
            fallback=move || view! { <p class="empty-state">{empty.clone()}</p> }
        >
            <div class="product-grid">
                <For
                    each=move || products.get()
                    key=|p| p.id.clone()
                    children=|product| view! { <ProductCard product=product/> }
                />
            </div>
        </Show>
    }
}

/// Category filter buttons; the first entry is the catch-all tab.
#[component]
pub fn CategoryTabs(
    #[prop(into)] categories: Signal<Vec<String>>,
    active: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="category-tabs">
            <For
                each=move || categories.get()
                key=|c| c.clone()
                children=move |category| {
                    let name = category.clone();
                    let label = category.clone();
                    let is_active = move || active.get() == name;
                    view! {
                        <button
                            class="tab"
                            class:active=is_active
                            on:click=move |_| active.set(category.clone())
                        >
                            {label}
                        </button>
                    }
                }
            />
        </div>
    }
}

//! Product page: gallery, features, overview and related solutions.

use leptos::*;
use leptos_meta::{Meta, Title};
use leptos_router::*;

use crate::components::ProductGrid;
use crate::services::{api, use_store_revision};
use crate::types::{AppError, ProductDetail};

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let params = use_params_map();
    let revision = use_store_revision();
    let slug = move || params.with(|p| p.get("slug").cloned().unwrap_or_default());

    let detail = create_resource(
        move || (slug(), revision.get()),
        |(slug, _)| async move { api::fetch_product(&slug).await },
    );

    view! {
        <Transition fallback=|| view! { <p class="loading">"Loading solution..."</p> }>
            {move || detail.get().map(|result| match result {
                Ok(detail) => view! { <ProductView detail=detail/> }.into_view(),
                Err(AppError::Api { status: 404, .. }) => view! { <NotFound/> }.into_view(),
                Err(e) => view! { <div class="page error-message">{e.to_string()}</div> }.into_view(),
            })}
        </Transition>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Title text="Solution Not Found | BantConfirm"/>
        <div class="page not-found">
            <h1>"Solution Not Found"</h1>
            <p>"The specific enterprise requirement you're looking for doesn't exist."</p>
            <A href="/products" class="btn btn-primary">"Back to Marketplace"</A>
        </div>
    }
}

#[component]
fn ProductView(detail: ProductDetail) -> impl IntoView {
    let ProductDetail { product, related } = detail;
    let gallery = product.gallery();
    let main_image = create_rw_signal(gallery.first().cloned().unwrap_or_default());
    let has_related = !related.is_empty();
    let title = format!("{} - Verified B2B Solution | BantConfirm", product.name);

    view! {
        <Title text=title/>
        <Meta name="description" content=product.short_description.clone()/>
        <div class="page product-detail">
            <nav class="breadcrumb">
                <A href="/">"Home"</A> " / " <A href="/products">"Products"</A> " / " {product.name.clone()}
            </nav>
            <div class="detail-grid">
                <div class="gallery">
                    <img class="gallery-main" src=move || main_image.get() alt=product.name.clone()/>
                    <span class="badge">"★ " {format!("{:.1}", product.rating)} " Verified Score"</span>
                    <div class="gallery-thumbs">
                        {gallery.into_iter().enumerate().map(|(i, img)| {
                            let src = img.clone();
                            let thumb = img.clone();
                            view! {
                                <button
                                    class="thumb"
                                    class:active=move || main_image.get() == img
                                    on:click=move |_| main_image.set(src.clone())
                                >
                                    <img src=thumb alt=format!("Thumbnail {}", i + 1)/>
                                </button>
                            }
                        }).collect_view()}
                    </div>
                </div>
                <div class="detail-info">
                    <div class="detail-tags">
                        <span class="badge">{product.category.clone()}</span>
                        <span class="vendor">{product.vendor_name.clone()} " ★ " {format!("{:.1}", product.vendor_rating)}</span>
                    </div>
                    <h1>{product.name.clone()}</h1>
                    <p class="subtitle">{product.short_description.clone()}</p>
                    <div class="price-box">
                        <div><span class="label">"Base Price"</span><strong>{product.price.clone()}</strong></div>
                        <div><span class="label">"Model"</span><strong>{product.pricing_type.as_str()}</strong></div>
                        <span class="note">"GST Extra"</span>
                    </div>
                    <h3>"Enterprise Features"</h3>
                    <ul class="feature-list">
                        {product.features.iter().map(|f| view! { <li>"✓ " {f.clone()}</li> }).collect_view()}
                    </ul>
                    <A href="/lead-wizard" class="btn btn-primary">"Consult Expert"</A>
                    <div class="verified-note">
                        <h4>"BANT Verified Solution"</h4>
                        <p>"This vendor has cleared our strict 4-step lead-matching audit."</p>
                    </div>
                </div>
            </div>
            <section class="overview">
                <h2>"Enterprise Overview"</h2>
                <p>{product.description.clone()}</p>
                <p>
                    "Selecting " {product.name.clone()}
                    " ensures you are opting for a solution audited for scalability and Indian business compliance."
                </p>
            </section>
            <Show when=move || has_related fallback=|| ()>
                <section class="related">
                    <h2>"Related Solutions"</h2>
                    <ProductGrid products=Signal::derive({
                        let related = related.clone();
                        move || related.clone()
                    })/>
                </section>
            </Show>
        </div>
    }
}

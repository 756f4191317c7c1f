//! Catalog management: product list and the product editor.

use leptos::*;

use super::{lines, text_area, text_field, use_admin};
use crate::components::ImageInput;
use crate::services::api;
use crate::types::{PricingType, Product, ProductDraft, ProductQuery};
use crate::ALL_SOLUTIONS;

/// Stored categories without the catalog catch-all tab.
pub fn editable_categories(tabs: Vec<String>) -> Vec<String> {
    tabs.into_iter().filter(|c| c != ALL_SOLUTIONS).collect()
}

/// Empty rating fields fall back to the server default.
pub fn parse_rating(text: &str) -> Option<f32> {
    text.trim().parse::<f32>().ok().filter(|r| r.is_finite())
}

#[component]
pub fn ProductsTab() -> impl IntoView {
    let ctx = use_admin();
    let editing = create_rw_signal(None::<ProductDraft>);

    let data = create_resource(
        move || ctx.revision(),
        move |_| async move {
            let products = api::fetch_products(&ProductQuery::default()).await?;
            let categories = editable_categories(api::fetch_categories().await?);
            Ok::<_, crate::types::AppError>((products, categories))
        },
    );
    let categories = Signal::derive(move || {
        data.get()
            .and_then(Result::ok)
            .map(|(_, categories)| categories)
            .unwrap_or_default()
    });

    let remove = create_action(move |product: &Product| {
        let id = product.id.clone();
        let name = product.name.clone();
        async move {
            match api::delete_product(&ctx.token(), &id).await {
                Ok(_) => ctx.saved(format!("Removed {}", name)),
                Err(e) => ctx.failed(e),
            }
        }
    });

    let add_new = move |_: ev::MouseEvent| {
        editing.set(Some(ProductDraft {
            category: categories.get_untracked().first().cloned().unwrap_or_default(),
            ..Default::default()
        }));
    };

    view! {
        <div class="tab-header">
            <h2>"Products"</h2>
            <button class="btn btn-primary" on:click=add_new>"+ Add Product"</button>
        </div>
        {move || editing.get().map(|draft| view! {
            <ProductEditor draft=draft categories=categories editing=editing/>
        })}
        <Transition fallback=|| view! { <p class="loading">"Loading products..."</p> }>
            {move || data.get().map(|result| match result {
                Ok((products, _)) => view! {
                    <div class="admin-list">
                        {products.into_iter().map(|product| {
                            let edit = ProductDraft::from(&product);
                            let target = product.clone();
                            view! {
                                <div class="admin-row">
                                    <img class="thumb" src=product.image.clone() alt=product.name.clone()/>
                                    <div class="admin-row-body">
                                        <strong>{product.name.clone()}</strong>
                                        <span class="muted">{format!("{} · {}", product.category, product.price)}</span>
                                    </div>
                                    <button class="btn btn-small" on:click=move |_| editing.set(Some(edit.clone()))>"Edit"</button>
                                    <button class="btn btn-small btn-danger" on:click=move |_| remove.dispatch(target.clone())>"Delete"</button>
                                </div>
                            }
                        }).collect_view()}
                    </div>
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
fn ProductEditor(
    draft: ProductDraft,
    #[prop(into)] categories: Signal<Vec<String>>,
    editing: RwSignal<Option<ProductDraft>>,
) -> impl IntoView {
    let ctx = use_admin();
    let title = if draft.id.is_some() { "Edit Product" } else { "New Product" };

    let image = create_rw_signal(draft.image.clone().unwrap_or_default());
    let gallery = create_rw_signal(draft.images.join("\n"));
    let upload = create_rw_signal(String::new());
    let features = create_rw_signal(draft.features.clone().unwrap_or_default().join("\n"));
    let rating = create_rw_signal(draft.rating.map(|r| r.to_string()).unwrap_or_default());
    let vendor_rating = create_rw_signal(draft.vendor_rating.map(|r| r.to_string()).unwrap_or_default());
    let form = create_rw_signal(draft);

    // Uploaded gallery images are appended one by one
    create_effect(move |_| {
        let url = upload.get();
        if !url.is_empty() {
            gallery.update(|g| {
                if !g.is_empty() {
                    g.push('\n');
                }
                g.push_str(&url);
            });
            upload.set(String::new());
        }
    });

    let save = create_action(move |_: &()| {
        let mut payload = form.get_untracked();
        let main = image.get_untracked();
        payload.image = (!main.trim().is_empty()).then_some(main);
        payload.images = lines(&gallery.get_untracked());
        payload.features = Some(lines(&features.get_untracked()));
        payload.rating = parse_rating(&rating.get_untracked());
        payload.vendor_rating = parse_rating(&vendor_rating.get_untracked());
        async move {
            match api::save_product(&ctx.token(), &payload).await {
                Ok(product) => {
                    editing.set(None);
                    ctx.saved(format!("Saved {}", product.name));
                }
                Err(e) => ctx.failed(e),
            }
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        save.dispatch(());
    };

    let rating_input = |label: &'static str, value: RwSignal<String>| view! {
        <div class="field">
            <label>{label}</label>
            <input
                type="number"
                step="0.1"
                min="0"
                max="5"
                prop:value=value
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    };

    view! {
        <form class="editor" on:submit=on_submit>
            <h3>{title}</h3>
            <div class="form-grid">
                {text_field(form, "Name", |f| f.name.clone(), |f, v| f.name = v)}
                {text_field(form, "Vendor Name", |f| f.vendor_name.clone(), |f, v| f.vendor_name = v)}
                <div class="field">
                    <label>"Category"</label>
                    <select
                        prop:value=move || form.with(|f| f.category.clone())
                        on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))
                    >
                        {move || categories.get().into_iter().map(|c| view! {
                            <option value=c.clone()>{c.clone()}</option>
                        }).collect_view()}
                    </select>
                </div>
                {text_field(form, "Price", |f| f.price.clone(), |f, v| f.price = v)}
                <div class="field">
                    <label>"Pricing Type"</label>
                    <select
                        prop:value=move || form.with(|f| f.pricing_type.as_str())
                        on:change=move |ev| form.update(|f| f.pricing_type = PricingType::parse(&event_target_value(&ev)))
                    >
                        {PricingType::ALL.iter().map(|p| view! {
                            <option value=p.as_str()>{p.as_str()}</option>
                        }).collect_view()}
                    </select>
                </div>
                {rating_input("Rating", rating)}
                {rating_input("Vendor Rating", vendor_rating)}
            </div>
            {text_field(form, "Short Description", |f| f.short_description.clone(), |f, v| f.short_description = v)}
            {text_area(form, "Description", |f| f.description.clone(), |f, v| f.description = v)}
            <div class="field">
                <label>"Features (one per line)"</label>
                <textarea rows="4" prop:value=features on:input=move |ev| features.set(event_target_value(&ev))></textarea>
            </div>
            <ImageInput label="Main Image" value=image/>
            <div class="field">
                <label>"Gallery Images (one URL per line)"</label>
                <textarea rows="3" prop:value=gallery on:input=move |ev| gallery.set(event_target_value(&ev))></textarea>
            </div>
            <ImageInput label="Add Gallery Image" value=upload/>
            <div class="editor-actions">
                <button type="button" class="btn btn-secondary" on:click=move |_| editing.set(None)>"Cancel"</button>
                <button type="submit" class="btn btn-primary" disabled=move || save.pending().get()>"Save Product"</button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catch_all_tab_is_not_editable() {
        let tabs = vec![
            "All Solutions".to_string(),
            "CRM".to_string(),
            "Telecom".to_string(),
        ];
        assert_eq!(editable_categories(tabs), vec!["CRM", "Telecom"]);
    }

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating(" 4.5 "), Some(4.5));
        assert_eq!(parse_rating(""), None);
        assert_eq!(parse_rating("NaN"), None);
    }
}

use leptos::*;
use leptos_meta::Title;

use crate::components::PageHeading;
use crate::services::{api, use_store_revision};

#[component]
pub fn BlogPage() -> impl IntoView {
    let revision = use_store_revision();
    let posts = create_resource(move || revision.get(), |_| async move { api::fetch_blogs().await });

    view! {
        <Title text="Insights & Resources | BantConfirm"/>
        <div class="page">
            <PageHeading
                tag="BANT Knowledge Base"
                title="Insights & AI Business Resources"
                subtitle="Deep insights, tutorials, and industry trends to help you scale your B2B procurement strategies."
            />
            <Transition fallback=|| view! { <p class="loading">"Loading articles..."</p> }>
                {move || posts.get().map(|result| match result {
                    Ok(posts) => view! {
                        <div class="blog-grid">
                            {posts.into_iter().map(|post| view! {
                                <article class="blog-card" id=post.slug.clone()>
                                    <img src=post.image.clone() alt=post.title.clone() loading="lazy"/>
                                    <span class="badge">{post.category.clone()}</span>
                                    <p class="meta">{post.date.clone()} " • By " {post.author.clone()}</p>
                                    <h2>{post.title.clone()}</h2>
                                    <p>{post.excerpt.clone()}</p>
                                    <details>
                                        <summary>"Read Article →"</summary>
                                        <p class="blog-content">{post.content.clone()}</p>
                                    </details>
                                </article>
                            }).collect_view()}
                        </div>
                    }.into_view(),
                    Err(e) => view! { <div class="error-message">{e.to_string()}</div> }.into_view(),
                })}
            </Transition>
        </div>
    }
}

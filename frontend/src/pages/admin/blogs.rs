use leptos::*;

use super::{text_area, text_field, use_admin};
use crate::components::ImageInput;
use crate::services::api;
use crate::types::{BlogDraft, BlogPost};

#[component]
pub fn BlogsTab() -> impl IntoView {
    let ctx = use_admin();
    let editing = create_rw_signal(None::<BlogDraft>);

    let posts = create_resource(move || ctx.revision(), |_| api::fetch_blogs());

    let remove = create_action(move |post: &BlogPost| {
        let post = post.clone();
        async move {
            match api::delete_blog(&ctx.token(), &post.id).await {
                Ok(_) => ctx.saved(format!("Removed \"{}\"", post.title)),
                Err(e) => ctx.failed(e),
            }
        }
    });

    view! {
        <div class="tab-header">
            <h2>"Blog Posts"</h2>
            <button class="btn btn-primary" on:click=move |_| editing.set(Some(BlogDraft::default()))>"+ New Post"</button>
        </div>
        {move || editing.get().map(|draft| view! { <BlogEditor draft=draft editing=editing/> })}
        <Transition fallback=|| view! { <p class="loading">"Loading posts..."</p> }>
            {move || posts.get().map(|result| match result {
                Ok(list) => view! {
                    <div class="admin-list">
                        {list.into_iter().map(|post| {
                            let edit = BlogDraft::from(&post);
                            let target = post.clone();
                            view! {
                                <div class="admin-row">
                                    <img class="thumb" src=post.image.clone() alt=post.title.clone()/>
                                    <div class="admin-row-body">
                                        <strong>{post.title.clone()}</strong>
                                        <span class="muted">{format!("{} · {} · {}", post.category, post.author, post.date)}</span>
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
fn BlogEditor(draft: BlogDraft, editing: RwSignal<Option<BlogDraft>>) -> impl IntoView {
    let ctx = use_admin();
    let title = if draft.id.is_some() { "Edit Post" } else { "New Post" };
    let image = create_rw_signal(draft.image.clone());
    let form = create_rw_signal(draft);

    let save = create_action(move |_: &()| {
        let mut payload = form.get_untracked();
        payload.image = image.get_untracked();
        payload.category = payload.category.filter(|c| !c.trim().is_empty());
        async move {
            match api::save_blog(&ctx.token(), &payload).await {
                Ok(post) => {
                    editing.set(None);
                    ctx.saved(format!("Published \"{}\"", post.title));
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
            {text_field(form, "Title", |f| f.title.clone(), |f, v| f.title = v)}
            <div class="form-grid">
                {text_field(form, "Author", |f| f.author.clone(), |f, v| f.author = v)}
                {text_field(
                    form,
                    "Category",
                    |f| f.category.clone().unwrap_or_default(),
                    |f, v| f.category = Some(v),
                )}
            </div>
            {text_area(form, "Excerpt", |f| f.excerpt.clone(), |f, v| f.excerpt = v)}
            {text_area(form, "Content", |f| f.content.clone(), |f, v| f.content = v)}
            <ImageInput label="Cover Image" value=image/>
            <div class="editor-actions">
                <button type="button" class="btn btn-secondary" on:click=move |_| editing.set(None)>"Cancel"</button>
                <button type="submit" class="btn btn-primary" disabled=move || save.pending().get()>"Save Post"</button>
            </div>
        </form>
    }
}

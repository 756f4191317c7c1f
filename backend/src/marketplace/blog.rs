use serde::{Deserialize, Serialize};

use super::{new_id, slugify, today, Marketplace, Placement};
use crate::error::{MarketplaceResult, ValidationError};
use crate::models::BlogPost;

const DEFAULT_BLOG_CATEGORY: &str = "Insights";

/// Blog editor form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogDraft {
    pub id: Option<String>,
    pub title: String,
    pub slug: Option<String>,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub category: Option<String>,
    pub date: Option<String>,
    pub image: String,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl Marketplace {
    pub fn list_blogs(&self) -> MarketplaceResult<Vec<BlogPost>> {
        self.list()
    }

    pub fn save_blog(&self, draft: BlogDraft) -> MarketplaceResult<BlogPost> {
        if draft.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title".into()).into());
        }

        let id = non_empty(draft.id);
        let existing = id.is_some();
        let post = BlogPost {
            id: id.unwrap_or_else(new_id),
            slug: non_empty(draft.slug).unwrap_or_else(|| slugify(&draft.title)),
            title: draft.title,
            excerpt: draft.excerpt,
            content: draft.content,
            author: draft.author,
            category: non_empty(draft.category).unwrap_or_else(|| DEFAULT_BLOG_CATEGORY.into()),
            date: non_empty(draft.date).unwrap_or_else(today),
            image: draft.image,
        };
        self.upsert(post, existing, Placement::Prepend)
    }

    pub fn delete_blog(&self, id: &str) -> MarketplaceResult<BlogPost> {
        self.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marketplace::tests::marketplace;

    #[test]
    fn test_blog_defaults() {
        let (_dir, market) = marketplace();
        let post = market
            .save_blog(BlogDraft {
                title: "Cloud PBX Buying Guide".into(),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(post.slug, "cloud-pbx-buying-guide");
        assert_eq!(post.category, "Insights");
        assert_eq!(post.date, today());
        assert_eq!(market.list_blogs().unwrap()[0].id, post.id);
    }

    #[test]
    fn test_blog_title_required() {
        let (_dir, market) = marketplace();
        assert!(market.save_blog(BlogDraft::default()).is_err());
    }

    #[test]
    fn test_blog_delete() {
        let (_dir, market) = marketplace();
        let before = market.list_blogs().unwrap().len();
        market.delete_blog("b1").unwrap();
        assert_eq!(market.list_blogs().unwrap().len(), before - 1);
    }
}

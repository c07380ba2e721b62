//! Blog post models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pagination::Page;

/// A blog post as returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Post identifier. Older documents expose it as `_id`.
    #[serde(alias = "_id")]
    pub id: String,

    /// The post title.
    pub title: String,

    /// URL slug used by the public site.
    #[serde(default)]
    pub friendly_url: Option<String>,

    /// Teaser shown in post listings.
    #[serde(default)]
    pub short_description: Option<String>,

    /// Full post body (HTML).
    #[serde(default)]
    pub content: Option<String>,

    /// Cover image.
    #[serde(default)]
    pub image_src: Option<String>,

    #[serde(default)]
    pub author: Option<String>,

    /// Whether the post is published.
    #[serde(default)]
    pub is_active: bool,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl BlogPost {
    /// Path of the post on the public site, when it has a slug.
    pub fn public_path(&self) -> Option<String> {
        self.friendly_url
            .as_deref()
            .filter(|slug| !slug.is_empty())
            .map(|slug| format!("/blog/{slug}"))
    }
}

/// Paginated search result.
pub type FindPostResult = Page<BlogPost>;

/// Input for creating a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogInput {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_src: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// Input for editing a post. Fields left `None` are not sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogInput {
    /// The post to edit.
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_src: Option<String>,
}

/// Query parameters shared by the title search and active-post listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostQuery {
    /// Title filter; `None` leaves the parameter out entirely.
    pub search_input: Option<String>,
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
    /// Field to sort by (e.g. `createdAt`, `title`).
    pub sort_by: String,
    pub asc: bool,
}

impl Default for PostQuery {
    fn default() -> Self {
        Self {
            search_input: None,
            page_number: None,
            page_size: None,
            sort_by: "createdAt".to_string(),
            asc: false,
        }
    }
}

impl PostQuery {
    /// Query for a title search, newest first.
    pub fn search(input: impl Into<String>) -> Self {
        Self {
            search_input: Some(input.into()),
            ..Self::default()
        }
    }

    /// Restrict to a single page.
    #[must_use]
    pub fn page(mut self, page_number: u32, page_size: u32) -> Self {
        self.page_number = Some(page_number);
        self.page_size = Some(page_size);
        self
    }

    #[must_use]
    pub fn sorted_by(mut self, field: impl Into<String>, asc: bool) -> Self {
        self.sort_by = field.into();
        self.asc = asc;
        self
    }
}

//! Mock server state management.
//!
//! Provides the in-memory post store for the mock blog server.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::{BlogPost, CreateBlogInput, UpdateBlogInput};

/// Sort fields the mock server accepts.
pub const SORT_FIELDS: &[&str] = &["createdAt", "updatedAt", "title"];

/// Shared state for the mock server.
///
/// Wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Posts indexed by ID.
    pub posts: HashMap<String, BlogPost>,

    /// Optional authentication token. If set, requests must include this
    /// bearer token.
    pub required_token: Option<String>,

    next_id: u64,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add a post to the state.
    pub fn with_post(mut self, post: BlogPost) -> Self {
        self.posts.insert(post.id.clone(), post);
        self
    }

    /// Set the required authentication token.
    pub fn with_required_token(mut self, token: &str) -> Self {
        self.required_token = Some(token.to_string());
        self
    }

    pub fn get_post(&self, id: &str) -> Option<&BlogPost> {
        self.posts.get(id)
    }

    pub fn get_post_by_friendly_url(&self, slug: &str) -> Option<&BlogPost> {
        self.posts
            .values()
            .find(|p| p.friendly_url.as_deref() == Some(slug))
    }

    /// Store a new post and return it.
    pub fn create_post(&mut self, input: CreateBlogInput) -> &BlogPost {
        self.next_id += 1;
        let id = format!("post-{}", self.next_id);
        let now = Utc::now();
        let post = BlogPost {
            id: id.clone(),
            title: input.title,
            friendly_url: input.friendly_url,
            short_description: input.short_description,
            content: input.content,
            image_src: input.image_src,
            author: input.author,
            is_active: false,
            created_at: Some(now),
            updated_at: Some(now),
        };
        self.posts.entry(id).or_insert(post)
    }

    /// Apply an edit and return the updated post.
    pub fn update_post(&mut self, input: UpdateBlogInput) -> Option<&BlogPost> {
        let post = self.posts.get_mut(&input.id)?;
        if let Some(title) = input.title {
            post.title = title;
        }
        if let Some(url) = input.friendly_url {
            post.friendly_url = Some(url);
        }
        if let Some(desc) = input.short_description {
            post.short_description = Some(desc);
        }
        if let Some(content) = input.content {
            post.content = Some(content);
        }
        if let Some(image) = input.image_src {
            post.image_src = Some(image);
        }
        post.updated_at = Some(Utc::now());
        Some(&*post)
    }

    /// Set the published flag. Returns false if the post does not exist.
    pub fn set_active(&mut self, id: &str, active: bool) -> bool {
        match self.posts.get_mut(id) {
            Some(post) => {
                post.is_active = active;
                true
            }
            None => false,
        }
    }

    /// Posts whose title contains `search` (case-insensitive), sorted.
    pub fn search(
        &self,
        search: Option<&str>,
        active_only: bool,
        sort_by: &str,
        asc: bool,
    ) -> Vec<&BlogPost> {
        let needle = search.map(str::to_lowercase);
        let mut posts: Vec<&BlogPost> = self
            .posts
            .values()
            .filter(|p| !active_only || p.is_active)
            .filter(|p| {
                needle
                    .as_deref()
                    .map(|n| p.title.to_lowercase().contains(n))
                    .unwrap_or(true)
            })
            .collect();

        posts.sort_by(|a, b| {
            let ord = match sort_by {
                "title" => a.title.cmp(&b.title),
                "updatedAt" => a.updated_at.cmp(&b.updated_at),
                _ => a.created_at.cmp(&b.created_at),
            };
            ord.then_with(|| a.id.cmp(&b.id))
        });
        if !asc {
            posts.reverse();
        }
        posts
    }
}

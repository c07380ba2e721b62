//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use chrono::{DateTime, TimeZone, Utc};

use crate::BlogPost;

/// Collection of fixture factories for test data.
pub struct Fixtures;

/// The posts loaded by [`MockServer::start`](super::MockServer::start).
pub struct DefaultScenario {
    pub posts: Vec<BlogPost>,
}

impl Fixtures {
    /// Create a minimal, unpublished post.
    pub fn minimal_post(id: &str, title: &str) -> BlogPost {
        BlogPost {
            id: id.to_string(),
            title: title.to_string(),
            friendly_url: None,
            short_description: None,
            content: None,
            image_src: None,
            author: None,
            is_active: false,
            created_at: None,
            updated_at: None,
        }
    }

    /// Create a published post with a slug.
    pub fn active_post(id: &str, title: &str, friendly_url: &str) -> BlogPost {
        let mut post = Self::minimal_post(id, title);
        post.friendly_url = Some(friendly_url.to_string());
        post.is_active = true;
        post
    }

    /// Create a published post dated `day` days into 2024.
    pub fn dated_post(id: &str, title: &str, friendly_url: &str, day: u32) -> BlogPost {
        let mut post = Self::active_post(id, title, friendly_url);
        post.short_description = Some(format!("{title} in a nutshell"));
        post.content = Some(format!("<p>{title}</p>"));
        post.author = Some("Tutor Team".to_string());
        post.created_at = Some(timestamp(day));
        post.updated_at = Some(timestamp(day));
        post
    }

    /// Default data set: three published posts and one draft.
    pub fn default_scenario() -> DefaultScenario {
        let mut draft = Self::dated_post("post-draft", "Draft Notes", "draft-notes", 20);
        draft.is_active = false;

        DefaultScenario {
            posts: vec![
                Self::dated_post("post-1", "How to Find a Math Tutor", "find-a-math-tutor", 1),
                Self::dated_post("post-2", "IELTS Study Plan", "ielts-study-plan", 5),
                Self::dated_post("post-3", "Paying Tuition Online", "paying-tuition-online", 10),
                draft,
            ],
        }
    }
}

fn timestamp(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0)
        .single()
        .unwrap_or_default()
        + chrono::Duration::days(i64::from(day))
}

//! E2E tests using the mock blog server.
//!
//! These tests exercise full workflows against the mock server,
//! testing realistic scenarios rather than individual endpoints.

#![cfg(feature = "test-server")]

use blogproxy::mock_server::{Fixtures, MockServer, MockState};
use blogproxy::{BlogServiceProxy, CreateBlogInput, PostQuery, UpdateBlogInput};

// =============================================================================
// Server Lifecycle Tests
// =============================================================================

#[tokio::test]
async fn test_server_starts_on_random_port() {
    let server1 = MockServer::start().await;
    let server2 = MockServer::start().await;

    assert_ne!(server1.url(), server2.url());

    server1.shutdown().await;
    server2.shutdown().await;
}

#[tokio::test]
async fn test_server_shutdown_is_clean() {
    let server = MockServer::start().await;
    let url = server.url().to_string();

    server.shutdown().await;

    let blog = BlogServiceProxy::new(&url, None).unwrap();
    let result = blog.get_latest_post().await;

    assert!(matches!(result, Err(blogproxy::ProxyError::Transport(_))));
}

// =============================================================================
// Post Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_create_edit_publish_workflow() {
    let server = MockServer::start_empty().await;
    let blog = BlogServiceProxy::new(server.url(), None).unwrap();

    // Step 1: Create a draft
    let created = blog
        .new_post(&CreateBlogInput {
            title: "Exam Week Checklist".to_string(),
            friendly_url: Some("exam-week-checklist".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to create post")
        .expect("created post");

    assert!(!created.is_active);

    // Step 2: Drafts are not listed as active
    let active = blog
        .get_active_post(&PostQuery::default())
        .await
        .unwrap()
        .unwrap();
    assert!(active.is_empty());

    // Step 3: Edit and publish
    let edited = blog
        .edit(&UpdateBlogInput {
            id: created.id.clone(),
            short_description: Some("Everything to pack".to_string()),
            ..Default::default()
        })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(edited.short_description.as_deref(), Some("Everything to pack"));

    blog.activate(&created.id).await.expect("Failed to activate");

    // Step 4: Visible by slug and in the active listing
    let by_url = blog
        .get_post_by_friendly_url(Some("exam-week-checklist"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_url.id, created.id);
    assert!(by_url.is_active);

    let active = blog
        .get_active_post(&PostQuery::search("exam"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(active.total_count, 1);

    // Step 5: Unpublish
    blog.deactivate(&created.id).await.unwrap();
    let fetched = blog.get_post_by_id(Some(&created.id)).await.unwrap().unwrap();
    assert!(!fetched.is_active);

    server.shutdown().await;
}

#[tokio::test]
async fn test_post_not_found() {
    let server = MockServer::start().await;
    let blog = BlogServiceProxy::new(server.url(), None).unwrap();

    let err = blog.get_post_by_id(Some("nonexistent")).await.unwrap_err();

    let remote = err.as_remote().expect("remote error");
    assert_eq!(remote.status, 404);
    assert_eq!(remote.response, "Post 'nonexistent' not found");

    let err = blog.activate("nonexistent").await.unwrap_err();
    assert_eq!(err.status(), Some(404));

    server.shutdown().await;
}

#[tokio::test]
async fn test_get_post_without_id_is_not_found() {
    let server = MockServer::start().await;
    let blog = BlogServiceProxy::new(server.url(), None).unwrap();

    let err = blog.get_post_by_id(None).await.unwrap_err();
    assert_eq!(err.status(), Some(404));

    server.shutdown().await;
}

// =============================================================================
// Listing Tests
// =============================================================================

#[tokio::test]
async fn test_latest_posts_are_newest_published() {
    let server = MockServer::start().await;
    let blog = BlogServiceProxy::new(server.url(), None).unwrap();

    let page = blog.get_latest_post().await.unwrap().unwrap();
    let ids: Vec<_> = page.iter().map(|p| p.id.as_str()).collect();

    assert_eq!(ids, ["post-3", "post-2", "post-1"]);

    server.shutdown().await;
}

#[tokio::test]
async fn test_search_pagination() {
    let state = (1..=5).fold(MockState::new(), |state, n| {
        state.with_post(Fixtures::dated_post(
            &format!("p{n}"),
            &format!("Tutor Tip {n}"),
            &format!("tip-{n}"),
            n,
        ))
    });
    let server = MockServer::with_state(state).await;
    let blog = BlogServiceProxy::new(server.url(), None).unwrap();

    let query = PostQuery::search("tip").page(2, 2).sorted_by("title", true);
    let page = blog.find_post_by_title(&query).await.unwrap().unwrap();

    let titles: Vec<_> = page.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["Tutor Tip 3", "Tutor Tip 4"]);
    assert_eq!(page.total_count, 5);
    assert!(page.has_more());

    let all = blog
        .find_all_posts(&PostQuery::search("tip").page(1, 2))
        .await
        .unwrap();
    assert_eq!(all.len(), 5);

    server.shutdown().await;
}

#[tokio::test]
async fn test_repeated_reads_are_equal() {
    let server = MockServer::start().await;
    let blog = BlogServiceProxy::new(server.url(), None).unwrap();
    let query = PostQuery::search("tutor");

    let first = blog.find_post_by_title(&query).await.unwrap();
    let second = blog.find_post_by_title(&query).await.unwrap();
    assert_eq!(first, second);

    server.shutdown().await;
}

#[tokio::test]
async fn test_concurrent_reads_do_not_mix_arguments() {
    let server = MockServer::start().await;
    let blog = BlogServiceProxy::new(server.url(), None).unwrap();

    let (math, ielts) = tokio::join!(
        blog.get_post_by_friendly_url(Some("find-a-math-tutor")),
        blog.get_post_by_friendly_url(Some("ielts-study-plan")),
    );

    assert_eq!(math.unwrap().unwrap().id, "post-1");
    assert_eq!(ielts.unwrap().unwrap().id, "post-2");

    server.shutdown().await;
}

#[tokio::test]
async fn test_unknown_sort_field_is_bad_request() {
    let server = MockServer::start().await;
    let blog = BlogServiceProxy::new(server.url(), None).unwrap();

    let query = PostQuery::default().sorted_by("views", false);
    let err = blog.find_post_by_title(&query).await.unwrap_err();

    let remote = err.as_remote().unwrap();
    assert_eq!(remote.status, 400);
    assert_eq!(remote.response, "Cannot sort by 'views'");

    server.shutdown().await;
}

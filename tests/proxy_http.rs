//! HTTP-level tests for the blog operations.
//!
//! Uses wiremock to check the exact requests each operation sends and how
//! responses are interpreted.

use blogproxy::{BlogServiceProxy, CreateBlogInput, PostQuery, UpdateBlogInput};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn post_json(id: &str, title: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "friendlyUrl": "study-tips",
        "isActive": true
    })
}

#[tokio::test]
async fn test_get_post_by_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/blog/getpostbyid/post-1"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(post_json("post-1", "Study Tips")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let blog = BlogServiceProxy::new(&mock_server.uri(), None).unwrap();
    let post = blog.get_post_by_id(Some("post-1")).await.unwrap().unwrap();

    assert_eq!(post.title, "Study Tips");
    assert!(post.is_active);
}

#[tokio::test]
async fn test_get_post_by_friendly_url_encodes_slug() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/blog/getpostbyfriendlyurl/study%20tips"))
        .respond_with(ResponseTemplate::new(200).set_body_json(post_json("post-1", "Study Tips")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let blog = BlogServiceProxy::new(&mock_server.uri(), None).unwrap();
    let post = blog.get_post_by_friendly_url(Some("study tips")).await.unwrap();

    assert_eq!(post.unwrap().id, "post-1");
}

#[tokio::test]
async fn test_find_post_by_title_query() {
    let mock_server = MockServer::start().await;

    let response = serde_json::json!({
        "items": [post_json("post-1", "A B testing")],
        "totalCount": 11,
        "pageNumber": 2,
        "pageSize": 10
    });

    Mock::given(method("GET"))
        .and(path("/blog/findpostbytitle"))
        .and(query_param("searchInput", "a b"))
        .and(query_param("pageNumber", "2"))
        .and(query_param("sortBy", "createdAt"))
        .and(query_param("asc", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .expect(1)
        .mount(&mock_server)
        .await;

    let blog = BlogServiceProxy::new(&mock_server.uri(), None).unwrap();
    let query = PostQuery {
        search_input: Some("a b".to_string()),
        page_number: Some(2),
        ..Default::default()
    };
    let page = blog.find_post_by_title(&query).await.unwrap().unwrap();

    assert_eq!(page.len(), 1);
    assert_eq!(page.total_count, 11);
    assert!(!page.has_more());

    let requests = mock_server.received_requests().await.unwrap();
    let raw_query = requests[0].url.query().unwrap_or_default().to_string();
    assert!(raw_query.starts_with("searchInput=a%20b&pageNumber=2"));
    assert!(!raw_query.contains("pageSize="));
    assert!(!raw_query.ends_with('&'));
}

#[tokio::test]
async fn test_get_active_post_and_latest() {
    let mock_server = MockServer::start().await;

    let page = serde_json::json!({
        "items": [post_json("post-1", "Study Tips")],
        "totalCount": 1,
        "pageNumber": 1,
        "pageSize": 3
    });

    Mock::given(method("GET"))
        .and(path("/blog/getactivepost"))
        .and(query_param("sortBy", "title"))
        .and(query_param("asc", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&page))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/blog/getlastestpost/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&page))
        .expect(1)
        .mount(&mock_server)
        .await;

    let blog = BlogServiceProxy::new(&mock_server.uri(), None).unwrap();
    let active = blog
        .get_active_post(&PostQuery::default().sorted_by("title", true))
        .await
        .unwrap();
    let latest = blog.get_latest_post().await.unwrap();

    assert_eq!(active, latest);
}

#[tokio::test]
async fn test_new_post_sends_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/blog/newpost"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "title": "Study Tips",
            "friendlyUrl": "study-tips"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(post_json("post-9", "Study Tips")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let blog = BlogServiceProxy::new(&mock_server.uri(), None).unwrap();
    let input = CreateBlogInput {
        title: "Study Tips".to_string(),
        friendly_url: Some("study-tips".to_string()),
        ..Default::default()
    };
    let post = blog.new_post(&input).await.unwrap().unwrap();

    assert_eq!(post.id, "post-9");
}

#[tokio::test]
async fn test_edit_with_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/blog/edit"))
        .and(header("authorization", "Bearer admin-token"))
        .and(body_json(serde_json::json!({"id": "post-1", "title": "Renamed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(post_json("post-1", "Renamed")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let blog = BlogServiceProxy::new(&mock_server.uri(), Some("admin-token")).unwrap();
    let input = UpdateBlogInput {
        id: "post-1".to_string(),
        title: Some("Renamed".to_string()),
        ..Default::default()
    };
    let post = blog.edit(&input).await.unwrap().unwrap();

    assert_eq!(post.title, "Renamed");
}

#[tokio::test]
async fn test_activate_and_deactivate() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/blog/activate/post-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/blog/deactivate/post-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let blog = BlogServiceProxy::new(&mock_server.uri(), None).unwrap();
    blog.activate("post-1").await.unwrap();
    blog.deactivate("post-1").await.unwrap();
}

#[tokio::test]
async fn test_no_content_is_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/blog/getpostbyid/post-1"))
        .respond_with(ResponseTemplate::new(204).set_body_string("ignored"))
        .mount(&mock_server)
        .await;

    let blog = BlogServiceProxy::new(&mock_server.uri(), None).unwrap();
    assert!(blog.get_post_by_id(Some("post-1")).await.unwrap().is_none());
}

#[tokio::test]
async fn test_bad_request_surfaces_raw_body_and_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/blog/newpost"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_string("bad input")
                .insert_header("x-request-id", "req-42"),
        )
        .mount(&mock_server)
        .await;

    let blog = BlogServiceProxy::new(&mock_server.uri(), None).unwrap();
    let err = blog
        .new_post(&CreateBlogInput::default())
        .await
        .unwrap_err();

    let remote = err.as_remote().expect("remote error");
    assert_eq!(remote.status, 400);
    assert_eq!(remote.response, "bad input");
    assert_eq!(remote.message, "bad input");
    assert_eq!(remote.headers.get("X-Request-Id"), Some("req-42"));
}

#[tokio::test]
async fn test_invalid_json_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/blog/getlastestpost/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let blog = BlogServiceProxy::new(&mock_server.uri(), None).unwrap();
    let err = blog.get_latest_post().await.unwrap_err();

    assert!(matches!(err, blogproxy::ProxyError::Parse { status: 200, .. }));
}

#[tokio::test]
async fn test_session_cookie_is_sent_back() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/blog/getlastestpost/"))
        .and(header("cookie", "session=abc"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/blog/getpostbyid/post-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(post_json("post-1", "Study Tips"))
                .insert_header("set-cookie", "session=abc; Path=/"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let blog = BlogServiceProxy::new(&mock_server.uri(), None).unwrap();
    blog.get_post_by_id(Some("post-1")).await.unwrap();
    assert!(blog.get_latest_post().await.unwrap().is_none());
}

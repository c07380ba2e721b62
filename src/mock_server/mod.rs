//! Mock blog service for E2E testing.
//!
//! An in-memory server that implements every blog endpoint. Unlike wiremock,
//! which mocks at the HTTP level per test, this server keeps state across
//! requests, so create/edit/activate workflows can be exercised end to end.
//!
//! # Example
//!
//! ```ignore
//! use blogproxy::mock_server::MockServer;
//! use blogproxy::BlogServiceProxy;
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let blog = BlogServiceProxy::new(server.url(), None).unwrap();
//!
//!     let post = blog.get_post_by_id(Some("post-1")).await.unwrap().unwrap();
//!     assert_eq!(post.title, "How to Find a Math Tutor");
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{DefaultScenario, Fixtures};
pub use server::MockServer;
pub use state::MockState;

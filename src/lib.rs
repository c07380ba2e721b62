//! Blog service client library.
//!
//! A schema-driven client for the tutoring marketplace blog REST service.
//! Every remote operation is described once by an [`Endpoint`] descriptor;
//! a single request builder and a single response interpreter serve them
//! all.
//!
//! # Quick Start
//!
//! ```no_run
//! use blogproxy::{BlogServiceProxy, PostQuery};
//!
//! #[tokio::main]
//! async fn main() -> blogproxy::Result<()> {
//!     // Create the operation set from environment variables
//!     let blog = BlogServiceProxy::from_env()?;
//!
//!     // Get a post by ID
//!     if let Some(post) = blog.get_post_by_id(Some("64f0c2")).await? {
//!         println!("Post: {}", post.title);
//!     }
//!
//!     // Search published posts
//!     let query = PostQuery::search("tutor").page(1, 10);
//!     if let Some(page) = blog.get_active_post(&query).await? {
//!         println!("Found {} posts", page.total_count);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Each call runs a linear pipeline:
//!
//! - [`build_request`] validates arguments against the descriptor and
//!   produces an [`HttpRequest`]. Missing required parameters fail here,
//!   before any I/O.
//! - A [`Transport`] sends it. [`ReqwestTransport`] is the default; tests
//!   inject their own.
//! - [`interpret`] maps the [`HttpResponse`] to `Option<T>` or a
//!   [`ProxyError`].
//!
//! [`ApiClient`] runs that pipeline for any descriptor;
//! [`BlogServiceProxy`] exposes the blog endpoints as typed methods.
//!
//! # Configuration
//!
//! - `BLOG_API_URL` (required) - Base URL of the blog service
//! - `BLOG_API_TOKEN` (optional) - Bearer token

pub mod blog;
pub mod cli;
mod client;
mod endpoint;
mod error;
mod http;
#[cfg(feature = "test-server")]
pub mod mock_server;
mod models;
pub mod output;
mod pagination;
mod request;
mod response;
mod transport;

// Re-export core types
pub use client::{ApiClient, TOKEN_ENV, URL_ENV};
pub use endpoint::{Endpoint, Param, ParamLocation, Payload};
pub use error::{ProxyError, RemoteError, Result};
pub use http::{Headers, HttpMethod, HttpRequest, HttpResponse};
pub use pagination::Page;
pub use request::{build_request, ArgValue, Args};
pub use response::interpret;
pub use transport::{ReqwestTransport, Transport};

// Re-export the blog operation set
pub use blog::BlogServiceProxy;

// Re-export models
pub use models::{BlogPost, CreateBlogInput, FindPostResult, PostQuery, UpdateBlogInput};

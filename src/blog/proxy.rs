//! Typed operations of the blog service.

use serde::Serialize;

use super::endpoints;
use crate::client::ApiClient;
use crate::error::{ProxyError, Result};
use crate::models::{BlogPost, CreateBlogInput, FindPostResult, PostQuery, UpdateBlogInput};
use crate::request::Args;

/// Page size used by [`BlogServiceProxy::find_all_posts`].
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Maximum pages to fetch (safety limit).
const MAX_PAGES: u32 = 1000;

/// The blog service's operations, bound to one [`ApiClient`].
///
/// Cheap to clone. Each method is an independent call; results of `None`
/// mean the service answered with no content.
///
/// # Example
///
/// ```no_run
/// use blogproxy::{BlogServiceProxy, PostQuery};
///
/// # async fn example() -> blogproxy::Result<()> {
/// let blog = BlogServiceProxy::new("https://tutors.example.com/api", None)?;
///
/// let page = blog.get_active_post(&PostQuery::search("ielts").page(1, 10)).await?;
/// if let Some(page) = page {
///     for post in &page {
///         println!("{}", post.title);
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BlogServiceProxy {
    client: ApiClient,
}

impl From<ApiClient> for BlogServiceProxy {
    fn from(client: ApiClient) -> Self {
        Self { client }
    }
}

impl BlogServiceProxy {
    /// Bind the blog operations to `base_url` with the default transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn new(base_url: &str, token: Option<&str>) -> Result<Self> {
        ApiClient::new(base_url, token).map(Self::from)
    }

    /// Bind the blog operations using `BLOG_API_URL` / `BLOG_API_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns an error if `BLOG_API_URL` is not set or invalid.
    pub fn from_env() -> Result<Self> {
        ApiClient::from_env().map(Self::from)
    }

    /// The underlying client.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// `POST /blog/newpost`
    pub async fn new_post(&self, input: &CreateBlogInput) -> Result<Option<BlogPost>> {
        let body = to_body(input)?;
        self.client
            .call(&endpoints::NEW_POST, &Args::new(), Some(&body))
            .await
    }

    /// `PUT /blog/edit`
    pub async fn edit(&self, input: &UpdateBlogInput) -> Result<Option<BlogPost>> {
        let body = to_body(input)?;
        self.client
            .call(&endpoints::EDIT, &Args::new(), Some(&body))
            .await
    }

    /// `PUT /blog/activate/{blogId}`
    pub async fn activate(&self, blog_id: &str) -> Result<()> {
        let args = Args::new().set("blogId", blog_id);
        self.client
            .call::<serde_json::Value>(&endpoints::ACTIVATE, &args, None)
            .await
            .map(|_| ())
    }

    /// `PUT /blog/deactivate/{blogId}`
    pub async fn deactivate(&self, blog_id: &str) -> Result<()> {
        let args = Args::new().set("blogId", blog_id);
        self.client
            .call::<serde_json::Value>(&endpoints::DEACTIVATE, &args, None)
            .await
            .map(|_| ())
    }

    /// `GET /blog/findpostbytitle`
    pub async fn find_post_by_title(&self, query: &PostQuery) -> Result<Option<FindPostResult>> {
        self.client
            .call(&endpoints::FIND_POST_BY_TITLE, &query_args(query), None)
            .await
    }

    /// `GET /blog/getactivepost`
    pub async fn get_active_post(&self, query: &PostQuery) -> Result<Option<FindPostResult>> {
        self.client
            .call(&endpoints::GET_ACTIVE_POST, &query_args(query), None)
            .await
    }

    /// `GET /blog/getpostbyid/{blogId}`
    ///
    /// `None` for `blog_id` requests the bare collection path, which the
    /// service answers with 404.
    pub async fn get_post_by_id(&self, blog_id: Option<&str>) -> Result<Option<BlogPost>> {
        let args = Args::new().set_opt("blogId", blog_id);
        self.client
            .call(&endpoints::GET_POST_BY_ID, &args, None)
            .await
    }

    /// `GET /blog/getlastestpost/`
    pub async fn get_latest_post(&self) -> Result<Option<FindPostResult>> {
        self.client
            .call(&endpoints::GET_LATEST_POST, &Args::new(), None)
            .await
    }

    /// `GET /blog/getpostbyfriendlyurl/{friendlyUrl}`
    pub async fn get_post_by_friendly_url(
        &self,
        friendly_url: Option<&str>,
    ) -> Result<Option<BlogPost>> {
        let args = Args::new().set_opt("friendlyUrl", friendly_url);
        self.client
            .call(&endpoints::GET_POST_BY_FRIENDLY_URL, &args, None)
            .await
    }

    /// Fetch every page of a title search.
    ///
    /// Pages are requested with [`DEFAULT_PAGE_SIZE`] unless `query` sets a
    /// page size. Any page number in `query` is ignored. The walk follows the
    /// page size the service reports, so a service that caps it still yields
    /// every post.
    ///
    /// # Errors
    ///
    /// Returns the first error from any page request.
    pub async fn find_all_posts(&self, query: &PostQuery) -> Result<Vec<BlogPost>> {
        let page_size = query.page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1);
        let mut all_items = Vec::new();
        let mut page_number = 1;

        loop {
            let query = PostQuery {
                page_number: Some(page_number),
                page_size: Some(page_size),
                ..query.clone()
            };
            let Some(page) = self.find_post_by_title(&query).await? else {
                break;
            };
            let has_more = page.has_more() && !page.is_empty();
            all_items.extend(page.items);

            if !has_more {
                break;
            }
            page_number += 1;

            // Safety limit to prevent infinite loops
            if page_number > MAX_PAGES {
                tracing::warn!("Reached pagination limit of {} pages, stopping", MAX_PAGES);
                break;
            }
        }

        Ok(all_items)
    }
}

fn to_body<T: Serialize>(input: &T) -> Result<serde_json::Value> {
    serde_json::to_value(input).map_err(ProxyError::Encode)
}

fn query_args(query: &PostQuery) -> Args {
    Args::new()
        .set_opt("searchInput", query.search_input.as_deref())
        .set_opt("pageNumber", query.page_number)
        .set_opt("pageSize", query.page_size)
        .set("sortBy", &query.sort_by)
        .set("asc", query.asc)
}

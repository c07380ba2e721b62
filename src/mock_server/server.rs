//! Mock blog service server.
//!
//! Provides an axum-based HTTP server that simulates the blog service.

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::fixtures::{DefaultScenario, Fixtures};
use super::handlers;
use super::state::MockState;

/// A mock blog service for testing.
///
/// The server runs in the background and can be used to test the client
/// against a stateful implementation of every blog endpoint.
pub struct MockServer {
    /// The URL where the server is listening.
    url: String,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// Shared state that can be modified during tests.
    state: Arc<RwLock<MockState>>,
}

impl MockServer {
    /// Start a new mock server with default fixtures.
    ///
    /// The server listens on a random available port and returns immediately.
    /// Use `url()` to get the server's base URL.
    pub async fn start() -> Self {
        Self::with_state(Self::default_state()).await
    }

    /// Start a mock server with empty state.
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Start a mock server with custom state.
    ///
    /// # Panics
    ///
    /// Panics if no local port can be bound.
    pub async fn with_state(state: MockState) -> Self {
        let shared_state = state.shared();
        let app = Self::create_router(shared_state.clone());

        // Bind to a random available port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            if let Err(err) = axum::serve(listener, app).await {
                tracing::error!(error = %err, "mock server stopped");
            }
        });

        Self {
            url: format!("http://{}", addr),
            handle,
            state: shared_state,
        }
    }

    /// Get the base URL of the mock server.
    ///
    /// Use this URL when creating an `ApiClient` for testing.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get access to the server's shared state.
    pub fn state(&self) -> Arc<RwLock<MockState>> {
        self.state.clone()
    }

    /// Shutdown the server.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    fn default_state() -> MockState {
        Self::state_from_scenario(Fixtures::default_scenario())
    }

    fn state_from_scenario(scenario: DefaultScenario) -> MockState {
        scenario
            .posts
            .into_iter()
            .fold(MockState::new(), MockState::with_post)
    }

    fn create_router(state: Arc<RwLock<MockState>>) -> Router {
        Router::new()
            .route("/blog/newpost", post(handlers::new_post))
            .route("/blog/edit", put(handlers::edit_post))
            .route("/blog/activate/:blog_id", put(handlers::activate_post))
            .route("/blog/deactivate/:blog_id", put(handlers::deactivate_post))
            .route("/blog/findpostbytitle", get(handlers::find_post_by_title))
            .route("/blog/getactivepost", get(handlers::get_active_post))
            .route("/blog/getpostbyid/:blog_id", get(handlers::get_post_by_id))
            .route("/blog/getlastestpost/", get(handlers::get_latest_post))
            .route(
                "/blog/getpostbyfriendlyurl/:friendly_url",
                get(handlers::get_post_by_friendly_url),
            )
            // Health check
            .route("/health", get(health_check))
            .with_state(state)
    }
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}

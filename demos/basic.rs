//! Basic example demonstrating the blog service client.
//!
//! Run with:
//! ```
//! BLOG_API_URL=https://tutors.example.com/api cargo run --example basic
//! ```

use blogproxy::{BlogServiceProxy, PostQuery};

#[tokio::main]
async fn main() -> blogproxy::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create the operation set from environment variables
    println!("Creating blog client...");
    let blog = BlogServiceProxy::from_env()?;
    println!("Connected to: {}", blog.client().base_url());

    // Latest published posts
    println!("\n--- Latest Posts ---");
    match blog.get_latest_post().await? {
        Some(page) => {
            for post in &page {
                println!("  - {} ({})", post.title, post.id);
            }
        }
        None => println!("  (no content)"),
    }

    // Search published posts
    println!("\n--- Searching Active Posts ---");
    let query = PostQuery::search("tutor").page(1, 5);
    let page = blog.get_active_post(&query).await?;
    if let Some(page) = page {
        println!(
            "Found {} posts (page {}/{})",
            page.total_count,
            page.page_number,
            page.total_pages()
        );

        // Fetch the first result by its slug
        if let Some(slug) = page.items.first().and_then(|p| p.friendly_url.clone()) {
            println!("\n--- Getting Post Details ---");
            if let Some(post) = blog.get_post_by_friendly_url(Some(&slug)).await? {
                println!("Post: {}", post.title);
                println!("  ID: {}", post.id);
                println!("  Active: {}", post.is_active);
            }
        }
    }

    // Errors carry the status and raw body
    println!("\n--- Missing Post ---");
    match blog.get_post_by_id(Some("does-not-exist")).await {
        Ok(_) => println!("  unexpectedly found"),
        Err(err) => match err.as_remote() {
            Some(remote) => println!("  {} -> {}", remote.status, remote.response),
            None => println!("  {err}"),
        },
    }

    Ok(())
}

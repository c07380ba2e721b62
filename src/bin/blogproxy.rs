//! Blog service CLI binary.
//!
//! A command-line interface for calling the blog service.

use blogproxy::cli::{Cli, Command};
use blogproxy::output::PrettyPrint;
use blogproxy::{
    BlogPost, BlogServiceProxy, CreateBlogInput, FindPostResult, PostQuery, ProxyError,
    UpdateBlogInput,
};
use clap::Parser;
use std::process::ExitCode;
use tabled::{Table, Tabled};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let Some(url) = cli.url.as_deref() else {
        eprintln!("Error: blog service URL not configured");
        eprintln!("Hint: Set BLOG_API_URL or pass --url");
        return ExitCode::FAILURE;
    };

    let blog = match BlogServiceProxy::new(url, cli.token.as_deref()) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&blog, cli.command, cli.json).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(blog: &BlogServiceProxy, command: Command, json: bool) -> blogproxy::Result<()> {
    match command {
        Command::NewPost {
            title,
            friendly_url,
            description,
            content,
            image_src,
            author,
        } => {
            let input = CreateBlogInput {
                title,
                friendly_url,
                short_description: description,
                content,
                image_src,
                author,
            };
            output_post(blog.new_post(&input).await?, json)
        }
        Command::Edit {
            id,
            title,
            friendly_url,
            description,
            content,
            image_src,
        } => {
            let input = UpdateBlogInput {
                id,
                title,
                friendly_url,
                short_description: description,
                content,
                image_src,
            };
            output_post(blog.edit(&input).await?, json)
        }
        Command::Activate { id } => {
            blog.activate(&id).await?;
            println!("Activated {id}");
            Ok(())
        }
        Command::Deactivate { id } => {
            blog.deactivate(&id).await?;
            println!("Deactivated {id}");
            Ok(())
        }
        Command::Find(args) => {
            let query = PostQuery::from(args);
            output_page(blog.find_post_by_title(&query).await?, json)
        }
        Command::Active(args) => {
            let query = PostQuery::from(args);
            output_page(blog.get_active_post(&query).await?, json)
        }
        Command::Get { id } => output_post(blog.get_post_by_id(Some(&id)).await?, json),
        Command::Latest => output_page(blog.get_latest_post().await?, json),
        Command::ByUrl { friendly_url } => output_post(
            blog.get_post_by_friendly_url(Some(&friendly_url)).await?,
            json,
        ),
    }
}

fn output_post(post: Option<BlogPost>, json: bool) -> blogproxy::Result<()> {
    match post {
        Some(post) if json => println!("{}", to_json(&post)?),
        Some(post) => println!("{}", post.pretty_print()),
        None => println!("(no content)"),
    }
    Ok(())
}

fn output_page(page: Option<FindPostResult>, json: bool) -> blogproxy::Result<()> {
    let Some(page) = page else {
        println!("(no content)");
        return Ok(());
    };

    if json {
        println!("{}", to_json(&page)?);
        return Ok(());
    }

    let rows: Vec<PostRow> = page.iter().map(PostRow::from).collect();
    println!("{}", Table::new(rows));
    if page.has_more() {
        println!(
            "\nPage {}/{} ({} total items)",
            page.page_number,
            page.total_pages(),
            page.total_count
        );
    } else {
        println!("\nPage {} (end, {} total items)", page.page_number, page.total_count);
    }
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> blogproxy::Result<String> {
    serde_json::to_string_pretty(value).map_err(ProxyError::Encode)
}

// Table row types for non-JSON output

#[derive(Tabled)]
struct PostRow {
    id: String,
    title: String,
    status: &'static str,
    created: String,
}

impl From<&BlogPost> for PostRow {
    fn from(p: &BlogPost) -> Self {
        Self {
            id: p.id.clone(),
            title: p.title.clone(),
            status: if p.is_active { "active" } else { "inactive" },
            created: p
                .created_at
                .map(|c| c.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }
}

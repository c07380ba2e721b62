//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the
//! blogproxy binary.

use clap::{Args, Parser, Subcommand};

use crate::{PostQuery, TOKEN_ENV, URL_ENV};

/// Blog service command-line interface.
#[derive(Parser, Debug)]
#[command(name = "blogproxy", about = "Blog service CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Base URL of the blog service.
    #[arg(long, global = true, env = URL_ENV)]
    pub url: Option<String>,

    /// Bearer token sent with every request.
    #[arg(long, global = true, env = TOKEN_ENV, hide_env_values = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a post.
    NewPost {
        /// Post title.
        #[arg(long)]
        title: String,

        /// URL slug.
        #[arg(long)]
        friendly_url: Option<String>,

        /// Short description shown in listings.
        #[arg(long)]
        description: Option<String>,

        /// Post body.
        #[arg(long)]
        content: Option<String>,

        /// Cover image URL.
        #[arg(long)]
        image_src: Option<String>,

        /// Author name.
        #[arg(long)]
        author: Option<String>,
    },

    /// Edit an existing post.
    Edit {
        /// ID of the post to edit.
        id: String,

        /// New title.
        #[arg(long)]
        title: Option<String>,

        /// New URL slug.
        #[arg(long)]
        friendly_url: Option<String>,

        /// New short description.
        #[arg(long)]
        description: Option<String>,

        /// New post body.
        #[arg(long)]
        content: Option<String>,

        /// New cover image URL.
        #[arg(long)]
        image_src: Option<String>,
    },

    /// Publish a post.
    Activate {
        /// ID of the post.
        id: String,
    },

    /// Unpublish a post.
    Deactivate {
        /// ID of the post.
        id: String,
    },

    /// Search all posts by title.
    Find(SearchArgs),

    /// Search published posts by title.
    Active(SearchArgs),

    /// Get a post by ID.
    Get {
        /// ID of the post.
        id: String,
    },

    /// List the latest published posts.
    Latest,

    /// Get a post by its URL slug.
    ByUrl {
        /// The post's friendly URL.
        friendly_url: String,
    },
}

/// Search and pagination options.
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Title filter.
    pub search: Option<String>,

    /// Page number (1-indexed).
    #[arg(long)]
    pub page: Option<u32>,

    /// Number of items per page.
    #[arg(long)]
    pub count: Option<u32>,

    /// Field to sort by.
    #[arg(long, default_value = "createdAt")]
    pub sort_by: String,

    /// Sort ascending instead of newest first.
    #[arg(long)]
    pub asc: bool,
}

impl From<SearchArgs> for PostQuery {
    fn from(args: SearchArgs) -> Self {
        Self {
            search_input: args.search,
            page_number: args.page,
            page_size: args.count,
            sort_by: args.sort_by,
            asc: args.asc,
        }
    }
}

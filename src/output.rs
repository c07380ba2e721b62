//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use crate::BlogPost;

/// Trait for human-readable key-value output.
///
/// Implemented by entity types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for BlogPost {
    fn pretty_print(&self) -> String {
        let header = format!("Post: {}", self.id);
        let divider = "─".repeat(header.len().max(30));

        let mut lines = vec![
            header,
            divider,
            format!("Title:          {}", self.title),
            format!("Status:         {}", if self.is_active { "active" } else { "inactive" }),
        ];

        if let Some(path) = self.public_path() {
            lines.push(format!("URL:            {}", path));
        }

        if let Some(ref author) = self.author {
            lines.push(format!("Author:         {}", author));
        }

        if let Some(ref summary) = self.short_description {
            lines.push(format!("Summary:        {}", summary));
        }

        if let Some(ref created) = self.created_at {
            lines.push(format!("Created:        {}", created.format("%Y-%m-%d %H:%M:%S UTC")));
        }

        if let Some(ref updated) = self.updated_at {
            lines.push(format!("Updated:        {}", updated.format("%Y-%m-%d %H:%M:%S UTC")));
        }

        lines.join("\n")
    }
}

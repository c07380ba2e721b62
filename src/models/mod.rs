//! Blog service model types.

mod post;

pub use post::*;

//! Static descriptions of remote operations.
//!
//! Every remote operation is one [`Endpoint`] value. The request builder and
//! the response interpreter are written once and read their per-operation
//! behavior from these tables.

use crate::http::HttpMethod;

/// Where a parameter is placed in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    /// Substituted into a `{name}` placeholder of the path template.
    Path,
    /// Appended to the query string.
    Query,
}

/// One declared parameter of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    pub name: &'static str,
    pub location: ParamLocation,
    /// Must be defined and non-null.
    pub required: bool,
}

impl Param {
    pub const fn path(name: &'static str) -> Self {
        Self {
            name,
            location: ParamLocation::Path,
            required: true,
        }
    }

    pub const fn query(name: &'static str) -> Self {
        Self {
            name,
            location: ParamLocation::Query,
            required: true,
        }
    }

    pub const fn optional(self) -> Self {
        Self {
            required: false,
            ..self
        }
    }
}

/// Whether a request or response carries a JSON payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload {
    Json,
    None,
}

/// Static definition of one remote operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Operation name, used in errors and tracing.
    pub name: &'static str,
    pub method: HttpMethod,
    /// Path relative to the base URL, with `{name}` placeholders.
    pub path: &'static str,
    /// Declared parameters. Query parameters are emitted in this order.
    pub params: &'static [Param],
    pub body: Payload,
    pub response: Payload,
}

impl Endpoint {
    /// Look up a declared parameter by name.
    pub fn param(&self, name: &str) -> Option<&Param> {
        self.params.iter().find(|p| p.name == name)
    }
}

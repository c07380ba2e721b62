//! Request building from endpoint descriptors.
//!
//! [`build_request`] validates caller arguments against an [`Endpoint`] and
//! produces an [`HttpRequest`]. Validation always runs to completion before
//! any part of the request is assembled.

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::endpoint::{Endpoint, ParamLocation, Payload};
use crate::error::{ProxyError, Result};
use crate::http::{Headers, HttpRequest};

/// A caller-supplied argument value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    /// Explicitly null.
    Null,
    /// The value in its string form, before encoding.
    Value(String),
}

/// Named arguments for one call.
///
/// A name that was never set is *undefined*. Undefined and null are both
/// rejected for required parameters. Optional parameters that are undefined
/// are left out of the request; an explicit null is sent as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    values: BTreeMap<String, ArgValue>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to a value.
    #[must_use]
    pub fn set(mut self, name: &str, value: impl Display) -> Self {
        self.values
            .insert(name.to_string(), ArgValue::Value(value.to_string()));
        self
    }

    /// Set `name` when `value` is `Some`; leave it undefined otherwise.
    #[must_use]
    pub fn set_opt<V: Display>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.set(name, v),
            None => self,
        }
    }

    /// Set `name` to an explicit null.
    #[must_use]
    pub fn null(mut self, name: &str) -> Self {
        self.values.insert(name.to_string(), ArgValue::Null);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values.get(name)
    }

    /// The value of `name` if it is defined and non-null.
    pub fn value(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(ArgValue::Value(v)) => Some(v),
            _ => None,
        }
    }

    /// The wire form of `name`: its value, `null` for an explicit null, or
    /// `None` when undefined.
    pub fn rendered(&self, name: &str) -> Option<&str> {
        match self.values.get(name)? {
            ArgValue::Null => Some("null"),
            ArgValue::Value(v) => Some(v),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

/// Validate `args` against `endpoint` and build the request.
///
/// `base_url` must not end with `/`. A non-empty `token` is sent as a
/// bearer credential.
pub fn build_request(
    endpoint: &Endpoint,
    base_url: &str,
    token: Option<&str>,
    args: &Args,
    body: Option<&serde_json::Value>,
) -> Result<HttpRequest> {
    validate(endpoint, args, body)?;

    let mut url = format!("{base_url}{}", expand_path(endpoint, args));

    let mut query = endpoint
        .params
        .iter()
        .filter(|p| p.location == ParamLocation::Query)
        .peekable();
    if query.peek().is_some() {
        url.push('?');
        for param in query {
            if let Some(value) = args.rendered(param.name) {
                url.push_str(param.name);
                url.push('=');
                url.push_str(&urlencoding::encode(value));
                url.push('&');
            }
        }
    }
    if url.ends_with(|c: char| c == '?' || c == '&') {
        url.pop();
    }

    let mut headers = Headers::new();
    headers.insert("Content-Type", "application/json");
    if let Some(token) = token.filter(|t| !t.is_empty()) {
        headers.insert("Authorization", format!("Bearer {token}"));
    }

    let body = match (endpoint.body, body) {
        (Payload::Json, Some(value)) => {
            Some(serde_json::to_string(value).map_err(ProxyError::Encode)?)
        }
        _ => None,
    };

    Ok(HttpRequest {
        method: endpoint.method,
        url,
        headers,
        body,
        include_credentials: true,
    })
}

fn validate(endpoint: &Endpoint, args: &Args, body: Option<&serde_json::Value>) -> Result<()> {
    if let Some(unknown) = args.names().find(|name| endpoint.param(name).is_none()) {
        return Err(ProxyError::UnknownParameter {
            operation: endpoint.name,
            parameter: unknown.to_string(),
        });
    }

    if let Some(missing) = endpoint
        .params
        .iter()
        .find(|p| p.required && args.value(p.name).is_none())
    {
        return Err(ProxyError::MissingParameter {
            operation: endpoint.name,
            parameter: missing.name.to_string(),
        });
    }

    if endpoint.body == Payload::Json && body.is_none() {
        return Err(ProxyError::MissingBody {
            operation: endpoint.name,
        });
    }

    Ok(())
}

fn expand_path(endpoint: &Endpoint, args: &Args) -> String {
    endpoint
        .params
        .iter()
        .filter(|p| p.location == ParamLocation::Path)
        .fold(endpoint.path.to_string(), |path, param| {
            let value = args.rendered(param.name).unwrap_or_default();
            path.replace(
                &format!("{{{}}}", param.name),
                &urlencoding::encode(value),
            )
        })
}

//! Hypermedia links embedded in every response.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, OriginalUri};
use axum::http::header::HOST;
use axum::http::request::Parts;
use serde::Serialize;

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// The `links` member of a response body. Absent links are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Links {
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub todos: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<String>,
}

impl Links {
    pub fn to_self(url: impl Into<String>) -> Self {
        Self {
            self_link: Some(url.into()),
            ..Self::default()
        }
    }
}

/// `scheme://host/path` of the current request, without the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Append one path segment, dropping a trailing slash from the base first.
    pub fn join(&self, segment: impl std::fmt::Display) -> String {
        let base = self.0.strip_suffix('/').unwrap_or(&self.0);
        format!("{base}/{segment}")
    }
}

impl<S: Send + Sync> FromRequestParts<S> for BaseUrl {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let uri = parts
            .extensions
            .get::<OriginalUri>()
            .map_or(&parts.uri, |original| &original.0);

        let scheme = uri
            .scheme_str()
            .or_else(|| header_str(parts, FORWARDED_PROTO))
            .unwrap_or("http");
        let host = uri
            .authority()
            .map(|authority| authority.as_str())
            .or_else(|| header_str(parts, HOST.as_str()))
            .unwrap_or("localhost");

        Ok(Self(format!("{scheme}://{host}{}", uri.path())))
    }
}

fn header_str<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts.headers.get(name).and_then(|value| value.to_str().ok())
}

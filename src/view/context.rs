//! Render context: what the link renderer needs to know about the request

use crate::error::{Error, Result};
use crate::params::{parse_nested_query, to_query};
use crate::types::ParamMap;
use axum::http::{Method, Uri};
use url::Url;

/// The request-side collaborator of the link renderer
pub trait RenderContext {
    /// Whether the current request is a read (`GET`) request
    fn is_get_request(&self) -> bool;

    /// Parameters of the current request
    fn params(&self) -> &ParamMap;

    /// Build the URL for a parameter map
    ///
    /// With `escape` the URL comes back HTML-escaped, otherwise raw. Every key
    /// of `params` ends up in the query string, including one named `escape`.
    fn url_for(&self, params: &ParamMap, escape: bool) -> Result<String>;
}

/// A `RenderContext` for a concrete HTTP request
///
/// Links point at the request's own path (and origin, when built from an
/// absolute URL) with the given parameters as query string.
#[derive(Debug, Clone)]
pub struct RequestContext {
    method: Method,
    origin: String,
    path: String,
    params: ParamMap,
}

impl RequestContext {
    /// Create a context from its parts
    pub fn new(method: Method, path: impl Into<String>, params: ParamMap) -> Self {
        Self {
            method,
            origin: String::new(),
            path: path.into(),
            params,
        }
    }

    /// Create a context from a request method and URI, as seen by an axum handler
    pub fn from_parts(method: &Method, uri: &Uri) -> Self {
        let params = uri.query().map(parse_nested_query).unwrap_or_default();
        Self::new(method.clone(), uri.path(), params)
    }

    /// Create a context from a method and a URL
    ///
    /// Absolute URLs (`https://example.com/posts?sort=name`) keep their origin
    /// in generated links; paths (`/posts?sort=name`) stay relative.
    pub fn parse(method: Method, url: &str) -> Result<Self> {
        if url.starts_with('/') {
            let uri: Uri = url
                .parse()
                .map_err(|e| Error::url_build(format!("invalid request path '{url}': {e}")))?;
            return Ok(Self::from_parts(&method, &uri));
        }

        let parsed = Url::parse(url)?;
        let params = parsed.query().map(parse_nested_query).unwrap_or_default();
        Ok(Self {
            method,
            origin: parsed.origin().ascii_serialization(),
            path: parsed.path().to_string(),
            params,
        })
    }

    /// The request method
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The request path
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl RenderContext for RequestContext {
    fn is_get_request(&self) -> bool {
        self.method == Method::GET
    }

    fn params(&self) -> &ParamMap {
        &self.params
    }

    fn url_for(&self, params: &ParamMap, escape: bool) -> Result<String> {
        let query = to_query(params);
        let url = if query.is_empty() {
            format!("{}{}", self.origin, self.path)
        } else {
            format!("{}{}?{query}", self.origin, self.path)
        };

        Ok(if escape { url.replace('&', "&amp;") } else { url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::JsonValue;
    use serde_json::json;

    fn map(value: JsonValue) -> ParamMap {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_from_parts_parses_query() {
        let uri: Uri = "/posts?sort=name&filter[tag]=rust".parse().unwrap();
        let ctx = RequestContext::from_parts(&Method::GET, &uri);
        assert!(ctx.is_get_request());
        assert_eq!(ctx.path(), "/posts");
        assert_eq!(
            JsonValue::Object(ctx.params().clone()),
            json!({"sort": "name", "filter": {"tag": "rust"}})
        );
    }

    #[test]
    fn test_post_is_not_a_get_request() {
        let ctx = RequestContext::parse(Method::POST, "/posts").unwrap();
        assert!(!ctx.is_get_request());
    }

    #[test]
    fn test_parse_absolute_url_keeps_origin() {
        let ctx = RequestContext::parse(Method::GET, "https://example.com:8443/posts?page=2").unwrap();
        let url = ctx
            .url_for(&map(json!({"page": 3})), false)
            .unwrap();
        assert_eq!(url, "https://example.com:8443/posts?page=3");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(RequestContext::parse(Method::GET, "not a url").is_err());
    }

    #[test]
    fn test_url_for_escapes_by_default() {
        let ctx = RequestContext::new(Method::GET, "/posts", ParamMap::new());
        let params = map(json!({"page": 2, "sort": "name"}));
        assert_eq!(ctx.url_for(&params, true).unwrap(), "/posts?page=2&amp;sort=name");
        assert_eq!(ctx.url_for(&params, false).unwrap(), "/posts?page=2&sort=name");
    }

    #[test]
    fn test_url_for_keeps_escape_param() {
        let ctx = RequestContext::new(Method::GET, "/posts", ParamMap::new());
        let params = map(json!({"escape": "1", "page": 2}));
        assert_eq!(ctx.url_for(&params, false).unwrap(), "/posts?escape=1&page=2");
    }

    #[test]
    fn test_url_for_without_params() {
        let ctx = RequestContext::new(Method::GET, "/posts", ParamMap::new());
        assert_eq!(ctx.url_for(&ParamMap::new(), false).unwrap(), "/posts");
    }
}

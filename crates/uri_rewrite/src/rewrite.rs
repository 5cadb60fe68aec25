// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::query::set_query_parameter;
use crate::route::set_route_parameter;
use crate::Result;

/// Rewrites parameters of a URI while keeping its representation.
///
/// Strings produce strings and an [`http::Uri`] produces a new [`http::Uri`]. The receiver is
/// never modified.
///
/// ```
/// use uri_rewrite::RewriteUri;
///
/// let uri: http::Uri = "http://test.com".parse()?;
/// let rewritten = uri.with_query_parameter("a", Some("b"))?;
/// assert_eq!(rewritten.to_string(), "http://test.com/?a=b");
///
/// let link = "http://test.com/a/b".with_route_parameter("a", Some("x"))?;
/// assert_eq!(link, "http://test.com/a/x");
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
pub trait RewriteUri {
    /// The type produced by a rewrite.
    type Output;

    /// Sets the query parameter `key` to `value`, see [`set_query_parameter`].
    ///
    /// # Errors
    ///
    /// Returns an error if `key` is empty, or if a structured URI no longer parses after the
    /// rewrite.
    fn with_query_parameter(&self, key: &str, value: Option<&str>) -> Result<Self::Output>;

    /// Sets the route parameter `key` to `value`, see [`set_route_parameter`].
    ///
    /// # Errors
    ///
    /// Returns an error if `key` is empty or contains a `/`, or if a structured URI no longer
    /// parses after the rewrite.
    fn with_route_parameter(&self, key: &str, value: Option<&str>) -> Result<Self::Output>;
}

impl RewriteUri for str {
    type Output = String;

    fn with_query_parameter(&self, key: &str, value: Option<&str>) -> Result<String> {
        set_query_parameter(self, key, value)
    }

    fn with_route_parameter(&self, key: &str, value: Option<&str>) -> Result<String> {
        set_route_parameter(self, key, value)
    }
}

impl RewriteUri for String {
    type Output = Self;

    fn with_query_parameter(&self, key: &str, value: Option<&str>) -> Result<Self> {
        set_query_parameter(self, key, value)
    }

    fn with_route_parameter(&self, key: &str, value: Option<&str>) -> Result<Self> {
        set_route_parameter(self, key, value)
    }
}

impl RewriteUri for http::Uri {
    type Output = Self;

    fn with_query_parameter(&self, key: &str, value: Option<&str>) -> Result<Self> {
        let rewritten = set_query_parameter(&self.to_string(), key, value)?;
        Ok(Self::try_from(rewritten)?)
    }

    fn with_route_parameter(&self, key: &str, value: Option<&str>) -> Result<Self> {
        let rewritten = set_route_parameter(&self.to_string(), key, value)?;
        Ok(Self::try_from(rewritten)?)
    }
}

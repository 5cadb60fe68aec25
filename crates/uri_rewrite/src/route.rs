// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Setting and reading `/key/value` route parameters on serialized URIs.

use std::ops::Range;

use regex::Regex;

use crate::splice::splice;
use crate::{Error, ErrorKind, Result, emit_rewrite};

/// Sets the route parameter `key` to `value` in a serialized URI.
///
/// A route parameter is a pair of path segments, `/key/value`. The first segment equal to
/// `key` is rewritten together with the segment that follows it. When no segment matches,
/// `key/value` is appended to the path, after a `/` if the path does not already end in one.
/// The query and fragment are left where they are.
///
/// A missing `value` is written as the empty string (`key/`).
///
/// # Errors
///
/// Returns an [`ErrorKind::InvalidArgument`] error if `uri` or `key` is empty, or if `key`
/// contains a `/`.
///
/// # Examples
///
/// ```
/// use uri_rewrite::route::set_route_parameter;
///
/// assert_eq!(set_route_parameter("http://test.com", "a", Some("b"))?, "http://test.com/a/b");
/// assert_eq!(set_route_parameter("http://test.com/a/b", "a", Some("x"))?, "http://test.com/a/x");
/// # Ok::<_, uri_rewrite::Error>(())
/// ```
pub fn set_route_parameter(uri: &str, key: &str, value: Option<&str>) -> Result<String> {
    if uri.is_empty() {
        return Err(Error::invalid_argument("uri must not be empty"));
    }
    if key.is_empty() {
        return Err(Error::invalid_argument("key must not be empty"));
    }
    if key.contains('/') {
        return Err(Error::invalid_argument("key must be a single path segment"));
    }

    let value = value.unwrap_or_default();
    let path = path_span(uri);

    let pattern = segment_pattern(key)?;
    let found = pattern
        .captures(&uri[path.clone()])
        .and_then(|captures| captures.name("param"))
        .map(|param| path.start + param.start()..path.start + param.end());

    if let Some(span) = found {
        emit_rewrite("route", key, "replace");
        return Ok(splice(uri, span, &[key, "/", value]));
    }

    let separator = if uri[path.clone()].ends_with('/') { "" } else { "/" };
    emit_rewrite("route", key, "insert");
    Ok(splice(uri, path.end..path.end, &[separator, key, "/", value]))
}

/// Returns the segment that follows the first path segment equal to `key`.
///
/// `/key` at the very end of the path, or `/key/` followed by nothing, reads as `""`.
///
/// ```
/// use uri_rewrite::route::route_parameter;
///
/// assert_eq!(route_parameter("/users/42/posts/7", "posts"), Some("7"));
/// assert_eq!(route_parameter("/users/42", "user"), None);
/// ```
#[must_use]
pub fn route_parameter<'a>(uri: &'a str, key: &str) -> Option<&'a str> {
    if key.is_empty() || key.contains('/') {
        return None;
    }

    let path = path_span(uri);
    let captures = segment_pattern(key).ok()?.captures(&uri[path])?;

    Some(captures.name("value").map_or("", |value| value.as_str()))
}

/// The path component: after `scheme://authority` or a scheme-relative `//authority`, up to
/// the query, fragment or end.
fn path_span(uri: &str) -> Range<usize> {
    let end = uri.find(['?', '#']).unwrap_or(uri.len());

    let authority = if uri.starts_with("//") {
        Some("//".len())
    } else {
        uri[..end]
            .find("://")
            .filter(|&scheme_end| is_scheme(&uri[..scheme_end]))
            .map(|scheme_end| scheme_end + "://".len())
    };

    let start = authority.map_or(0, |authority| {
        uri[authority..end].find('/').map_or(end, |offset| authority + offset)
    });

    start..end
}

fn is_scheme(candidate: &str) -> bool {
    !candidate.is_empty() && candidate.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Matches `/key` as a whole segment, optionally followed by `/value`.
///
/// The `param` group covers the key and its value, the `value` group only the value.
/// The pattern is built and compiled on every call.
fn segment_pattern(key: &str) -> Result<Regex> {
    let pattern = format!(r"/(?P<param>{}(?:/(?P<value>[^/]*))?)(?:/|$)", regex::escape(key));

    Regex::new(&pattern).map_err(|e| Error::caused_by(ErrorKind::InvalidArgument, e))
}

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Setting and reading query parameters on serialized URIs.

use std::ops::Range;

use regex::Regex;

use crate::splice::splice;
use crate::{Error, ErrorKind, Result, emit_rewrite};

/// Sets the query parameter `key` to `value` in a serialized URI.
///
/// The first occurrence of `key` in the query component is replaced in place, whether it is
/// written as `key=value`, `key=` or a bare `key` stub. When `key` is absent, `key=value` is
/// appended after a `&`, or after a `?` if the URI has no query yet. Every other character
/// of the input is kept verbatim, including the order and spelling of other parameters.
///
/// A missing `value` is written as the empty string (`key=`). Neither `key` nor `value` are
/// percent-encoded; the caller supplies URL-safe text.
///
/// # Errors
///
/// Returns an [`ErrorKind::InvalidArgument`] error if `uri` or `key` is empty.
///
/// # Examples
///
/// ```
/// use uri_rewrite::query::set_query_parameter;
///
/// let uri = set_query_parameter("http://test.com/?x=y&c=d", "a", Some("b"))?;
/// assert_eq!(uri, "http://test.com/?x=y&c=d&a=b");
///
/// let uri = set_query_parameter(&uri, "x", Some("z"))?;
/// assert_eq!(uri, "http://test.com/?x=z&c=d&a=b");
/// # Ok::<_, uri_rewrite::Error>(())
/// ```
pub fn set_query_parameter(uri: &str, key: &str, value: Option<&str>) -> Result<String> {
    if uri.is_empty() {
        return Err(Error::invalid_argument("uri must not be empty"));
    }
    if key.is_empty() {
        return Err(Error::invalid_argument("key must not be empty"));
    }

    let value = value.unwrap_or_default();

    let Some(query) = query_span(uri) else {
        let end = uri.find('#').unwrap_or(uri.len());
        emit_rewrite("query", key, "insert");
        return Ok(splice(uri, end..end, &["?", key, "=", value]));
    };

    let pattern = parameter_pattern(key)?;
    let found = pattern
        .captures(&uri[query.clone()])
        .and_then(|captures| captures.name("param"))
        .map(|param| query.start + param.start()..query.start + param.end());

    if let Some(span) = found {
        emit_rewrite("query", key, "replace");
        return Ok(splice(uri, span, &[key, "=", value]));
    }

    // A lone `?` already is the separator.
    let separator = if query.len() == 1 { "" } else { "&" };
    emit_rewrite("query", key, "insert");
    Ok(splice(uri, query.end..query.end, &[separator, key, "=", value]))
}

/// Returns the value of the first occurrence of query parameter `key`.
///
/// A stub parameter (`?flag`) and an explicitly empty one (`?flag=`) both read as `""`.
/// Returns `None` when the parameter is absent or `key` is empty.
///
/// ```
/// use uri_rewrite::query::query_parameter;
///
/// assert_eq!(query_parameter("/search?q=rust&page=2", "page"), Some("2"));
/// assert_eq!(query_parameter("/search?q=rust&verbose", "verbose"), Some(""));
/// assert_eq!(query_parameter("/search?qq=rust", "q"), None);
/// ```
#[must_use]
pub fn query_parameter<'a>(uri: &'a str, key: &str) -> Option<&'a str> {
    if key.is_empty() {
        return None;
    }

    let query = query_span(uri)?;
    let captures = parameter_pattern(key).ok()?.captures(&uri[query])?;

    Some(captures.name("value").map_or("", |value| value.as_str()))
}

/// The query component, from the `?` up to the fragment or the end of the string.
///
/// A `?` inside the fragment does not start a query.
fn query_span(uri: &str) -> Option<Range<usize>> {
    let end = uri.find('#').unwrap_or(uri.len());
    let start = uri[..end].find('?')?;

    Some(start..end)
}

/// Matches `key` preceded by `?` or `&` and followed by `=`, a delimiter or the end.
///
/// The `param` group covers the key and its value, the `value` group only the value.
/// The pattern is built and compiled on every call.
fn parameter_pattern(key: &str) -> Result<Regex> {
    let pattern = format!(r"[?&](?P<param>{}(?:=(?P<value>[^&/]*))?)(?:[&/]|$)", regex::escape(key));

    Regex::new(&pattern).map_err(|e| Error::caused_by(ErrorKind::InvalidArgument, e))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use tracing_test::traced_test;

    use super::*;

    #[rstest]
    #[case::no_query("http://test.com", "a", "b", "http://test.com?a=b")]
    #[case::root_path_no_query("http://test.com/", "a", "b", "http://test.com/?a=b")]
    #[case::replace("http://test.com/?a=b", "a", "x", "http://test.com/?a=x")]
    #[case::append("http://test.com/?x=y&c=d", "a", "b", "http://test.com/?x=y&c=d&a=b")]
    #[case::replace_middle("/p?x=1&a=2&y=3", "a", "9", "/p?x=1&a=9&y=3")]
    #[case::stub_in_middle("/p?x=1&flag&y=2", "flag", "on", "/p?x=1&flag=on&y=2")]
    #[case::stub_at_end("/p?flag", "flag", "on", "/p?flag=on")]
    #[case::explicit_empty("/p?a=&b=2", "a", "1", "/p?a=1&b=2")]
    #[case::prefix_key("http://test.com/?ab=1", "a", "2", "http://test.com/?ab=1&a=2")]
    #[case::suffix_key("/p?ba=1", "a", "2", "/p?ba=1&a=2")]
    #[case::first_occurrence_only("/p?a=1&a=2", "a", "9", "/p?a=9&a=2")]
    #[case::value_run_ends_at_slash("/p?a=1/2&b", "a", "9", "/p?a=9/2&b")]
    #[case::empty_query("http://test.com/?", "a", "b", "http://test.com/?a=b")]
    #[case::fragment_without_query("/p#top", "a", "b", "/p?a=b#top")]
    #[case::fragment_after_query("/p?x=1#top", "a", "b", "/p?x=1&a=b#top")]
    #[case::question_mark_in_fragment("/p#sec?x=1", "a", "b", "/p?a=b#sec?x=1")]
    #[case::key_in_fragment_query("/p?y=1#sec?a=1", "a", "b", "/p?y=1&a=b#sec?a=1")]
    #[case::regex_metacharacters("/p?axb=1", "a.b", "2", "/p?axb=1&a.b=2")]
    #[case::case_sensitive("/p?A=1", "a", "2", "/p?A=1&a=2")]
    #[case::key_in_path_is_ignored("/a=1?b=2", "a", "3", "/a=1?b=2&a=3")]
    fn set_query_parameter_cases(#[case] uri: &str, #[case] key: &str, #[case] value: &str, #[case] expected: &str) {
        assert_eq!(set_query_parameter(uri, key, Some(value)).unwrap(), expected);
    }

    #[test]
    fn missing_value_becomes_empty() {
        assert_eq!(set_query_parameter("/p", "a", None).unwrap(), "/p?a=");
        assert_eq!(set_query_parameter("/p?a=b&c", "a", None).unwrap(), "/p?a=&c");
        assert_eq!(set_query_parameter("/p?a", "a", None).unwrap(), "/p?a=");
    }

    #[test]
    fn empty_key_is_rejected() {
        let error = set_query_parameter("http://test.com", "", Some("b")).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
        assert!(error.to_string().contains("key must not be empty"));
    }

    #[test]
    fn empty_uri_is_rejected() {
        let error = set_query_parameter("", "a", Some("b")).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn rewriting_twice_converges() {
        let base = "http://test.com/?x=y&c=d";

        let twice = set_query_parameter(&set_query_parameter(base, "a", Some("1")).unwrap(), "a", Some("2")).unwrap();
        let once = set_query_parameter(base, "a", Some("2")).unwrap();

        assert_eq!(twice, once);
        assert_eq!(twice.matches("a=").count(), 1);
    }

    #[test]
    fn other_parameters_are_untouched() {
        let uri = "/p?Zeta=1&alpha=%20x&flag&a=old&omega=";
        let rewritten = set_query_parameter(uri, "a", Some("new")).unwrap();

        assert_eq!(rewritten, "/p?Zeta=1&alpha=%20x&flag&a=new&omega=");
    }

    #[test]
    fn written_value_reads_back() {
        let uri = set_query_parameter("/p?x=1&flag", "page", Some("7")).unwrap();

        assert_eq!(query_parameter(&uri, "page"), Some("7"));
        assert_eq!(query_parameter(&uri, "x"), Some("1"));
        assert_eq!(query_parameter(&uri, "flag"), Some(""));
    }

    #[test]
    fn query_parameter_misses() {
        assert_eq!(query_parameter("/p", "a"), None);
        assert_eq!(query_parameter("/p?ab=1", "a"), None);
        assert_eq!(query_parameter("/p?a=1", ""), None);
        assert_eq!(query_parameter("/p#a=1", "a"), None);
        assert_eq!(query_parameter("/p#sec?a=1", "a"), None);
        assert_eq!(query_parameter("/p?x=1#sec?a=1", "a"), None);
    }

    #[test]
    fn query_parameter_stops_at_fragment() {
        assert_eq!(query_parameter("/p?a=1#frag", "a"), Some("1"));
    }

    #[test]
    #[traced_test]
    fn rewrite_is_logged() {
        set_query_parameter("/p?a=1", "a", Some("2")).unwrap();
        set_query_parameter("/p?a=1", "b", Some("2")).unwrap();

        assert!(logs_contain("replace"));
        assert!(logs_contain("insert"));
    }
}

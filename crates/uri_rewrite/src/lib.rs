// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! In-place rewriting of query and route parameters in serialized URIs.
//!
//! Application code often holds a finished URI and needs to change exactly one parameter before
//! issuing a request or rendering a link. This crate does that without reparsing the URI into a
//! map and serializing it again: the first matching parameter is located by position and only
//! its text is replaced, so every other character of the URI survives verbatim.
//!
//! # Query Parameters
//!
//! [`set_query_parameter`](query::set_query_parameter) replaces `key=value`, `key=` and bare
//! `key` stubs in place, or appends `?key=value` / `&key=value` when the key is absent:
//!
//! ```rust
//! use uri_rewrite::query::set_query_parameter;
//!
//! assert_eq!(set_query_parameter("http://test.com/?a=b", "a", Some("x"))?, "http://test.com/?a=x");
//! assert_eq!(set_query_parameter("http://test.com/?ab=1", "a", Some("2"))?, "http://test.com/?ab=1&a=2");
//! # Ok::<_, uri_rewrite::Error>(())
//! ```
//!
//! # Route Parameters
//!
//! [`set_route_parameter`](route::set_route_parameter) treats two consecutive path segments,
//! `/key/value`, the same way:
//!
//! ```rust
//! use uri_rewrite::route::set_route_parameter;
//!
//! assert_eq!(set_route_parameter("http://test.com/users/1", "users", Some("2"))?, "http://test.com/users/2");
//! # Ok::<_, uri_rewrite::Error>(())
//! ```
//!
//! # Structured URIs
//!
//! The [`RewriteUri`] trait performs the same rewrites on [`http::Uri`] and returns a new
//! [`http::Uri`]. Rewritten text that no longer parses is reported as
//! [`ErrorKind::MalformedInput`].
//!
//! # Values
//!
//! Keys are matched literally and case-sensitively. Values are not percent-encoded, and a
//! missing value is written as the empty string.
//!
//! # Features
//!
//! - `logs`: emits a `DEBUG` level `tracing` event for every rewrite, carrying the key and
//!   whether the parameter was inserted or replaced. Values are never logged.

#![doc(html_logo_url = "https://media.githubusercontent.com/media/microsoft/oxidizer/refs/heads/main/crates/uri_rewrite/logo.png")]
#![doc(html_favicon_url = "https://media.githubusercontent.com/media/microsoft/oxidizer/refs/heads/main/crates/uri_rewrite/favicon.ico")]

mod error;
pub mod query;
mod rewrite;
pub mod route;
mod splice;

pub use error::{Error, ErrorKind, Result};
pub use rewrite::RewriteUri;

#[cfg_attr(
    not(any(feature = "logs", test)),
    expect(unused_variables, reason = "unused when logs feature not used")
)]
fn emit_rewrite(component: &'static str, key: &str, action: &'static str) {
    #[cfg(any(feature = "logs", test))]
    tracing::event!(
        name: "uri_rewrite.rewrite",
        tracing::Level::DEBUG,
        rewrite.component = component,
        rewrite.key = key,
        rewrite.action = action,
    );
}

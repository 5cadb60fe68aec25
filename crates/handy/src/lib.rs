// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Convenience extensions for strings, collections, random sampling and parallel work.
//!
//! Each module adds a small set of operations on top of types from the standard library:
//!
//! - [`text`] - blank checks, trimming, repeating, splitting and case-insensitive search on
//!   [`str`], via the [`StrExt`](text::StrExt) trait.
//! - [`distinct`] - duplicate removal by a caller-defined equality, expressed as a
//!   function pair in [`KeyComparer`](distinct::KeyComparer).
//! - [`sample`] - random choice, sampling without replacement and shuffling.
//! - [`par`] - running a function over every element of a collection concurrently.
//!
//! # Quick Start
//!
//! ```rust
//! use handy::distinct::DistinctExt;
//! use handy::text::StrExt;
//!
//! let tags: Vec<_> = "rust, Rust ,, web, RUST".split_trimmed(',').into_iter()
//!     .distinct_by_key(|tag| tag.to_ascii_lowercase())
//!     .collect();
//!
//! assert_eq!(tags, ["rust", "web"]);
//! ```
//!
//! # Features
//!
//! - `par` (default): enables the [`par`] module, built on Tokio.
//! - `sample` (default): enables the [`sample`] module, built on `fastrand`.
//! - `logs`: emits `tracing` events from the [`par`] module.

#![doc(html_logo_url = "https://media.githubusercontent.com/media/microsoft/oxidizer/refs/heads/main/crates/handy/logo.png")]
#![doc(html_favicon_url = "https://media.githubusercontent.com/media/microsoft/oxidizer/refs/heads/main/crates/handy/favicon.ico")]

pub mod distinct;
#[cfg(feature = "par")]
#[cfg_attr(docsrs, doc(cfg(feature = "par")))]
pub mod par;
#[cfg(feature = "sample")]
#[cfg_attr(docsrs, doc(cfg(feature = "sample")))]
pub mod sample;
pub mod text;

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::ops::Range;

/// Replaces `span` of `source` with the concatenation of `parts`, allocating exactly once.
pub(crate) fn splice(source: &str, span: Range<usize>, parts: &[&str]) -> String {
    let inserted: usize = parts.iter().map(|part| part.len()).sum();
    let mut rebuilt = String::with_capacity(source.len() - span.len() + inserted);

    rebuilt.push_str(&source[..span.start]);
    parts.iter().for_each(|part| rebuilt.push_str(part));
    rebuilt.push_str(&source[span.end..]);

    rebuilt
}

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Extensions for string slices.

use std::borrow::Cow;

mod private {
    #[expect(unnameable_types, reason = "intentional, sealed trait pattern")]
    pub trait Sealed {}

    impl Sealed for str {}
    impl<T> Sealed for Option<T> where T: AsRef<str> {}
}

/// Convenience operations on [`str`].
///
/// Character counts are in Unicode scalar values, never bytes, so slicing helpers never split a
/// character.
///
/// ```
/// use handy::text::StrExt;
///
/// assert!("  \t".is_blank());
/// assert_eq!("  id  ".trim_to_none(), Some("id"));
/// assert_eq!("ab".repeat_with_separator(3, ", "), "ab, ab, ab");
/// assert_eq!("a, ,b ,".split_trimmed(','), ["a", "b"]);
/// ```
pub trait StrExt: private::Sealed {
    /// Returns `true` if the string is empty or contains only whitespace.
    fn is_blank(&self) -> bool;

    /// Returns `true` if the string contains at least one non-whitespace character.
    fn is_not_blank(&self) -> bool {
        !self.is_blank()
    }

    /// Returns the trimmed string, or `None` if nothing is left after trimming.
    fn trim_to_none(&self) -> Option<&str>;

    /// Returns `self`, or `default` if `self` is blank.
    fn or_if_blank<'a>(&'a self, default: &'a str) -> &'a str;

    /// Returns the first `count` characters, or the whole string if it is shorter.
    fn left(&self, count: usize) -> &str;

    /// Returns the last `count` characters, or the whole string if it is shorter.
    fn right(&self, count: usize) -> &str;

    /// Shortens the string to at most `max_chars` characters, ending with `suffix` when
    /// something was cut off. The suffix counts towards the limit.
    fn truncate_with(&self, max_chars: usize, suffix: &str) -> Cow<'_, str>;

    /// Repeats the string `count` times with `separator` between the copies.
    fn repeat_with_separator(&self, count: usize, separator: &str) -> String;

    /// Splits on `separator`, trims every piece and drops the blank ones.
    fn split_trimmed(&self, separator: char) -> Vec<&str>;

    /// Returns `true` if `needle` occurs in the string, ignoring ASCII case.
    fn contains_ignore_ascii_case(&self, needle: &str) -> bool;

    /// Replaces every non-overlapping occurrence of `from`, ignoring ASCII case, scanning
    /// left to right. An empty `from` leaves the string unchanged.
    fn replace_ignore_ascii_case(&self, from: &str, to: &str) -> String;
}

impl StrExt for str {
    fn is_blank(&self) -> bool {
        self.chars().all(char::is_whitespace)
    }

    fn trim_to_none(&self) -> Option<&str> {
        let trimmed = self.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    fn or_if_blank<'a>(&'a self, default: &'a str) -> &'a str {
        if self.is_blank() { default } else { self }
    }

    fn left(&self, count: usize) -> &str {
        match self.char_indices().nth(count) {
            Some((end, _)) => &self[..end],
            None => self,
        }
    }

    fn right(&self, count: usize) -> &str {
        let skip = self.chars().count().saturating_sub(count);
        match self.char_indices().nth(skip) {
            Some((start, _)) => &self[start..],
            None => "",
        }
    }

    fn truncate_with(&self, max_chars: usize, suffix: &str) -> Cow<'_, str> {
        if self.chars().count() <= max_chars {
            return Cow::Borrowed(self);
        }

        let keep = max_chars.saturating_sub(suffix.chars().count());
        let mut truncated = String::with_capacity(max_chars);
        truncated.push_str(self.left(keep));
        truncated.push_str(suffix.left(max_chars - keep));
        Cow::Owned(truncated)
    }

    fn repeat_with_separator(&self, count: usize, separator: &str) -> String {
        let mut repeated = String::with_capacity((self.len() + separator.len()) * count);
        for i in 0..count {
            if i > 0 {
                repeated.push_str(separator);
            }
            repeated.push_str(self);
        }
        repeated
    }

    fn split_trimmed(&self, separator: char) -> Vec<&str> {
        self.split(separator).filter_map(StrExt::trim_to_none).collect()
    }

    fn contains_ignore_ascii_case(&self, needle: &str) -> bool {
        needle.is_empty()
            || self
                .as_bytes()
                .windows(needle.len())
                .any(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
    }

    fn replace_ignore_ascii_case(&self, from: &str, to: &str) -> String {
        if from.is_empty() {
            return self.to_owned();
        }

        let (haystack, needle) = (self.as_bytes(), from.as_bytes());
        let mut replaced = String::with_capacity(self.len());
        let mut copied = 0;
        let mut at = 0;

        // Matches can only start on a character boundary: `from` is valid UTF-8 and only
        // ASCII bytes are compared loosely.
        while at + needle.len() <= haystack.len() {
            if haystack[at..at + needle.len()].eq_ignore_ascii_case(needle) {
                replaced.push_str(&self[copied..at]);
                replaced.push_str(to);
                at += needle.len();
                copied = at;
            } else {
                at += 1;
            }
        }

        replaced.push_str(&self[copied..]);
        replaced
    }
}

/// Convenience operations on optional strings.
///
/// ```
/// use handy::text::OptionStrExt;
///
/// assert!(None::<&str>.is_none_or_blank());
/// assert!(Some(" ").is_none_or_blank());
/// assert!(!Some(String::from("x")).is_none_or_blank());
/// ```
pub trait OptionStrExt: private::Sealed {
    /// Returns `true` if there is no string or the string is blank.
    fn is_none_or_blank(&self) -> bool;
}

impl<T> OptionStrExt for Option<T>
where
    T: AsRef<str>,
{
    fn is_none_or_blank(&self) -> bool {
        self.as_ref().is_none_or(|s| s.as_ref().is_blank())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", true)]
    #[case(" \t\r\n", true)]
    #[case("\u{3000}", true)]
    #[case(" x ", false)]
    fn blankness(#[case] input: &str, #[case] blank: bool) {
        assert_eq!(input.is_blank(), blank);
        assert_eq!(input.is_not_blank(), !blank);
    }

    #[test]
    fn trim_and_default() {
        assert_eq!("  ".trim_to_none(), None);
        assert_eq!(" a b ".trim_to_none(), Some("a b"));
        assert_eq!(" ".or_if_blank("fallback"), "fallback");
        assert_eq!("value".or_if_blank("fallback"), "value");
    }

    #[rstest]
    #[case("héllo", 2, "hé", "lo")]
    #[case("héllo", 0, "", "")]
    #[case("héllo", 9, "héllo", "héllo")]
    #[case("", 3, "", "")]
    fn left_and_right(#[case] input: &str, #[case] count: usize, #[case] left: &str, #[case] right: &str) {
        assert_eq!(input.left(count), left);
        assert_eq!(input.right(count), right);
    }

    #[test]
    fn truncate_with_suffix() {
        assert_eq!("short".truncate_with(10, "…"), "short");
        assert!(matches!("short".truncate_with(5, "…"), Cow::Borrowed(_)));
        assert_eq!("a longer sentence".truncate_with(8, "..."), "a lon...");
        assert_eq!("ünïcödé".truncate_with(4, "…"), "ünï…");
        assert_eq!("abcdef".truncate_with(2, "..."), "..");
    }

    #[test]
    fn repeat_with_separator() {
        assert_eq!("ab".repeat_with_separator(3, ","), "ab,ab,ab");
        assert_eq!("ab".repeat_with_separator(1, ","), "ab");
        assert_eq!("ab".repeat_with_separator(0, ","), "");
    }

    #[test]
    fn split_trimmed_drops_blanks() {
        assert_eq!(" a ,b,, c ".split_trimmed(','), ["a", "b", "c"]);
        assert!(" , ".split_trimmed(',').is_empty());
    }

    #[test]
    fn ignore_ascii_case() {
        assert!("Content-Type".contains_ignore_ascii_case("content-type"));
        assert!("anything".contains_ignore_ascii_case(""));
        assert!(!"abc".contains_ignore_ascii_case("abcd"));

        assert_eq!("Hello HELLO hello".replace_ignore_ascii_case("hello", "bye"), "bye bye bye");
        assert_eq!("aaa".replace_ignore_ascii_case("AA", "b"), "ba");
        assert_eq!("Grüße GRÜSSE".replace_ignore_ascii_case("grüße", "hi"), "hi GRÜSSE");
        assert_eq!("unchanged".replace_ignore_ascii_case("", "x"), "unchanged");
    }

    #[test]
    fn optional_strings() {
        assert!(None::<String>.is_none_or_blank());
        assert!(Some("").is_none_or_blank());
        assert!(!Some("a").is_none_or_blank());
    }
}

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Removing duplicates by a caller-defined notion of equality.

use std::collections::{HashMap, HashSet};
use std::fmt::{self, Debug};
use std::hash::{BuildHasher, Hash};

use foldhash::fast::FixedState;

type EqFn<T> = dyn Fn(&T, &T) -> bool + Send + Sync;
type HashFn<T> = dyn Fn(&T) -> u64 + Send + Sync;

/// Compares values with an equality function and a matching hash function.
///
/// The two functions must agree: values that compare equal must hash equally. Most callers
/// want [`KeyComparer::by_key`], which derives both from a key projection.
///
/// ```
/// use handy::distinct::{KeyComparer, distinct_with};
///
/// let case_insensitive = KeyComparer::by_key(|s: &&str| s.to_ascii_lowercase());
/// let names = distinct_with(["Ada", "ada", "Grace", "ADA"], &case_insensitive);
/// assert_eq!(names, ["Ada", "Grace"]);
/// ```
pub struct KeyComparer<T: ?Sized> {
    eq: Box<EqFn<T>>,
    hash: Box<HashFn<T>>,
}

impl<T: ?Sized> KeyComparer<T> {
    /// Creates a comparer from an equality function and a hash function.
    pub fn new<E, H>(eq: E, hash: H) -> Self
    where
        E: Fn(&T, &T) -> bool + Send + Sync + 'static,
        H: Fn(&T) -> u64 + Send + Sync + 'static,
    {
        Self {
            eq: Box::new(eq),
            hash: Box::new(hash),
        }
    }

    /// Creates a comparer that treats values as equal when their keys are equal.
    pub fn by_key<K, F>(key: F) -> Self
    where
        K: Eq + Hash,
        F: Fn(&T) -> K + Clone + Send + Sync + 'static,
    {
        let hash_key = key.clone();
        Self::new(
            move |a, b| key(a) == key(b),
            move |value| FixedState::default().hash_one(hash_key(value)),
        )
    }

    /// Returns `true` if the two values are considered equal.
    pub fn equals(&self, a: &T, b: &T) -> bool {
        (self.eq)(a, b)
    }

    /// Returns the hash of the value.
    pub fn hash(&self, value: &T) -> u64 {
        (self.hash)(value)
    }
}

impl<T: ?Sized> Debug for KeyComparer<T> {
    #[cfg_attr(test, mutants::skip)] // Do not mutate debug output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyComparer").finish_non_exhaustive()
    }
}

/// Returns the items with duplicates removed, keeping the first occurrence of each.
///
/// The relative order of the kept items is preserved.
pub fn distinct_with<T, I>(items: I, comparer: &KeyComparer<T>) -> Vec<T>
where
    I: IntoIterator<Item = T>,
{
    let mut buckets: HashMap<u64, Vec<usize>, FixedState> = HashMap::with_hasher(FixedState::default());
    let mut kept = Vec::new();

    for item in items {
        let bucket = buckets.entry(comparer.hash(&item)).or_default();
        if bucket.iter().any(|&index| comparer.equals(&kept[index], &item)) {
            continue;
        }

        bucket.push(kept.len());
        kept.push(item);
    }

    kept
}

/// Iterator adapters for removing duplicates.
pub trait DistinctExt: Iterator + Sized {
    /// Yields only the first item for every distinct key, lazily and in order.
    ///
    /// ```
    /// use handy::distinct::DistinctExt;
    ///
    /// let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
    /// let firsts: Vec<_> = words.into_iter().distinct_by_key(|w| w.chars().next()).collect();
    /// assert_eq!(firsts, ["apple", "banana", "cherry"]);
    /// ```
    fn distinct_by_key<K, F>(self, key: F) -> DistinctByKey<Self, K, F>
    where
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        DistinctByKey {
            inner: self,
            seen: HashSet::with_hasher(FixedState::default()),
            key,
        }
    }
}

impl<I: Iterator> DistinctExt for I {}

/// Iterator returned by [`DistinctExt::distinct_by_key`].
pub struct DistinctByKey<I, K, F> {
    inner: I,
    seen: HashSet<K, FixedState>,
    key: F,
}

impl<I, K, F> Iterator for DistinctByKey<I, K, F>
where
    I: Iterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().find(|item| self.seen.insert((self.key)(item)))
    }
}

impl<I: Debug, K, F> Debug for DistinctByKey<I, K, F> {
    #[cfg_attr(test, mutants::skip)] // Do not mutate debug output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DistinctByKey").field("inner", &self.inner).finish_non_exhaustive()
    }
}

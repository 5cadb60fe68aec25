// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Random selection from slices.

/// Picks random elements from slices.
///
/// This is **NOT cryptographically secure** and must only be used where predictability does
/// not matter, such as spreading load, picking test data or sampling logs.
///
/// A sampler created with [`Sampler::with_seed`] produces the same sequence of choices for
/// the same inputs, which keeps tests deterministic.
///
/// ```
/// use handy::sample::Sampler;
///
/// let replicas = ["east", "west", "north"];
/// let mut sampler = Sampler::new();
///
/// let primary = sampler.choose(&replicas).unwrap();
/// let pair = sampler.sample(&replicas, 2);
/// assert!(replicas.contains(primary));
/// assert_eq!(pair.len(), 2);
/// assert_ne!(pair[0], pair[1]);
/// ```
#[derive(Debug, Clone)]
pub struct Sampler {
    rng: fastrand::Rng,
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler {
    /// Creates a sampler seeded from the thread-local generator.
    #[must_use]
    pub fn new() -> Self {
        Self { rng: fastrand::Rng::new() }
    }

    /// Creates a sampler with a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Returns a uniformly chosen element, or `None` if `items` is empty.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }

        items.get(self.rng.usize(..items.len()))
    }

    /// Returns `count` distinct elements in random order, or all of them in random order if
    /// `items` holds fewer than `count`.
    pub fn sample<'a, T>(&mut self, items: &'a [T], count: usize) -> Vec<&'a T> {
        let count = count.min(items.len());
        let mut indices: Vec<usize> = (0..items.len()).collect();

        // Partial Fisher-Yates: only the first `count` positions are settled.
        for i in 0..count {
            let j = self.rng.usize(i..indices.len());
            indices.swap(i, j);
        }

        indices.truncate(count);
        indices.into_iter().filter_map(|i| items.get(i)).collect()
    }

    /// Shuffles `items` in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        self.rng.shuffle(items);
    }
}

//! Mapper configuration.

use strum::Display;

/// What the mapper does with a dictionary-valued source member
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum DictionaryPolicy {
    /// Leave the destination member untouched and carry on, logged at `warn` level
    #[default]
    Skip,
    /// Fail the mapping call with [`Error::DictionaryUnsupported`](crate::Error::DictionaryUnsupported)
    Reject,
}

/// Options controlling a [`Mapper`](crate::Mapper)
///
/// ```rust
/// use mapscope::{DictionaryPolicy, MapperOptions};
///
/// let options = MapperOptions::default()
///     .with_dictionary_policy(DictionaryPolicy::Reject)
///     .with_recursion_limit(16);
/// assert_eq!(options.recursion_limit, Some(16));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapperOptions {
    /// Handling of dictionary-valued members, [`DictionaryPolicy::Skip`] by default
    pub dictionary_policy: DictionaryPolicy,
    /// Maximum nesting depth of recursive mapping, unbounded by default
    pub recursion_limit: Option<usize>,
}

impl MapperOptions {
    /// Set the dictionary policy
    #[must_use]
    pub fn with_dictionary_policy(mut self, policy: DictionaryPolicy) -> Self {
        self.dictionary_policy = policy;
        self
    }

    /// Bound the nesting depth of recursive mapping.
    ///
    /// The top-level call is depth 0; every nested or element object one level deeper. Exceeding
    /// the limit fails with [`Error::RecursionLimit`](crate::Error::RecursionLimit).
    #[must_use]
    pub fn with_recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = Some(limit);
        self
    }
}

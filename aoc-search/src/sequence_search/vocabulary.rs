//! Immutable token set.

use std::collections::HashSet;

use crate::error::VocabularyError;
use crate::utils::dp_cache::{DpCache, DpProblem, VecBackend};

/// A fixed set of non-empty, unique tokens.
///
/// Remembers the length of its longest token: no prefix longer than that is
/// ever looked up. The atomic tokens are worked out once, on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    tokens: HashSet<String>,
    max_len: usize,
    atomic: HashSet<String>,
}

impl Vocabulary {
    /// Builds a vocabulary, dropping duplicates.
    ///
    /// # Errors
    ///
    /// [`VocabularyError::EmptyToken`] if any token is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use aoc_search::sequence_search::Vocabulary;
    ///
    /// let vocab = Vocabulary::new(["r", "wr", "b", "wr"]).unwrap();
    /// assert_eq!(vocab.len(), 3);
    /// assert_eq!(vocab.max_len(), 2);
    /// assert!(Vocabulary::new(["r", ""]).is_err());
    /// ```
    pub fn new<I, T>(tokens: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut set = HashSet::new();
        for (index, token) in tokens.into_iter().enumerate() {
            let token = token.into();
            if token.is_empty() {
                return Err(VocabularyError::EmptyToken { index });
            }
            set.insert(token);
        }
        let max_len = set.iter().map(String::len).max().unwrap_or(0);
        let mut vocabulary = Self {
            tokens: set,
            max_len,
            atomic: HashSet::new(),
        };
        vocabulary.atomic = vocabulary
            .iter()
            .filter(|token| !vocabulary.builds_from_others(token))
            .map(str::to_owned)
            .collect();
        Ok(vocabulary)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Length in bytes of the longest token, 0 for an empty vocabulary.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Suffixes left after stripping each vocabulary token that prefixes
    /// `target`, shortest prefix first.
    ///
    /// Includes the empty suffix when `target` is itself a token.
    pub(crate) fn splits<'t>(&'t self, target: &'t str) -> impl Iterator<Item = &'t str> + 't {
        self.splits_skipping(target, None)
    }

    /// Like [`splits`](Self::splits), ignoring the token `skip`.
    pub(crate) fn splits_skipping<'t>(
        &'t self,
        target: &'t str,
        skip: Option<&'t str>,
    ) -> impl Iterator<Item = &'t str> + 't {
        (1..=self.max_len.min(target.len())).filter_map(move |i| {
            let prefix = target.get(..i)?;
            if skip == Some(prefix) || !self.contains(prefix) {
                return None;
            }
            target.get(i..)
        })
    }

    /// Whether `target` is a concatenation of tokens.
    ///
    /// Plain recursion that stops at the first success.
    pub(crate) fn can_build(&self, target: &str) -> bool {
        target.is_empty()
            || self
                .splits(target)
                .any(|rest| self.can_build(rest))
    }

    /// Whether `token` is a concatenation of the other tokens, memoized on
    /// byte offset so long tokens stay linear.
    fn builds_from_others(&self, token: &str) -> bool {
        let cache = DpCache::builder()
            .backend(VecBackend::with_capacity(token.len() + 1))
            .problem(Assembly {
                vocabulary: self,
                token,
            })
            .build();
        cache.get(&0)
    }

    /// Tokens that cannot be assembled from the other tokens.
    ///
    /// Such a token has exactly one decomposition when it is the whole
    /// remaining target: itself.
    pub fn atomic_tokens(&self) -> HashSet<&str> {
        self.atomic.iter().map(String::as_str).collect()
    }

    pub(crate) fn is_atomic(&self, token: &str) -> bool {
        self.atomic.contains(token)
    }
}

/// Reachability of the end of `token` from each byte offset, never using
/// `token` itself.
struct Assembly<'a> {
    vocabulary: &'a Vocabulary,
    token: &'a str,
}

impl DpProblem<usize, bool> for Assembly<'_> {
    fn deps(&self, offset: &usize) -> Vec<usize> {
        let rest = self.token.get(*offset..).unwrap_or_default();
        self.vocabulary
            .splits_skipping(rest, Some(self.token))
            .map(|after| self.token.len() - after.len())
            .collect()
    }

    fn compute(&self, offset: &usize, deps: Vec<bool>) -> bool {
        *offset == self.token.len() || deps.into_iter().any(|done| done)
    }
}

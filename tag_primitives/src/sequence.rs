// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};
use core::fmt;

use smallvec::SmallVec;

/// An ordered list of subtag tokens belonging to one [`Category`](crate::Category).
///
/// Tokens keep the casing they were parsed with, so they render exactly as they arrived, but
/// every comparison (`contains`, removal, deduplication) is ASCII case-insensitive.
///
/// All transformations take the sequence by value and hand back the result, so a token is
/// never removed from a list that is being iterated.
///
/// ```
/// use tag_primitives::SubtagSequence;
///
/// let seq = SubtagSequence::parse("en--Latn-");
/// assert_eq!(seq.len(), 2);
/// assert!(seq.contains("LATN"));
///
/// let (kept, rest) = seq.keep_first_move_rest_to(SubtagSequence::new());
/// assert_eq!(kept.to_string(), "en");
/// assert_eq!(rest.to_string(), "Latn");
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct SubtagSequence {
    tokens: SmallVec<[String; 4]>,
}

impl SubtagSequence {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits `raw` on `-`, dropping empty segments. No validation is performed.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        raw.split('-').filter(|part| !part.is_empty()).collect()
    }

    /// Returns the number of tokens.
    #[must_use]
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if there are no tokens.
    #[must_use]
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates over the tokens in order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator + '_ {
        self.tokens.iter().map(String::as_str)
    }

    /// Returns the first token, if any.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.tokens.first().map(String::as_str)
    }

    /// Returns `true` if any token equals `token`, ignoring ASCII case.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t.eq_ignore_ascii_case(token))
    }

    /// Appends a token. Empty tokens and tokens containing `-` are split exactly as
    /// [`parse`](Self::parse) would split them.
    #[must_use]
    pub fn append(mut self, token: &str) -> Self {
        self.tokens
            .extend(token.split('-').filter(|p| !p.is_empty()).map(String::from));
        self
    }

    /// Appends every token of `other`, in order.
    #[must_use]
    pub fn concat(mut self, other: Self) -> Self {
        self.tokens.extend(other.tokens);
        self
    }

    /// Removes every token for which `predicate` holds.
    #[must_use]
    pub fn remove_all_matching(self, mut predicate: impl FnMut(&str) -> bool) -> Self {
        self.partition(|t| predicate(t)).0
    }

    /// Removes the last occurrence of `token`, ignoring ASCII case.
    ///
    /// When a token has been appended more than once, the most recently added copy is the
    /// one that goes.
    #[must_use]
    pub fn remove_token(mut self, token: &str) -> Self {
        if let Some(index) = self.tokens.iter().rposition(|t| t.eq_ignore_ascii_case(token)) {
            self.tokens.remove(index);
        }
        self
    }

    /// Splits into `(rejected, matched)`: tokens for which `predicate` fails, and tokens for
    /// which it holds. Relative order is preserved on both sides.
    #[must_use]
    pub fn partition(self, mut predicate: impl FnMut(&str) -> bool) -> (Self, Self) {
        let mut rejected = Self::new();
        let mut matched = Self::new();
        for token in self.tokens {
            if predicate(&token) {
                matched.tokens.push(token);
            } else {
                rejected.tokens.push(token);
            }
        }
        (rejected, matched)
    }

    /// Keeps only the first token and appends the remainder, in order, to `other`.
    ///
    /// Returns `(self, other)` after the move.
    #[must_use]
    pub fn keep_first_move_rest_to(mut self, mut other: Self) -> (Self, Self) {
        if self.tokens.len() > 1 {
            other.tokens.extend(self.tokens.drain(1..));
        }
        (self, other)
    }

    /// Truncates every token to at most `max_len` characters.
    ///
    /// This can introduce duplicates; deduplicate afterwards if that matters.
    #[must_use]
    pub fn truncate_tokens_to(mut self, max_len: usize) -> Self {
        for token in &mut self.tokens {
            if let Some((cut, _)) = token.char_indices().nth(max_len) {
                token.truncate(cut);
            }
        }
        self
    }

    /// Removes every character that is not an ASCII letter or digit from each token, then
    /// drops tokens left empty.
    #[must_use]
    pub fn strip_non_alphanumeric(mut self) -> Self {
        for token in &mut self.tokens {
            token.retain(|c| c.is_ascii_alphanumeric());
        }
        self.tokens.retain(|t| !t.is_empty());
        self
    }

    /// Drops case-insensitive duplicates, keeping the first occurrence of each token.
    #[must_use]
    pub fn dedupe_case_insensitive(self) -> Self {
        self.split_duplicates().0
    }

    /// Splits into `(unique, duplicates)`.
    ///
    /// `unique` holds the first occurrence of every token; `duplicates` holds every later
    /// occurrence, in the order encountered.
    #[must_use]
    pub fn split_duplicates(self) -> (Self, Self) {
        let mut unique = Self::new();
        let mut duplicates = Self::new();
        for token in self.tokens {
            if unique.contains(&token) {
                duplicates.tokens.push(token);
            } else {
                unique.tokens.push(token);
            }
        }
        (unique, duplicates)
    }

    /// Joins the tokens with `-`. An empty sequence renders as the empty string.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<S: Into<String>> FromIterator<S> for SubtagSequence {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Debug for SubtagSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for SubtagSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.iter().enumerate() {
            if i != 0 {
                f.write_str("-")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use icu_locale_core::subtags;

use crate::Category;

/// The longest private-use subtag RFC 5646 permits.
pub const MAX_PRIVATE_USE_LEN: usize = 8;

/// Decides whether a single token is a legitimate subtag for each standard category.
///
/// Implementations are pure lookups: no I/O and no side effects. Every comparison is expected
/// to be ASCII case-insensitive.
pub trait StandardTagValidity {
    /// Returns whether `token` is an ISO 639 language code.
    fn is_language_code(&self, token: &str) -> bool;

    /// Returns whether `token` is an ISO 15924 script code.
    fn is_script_code(&self, token: &str) -> bool;

    /// Returns whether `token` is an ISO 3166-1 / UN M.49 region code.
    fn is_region_code(&self, token: &str) -> bool;

    /// Returns whether `token` is a registered variant subtag.
    fn is_registered_variant(&self, token: &str) -> bool;

    /// Dispatches to the predicate for `category`.
    ///
    /// [`Category::PrivateUse`] accepts any 1–8 character ASCII alphanumeric token.
    fn is_valid(&self, category: Category, token: &str) -> bool {
        match category {
            Category::Language => self.is_language_code(token),
            Category::Script => self.is_script_code(token),
            Category::Region => self.is_region_code(token),
            Category::Variant => self.is_registered_variant(token),
            Category::PrivateUse => is_private_use_token(token),
        }
    }
}

impl<T: StandardTagValidity + ?Sized> StandardTagValidity for &T {
    #[inline]
    fn is_language_code(&self, token: &str) -> bool {
        (**self).is_language_code(token)
    }

    #[inline]
    fn is_script_code(&self, token: &str) -> bool {
        (**self).is_script_code(token)
    }

    #[inline]
    fn is_region_code(&self, token: &str) -> bool {
        (**self).is_region_code(token)
    }

    #[inline]
    fn is_registered_variant(&self, token: &str) -> bool {
        (**self).is_registered_variant(token)
    }
}

/// Returns whether `token` may appear after the `x` introducer.
pub fn is_private_use_token(token: &str) -> bool {
    (1..=MAX_PRIVATE_USE_LEN).contains(&token.len())
        && token.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Validity based on subtag shape alone.
///
/// Accepts anything that is syntactically a language (2–3 letters), script (4 letters),
/// region (2 letters or 3 digits) or variant (5–8 alphanumerics, or 4 starting with a digit).
/// Useful when no registry is at hand; note that a well-formed but unassigned code passes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WellFormedSubtags;

impl StandardTagValidity for WellFormedSubtags {
    fn is_language_code(&self, token: &str) -> bool {
        subtags::Language::try_from_str(token).is_ok()
    }

    fn is_script_code(&self, token: &str) -> bool {
        subtags::Script::try_from_str(token).is_ok()
    }

    fn is_region_code(&self, token: &str) -> bool {
        subtags::Region::try_from_str(token).is_ok()
    }

    fn is_registered_variant(&self, token: &str) -> bool {
        subtags::Variant::try_from_str(token).is_ok()
    }
}

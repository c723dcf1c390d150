// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Private-use and variant cleanup.

use tag_primitives::{Category, Rfc5646Identity, SubtagSequence};

use crate::MigrationConfig;

/// Truncates, strips and deduplicates private-use tokens.
///
/// Tokens are cut to the configured length, then every non-alphanumeric character is
/// removed; tokens left empty are dropped, as are tokens reduced to the bare `x` introducer.
/// Finally case-insensitive duplicates go, keeping the first occurrence.
pub fn normalize_private_use(tokens: SubtagSequence, config: &MigrationConfig) -> SubtagSequence {
    let before = tokens.len();
    let tokens = tokens
        .truncate_tokens_to(config.max_private_use_len())
        .strip_non_alphanumeric()
        .remove_all_matching(is_introducer)
        .dedupe_case_insensitive();
    if tokens.len() != before {
        log::debug!("dropped {} private use token(s)", before - tokens.len());
    }
    tokens
}

/// Normalizes the private-use category and demotes repeated variants into it.
///
/// A repeated variant cannot stay in the variant field, but it still carries data, so the
/// later copies are appended to private use before that is normalized.
pub fn normalize(mut id: Rfc5646Identity, config: &MigrationConfig) -> Rfc5646Identity {
    let (variant, repeated) = id.take(Category::Variant).split_duplicates();
    if !repeated.is_empty() {
        log::debug!("demoting repeated variant(s) `{repeated}` to private use");
    }
    let private_use = id.take(Category::PrivateUse).concat(repeated);
    let private_use = normalize_private_use(private_use, config);
    id.with(Category::Variant, variant)
        .with(Category::PrivateUse, private_use)
}

pub(crate) fn is_introducer(token: &str) -> bool {
    token.eq_ignore_ascii_case("x")
}

#[cfg(test)]
mod tests {
    use super::{normalize, normalize_private_use};
    use crate::MigrationConfig;
    use alloc::string::ToString;
    use tag_primitives::{Category, Rfc5646Identity, SubtagSequence};

    #[test]
    fn private_use_is_truncated_stripped_and_deduped() {
        let config = MigrationConfig::default();
        let tokens = SubtagSequence::parse("wayTooLongToken-a.b-!!!-x!-Audio-audio-waytoolo");
        let tokens = normalize_private_use(tokens, &config);
        assert_eq!(tokens.to_string(), "wayTooLo-ab-Audio");
    }

    #[test]
    fn truncation_happens_before_stripping() {
        let tokens = normalize_private_use(
            SubtagSequence::parse("ab.cdefghijk"),
            &MigrationConfig::default(),
        );
        assert_eq!(tokens.to_string(), "abcdefg");
    }

    #[test]
    fn repeated_variants_move_to_private_use() {
        let id = Rfc5646Identity::from_legacy_fields("en", "", "", "fonipa-FONIPA-1901");
        let id = normalize(id, &MigrationConfig::default());
        assert_eq!(id.get(Category::Variant).to_string(), "fonipa-1901");
        assert_eq!(id.get(Category::PrivateUse).to_string(), "FONIPA");
        assert_eq!(id.to_string(), "en-fonipa-1901-x-FONIPA");
    }

    #[test]
    fn demoted_variant_is_deduped_against_private_use() {
        let id = Rfc5646Identity::from_legacy_fields("en", "", "", "fonipa-fonipa")
            .with(Category::PrivateUse, SubtagSequence::parse("Fonipa"));
        let id = normalize(id, &MigrationConfig::default());
        assert_eq!(id.to_string(), "en-fonipa-x-Fonipa");
    }
}

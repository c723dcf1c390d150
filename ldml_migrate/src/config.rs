// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::Cow;
use alloc::string::{String, ToString};

use tag_primitives::MAX_PRIVATE_USE_LEN;

const DEFAULT_DUPLICATE_PREFIX: &str = "dupl";

/// The reserved tokens and limits the migration depends on.
///
/// The defaults are the values used by LDML writing system stores; override them only to
/// interoperate with a store that used different conventions.
///
/// ```
/// use ldml_migrate::MigrationConfig;
///
/// let config = MigrationConfig::default().with_duplicate_prefix("dup");
/// assert_eq!(config.placeholder_language(), "qaa");
/// assert_eq!(config.duplicate_marker(3), "dup3");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MigrationConfig {
    placeholder_language: Cow<'static, str>,
    unwritten_script: Cow<'static, str>,
    audio_marker: Cow<'static, str>,
    ipa_variant: Cow<'static, str>,
    duplicate_prefix: Cow<'static, str>,
    max_private_use_len: usize,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            placeholder_language: Cow::Borrowed("qaa"),
            unwritten_script: Cow::Borrowed("Zxxx"),
            audio_marker: Cow::Borrowed("audio"),
            ipa_variant: Cow::Borrowed("fonipa"),
            duplicate_prefix: Cow::Borrowed(DEFAULT_DUPLICATE_PREFIX),
            max_private_use_len: MAX_PRIVATE_USE_LEN,
        }
    }
}

impl MigrationConfig {
    /// The language used when no valid language code can be determined.
    pub fn placeholder_language(&self) -> &str {
        &self.placeholder_language
    }

    /// The script forced onto audio writing systems.
    pub fn unwritten_script(&self) -> &str {
        &self.unwritten_script
    }

    /// The private-use token marking an audio writing system.
    pub fn audio_marker(&self) -> &str {
        &self.audio_marker
    }

    /// The variant marking IPA transcription.
    pub fn ipa_variant(&self) -> &str {
        &self.ipa_variant
    }

    /// The prefix of the private-use token that disambiguates colliding tags.
    pub fn duplicate_prefix(&self) -> &str {
        &self.duplicate_prefix
    }

    /// The length private-use tokens are truncated to.
    pub fn max_private_use_len(&self) -> usize {
        self.max_private_use_len
    }

    /// Sets the placeholder language.
    #[must_use]
    pub fn with_placeholder_language(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.placeholder_language = code.into();
        self
    }

    /// Sets the unwritten script.
    #[must_use]
    pub fn with_unwritten_script(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.unwritten_script = code.into();
        self
    }

    /// Sets the audio marker.
    #[must_use]
    pub fn with_audio_marker(mut self, token: impl Into<Cow<'static, str>>) -> Self {
        self.audio_marker = token.into();
        self
    }

    /// Sets the IPA variant.
    #[must_use]
    pub fn with_ipa_variant(mut self, token: impl Into<Cow<'static, str>>) -> Self {
        self.ipa_variant = token.into();
        self
    }

    /// Sets the duplicate marker prefix.
    ///
    /// Only ASCII letters are kept, at most 7 of them, so that a marker always has room for a
    /// number. A prefix with no letters falls back to `dupl`.
    #[must_use]
    pub fn with_duplicate_prefix(mut self, prefix: impl Into<Cow<'static, str>>) -> Self {
        let prefix = prefix.into();
        let max = MAX_PRIVATE_USE_LEN - 1;
        self.duplicate_prefix = if (1..=max).contains(&prefix.len())
            && prefix.bytes().all(|b| b.is_ascii_alphabetic())
        {
            prefix
        } else {
            let letters: String = prefix
                .chars()
                .filter(char::is_ascii_alphabetic)
                .take(max)
                .collect();
            if letters.is_empty() {
                Cow::Borrowed(DEFAULT_DUPLICATE_PREFIX)
            } else {
                Cow::Owned(letters)
            }
        };
        self
    }

    /// Sets the private-use truncation length, clamped to `1..=8`.
    #[must_use]
    pub fn with_max_private_use_len(mut self, len: usize) -> Self {
        self.max_private_use_len = len.clamp(1, MAX_PRIVATE_USE_LEN);
        self
    }

    /// Formats the duplicate marker for `n`, e.g. `dupl1`.
    ///
    /// Once the number needs more room, the prefix is shortened so the marker fills exactly the
    /// private-use length, e.g. `dup10000`. At least one letter of the prefix is always kept, so
    /// only a number that leaves no room for a letter yields an over-long marker.
    pub fn duplicate_marker(&self, n: u32) -> String {
        let digits = n.to_string();
        let room = self
            .max_private_use_len
            .saturating_sub(digits.len())
            .clamp(1, self.duplicate_prefix.len());
        let mut marker = String::from(&self.duplicate_prefix[..room]);
        marker.push_str(&digits);
        marker
    }

    /// Returns whether `token` is a marker [`duplicate_marker`](Self::duplicate_marker) can
    /// produce: the prefix followed only by digits, or a shortened prefix followed by digits that
    /// together fill the private-use length.
    pub fn is_duplicate_marker(&self, token: &str) -> bool {
        let bytes = token.as_bytes();
        let letters = bytes
            .iter()
            .position(u8::is_ascii_digit)
            .unwrap_or(bytes.len());
        let prefix = self.duplicate_prefix.as_bytes();
        letters >= 1
            && letters < bytes.len()
            && letters <= prefix.len()
            && bytes[..letters].eq_ignore_ascii_case(&prefix[..letters])
            && bytes[letters..].iter().all(u8::is_ascii_digit)
            && (letters == prefix.len() || bytes.len() == self.max_private_use_len)
    }
}

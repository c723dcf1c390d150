// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use hashbrown::HashSet;
use icu_locale_core::subtags;

use crate::StandardTagValidity;

/// The placeholder language that is always considered valid.
const PLACEHOLDER_LANGUAGE: subtags::Language = subtags::language!("qaa");

/// Validity backed by the IANA Language Subtag Registry.
///
/// Lookups canonicalize the token's case first, so `LATN`, `latn` and `Latn` all match a
/// registered `Latn`.
///
/// ```
/// use tag_primitives::{StandardTagValidity, SubtagRegistry};
///
/// let registry = SubtagRegistry::parse(
///     "File-Date: 2024-01-01\n%%\nType: language\nSubtag: en\nDescription: English\n%%\n\
///      Type: script\nSubtag: Latn\nDescription: Latin\n",
/// )
/// .unwrap();
/// assert!(registry.is_language_code("EN"));
/// assert!(registry.is_script_code("latn"));
/// assert!(registry.is_language_code("qaa"));
/// assert!(!registry.is_region_code("US"));
/// ```
#[derive(Clone, Debug)]
pub struct SubtagRegistry {
    languages: HashSet<subtags::Language>,
    scripts: HashSet<subtags::Script>,
    regions: HashSet<subtags::Region>,
    variants: HashSet<subtags::Variant>,
}

impl Default for SubtagRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SubtagRegistry {
    /// Creates a registry that knows only the placeholder language `qaa`.
    #[must_use]
    pub fn new() -> Self {
        let mut languages = HashSet::new();
        languages.insert(PLACEHOLDER_LANGUAGE);
        Self {
            languages,
            scripts: HashSet::new(),
            regions: HashSet::new(),
            variants: HashSet::new(),
        }
    }

    /// Parses the text of an IANA Language Subtag Registry file.
    ///
    /// Records are separated by `%%` lines. The leading `File-Date` record is skipped, as are
    /// `extlang`, `grandfathered` and `redundant` records and any private-use range such as
    /// `qaa..qtz`.
    pub fn parse(text: &str) -> Result<Self, ParseRegistryError> {
        let mut registry = Self::new();
        for (index, record) in split_records(text).enumerate() {
            let record_number = index + 1;
            let mut kind = None;
            let mut subtag = None;
            let mut file_date = false;
            for (name, value) in fields(record) {
                match name {
                    "Type" if kind.is_none() => kind = Some(value),
                    "Subtag" if subtag.is_none() => subtag = Some(value),
                    "File-Date" => file_date = true,
                    _ => {}
                }
            }
            let Some(kind) = kind else {
                if file_date || record.trim().is_empty() {
                    continue;
                }
                return Err(ParseRegistryError::new(
                    ParseRegistryErrorKind::MissingType,
                    record_number,
                ));
            };
            if !matches!(kind, "language" | "script" | "region" | "variant") {
                continue;
            }
            let Some(subtag) = subtag else {
                return Err(ParseRegistryError::new(
                    ParseRegistryErrorKind::MissingSubtag,
                    record_number,
                ));
            };
            if subtag.contains("..") {
                continue;
            }
            let inserted = match kind {
                "language" => subtags::Language::try_from_str(subtag)
                    .map(|s| registry.languages.insert(s))
                    .is_ok(),
                "script" => subtags::Script::try_from_str(subtag)
                    .map(|s| registry.scripts.insert(s))
                    .is_ok(),
                "region" => subtags::Region::try_from_str(subtag)
                    .map(|s| registry.regions.insert(s))
                    .is_ok(),
                _ => subtags::Variant::try_from_str(subtag)
                    .map(|s| registry.variants.insert(s))
                    .is_ok(),
            };
            if !inserted {
                return Err(ParseRegistryError::new(
                    ParseRegistryErrorKind::InvalidSubtag,
                    record_number,
                ));
            }
        }
        Ok(registry)
    }

    /// Adds language codes. Malformed codes are ignored.
    #[must_use]
    pub fn with_languages<'a>(mut self, codes: impl IntoIterator<Item = &'a str>) -> Self {
        self.languages.extend(
            codes
                .into_iter()
                .filter_map(|c| subtags::Language::try_from_str(c).ok()),
        );
        self
    }

    /// Adds script codes. Malformed codes are ignored.
    #[must_use]
    pub fn with_scripts<'a>(mut self, codes: impl IntoIterator<Item = &'a str>) -> Self {
        self.scripts.extend(
            codes
                .into_iter()
                .filter_map(|c| subtags::Script::try_from_str(c).ok()),
        );
        self
    }

    /// Adds region codes. Malformed codes are ignored.
    #[must_use]
    pub fn with_regions<'a>(mut self, codes: impl IntoIterator<Item = &'a str>) -> Self {
        self.regions.extend(
            codes
                .into_iter()
                .filter_map(|c| subtags::Region::try_from_str(c).ok()),
        );
        self
    }

    /// Adds registered variants. Malformed codes are ignored.
    #[must_use]
    pub fn with_variants<'a>(mut self, codes: impl IntoIterator<Item = &'a str>) -> Self {
        self.variants.extend(
            codes
                .into_iter()
                .filter_map(|c| subtags::Variant::try_from_str(c).ok()),
        );
        self
    }

    /// Returns the number of registered subtags across all four categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.languages.len() + self.scripts.len() + self.regions.len() + self.variants.len()
    }

    /// Returns `true` if only the placeholder language is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 1
    }
}

impl StandardTagValidity for SubtagRegistry {
    fn is_language_code(&self, token: &str) -> bool {
        subtags::Language::try_from_str(token).is_ok_and(|s| self.languages.contains(&s))
    }

    fn is_script_code(&self, token: &str) -> bool {
        subtags::Script::try_from_str(token).is_ok_and(|s| self.scripts.contains(&s))
    }

    fn is_region_code(&self, token: &str) -> bool {
        subtags::Region::try_from_str(token).is_ok_and(|s| self.regions.contains(&s))
    }

    fn is_registered_variant(&self, token: &str) -> bool {
        subtags::Variant::try_from_str(token).is_ok_and(|s| self.variants.contains(&s))
    }
}

fn split_records(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text);
    core::iter::from_fn(move || {
        let current = rest?;
        let mut offset = 0;
        for line in current.split_inclusive('\n') {
            if line.trim_end() == "%%" {
                rest = Some(&current[offset + line.len()..]);
                return Some(&current[..offset]);
            }
            offset += line.len();
        }
        rest = None;
        Some(current)
    })
}

/// Yields `(name, value)` for each field line, skipping folded continuation lines.
fn fields(record: &str) -> impl Iterator<Item = (&str, &str)> {
    record
        .lines()
        .filter(|line| !line.starts_with([' ', '\t']))
        .filter_map(|line| line.split_once(':'))
        .map(|(name, value)| (name.trim(), value.trim()))
}

/// An error returned when parsing a [`SubtagRegistry`] fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseRegistryError {
    kind: ParseRegistryErrorKind,
    record: usize,
}

impl ParseRegistryError {
    fn new(kind: ParseRegistryErrorKind, record: usize) -> Self {
        Self { kind, record }
    }

    /// The category of this error.
    pub fn kind(&self) -> ParseRegistryErrorKind {
        self.kind
    }

    /// The 1-based index of the offending record, counting the `File-Date` record.
    pub fn record(&self) -> usize {
        self.record
    }
}

impl fmt::Display for ParseRegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            ParseRegistryErrorKind::MissingType => "has no Type field",
            ParseRegistryErrorKind::MissingSubtag => "has no Subtag field",
            ParseRegistryErrorKind::InvalidSubtag => "has a malformed Subtag",
        };
        write!(f, "registry record {} {what}", self.record)
    }
}

impl core::error::Error for ParseRegistryError {}

/// The category of a [`ParseRegistryError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseRegistryErrorKind {
    /// A record other than the `File-Date` header had no `Type` field.
    MissingType,
    /// A language, script, region or variant record had no `Subtag` field.
    MissingSubtag,
    /// A `Subtag` value did not have the shape its `Type` requires.
    InvalidSubtag,
}

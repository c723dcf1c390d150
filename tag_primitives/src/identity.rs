// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

use crate::{Category, SubtagSequence};

/// The five subtag categories of an RFC 5646 language tag.
///
/// Unlike a parsed tag, an identity under construction may temporarily hold several tokens per
/// category, or tokens that are not valid for the category they sit in. Migration moves tokens
/// between categories until the tag is well formed.
///
/// ```
/// use tag_primitives::{Category, Rfc5646Identity};
///
/// let id = Rfc5646Identity::parse("en-Zxxx-x-audio").unwrap();
/// assert_eq!(id.get(Category::Script).to_string(), "Zxxx");
/// assert_eq!(id.get(Category::PrivateUse).to_string(), "audio");
/// assert_eq!(id.to_string(), "en-Zxxx-x-audio");
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Rfc5646Identity {
    categories: [SubtagSequence; 5],
}

impl Rfc5646Identity {
    /// Creates an identity with every category empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an identity from the four loosely structured legacy fields.
    ///
    /// Each field is split on `-` without validation; private use starts out empty.
    #[must_use]
    pub fn from_legacy_fields(language: &str, script: &str, region: &str, variant: &str) -> Self {
        Self {
            categories: [
                SubtagSequence::parse(language),
                SubtagSequence::parse(script),
                SubtagSequence::parse(region),
                SubtagSequence::parse(variant),
                SubtagSequence::new(),
            ],
        }
    }

    /// Parses a complete, well-formed tag such as `en-Latn-US-fonipa-x-etic`.
    ///
    /// Casing is preserved. Extensions (singletons other than `x`) are not supported.
    #[inline(always)]
    pub fn parse(s: &str) -> Result<Self, ParseIdentityError> {
        s.parse()
    }

    /// Returns the tokens of one category.
    #[must_use]
    #[inline(always)]
    pub fn get(&self, category: Category) -> &SubtagSequence {
        &self.categories[category.index()]
    }

    /// Replaces one category, returning the previous tokens.
    pub fn replace(&mut self, category: Category, tokens: SubtagSequence) -> SubtagSequence {
        core::mem::replace(&mut self.categories[category.index()], tokens)
    }

    /// Takes one category, leaving it empty.
    pub fn take(&mut self, category: Category) -> SubtagSequence {
        core::mem::take(&mut self.categories[category.index()])
    }

    /// Returns a copy with `category` set to `tokens`.
    #[must_use]
    pub fn with(mut self, category: Category, tokens: SubtagSequence) -> Self {
        self.replace(category, tokens);
        self
    }

    /// Returns `true` if every category is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.iter().all(SubtagSequence::is_empty)
    }

    /// Returns the primary language subtag, if any.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.get(Category::Language).first()
    }

    /// Returns the script subtag, if any.
    #[must_use]
    pub fn script(&self) -> Option<&str> {
        self.get(Category::Script).first()
    }

    /// Returns the region subtag, if any.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.get(Category::Region).first()
    }
}

impl fmt::Debug for Rfc5646Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rfc5646Identity")
            .field("language", self.get(Category::Language))
            .field("script", self.get(Category::Script))
            .field("region", self.get(Category::Region))
            .field("variant", self.get(Category::Variant))
            .field("private_use", self.get(Category::PrivateUse))
            .finish()
    }
}

impl fmt::Display for Rfc5646Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        let mut write_part = |f: &mut fmt::Formatter<'_>, part: &str| {
            if !first {
                f.write_str("-")?;
            }
            first = false;
            f.write_str(part)
        };
        for category in Category::STANDARD {
            for token in self.get(category).iter() {
                write_part(f, token)?;
            }
        }
        let private_use = self.get(Category::PrivateUse);
        if !private_use.is_empty() {
            write_part(f, "x")?;
            for token in private_use.iter() {
                write_part(f, token)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Rfc5646Identity {
    type Err = ParseIdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        #[derive(Clone, Copy, PartialEq)]
        enum State {
            Start,
            AfterLanguage,
            AfterScript,
            AfterRegion,
            Private,
        }

        let mut id = Self::new();
        let mut state = State::Start;
        let mut needs_payload = false;

        for part in s.split(['-', '_']).filter(|p| !p.is_empty()) {
            let bytes = part.as_bytes();
            if state == State::Private {
                if !(1..=8).contains(&bytes.len()) || !bytes.iter().all(u8::is_ascii_alphanumeric)
                {
                    return Err(ParseIdentityError::InvalidPrivateUse);
                }
                let tokens = id.take(Category::PrivateUse).append(part);
                id.replace(Category::PrivateUse, tokens);
                needs_payload = false;
                continue;
            }

            if bytes.len() == 1 {
                if !bytes[0].eq_ignore_ascii_case(&b'x') {
                    return Err(ParseIdentityError::InvalidSubtag);
                }
                state = State::Private;
                needs_payload = true;
                continue;
            }

            let category = match state {
                State::Start => {
                    if !is_language(bytes) {
                        return Err(ParseIdentityError::InvalidLanguage);
                    }
                    state = State::AfterLanguage;
                    Category::Language
                }
                State::AfterLanguage if is_script(bytes) => {
                    state = State::AfterScript;
                    Category::Script
                }
                State::AfterLanguage | State::AfterScript if is_region(bytes) => {
                    state = State::AfterRegion;
                    Category::Region
                }
                _ if is_variant(bytes) => {
                    state = State::AfterRegion;
                    Category::Variant
                }
                _ if is_script(bytes) => return Err(ParseIdentityError::InvalidScript),
                _ if is_region(bytes) => return Err(ParseIdentityError::InvalidRegion),
                _ => return Err(ParseIdentityError::InvalidSubtag),
            };
            let tokens = id.take(category).append(part);
            id.replace(category, tokens);
        }

        if needs_payload {
            return Err(ParseIdentityError::InvalidPrivateUse);
        }
        if state == State::Start {
            return Err(ParseIdentityError::InvalidLanguage);
        }
        Ok(id)
    }
}

fn is_language(bytes: &[u8]) -> bool {
    (2..=3).contains(&bytes.len()) && bytes.iter().all(u8::is_ascii_alphabetic)
}

fn is_script(bytes: &[u8]) -> bool {
    bytes.len() == 4 && bytes.iter().all(u8::is_ascii_alphabetic)
}

fn is_region(bytes: &[u8]) -> bool {
    (bytes.len() == 2 && bytes.iter().all(u8::is_ascii_alphabetic))
        || (bytes.len() == 3 && bytes.iter().all(u8::is_ascii_digit))
}

fn is_variant(bytes: &[u8]) -> bool {
    // BCP 47 variant: 5-8 alphanum or 4 alphanum starting with a digit.
    if bytes.len() == 4 {
        bytes[0].is_ascii_digit() && bytes.iter().all(u8::is_ascii_alphanumeric)
    } else if (5..=8).contains(&bytes.len()) {
        bytes.iter().all(u8::is_ascii_alphanumeric)
    } else {
        false
    }
}

/// An error returned when parsing an [`Rfc5646Identity`] fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseIdentityError {
    /// The input did not start with a valid primary language subtag or `x`.
    InvalidLanguage,
    /// A script subtag appeared in an invalid position.
    InvalidScript,
    /// A region subtag appeared in an invalid position.
    InvalidRegion,
    /// A private-use subtag was malformed, or `x` had no payload.
    InvalidPrivateUse,
    /// The tag contained an invalid or unsupported subtag.
    InvalidSubtag,
}

impl fmt::Display for ParseIdentityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLanguage => f.write_str("invalid primary language subtag"),
            Self::InvalidScript => f.write_str("invalid script subtag"),
            Self::InvalidRegion => f.write_str("invalid region subtag"),
            Self::InvalidPrivateUse => f.write_str("invalid private use subtag"),
            Self::InvalidSubtag => f.write_str("invalid language subtag sequence"),
        }
    }
}

impl core::error::Error for ParseIdentityError {}

// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-file migration as an ordered list of named steps.

use tag_primitives::{Category, Rfc5646Identity, StandardTagValidity, SubtagSequence};

use crate::markers::{enforce_audio_script, lift_audio_marker, recover_ipa_variant};
use crate::normalize::{is_introducer, normalize};
use crate::redistribute::{move_matching, move_matching_except_first_valid};
use crate::{LegacyFields, MigrationConfig};

/// One redistribution step.
///
/// Later steps assume the earlier ones have run; [`Step::REDISTRIBUTION`] is the only valid
/// order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Drops bare `x` tokens from every category.
    StripIntroducers,
    /// Lifts the audio marker out of the language and script fields.
    LiftAudioMarker,
    /// Moves script codes out of the language field.
    ScriptsFromLanguage,
    /// Moves region codes out of the language field.
    RegionsFromLanguage,
    /// Moves registered variants out of the language field.
    VariantsFromLanguage,
    /// Demotes every token that is invalid where it sits to private use, along with any audio
    /// marker that happens to look like a valid code.
    DemoteInvalid,
    /// Moves the IPA variant from private use back to the variant field.
    RecoverIpaVariant,
    /// Keeps one language, script and region token, demoting the rest.
    CollapseSingletons,
    /// Forces the unwritten script onto audio writing systems.
    EnforceAudioScript,
    /// Fills an empty language field with the placeholder language.
    PlaceholderLanguage,
}

impl Step {
    /// Every step, in the order it must run.
    pub const REDISTRIBUTION: [Self; 10] = [
        Self::StripIntroducers,
        Self::LiftAudioMarker,
        Self::ScriptsFromLanguage,
        Self::RegionsFromLanguage,
        Self::VariantsFromLanguage,
        Self::DemoteInvalid,
        Self::RecoverIpaVariant,
        Self::CollapseSingletons,
        Self::EnforceAudioScript,
        Self::PlaceholderLanguage,
    ];

    /// Runs this step alone.
    pub fn apply<V: StandardTagValidity + ?Sized>(
        self,
        mut id: Rfc5646Identity,
        validity: &V,
        config: &MigrationConfig,
    ) -> Rfc5646Identity {
        match self {
            Self::StripIntroducers => {
                for category in Category::ALL {
                    let tokens = id.take(category).remove_all_matching(is_introducer);
                    id.replace(category, tokens);
                }
                id
            }
            Self::LiftAudioMarker => lift_audio_marker(id, config),
            Self::ScriptsFromLanguage => from_language(id, Category::Script, |t| {
                (validity.is_script_code(t), validity.is_language_code(t))
            }),
            Self::RegionsFromLanguage => from_language(id, Category::Region, |t| {
                (validity.is_region_code(t), validity.is_language_code(t))
            }),
            Self::VariantsFromLanguage => from_language(id, Category::Variant, |t| {
                (validity.is_registered_variant(t), validity.is_language_code(t))
            }),
            Self::DemoteInvalid => {
                let audio = config.audio_marker();
                for category in Category::STANDARD {
                    let (kept, private_use) = move_matching(
                        id.take(category),
                        id.take(Category::PrivateUse),
                        |t| !validity.is_valid(category, t) || t.eq_ignore_ascii_case(audio),
                    );
                    id.replace(category, kept);
                    id.replace(Category::PrivateUse, private_use);
                }
                id
            }
            Self::RecoverIpaVariant => recover_ipa_variant(id, config),
            Self::CollapseSingletons => {
                for category in [Category::Language, Category::Script, Category::Region] {
                    let (kept, private_use) = id
                        .take(category)
                        .keep_first_move_rest_to(id.take(Category::PrivateUse));
                    id.replace(category, kept);
                    id.replace(Category::PrivateUse, private_use);
                }
                id
            }
            Self::EnforceAudioScript => enforce_audio_script(id, config),
            Self::PlaceholderLanguage => {
                if id.get(Category::Language).is_empty() {
                    id.replace(
                        Category::Language,
                        SubtagSequence::new().append(config.placeholder_language()),
                    );
                }
                id
            }
        }
    }
}

/// Runs [`move_matching_except_first_valid`] from the language field into `target`.
///
/// `classify` returns `(valid for target, valid as a language)` for a token.
fn from_language(
    mut id: Rfc5646Identity,
    target: Category,
    classify: impl Fn(&str) -> (bool, bool),
) -> Rfc5646Identity {
    let (language, moved) = move_matching_except_first_valid(
        id.take(Category::Language),
        id.take(target),
        |t| classify(t).0,
        |t| classify(t).1,
    );
    id.with(Category::Language, language).with(target, moved)
}

/// Where a [`FileMigration`] is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// The legacy fields have been split into tokens.
    Parsed,
    /// Every [`Step`] has run.
    Redistributed,
    /// Private use and variants have been cleaned up.
    Normalized,
    /// The identity is final and can be recorded.
    Finalized,
}

/// The migration of one legacy record.
///
/// Each call to [`advance`](Self::advance) runs exactly one stage transition, so no stage can be
/// skipped or run out of order.
///
/// ```
/// use ldml_migrate::{FileMigration, LegacyFields, MigrationConfig, Stage};
/// use tag_primitives::WellFormedSubtags;
///
/// let config = MigrationConfig::default();
/// let fields = LegacyFields::new("en-audio", "", "", "");
/// let migration = FileMigration::new(&fields, &WellFormedSubtags, &config);
/// assert_eq!(migration.stage(), Stage::Parsed);
///
/// let migration = migration.advance();
/// assert_eq!(migration.stage(), Stage::Redistributed);
///
/// let id = migration.finish();
/// assert_eq!(id.to_string(), "en-Zxxx-x-audio");
/// ```
pub struct FileMigration<'a, V: ?Sized> {
    identity: Rfc5646Identity,
    stage: Stage,
    validity: &'a V,
    config: &'a MigrationConfig,
}

impl<V: ?Sized> core::fmt::Debug for FileMigration<'_, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FileMigration")
            .field("identity", &self.identity)
            .field("stage", &self.stage)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<'a, V: StandardTagValidity + ?Sized> FileMigration<'a, V> {
    /// Starts a migration in the [`Stage::Parsed`] state.
    pub fn new(fields: &LegacyFields, validity: &'a V, config: &'a MigrationConfig) -> Self {
        Self {
            identity: fields.to_identity(),
            stage: Stage::Parsed,
            validity,
            config,
        }
    }

    /// The current stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// The identity as of the current stage.
    pub fn identity(&self) -> &Rfc5646Identity {
        &self.identity
    }

    /// Runs the next stage transition. Advancing a finalized migration does nothing.
    #[must_use]
    pub fn advance(mut self) -> Self {
        let next = match self.stage {
            Stage::Parsed => {
                for step in Step::REDISTRIBUTION {
                    self.identity = step.apply(self.identity, self.validity, self.config);
                    log::trace!("{step:?}: {:?}", self.identity);
                }
                Stage::Redistributed
            }
            Stage::Redistributed => {
                self.identity = normalize(self.identity, self.config);
                Stage::Normalized
            }
            Stage::Normalized => {
                debug_assert!(
                    Category::ALL
                        .iter()
                        .filter(|c| c.is_singleton())
                        .all(|c| self.identity.get(*c).len() <= 1),
                    "language, script and region hold at most one token each"
                );
                Stage::Finalized
            }
            Stage::Finalized => return self,
        };
        log::trace!("{:?} -> {next:?}: {}", self.stage, self.identity);
        self.stage = next;
        self
    }

    /// Advances to [`Stage::Finalized`] and returns the identity.
    pub fn finish(mut self) -> Rfc5646Identity {
        while self.stage != Stage::Finalized {
            self = self.advance();
        }
        self.identity
    }
}

// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The audio writing system marker and the IPA variant.
//!
//! Both markers are order sensitive: the audio marker has to leave the language and script
//! fields before anything classifies it, and the IPA variant can only be recovered once the
//! generic demotion to private use has run.

use tag_primitives::{Category, Rfc5646Identity, SubtagSequence};

use crate::redistribute::move_matching;
use crate::MigrationConfig;

/// Moves the audio marker out of the language and script fields into private use and forces
/// the unwritten script.
///
/// Does nothing unless the marker appears in the language or script field.
pub fn lift_audio_marker(mut id: Rfc5646Identity, config: &MigrationConfig) -> Rfc5646Identity {
    let audio = config.audio_marker();
    if !id.get(Category::Language).contains(audio) && !id.get(Category::Script).contains(audio) {
        return id;
    }
    let is_audio = |t: &str| t.eq_ignore_ascii_case(audio);
    let language = id.take(Category::Language).remove_all_matching(is_audio);
    let script = id.take(Category::Script).remove_all_matching(is_audio);
    let private_use = id.take(Category::PrivateUse).append(audio);
    log::debug!(
        "lifting `{audio}` into private use, forcing script `{}`",
        config.unwritten_script()
    );
    let id = id
        .with(Category::Language, language)
        .with(Category::Script, script)
        .with(Category::PrivateUse, private_use);
    force_unwritten_script(id, config)
}

/// Re-establishes the unwritten script after the script field has been collapsed.
///
/// Does nothing unless private use carries the audio marker.
pub fn enforce_audio_script(id: Rfc5646Identity, config: &MigrationConfig) -> Rfc5646Identity {
    if id.get(Category::PrivateUse).contains(config.audio_marker()) {
        force_unwritten_script(id, config)
    } else {
        id
    }
}

/// Leaves exactly one unwritten-script token in the script field.
///
/// Every other script token goes to private use. Copies of the unwritten script are removed from
/// both fields; an existing copy keeps its casing, preferring the one in the script field.
fn force_unwritten_script(mut id: Rfc5646Identity, config: &MigrationConfig) -> Rfc5646Identity {
    let unwritten = config.unwritten_script();
    let is_unwritten = |t: &str| t.eq_ignore_ascii_case(unwritten);
    let (others, in_script) = id.take(Category::Script).partition(is_unwritten);
    let (private_use, in_private_use) = id.take(Category::PrivateUse).partition(is_unwritten);
    let script = SubtagSequence::new().append(
        in_script
            .first()
            .or_else(|| in_private_use.first())
            .unwrap_or(unwritten),
    );
    id.with(Category::Script, script)
        .with(Category::PrivateUse, private_use.concat(others))
}

/// Moves the IPA variant from private use back into the variant field.
///
/// The IPA variant is accepted without consulting the registry.
pub fn recover_ipa_variant(mut id: Rfc5646Identity, config: &MigrationConfig) -> Rfc5646Identity {
    let ipa = config.ipa_variant();
    if !id.get(Category::PrivateUse).contains(ipa) {
        return id;
    }
    let (private_use, variant) = move_matching(
        id.take(Category::PrivateUse),
        id.take(Category::Variant),
        |t| t.eq_ignore_ascii_case(ipa),
    );
    id.with(Category::PrivateUse, private_use)
        .with(Category::Variant, variant)
}

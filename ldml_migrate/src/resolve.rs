// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Batch-wide tag uniqueness.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use hashbrown::HashMap;
use tag_primitives::{Category, Rfc5646Identity};

use crate::{MigratedFile, MigrationConfig};

/// Makes every `tag_after` in a batch unique, ignoring ASCII case.
///
/// Any duplicate marker left over from an earlier migration is dropped first, so numbering always
/// starts again from 1. Files are then visited in batch order. When a file produces a tag that
/// an earlier file already holds, one of the two receives a numbered duplicate marker in private
/// use: the earlier file if the current one is unchanged by migration, the current one
/// otherwise. Candidate markers are tried from 1 upwards until the resulting tag is unused.
///
/// The order of the returned files matches the input.
pub fn resolve_uniqueness(files: Vec<MigratedFile>, config: &MigrationConfig) -> Vec<MigratedFile> {
    let mut files: Vec<_> = files
        .into_iter()
        .map(|file| reset_duplicate_marker(file, config))
        .collect();

    // Lowercased tag to the index of the file holding it.
    let mut seen: HashMap<String, usize> = HashMap::with_capacity(files.len());
    for index in 0..files.len() {
        let key = files[index].record().tag_after.to_ascii_lowercase();
        let Some(&holder) = seen.get(&key) else {
            seen.insert(key, index);
            continue;
        };
        let renamed = if files[index].record().is_changed() {
            index
        } else {
            holder
        };
        let identity = with_free_marker(files[renamed].identity().clone(), &seen, config);
        log::info!(
            "`{}` from {} collides, renaming to `{identity}`",
            files[renamed].record().tag_after,
            files[renamed].record().source_name,
        );
        files[renamed].set_identity(identity);
        seen.insert(files[renamed].record().tag_after.to_ascii_lowercase(), renamed);
        if renamed == holder {
            seen.insert(key, index);
        }
    }
    files
}

/// Removes duplicate markers from the private use of `file`.
fn reset_duplicate_marker(mut file: MigratedFile, config: &MigrationConfig) -> MigratedFile {
    let private_use = file.identity().get(Category::PrivateUse);
    if !private_use.iter().any(|t| config.is_duplicate_marker(t)) {
        return file;
    }
    let private_use = private_use
        .clone()
        .remove_all_matching(|t| config.is_duplicate_marker(t));
    let identity = file
        .identity()
        .clone()
        .with(Category::PrivateUse, private_use);
    log::debug!(
        "resetting duplicate marker of {}: `{identity}`",
        file.record().source_name
    );
    file.set_identity(identity);
    file
}

/// Appends the first duplicate marker that yields an unseen tag.
fn with_free_marker(
    mut identity: Rfc5646Identity,
    seen: &HashMap<String, usize>,
    config: &MigrationConfig,
) -> Rfc5646Identity {
    let base = identity
        .take(Category::PrivateUse)
        .remove_all_matching(|t| config.is_duplicate_marker(t));
    let mut n = 1;
    loop {
        let candidate = identity.clone().with(
            Category::PrivateUse,
            base.clone().append(&config.duplicate_marker(n)),
        );
        if !seen.contains_key(&candidate.to_string().to_ascii_lowercase()) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_uniqueness;
    use crate::{MigratedFile, MigrationConfig};
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;
    use tag_primitives::Rfc5646Identity;

    fn file(source: &str, before: &str, after: &str) -> MigratedFile {
        MigratedFile::new(source, before, Rfc5646Identity::parse(after).unwrap())
    }

    fn tags(files: &[MigratedFile]) -> Vec<&str> {
        files.iter().map(|f| f.record().tag_after.as_str()).collect()
    }

    #[test]
    fn changed_file_is_renumbered() {
        let files = vec![
            file("a", "en-Latn", "en-Latn"),
            file("b", "en-Latn-x-!!", "en-Latn"),
        ];
        let files = resolve_uniqueness(files, &MigrationConfig::default());
        assert_eq!(tags(&files), ["en-Latn", "en-Latn-x-dupl1"]);
        assert_eq!(files[1].identity().to_string(), "en-Latn-x-dupl1");
    }

    #[test]
    fn unchanged_file_keeps_its_tag() {
        let files = vec![file("a", "eng", "en"), file("b", "en", "en")];
        let files = resolve_uniqueness(files, &MigrationConfig::default());
        assert_eq!(tags(&files), ["en-x-dupl1", "en"]);
    }

    #[test]
    fn comparison_ignores_case() {
        let files = vec![
            file("a", "x", "en"),
            file("b", "y", "EN"),
            file("c", "z", "En"),
        ];
        let files = resolve_uniqueness(files, &MigrationConfig::default());
        assert_eq!(tags(&files), ["en", "EN-x-dupl1", "En-x-dupl2"]);
    }

    #[test]
    fn candidates_skip_every_seen_tag() {
        let files = vec![
            file("a", "changed", "en"),
            file("b", "en", "en"),
            file("c", "en", "en"),
        ];
        let files = resolve_uniqueness(files, &MigrationConfig::default());
        // `b` takes the tag from `a`, then `c` takes it from `b`.
        assert_eq!(tags(&files), ["en-x-dupl1", "en-x-dupl2", "en"]);
    }

    #[test]
    fn existing_markers_are_reset() {
        let files = vec![
            file("a", "en-x-etic-dupl7", "en-x-etic-dupl7"),
            file("b", "fr-x-DUPL2", "fr-x-DUPL2"),
        ];
        let files = resolve_uniqueness(files, &MigrationConfig::default());
        assert_eq!(tags(&files), ["en-x-etic", "fr"]);
    }

    #[test]
    fn long_prefix_still_renders_a_valid_tag() {
        let config = MigrationConfig::default().with_duplicate_prefix("duplicate");
        let files = vec![file("a", "en", "en"), file("b", "eng", "en")];
        let files = resolve_uniqueness(files, &config);
        assert_eq!(tags(&files), ["en", "en-x-duplica1"]);
        let tag = &files[1].record().tag_after;
        assert_eq!(Rfc5646Identity::parse(tag).unwrap().to_string(), *tag);
    }

    #[test]
    fn marker_follows_existing_private_use() {
        let files = vec![
            file("a", "en-x-etic", "en-x-etic"),
            file("b", "en-etic", "en-x-etic"),
        ];
        let files = resolve_uniqueness(files, &MigrationConfig::default());
        assert_eq!(tags(&files), ["en-x-etic", "en-x-etic-dupl1"]);
    }
}

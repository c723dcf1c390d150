// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};

use tag_primitives::Rfc5646Identity;

/// The four identity fields of a legacy writing system, as read from its file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LegacyFields {
    /// The ISO 639 field, possibly holding several hyphen-separated codes.
    pub language: String,
    /// The script field.
    pub script: String,
    /// The region field.
    pub region: String,
    /// The variant field, which legacy stores also used for private-use data.
    pub variant: String,
}

impl LegacyFields {
    /// Creates a set of legacy fields.
    pub fn new(language: &str, script: &str, region: &str, variant: &str) -> Self {
        Self {
            language: language.into(),
            script: script.into(),
            region: region.into(),
            variant: variant.into(),
        }
    }

    /// The tag the legacy store used for this record: the non-empty fields joined with `-`.
    pub fn legacy_tag(&self) -> String {
        let mut tag = String::new();
        for field in [&self.language, &self.script, &self.region, &self.variant] {
            let field = field.trim_matches('-');
            if field.is_empty() {
                continue;
            }
            if !tag.is_empty() {
                tag.push('-');
            }
            tag.push_str(field);
        }
        tag
    }

    /// Splits the fields into an identity with empty private use.
    pub fn to_identity(&self) -> Rfc5646Identity {
        Rfc5646Identity::from_legacy_fields(
            &self.language,
            &self.script,
            &self.region,
            &self.variant,
        )
    }
}

/// The before and after tags of one migrated file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MigrationRecord {
    /// Identifies the source file, e.g. its path.
    pub source_name: String,
    /// The legacy tag.
    pub tag_before: String,
    /// The migrated tag.
    pub tag_after: String,
}

impl MigrationRecord {
    /// Returns whether migration changed the tag, ignoring ASCII case.
    pub fn is_changed(&self) -> bool {
        !self.tag_before.eq_ignore_ascii_case(&self.tag_after)
    }

    /// The file name the migrated record should be written to.
    pub fn destination_file_name(&self) -> String {
        alloc::format!("{}.ldml", self.tag_after)
    }
}

/// A finalized identity together with its record.
///
/// The record's `tag_after` always renders the identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MigratedFile {
    record: MigrationRecord,
    identity: Rfc5646Identity,
}

impl MigratedFile {
    /// Pairs a finalized identity with its source.
    pub fn new(source_name: &str, tag_before: &str, identity: Rfc5646Identity) -> Self {
        Self {
            record: MigrationRecord {
                source_name: source_name.into(),
                tag_before: tag_before.into(),
                tag_after: identity.to_string(),
            },
            identity,
        }
    }

    /// The record.
    pub fn record(&self) -> &MigrationRecord {
        &self.record
    }

    /// The finalized identity.
    pub fn identity(&self) -> &Rfc5646Identity {
        &self.identity
    }

    /// Replaces the identity and re-renders `tag_after`.
    pub(crate) fn set_identity(&mut self, identity: Rfc5646Identity) {
        self.record.tag_after = identity.to_string();
        self.identity = identity;
    }

    /// Splits into the record and the identity.
    pub fn into_parts(self) -> (MigrationRecord, Rfc5646Identity) {
        (self.record, self.identity)
    }
}

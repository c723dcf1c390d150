// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Migrating a batch of legacy records through external readers and writers.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use tag_primitives::{Rfc5646Identity, StandardTagValidity};

use crate::resolve::resolve_uniqueness;
use crate::{FileMigration, LegacyFields, MigratedFile, MigrationConfig, MigrationRecord};

/// Reads the legacy identity fields of a source record.
pub trait LegacyRecordReader {
    /// The error returned when a source cannot be read.
    type Error;

    /// Returns the four raw identity fields of `source`.
    fn read(&self, source: &str) -> Result<LegacyFields, Self::Error>;
}

/// Writes a migrated identity back into its container format.
///
/// Everything in the source other than the identity is carried over by the writer.
pub trait MigratedRecordWriter {
    /// The error returned when a destination cannot be written.
    type Error;

    /// Writes `source`, with its identity replaced by `identity`, to `destination`.
    fn write(
        &mut self,
        source: &str,
        identity: &Rfc5646Identity,
        destination: &str,
    ) -> Result<(), Self::Error>;
}

/// Migrates batches of legacy records against one validity authority.
///
/// ```
/// use ldml_migrate::{BatchMigrator, LegacyFields};
/// use tag_primitives::WellFormedSubtags;
///
/// let migrator = BatchMigrator::new(&WellFormedSubtags);
/// let files = migrator.migrate_all([
///     ("a.ldml", LegacyFields::new("en", "Latn", "", "")),
///     ("b.ldml", LegacyFields::new("en", "Latn", "", "x-!!")),
/// ]);
/// assert_eq!(files[0].record().tag_after, "en-Latn");
/// assert_eq!(files[1].record().tag_after, "en-Latn-x-dupl1");
/// ```
pub struct BatchMigrator<'a, V: ?Sized> {
    validity: &'a V,
    config: MigrationConfig,
}

impl<V: ?Sized> fmt::Debug for BatchMigrator<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchMigrator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<'a, V: StandardTagValidity + ?Sized> BatchMigrator<'a, V> {
    /// Creates a migrator with the default configuration.
    pub fn new(validity: &'a V) -> Self {
        Self {
            validity,
            config: MigrationConfig::default(),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: MigrationConfig) -> Self {
        self.config = config;
        self
    }

    /// The configuration in use.
    pub fn config(&self) -> &MigrationConfig {
        &self.config
    }

    /// Migrates one record on its own.
    ///
    /// The result is final for this record but has not been checked against a batch.
    pub fn migrate_record(&self, source_name: &str, fields: &LegacyFields) -> MigratedFile {
        let identity = FileMigration::new(fields, self.validity, &self.config).finish();
        MigratedFile::new(source_name, &fields.legacy_tag(), identity)
    }

    /// Migrates every record, then makes the resulting tags unique across the batch.
    pub fn migrate_all<S: AsRef<str>>(
        &self,
        batch: impl IntoIterator<Item = (S, LegacyFields)>,
    ) -> Vec<MigratedFile> {
        let files = batch
            .into_iter()
            .map(|(source, fields)| self.migrate_record(source.as_ref(), &fields))
            .collect();
        resolve_uniqueness(files, &self.config)
    }

    /// Reads, migrates and writes every source.
    ///
    /// Nothing is written until every source has been read, so a read failure leaves every
    /// destination untouched. Writing stops at the first failure.
    pub fn run<R, W, S>(
        &self,
        sources: impl IntoIterator<Item = S>,
        reader: &R,
        writer: &mut W,
    ) -> Result<MigrationReport, MigrationError<R::Error, W::Error>>
    where
        R: LegacyRecordReader + ?Sized,
        W: MigratedRecordWriter + ?Sized,
        S: AsRef<str>,
    {
        let mut batch = Vec::new();
        for source in sources {
            let source = source.as_ref();
            let fields = reader.read(source).map_err(|error| MigrationError::Read {
                source_name: source.into(),
                error,
            })?;
            batch.push((String::from(source), fields));
        }

        let files = self.migrate_all(batch);
        let mut records = Vec::with_capacity(files.len());
        for file in files {
            let (record, identity) = file.into_parts();
            let destination = record.destination_file_name();
            writer
                .write(&record.source_name, &identity, &destination)
                .map_err(|error| MigrationError::Write { destination, error })?;
            if record.is_changed() {
                log::info!(
                    "{}: `{}` -> `{}`",
                    record.source_name,
                    record.tag_before,
                    record.tag_after
                );
            }
            records.push(record);
        }
        Ok(MigrationReport { records })
    }
}

/// The outcome of a batch, in batch order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MigrationReport {
    records: Vec<MigrationRecord>,
}

impl MigrationReport {
    /// Every record.
    pub fn records(&self) -> &[MigrationRecord] {
        &self.records
    }

    /// The records whose tag changed.
    pub fn changed(&self) -> impl Iterator<Item = &MigrationRecord> + '_ {
        self.records.iter().filter(|r| r.is_changed())
    }

    /// `(tag_before, tag_after)` for every changed record.
    pub fn tag_map(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.changed()
            .map(|r| (r.tag_before.as_str(), r.tag_after.as_str()))
    }
}

/// An error returned by [`BatchMigrator::run`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum MigrationError<R, W> {
    /// A source could not be read. Nothing has been written.
    Read {
        /// The source that failed.
        source_name: String,
        /// The reader's error.
        error: R,
    },
    /// A destination could not be written. Earlier destinations in the batch have been written.
    Write {
        /// The destination that failed.
        destination: String,
        /// The writer's error.
        error: W,
    },
}

impl<R: fmt::Display, W: fmt::Display> fmt::Display for MigrationError<R, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { source_name, error } => {
                write!(f, "failed to read `{source_name}`: {error}")
            }
            Self::Write { destination, error } => {
                write!(f, "failed to write `{destination}`: {error}")
            }
        }
    }
}

impl<R, W> core::error::Error for MigrationError<R, W>
where
    R: core::error::Error + 'static,
    W: core::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Read { error, .. } => Some(error),
            Self::Write { error, .. } => Some(error),
        }
    }
}

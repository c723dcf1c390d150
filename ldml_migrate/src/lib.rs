// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Migration of legacy LDML writing system identities to BCP 47 tags.
//!
//! Legacy writing system stores kept four loosely structured fields per writing system
//! (language, script, region and variant) and freely mixed codes, private-use data and
//! conventions such as an `audio` marker between them. This crate turns those fields into a
//! well-formed RFC 5646 tag:
//!
//! - Codes that sit in the wrong field are moved to the field they are valid for.
//! - Anything that is not valid where it ends up is kept as private use, never discarded unless
//!   nothing alphanumeric is left of it.
//! - Audio writing systems get the unwritten script `Zxxx` and the IPA variant is recovered.
//! - Across a batch, colliding tags are disambiguated with a numbered `dupl` marker.
//!
//! Per-file migration is a pure function of the four fields. Which codes count as valid is
//! decided by a [`StandardTagValidity`](tag_primitives::StandardTagValidity) implementation,
//! such as a [`SubtagRegistry`](tag_primitives::SubtagRegistry) loaded from the IANA registry.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//!
//! ## Example
//!
//! ```
//! use ldml_migrate::{BatchMigrator, LegacyFields};
//! use tag_primitives::SubtagRegistry;
//!
//! let registry = SubtagRegistry::new()
//!     .with_languages(["en", "tpi"])
//!     .with_scripts(["Latn", "Zxxx"])
//!     .with_regions(["PG"]);
//!
//! let files = BatchMigrator::new(&registry).migrate_all([
//!     ("tpi.ldml", LegacyFields::new("tpi-PG", "", "", "")),
//!     ("audio.ldml", LegacyFields::new("en-audio", "Latn", "", "")),
//!     ("bad.ldml", LegacyFields::new("xyz123", "", "", "")),
//! ]);
//! let tags: Vec<_> = files.iter().map(|f| f.record().tag_after.as_str()).collect();
//! assert_eq!(tags, ["tpi-PG", "en-Zxxx-x-audio-Latn", "qaa-x-xyz123"]);
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod batch;
mod config;
mod pipeline;
mod record;
mod resolve;

pub mod markers;
pub mod normalize;
pub mod redistribute;

pub use batch::{
    BatchMigrator, LegacyRecordReader, MigratedRecordWriter, MigrationError, MigrationReport,
};
pub use config::MigrationConfig;
pub use pipeline::{FileMigration, Stage, Step};
pub use record::{LegacyFields, MigratedFile, MigrationRecord};
pub use resolve::resolve_uniqueness;

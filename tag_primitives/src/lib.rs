// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Subtag vocabulary for migrating legacy writing system identifiers to BCP 47.
//!
//! This crate is the `no_std`-friendly vocabulary layer shared by the migration engine: the five
//! RFC 5646 subtag [`Category`] values, the ordered, case-insensitive [`SubtagSequence`], the
//! five-category [`Rfc5646Identity`], and the [`StandardTagValidity`] capability that decides
//! which category a token legitimately belongs to.
//!
//! Two validity implementations are provided: [`WellFormedSubtags`], which checks subtag shape
//! only, and [`SubtagRegistry`], which is backed by the text of the IANA Language Subtag
//! Registry.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//!
//! ## Example
//!
//! ```
//! use tag_primitives::{Category, Rfc5646Identity, StandardTagValidity, WellFormedSubtags};
//!
//! let legacy = Rfc5646Identity::from_legacy_fields("en-Latn", "", "", "fonipa");
//! assert_eq!(legacy.get(Category::Language).to_string(), "en-Latn");
//!
//! assert!(WellFormedSubtags.is_valid(Category::Script, "Latn"));
//! assert!(!WellFormedSubtags.is_valid(Category::Language, "Latn"));
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

mod category;
mod identity;
mod registry;
mod sequence;
mod validity;

pub use category::Category;
pub use identity::{ParseIdentityError, Rfc5646Identity};
pub use registry::{ParseRegistryError, ParseRegistryErrorKind, SubtagRegistry};
pub use sequence::SubtagSequence;
pub use validity::{
    is_private_use_token, StandardTagValidity, WellFormedSubtags, MAX_PRIVATE_USE_LEN,
};

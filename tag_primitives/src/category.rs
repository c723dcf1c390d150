// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// One of the five disjoint subtag categories of an RFC 5646 language tag.
///
/// The declaration order is the order in which the categories are rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// The primary language subtag (ISO 639).
    Language,
    /// The script subtag (ISO 15924).
    Script,
    /// The region subtag (ISO 3166-1 or UN M.49).
    Region,
    /// Registered variant subtags.
    Variant,
    /// Everything after the `x` introducer.
    PrivateUse,
}

impl Category {
    /// All categories in rendering order.
    pub const ALL: [Self; 5] = [
        Self::Language,
        Self::Script,
        Self::Region,
        Self::Variant,
        Self::PrivateUse,
    ];

    /// The categories that are validated against the standard registries.
    pub const STANDARD: [Self; 4] = [Self::Language, Self::Script, Self::Region, Self::Variant];

    #[inline(always)]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Returns whether this category may hold at most one subtag.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Language | Self::Script | Self::Region)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Language => "language",
            Self::Script => "script",
            Self::Region => "region",
            Self::Variant => "variant",
            Self::PrivateUse => "private use",
        })
    }
}

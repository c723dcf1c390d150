// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registry-backed validity compared with shape-only validity.

use tag_primitives::{
    Category, ParseRegistryErrorKind, Rfc5646Identity, StandardTagValidity, SubtagRegistry,
    SubtagSequence, WellFormedSubtags,
};

const REGISTRY: &str = "File-Date: 2024-01-01
%%
Type: language
Subtag: de
Description: German
%%
Type: language
Subtag: tpi
Description: Tok Pisin
%%
Type: script
Subtag: Latn
Description: Latin
%%
Type: region
Subtag: PG
Description: Papua New Guinea
%%
Type: region
Subtag: 419
Description: Latin America and the Caribbean
%%
Type: variant
Subtag: 1996
Description: German orthography of 1996
Prefix: de
%%
Type: redundant
Tag: de-Latn
Description: German (Latin)
";

#[test]
fn registry_is_stricter_than_shape() {
    let registry = SubtagRegistry::parse(REGISTRY).unwrap();
    let cases = [
        (Category::Language, "TPI", true),
        (Category::Language, "qaa", true),
        (Category::Language, "xyz", false),
        (Category::Script, "latn", true),
        (Category::Script, "Cyrl", false),
        (Category::Region, "pg", true),
        (Category::Region, "419", true),
        (Category::Region, "001", false),
        (Category::Variant, "1996", true),
        (Category::Variant, "fonipa", false),
    ];
    for (category, token, registered) in cases {
        assert!(
            WellFormedSubtags.is_valid(category, token),
            "`{token}` is a well-formed {category}"
        );
        assert_eq!(
            registry.is_valid(category, token),
            registered,
            "`{token}` as {category}"
        );
    }
}

#[test]
fn neither_validity_accepts_misplaced_codes() {
    let registry = SubtagRegistry::parse(REGISTRY).unwrap();
    for validity in [&registry as &dyn StandardTagValidity, &WellFormedSubtags] {
        assert!(!validity.is_language_code("Latn"));
        assert!(!validity.is_script_code("de"));
        assert!(!validity.is_region_code("tpi"));
        assert!(!validity.is_registered_variant("PG"));
    }
}

#[test]
fn errors_point_at_the_record() {
    let text = "File-Date: 2024-01-01\n%%\nType: language\nSubtag: de\n%%\nType: script\n";
    let err = SubtagRegistry::parse(text).unwrap_err();
    assert_eq!(err.kind(), ParseRegistryErrorKind::MissingSubtag);
    assert_eq!(err.record(), 3);

    let err = SubtagRegistry::parse("%%\nSubtag: de\n").unwrap_err();
    assert_eq!(err.kind(), ParseRegistryErrorKind::MissingType);
    assert_eq!(err.record(), 2);
}

#[test]
fn legacy_fields_round_trip_through_display() {
    let id = Rfc5646Identity::from_legacy_fields("de", "Latn", "", "1996")
        .with(Category::PrivateUse, SubtagSequence::parse("etic"));
    assert_eq!(id.to_string(), "de-Latn-1996-x-etic");
    assert_eq!(Rfc5646Identity::parse(&id.to_string()).unwrap(), id);
}

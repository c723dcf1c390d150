// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End to end migration against a small registry.

use hashbrown::HashSet;
use ldml_migrate::{BatchMigrator, FileMigration, LegacyFields, MigrationConfig, Stage};
use tag_primitives::{
    is_private_use_token, Category, Rfc5646Identity, StandardTagValidity, SubtagRegistry,
    WellFormedSubtags,
};

const REGISTRY: &str = "File-Date: 2024-01-01
%%
Type: language
Subtag: en
Description: English
%%
Type: language
Subtag: fr
Description: French
%%
Type: language
Subtag: de
Description: German
%%
Type: language
Subtag: es
Description: Spanish; Castilian
%%
Type: language
Subtag: tpi
Description: Tok Pisin
%%
Type: language
Subtag: qaa..qtz
Description: Private use
%%
Type: script
Subtag: Latn
Description: Latin
%%
Type: script
Subtag: Cyrl
Description: Cyrillic
%%
Type: script
Subtag: Zxxx
Description: Code for unwritten documents
%%
Type: region
Subtag: US
Description: United States
%%
Type: region
Subtag: PG
Description: Papua New Guinea
%%
Type: region
Subtag: DE
Description: Germany
%%
Type: region
Subtag: FR
Description: France
%%
Type: region
Subtag: 419
Description: Latin America and the Caribbean
%%
Type: variant
Subtag: fonipa
Description: International Phonetic Alphabet
%%
Type: variant
Subtag: 1901
Description: Traditional German orthography
Prefix: de
%%
Type: variant
Subtag: pinyin
Description: Pinyin romanization
Prefix: zh-Latn
Prefix: bo-Latn
";

/// Legacy fields and the tag each migrates to on its own.
const TABLE: &[([&str; 4], &str)] = &[
    (["en", "Latn", "", ""], "en-Latn"),
    (["en-audio", "", "", ""], "en-Zxxx-x-audio"),
    (["xyz123", "", "", ""], "qaa-x-xyz123"),
    (["en", "", "", "fonipa-fonipa"], "en-fonipa-x-fonipa"),
    (["en-Latn-US", "", "", ""], "en-Latn-US"),
    (["audio", "", "", ""], "qaa-Zxxx-x-audio"),
    (["en", "AUDIO-Cyrl", "", "fonipa"], "en-Zxxx-fonipa-x-audio-Cyrl"),
    (["en", "Latn", "419", "audio"], "en-Zxxx-419-x-audio-Latn"),
    (
        ["fr-de-en", "Latn-Cyrl", "US-FR-PG", "1901-fonipa-1901"],
        "fr-Latn-US-1901-fonipa-x-en-Cyrl-FR-PG-de-1901",
    ),
    (
        ["en", "", "", "x-etic-emic-verylongtoken-!!-ETIC"],
        "en-x-etic-emic-verylong",
    ),
    (["tpi-PG-fonipa", "", "", "x-fonipa"], "tpi-PG-fonipa-x-fonipa"),
    (["zh-pinyin", "Hans", "CN", ""], "qaa-pinyin-x-zh-Hans-CN"),
    (["EN_us", "", "", ""], "qaa-x-ENus"),
    (["", "", "", ""], "qaa"),
    (["x", "x", "x", "x"], "qaa"),
    (["", "", "", "x-Zxxx-x"], "qaa-x-Zxxx"),
];

fn registry() -> SubtagRegistry {
    SubtagRegistry::parse(REGISTRY).unwrap()
}

fn fields([language, script, region, variant]: [&str; 4]) -> LegacyFields {
    LegacyFields::new(language, script, region, variant)
}

fn migrate<V: StandardTagValidity + ?Sized>(validity: &V, legacy: [&str; 4]) -> Rfc5646Identity {
    let config = MigrationConfig::default();
    FileMigration::new(&fields(legacy), validity, &config).finish()
}

#[test]
fn table_outputs() {
    let registry = registry();
    for (legacy, expected) in TABLE {
        assert_eq!(migrate(&registry, *legacy).to_string(), *expected, "{legacy:?}");
    }
}

#[test]
fn unknown_language_becomes_private_use() {
    let id = migrate(&registry(), ["xyz123", "", "", ""]);
    assert_eq!(id.language(), Some("qaa"));
    assert!(id.get(Category::PrivateUse).contains("xyz123"));
}

#[test]
fn single_token_tags_are_unchanged() {
    let registry = registry();
    for tag in ["en", "en-Latn", "en-Latn-US", "tpi-PG-fonipa", "de-DE-1901", "fr-419"] {
        let parsed = Rfc5646Identity::parse(tag).unwrap();
        let legacy = [
            parsed.get(Category::Language).render(),
            parsed.get(Category::Script).render(),
            parsed.get(Category::Region).render(),
            parsed.get(Category::Variant).render(),
        ];
        let legacy = [
            legacy[0].as_str(),
            legacy[1].as_str(),
            legacy[2].as_str(),
            legacy[3].as_str(),
        ];
        assert_eq!(migrate(&registry, legacy).to_string(), tag);
    }
}

#[test]
fn outputs_are_well_formed() {
    let registry = registry();
    for (legacy, _) in TABLE {
        let id = migrate(&registry, *legacy);
        for category in [Category::Language, Category::Script, Category::Region] {
            assert!(id.get(category).len() <= 1, "{category} of {id}");
        }
        for category in Category::ALL {
            assert!(!id.get(category).contains("x"), "`x` in {category} of {id}");
        }

        let private_use = id.get(Category::PrivateUse);
        let mut seen = HashSet::new();
        for token in private_use.iter() {
            assert!(is_private_use_token(token), "`{token}` in {id}");
            assert!(seen.insert(token.to_ascii_lowercase()), "repeated `{token}` in {id}");
        }

        let reparsed = Rfc5646Identity::parse(&id.to_string()).unwrap();
        assert_eq!(reparsed, id);
    }
}

#[test]
fn audio_always_gets_the_unwritten_script() {
    let registry = registry();
    let sparse = SubtagRegistry::new().with_languages(["en"]);
    let authorities: [&dyn StandardTagValidity; 3] = [&registry, &sparse, &WellFormedSubtags];
    let audio_rows = TABLE
        .iter()
        .map(|(legacy, _)| *legacy)
        .filter(|legacy| legacy.iter().any(|f| f.to_ascii_lowercase().contains("audio")))
        .chain([["en", "", "", "audio"], ["en", "Latn", "", "fonipa-AUDIO"]]);
    for legacy in audio_rows {
        for validity in authorities {
            let id = migrate(validity, legacy);
            assert_eq!(id.script(), Some("Zxxx"), "{legacy:?}");
            assert_eq!(
                id.to_string().matches("Zxxx").count(),
                1,
                "{legacy:?} gave {id}"
            );
        }
    }
}

#[test]
fn colliding_tags_in_a_batch() {
    let registry = registry();
    let files = BatchMigrator::new(&registry).migrate_all([
        ("first.ldml", fields(["en", "Latn", "", ""])),
        ("second.ldml", fields(["en", "Latn", "", "x-!!"])),
    ]);
    assert_eq!(files[0].record().tag_after, "en-Latn");
    assert_eq!(files[1].record().tag_after, "en-Latn-x-dupl1");
    assert_eq!(files[1].identity().get(Category::PrivateUse).render(), "dupl1");
}

#[test]
fn batch_tags_are_unique() {
    let registry = registry();
    let batch = TABLE
        .iter()
        .chain(TABLE)
        .enumerate()
        .map(|(i, (legacy, _))| (format!("{i}.ldml"), fields(*legacy)));
    let files = BatchMigrator::new(&registry).migrate_all(batch);
    assert_eq!(files.len(), TABLE.len() * 2);

    let mut seen = HashSet::new();
    for file in &files {
        let tag = &file.record().tag_after;
        assert!(seen.insert(tag.to_ascii_lowercase()), "repeated `{tag}`");
        assert_eq!(*tag, file.identity().to_string());
    }
}

#[test]
fn stages_are_visited_in_order() {
    let registry = registry();
    let config = MigrationConfig::default();
    let mut migration = FileMigration::new(&fields(["en-audio", "", "", ""]), &registry, &config);
    let mut stages = vec![migration.stage()];
    while migration.stage() != Stage::Finalized {
        migration = migration.advance();
        stages.push(migration.stage());
    }
    assert_eq!(
        stages,
        [
            Stage::Parsed,
            Stage::Redistributed,
            Stage::Normalized,
            Stage::Finalized
        ]
    );
}

#[test]
fn reserved_tokens_come_from_config() {
    let registry = registry();
    let config = MigrationConfig::default()
        .with_audio_marker("spoken")
        .with_duplicate_prefix("dup");
    let migrator = BatchMigrator::new(&registry).with_config(config);
    let files = migrator.migrate_all([
        ("a", fields(["en-spoken", "", "", ""])),
        ("b", fields(["en-spoken", "Zxxx", "", ""])),
    ]);
    assert_eq!(files[0].record().tag_after, "en-Zxxx-x-spoken");
    assert_eq!(files[1].record().tag_after, "en-Zxxx-x-spoken-dup1");
}

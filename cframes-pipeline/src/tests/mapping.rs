//! End-to-end mapping over the fixture lexicon, corpus and parses.

use crate::{
    example_sentences, run_mapping, verb_lu_mapping, ExampleEntry, MappingConfig, MappingRecord,
    ObjectStore, RoleMapper, StoreFormat, VerbLuEntry, EXAMPLES_OBJECT, VERB_LU_OBJECT,
};
use cframes::{AlignPolicy, FrameElement, RoleDetector, RoleMapping, SpanAligner, SpanPolicy};
use cframes_framenet::{Exemplar, FrameCorpus, JsonCorpus, LexicalUnit, PrecomputedParses};
use cframes_lexicon::Lexicon;
use std::path::{Path, PathBuf};

fn framenet_fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("cframes-framenet")
        .join("fixtures")
        .join(name)
}

fn lexicon() -> Lexicon {
    Lexicon::load(&Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures").join("lexicon.txt"))
        .unwrap()
}

fn corpus() -> JsonCorpus {
    JsonCorpus::load(&framenet_fixture("corpus.json")).unwrap()
}

fn parses() -> PrecomputedParses {
    PrecomputedParses::load(&framenet_fixture("parses.json")).unwrap()
}

fn mapped(names: &[&str]) -> RoleMapping {
    RoleMapping::Mapped(names.iter().map(|name| name.to_string()).collect())
}

#[test]
fn test_verb_lu_mapping_skips_verbs_without_units() {
    let entries = verb_lu_mapping(&lexicon(), &corpus());

    let pairs: Vec<(&str, Vec<u32>)> = entries
        .iter()
        .map(|entry| (entry.verb.as_str(), entry.lu_ids.clone()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("admire", vec![106]),
            ("chase", vec![102, 103]),
            ("hate", vec![104]),
            ("love", vec![101]),
        ]
    );
    assert_eq!(&entries[3].frame, lexicon().get("love").unwrap());
}

#[test]
fn test_example_sentences_skip_units_without_exemplars() {
    let corpus = corpus();
    let examples = example_sentences(&verb_lu_mapping(&lexicon(), &corpus), &corpus);

    let ids: Vec<u32> = examples.iter().map(|example| example.lu_id).collect();
    assert_eq!(ids, vec![106, 102, 103, 101]);
    assert_eq!(examples[3].sentence, "Mary loves John .");
}

#[test]
fn test_mapping_records() {
    let corpus = corpus();
    let entries = verb_lu_mapping(&lexicon(), &corpus);
    let records = RoleMapper::default().map(&entries, &corpus, &parses());

    let lines: Vec<String> = records.iter().map(|record| record.to_string()).collect();
    insta::assert_snapshot!(lines.join("\n"), @r###"
    admire [106] Experiencer_focused_emotion: No agent role mapping possible. | No theme role mapping possible.
    chase [102] Cotheme: Agent: Theme | Theme: Cotheme (passive)
    chase [103] Self_motion: Agent: Self_mover | Theme: Goal
    hate [104] Experiencer_focused_emotion: No agent role mapping possible. | No theme role mapping possible.
    love [101] Experiencer_focused_emotion: Agent: Experiencer | Theme: Content
    "###);
}

#[test]
fn test_passive_example_swaps_roles() {
    let corpus = corpus();
    let lu = corpus.lexical_unit(102).unwrap();
    let record = RoleMapper::default().map_lexical_unit("chase", lu, &parses());

    assert!(record.passive);
    assert_eq!(record.agent, mapped(&["Theme"]));
    assert_eq!(record.theme, mapped(&["Cotheme"]));
    assert_eq!(record.sentence.as_deref(), Some("The cat was chased by the old dog ."));
}

#[test]
fn test_unparsed_sentence_is_not_possible() {
    let corpus = corpus();
    let lu = corpus.lexical_unit(106).unwrap();
    let record = RoleMapper::default().map_lexical_unit("admire", lu, &parses());

    assert_eq!(record.agent, RoleMapping::NotPossible);
    assert_eq!(record.theme, RoleMapping::NotPossible);
    assert_eq!(record.sentence.as_deref(), Some("Fans admire her ."));
    assert!(!record.is_mapped());
}

#[test]
fn test_unit_without_example_has_no_sentence() {
    let corpus = corpus();
    let lu = corpus.lexical_unit(104).unwrap();
    let record = RoleMapper::default().map_lexical_unit("hate", lu, &parses());

    assert_eq!(record.sentence, None);
    assert_eq!(record.agent, RoleMapping::NotPossible);
}

#[test]
fn test_exact_policy_rejects_partial_by_phrase() {
    let corpus = corpus();
    let lu = corpus.lexical_unit(102).unwrap();
    let mapper = RoleMapper::new(
        RoleDetector::with_policy(SpanPolicy::Short),
        SpanAligner::new(AlignPolicy::Exact),
    );
    let record = mapper.map_lexical_unit("chase", lu, &parses());

    // "the old dog" is narrower than the gold "by the old dog"
    assert_eq!(record.agent, mapped(&[]));
    assert_eq!(record.theme, mapped(&["Cotheme"]));
}

#[test]
fn test_ud_parses_map_with_configured_patterns() {
    let corpus = corpus();
    let lu = corpus.lexical_unit(102).unwrap();
    let conllu = PrecomputedParses::load(&framenet_fixture("parses.conllu")).unwrap();

    // UD attaches the by-phrase as obl:agent
    let default = RoleMapper::default().map_lexical_unit("chase", lu, &conllu);
    assert_eq!(default.agent, RoleMapping::NotPossible);

    let config =
        MappingConfig::from_toml_str("[detector]\nobject_pattern = \"obj|obl:agent\"\n").unwrap();
    let mapper = config.role_mapper().unwrap();
    let from_conllu = mapper.map_lexical_unit("chase", lu, &conllu);
    let from_json = mapper.map_lexical_unit("chase", lu, &parses());
    assert_eq!(from_conllu, from_json);
    assert_eq!(from_conllu.agent, mapped(&["Theme"]));
}

#[test]
fn test_records_survive_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = ObjectStore::new(dir.path(), StoreFormat::Ron);

    let corpus = corpus();
    let entries = verb_lu_mapping(&lexicon(), &corpus);
    let records = RoleMapper::default().map(&entries, &corpus, &parses());
    store.save("mapping_records", &records).unwrap();

    let loaded: Vec<MappingRecord> = store.load("mapping_records").unwrap();
    assert_eq!(loaded, records);
}

fn unit(name: &str, text: &str, frame_elements: Vec<FrameElement>) -> LexicalUnit {
    LexicalUnit {
        id: 900,
        name: name.to_string(),
        frame: "Experiencer_focused_emotion".to_string(),
        exemplars: vec![Exemplar {
            text: text.to_string(),
            frame_elements,
        }],
    }
}

#[test]
fn test_exemplar_with_leading_whitespace_keeps_offsets() {
    let lu = unit(
        "love.v",
        " Mary loves John .",
        vec![
            FrameElement::new(1, 5, "Experiencer"),
            FrameElement::new(12, 16, "Content"),
        ],
    );

    for policy in [AlignPolicy::Exact, AlignPolicy::Substring] {
        let mapper = RoleMapper::new(RoleDetector::default(), SpanAligner::new(policy));
        let record = mapper.map_lexical_unit("love", &lu, &parses());
        assert_eq!(record.agent, mapped(&["Experiencer"]), "{:?}", policy);
        assert_eq!(record.theme, mapped(&["Content"]), "{:?}", policy);
    }
}

#[test]
fn test_multiword_lemma_detected_through_first_word() {
    let lu = unit(
        "chase down.v",
        "The old dog chased the cat .",
        vec![
            FrameElement::new(0, 11, "Self_mover"),
            FrameElement::new(19, 26, "Goal"),
        ],
    );
    let record = RoleMapper::default().map_lexical_unit("chase", &lu, &parses());

    assert_eq!(record.agent, mapped(&["Self_mover"]));
    assert_eq!(record.theme, mapped(&["Goal"]));
}

#[test]
fn test_run_mapping_stores_every_object() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = MappingConfig::default();
    config.store.dir = dir.path().join("obj");
    config.override_policies(None, Some(AlignPolicy::Exact));

    let (records, path) =
        run_mapping(&config, &lexicon(), &corpus(), &parses(), "records").unwrap();
    assert_eq!(path, dir.path().join("obj").join("records.json"));

    let store = config.object_store();
    let entries: Vec<VerbLuEntry> = store.load(VERB_LU_OBJECT).unwrap();
    assert_eq!(entries.len(), 4);
    let examples: Vec<ExampleEntry> = store.load(EXAMPLES_OBJECT).unwrap();
    assert_eq!(examples.len(), 4);
    let stored: Vec<MappingRecord> = store.load("records").unwrap();
    assert_eq!(stored, records);

    // the exact override rejects "the old dog" against "by the old dog"
    let passive = records.iter().find(|record| record.lu_id == 102).unwrap();
    assert_eq!(passive.agent, mapped(&[]));
}

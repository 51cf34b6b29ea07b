use serde_json::json;

use super::*;

fn fixture() -> ContentStore {
    ContentStore::new(json!({
        "hero": { "name": "Ada Lovelace", "subtitle": "Analyst" },
        "certifications": {
            "title": "Certs",
            "items": [
                { "title": "First", "img": "/a.png" },
                { "title": "Second", "img": "/b.png", "link": "https://example.com" }
            ]
        },
        "contact": null
    }))
}

#[test]
fn subtree_returns_top_level_section() {
    let store = fixture();
    assert_eq!(store.subtree("hero"), Some(&json!({ "name": "Ada Lovelace", "subtitle": "Analyst" })));
}

#[test]
fn subtree_walks_objects_and_arrays() {
    let store = fixture();
    assert_eq!(store.subtree("certifications/items/1/title"), Some(&json!("Second")));
    assert_eq!(store.subtree("/certifications//items/0/img/"), Some(&json!("/a.png")));
}

#[test]
fn missing_and_null_paths_are_absent() {
    let store = fixture();
    assert_eq!(store.subtree("projects"), None);
    assert_eq!(store.subtree("contact"), None);
    assert_eq!(store.subtree("certifications/items/7"), None);
    assert_eq!(store.subtree("certifications/items/first"), None);
    assert_eq!(store.subtree("hero/name/inner"), None);
}

#[test]
fn empty_path_is_whole_document() {
    let store = fixture();
    assert!(store.subtree("").is_some_and(Value::is_object));
}

#[test]
fn format_follows_extension() {
    assert_eq!(DocumentFormat::for_path(Path::new("content/portfolio.json")), DocumentFormat::Json);
    assert_eq!(DocumentFormat::for_path(Path::new("me.YAML")), DocumentFormat::Yaml);
    assert_eq!(DocumentFormat::for_path(Path::new("me.yml")), DocumentFormat::Yaml);
    assert_eq!(DocumentFormat::for_path(Path::new("portfolio")), DocumentFormat::Json);
}

#[test]
fn parses_yaml_documents() {
    let yaml = "hero:\n  name: Ada Lovelace\nskills:\n  items:\n    - name: Rust\n";
    let store = ContentStore::parse(yaml, DocumentFormat::Yaml, Path::new("me.yaml")).unwrap();
    assert_eq!(store.subtree("hero/name"), Some(&json!("Ada Lovelace")));
    assert_eq!(store.subtree("skills/items/0/name"), Some(&json!("Rust")));
}

#[test]
fn parse_errors_name_the_file() {
    let err = ContentStore::parse("{ not json", DocumentFormat::Json, Path::new("broken.json")).unwrap_err();
    assert!(matches!(err, ContentError::Json { .. }));
    assert!(err.to_string().starts_with("invalid JSON in broken.json"));
}

#[test]
fn load_reports_missing_file() {
    let err = ContentStore::load(Path::new("does/not/exist.json")).unwrap_err();
    assert!(matches!(err, ContentError::Io { .. }));
}

#[test]
fn sections_lists_top_level_keys() {
    let mut sections = fixture().sections();
    sections.sort();
    assert_eq!(sections, ["certifications", "contact", "hero"]);
}

#[test]
fn bundled_fixture_has_every_section() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("content/portfolio.json");
    let store = ContentStore::load(&path).unwrap();
    for key in ["hero", "experience", "education", "skills", "projects", "certifications", "contact"] {
        assert!(store.subtree(key).is_some(), "fixture missing {key}");
    }
}

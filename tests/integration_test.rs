//! Integration tests for media-gallery
//!
//! These tests write catalog files to temporary directories and run the
//! complete load → filter → output workflows.

use media_gallery::{
    GalleryError,
    cli::{Cli, Commands},
    commands,
    config::GalleryConfig,
    filters::{FilterState, select_visible},
    gallery::GallerySession,
    media::{MediaItem, TypeSelection},
    store::{LoadState, MediaStore, StoreError},
};
use std::fs;
use std::path::{Path, PathBuf};

const JSON_CATALOG: &str = r#"{
  "media": [
    {
      "id": 1,
      "title": "Facebook widget",
      "type": "image",
      "description": "Shows a user's local senators and asks if they want to contact them",
      "notes": "- Added after the march\n- Local level advocacy",
      "tags": ["policy", "social media"],
      "dateAccessed": "2017-05-01",
      "link": "https://facebook.com/marchforscience"
    },
    {
      "id": 2,
      "title": "March poster",
      "type": "image",
      "description": "Carried on Earth Day",
      "tags": ["march"],
      "dateAccessed": "2017-04-01",
      "image": "https://example.org/poster.png"
    },
    {
      "id": 3,
      "title": "Rally speeches",
      "type": "video",
      "description": "Main stage livestream",
      "tags": null,
      "dateAccessed": "2017-04-22T14:00:00Z"
    }
  ]
}"#;

/// Helper function to write a catalog into a temp dir
fn write_catalog(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn ids(items: &[&MediaItem]) -> Vec<String> {
    items.iter().map(|i| i.id.to_string()).collect()
}

#[test]
fn test_default_order_and_title_search() {
    let items = vec![
        MediaItem::new(1u64, "Facebook widget", "image", "2017-05-01"),
        MediaItem::new(2u64, "March poster", "image", "2017-04-01"),
    ];

    let visible = select_visible(&items, &FilterState::new());
    assert_eq!(ids(&visible), vec!["2", "1"]);

    let visible = select_visible(&items, &FilterState::new().with_search("facebook"));
    assert_eq!(ids(&visible), vec!["1"]);
}

#[test]
fn test_json_catalog_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(dir.path(), "media.json", JSON_CATALOG);

    let store = MediaStore::open(&path).unwrap();
    assert_eq!(store.load_state(), LoadState::Loaded);
    assert_eq!(store.len(), 3);

    let all = select_visible(store.all_items(), &FilterState::new());
    assert_eq!(ids(&all), vec!["2", "3", "1"]);

    let policy = select_visible(store.all_items(), &FilterState::new().with_tag("policy"));
    assert_eq!(ids(&policy), vec!["1"]);

    // item 3 has null tags and is excluded by any tag filter
    let march_or_policy =
        select_visible(store.all_items(), &FilterState::new().with_tags(["march", "policy"]));
    assert_eq!(ids(&march_or_policy), vec!["2", "1"]);

    let videos = select_visible(store.all_items(), &FilterState::new().with_type("video"));
    assert_eq!(ids(&videos), vec!["3"]);

    let notes_hit = select_visible(store.all_items(), &FilterState::new().with_search("LOCAL LEVEL"));
    assert_eq!(ids(&notes_hit), vec!["1"]);
}

#[test]
fn test_toml_and_csv_catalogs_agree_with_json() {
    let dir = tempfile::tempdir().unwrap();

    let toml_path = write_catalog(
        dir.path(),
        "media.toml",
        r#"
[[media]]
id = 1
title = "Facebook widget"
type = "image"
tags = ["policy", "social media"]
dateAccessed = "2017-05-01"

[[media]]
id = 2
title = "March poster"
type = "image"
tags = ["march"]
dateAccessed = "2017-04-01"

[[media]]
id = 3
title = "Rally speeches"
type = "video"
dateAccessed = "2017-04-22T14:00:00Z"
"#,
    );

    let csv_path = write_catalog(
        dir.path(),
        "media.csv",
        "id,title,type,description,notes,tags,dateAccessed,image,link\n\
         1,Facebook widget,image,,,policy;social media,2017-05-01,,\n\
         2,March poster,image,,,march,2017-04-01,,\n\
         3,Rally speeches,video,,,,2017-04-22T14:00:00Z,,\n",
    );

    let state = FilterState::new().with_tag("social media");
    for path in [toml_path, csv_path] {
        let store = MediaStore::open(&path).unwrap();
        assert_eq!(ids(&select_visible(store.all_items(), &FilterState::new())), vec!["2", "3", "1"]);
        assert_eq!(ids(&select_visible(store.all_items(), &state)), vec!["1"]);
        assert_eq!(store.tag_counts().len(), 3);
    }
}

#[test]
fn test_filter_controls_from_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(dir.path(), "media.json", JSON_CATALOG);
    let store = MediaStore::open(&path).unwrap();

    assert_eq!(
        store.distinct_types(),
        vec![TypeSelection::All, TypeSelection::only("image"), TypeSelection::only("video")]
    );

    let tags: Vec<String> = store.tag_counts().into_iter().map(|tc| tc.tag).collect();
    assert_eq!(tags, vec!["policy", "social media", "march"]);
}

#[test]
fn test_gallery_session_workflow() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(dir.path(), "media.json", JSON_CATALOG);
    let store = MediaStore::open(&path).unwrap();
    let items = store.all_items();

    let mut session = GallerySession::new();
    session.set_type_selection("image");
    session.add_tag_filter("policy");
    let visible = session.visible_items(items);
    assert_eq!(ids(&visible), vec!["1"]);

    session.show_modal(visible[0].id.clone());
    let active = session.active_item(items).unwrap();
    assert_eq!(active.title, "Facebook widget");

    session.hide_modal();
    assert!(session.active_item(items).is_none());

    session.remove_tag_filter("policy");
    session.set_type_selection(TypeSelection::All);
    assert_eq!(session.visible_items(items).len(), 3);
}

#[test]
fn test_invalid_catalogs_are_rejected() {
    let dir = tempfile::tempdir().unwrap();

    let dup = write_catalog(
        dir.path(),
        "dup.json",
        r#"[{"id": 1, "title": "a", "type": "image", "dateAccessed": "2017-04-01"},
            {"id": "1", "title": "b", "type": "image", "dateAccessed": "2017-04-02"}]"#,
    );
    assert!(matches!(MediaStore::open(&dup), Err(StoreError::DuplicateId(_))));

    let reserved = write_catalog(
        dir.path(),
        "reserved.json",
        r#"[{"id": 1, "title": "a", "type": "all", "dateAccessed": "2017-04-01"}]"#,
    );
    assert!(matches!(MediaStore::open(&reserved), Err(StoreError::ReservedType(_))));

    let broken = write_catalog(dir.path(), "broken.toml", "[[media]\nid = ");
    assert!(matches!(MediaStore::open(&broken), Err(StoreError::Toml(_))));
}

#[test]
fn test_empty_catalog_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(dir.path(), "empty.json", "[]");
    let store = MediaStore::open(&path).unwrap();
    assert!(store.is_loaded());
    assert!(store.is_empty());
    assert!(select_visible(store.all_items(), &FilterState::new()).is_empty());
}

#[test]
fn test_list_command_from_parsed_cli() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(dir.path(), "media.json", JSON_CATALOG);
    let store = MediaStore::open(&path).unwrap();

    let cli = Cli::parse_from_args(["media-gallery", "list", "-q", "-T", "image"]);
    let Commands::List(args) = cli.get_command() else {
        panic!("Expected List command");
    };

    let mut out = Vec::new();
    commands::list(&store, &args, &mut out, cli.quiet).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "2\tMarch poster\n1\tFacebook widget\n"
    );
}

#[test]
fn test_show_command_unknown_item() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(dir.path(), "media.json", JSON_CATALOG);
    let store = MediaStore::open(&path).unwrap();

    let cli = Cli::parse_from_args(["media-gallery", "show", "404"]);
    let Commands::Show(args) = cli.get_command() else {
        panic!("Expected Show command");
    };

    let mut out = Vec::new();
    let result = commands::show(&store, &args, "placeholder.png", &mut out);
    assert!(matches!(result, Err(GalleryError::ItemNotFound(_))));
}

#[test]
fn test_config_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = GalleryConfig::default();
    config.set_value("catalog", "media.json").unwrap();
    config.set_value("quiet", "true").unwrap();
    config.save_to(&path).unwrap();

    let loaded = GalleryConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

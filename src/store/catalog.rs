//! Catalog file formats
//!
//! A catalog is the on-disk media list. Three formats are accepted, chosen by
//! file extension:
//!
//! - **JSON**: an array of items, or an object with a `media` array
//! - **TOML**: `[[media]]` tables
//! - **CSV**: header row `id,title,type,description,notes,tags,dateAccessed,image,link`,
//!   tags separated by `;`, empty cells meaning "absent"

use super::error::StoreError;
use crate::media::{MediaId, MediaItem};
use serde::Deserialize;
use std::path::Path;

/// Separator between tags inside a single CSV cell
pub const CSV_TAG_SEPARATOR: char = ';';

/// Supported catalog encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Toml,
    Csv,
}

impl CatalogFormat {
    /// Detect the format from a path's extension (case-insensitive)
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UnsupportedFormat` for missing or unknown extensions.
    pub fn from_path(path: &Path) -> Result<Self, StoreError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            "csv" => Ok(Self::Csv),
            _ => Err(StoreError::UnsupportedFormat(ext)),
        }
    }
}

#[derive(Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    media: Vec<MediaItem>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsvRecord {
    id: String,
    title: String,
    #[serde(rename = "type")]
    media_type: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    tags: Option<String>,
    date_accessed: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    link: Option<String>,
}

impl From<CsvRecord> for MediaItem {
    fn from(record: CsvRecord) -> Self {
        let tags = record
            .tags
            .as_deref()
            .map(|cell| {
                cell.split(CSV_TAG_SEPARATOR)
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            id: MediaId::new(record.id.trim()),
            title: record.title,
            description: record.description.unwrap_or_default(),
            // line breaks in notes are written as a literal `\n`
            notes: record.notes.map(|n| n.replace("\\n", "\n")),
            media_type: record.media_type,
            tags,
            date_accessed: record.date_accessed,
            image: record.image,
            link: record.link,
        }
    }
}

/// Parse catalog text in the given format
///
/// Only shape is checked here; id and type validation happen in the store.
///
/// # Errors
///
/// Returns a parse error for malformed input, or `StoreError::InvalidCatalog`
/// when a JSON document is neither an array nor an object with `media`.
pub fn parse_catalog(content: &str, format: CatalogFormat) -> Result<Vec<MediaItem>, StoreError> {
    match format {
        CatalogFormat::Json => parse_json(content),
        CatalogFormat::Toml => {
            let catalog: TomlCatalog = toml::from_str(content)?;
            Ok(catalog.media)
        }
        CatalogFormat::Csv => parse_csv(content),
    }
}

fn parse_json(content: &str) -> Result<Vec<MediaItem>, StoreError> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    match value {
        serde_json::Value::Array(_) => Ok(serde_json::from_value(value)?),
        serde_json::Value::Object(mut map) => match map.remove("media") {
            Some(media @ serde_json::Value::Array(_)) => Ok(serde_json::from_value(media)?),
            Some(_) => Err(StoreError::InvalidCatalog(
                "'media' must be an array of items".to_string(),
            )),
            None => Err(StoreError::InvalidCatalog(
                "expected an array of items or an object with a 'media' array".to_string(),
            )),
        },
        _ => Err(StoreError::InvalidCatalog(
            "expected an array of items or an object with a 'media' array".to_string(),
        )),
    }
}

fn parse_csv(content: &str) -> Result<Vec<MediaItem>, StoreError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(content.as_bytes());

    let mut items = Vec::new();
    for record in rdr.deserialize::<CsvRecord>() {
        items.push(MediaItem::from(record?));
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_path() {
        assert_eq!(CatalogFormat::from_path(&PathBuf::from("a.json")).unwrap(), CatalogFormat::Json);
        assert_eq!(CatalogFormat::from_path(&PathBuf::from("a.TOML")).unwrap(), CatalogFormat::Toml);
        assert_eq!(CatalogFormat::from_path(&PathBuf::from("dir/a.csv")).unwrap(), CatalogFormat::Csv);
        assert!(matches!(
            CatalogFormat::from_path(&PathBuf::from("a.yaml")),
            Err(StoreError::UnsupportedFormat(ext)) if ext == "yaml"
        ));
        assert!(CatalogFormat::from_path(&PathBuf::from("media")).is_err());
    }

    #[test]
    fn test_parse_json_array() {
        let items = parse_catalog(
            r#"[{"id": 1, "title": "Poster", "type": "image", "dateAccessed": "2017-04-01",
                 "tags": ["march"]}]"#,
            CatalogFormat::Json,
        )
        .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].tags, vec!["march".to_string()]);
    }

    #[test]
    fn test_parse_json_wrapped() {
        let items = parse_catalog(
            r#"{"media": [{"id": "a", "title": "T", "type": "video", "dateAccessed": "2017-04-01"}]}"#,
            CatalogFormat::Json,
        )
        .unwrap();
        assert_eq!(items[0].id.as_str(), "a");
    }

    #[test]
    fn test_parse_json_wrong_shape() {
        assert!(matches!(
            parse_catalog(r#"{"items": []}"#, CatalogFormat::Json),
            Err(StoreError::InvalidCatalog(_))
        ));
        assert!(matches!(
            parse_catalog(r#"{"media": 3}"#, CatalogFormat::Json),
            Err(StoreError::InvalidCatalog(_))
        ));
        assert!(matches!(parse_catalog("42", CatalogFormat::Json), Err(StoreError::InvalidCatalog(_))));
        assert!(matches!(parse_catalog("[", CatalogFormat::Json), Err(StoreError::Json(_))));
    }

    #[test]
    fn test_parse_json_missing_required_field() {
        let result = parse_catalog(r#"[{"id": 1, "type": "image", "dateAccessed": "x"}]"#, CatalogFormat::Json);
        assert!(matches!(result, Err(StoreError::Json(_))));
    }

    #[test]
    fn test_parse_toml() {
        let content = r#"
[[media]]
id = 1
title = "Facebook widget"
type = "image"
dateAccessed = "2017-05-01"
tags = ["policy"]
link = "https://facebook.com"

[[media]]
id = "two"
title = "March poster"
type = "image"
dateAccessed = "2017-04-01"
"#;
        let items = parse_catalog(content, CatalogFormat::Toml).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id.as_str(), "1");
        assert_eq!(items[0].link.as_deref(), Some("https://facebook.com"));
        assert_eq!(items[1].id.as_str(), "two");
        assert!(items[1].tags.is_empty());
    }

    #[test]
    fn test_parse_toml_empty_document() {
        assert!(parse_catalog("", CatalogFormat::Toml).unwrap().is_empty());
    }

    #[test]
    fn test_parse_csv() {
        let content = "\
id,title,type,description,notes,tags,dateAccessed,image,link
1,Facebook widget,image,Contact your senators,- One\\n- Two,policy; social media,2017-05-01,,https://facebook.com
2,March poster,image,,,,2017-04-01,poster.png,
";
        let items = parse_catalog(content, CatalogFormat::Csv).unwrap();
        assert_eq!(items.len(), 2);

        let first = &items[0];
        assert_eq!(first.tags, vec!["policy".to_string(), "social media".to_string()]);
        assert_eq!(first.notes.as_deref(), Some("- One\n- Two"));
        assert!(first.image.is_none());
        assert_eq!(first.link.as_deref(), Some("https://facebook.com"));

        let second = &items[1];
        assert!(second.tags.is_empty());
        assert!(second.notes.is_none());
        assert!(second.description.is_empty());
        assert_eq!(second.image.as_deref(), Some("poster.png"));
        assert!(second.link.is_none());
    }

    #[test]
    fn test_parse_csv_missing_column() {
        let content = "id,title\n1,Poster\n";
        assert!(matches!(parse_catalog(content, CatalogFormat::Csv), Err(StoreError::Csv(_))));
    }
}

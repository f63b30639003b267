//! The named-star description side-table
//!
//! The web front end loads `star_details.js`, a script whose single function
//! returns an object keyed by lowercase proper name:
//!
//! ```text
//! function getStarDetails() {
//!     return {
//!         "sirius": {
//!             "description": "Details to be added."
//!         }
//!     };
//! }
//! ```
//!
//! The file is treated as a JSON document wrapped in that template. Reading
//! tolerates trailing commas since the file is also edited by hand.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Description stored for names nobody has written up yet
pub const PLACEHOLDER_TEXT: &str = "Details to be added.";

static RETURN_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"return\s*(\{[\s\S]*\});").expect("valid return pattern"));
static TRAILING_COMMA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*([}\]])").expect("valid trailing comma pattern"));

#[derive(Debug, Error)]
pub enum DetailsError {
    #[error("could not read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no `return {{...}};` object literal found")]
    MissingLiteral,

    #[error("invalid details object: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("could not encode details: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("{source} (in '{path}')")]
    File {
        path: PathBuf,
        #[source]
        source: Box<DetailsError>,
    },
}

/// One side-table entry.
///
/// Keys other than `description` are carried through untouched so that
/// hand-added fields survive a rewrite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarDetail {
    #[serde(default)]
    pub description: String,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl StarDetail {
    /// Create an entry with the given description and no extra fields
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// Create an entry holding [`PLACEHOLDER_TEXT`]
    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_TEXT)
    }

    /// Whether the description is still the placeholder
    pub fn is_placeholder(&self) -> bool {
        self.description == PLACEHOLDER_TEXT
    }
}

/// Lowercase proper name → details, kept sorted by name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DetailTable {
    entries: BTreeMap<String, StarDetail>,
}

impl DetailTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the text of a side-table script
    pub fn parse(text: &str) -> Result<Self, DetailsError> {
        let captures = RETURN_LITERAL
            .captures(text)
            .ok_or(DetailsError::MissingLiteral)?;
        let literal = TRAILING_COMMA.replace_all(&captures[1], "$1");
        serde_json::from_str(&literal).map_err(DetailsError::Parse)
    }

    /// Render the table back into the script template (4-space indent)
    pub fn render(&self) -> Result<String, DetailsError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)
            .map_err(DetailsError::Encode)?;

        // serde_json only emits UTF-8
        let json = String::from_utf8_lossy(&buf);
        let body = json.replace('\n', "\n    ");
        Ok(format!("function getStarDetails() {{\n    return {body};\n}}\n"))
    }

    /// Read the side-table at `path`.
    ///
    /// A missing file is an empty table. A file that exists but cannot be
    /// parsed is an error so that it is never overwritten blindly.
    pub fn load(path: &Path) -> Result<Self, DetailsError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("'{}' not found. A new one will be created.", path.display());
                return Ok(Self::new());
            }
            Err(source) => {
                return Err(DetailsError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let table = Self::parse(&text).map_err(|e| DetailsError::File {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;
        log::debug!("Loaded {} entries from '{}'", table.len(), path.display());
        Ok(table)
    }

    /// Rewrite the side-table at `path` in full
    pub fn save(&self, path: &Path) -> Result<(), DetailsError> {
        let text = self.render()?;
        std::fs::write(path, text).map_err(|source| DetailsError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Delete the side-table at `path`.
    ///
    /// Returns Ok(true) if the file was deleted, Ok(false) if it didn't exist.
    pub fn remove_file(path: &Path) -> Result<bool, DetailsError> {
        if !path.exists() {
            return Ok(false);
        }

        std::fs::remove_file(path).map_err(|source| DetailsError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(true)
    }

    /// Insert a placeholder for every name not already present.
    ///
    /// Existing entries are never touched. Returns the number inserted.
    pub fn add_placeholders<I, S>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut added = 0;
        for name in names {
            let name = name.into();
            if !self.entries.contains_key(&name) {
                log::trace!("Adding placeholder for '{name}'");
                self.entries.insert(name, StarDetail::placeholder());
                added += 1;
            }
        }
        added
    }

    /// Names whose description is still the placeholder
    pub fn pending(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, detail)| detail.is_placeholder())
            .map(|(name, _)| name.as_str())
    }

    /// Replace the description of `name`, creating the entry if needed
    pub fn set_description(&mut self, name: &str, description: impl Into<String>) {
        self.entries
            .entry(name.to_string())
            .or_insert_with(StarDetail::placeholder)
            .description = description.into();
    }

    /// Entry for `name`, if present
    pub fn get(&self, name: &str) -> Option<&StarDetail> {
        self.entries.get(name)
    }

    /// Whether `name` already has an entry
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"function getStarDetails() {
    return {
        "sirius": {
            "description": "Brightest star in the night sky.",
        },
        "vega": {
            "description": "Details to be added.",
            "wiki": "https://en.wikipedia.org/wiki/Vega"
        },
    };
}
"#;

    #[test]
    fn test_parse_tolerates_trailing_commas() {
        let table = DetailTable::parse(SAMPLE).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.get("sirius").unwrap().description,
            "Brightest star in the night sky."
        );
        assert!(table.get("vega").unwrap().is_placeholder());
    }

    #[test]
    fn test_parse_keeps_extra_fields() {
        let table = DetailTable::parse(SAMPLE).unwrap();
        let vega = table.get("vega").unwrap();
        assert_eq!(
            vega.extra.get("wiki").and_then(|v| v.as_str()),
            Some("https://en.wikipedia.org/wiki/Vega")
        );
    }

    #[test]
    fn test_parse_without_literal() {
        assert!(matches!(
            DetailTable::parse("var x = 1;"),
            Err(DetailsError::MissingLiteral)
        ));
    }

    #[test]
    fn test_parse_bad_json() {
        let text = "function getStarDetails() {\n    return {\"a\": };\n}\n";
        assert!(matches!(
            DetailTable::parse(text),
            Err(DetailsError::Parse(_))
        ));
    }

    #[test]
    fn test_render_template() {
        let mut table = DetailTable::new();
        table.add_placeholders(["vega"]);

        let expected = "function getStarDetails() {\n    return {\n        \"vega\": {\n            \"description\": \"Details to be added.\"\n        }\n    };\n}\n";
        assert_eq!(table.render().unwrap(), expected);
    }

    #[test]
    fn test_render_empty_table() {
        assert_eq!(
            DetailTable::new().render().unwrap(),
            "function getStarDetails() {\n    return {};\n}\n"
        );
    }

    #[test]
    fn test_render_then_parse() {
        let mut table = DetailTable::parse(SAMPLE).unwrap();
        table.add_placeholders(["altair", "deneb"]);

        let reparsed = DetailTable::parse(&table.render().unwrap()).unwrap();
        assert_eq!(reparsed, table);
    }

    #[test]
    fn test_render_is_sorted() {
        let mut table = DetailTable::new();
        table.add_placeholders(["vega", "altair", "deneb"]);
        let text = table.render().unwrap();

        let altair = text.find("altair").unwrap();
        let deneb = text.find("deneb").unwrap();
        let vega = text.find("vega").unwrap();
        assert!(altair < deneb && deneb < vega);
    }

    #[test]
    fn test_add_placeholders_keeps_existing() {
        let mut table = DetailTable::parse(SAMPLE).unwrap();
        let added = table.add_placeholders(["sirius", "vega", "rigel", "rigel"]);

        assert_eq!(added, 1);
        assert_eq!(table.len(), 3);
        assert_eq!(
            table.get("sirius").unwrap().description,
            "Brightest star in the night sky."
        );
    }

    #[test]
    fn test_pending_and_set_description() {
        let mut table = DetailTable::parse(SAMPLE).unwrap();
        table.add_placeholders(["rigel"]);
        assert_eq!(table.pending().collect::<Vec<_>>(), ["rigel", "vega"]);

        table.set_description("vega", "Fifth brightest star.");
        assert_eq!(table.pending().collect::<Vec<_>>(), ["rigel"]);
        assert!(table.get("vega").unwrap().extra.contains_key("wiki"));
    }

    #[test]
    fn test_set_description_creates_entry() {
        let mut table = DetailTable::new();
        table.set_description("polaris", "The North Star.");
        assert!(table.contains("polaris"));
        assert_eq!(table.pending().count(), 0);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let table = DetailTable::load(&dir.path().join("star_details.js")).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_load_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("star_details.js");
        std::fs::write(&path, "garbage").unwrap();

        let err = DetailTable::load(&path).unwrap_err();
        assert!(matches!(err, DetailsError::File { .. }));
        assert!(err.to_string().contains("star_details.js"));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("star_details.js");

        let mut table = DetailTable::new();
        table.add_placeholders(["sirius", "vega"]);
        table.save(&path).unwrap();

        assert_eq!(DetailTable::load(&path).unwrap(), table);
    }

    #[test]
    fn test_remove_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("star_details.js");

        assert!(!DetailTable::remove_file(&path).unwrap());
        DetailTable::new().save(&path).unwrap();
        assert!(DetailTable::remove_file(&path).unwrap());
        assert!(!path.exists());
    }
}

//! Image set manifest (`Contents.json`) parsing and writing.
//!
//! Only the fields the reconciler reads are typed. Everything else is kept
//! in flattened maps so a rewrite never drops keys such as an app icon's
//! `size` or `platform`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, SyncError};

/// The manifest filename inside every image set.
pub const MANIFEST_FILENAME: &str = "Contents.json";

/// One display-mode variant recorded on an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appearance {
    pub appearance: String,
    pub value: String,
}

/// One `images` record of a manifest.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Platform classifier, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idiom: Option<String>,

    /// Assigned image file. `None` means the slot is unassigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    /// Pixel density, e.g. `"2x"`. Absent means `1x`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appearances: Option<Vec<Appearance>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ManifestEntry {
    /// Create an entry with the given idiom and scale.
    pub fn new(idiom: impl Into<String>, scale: impl Into<String>) -> Self {
        Self {
            idiom: Some(idiom.into()),
            scale: Some(scale.into()),
            ..Default::default()
        }
    }

    /// Set the recorded filename.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Append an appearance variant.
    pub fn with_appearance(
        mut self,
        appearance: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.appearances.get_or_insert_with(Vec::new).push(Appearance {
            appearance: appearance.into(),
            value: value.into(),
        });
        self
    }

    /// The scale string, defaulting to `1x` when none is recorded.
    pub fn effective_scale(&self) -> &str {
        self.scale.as_deref().unwrap_or("1x")
    }
}

/// A parsed `Contents.json`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub images: Vec<ManifestEntry>,

    /// Opaque metadata block (author, version, ...). An explicit `null`
    /// is kept as `Some(Value::Null)`; only an absent key is `None`.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub info: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Manifest {
    /// Load a manifest from an image set's `Contents.json`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| SyncError::io(path, "Failed to read manifest", e))?;

        Self::parse(&content).map_err(|e| SyncError::Manifest {
            path: path.to_path_buf(),
            message: format!("Invalid manifest: {}", e),
            help: Some("Check Contents.json syntax".to_string()),
        })
    }

    /// Parse manifest from a JSON string.
    pub fn parse(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Serialize in the layout the asset catalog tooling expects.
    ///
    /// Keys are sorted and indented by two spaces. The first key is then
    /// written as `"key" :` because the consuming tool compares the output
    /// against its own writer, which pads that delimiter. This is a
    /// compatibility shim, applied exactly once.
    pub fn to_json(&self) -> Result<String> {
        let serialize_error = |e: serde_json::Error| SyncError::Manifest {
            path: MANIFEST_FILENAME.into(),
            message: format!("Failed to serialize manifest: {}", e),
            help: None,
        };
        let value = serde_json::to_value(self).map_err(serialize_error)?;
        let json = serde_json::to_string_pretty(&sorted(value)).map_err(serialize_error)?;

        Ok(pad_first_delimiter(&json))
    }

    /// Write the manifest to disk.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| SyncError::io(path, "Failed to write manifest", e))
    }
}

fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Rebuild every object with its keys in sorted order.
fn sorted(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(entries.into_iter().map(|(k, v)| (k, sorted(v))).collect())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sorted).collect()),
        other => other,
    }
}

fn pad_first_delimiter(json: &str) -> String {
    json.replacen("\":", "\" :", 1)
}

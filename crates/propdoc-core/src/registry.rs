//! Registry manifest loading and parsing

use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The kind tag of a registry item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// A single installable component
    #[serde(rename = "registry:component")]
    Component,
    /// A larger composed block
    #[serde(rename = "registry:block")]
    Block,
    /// A low-level UI primitive
    #[serde(rename = "registry:ui")]
    Ui,
    /// Any tag this tool doesn't know about; kept so one unknown item
    /// doesn't invalidate the whole manifest
    #[serde(other, rename = "registry:unknown")]
    Other,
}

impl ItemKind {
    /// The wire string for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Component => "registry:component",
            ItemKind::Block => "registry:block",
            ItemKind::Ui => "registry:ui",
            ItemKind::Other => "registry:unknown",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A source file reference within a registry item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    /// Path relative to the manifest's base directory
    pub path: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// One distributable unit listed in a registry manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryItem {
    /// Unique name within the manifest
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Source files, in order. Only the first entry is consulted for
    /// source display; an empty list degrades to not-found downstream.
    #[serde(default)]
    pub files: Vec<FileRef>,
}

/// A registry manifest (from registry.json). Immutable after load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryManifest {
    pub items: Vec<RegistryItem>,
}

impl RegistryManifest {
    /// Parse a manifest from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).wrap_err("Failed to parse registry manifest JSON")
    }

    /// Load a manifest from a local file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read registry manifest from {}", path.display()))?;
        Self::from_json(&content)
            .wrap_err_with(|| format!("Failed to parse registry manifest from {}", path.display()))
    }

    /// First item with a matching name
    pub fn find(&self, name: &str) -> Option<&RegistryItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Names of component-kind items, in manifest order
    pub fn component_names(&self) -> impl Iterator<Item = &str> {
        self.items
            .iter()
            .filter(|item| item.kind == ItemKind::Component)
            .map(|item| item.name.as_str())
    }

    /// Number of items in this manifest
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this manifest has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"{
        "items": [
            {
                "name": "usage-meter",
                "type": "registry:component",
                "title": "Usage Meter",
                "description": "Shows resource consumption.",
                "files": [
                    { "path": "src/usage-meter.tsx", "type": "registry:component" }
                ]
            },
            {
                "name": "usage-dashboard",
                "type": "registry:block",
                "title": "Usage Dashboard",
                "files": [{ "path": "src/usage-dashboard.tsx" }]
            },
            {
                "name": "no-files",
                "type": "registry:component",
                "title": "No Files"
            }
        ]
    }"#;

    #[test]
    fn test_parse_manifest() {
        let manifest = RegistryManifest::from_json(MANIFEST).unwrap();
        assert_eq!(manifest.len(), 3);

        let item = manifest.find("usage-meter").unwrap();
        assert_eq!(item.kind, ItemKind::Component);
        assert_eq!(item.title, "Usage Meter");
        assert_eq!(item.files[0].path, "src/usage-meter.tsx");
    }

    #[test]
    fn test_missing_files_defaults_empty() {
        let manifest = RegistryManifest::from_json(MANIFEST).unwrap();
        assert!(manifest.find("no-files").unwrap().files.is_empty());
    }

    #[test]
    fn test_find_absent_item() {
        let manifest = RegistryManifest::from_json(MANIFEST).unwrap();
        assert!(manifest.find("nonexistent").is_none());
    }

    #[test]
    fn test_component_names_filters_kind() {
        let manifest = RegistryManifest::from_json(MANIFEST).unwrap();
        let names: Vec<&str> = manifest.component_names().collect();
        assert_eq!(names, ["usage-meter", "no-files"]);
    }

    #[test]
    fn test_unknown_kind_tolerated() {
        let json = r#"{
            "items": [
                { "name": "x", "type": "registry:style", "title": "X", "files": [] }
            ]
        }"#;
        let manifest = RegistryManifest::from_json(json).unwrap();
        assert_eq!(manifest.items[0].kind, ItemKind::Other);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(RegistryManifest::from_json("{ not json").is_err());
    }
}

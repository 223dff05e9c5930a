//! Component source resolution across an ordered list of registry manifests
//!
//! The locator owns the failure-as-value pipeline: every lookup returns a
//! usable value, with sentinel strings standing in for "not found" and
//! "unreadable". Callers must treat sentinels as display text, not as
//! parseable source.

use crate::cache::BuildCache;
use crate::registry::RegistryItem;
use crate::scanner::ComponentDoc;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Sentinel returned when a component is absent from every manifest (or its
/// item has no file entries)
pub fn not_found_sentinel(name: &str) -> String {
    format!("// Component \"{name}\" not found in registry")
}

/// Sentinel returned when a manifest entry resolved to a path that could not
/// be read
pub fn unreadable_sentinel(path: &Path) -> String {
    format!("// Error: Could not load source code for {}", path.display())
}

/// One manifest location with the base directory its file paths resolve
/// against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrySource {
    pub manifest: PathBuf,
    pub base_dir: PathBuf,
}

impl RegistrySource {
    /// Create a source whose base directory is the manifest's parent
    pub fn new(manifest: impl Into<PathBuf>) -> Self {
        let manifest = manifest.into();
        let base_dir = manifest.parent().map(Path::to_path_buf).unwrap_or_default();
        Self { manifest, base_dir }
    }

    /// Override the base directory file paths resolve against
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }
}

/// Resolves component names to source text and prop documentation.
///
/// Sources are tried in order; the first manifest containing the name (with a
/// non-empty file list) wins. A missing or malformed manifest is logged and
/// treated as "no match", so a broken primary never blocks the fallback.
///
/// Owns a [`BuildCache`], so the locator itself is scoped to one build.
#[derive(Debug, Default)]
pub struct SourceLocator {
    sources: Vec<RegistrySource>,
    cache: BuildCache,
    resolved: Mutex<HashMap<String, Arc<str>>>,
}

impl SourceLocator {
    /// Create a locator over an ordered list of registry sources
    pub fn new(sources: Vec<RegistrySource>) -> Self {
        Self {
            sources,
            cache: BuildCache::new(),
            resolved: Mutex::new(HashMap::new()),
        }
    }

    /// The sources this locator consults, in priority order
    pub fn sources(&self) -> &[RegistrySource] {
        &self.sources
    }

    /// Resolved path of the first matching item's first file, or `None` if
    /// the name is absent from every manifest
    pub fn component_file_path(&self, name: &str) -> Option<PathBuf> {
        for source in &self.sources {
            let Some(manifest) = self.cache.manifest(&source.manifest) else {
                continue;
            };
            let Some(item) = manifest.find(name) else {
                continue;
            };
            let Some(file) = item.files.first() else {
                tracing::warn!(component = name, "registry item has no file entries");
                continue;
            };
            return Some(source.base_dir.join(&file.path));
        }
        None
    }

    /// Raw source text for a component. Never fails: lookup and read
    /// failures are logged and reported as sentinel strings. Memoized per
    /// name, so repeated calls within a build share one `Arc` and issue at
    /// most one disk read.
    pub fn component_source(&self, name: &str) -> Arc<str> {
        if let Some(cached) = self.resolved.lock().unwrap().get(name) {
            return cached.clone();
        }

        let code: Arc<str> = match self.component_file_path(name) {
            Some(path) => match self.cache.file_contents(&path) {
                Some(contents) => contents,
                None => unreadable_sentinel(&path).into(),
            },
            None => {
                tracing::warn!(component = name, "component not found in any registry");
                not_found_sentinel(name).into()
            }
        };

        self.resolved
            .lock()
            .unwrap()
            .entry(name.to_string())
            .or_insert(code)
            .clone()
    }

    /// Prop documentation for a component. Every failure mode (unknown name,
    /// empty file list, unreadable file, no `*Props` interfaces) yields an
    /// empty slice.
    pub fn component_docs(&self, name: &str) -> Arc<[ComponentDoc]> {
        match self.component_file_path(name) {
            Some(path) => self.cache.docs(&path),
            None => Vec::new().into(),
        }
    }

    /// Component-kind item names across all sources, in source order,
    /// de-duplicated
    pub fn component_names(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for source in &self.sources {
            let Some(manifest) = self.cache.manifest(&source.manifest) else {
                continue;
            };
            for name in manifest.component_names() {
                if !seen.iter().any(|s| s == name) {
                    seen.push(name.to_string());
                }
            }
        }
        seen
    }

    /// All items across all sources; on a name collision the earlier source
    /// wins
    pub fn items(&self) -> Vec<RegistryItem> {
        let mut items: Vec<RegistryItem> = Vec::new();
        for source in &self.sources {
            let Some(manifest) = self.cache.manifest(&source.manifest) else {
                continue;
            };
            for item in &manifest.items {
                if !items.iter().any(|existing| existing.name == item.name) {
                    items.push(item.clone());
                }
            }
        }
        items
    }
}

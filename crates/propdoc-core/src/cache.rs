//! Per-build memoization for manifest loads, file reads, and extraction
//!
//! A [`BuildCache`] is scoped to one build/render pass: construct it at the
//! start, drop it at the end. It is never a process-lifetime singleton, so
//! incremental rebuilds always observe fresh filesystem state.

use crate::registry::RegistryManifest;
use crate::scanner::{self, ComponentDoc};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Build-scoped cache guaranteeing at most one underlying disk read per
/// distinct key. Concurrent callers for the same key observe one shared
/// `Arc`-held result.
#[derive(Debug, Default)]
pub struct BuildCache {
    manifests: Mutex<HashMap<PathBuf, Option<Arc<RegistryManifest>>>>,
    files: Mutex<HashMap<PathBuf, Option<Arc<str>>>>,
    docs: Mutex<HashMap<PathBuf, Arc<[ComponentDoc]>>>,
}

impl BuildCache {
    /// Create an empty cache for a new build scope
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and parse a manifest, memoized by path. A missing or malformed
    /// manifest is logged and cached as `None`, so it is read at most once
    /// per build and treated as "no match" by lookups.
    pub fn manifest(&self, path: &Path) -> Option<Arc<RegistryManifest>> {
        let mut guard = self.manifests.lock().unwrap();
        if let Some(cached) = guard.get(path) {
            return cached.clone();
        }

        let loaded = match RegistryManifest::load(path) {
            Ok(manifest) => {
                tracing::debug!(
                    path = %path.display(),
                    items = manifest.len(),
                    "loaded registry manifest"
                );
                Some(Arc::new(manifest))
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "skipping unreadable registry manifest");
                None
            }
        };
        guard.insert(path.to_path_buf(), loaded.clone());
        loaded
    }

    /// Raw file contents, memoized by resolved path. A failed read is logged
    /// and cached as `None`.
    pub fn file_contents(&self, path: &Path) -> Option<Arc<str>> {
        let mut guard = self.files.lock().unwrap();
        if let Some(cached) = guard.get(path) {
            return cached.clone();
        }

        let contents = match std::fs::read_to_string(path) {
            Ok(text) => Some(Arc::<str>::from(text)),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "failed to read component source");
                None
            }
        };
        guard.insert(path.to_path_buf(), contents.clone());
        contents
    }

    /// Extraction results for a file, memoized by resolved path. An
    /// unreadable file yields an empty (cached) slice.
    pub fn docs(&self, path: &Path) -> Arc<[ComponentDoc]> {
        if let Some(cached) = self.docs.lock().unwrap().get(path) {
            return cached.clone();
        }

        let extracted: Arc<[ComponentDoc]> = match self.file_contents(path) {
            Some(contents) => scanner::extract_docs(&contents).into(),
            None => Vec::new().into(),
        };
        self.docs
            .lock()
            .unwrap()
            .entry(path.to_path_buf())
            .or_insert(extracted)
            .clone()
    }
}

//! propdoc-core - Core library for registry-driven component documentation
//!
//! This crate provides the building blocks for:
//! - Resolving component source files through JSON registry manifests, with
//!   an ordered fallback chain of manifest locations
//! - Extracting prop documentation from `*Props` interface declarations in
//!   component source text
//! - Formatting the extracted props into display-ready API table rows
//!
//! # Resolving component source
//!
//! A [`SourceLocator`] consults an ordered list of [`RegistrySource`]s and
//! reports failure as a value, never an error: unknown names and unreadable
//! files come back as sentinel comment strings suitable for inline display.
//!
//! ```ignore
//! use propdoc_core::{RegistrySource, SourceLocator};
//!
//! let locator = SourceLocator::new(vec![
//!     RegistrySource::new("packages/ui/registry.json"),
//!     RegistrySource::new("apps/www/registry.json"),
//! ]);
//!
//! // Raw text for display, or a `// Component "..." not found` sentinel
//! let code = locator.component_source("usage-meter");
//! // Extracted docs, empty on any failure
//! let docs = locator.component_docs("usage-meter");
//! ```
//!
//! All lookups are memoized through a build-scoped [`BuildCache`]: within one
//! locator's lifetime each manifest and each source file is read from disk at
//! most once, and repeated lookups share one result.
//!
//! # Extracting prop documentation
//!
//! [`extract_docs`] is a pure function over source text:
//!
//! ```
//! use propdoc_core::extract_docs;
//!
//! let docs = extract_docs(
//!     r#"
//!     interface MeterProps {
//!         /** Current value */
//!         value: number;
//!         /** Maximum value (default: 100) */
//!         max?: number;
//!     }
//!     "#,
//! );
//!
//! assert_eq!(docs[0].display_name, "Meter");
//! assert!(docs[0].props[0].required);
//! assert_eq!(docs[0].props[1].default.as_deref(), Some("100"));
//! ```
//!
//! The scanner is best-effort by design: it targets the stylized declaration
//! patterns used by registry components, and anything it does not recognize
//! shrinks the output instead of failing it.

mod cache;
mod format;
mod locate;
mod registry;
mod scanner;

pub use cache::BuildCache;
pub use format::{ApiRow, NO_DEFAULT, format_rows, format_type};
pub use locate::{RegistrySource, SourceLocator, not_found_sentinel, unreadable_sentinel};
pub use registry::{FileRef, ItemKind, RegistryItem, RegistryManifest};
pub use scanner::{ComponentDoc, PropInfo, extract_docs};

//! Directory scanning and navigation manifest construction.
//!
//! Scans a flat directory of generated reference pages and produces the
//! [`NavDocument`] that [`crate::output`] serializes.
//!
//! ## Filtering
//!
//! Only entry *names* are inspected, never entry types: a subdirectory
//! named `guide.md` is included exactly like a regular file, and file
//! contents are never read. The single filter rule is the literal `.md`
//! suffix, applied by [`crate::naming::nav_title`].
//!
//! ## Ordering
//!
//! Entries are sorted ascending by derived title under plain `String`
//! ordering (byte order, case-sensitive: `"Beta"` sorts before
//! `"alpha"`). The sort is stable, so two files that derive the same
//! title keep their directory-enumeration order; duplicates are
//! retained, never merged.

use crate::naming::nav_title;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One navigation entry: a derived display title mapped to the original
/// filename (extension included).
///
/// Serializes as a single-key JSON object, `{"getting started":
/// "getting_started.md"}` — the shape the site generator's nav config
/// expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    /// Display title: filename minus `.md`, underscores → spaces
    pub title: String,
    /// Original directory entry name, extension included
    pub filename: String,
}

impl Serialize for NavEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.title, &self.filename)?;
        map.end()
    }
}

/// The manifest emitted on stdout: `{"nav": [...]}`, one top-level key.
#[derive(Debug, serde::Serialize)]
pub struct NavDocument {
    pub nav: Vec<NavEntry>,
}

/// Scan `dir` and build the navigation manifest.
///
/// Enumerates the immediate entries of `dir` (non-recursive), keeps the
/// `.md`-suffixed names, derives titles, and stable-sorts by title. A
/// listing failure (missing path, not a directory, permission denied)
/// surfaces as [`NavError::Io`] — the caller treats it as fatal
/// misconfiguration, there is no recovery path.
pub fn build_nav(dir: &Path) -> Result<NavDocument, NavError> {
    let mut nav: Vec<NavEntry> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .filter_map(|e| {
            let filename = e.file_name().to_string_lossy().into_owned();
            nav_title(&filename).map(|title| NavEntry { title, filename })
        })
        .collect();

    // Stable sort: duplicate titles keep enumeration order
    nav.sort_by(|a, b| a.title.cmp(&b.title));

    Ok(NavDocument { nav })
}

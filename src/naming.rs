//! Centralized filename parsing for reference-doc names.
//!
//! Generated reference pages follow one naming pattern: a snake_case stem
//! plus the `.md` extension. This module provides the single function that
//! both recognizes eligible filenames and derives their display titles.
//!
//! ## Display Titles
//!
//! Underscores in the stem are converted to spaces for display:
//! - `getting_started.md` → "getting started"
//! - `api_reference.md` → "api reference"
//! - `faq.md` → "faq"

/// Derive the navigation title for a directory entry name.
///
/// Returns `None` when the name does not end with the literal `.md`
/// suffix — such entries are not reference pages and are skipped. The
/// suffix check is case-sensitive: `README.MD` is not a match.
///
/// For a matching name, the title is the name with the trailing `.md`
/// removed and every underscore replaced by a space. Nothing else is
/// touched: no case change, no trimming, consecutive underscores each
/// become their own space.
///
/// - `"getting_started.md"` → `Some("getting started")`
/// - `"a__b.md"` → `Some("a  b")`
/// - `"x.md.md"` → `Some("x.md")` (only the final suffix is stripped)
/// - `".md"` → `Some("")` (empty stem is a legal, empty title)
/// - `"notes.txt"` → `None`
pub fn nav_title(name: &str) -> Option<String> {
    name.strip_suffix(".md").map(|stem| stem.replace('_', " "))
}

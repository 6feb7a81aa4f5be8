//! # navgen
//!
//! Navigation manifest generator for documentation sites. Point it at a
//! directory of generated reference pages and it prints a JSON document
//! mapping display titles to filenames, ready to be redirected into the
//! site generator's navigation config:
//!
//! ```text
//! $ navgen docs/reference > nav.json
//! {
//!   "nav": [
//!     {"api reference": "api_reference.md"},
//!     {"getting started": "getting_started.md"}
//!   ]
//! }
//! ```
//!
//! # Pipeline
//!
//! A single stateless pass: argument check → directory scan → filter →
//! title derivation → sort → serialize → emit. The scan is non-recursive,
//! file contents are never read, and no state survives the invocation.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`naming`] | `.md` filename convention: filter rule and title derivation |
//! | [`nav`] | Directory scan, `NavEntry`/`NavDocument` construction, sort |
//! | [`output`] | JSON serialization of the document to a writer |
//!
//! # Design Decisions
//!
//! ## Filenames Are the Data Source
//!
//! Titles come from filenames alone: strip the `.md` suffix, turn
//! underscores into spaces. No front-matter parsing, no content reads —
//! the generator that produced the pages already encoded the titles in
//! the names, and re-deriving them keeps this tool a pure directory
//! transform.
//!
//! ## Byte-Order Sort
//!
//! Entries sort by plain `String` comparison: case-sensitive, no locale.
//! A build pipeline needs the same output on every machine, and locale
//! collation is exactly the kind of environment dependence that breaks
//! that. Uppercase-before-lowercase is the accepted cost.
//!
//! ## Fatal Filesystem Errors
//!
//! An unlistable directory aborts the run with a diagnostic and non-zero
//! exit. The tool runs inside a build pipeline that is responsible for
//! handing it a valid path; a missing directory means the pipeline is
//! misconfigured, and a partial or empty manifest would hide that.

pub mod naming;
pub mod nav;
pub mod output;

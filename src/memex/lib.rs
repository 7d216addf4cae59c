//! # Memex Architecture
//!
//! Memex maintains a Jekyll-style documentation repository: Markdown posts under
//! `docs/<folder>/`, each opening with a YAML front-matter block, and a small
//! taxonomy of categories and tags in `docs/_data/taxonomy.yml`.
//!
//! The heart of the crate is the front-matter lifecycle. A new document gets a
//! title derived from its slug, categories inferred from directory rules, and a
//! deterministic block of YAML; an existing document can be re-stamped or
//! re-normalized without touching its body.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, prints colored messages       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Holds store, paths, settings and clock                   │
//! │  - Dispatches to commands                                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - new, touch/fmt, taxa, init, clean                        │
//! │  - Returns CmdResult with leveled messages                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (model, frontmatter, rules, title, clock, store/)     │
//! │  - Typed front matter and its single serializer             │
//! │  - TaxonomyStore trait: file (production), memory (testing) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Front Matter Model
//!
//! Recognized keys are an enum ([`model::Field`]) whose declaration order is the
//! output order, and each key carries a [`model::FieldStyle`]. The serializer in
//! [`frontmatter`] is the only code that turns a [`model::FrontMatter`] into text:
//! `categories` and `tags` become inline `[a, b]` sequences, everything else is a
//! plain block entry. Keys memex doesn't know are kept in an extras mapping and
//! written after the known ones.
//!
//! ## Time
//!
//! Commands never read the system clock directly. They get a [`clock::Clock`] from
//! the API, so tests freeze time and pick a zone.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`store`]: Taxonomy persistence
//! - [`model`]: Front matter and taxonomy types
//! - [`frontmatter`]: Render, parse and split front matter
//! - [`rules`]: Directory rules to categories
//! - [`title`]: Slug to title
//! - [`clock`]: Time zones and timestamp formats
//! - [`text`]: Punctuation cleanup
//! - [`config`]: `.memex.yml` settings
//! - [`init`]: Repository discovery and context wiring
//! - [`error`]: Error types
//! - `cli`: Argument parsing, prompts and printing for the binary (not part of the lib API)

pub mod api;
pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod frontmatter;
pub mod init;
pub mod model;
pub mod rules;
pub mod store;
pub mod text;
pub mod title;

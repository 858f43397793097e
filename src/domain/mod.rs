//! Shared data model layer (structs only).
//!
//! ## Purpose
//! - Keep the transcript structs in one place.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — transcript, section, line, and the JSON envelope.
//!
//! ## Rule of thumb
//! Domain types are data-only: no printing, no side effects.
//!
//! ## Compatibility note
//! Changes in these structs affect `--json` output. Keep them in sync
//! with `docs/contracts/transcript.schema.json`.

pub mod models;

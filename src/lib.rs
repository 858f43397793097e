//! Two instructional programs that walk through language basics.
//!
//! `primer-variables` covers binding styles, primitive types and their
//! defaults, constants, conversion, and shadowing. `primer-datatypes`
//! covers primitives, composites, reference-like constructs, and
//! special types. Each binary assembles a fixed [`domain::models::Transcript`]
//! and prints it as labeled text or, with `--json`, as a machine-readable
//! envelope.

pub mod cli;
pub mod demos;
pub mod domain;
pub mod output;

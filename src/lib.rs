//! Search normalization and featured selections for a governorate/office
//! directory.
//!
//! `directory-core` canonicalizes Arabic and Latin place names so that search
//! queries match directory entries despite spelling variation, and produces
//! a small "featured" subset of governorates and offices that stays stable
//! for a week at a time through a pluggable persistent store.
//!
//! Every public entry point is total: store failures degrade to
//! recomputation, malformed directory data degrades to empty pools.

pub mod cache;
pub mod geo;
pub mod selection;
pub mod text;
pub mod types;

pub use text::{fuzzy_match, normalize};

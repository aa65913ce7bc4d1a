//! Discover, load, and validate controller action manifests.
//!
//! - `core::manifest`: model, JSON codec, validation rules
//! - `core::classify`: cheap "is this an action manifest?" check
//! - `core::discovery`: walk a library directory for candidate files
//! - `core::batch`: per-file and batch validation with failure isolation

pub mod core;

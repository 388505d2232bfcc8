//! Core domain logic for gounit
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (declarations, selections, signature views)
//! - `services/` - Selection, resolution and generation
//! - `ports/` - Trait definitions for the Go parser and import normalizer

pub mod models;
pub mod ports;
pub mod services;

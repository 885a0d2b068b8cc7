//! Core introspection logic
//!
//! Everything here works on bytes, paths and traits; nothing spawns a process
//! directly. Git is reached only through the port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (conflict state, index entries, pattern pairs)
//! - `services/` - Splitting, parsing, matching and memoization
//! - `ports/` - Trait definitions for the process runner, working directory and VCS

pub mod models;
pub mod ports;
pub mod services;

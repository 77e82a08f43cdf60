//! Record types for the command catalog
//!
//! A catalog is an ordered list of named commands, each holding an ordered
//! sequence of steps. Records are plain value objects: construction happens
//! through serde for the catalog file, or through the lenient hydration
//! path in [`crate::hydrate`] for raw JSON exchanged with a frontend.

pub mod command;
pub mod item;

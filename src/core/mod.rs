//! Core conversion building blocks: base-token resolution, target parsing,
//! and radix rendering. These are the primitives consumed by the high-level
//! `api` module.
pub mod base;
pub mod params;
pub mod render;
pub mod target;

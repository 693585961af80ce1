//! # Config Crate
//!
//! Centralized configuration constants for the sphere mesh generator.
//! All magic numbers and tunable parameters are defined here so the
//! generator crates never carry literal limits or tolerances.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{is_unit_length, MIN_RESOLUTION, MAX_RESOLUTION};
//!
//! let resolution = 3;
//! assert!((MIN_RESOLUTION..=MAX_RESOLUTION).contains(&resolution));
//!
//! assert!(is_unit_length(1.0 + 1e-7));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Dependency Free**: Pure Rust, no external crates
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;

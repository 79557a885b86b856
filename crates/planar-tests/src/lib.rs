//! Integration tests for planar-rs crates.
//!
//! This crate contains end-to-end tests that verify the interaction between
//! the core buffer type, the transforms, and the color codec.

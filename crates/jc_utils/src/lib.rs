//! Shared containers for the `jc_*` crates.
//!
//! Everything here is deterministic: hash containers use a fixed seed and
//! ordered containers keep insertion order, so generated output and lookup
//! behavior never depend on process-level randomness.
#![no_std]

// -----------------------------------------------------------------------------
// No STD Support

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

pub mod hash;

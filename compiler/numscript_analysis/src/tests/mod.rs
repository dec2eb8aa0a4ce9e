//! Analyzer tests.
//!
//! - `diagnostics`: one test per diagnostic family
//! - `properties`: ordering and determinism over generated input

mod properties;

//! # ciede2000-tests
//!
//! Test harness for `ciede2000-core`.
//!
//! This crate provides:
//! - A CSV batch driver appending ΔE2000 to `L1,a1,b1,L2,a2,b2` rows
//! - Seeded random test vectors with integer/decimal snapping
//! - Verification of result files written by other implementations
//! - Cross-implementation parity with divergence statistics
//! - Structured edge-case patterns
//!
//! ## Reference Implementations
//!
//! - **palette**: the `palette` crate's `Ciede2000` trait
//! - **textbook**: a step-by-step formulation in degrees
//! - **sharma**: this crate under the other mean-hue convention

pub mod accuracy;
pub mod csv;
pub mod generator;
pub mod parity;
pub mod patterns;
pub mod reference;
pub mod verify;

pub use accuracy::DivergenceStats;
pub use csv::{DriverSummary, format_delta_e, run_driver};
pub use generator::{GeneratorConfig, Rounding, VectorGenerator};
pub use parity::{CrossValidation, ParityResult, ReferenceImpl};
pub use verify::{VerifyOptions, VerifySummary, verify};

//! # moebius-tests
//!
//! Property and reference testing framework for moebius.
//!
//! This crate provides:
//! - Seeded random generators for points, transformations, triples and circles
//! - Independent reference computations (circumcircles, cross ratios)
//! - Boundary and point error statistics
//! - A JSON corpus of worked scenarios
//! - A parallel property runner sweeping many seeds
//!
//! ## Test Categories
//!
//! 1. **Transform algebra**: composition, inversion, double inversion
//! 2. **Point correspondence**: three-point fitting
//! 3. **Circle mapping**: boundary preservation against sampled images
//! 4. **Batch evaluation**: parity with scalar calls
//! 5. **Scenarios**: hand-checked worked examples

pub mod accuracy;
pub mod corpus;
pub mod patterns;
pub mod property;
pub mod reference;

pub use accuracy::{ErrorStats, boundary_errors, point_errors};
pub use property::{PropertyReport, run_property};

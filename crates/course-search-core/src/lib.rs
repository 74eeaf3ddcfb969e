//! # Course Search Core
//!
//! Pure, I/O-free logic for Course Search: the course record model,
//! catalog aggregation, query normalization, the course matcher, and the
//! static career and program lookup tables.
//!
//! This crate contains no tokio, axum, filesystem, or logging
//! dependencies. Everything here is a synchronous function over
//! immutable data.

pub mod careers;
pub mod catalog;
pub mod matcher;
pub mod models;
pub mod programs;
pub mod query;

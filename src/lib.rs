//! # Course Search
//!
//! A course-search API over static institution catalogs.
//!
//! Each configured institution contributes a JSON array of course records.
//! The records are aggregated once at startup, tagged with their campus,
//! and searched per request by free-text query, extra keywords, and campus
//! filters. Career-to-CIP and program-to-prefix lookup tables live in
//! [`course_search_core`] alongside the matching logic.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ JSON catalogs│──▶│  Aggregator  │──▶│   Catalog    │
//! │ (per campus) │   │  tag campus  │   │  (read-only) │
//! └──────────────┘   └──────────────┘   └──────┬───────┘
//!                                              │
//!                      ┌───────────────────────┤
//!                      ▼                       ▼
//!                 ┌──────────┐           ┌──────────┐
//!                 │   CLI    │           │   HTTP   │
//!                 │ (search) │           │  (axum)  │
//!                 └──────────┘           └──────────┘
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`catalog`] | Catalog file loading and aggregation |
//! | [`search`] | Response envelope and CLI search |
//! | [`server`] | HTTP server |
//! | [`campuses`] | `campuses` command output |
//! | [`lookups`] | Career and program lookup command output |
//! | [`logging`] | Tracing subscriber setup |

pub mod campuses;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod lookups;
pub mod search;
pub mod server;

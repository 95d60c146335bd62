//! Core library for showreel
//!
//! This crate implements the **Functional Core** of the showreel application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The showreel project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`showreel_core`** (this crate): Pure transformation functions with zero I/O
//! - **`showreel`**: I/O operations and orchestration (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Deterministic**: Behavior is predictable and reproducible
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! The core crate is organized by domain:
//!
//! - [`content`]: Record-to-ContentItem transformation, grouping, and hero selection
//! - [`era`]: Named time-period table and year-range classification
//! - [`images`]: Cover/logo/project-image fallback chains and CDN URL enhancement
//! - [`labels`]: Skill, tool, and category display-name resolution
//! - [`slug`]: URL-safe identifier derivation with per-batch uniqueness
//!
//! Each module contains:
//!
//! - **Domain models**: Structured types representing API responses and outputs
//! - **Transformation functions**: Pure functions that convert API data to domain models
//! - **Comprehensive tests**: Unit tests using fixture data (no mocking)
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use showreel_core::content::{transform_records, Record};
//!
//! // Create fixture data (no HTTP required)
//! let records: Vec<Record> = vec![/* ... */];
//!
//! // Transform using pure function
//! let items = transform_records(&records, 0);
//!
//! // Assert on results (no mocking needed)
//! assert!(items.iter().all(|item| !item.id.is_empty()));
//! ```
//!
//! The key insight: **data transformation logic should be pure and ignorant of
//! where data comes from or where it goes**. The shell decides when to fetch,
//! cache, and serve; this crate only decides what the data means.

pub mod content;
pub mod era;
pub mod images;
pub mod labels;
pub mod slug;

//! Core library for pokedex
//!
//! This crate implements the **Functional Core** of the pokedex application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The pokedex project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`pokedex_core`** (this crate): Pure transformation functions with zero I/O
//! - **`pokedex`**: I/O operations and orchestration (the Imperative Shell)
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
//! - [`model`]: The catalog item shape as returned by the PokeAPI GraphQL
//!   endpoint, plus field accessors that degrade missing data to neutral
//!   defaults
//! - [`view`]: View parameters and the filter/sort/paginate pipeline that
//!   computes the visible page of the catalog
//! - [`detail`]: Transformation of a single catalog item into the detail
//!   output rendered by the shell
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
//! use pokedex_core::view::{transform_catalog_page, ViewParams};
//!
//! let params = ViewParams::default();
//! let output = transform_catalog_page(&pokemons, &params);
//! println!("{} of {} visible", output.items.len(), output.pagination.total_items);
//! ```

pub mod detail;
pub mod model;
pub mod view;

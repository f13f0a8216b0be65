//! Core library for storefront
//!
//! This crate implements the **Functional Core** of the storefront project,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The storefront project uses a two-crate architecture to enforce separation
//! of concerns:
//!
//! - **`storefront_core`** (this crate): Pure transformation functions with zero I/O
//! - **`storefront`**: CLI argument handling, document reading, and terminal
//!   rendering (the Imperative Shell)
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
//! - [`query`]: Assembly of GraphQL-style request strings for the content API
//! - [`response`]: Envelope types for the documents the content API returns
//! - [`shop`]: Transformations for the shop header display
//! - [`catalog`]: Transformations for product catalog listings
//!
//! Each module contains:
//!
//! - **Domain models**: Structured types representing requests, responses and outputs
//! - **Transformation functions**: Pure functions over those models
//! - **Comprehensive tests**: Unit tests using fixture data (no mocking)
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use storefront_core::query::{build_collection, wrap_query, CmpOp, FieldCondition, Filter};
//!
//! let filter = Filter::new().field("name", FieldCondition::eq("shop"));
//! let body = build_collection("products", &["name", "price"], Some(&filter), None, None, None);
//! let query = wrap_query(&body);
//!
//! assert!(query.starts_with("query { products(filters: "));
//! ```
//!
//! The assembled query string is handed to an external transport collaborator;
//! this crate never performs network I/O.

pub mod catalog;
pub mod query;
pub mod response;
pub mod shop;

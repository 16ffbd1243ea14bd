//! Sortable, filterable book list with content-based recommendations.
//!
//! The list logic lives in [`services`] and is plain synchronous code over
//! in-memory records. [`api`] exposes it over HTTP, holding the catalog and
//! the open lists in memory.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;

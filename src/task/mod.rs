//! Task tracking for Taskdeck.
//!
//! This module implements owner-scoped task records (title, description,
//! status, priority, optional due date) together with the aggregation engine
//! behind the dashboard: status counts, overdue and due-today tallies, and
//! recency-ordered listings. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

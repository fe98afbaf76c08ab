//! Taskdeck: owner-scoped task tracking core.
//!
//! This crate provides the domain model, persistence ports, and application
//! services behind a personal task tracker: creating, updating, and deleting
//! tasks scoped to their owning user, and deriving the dashboard and list
//! views (status counts, overdue and due-today tallies, recency-ordered
//! listings) from an owner's task set.
//!
//! # Architecture
//!
//! Taskdeck follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! Request routing, authentication, and rendering live outside this crate;
//! handlers call into [`task`] services with an explicit owner identifier.

pub mod task;

//! Domain layer for the planets service.
//!
//! Holds the [`planet::Planet`] record, the query-by-example builder, the
//! [`repository::PlanetRepository`] port, and the [`service::PlanetService`]
//! that the HTTP layer talks to. Nothing in here depends on a concrete
//! storage backend.

pub mod error;
pub mod planet;
pub mod query;
pub mod repository;
pub mod service;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

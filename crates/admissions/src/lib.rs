//! Ranking and statistics engine for university admission candidates.
//!
//! The [`admissions`] module holds the pure core (minority policy, ranker and
//! statistics aggregator) together with the loader, repository and service
//! collaborators that feed it. [`config`], [`telemetry`] and [`error`] carry
//! the ambient plumbing shared with the command line front end.

pub mod admissions;
pub mod config;
pub mod error;
pub mod telemetry;

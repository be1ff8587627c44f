//! Kanban boards, lists, tasks, and the user action log.
//!
//! Lists are ordered within a board and tasks within a list. The ordering
//! engine and the move coordinator in [`services`] rewrite those orders, and
//! every mutation records one audit entry in the same transaction. The module
//! follows hexagonal architecture:
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

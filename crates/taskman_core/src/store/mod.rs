//! In-memory stores acting as the system of record per entity type.
//!
//! # Responsibility
//! - Define use-case oriented store contracts (traits) consumed by the
//!   service layer.
//! - Provide the in-memory implementations used in production and tests.
//!
//! # Invariants
//! - Ids are monotonically increasing positive integers, assigned once,
//!   never reused and never mutated after assignment.
//! - Read queries return snapshot clones; mutating a returned collection
//!   never affects store state.
//! - Every store instance is an explicitly constructed owned component;
//!   there is no process-global state.

pub mod project_store;
pub mod task_store;

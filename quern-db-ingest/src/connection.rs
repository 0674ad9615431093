//! Transactional store connection trait
//!
//! This module defines the connection surface the committer writes through.
//! The trait is deliberately minimal: add a statement (optionally redirected
//! to a graph), commit the open transaction, begin a new one. Storage engines
//! provide their own implementations; an in-memory implementation lives here
//! for tests and small in-process loads.

use crate::error::StoreError;
use quern_graph_ir::{Statement, Term};
use std::fmt::Debug;

/// A transactional connection to a statement store
///
/// A connection always has one open transaction. `commit` closes it and must
/// leave the store in the pre-commit state on failure; `begin` opens the next
/// one and is callable immediately after a successful `commit`.
pub trait Connection {
    /// Add a statement to the open transaction
    ///
    /// With `graph: Some(g)` the statement is stored in `g`, overriding the
    /// statement's own context. With `None` the statement's own context (or
    /// the default graph) applies.
    fn add(&mut self, stmt: &Statement, graph: Option<&Term>) -> Result<(), StoreError>;

    /// Commit the open transaction
    fn commit(&mut self) -> Result<(), StoreError>;

    /// Begin a new transaction
    fn begin(&mut self) -> Result<(), StoreError>;
}

impl<C: Connection> Connection for &mut C {
    fn add(&mut self, stmt: &Statement, graph: Option<&Term>) -> Result<(), StoreError> {
        (**self).add(stmt, graph)
    }

    fn commit(&mut self) -> Result<(), StoreError> {
        (**self).commit()
    }

    fn begin(&mut self) -> Result<(), StoreError> {
        (**self).begin()
    }
}

// ============================================================================
// MemoryConnection Implementation
// ============================================================================

/// In-memory connection for tests and small in-process loads
///
/// Statements added since the last commit sit in `staged`; `commit` moves
/// them to `committed`. Each entry records the effective context the
/// statement was stored under (the override graph when one was passed,
/// otherwise the statement's own context). Never fails.
#[derive(Debug, Default)]
pub struct MemoryConnection {
    staged: Vec<(Statement, Option<Term>)>,
    committed: Vec<(Statement, Option<Term>)>,
    commit_count: u64,
    begin_count: u64,
}

impl MemoryConnection {
    /// Create a new connection with one open, empty transaction
    pub fn new() -> Self {
        Self::default()
    }

    /// Statements added since the last commit, with their effective contexts
    pub fn staged(&self) -> &[(Statement, Option<Term>)] {
        &self.staged
    }

    /// Committed statements in commit order, with their effective contexts
    pub fn committed(&self) -> &[(Statement, Option<Term>)] {
        &self.committed
    }

    /// Number of successful `commit` calls
    pub fn commit_count(&self) -> u64 {
        self.commit_count
    }

    /// Number of `begin` calls
    pub fn begin_count(&self) -> u64 {
        self.begin_count
    }
}

impl Connection for MemoryConnection {
    fn add(&mut self, stmt: &Statement, graph: Option<&Term>) -> Result<(), StoreError> {
        let effective = graph.cloned().or_else(|| stmt.context().cloned());
        self.staged.push((stmt.clone(), effective));
        Ok(())
    }

    fn commit(&mut self) -> Result<(), StoreError> {
        self.committed.append(&mut self.staged);
        self.commit_count += 1;
        Ok(())
    }

    fn begin(&mut self) -> Result<(), StoreError> {
        self.begin_count += 1;
        Ok(())
    }
}

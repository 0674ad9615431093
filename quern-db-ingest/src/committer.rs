//! Chunked transactional statement committer
//!
//! Turns an unbounded statement stream into a sequence of bounded
//! transactions: every `chunk_size` statements the open transaction is
//! committed and a new one begun, so memory use stays O(chunk_size) and a
//! failure partway through a long load loses at most one in-flight chunk.
//!
//! The committer never force-commits a partial trailing chunk at stream end.
//! The surrounding transaction scope belongs to the caller, who may want to
//! fold the tail into one final transaction together with other bookkeeping
//! (load metadata, for instance). Use [`ChunkedCommitter::into_inner`] to
//! reclaim the connection and commit or discard the tail.

use crate::connection::Connection;
use crate::error::{IngestError, Result};
use quern_graph_ir::{Statement, StatementSink, Term};

/// Commits a statement stream in bounded-size transactional chunks
///
/// One instance per logical load, owning its connection exclusively.
/// Single-threaded synchronous use only: `on_statement` and the running
/// counter are not safe for concurrent mutation. Independent instances, each
/// with its own connection, may run concurrently against a store that
/// supports concurrent transactions.
///
/// When a `target_graph` is configured, every statement is stored in that
/// graph, overriding any context the statement carries; otherwise the
/// statement's own context (or its absence) is preserved.
#[derive(Debug)]
pub struct ChunkedCommitter<C: Connection> {
    conn: C,
    chunk_size: u64,
    target_graph: Option<Term>,
    pending: u64,
    committed_chunks: u64,
    statements_seen: u64,
}

impl<C: Connection> ChunkedCommitter<C> {
    /// Create a committer bound to one connection, one chunk size, and an
    /// optional target-graph override
    ///
    /// Fails with [`IngestError::InvalidChunkSize`] if `chunk_size` is zero.
    pub fn new(conn: C, chunk_size: u64, target_graph: Option<Term>) -> Result<Self> {
        if chunk_size == 0 {
            return Err(IngestError::InvalidChunkSize);
        }
        Ok(Self {
            conn,
            chunk_size,
            target_graph,
            pending: 0,
            committed_chunks: 0,
            statements_seen: 0,
        })
    }

    /// Statements added since the last commit
    ///
    /// Between sink calls this is always strictly less than the chunk size;
    /// it reaches the chunk size only transiently inside `on_statement`,
    /// immediately before the commit it triggers.
    pub fn pending(&self) -> u64 {
        self.pending
    }

    /// Number of chunks committed so far in the current load
    pub fn committed_chunks(&self) -> u64 {
        self.committed_chunks
    }

    /// Total statements processed so far in the current load
    pub fn statements_seen(&self) -> u64 {
        self.statements_seen
    }

    /// Borrow the underlying connection
    pub fn connection(&self) -> &C {
        &self.conn
    }

    /// Mutably borrow the underlying connection
    pub fn connection_mut(&mut self) -> &mut C {
        &mut self.conn
    }

    /// Consume the committer and return the connection
    ///
    /// The connection's open transaction still holds any uncommitted
    /// trailing statements; the caller decides their fate.
    pub fn into_inner(self) -> C {
        self.conn
    }
}

impl<C: Connection> StatementSink for ChunkedCommitter<C> {
    type Error = IngestError;

    fn on_start(&mut self) -> Result<()> {
        self.pending = 0;
        self.committed_chunks = 0;
        self.statements_seen = 0;
        tracing::debug!(
            chunk_size = self.chunk_size,
            target_graph = self.target_graph.as_ref().map(tracing::field::display),
            "chunked load started"
        );
        Ok(())
    }

    fn on_statement(&mut self, stmt: Statement) -> Result<()> {
        self.conn.add(&stmt, self.target_graph.as_ref())?;
        self.statements_seen += 1;
        self.pending += 1;
        if self.pending >= self.chunk_size {
            self.pending = 0;
            self.conn.commit()?;
            self.conn.begin()?;
            self.committed_chunks += 1;
            tracing::debug!(
                chunk = self.committed_chunks,
                statements = self.statements_seen,
                "committed chunk"
            );
        }
        Ok(())
    }

    fn on_namespace(&mut self, _prefix: &str, _iri: &str) -> Result<()> {
        Ok(())
    }

    fn on_comment(&mut self, _text: &str) -> Result<()> {
        Ok(())
    }

    fn on_end(&mut self) -> Result<()> {
        // No forced commit: the trailing partial chunk stays in the open
        // transaction for the caller to commit or discard.
        tracing::debug!(
            statements = self.statements_seen,
            chunks = self.committed_chunks,
            uncommitted = self.pending,
            "chunked load ended"
        );
        Ok(())
    }
}

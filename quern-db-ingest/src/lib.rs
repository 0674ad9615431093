//! Chunked transactional statement ingestion for Quern DB
//!
//! This crate turns an unbounded statement stream into a sequence of
//! bounded transactions against a store connection:
//!
//! - [`Connection`] - the transactional add/commit/begin surface a store
//!   exposes to the ingestion pipeline
//! - [`MemoryConnection`] - in-memory connection for tests and small loads
//! - [`ChunkedCommitter`] - a [`StatementSink`](quern_graph_ir::StatementSink)
//!   that commits every N statements and leaves the trailing partial chunk
//!   to the caller
//!
//! # Example
//!
//! ```
//! use quern_db_ingest::{ChunkedCommitter, MemoryConnection};
//! use quern_graph_ir::{feed, Statement, StreamEvent, Term};
//!
//! let events = (0..5).map(|n| {
//!     StreamEvent::Statement(Statement::new(
//!         Term::iri(format!("http://example.org/s{}", n)),
//!         Term::iri("http://example.org/p"),
//!         Term::plain("o"),
//!     ))
//! });
//!
//! let mut committer = ChunkedCommitter::new(MemoryConnection::new(), 2, None).unwrap();
//! feed(events.collect::<Vec<_>>(), &mut committer).unwrap();
//!
//! assert_eq!(committer.committed_chunks(), 2);
//! assert_eq!(committer.pending(), 1);
//!
//! // The tail is the caller's responsibility
//! let mut conn = committer.into_inner();
//! use quern_db_ingest::Connection;
//! conn.commit().unwrap();
//! assert_eq!(conn.committed().len(), 5);
//! ```

mod committer;
mod connection;
mod error;

pub use committer::ChunkedCommitter;
pub use connection::{Connection, MemoryConnection};
pub use error::{IngestError, Result, StoreError};

//! Format-agnostic RDF statement intermediate representation
//!
//! This crate provides canonical types for representing RDF statements that
//! can be produced by parsers and consumed by stores, regardless of the
//! serialization format (Turtle, N-Quads, TriG, etc.).
//!
//! # Key Design Principles
//!
//! 1. **Expanded IRIs only** - All IRIs are stored in expanded form.
//!    Compaction is a formatting concern and never appears in the IR.
//!
//! 2. **Lexical-form literals** - Literals carry their lexical form plus
//!    optional datatype and optional language tag. Equality is structural
//!    over all three components. No value-space interpretation happens here.
//!
//! 3. **Quad-shaped statements** - A `Statement` is subject, predicate,
//!    object, and an optional context (named graph). A statement without a
//!    context belongs to the default graph.
//!
//! 4. **Event-driven consumption** - Producers deliver streams through the
//!    [`StatementSink`] trait, so a consumer never depends on a concrete
//!    parser and a parser never depends on a concrete store.
//!
//! # Example
//!
//! ```
//! use quern_graph_ir::{feed, Statement, StatementCollector, StreamEvent, Term};
//!
//! let events = vec![StreamEvent::Statement(Statement::new(
//!     Term::iri("http://example.org/alice"),
//!     Term::iri("http://xmlns.com/foaf/0.1/name"),
//!     Term::plain("Alice"),
//! ))];
//!
//! let mut sink = StatementCollector::new();
//! feed(events, &mut sink).unwrap();
//! assert_eq!(sink.len(), 1);
//! ```

pub mod datatype;
mod sink;
mod statement;
mod term;

pub use datatype::Datatype;
pub use sink::{feed, StatementCollector, StatementSink, StreamEvent};
pub use statement::Statement;
pub use term::{BlankId, Term};

//! StatementSink trait for event-driven statement-stream consumption
//!
//! Parsers deliver one logical load as an ordered event stream:
//! stream-start, zero or more of {statement, namespace declaration,
//! comment}, stream-end. A sink consumes that stream without knowing the
//! producer, and a producer emits it without knowing the concrete sink.
//!
//! Every sink handles all five events. Namespace and comment events exist
//! on the trait even for sinks that ignore them, so the contract surface
//! stays complete and the no-op branches stay testable.

use crate::Statement;
use std::collections::BTreeMap;
use std::convert::Infallible;

/// Event-driven interface for consuming a statement stream
///
/// Methods are called in stream order: `on_start` exactly once, then any
/// number of `on_statement` / `on_namespace` / `on_comment`, then `on_end`
/// exactly once. A sink error aborts the stream; the producer must not call
/// further methods after an error.
pub trait StatementSink {
    /// Error produced when the sink cannot accept an event
    type Error;

    /// Called once, before any other event of a logical load
    fn on_start(&mut self) -> Result<(), Self::Error>;

    /// Called for each statement in the stream
    fn on_statement(&mut self, stmt: Statement) -> Result<(), Self::Error>;

    /// Called for each namespace (prefix) declaration in the stream
    fn on_namespace(&mut self, prefix: &str, iri: &str) -> Result<(), Self::Error>;

    /// Called for each comment in the stream
    fn on_comment(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Called once, after the last event of a logical load
    fn on_end(&mut self) -> Result<(), Self::Error>;
}

/// One event in a statement stream, between stream start and stream end
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StreamEvent {
    /// A parsed statement
    Statement(Statement),
    /// A namespace (prefix) declaration
    Namespace {
        /// Declared prefix (without trailing colon)
        prefix: String,
        /// Namespace IRI the prefix maps to
        iri: String,
    },
    /// A comment in the source document
    Comment(String),
}

/// Feed a complete event stream through a sink
///
/// Calls `on_start`, dispatches every event in order, then calls `on_end`.
/// Stops at the first sink error and propagates it.
pub fn feed<S, I>(events: I, sink: &mut S) -> Result<(), S::Error>
where
    S: StatementSink,
    I: IntoIterator<Item = StreamEvent>,
{
    sink.on_start()?;
    for event in events {
        match event {
            StreamEvent::Statement(stmt) => sink.on_statement(stmt)?,
            StreamEvent::Namespace { prefix, iri } => sink.on_namespace(&prefix, &iri)?,
            StreamEvent::Comment(text) => sink.on_comment(&text)?,
        }
    }
    sink.on_end()
}

/// A sink that collects statements and namespace declarations into memory
///
/// This is the reference sink for buffering a whole stream. Comments are
/// accepted and discarded. Namespaces use a `BTreeMap` for deterministic
/// iteration order.
#[derive(Debug, Default)]
pub struct StatementCollector {
    statements: Vec<Statement>,
    namespaces: BTreeMap<String, String>,
}

impl StatementCollector {
    /// Create a new empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Collected statements, in stream order
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Collected namespace declarations (prefix -> IRI)
    pub fn namespaces(&self) -> &BTreeMap<String, String> {
        &self.namespaces
    }

    /// Number of collected statements
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Check if no statements were collected
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Consume the collector and return the statements
    pub fn into_statements(self) -> Vec<Statement> {
        self.statements
    }
}

impl StatementSink for StatementCollector {
    type Error = Infallible;

    fn on_start(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn on_statement(&mut self, stmt: Statement) -> Result<(), Self::Error> {
        self.statements.push(stmt);
        Ok(())
    }

    fn on_namespace(&mut self, prefix: &str, iri: &str) -> Result<(), Self::Error> {
        self.namespaces.insert(prefix.to_string(), iri.to_string());
        Ok(())
    }

    fn on_comment(&mut self, _text: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn on_end(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Term;

    fn stmt(n: u32) -> Statement {
        Statement::new(
            Term::iri(format!("http://example.org/s{}", n)),
            Term::iri("http://example.org/p"),
            Term::plain(format!("o{}", n)),
        )
    }

    #[test]
    fn test_collector_basic() {
        let mut sink = StatementCollector::new();
        assert!(sink.is_empty());

        sink.on_start().unwrap();
        sink.on_statement(stmt(1)).unwrap();
        sink.on_statement(stmt(2)).unwrap();
        sink.on_end().unwrap();

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.statements()[0], stmt(1));
        assert_eq!(sink.statements()[1], stmt(2));
    }

    #[test]
    fn test_collector_namespaces_and_comments() {
        let mut sink = StatementCollector::new();
        sink.on_start().unwrap();
        sink.on_namespace("ex", "http://example.org/").unwrap();
        sink.on_comment("a comment").unwrap();
        sink.on_namespace("foaf", "http://xmlns.com/foaf/0.1/").unwrap();
        sink.on_end().unwrap();

        assert!(sink.is_empty());
        assert_eq!(
            sink.namespaces().get("ex").map(String::as_str),
            Some("http://example.org/")
        );
        assert_eq!(sink.namespaces().len(), 2);
    }

    #[test]
    fn test_feed_dispatches_in_order() {
        let events = vec![
            StreamEvent::Namespace {
                prefix: "ex".to_string(),
                iri: "http://example.org/".to_string(),
            },
            StreamEvent::Statement(stmt(1)),
            StreamEvent::Comment("ignored".to_string()),
            StreamEvent::Statement(stmt(2)),
        ];

        let mut sink = StatementCollector::new();
        feed(events, &mut sink).unwrap();

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.namespaces().len(), 1);
        assert_eq!(
            sink.into_statements(),
            vec![stmt(1), stmt(2)]
        );
    }

    #[test]
    fn test_feed_empty_stream() {
        let mut sink = StatementCollector::new();
        feed(Vec::new(), &mut sink).unwrap();
        assert!(sink.is_empty());
    }
}

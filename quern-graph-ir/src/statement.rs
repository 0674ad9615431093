//! Statements: subject–predicate–object facts with optional context
//!
//! A statement is an immutable atomic fact, optionally scoped to a named
//! graph (its context). Produced by parsers, consumed by sinks.

use crate::Term;
use serde::{Deserialize, Serialize};

/// An atomic subject–predicate–object fact, optionally scoped to a context
///
/// # Invariants
///
/// - `s` is a resource (IRI or blank node), never a literal.
/// - `p` is always an IRI.
/// - `o` may be any term.
/// - `g`, when present, is a resource naming the statement's graph.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Statement {
    /// Subject term
    pub s: Term,
    /// Predicate term
    pub p: Term,
    /// Object term
    pub o: Term,
    /// Context (named graph), if any
    pub g: Option<Term>,
}

impl Statement {
    /// Create a statement in the default graph
    pub fn new(s: Term, p: Term, o: Term) -> Self {
        Self { s, p, o, g: None }
    }

    /// Create a statement scoped to a named graph
    pub fn with_context(s: Term, p: Term, o: Term, g: Term) -> Self {
        Self { s, p, o, g: Some(g) }
    }

    /// Get the statement's own context, if any
    pub fn context(&self) -> Option<&Term> {
        self.g.as_ref()
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.s, self.p, self.o)?;
        if let Some(g) = &self.g {
            write!(f, " {}", g)?;
        }
        write!(f, " .")
    }
}

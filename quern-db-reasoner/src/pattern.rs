//! Statement patterns: the variable-shaped templates rules are built from
//!
//! A pattern mirrors a statement, but every slot is a [`PatternVar`]:
//! genuine variables where the rule binds, constants where it fixes a value.
//! Because constants carry canonical names, two patterns built independently
//! around the same values compare equal slot for slot.

use crate::var::PatternVar;
use quern_graph_ir::Statement;
use serde::{Deserialize, Serialize};

/// A subject-predicate-object template with variable-shaped slots
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatementPattern {
    /// Subject slot
    pub s: PatternVar,
    /// Predicate slot
    pub p: PatternVar,
    /// Object slot
    pub o: PatternVar,
    /// Context (named graph) slot, if the pattern is graph-scoped
    pub g: Option<PatternVar>,
}

impl StatementPattern {
    /// Create a pattern over the default graph
    pub fn new(s: PatternVar, p: PatternVar, o: PatternVar) -> Self {
        Self { s, p, o, g: None }
    }

    /// Create a pattern scoped to a graph slot
    pub fn with_context(s: PatternVar, p: PatternVar, o: PatternVar, g: PatternVar) -> Self {
        Self { s, p, o, g: Some(g) }
    }

    /// Lift a concrete statement into an all-constant pattern
    pub fn from_statement(stmt: &Statement) -> Self {
        Self {
            s: PatternVar::constant(stmt.s.clone()),
            p: PatternVar::constant(stmt.p.clone()),
            o: PatternVar::constant(stmt.o.clone()),
            g: stmt.context().map(|g| PatternVar::constant(g.clone())),
        }
    }

    /// All slots of this pattern, in s/p/o/g order
    pub fn vars(&self) -> impl Iterator<Item = &PatternVar> {
        [&self.s, &self.p, &self.o]
            .into_iter()
            .chain(self.g.as_ref())
    }

    /// The genuinely unbound (non-constant) variables of this pattern
    pub fn unbound_vars(&self) -> impl Iterator<Item = &PatternVar> {
        self.vars().filter(|v| !v.is_constant())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quern_graph_ir::Term;

    fn type_iri() -> Term {
        Term::iri("http://www.w3.org/1999/02/22-rdf-syntax-ns#type")
    }

    #[test]
    fn test_vars_iteration_order_and_unbound_filter() {
        let pattern = StatementPattern::new(
            PatternVar::named("s"),
            PatternVar::constant(type_iri()),
            PatternVar::named("class"),
        );

        let names: Vec<&str> = pattern.vars().map(PatternVar::name).collect();
        assert_eq!(names.len(), 3);
        assert_eq!(names[0], "s");
        assert_eq!(names[2], "class");

        let unbound: Vec<&str> = pattern.unbound_vars().map(PatternVar::name).collect();
        assert_eq!(unbound, vec!["s", "class"]);
    }

    #[test]
    fn test_independent_fragments_share_constant_slots() {
        // Two call sites splice "the same" constant without coordinating
        let a = StatementPattern::new(
            PatternVar::named("x"),
            PatternVar::constant(type_iri()),
            PatternVar::constant(Term::iri("http://example.org/Person")),
        );
        let b = StatementPattern::new(
            PatternVar::named("x"),
            PatternVar::constant(type_iri()),
            PatternVar::constant(Term::iri("http://example.org/Person")),
        );
        assert_eq!(a, b);
        assert_eq!(a.p.name(), b.p.name());
    }

    #[test]
    fn test_from_statement_is_all_constant() {
        let stmt = Statement::with_context(
            Term::iri("http://example.org/s"),
            type_iri(),
            Term::plain("o"),
            Term::iri("http://example.org/g"),
        );
        let pattern = StatementPattern::from_statement(&stmt);

        assert_eq!(pattern.vars().count(), 4);
        assert_eq!(pattern.unbound_vars().count(), 0);
        assert_eq!(pattern.s.value(), Some(&stmt.s));
        assert_eq!(
            pattern.g.as_ref().and_then(PatternVar::value),
            stmt.context()
        );
    }

    #[test]
    fn test_graph_scoped_vs_default_graph_patterns_differ() {
        let s = PatternVar::named("s");
        let p = PatternVar::constant(type_iri());
        let o = PatternVar::named("o");

        let bare = StatementPattern::new(s.clone(), p.clone(), o.clone());
        let scoped = StatementPattern::with_context(
            s,
            p,
            o,
            PatternVar::constant(Term::iri("http://example.org/g")),
        );
        assert_ne!(bare, scoped);
    }
}

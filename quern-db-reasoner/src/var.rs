//! Pattern variables and constant canonicalization
//!
//! The rewriting engine represents every slot of a graph pattern as a
//! variable, including slots holding fixed values. A constant is carried as
//! an anonymous variable whose name is a canonical function of the value, so
//! two rule fragments built independently around the same constant produce
//! slots that compare equal and unify with no coordination.
//!
//! ## Canonical names
//!
//! The name starts from the value's own identifying string (IRI text, blank
//! node id, or literal lexical form), appends a kind discriminator (`-lit`,
//! `-node`, `-uri`), then for literals the datatype IRI and language tag when
//! present (identical lexical forms with different datatype or language must
//! not collide), and prefixes the whole thing with the reserved `-const-`
//! marker. Generated anonymous variables use the distinct `-anon-` marker,
//! so a constant's name can never collide with a generated variable's name.

use quern_graph_ir::Term;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Reserved marker prefixing every constant's canonical name
const CONST_MARKER: &str = "-const-";

/// Reserved marker prefixing every generated anonymous variable name
const ANON_MARKER: &str = "-anon-";

/// A variable-shaped slot in a graph pattern
///
/// Either a genuine (unbound) variable or a constant wearing a variable
/// shape. Consumers distinguish the two through [`is_constant`], never
/// through the name.
///
/// [`is_constant`]: PatternVar::is_constant
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatternVar {
    name: Arc<str>,
    value: Option<Term>,
    constant: bool,
    anonymous: bool,
}

impl PatternVar {
    /// Create an ordinary user-written variable (unbound, not constant)
    pub fn named(name: impl AsRef<str>) -> Self {
        Self {
            name: Arc::from(name.as_ref()),
            value: None,
            constant: false,
            anonymous: false,
        }
    }

    /// Encode a constant value as an anonymous variable with a canonical name
    ///
    /// The name is a pure, deterministic function of the value's full
    /// identity (kind, lexical form, datatype, language tag): value-equal
    /// inputs always produce identical names, and any component difference
    /// produces a different name. Every well-formed [`Term`] encodes,
    /// including empty lexical forms and empty IRIs.
    pub fn constant(value: Term) -> Self {
        let mut unique = match &value {
            Term::Iri(iri) => format!("{}-uri", iri),
            Term::BlankNode(id) => format!("{}-node", id.as_str()),
            Term::Literal {
                lexical,
                datatype,
                language,
            } => {
                let mut s = format!("{}-lit", lexical);
                if let Some(dt) = datatype {
                    s.push('-');
                    s.push_str(dt.as_iri());
                }
                if let Some(lang) = language {
                    s.push('-');
                    s.push_str(lang);
                }
                s
            }
        };
        unique.insert_str(0, CONST_MARKER);
        Self {
            name: Arc::from(unique.as_str()),
            value: Some(value),
            constant: true,
            anonymous: true,
        }
    }

    /// The variable's name (canonical for constants)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The bound value, present only on constants
    pub fn value(&self) -> Option<&Term> {
        self.value.as_ref()
    }

    /// Check if this slot carries a fixed value rather than a binding site
    pub fn is_constant(&self) -> bool {
        self.constant
    }

    /// Check if this variable was generated rather than user-written
    pub fn is_anonymous(&self) -> bool {
        self.anonymous
    }
}

impl std::fmt::Display for PatternVar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}", value),
            None => write!(f, "?{}", self.name),
        }
    }
}

/// Counter-based allocator of fresh anonymous unbound variables
///
/// Names are `-anon-0`, `-anon-1`, ... within one generator. The `-anon-`
/// marker is reserved alongside `-const-`, so generated names never collide
/// with constants' canonical names.
#[derive(Debug, Default)]
pub struct VarGenerator {
    counter: u64,
}

impl VarGenerator {
    /// Create a generator starting from zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next fresh anonymous variable
    pub fn next_var(&mut self) -> PatternVar {
        let name = format!("{}{}", ANON_MARKER, self.counter);
        self.counter += 1;
        PatternVar {
            name: Arc::from(name.as_str()),
            value: None,
            constant: false,
            anonymous: true,
        }
    }
}

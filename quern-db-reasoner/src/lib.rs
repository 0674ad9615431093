//! Pattern variables and constant canonicalization for Quern DB
//!
//! The rule-rewriting engine matches graph patterns whose slots are all
//! variable-shaped. This crate provides that slot type and the encoding that
//! lets a fixed value live in one:
//!
//! - [`PatternVar`] - a genuine variable or a constant wearing a variable
//!   shape, distinguished by an explicit flag
//! - [`PatternVar::constant`] - the canonical constant encoding: value-equal
//!   constants get identical names across independent construction sites
//! - [`VarGenerator`] - fresh anonymous variables whose names never collide
//!   with constants' canonical names
//! - [`StatementPattern`] - the s/p/o(/g) template rules are built from
//!
//! # Example
//!
//! ```
//! use quern_db_reasoner::{PatternVar, StatementPattern};
//! use quern_graph_ir::Term;
//!
//! // Two rule fragments, built independently, fix the same predicate
//! let rdf_type = || Term::iri("http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
//! let a = PatternVar::constant(rdf_type());
//! let b = PatternVar::constant(rdf_type());
//! assert_eq!(a, b);
//! assert!(a.is_constant());
//!
//! let pattern = StatementPattern::new(PatternVar::named("x"), a, PatternVar::named("class"));
//! assert_eq!(pattern.unbound_vars().count(), 2);
//! ```

mod pattern;
mod var;

pub use pattern::StatementPattern;
pub use var::{PatternVar, VarGenerator};

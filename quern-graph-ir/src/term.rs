//! RDF term types: IRI, blank node, and literal
//!
//! Terms are the building blocks of statements. A term can be:
//! - An IRI (always expanded, never prefixed)
//! - A blank node (with stable local identifier)
//! - A literal (lexical form + optional datatype + optional language tag)

use crate::Datatype;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Blank node identifier
///
/// Blank node IDs are stable within a single source but have no global
/// meaning. The label is stored without the `_:` prefix.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlankId(Arc<str>);

impl BlankId {
    /// Create a blank node ID from a label
    ///
    /// The label should NOT include the `_:` prefix.
    pub fn new(label: impl AsRef<str>) -> Self {
        Self(Arc::from(label.as_ref()))
    }

    /// Get the label (without `_:` prefix)
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BlankId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// An RDF term (subject, predicate, object, or context position)
///
/// # Invariants
///
/// - `Term::Iri` always contains an **expanded** IRI, never a prefixed form.
/// - Datatype and language tag on a literal are independently optional; both
///   participate in term identity. A plain `"5"`, a typed `"5"^^xsd:integer`
///   and a tagged `"5"@en` are three distinct terms.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    /// Full expanded IRI (e.g., "http://schema.org/Person")
    Iri(Arc<str>),

    /// Blank node with stable local identifier
    BlankNode(BlankId),

    /// Literal with lexical form, optional datatype, optional language tag
    Literal {
        /// The lexical form (may be empty; an empty form is still a valid literal)
        lexical: Arc<str>,
        /// Datatype IRI, if the literal is typed
        datatype: Option<Datatype>,
        /// Language tag, if the literal is language-tagged
        language: Option<Arc<str>>,
    },
}

impl Term {
    /// Create an IRI term from an expanded IRI string
    pub fn iri(iri: impl AsRef<str>) -> Self {
        Term::Iri(Arc::from(iri.as_ref()))
    }

    /// Create a blank node term
    pub fn blank(label: impl AsRef<str>) -> Self {
        Term::BlankNode(BlankId::new(label))
    }

    /// Create a plain literal (no datatype, no language tag)
    pub fn plain(lexical: impl AsRef<str>) -> Self {
        Term::Literal {
            lexical: Arc::from(lexical.as_ref()),
            datatype: None,
            language: None,
        }
    }

    /// Create a typed literal
    pub fn typed(lexical: impl AsRef<str>, datatype: Datatype) -> Self {
        Term::Literal {
            lexical: Arc::from(lexical.as_ref()),
            datatype: Some(datatype),
            language: None,
        }
    }

    /// Create a language-tagged literal (no datatype)
    pub fn lang_string(lexical: impl AsRef<str>, lang: impl AsRef<str>) -> Self {
        Term::Literal {
            lexical: Arc::from(lexical.as_ref()),
            datatype: None,
            language: Some(Arc::from(lang.as_ref())),
        }
    }

    /// Check if this is an IRI term
    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    /// Check if this is a blank node
    pub fn is_blank(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    /// Check if this is a literal
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal { .. })
    }

    /// Check if this term may appear in subject or context position
    /// (IRI or blank node)
    pub fn is_resource(&self) -> bool {
        !self.is_literal()
    }

    /// Try to get as IRI string
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Try to get as blank node ID
    pub fn as_blank(&self) -> Option<&BlankId> {
        match self {
            Term::BlankNode(id) => Some(id),
            _ => None,
        }
    }

    /// Try to get literal components
    pub fn as_literal(&self) -> Option<(&str, Option<&Datatype>, Option<&str>)> {
        match self {
            Term::Literal {
                lexical,
                datatype,
                language,
            } => Some((lexical, datatype.as_ref(), language.as_deref())),
            _ => None,
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{}>", iri),
            Term::BlankNode(id) => write!(f, "{}", id),
            Term::Literal {
                lexical,
                datatype,
                language,
            } => {
                write!(f, "\"{}\"", lexical)?;
                if let Some(lang) = language {
                    write!(f, "@{}", lang)
                } else if let Some(dt) = datatype.as_ref().filter(|dt| !dt.is_xsd_string()) {
                    write!(f, "^^<{}>", dt.as_iri())
                } else {
                    Ok(())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_id() {
        let id = BlankId::new("b0");
        assert_eq!(id.as_str(), "b0");
        assert_eq!(format!("{}", id), "_:b0");
    }

    #[test]
    fn test_term_constructors() {
        let iri = Term::iri("http://example.org/foo");
        assert!(iri.is_iri());
        assert!(iri.is_resource());
        assert_eq!(iri.as_iri(), Some("http://example.org/foo"));

        let blank = Term::blank("b0");
        assert!(blank.is_blank());
        assert!(blank.is_resource());

        let plain = Term::plain("hello");
        assert!(plain.is_literal());
        assert!(!plain.is_resource());
        let (lex, dt, lang) = plain.as_literal().unwrap();
        assert_eq!(lex, "hello");
        assert!(dt.is_none());
        assert!(lang.is_none());

        let tagged = Term::lang_string("bonjour", "fr");
        let (_, dt, lang) = tagged.as_literal().unwrap();
        assert!(dt.is_none());
        assert_eq!(lang, Some("fr"));
    }

    #[test]
    fn test_literal_identity_components() {
        // Same lexical form, three distinct identities
        let plain = Term::plain("5");
        let typed = Term::typed("5", Datatype::xsd_integer());
        let tagged = Term::lang_string("5", "en");

        assert_ne!(plain, typed);
        assert_ne!(plain, tagged);
        assert_ne!(typed, tagged);

        // Datatype distinguishes otherwise-equal literals
        assert_ne!(
            Term::typed("5", Datatype::xsd_integer()),
            Term::typed("5", Datatype::xsd_decimal())
        );

        // Language tag distinguishes otherwise-equal literals
        assert_ne!(Term::lang_string("chat", "fr"), Term::lang_string("chat", "en"));

        // Structural equality holds for equal components
        assert_eq!(
            Term::typed("5", Datatype::xsd_integer()),
            Term::typed("5", Datatype::xsd_integer())
        );
    }

    #[test]
    fn test_iri_and_blank_share_text() {
        // An IRI and a blank node with the same raw text are different terms
        assert_ne!(Term::iri("a"), Term::blank("a"));
    }

    #[test]
    fn test_empty_lexical_forms_are_valid() {
        let empty_plain = Term::plain("");
        let empty_iri = Term::iri("");
        assert!(empty_plain.is_literal());
        assert!(empty_iri.is_iri());
        assert_ne!(empty_plain, empty_iri);
    }

    #[test]
    fn test_term_display() {
        assert_eq!(
            format!("{}", Term::iri("http://example.org")),
            "<http://example.org>"
        );
        assert_eq!(format!("{}", Term::blank("b0")), "_:b0");
        assert_eq!(format!("{}", Term::plain("hello")), "\"hello\"");
        assert_eq!(
            format!("{}", Term::lang_string("bonjour", "fr")),
            "\"bonjour\"@fr"
        );
        assert_eq!(
            format!("{}", Term::typed("42", Datatype::xsd_integer())),
            "\"42\"^^<http://www.w3.org/2001/XMLSchema#integer>"
        );
        // xsd:string typed literals display like plain literals
        assert_eq!(
            format!("{}", Term::typed("hi", Datatype::xsd_string())),
            "\"hi\""
        );
    }

    #[test]
    fn test_term_serde_round_trip() {
        let term = Term::typed("3.5", Datatype::xsd_decimal());
        let json = serde_json::to_string(&term).unwrap();
        let back: Term = serde_json::from_str(&json).unwrap();
        assert_eq!(term, back);
    }
}

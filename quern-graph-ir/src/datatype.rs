//! RDF literal datatype representation
//!
//! A datatype is an expanded IRI. Literals carry a datatype *optionally*:
//! a plain literal has none, a typed literal has exactly one. Language-tagged
//! literals carry no datatype here; the tag lives on the literal itself.

use quern_vocab::xsd;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// RDF literal datatype (always an expanded IRI, never prefixed)
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Datatype(Arc<str>);

impl Datatype {
    /// Create a datatype from an expanded IRI
    pub fn from_iri(iri: impl AsRef<str>) -> Self {
        Datatype(Arc::from(iri.as_ref()))
    }

    /// xsd:string
    pub fn xsd_string() -> Self {
        Datatype(Arc::from(xsd::STRING))
    }

    /// xsd:boolean
    pub fn xsd_boolean() -> Self {
        Datatype(Arc::from(xsd::BOOLEAN))
    }

    /// xsd:integer
    pub fn xsd_integer() -> Self {
        Datatype(Arc::from(xsd::INTEGER))
    }

    /// xsd:long
    pub fn xsd_long() -> Self {
        Datatype(Arc::from(xsd::LONG))
    }

    /// xsd:double
    pub fn xsd_double() -> Self {
        Datatype(Arc::from(xsd::DOUBLE))
    }

    /// xsd:decimal
    pub fn xsd_decimal() -> Self {
        Datatype(Arc::from(xsd::DECIMAL))
    }

    /// xsd:date
    pub fn xsd_date() -> Self {
        Datatype(Arc::from(xsd::DATE))
    }

    /// xsd:dateTime
    pub fn xsd_date_time() -> Self {
        Datatype(Arc::from(xsd::DATE_TIME))
    }

    /// xsd:anyURI
    pub fn xsd_any_uri() -> Self {
        Datatype(Arc::from(xsd::ANY_URI))
    }

    /// Get the expanded IRI of this datatype
    pub fn as_iri(&self) -> &str {
        &self.0
    }

    /// Check if this is xsd:string
    pub fn is_xsd_string(&self) -> bool {
        self.0.as_ref() == xsd::STRING
    }
}

impl std::fmt::Display for Datatype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

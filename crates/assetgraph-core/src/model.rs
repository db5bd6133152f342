//! Triple data model

use serde::{Deserialize, Serialize};
use std::fmt;

/// RDF term in subject or object position
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Term {
    Uri(String),
    BlankNode(String),
    Literal(String),
}

impl Term {
    pub fn uri<S: Into<String>>(value: S) -> Self {
        Term::Uri(value.into())
    }

    pub fn blank<S: Into<String>>(id: S) -> Self {
        Term::BlankNode(id.into())
    }

    pub fn literal<S: Into<String>>(value: S) -> Self {
        Term::Literal(value.into())
    }

    /// The IRI, if this term is a URI
    pub fn as_uri(&self) -> Option<&str> {
        match self {
            Term::Uri(iri) => Some(iri),
            Term::BlankNode(_) | Term::Literal(_) => None,
        }
    }

    pub fn is_uri(&self) -> bool {
        matches!(self, Term::Uri(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Uri(iri) => write!(f, "{}", iri),
            Term::BlankNode(id) => write!(f, "_:{}", id),
            Term::Literal(value) => write!(f, "{}", value),
        }
    }
}

/// RDF Triple representation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub subject: Term,
    pub predicate: String,
    pub object: Term,
}

impl Triple {
    pub fn new<P: Into<String>>(subject: Term, predicate: P, object: Term) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object,
        }
    }

    /// Triple whose subject and object are both URIs
    pub fn link(subject: &str, predicate: &str, object: &str) -> Self {
        Self::new(Term::uri(subject), predicate, Term::uri(object))
    }

    /// Triple with a URI subject and a literal object
    pub fn attribute(subject: &str, predicate: &str, value: &str) -> Self {
        Self::new(Term::uri(subject), predicate, Term::literal(value))
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)
    }
}

//! Read-only query interface over a triple set
//!
//! Every projection component receives the graph through [`GraphRead`]
//! instead of reaching for a shared handle, so tests can build isolated
//! stores and the server can share one immutable store across requests.

use crate::model::{Term, Triple};
use crate::vocab::RDF_TYPE;

pub trait GraphRead {
    /// All triples in enumeration order
    fn triples(&self) -> &[Triple];

    /// Pattern match with wildcards in any position
    fn find_triples(&self, subject: Option<&Term>, predicate: Option<&str>, object: Option<&Term>) -> Vec<&Triple>;

    /// Objects of `(subject, predicate, ?)`
    fn objects(&self, subject: &str, predicate: &str) -> Vec<&Term> {
        let subject = Term::uri(subject);
        self.find_triples(Some(&subject), Some(predicate), None)
            .into_iter()
            .map(|t| &t.object)
            .collect()
    }

    fn first_object(&self, subject: &str, predicate: &str) -> Option<&Term> {
        self.objects(subject, predicate).into_iter().next()
    }

    /// `(predicate, object)` pairs of every triple about `subject`
    fn predicate_objects(&self, subject: &str) -> Vec<(&str, &Term)> {
        let subject = Term::uri(subject);
        self.find_triples(Some(&subject), None, None)
            .into_iter()
            .map(|t| (t.predicate.as_str(), &t.object))
            .collect()
    }

    /// Subjects of `(?, predicate, object)`
    fn subjects(&self, predicate: &str, object: &Term) -> Vec<&Term> {
        self.find_triples(None, Some(predicate), Some(object))
            .into_iter()
            .map(|t| &t.subject)
            .collect()
    }

    /// URI objects of `rdf:type` for `subject`
    fn types_of(&self, subject: &str) -> Vec<&str> {
        self.objects(subject, RDF_TYPE)
            .into_iter()
            .filter_map(Term::as_uri)
            .collect()
    }

    /// Whether `uri` occurs as a subject or object anywhere in the graph
    fn mentions(&self, uri: &str) -> bool {
        let term = Term::uri(uri);
        !self.find_triples(Some(&term), None, None).is_empty()
            || !self.find_triples(None, None, Some(&term)).is_empty()
    }
}

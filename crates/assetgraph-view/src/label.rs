//! Human-readable labels for URIs

use assetgraph_core::vocab::{local_name, DCT_TITLE, EX_CVE_ID, FOAF_NAME, RDFS_LABEL};
use assetgraph_core::{GraphRead, Term};

/// Predicates consulted for a label, highest priority first
pub const LABEL_PREDICATES: [&str; 4] = [RDFS_LABEL, FOAF_NAME, DCT_TITLE, EX_CVE_ID];

/// Label of `uri`: the first labelling value found, else its local name
pub fn label_of<G: GraphRead + ?Sized>(graph: &G, uri: &str) -> String {
    LABEL_PREDICATES
        .iter()
        .find_map(|predicate| graph.first_object(uri, predicate))
        .map(Term::to_string)
        .unwrap_or_else(|| fallback_label(uri))
}

/// Local name of `uri`, or the whole string when that is empty
pub fn fallback_label(uri: &str) -> String {
    match local_name(uri) {
        "" => uri.to_string(),
        name => name.to_string(),
    }
}

/// Display text for a term in object position
pub fn term_label<G: GraphRead + ?Sized>(graph: &G, term: &Term) -> String {
    match term {
        Term::Uri(iri) => label_of(graph, iri),
        Term::Literal(value) => value.clone(),
        Term::BlankNode(_) => term.to_string(),
    }
}

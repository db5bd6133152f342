//! Turtle / N-Triples loading into a [`GraphStore`]

use crate::model::{Term, Triple};
use crate::store::GraphStore;
use sophia::api::source::TripleSource;
use sophia::api::term::{Term as RdfTerm, TermKind};
use sophia::api::triple::Triple as RdfTriple;
use sophia::turtle::parser::{nt, turtle};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Errors that prevent a graph from being loaded
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Input file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Serialization of an input document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfFormat {
    Turtle,
    NTriples,
}

impl RdfFormat {
    /// Pick a format from the file extension; anything but `.nt` is read as Turtle
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("nt") => RdfFormat::NTriples,
            _ => RdfFormat::Turtle,
        }
    }
}

/// Parse a document held in memory
pub fn parse_str(input: &str, format: RdfFormat) -> Result<Vec<Triple>, String> {
    match format {
        RdfFormat::Turtle => collect_triples(turtle::parse_str(input)),
        RdfFormat::NTriples => collect_triples(nt::parse_str(input)),
    }
}

/// Load a graph file, failing if it is missing or malformed
pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<GraphStore, LoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let input = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let format = RdfFormat::from_path(path);
    debug!("Parsing {} as {:?}", path.display(), format);

    let triples = parse_str(&input, format).map_err(|message| LoadError::Parse {
        path: path.to_path_buf(),
        message,
    })?;

    let parsed = triples.len();
    let store: GraphStore = triples.into_iter().collect();
    info!(
        "Loaded {} triples from {} ({} duplicates dropped)",
        store.len(),
        path.display(),
        parsed - store.len()
    );

    Ok(store)
}

fn collect_triples<S: TripleSource>(mut source: S) -> Result<Vec<Triple>, String> {
    let mut triples = Vec::new();
    source
        .for_each_triple(|t| {
            let subject = convert_term(t.s());
            let predicate = t.p().iri().map(|iri| iri.as_str().to_string());
            let object = convert_term(t.o());
            if let (Some(subject), Some(predicate), Some(object)) = (subject, predicate, object) {
                triples.push(Triple::new(subject, predicate, object));
            }
        })
        .map_err(|e| e.to_string())?;
    Ok(triples)
}

fn convert_term<T: RdfTerm>(term: T) -> Option<Term> {
    match term.kind() {
        TermKind::Iri => term.iri().map(|iri| Term::Uri(iri.as_str().to_string())),
        TermKind::BlankNode => term.bnode_id().map(|id| Term::BlankNode(id.as_str().to_string())),
        TermKind::Literal => term.lexical_form().map(|lex| Term::Literal(lex.to_string())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::GraphRead;
    use crate::vocab::{EX_APPLICATION, RDFS_LABEL, RDF_TYPE};
    use std::io::Write;

    const SAMPLE: &str = r#"
        @prefix ex: <http://example.com/ontology/> .
        @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .

        <http://example.com/billing> a ex:Application ;
            rdfs:label "Billing Service" ;
            ex:owner [ rdfs:label "Finance" ] .
    "#;

    #[test]
    fn test_parse_turtle_terms() {
        let triples = parse_str(SAMPLE, RdfFormat::Turtle).unwrap();
        assert_eq!(triples.len(), 4);
        assert!(triples.contains(&Triple::link("http://example.com/billing", RDF_TYPE, EX_APPLICATION)));
        assert!(triples.contains(&Triple::attribute("http://example.com/billing", RDFS_LABEL, "Billing Service")));
        assert!(triples
            .iter()
            .any(|t| matches!(t.object, Term::BlankNode(_)) && t.predicate.ends_with("owner")));
    }

    #[test]
    fn test_parse_ntriples() {
        let input = "<http://example.com/a> <http://example.com/p> \"v\" .\n";
        let triples = parse_str(input, RdfFormat::NTriples).unwrap();
        assert_eq!(triples, vec![Triple::attribute("http://example.com/a", "http://example.com/p", "v")]);
    }

    #[test]
    fn test_parse_error_is_reported() {
        assert!(parse_str("this is not turtle", RdfFormat::Turtle).is_err());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(RdfFormat::from_path(Path::new("data/model.ttl")), RdfFormat::Turtle);
        assert_eq!(RdfFormat::from_path(Path::new("dump.NT")), RdfFormat::NTriples);
        assert_eq!(RdfFormat::from_path(Path::new("noext")), RdfFormat::Turtle);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_graph("does/not/exist.ttl").unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
    }

    #[test]
    fn test_load_graph_from_file() {
        let mut file = tempfile::Builder::new().suffix(".ttl").tempfile().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let store = load_graph(file.path()).unwrap();
        assert_eq!(store.len(), 4);
        assert_eq!(store.types_of("http://example.com/billing"), vec![EX_APPLICATION]);
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = tempfile::Builder::new().suffix(".ttl").tempfile().unwrap();
        file.write_all(b"<http://example.com/a> <http://example.com/p> .").unwrap();

        let err = load_graph(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }
}

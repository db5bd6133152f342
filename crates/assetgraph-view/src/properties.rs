//! Side-panel property extraction

use crate::classify::is_visual_entity;
use crate::label::{label_of, term_label};
use assetgraph_core::{GraphRead, Term};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Property {
    pub key: String,
    pub value: String,
}

/// Which triples contribute to an entity's property list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyMode {
    /// Skip objects that are themselves graph nodes; they are drawn as edges
    #[default]
    Filtered,
    Unfiltered,
}

pub fn properties_of<G: GraphRead + ?Sized>(graph: &G, uri: &str, mode: PropertyMode) -> Vec<Property> {
    graph
        .predicate_objects(uri)
        .into_iter()
        .filter(|(_, object)| match (mode, object) {
            (PropertyMode::Unfiltered, _) => true,
            (PropertyMode::Filtered, Term::Uri(iri)) => !is_visual_entity(graph, iri),
            (PropertyMode::Filtered, Term::Literal(_) | Term::BlankNode(_)) => true,
        })
        .map(|(predicate, object)| Property {
            key: label_of(graph, predicate),
            value: term_label(graph, object),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetgraph_core::vocab::{EX_APPLICATION, EX_DEPENDS_ON, EX_LIBRARY, RDFS_LABEL, RDF_TYPE};
    use assetgraph_core::{GraphStore, Triple};
    use std::collections::HashSet;

    const APP: &str = "http://example.com/billing";
    const LIB: &str = "http://example.com/openssl";
    const TEAM: &str = "http://example.com/teams/payments";
    const OWNER: &str = "http://example.com/ontology/owner";
    const VERSION: &str = "http://example.com/ontology/version";

    fn store() -> GraphStore {
        vec![
            Triple::link(APP, RDF_TYPE, EX_APPLICATION),
            Triple::attribute(APP, VERSION, "2.4.1"),
            Triple::link(APP, OWNER, TEAM),
            Triple::link(APP, EX_DEPENDS_ON, LIB),
            Triple::link(LIB, RDF_TYPE, EX_LIBRARY),
            Triple::attribute(TEAM, RDFS_LABEL, "Payments Team"),
            Triple::attribute(OWNER, RDFS_LABEL, "owned by"),
        ]
        .into_iter()
        .collect()
    }

    fn as_set(props: Vec<Property>) -> HashSet<(String, String)> {
        props.into_iter().map(|p| (p.key, p.value)).collect()
    }

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn test_filtered_mode_skips_visual_objects() {
        let props = as_set(properties_of(&store(), APP, PropertyMode::Filtered));
        let expected: HashSet<_> = [
            pair("type", "Application"),
            pair("version", "2.4.1"),
            pair("owned by", "Payments Team"),
        ]
        .into_iter()
        .collect();
        assert_eq!(props, expected);
    }

    #[test]
    fn test_unfiltered_mode_keeps_everything() {
        let props = as_set(properties_of(&store(), APP, PropertyMode::Unfiltered));
        assert_eq!(props.len(), 4);
        assert!(props.contains(&pair("dependsOn", "openssl")));
    }

    #[test]
    fn test_entity_without_triples_has_no_properties() {
        assert!(properties_of(&store(), "http://example.com/nothing", PropertyMode::Filtered).is_empty());
    }

    #[test]
    fn test_blank_node_values() {
        let store: GraphStore = vec![Triple::new(Term::uri(APP), OWNER, Term::blank("b0"))]
            .into_iter()
            .collect();
        let props = properties_of(&store, APP, PropertyMode::Filtered);
        assert_eq!(props, vec![Property { key: "owner".into(), value: "_:b0".into() }]);
    }

    #[test]
    fn test_mode_serialization() {
        assert_eq!(serde_json::to_string(&PropertyMode::Unfiltered).unwrap(), "\"unfiltered\"");
        let mode: PropertyMode = serde_json::from_str("\"filtered\"").unwrap();
        assert_eq!(mode, PropertyMode::Filtered);
    }
}

//! View configuration

use crate::properties::PropertyMode;
use serde::{Deserialize, Serialize};

/// How projected edges are identified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeIdentity {
    /// `{subject}_{object}`; later triples between the same pair are dropped
    #[default]
    Endpoints,
    /// `{subject}_{object}_{predicate}`; parallel edges are kept
    EndpointsAndPredicate,
}

impl EdgeIdentity {
    pub fn edge_id(&self, subject: &str, object: &str, predicate: &str) -> String {
        match self {
            EdgeIdentity::Endpoints => format!("{}_{}", subject, object),
            EdgeIdentity::EndpointsAndPredicate => format!("{}_{}_{}", subject, object, predicate),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ViewConfig {
    pub property_mode: PropertyMode,
    pub edge_identity: EdgeIdentity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_ids() {
        let s = "http://example.com/a";
        let o = "http://example.com/b";
        let p = "http://example.com/ontology/dependsOn";
        assert_eq!(EdgeIdentity::Endpoints.edge_id(s, o, p), "http://example.com/a_http://example.com/b");
        assert_eq!(
            EdgeIdentity::EndpointsAndPredicate.edge_id(s, o, p),
            "http://example.com/a_http://example.com/b_http://example.com/ontology/dependsOn"
        );
        assert_ne!(
            EdgeIdentity::EndpointsAndPredicate.edge_id(s, o, p),
            EdgeIdentity::EndpointsAndPredicate.edge_id(s, o, "http://other.org/v#dependsOn")
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ViewConfig = serde_json::from_str(r#"{"edge-identity": "endpoints-and-predicate"}"#).unwrap();
        assert_eq!(config.property_mode, PropertyMode::Filtered);
        assert_eq!(config.edge_identity, EdgeIdentity::EndpointsAndPredicate);
    }
}

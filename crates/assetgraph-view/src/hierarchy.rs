//! Organization → application → vulnerability roll-up

use crate::label::label_of;
use crate::severity::{severity_of, SeverityFilter};
use assetgraph_core::vocab::{EX_DEPENDS_ON, EX_HAS_VULNERABILITY, EX_RUNS_ON, FIBO_HAS_MEMBER, FIBO_LEGAL_ENTITY, RDF_TYPE};
use assetgraph_core::{GraphRead, Term};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationReport {
    pub organization: String,
    pub applications: Vec<ApplicationReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationReport {
    pub application: String,
    /// Deduplicated and sorted ascending
    pub vulnerabilities: Vec<String>,
}

/// Relations from an application to the components whose vulnerabilities it inherits
pub const COMPONENT_RELATIONS: [&str; 2] = [EX_DEPENDS_ON, EX_RUNS_ON];

/// Roll up vulnerabilities for every member application of every legal entity
pub fn analyze<G: GraphRead + ?Sized>(graph: &G, filter: SeverityFilter) -> Vec<OrganizationReport> {
    let legal_entity = Term::uri(FIBO_LEGAL_ENTITY);
    let reports: Vec<OrganizationReport> = graph
        .subjects(RDF_TYPE, &legal_entity)
        .into_iter()
        .filter_map(Term::as_uri)
        .map(|organization| OrganizationReport {
            organization: label_of(graph, organization),
            applications: uri_objects(graph, organization, FIBO_HAS_MEMBER)
                .into_iter()
                .map(|application| ApplicationReport {
                    application: label_of(graph, application),
                    vulnerabilities: vulnerabilities_of(graph, application, filter),
                })
                .collect(),
        })
        .collect();

    debug!("Analyzed {} organizations ({:?})", reports.len(), filter);
    reports
}

/// Labels of vulnerabilities reachable through a dependency or host of `application`
pub fn vulnerabilities_of<G: GraphRead + ?Sized>(graph: &G, application: &str, filter: SeverityFilter) -> Vec<String> {
    let mut labels = BTreeSet::new();

    for relation in COMPONENT_RELATIONS {
        for component in uri_objects(graph, application, relation) {
            for vulnerability in uri_objects(graph, component, EX_HAS_VULNERABILITY) {
                if filter.is_active() && !filter.admits(severity_of(graph, vulnerability)) {
                    continue;
                }
                labels.insert(label_of(graph, vulnerability));
            }
        }
    }

    labels.into_iter().collect()
}

fn uri_objects<'g, G: GraphRead + ?Sized>(graph: &'g G, subject: &str, predicate: &str) -> Vec<&'g str> {
    graph
        .objects(subject, predicate)
        .into_iter()
        .filter_map(Term::as_uri)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::severity::Severity;
    use assetgraph_core::vocab::{EX_CVE_ID, EX_CVSS_SEVERITY};
    use assetgraph_core::{GraphStore, Triple};

    const ACME: &str = "http://example.com/acme";
    const APP1: &str = "http://example.com/app1";
    const LIB1: &str = "http://example.com/lib1";
    const CVE1: &str = "http://example.com/cve1";

    fn acme() -> GraphStore {
        vec![
            Triple::link(ACME, FIBO_HAS_MEMBER, APP1),
            Triple::link(APP1, EX_DEPENDS_ON, LIB1),
            Triple::link(LIB1, EX_HAS_VULNERABILITY, CVE1),
            Triple::attribute(CVE1, EX_CVSS_SEVERITY, "High"),
            Triple::attribute(CVE1, EX_CVE_ID, "CVE-ID-OF-cve1"),
            Triple::link(ACME, RDF_TYPE, FIBO_LEGAL_ENTITY),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_acme_without_filter() {
        let report = analyze(&acme(), SeverityFilter::All);
        assert_eq!(
            report,
            vec![OrganizationReport {
                organization: "acme".to_string(),
                applications: vec![ApplicationReport {
                    application: "app1".to_string(),
                    vulnerabilities: vec!["CVE-ID-OF-cve1".to_string()],
                }],
            }]
        );
    }

    #[test]
    fn test_acme_with_non_matching_filter() {
        let report = analyze(&acme(), SeverityFilter::Only(Severity::Low));
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].applications.len(), 1);
        assert!(report[0].applications[0].vulnerabilities.is_empty());
    }

    #[test]
    fn test_runs_on_path_and_dedup() {
        let mut store = acme();
        let host = "http://example.com/host1";
        store.add_triple(Triple::link(APP1, EX_RUNS_ON, host));
        store.add_triple(Triple::link(host, EX_HAS_VULNERABILITY, CVE1));
        store.add_triple(Triple::link(host, EX_HAS_VULNERABILITY, "http://example.com/AAA-1"));

        let vulns = vulnerabilities_of(&store, APP1, SeverityFilter::All);
        assert_eq!(vulns, vec!["AAA-1".to_string(), "CVE-ID-OF-cve1".to_string()]);
    }

    #[test]
    fn test_organization_without_members() {
        let store: GraphStore = vec![Triple::link("http://example.com/lonely", RDF_TYPE, FIBO_LEGAL_ENTITY)]
            .into_iter()
            .collect();
        let report = analyze(&store, SeverityFilter::All);
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].organization, "lonely");
        assert!(report[0].applications.is_empty());
    }

    #[test]
    fn test_untyped_member_source_is_ignored() {
        let store: GraphStore = vec![Triple::link("http://example.com/club", FIBO_HAS_MEMBER, APP1)]
            .into_iter()
            .collect();
        assert!(analyze(&store, SeverityFilter::All).is_empty());
    }

    #[test]
    fn test_literal_members_are_skipped() {
        let mut store = acme();
        store.add_triple(Triple::attribute(ACME, FIBO_HAS_MEMBER, "not a uri"));
        let report = analyze(&store, SeverityFilter::All);
        assert_eq!(report[0].applications.len(), 1);
    }

    #[test]
    fn test_unknown_severity_only_passes_unfiltered() {
        let mut store = acme();
        store.add_triple(Triple::link(LIB1, EX_HAS_VULNERABILITY, "http://example.com/cve2"));

        assert_eq!(vulnerabilities_of(&store, APP1, SeverityFilter::All).len(), 2);
        assert_eq!(
            vulnerabilities_of(&store, APP1, SeverityFilter::Only(Severity::High)),
            vec!["CVE-ID-OF-cve1".to_string()]
        );
        assert!(vulnerabilities_of(&store, APP1, SeverityFilter::Nothing).is_empty());
    }
}

//! Vocabulary IRIs used by the asset inventory model

pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
pub const FOAF_NAME: &str = "http://xmlns.com/foaf/0.1/name";
pub const DCT_TITLE: &str = "http://purl.org/dc/terms/title";

pub const EX_NS: &str = "http://example.com/ontology/";
pub const DCT_NS: &str = "http://purl.org/dc/terms/";
pub const FIBO_ORG_NS: &str = "https://spec.edmcouncil.org/fibo/ontology/FND/Organizations/Organizations/";
pub const FIBO_LEI_NS: &str = "https://spec.edmcouncil.org/fibo/ontology/BE/LegalEntities/LegalEntities/";

// Classes
pub const FIBO_LEGAL_ENTITY: &str = "https://spec.edmcouncil.org/fibo/ontology/BE/LegalEntities/LegalEntities/LegalEntity";
pub const EX_APPLICATION: &str = "http://example.com/ontology/Application";
pub const EX_LIBRARY: &str = "http://example.com/ontology/Library";
pub const EX_INFRASTRUCTURE_HARDWARE: &str = "http://example.com/ontology/InfrastructureHardware";
pub const EX_VULNERABILITY: &str = "http://example.com/ontology/Vulnerability";
pub const EX_BUSINESS_CAPABILITY: &str = "http://example.com/ontology/BusinessCapability";

// Properties
pub const FIBO_HAS_MEMBER: &str = "https://spec.edmcouncil.org/fibo/ontology/FND/Organizations/Organizations/hasMember";
pub const EX_DEPENDS_ON: &str = "http://example.com/ontology/dependsOn";
pub const EX_RUNS_ON: &str = "http://example.com/ontology/runsOn";
pub const EX_HAS_VULNERABILITY: &str = "http://example.com/ontology/hasVulnerability";
pub const EX_SUPPORTS_CAPABILITY: &str = "http://example.com/ontology/supportsCapability";
pub const EX_CVSS_SEVERITY: &str = "http://example.com/ontology/cvssSeverity";
pub const EX_CVE_ID: &str = "http://example.com/ontology/cveId";

/// Fragment or last path segment of an IRI
///
/// Splits after the last `#` first, then after the last `/`. The result can
/// be empty for IRIs ending in a separator.
pub fn local_name(iri: &str) -> &str {
    let tail = iri.rsplit_once('#').map_or(iri, |(_, t)| t);
    tail.rsplit_once('/').map_or(tail, |(_, t)| t)
}

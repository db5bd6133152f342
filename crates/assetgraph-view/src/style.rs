//! Colors and edge styles

use crate::classify::{category_of, Category};
use crate::severity::{severity_of, Severity};
use assetgraph_core::vocab::local_name;
use assetgraph_core::GraphRead;
use serde::Serialize;

pub const NEUTRAL_GRAY: &str = "#9e9e9e";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EdgeStyle {
    pub color: &'static str,
    pub dashed: bool,
}

/// Edge styles keyed by predicate local-name suffix, checked in order
///
/// Matching is textual: `http://other.org/vocab#dependsOn` styles the same as
/// the inventory's own `dependsOn`.
pub const EDGE_STYLES: [(&str, EdgeStyle); 5] = [
    ("dependsOn", EdgeStyle { color: "#1f77b4", dashed: false }),
    ("runsOn", EdgeStyle { color: "#2ca02c", dashed: false }),
    ("hasVulnerability", EdgeStyle { color: "#d62728", dashed: true }),
    ("hasMember", EdgeStyle { color: "#9467bd", dashed: false }),
    ("supportsCapability", EdgeStyle { color: "#ff00ff", dashed: true }),
];

pub const DEFAULT_EDGE_STYLE: EdgeStyle = EdgeStyle { color: "#7f7f7f", dashed: false };

pub fn edge_style(predicate: &str) -> EdgeStyle {
    let name = local_name(predicate);
    EDGE_STYLES
        .iter()
        .find(|(suffix, _)| name.ends_with(suffix))
        .map_or(DEFAULT_EDGE_STYLE, |(_, style)| *style)
}

pub fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "#8b0000",
        Severity::High => "#ff4500",
        Severity::Medium => "#ffa500",
        Severity::Low => "#9acd32",
        Severity::Unknown => "#cc00cc",
    }
}

/// Color for a category; vulnerabilities are keyed by `severity`
pub fn category_color(category: Category, severity: Severity) -> &'static str {
    match category {
        Category::Organization => "#0f9d58",
        Category::Application => "#f4b400",
        Category::Library => "#4285f4",
        Category::Infrastructure => "#ea4335",
        Category::Vulnerability => severity_color(severity),
        Category::BusinessCapability => "#ff00ff",
        Category::Other => NEUTRAL_GRAY,
    }
}

pub fn node_color<G: GraphRead + ?Sized>(graph: &G, uri: &str) -> &'static str {
    match category_of(graph, uri) {
        Category::Vulnerability => severity_color(severity_of(graph, uri)),
        category => category_color(category, Severity::Unknown),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LegendEntry {
    pub label: &'static str,
    pub color: &'static str,
}

/// Legend shown above the graph
pub fn legend() -> Vec<LegendEntry> {
    vec![
        LegendEntry { label: "Organization", color: category_color(Category::Organization, Severity::Unknown) },
        LegendEntry { label: "Application", color: category_color(Category::Application, Severity::Unknown) },
        LegendEntry { label: "Library", color: category_color(Category::Library, Severity::Unknown) },
        LegendEntry { label: "Infrastructure", color: category_color(Category::Infrastructure, Severity::Unknown) },
        LegendEntry { label: "Critical CVE", color: severity_color(Severity::Critical) },
        LegendEntry { label: "High CVE", color: severity_color(Severity::High) },
        LegendEntry { label: "Medium CVE", color: severity_color(Severity::Medium) },
        LegendEntry { label: "Low CVE", color: severity_color(Severity::Low) },
        LegendEntry { label: "Business Capability", color: category_color(Category::BusinessCapability, Severity::Unknown) },
    ]
}

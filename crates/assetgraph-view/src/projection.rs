//! Projection of the triple set into renderable nodes and edges

use crate::classify::{classify, Category};
use crate::config::ViewConfig;
use crate::label::label_of;
use crate::properties::{properties_of, Property, PropertyMode};
use crate::severity::{severity_of, Severity, SeverityFilter};
use crate::style::{category_color, edge_style};
use assetgraph_core::GraphRead;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub label: String,
    pub color: String,
    pub group: u8,
    pub properties: Vec<Property>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub from: String,
    pub to: String,
    pub label: String,
    /// Hover text; same as `label`
    pub title: String,
    pub color: String,
    #[serde(rename = "dashes")]
    pub dashed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphProjection {
    /// First-discovery order
    pub nodes: Vec<Node>,
    /// Triple enumeration order
    pub edges: Vec<Edge>,
}

impl GraphProjection {
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Per-call memo of classification and severity lookups
struct EntityCache<'g, G: GraphRead + ?Sized> {
    graph: &'g G,
    categories: HashMap<&'g str, Option<Category>>,
    severities: HashMap<&'g str, Severity>,
}

impl<'g, G: GraphRead + ?Sized> EntityCache<'g, G> {
    fn new(graph: &'g G) -> Self {
        Self {
            graph,
            categories: HashMap::new(),
            severities: HashMap::new(),
        }
    }

    fn category(&mut self, uri: &'g str) -> Option<Category> {
        let graph = self.graph;
        *self.categories.entry(uri).or_insert_with(|| classify(graph, uri))
    }

    fn severity(&mut self, uri: &'g str) -> Severity {
        let graph = self.graph;
        *self.severities.entry(uri).or_insert_with(|| severity_of(graph, uri))
    }

    /// Whether an endpoint survives `filter`; only vulnerabilities can be rejected
    fn admits(&mut self, uri: &'g str, category: Category, filter: SeverityFilter) -> bool {
        match category {
            Category::Vulnerability => filter.admits(self.severity(uri)),
            _ => true,
        }
    }

    fn node(&mut self, uri: &'g str, category: Category, mode: PropertyMode) -> Node {
        let severity = match category {
            Category::Vulnerability => self.severity(uri),
            _ => Severity::Unknown,
        };
        Node {
            id: uri.to_string(),
            label: label_of(self.graph, uri),
            color: category_color(category, severity).to_string(),
            group: category.group(),
            properties: properties_of(self.graph, uri, mode),
        }
    }
}

/// Project every visual-entity-to-visual-entity triple into nodes and edges
///
/// With an active filter, a triple survives only if each of its
/// vulnerability endpoints is admitted by the filter.
pub fn project<G: GraphRead + ?Sized>(graph: &G, filter: SeverityFilter, config: &ViewConfig) -> GraphProjection {
    let mut cache = EntityCache::new(graph);
    let mut node_ids: HashSet<&str> = HashSet::new();
    let mut edge_ids: HashSet<String> = HashSet::new();
    let mut projection = GraphProjection::default();
    let mut skipped_by_filter = 0usize;

    for triple in graph.triples() {
        let (Some(subject), Some(object)) = (triple.subject.as_uri(), triple.object.as_uri()) else {
            continue;
        };
        let (Some(subject_category), Some(object_category)) = (cache.category(subject), cache.category(object)) else {
            continue;
        };

        if filter.is_active()
            && !(cache.admits(subject, subject_category, filter) && cache.admits(object, object_category, filter))
        {
            skipped_by_filter += 1;
            continue;
        }

        let edge_id = config.edge_identity.edge_id(subject, object, &triple.predicate);
        if !edge_ids.insert(edge_id.clone()) {
            continue;
        }

        for (uri, category) in [(subject, subject_category), (object, object_category)] {
            if node_ids.insert(uri) {
                let node = cache.node(uri, category, config.property_mode);
                projection.nodes.push(node);
            }
        }

        let style = edge_style(&triple.predicate);
        let label = label_of(graph, &triple.predicate);
        projection.edges.push(Edge {
            id: edge_id,
            from: subject.to_string(),
            to: object.to_string(),
            title: label.clone(),
            label,
            color: style.color.to_string(),
            dashed: style.dashed,
        });
    }

    debug!(
        "Projected {} nodes and {} edges ({:?}, {} triples filtered out)",
        projection.nodes.len(),
        projection.edges.len(),
        filter,
        skipped_by_filter
    );

    projection
}

//! Entity classification from direct `rdf:type` membership

use assetgraph_core::vocab::{
    EX_APPLICATION, EX_BUSINESS_CAPABILITY, EX_INFRASTRUCTURE_HARDWARE, EX_LIBRARY, EX_VULNERABILITY,
    FIBO_LEGAL_ENTITY,
};
use assetgraph_core::GraphRead;
use serde::{Deserialize, Serialize};

/// Display category of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Organization,
    Application,
    Library,
    Infrastructure,
    Vulnerability,
    BusinessCapability,
    Other,
}

/// Checked in order; the first type present decides the category
pub const CATEGORY_PRECEDENCE: [(&str, Category); 6] = [
    (FIBO_LEGAL_ENTITY, Category::Organization),
    (EX_APPLICATION, Category::Application),
    (EX_LIBRARY, Category::Library),
    (EX_INFRASTRUCTURE_HARDWARE, Category::Infrastructure),
    (EX_VULNERABILITY, Category::Vulnerability),
    (EX_BUSINESS_CAPABILITY, Category::BusinessCapability),
];

impl Category {
    /// Group code understood by the browser client
    pub fn group(&self) -> u8 {
        match self {
            Category::Organization => 1,
            Category::Application => 2,
            Category::Library => 3,
            Category::Infrastructure => 4,
            Category::Vulnerability => 5,
            Category::Other => 6,
            Category::BusinessCapability => 7,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Organization => "Organization",
            Category::Application => "Application",
            Category::Library => "Library",
            Category::Infrastructure => "Infrastructure",
            Category::Vulnerability => "Vulnerability",
            Category::BusinessCapability => "BusinessCapability",
            Category::Other => "Other",
        }
    }

    pub fn is_visual(&self) -> bool {
        !matches!(self, Category::Other)
    }
}

/// Category of a visual entity, `None` for everything else
pub fn classify<G: GraphRead + ?Sized>(graph: &G, uri: &str) -> Option<Category> {
    let types = graph.types_of(uri);
    CATEGORY_PRECEDENCE
        .iter()
        .find(|(class, _)| types.contains(class))
        .map(|(_, category)| *category)
}

pub fn category_of<G: GraphRead + ?Sized>(graph: &G, uri: &str) -> Category {
    classify(graph, uri).unwrap_or(Category::Other)
}

pub fn is_visual_entity<G: GraphRead + ?Sized>(graph: &G, uri: &str) -> bool {
    classify(graph, uri).is_some()
}

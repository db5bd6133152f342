//! # assetgraph view
//!
//! Turns an asset inventory graph into what the browser draws:
//!
//! - [`classify`]: visual-entity detection and display categories
//! - [`label`]: label resolution with local-name fallback
//! - [`style`]: node colors, edge colors and dash styles
//! - [`properties`]: side-panel attributes
//! - [`projection`]: the node/edge projection with optional severity filter
//! - [`hierarchy`]: organization → application → vulnerability roll-up
//!
//! Every function takes the graph explicitly through
//! [`assetgraph_core::GraphRead`] and is pure for a fixed graph and filter.

pub mod classify;
pub mod config;
pub mod hierarchy;
pub mod label;
pub mod projection;
pub mod properties;
pub mod severity;
pub mod style;

pub use classify::{category_of, classify, is_visual_entity, Category};
pub use config::{EdgeIdentity, ViewConfig};
pub use hierarchy::{analyze, ApplicationReport, OrganizationReport};
pub use label::label_of;
pub use projection::{project, Edge, GraphProjection, Node};
pub use properties::{properties_of, Property, PropertyMode};
pub use severity::{severity_of, ParseSeverityError, Severity, SeverityFilter};
pub use style::{edge_style, node_color, EdgeStyle};

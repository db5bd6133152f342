//! The interactive graph page

use assetgraph_view::style::legend;
use assetgraph_view::{GraphProjection, OrganizationReport, SeverityFilter};
use serde::Serialize;

const TEMPLATE: &str = include_str!("../assets/index.html");

/// Embed a value as a JavaScript literal inside a `<script>` block
fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

/// Render the page with the projection and analysis baked in
pub fn render_page(
    projection: &GraphProjection,
    analysis: &[OrganizationReport],
    filter: SeverityFilter,
) -> Result<String, serde_json::Error> {
    Ok(TEMPLATE
        .replace("__NODES__", &script_json(&projection.nodes)?)
        .replace("__EDGES__", &script_json(&projection.edges)?)
        .replace("__ANALYSIS__", &script_json(analysis)?)
        .replace("__LEGEND__", &script_json(&legend())?)
        .replace("__SEVERITY__", &script_json(&filter.severity())?)
        .replace("__MATCH_NONE__", &script_json(&(filter == SeverityFilter::Nothing))?))
}

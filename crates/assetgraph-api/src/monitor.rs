//! Health monitor backed by the loaded graph

use assetgraph_core::{GraphRead, GraphStore, StoreStatistics, Term};
use assetgraph_observability::{HealthCheck, HealthMonitor, HealthStatus, RequestCounter, ServiceMetrics};
use assetgraph_core::vocab::{FIBO_LEGAL_ENTITY, RDF_TYPE};
use assetgraph_view::classify::{classify, CATEGORY_PRECEDENCE};
use chrono::Utc;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use std::time::Instant;

/// Dataset figures computed once; the graph never changes after startup
#[derive(Debug, Clone)]
struct DatasetSummary {
    statistics: StoreStatistics,
    visual_entities: usize,
    organizations: usize,
}

impl DatasetSummary {
    fn compute(graph: &GraphStore) -> Self {
        let mut seen = HashSet::new();
        let mut visual_entities = 0;
        for triple in graph.triples() {
            for uri in [triple.subject.as_uri(), triple.object.as_uri()].into_iter().flatten() {
                if seen.insert(uri) && classify(graph, uri).is_some() {
                    visual_entities += 1;
                }
            }
        }

        Self {
            statistics: graph.statistics(),
            visual_entities,
            organizations: graph.subjects(RDF_TYPE, &Term::uri(FIBO_LEGAL_ENTITY)).len(),
        }
    }
}

pub struct GraphHealthMonitor {
    summary: DatasetSummary,
    requests: Arc<RequestCounter>,
    start_time: Instant,
}

impl GraphHealthMonitor {
    pub fn new(graph: &GraphStore, requests: Arc<RequestCounter>) -> Self {
        Self {
            summary: DatasetSummary::compute(graph),
            requests,
            start_time: Instant::now(),
        }
    }

    fn dataset_check(&self) -> HealthCheck {
        let stats = &self.summary.statistics;
        let check = if stats.total_triples == 0 {
            HealthCheck::new("dataset", HealthStatus::Degraded).with_message("graph is empty")
        } else {
            HealthCheck::new("dataset", HealthStatus::Up)
                .with_message(format!("{} triples loaded", stats.total_triples))
        };
        check.with_details(serde_json::to_value(stats).unwrap_or_default())
    }

    fn visual_check(&self) -> HealthCheck {
        if self.summary.visual_entities == 0 {
            HealthCheck::new("visual-entities", HealthStatus::Degraded)
                .with_message(format!("no entity has one of the {} drawable types", CATEGORY_PRECEDENCE.len()))
        } else {
            HealthCheck::new("visual-entities", HealthStatus::Up).with_details(serde_json::json!({
                "visual_entities": self.summary.visual_entities,
                "organizations": self.summary.organizations,
            }))
        }
    }
}

#[async_trait::async_trait]
impl HealthMonitor for GraphHealthMonitor {
    async fn get_overall_health(&self) -> HealthStatus {
        let checks = self.run_health_checks().await;
        HealthStatus::aggregate(checks.iter().map(|c| &c.status))
    }

    async fn run_health_checks(&self) -> Vec<HealthCheck> {
        vec![self.dataset_check(), self.visual_check()]
    }

    async fn get_metrics(&self) -> ServiceMetrics {
        let stats = &self.summary.statistics;
        let gauges = BTreeMap::from([
            ("triples".to_string(), stats.total_triples as u64),
            ("distinct_subjects".to_string(), stats.distinct_subjects as u64),
            ("distinct_predicates".to_string(), stats.distinct_predicates as u64),
            ("distinct_objects".to_string(), stats.distinct_objects as u64),
            ("visual_entities".to_string(), self.summary.visual_entities as u64),
            ("organizations".to_string(), self.summary.organizations as u64),
        ]);

        ServiceMetrics {
            timestamp: Utc::now(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            total_requests: self.requests.get(),
            gauges,
        }
    }
}

//! Vulnerability severity and request filters

use assetgraph_core::vocab::EX_CVSS_SEVERITY;
use assetgraph_core::{GraphRead, Term};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Unknown,
}

impl Severity {
    /// Values a request may filter on
    pub const FILTERABLE: [Severity; 4] = [Severity::Critical, Severity::High, Severity::Medium, Severity::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
            Severity::Unknown => "Unknown",
        }
    }

    /// Interpret a stored `cvssSeverity` lexical form
    ///
    /// Only the exact spellings `Critical`, `High`, `Medium` and `Low` are
    /// recognized; anything else, including other casings, is `Unknown`.
    pub fn from_value(value: &str) -> Severity {
        Severity::FILTERABLE
            .into_iter()
            .find(|level| level.as_str() == value)
            .unwrap_or(Severity::Unknown)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unrecognized severity '{0}' (expected one of Critical, High, Medium, Low)")]
pub struct ParseSeverityError(pub String);

/// Parses a requested filter level, ignoring ASCII case and surrounding whitespace
impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Severity::FILTERABLE
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseSeverityError(s.to_string()))
    }
}

/// Severity recorded for a vulnerability, `Unknown` when absent
pub fn severity_of<G: GraphRead + ?Sized>(graph: &G, uri: &str) -> Severity {
    match graph.first_object(uri, EX_CVSS_SEVERITY) {
        Some(Term::Literal(value)) => Severity::from_value(value),
        Some(Term::Uri(_)) | Some(Term::BlankNode(_)) | None => Severity::Unknown,
    }
}

/// Which vulnerabilities a projection or analysis keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeverityFilter {
    #[default]
    All,
    Only(Severity),
    /// Admits no vulnerability at all
    Nothing,
}

impl SeverityFilter {
    pub fn is_active(&self) -> bool {
        !matches!(self, SeverityFilter::All)
    }

    pub fn admits(&self, severity: Severity) -> bool {
        match self {
            SeverityFilter::All => true,
            SeverityFilter::Only(wanted) => *wanted == severity,
            SeverityFilter::Nothing => false,
        }
    }

    /// The selected level, if the filter names one
    pub fn severity(&self) -> Option<Severity> {
        match self {
            SeverityFilter::Only(severity) => Some(*severity),
            SeverityFilter::All | SeverityFilter::Nothing => None,
        }
    }
}

impl From<Option<Severity>> for SeverityFilter {
    fn from(value: Option<Severity>) -> Self {
        value.map_or(SeverityFilter::All, SeverityFilter::Only)
    }
}

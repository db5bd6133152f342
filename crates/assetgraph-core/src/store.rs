//! Graph storage

use crate::model::{Term, Triple};
use crate::query::GraphRead;
use serde::Serialize;
use smallvec::SmallVec;
use std::collections::HashMap;

/// In-memory graph store with indexing for fast queries
///
/// Triples keep their insertion order, which is the enumeration order every
/// query reports. Inserting a triple that is already present is a no-op.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    triples: Vec<Triple>,
    /// Subject index: subject -> list of triple indices
    subject_index: HashMap<Term, SmallVec<[usize; 8]>>,
    /// Predicate index: predicate -> list of triple indices
    predicate_index: HashMap<String, SmallVec<[usize; 8]>>,
    /// Object index: object -> list of triple indices
    object_index: HashMap<Term, SmallVec<[usize; 8]>>,
}

/// Summary counts for a loaded store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreStatistics {
    pub total_triples: usize,
    pub distinct_subjects: usize,
    pub distinct_predicates: usize,
    pub distinct_objects: usize,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a triple; returns false when it was already stored
    pub fn add_triple(&mut self, triple: Triple) -> bool {
        if self.contains(&triple) {
            return false;
        }

        let index = self.triples.len();
        self.subject_index.entry(triple.subject.clone()).or_default().push(index);
        self.predicate_index.entry(triple.predicate.clone()).or_default().push(index);
        self.object_index.entry(triple.object.clone()).or_default().push(index);
        self.triples.push(triple);
        true
    }

    /// Add many triples, returning how many were new
    pub fn extend<I: IntoIterator<Item = Triple>>(&mut self, triples: I) -> usize {
        triples.into_iter().map(|t| self.add_triple(t)).filter(|added| *added).count()
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        !self
            .find_exact_triple_indices(&triple.subject, &triple.predicate, &triple.object)
            .is_empty()
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn statistics(&self) -> StoreStatistics {
        StoreStatistics {
            total_triples: self.triples.len(),
            distinct_subjects: self.subject_index.len(),
            distinct_predicates: self.predicate_index.len(),
            distinct_objects: self.object_index.len(),
        }
    }

    /// Find indices of triples that exactly match SPO
    fn find_exact_triple_indices(&self, subject: &Term, predicate: &str, object: &Term) -> SmallVec<[usize; 8]> {
        let (Some(subject_indices), Some(predicate_indices), Some(object_indices)) = (
            self.subject_index.get(subject),
            self.predicate_index.get(predicate),
            self.object_index.get(object),
        ) else {
            return SmallVec::new();
        };

        let partial = intersect_indices(subject_indices, predicate_indices);
        intersect_indices(&partial, object_indices)
    }

    fn subject_slice(&self, subject: &Term) -> &[usize] {
        self.subject_index.get(subject).map(|v| v.as_slice()).unwrap_or(&[])
    }

    fn predicate_slice(&self, predicate: &str) -> &[usize] {
        self.predicate_index.get(predicate).map(|v| v.as_slice()).unwrap_or(&[])
    }

    fn object_slice(&self, object: &Term) -> &[usize] {
        self.object_index.get(object).map(|v| v.as_slice()).unwrap_or(&[])
    }
}

impl FromIterator<Triple> for GraphStore {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        let mut store = GraphStore::new();
        store.extend(iter);
        store
    }
}

impl GraphRead for GraphStore {
    fn triples(&self) -> &[Triple] {
        &self.triples
    }

    /// Find triples matching a pattern, using the most selective index
    fn find_triples(&self, subject: Option<&Term>, predicate: Option<&str>, object: Option<&Term>) -> Vec<&Triple> {
        let candidate_indices: SmallVec<[usize; 8]> = match (subject, predicate, object) {
            (Some(s), Some(p), Some(o)) => self.find_exact_triple_indices(s, p, o),
            (Some(s), None, None) => SmallVec::from_slice(self.subject_slice(s)),
            (None, Some(p), None) => SmallVec::from_slice(self.predicate_slice(p)),
            (None, None, Some(o)) => SmallVec::from_slice(self.object_slice(o)),
            (Some(s), Some(p), None) => intersect_indices(self.subject_slice(s), self.predicate_slice(p)),
            (Some(s), None, Some(o)) => intersect_indices(self.subject_slice(s), self.object_slice(o)),
            (None, Some(p), Some(o)) => intersect_indices(self.predicate_slice(p), self.object_slice(o)),
            (None, None, None) => return self.triples.iter().collect(),
        };

        candidate_indices
            .iter()
            .filter_map(|&index| self.triples.get(index))
            .collect()
    }
}

/// Intersect two ascending index lists
fn intersect_indices(a: &[usize], b: &[usize]) -> SmallVec<[usize; 8]> {
    let mut result = SmallVec::new();
    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                result.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }

    result
}

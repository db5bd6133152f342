//! Pattern matching tests for the in-memory store

use assetgraph_core::{GraphRead, GraphStore, Term, Triple};
use proptest::prelude::*;

fn term_strategy() -> impl Strategy<Value = Term> {
    prop_oneof![
        (0..5u8).prop_map(|i| Term::uri(format!("http://example.com/e{}", i))),
        (0..3u8).prop_map(|i| Term::literal(format!("v{}", i))),
        (0..2u8).prop_map(|i| Term::blank(format!("b{}", i))),
    ]
}

fn triple_strategy() -> impl Strategy<Value = Triple> {
    (
        (0..5u8).prop_map(|i| Term::uri(format!("http://example.com/e{}", i))),
        (0..3u8).prop_map(|i| format!("http://example.com/p{}", i)),
        term_strategy(),
    )
        .prop_map(|(s, p, o)| Triple::new(s, p, o))
}

fn linear_match<'a>(
    triples: &'a [Triple],
    s: Option<&Term>,
    p: Option<&str>,
    o: Option<&Term>,
) -> Vec<&'a Triple> {
    triples
        .iter()
        .filter(|t| s.map_or(true, |s| &t.subject == s))
        .filter(|t| p.map_or(true, |p| t.predicate == p))
        .filter(|t| o.map_or(true, |o| &t.object == o))
        .collect()
}

proptest! {
    #[test]
    fn indexed_lookup_matches_linear_scan(
        triples in prop::collection::vec(triple_strategy(), 0..40),
        s in prop::option::of((0..5u8).prop_map(|i| Term::uri(format!("http://example.com/e{}", i)))),
        p in prop::option::of((0..3u8).prop_map(|i| format!("http://example.com/p{}", i))),
        o in prop::option::of(term_strategy()),
    ) {
        let store: GraphStore = triples.into_iter().collect();
        let indexed = store.find_triples(s.as_ref(), p.as_deref(), o.as_ref());
        let scanned = linear_match(store.triples(), s.as_ref(), p.as_deref(), o.as_ref());
        prop_assert_eq!(indexed, scanned);
    }

    #[test]
    fn store_has_set_semantics(triples in prop::collection::vec(triple_strategy(), 0..40)) {
        let store: GraphStore = triples.iter().cloned().collect();
        let unique: std::collections::HashSet<_> = triples.into_iter().collect();
        prop_assert_eq!(store.len(), unique.len());
    }
}

#[test]
fn test_empty_store_queries() {
    let store = GraphStore::new();
    assert!(store.is_empty());
    assert!(store.objects("http://example.com/x", "http://example.com/p").is_empty());
    assert!(store.types_of("http://example.com/x").is_empty());
    assert!(!store.mentions("http://example.com/x"));
}

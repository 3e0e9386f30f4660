//! Property-based tests for the multiset partial order, registry merge
//! algebra, and the bounded action fallback.

use proptest::prelude::*;

use ccg_encode::core::{Namespace, Seat};
use ccg_encode::graph::{CardMultiset, CardState};
use ccg_encode::vocab::{ActionVocabulary, FeatureRegistry};

fn card_state() -> impl Strategy<Value = CardState> {
    (
        prop::sample::select(vec!["Bear", "Angel", "Goblin", "Ogre", "Dragon"]),
        any::<bool>(),
        -3i32..=3,
    )
        .prop_map(|(name, tapped, counters)| {
            CardState::new(name).with_tapped(tapped).with_counters(counters)
        })
}

fn card_multiset() -> impl Strategy<Value = CardMultiset> {
    prop::collection::vec(card_state(), 0..10).prop_map(|cards| cards.into_iter().collect())
}

fn registry() -> impl Strategy<Value = FeatureRegistry> {
    prop::collection::vec((0u32..8, 0u16..3, prop::sample::select(vec!["x", "y", "z", "w"])), 0..20)
        .prop_map(|entries| {
            let mut registry = FeatureRegistry::new();
            for (idx, ns, name) in entries {
                registry.add_feature(Namespace::new(ns), name, idx);
            }
            registry
        })
}

fn merged(a: &FeatureRegistry, b: &FeatureRegistry) -> FeatureRegistry {
    let mut out = a.clone();
    out.merge(b);
    out
}

proptest! {
    #[test]
    fn subset_is_reflexive(a in card_multiset()) {
        prop_assert!(a.is_subset_of(&a));
    }

    #[test]
    fn extending_a_bag_preserves_containment(a in card_multiset(), extra in card_multiset()) {
        let mut bigger = a.clone();
        for card in extra.cards() {
            bigger.insert(card.clone());
        }
        prop_assert!(a.is_subset_of(&bigger));
    }

    #[test]
    fn subset_is_transitive(a in card_multiset(), e1 in card_multiset(), e2 in card_multiset()) {
        let mut b = a.clone();
        for card in e1.cards() {
            b.insert(card.clone());
        }
        let mut c = b.clone();
        for card in e2.cards() {
            c.insert(card.clone());
        }
        prop_assert!(a.is_subset_of(&b));
        prop_assert!(b.is_subset_of(&c));
        prop_assert!(a.is_subset_of(&c));
    }

    #[test]
    fn intersection_is_a_lower_bound(a in card_multiset(), b in card_multiset()) {
        let shared = a.intersection(&b);
        prop_assert!(shared.is_subset_of(&a));
        prop_assert!(shared.is_subset_of(&b));
    }

    #[test]
    fn intersection_is_greatest(base in card_multiset(), e1 in card_multiset(), e2 in card_multiset()) {
        // Any common sub-multiset (here: the shared base) is contained
        // in the intersection.
        let mut x = base.clone();
        for card in e1.cards() {
            x.insert(card.clone());
        }
        let mut y = base.clone();
        for card in e2.cards() {
            y.insert(card.clone());
        }
        prop_assert!(base.is_subset_of(&x.intersection(&y)));
    }

    #[test]
    fn intersection_commutes(a in card_multiset(), b in card_multiset()) {
        prop_assert_eq!(a.intersection(&b), b.intersection(&a));
    }

    #[test]
    fn intersection_counts_are_minima(a in card_multiset(), b in card_multiset(), probe in card_state()) {
        let shared = a.intersection(&b);
        prop_assert_eq!(shared.count(&probe), a.count(&probe).min(b.count(&probe)));
    }

    #[test]
    fn registry_merge_commutes(a in registry(), b in registry()) {
        prop_assert_eq!(merged(&a, &b), merged(&b, &a));
    }

    #[test]
    fn registry_merge_is_associative(a in registry(), b in registry(), c in registry()) {
        prop_assert_eq!(merged(&merged(&a, &b), &c), merged(&a, &merged(&b, &c)));
    }

    #[test]
    fn registry_merge_is_idempotent(a in registry()) {
        prop_assert_eq!(merged(&a, &a), a);
    }

    #[test]
    fn fallback_index_always_in_bucket_range(text in ".*") {
        let vocab = ActionVocabulary::unseeded();
        let idx = vocab.action_index(&text, Seat::Agent);
        prop_assert!((1..=127).contains(&idx));
        prop_assert_eq!(idx, vocab.action_index(&text, Seat::Opponent));
    }
}

//! Property tests for family closure over randomly generated forests.

use std::collections::BTreeSet;

use proptest::prelude::*;

use super::arena::Ledger;
use crate::company::Company;
use crate::invoice::testing::{child_of, invoice_between};
use crate::invoice::{Invoice, InvoiceKind};

/// Generates a random acyclic forest: each invoice past the first may link
/// to any earlier one, which makes cycles unrepresentable by construction.
fn forest_strategy() -> impl Strategy<Value = (Vec<Invoice>, BTreeSet<usize>)> {
    (1usize..12).prop_flat_map(|n| {
        let parents = prop::collection::vec(prop::option::of(0usize..n), n);
        let seeds = prop::collection::btree_set(0usize..n, 0..=n);
        (parents, seeds).prop_map(move |(parents, seeds)| {
            let mine = Company::new("Mine", "MINE", true);
            let other = Company::new("Other", "OTH", false);

            let mut invoices: Vec<Invoice> = Vec::with_capacity(n);
            for (i, parent) in parents.into_iter().enumerate() {
                let invoice = match parent.filter(|&p| p < i) {
                    Some(p) => child_of(
                        &invoices[p],
                        &format!("FV {i}/01/2024"),
                        InvoiceKind::Duplicate,
                    ),
                    None => invoice_between(&format!("FV {i}/01/2024"), &mine, &other),
                };
                invoices.push(invoice);
            }
            (invoices, seeds)
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// `S ⊆ closure(S)` for any seed set S.
    #[test]
    fn prop_closure_is_monotonic((invoices, seed_idx) in forest_strategy()) {
        let seeds: BTreeSet<_> = seed_idx.iter().map(|&i| invoices[i].id).collect();
        let ledger: Ledger = invoices.into_iter().collect();

        let closed = ledger.closure(&seeds).unwrap();
        prop_assert!(seeds.is_subset(&closed));
    }

    /// `closure(closure(S)) == closure(S)` for any seed set S.
    #[test]
    fn prop_closure_is_idempotent((invoices, seed_idx) in forest_strategy()) {
        let seeds: BTreeSet<_> = seed_idx.iter().map(|&i| invoices[i].id).collect();
        let ledger: Ledger = invoices.into_iter().collect();

        let once = ledger.closure(&seeds).unwrap();
        let twice = ledger.closure(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// Every member of a closure shares its family root with some seed.
    #[test]
    fn prop_closure_stays_within_seed_families((invoices, seed_idx) in forest_strategy()) {
        let seeds: BTreeSet<_> = seed_idx.iter().map(|&i| invoices[i].id).collect();
        let ledger: Ledger = invoices.into_iter().collect();

        let seed_roots: BTreeSet<_> = seeds
            .iter()
            .map(|&id| ledger.root_of(id).unwrap())
            .collect();

        for &member in &ledger.closure(&seeds).unwrap() {
            prop_assert!(seed_roots.contains(&ledger.root_of(member).unwrap()));
        }
    }

    /// Identical inputs resolve identically, independent of call order.
    #[test]
    fn prop_closure_is_deterministic((invoices, seed_idx) in forest_strategy()) {
        let seeds: BTreeSet<_> = seed_idx.iter().map(|&i| invoices[i].id).collect();
        let ledger: Ledger = invoices.into_iter().collect();

        prop_assert_eq!(ledger.closure(&seeds), ledger.closure(&seeds));
    }
}

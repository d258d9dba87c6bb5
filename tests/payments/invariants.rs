//! Property tests for balance invariants.

use crate::common::*;
use proptest::prelude::*;

fn account() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("A"), Just("B"), Just("C")]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn transfer_conserves_total(
        start_a in 0i64..10_000,
        start_b in 0i64..10_000,
        amount in 0i64..12_000,
        from in account(),
        to in account(),
    ) {
        let t = TestLedger::seeded(&[("A", start_a), ("B", start_b), ("C", 0)]);
        let before: i64 = t.query(&["A", "B", "C"]).iter().sum();
        let _ = t.transfer(from, to, amount);
        let after: i64 = t.query(&["A", "B", "C"]).iter().sum();
        prop_assert_eq!(before, after);
        t.assert_no_open_contexts();
    }

    #[test]
    fn accepted_transfer_never_overdraws(
        start in 0i64..10_000,
        amount in 0i64..20_000,
    ) {
        let t = TestLedger::seeded(&[("A", start)]);
        if t.transfer("A", "B", amount).is_ok() {
            let balance = t.query(&["A"])[0];
            prop_assert!(balance >= 0);
            prop_assert_eq!(balance, start - amount);
        } else {
            prop_assert!(amount > start);
        }
    }

    #[test]
    fn rejected_transfer_leaves_state_unchanged(
        start_a in 0i64..1_000,
        start_b in 0i64..1_000,
        excess in 1i64..1_000,
    ) {
        let t = TestLedger::seeded(&[("A", start_a), ("B", start_b)]);
        let result = t.transfer("A", "B", start_a + excess);
        let is_insufficient = matches!(result, Err(AppError::InsufficientFunds { .. }));
        prop_assert!(is_insufficient);
        prop_assert_eq!(t.query(&["A", "B"]), vec![start_a, start_b]);
    }

    #[test]
    fn query_results_follow_input_order(
        order in proptest::sample::subsequence(vec!["A", "B", "C", "D"], 0..=4)
            .prop_shuffle(),
    ) {
        let t = TestLedger::seeded(&[("A", 1), ("B", 2), ("C", 3)]);
        let expected: Vec<i64> = order
            .iter()
            .map(|name| match *name {
                "A" => 1,
                "B" => 2,
                "C" => 3,
                _ => 0,
            })
            .collect();
        prop_assert_eq!(t.query(&order), expected);
    }

    #[test]
    fn committed_balance_roundtrips(n in 0i64..=i64::MAX) {
        let t = TestLedger::seeded(&[("A", n)]);
        prop_assert_eq!(t.query(&["A"]), vec![n]);
    }
}

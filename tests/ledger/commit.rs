//! Commit path of the in-memory ledger.

use crate::common::*;
use kvpay::{encode_balance, EndorsedAction, LedgerError, Namespace, TxSimulator, ValidatedLedger};

fn simulated(ledger: &MemLedger, writes: &[(&str, i64)]) -> Transaction {
    let ns = Namespace::new("PaymentApp");
    let mut sim = ledger.new_tx_simulator().unwrap();
    for (key, value) in writes {
        sim.set_state(&ns, key, encode_balance(*value));
    }
    Transaction::from_simulation_results(sim.tx_simulation_results().unwrap())
}

#[test]
fn versions_increase_per_commit() {
    let t = TestLedger::new();
    assert_eq!(t.ledger.current_version(), 0);
    assert_eq!(t.ledger.commit(&simulated(&t.ledger, &[("A", 1)])).unwrap(), 1);
    assert_eq!(t.ledger.commit(&simulated(&t.ledger, &[("A", 2)])).unwrap(), 2);
    assert_eq!(t.query(&["A"]), vec![2]);
}

#[test]
fn multi_action_transaction_applies_all() {
    let t = TestLedger::new();
    let mut tx = simulated(&t.ledger, &[("A", 1)]);
    tx.endorsed_actions
        .extend(simulated(&t.ledger, &[("B", 2)]).endorsed_actions);
    t.ledger.commit(&tx).unwrap();
    assert_eq!(t.query(&["A", "B"]), vec![1, 2]);
}

#[test]
fn malformed_action_rejects_whole_transaction() {
    let t = TestLedger::new();
    let mut tx = simulated(&t.ledger, &[("A", 1)]);
    tx.endorsed_actions.push(EndorsedAction {
        action_bytes: b"not a write-set".to_vec(),
        ..EndorsedAction::default()
    });
    assert!(matches!(
        t.ledger.commit(&tx),
        Err(LedgerError::MalformedWriteSet { action: 1, .. })
    ));
    assert_eq!(t.query(&["A"]), vec![0]);
}

#[test]
fn empty_transaction_commits_nothing() {
    let t = TestLedger::new();
    let version = t.ledger.commit(&Transaction::default()).unwrap();
    assert_eq!(version, 1);
    assert_eq!(t.query(&["A"]), vec![0]);
}

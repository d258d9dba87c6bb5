//! Reference scenarios for init / transfer / query.

use crate::common::*;

#[test]
fn init_then_query() {
    let t = TestLedger::seeded(&[("A", 100), ("B", 50)]);
    assert_eq!(t.query(&["A", "B"]), vec![100, 50]);
}

#[test]
fn transfer_after_init() {
    let t = TestLedger::seeded(&[("A", 100), ("B", 50)]);
    t.transfer("A", "B", 30).unwrap();
    assert_eq!(t.query(&["A", "B"]), vec![70, 80]);
}

#[test]
fn overdraft_is_rejected_and_state_unchanged() {
    let t = TestLedger::seeded(&[("A", 100), ("B", 50)]);

    let err = t.transfer("A", "B", 1000).unwrap_err();
    match &err {
        AppError::InsufficientFunds {
            account,
            balance,
            requested,
        } => {
            assert_eq!(account, "A");
            assert_eq!(*balance, 100);
            assert_eq!(*requested, 1000);
        }
        other => panic!("expected InsufficientFunds, got {:?}", other),
    }
    assert_eq!(
        err.to_string(),
        "Not enough balance in account [A]. Balance = [100], transfer request = [1000]"
    );
    assert_eq!(t.query(&["A", "B"]), vec![100, 50]);
}

#[test]
fn unknown_account_reads_zero() {
    let t = TestLedger::new();
    assert_eq!(t.query(&["C"]), vec![0]);
}

#[test]
fn init_with_empty_mapping() {
    let t = TestLedger::new();
    let tx = t.app().init(&balances(&[])).unwrap();
    assert!(write_set_of(&tx).is_empty());
    t.ledger.commit(&tx).unwrap();
    assert_eq!(t.query(&["A"]), vec![0]);
}

#[test]
fn transfer_to_new_account() {
    let t = TestLedger::seeded(&[("A", 10)]);
    t.transfer("A", "Z", 10).unwrap();
    assert_eq!(t.query(&["A", "Z"]), vec![0, 10]);
}

#[test]
fn chained_transfers() {
    let t = TestLedger::seeded(&[("A", 100), ("B", 0), ("C", 0)]);
    t.transfer("A", "B", 60).unwrap();
    t.transfer("B", "C", 25).unwrap();
    t.transfer("C", "A", 5).unwrap();
    assert_eq!(t.query(&["A", "B", "C"]), vec![45, 35, 20]);
}

#[test]
fn negative_initial_balance_is_kept() {
    let t = TestLedger::seeded(&[("debtor", -40)]);
    assert_eq!(t.query(&["debtor"]), vec![-40]);
    assert!(matches!(
        t.transfer("debtor", "A", 1),
        Err(AppError::InsufficientFunds { balance: -40, .. })
    ));
}

#[test]
fn reinit_overwrites_balances() {
    let t = TestLedger::seeded(&[("A", 100)]);
    let tx = t.app().init(&balances(&[("A", 7)])).unwrap();
    t.ledger.commit(&tx).unwrap();
    assert_eq!(t.query(&["A"]), vec![7]);
}

#[test]
fn apps_with_different_names_are_isolated() {
    let t = TestLedger::seeded(&[("A", 100)]);
    let other = PaymentApp::with_namespace(&t.ledger, "Payroll".into());
    assert_eq!(other.query_balances(&["A"]).unwrap(), vec![0]);

    let tx = other.init(&balances(&[("A", 5)])).unwrap();
    t.ledger.commit(&tx).unwrap();
    assert_eq!(t.query(&["A"]), vec![100]);
    assert_eq!(other.query_balances(&["A"]).unwrap(), vec![5]);
}

#[test]
fn proposals_are_applied_in_commit_order() {
    let t = TestLedger::seeded(&[("A", 100), ("B", 0)]);
    // both simulated against the same committed state
    let first = t.app().transfer_funds("A", "B", 10).unwrap();
    let second = t.app().transfer_funds("A", "B", 20).unwrap();
    t.ledger.commit(&first).unwrap();
    t.ledger.commit(&second).unwrap();
    assert_eq!(t.query(&["A", "B"]), vec![80, 20]);
}

//! Shape and content of the proposals the app emits.

use crate::common::*;
use kvpay::{decode_balance, AccountKey, Namespace};

#[test]
fn transfer_proposal_is_single_unendorsed_action() {
    let t = TestLedger::seeded(&[("A", 100), ("B", 50)]);
    let tx = t.app().transfer_funds("A", "B", 30).unwrap();

    assert_eq!(tx.endorsed_actions.len(), 1);
    let action = &tx.endorsed_actions[0];
    assert!(action.endorsements.is_empty());
    assert!(action.proposal_bytes.is_empty());
    assert!(!action.action_bytes.is_empty());
}

#[test]
fn transfer_write_set_holds_reads_and_both_writes() {
    let t = TestLedger::seeded(&[("A", 100), ("B", 50)]);
    let version = t.ledger.current_version();
    let tx = t.app().transfer_funds("A", "B", 30).unwrap();
    let ws = write_set_of(&tx);

    let ns = Namespace::new("PaymentApp");
    let read_keys: Vec<&AccountKey> = ws.reads.iter().map(|r| &r.key).collect();
    assert_eq!(
        read_keys,
        vec![&AccountKey::new(ns.clone(), "A"), &AccountKey::new(ns.clone(), "B")]
    );
    assert!(ws.reads.iter().all(|r| r.version == version));

    let writes: Vec<(String, i64)> = ws
        .writes
        .iter()
        .map(|w| (w.key.account.clone(), decode_balance(Some(&w.value))))
        .collect();
    assert_eq!(writes, vec![("A".to_string(), 70), ("B".to_string(), 80)]);
}

#[test]
fn init_write_set_has_no_reads() {
    let t = TestLedger::new();
    let tx = t.app().init(&balances(&[("A", 1), ("B", 2)])).unwrap();
    let ws = write_set_of(&tx);
    assert!(ws.reads.is_empty());
    assert_eq!(ws.writes.len(), 2);
}

#[test]
fn each_proposal_reflects_only_its_own_session() {
    let t = TestLedger::seeded(&[("A", 100), ("B", 50), ("C", 0)]);
    let first = t.app().transfer_funds("A", "B", 1).unwrap();
    let second = t.app().transfer_funds("B", "C", 1).unwrap();

    let accounts = |tx: &Transaction| -> Vec<String> {
        write_set_of(tx)
            .writes
            .into_iter()
            .map(|w| w.key.account)
            .collect()
    };
    assert_eq!(accounts(&first), vec!["A", "B"]);
    assert_eq!(accounts(&second), vec!["B", "C"]);
}

#[test]
fn proposal_survives_wire_roundtrip_and_commits() {
    let t = TestLedger::seeded(&[("A", 100), ("B", 50)]);
    let tx = t.app().transfer_funds("A", "B", 30).unwrap();

    let bytes = tx.to_bytes().unwrap();
    let received = Transaction::from_bytes(&bytes).unwrap();
    assert_eq!(received, tx);

    t.ledger.commit(&received).unwrap();
    assert_eq!(t.query(&["A", "B"]), vec![70, 80]);
}

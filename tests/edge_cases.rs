use chrono::Local;
use chronolist::{ChronoList, ChronoListError};
use std::thread::sleep;
use std::time::Duration;

const MICROS_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

fn now_string() -> String {
    Local::now().naive_local().format(MICROS_FORMAT).to_string()
}

fn pause() {
    sleep(Duration::from_millis(10));
}

/// Test 1: every positional operation rejects an empty list the same way.
#[test]
fn test_bounds_on_empty_list() {
    let mut list: ChronoList<i32> = ChronoList::new();

    assert!(matches!(
        list.get(0),
        Err(ChronoListError::IndexOutOfRange { index: 0, len: 0 })
    ));
    assert!(matches!(
        list.remove(0),
        Err(ChronoListError::IndexOutOfRange { index: 0, len: 0 })
    ));
    assert!(matches!(
        list.replace(0, 1),
        Err(ChronoListError::IndexOutOfRange { index: 0, len: 0 })
    ));
    assert!(list.insert(1, 1).is_err());

    // Nothing was retired by the failed attempts.
    assert_eq!(list.stats().retired_count, 0);
    assert_eq!(list.stats().operations_count, 0);
}

/// Test 2: the reconstruction result is the live scan followed by the
/// retired scan, not the true historical order.
#[test]
fn test_reconstruction_order_is_live_then_retired() {
    let mut list = ChronoList::with_format(MICROS_FORMAT);
    list.push("a");
    list.push("b");
    list.push("c");
    pause();
    let all_present = now_string();
    pause();

    // Retire the historically-first element.
    list.remove(0).unwrap();

    // "a" trails the live scan even though it was created first.
    assert_eq!(
        list.query_as_of(&all_present).unwrap(),
        vec!["b", "c", "a"]
    );
}

/// Test 3: bulk insert ignores its position argument, in and out of range.
#[test]
fn test_insert_all_always_appends() {
    let mut list = ChronoList::new();
    list.push(1);

    list.insert_all(0, vec![2, 3]);
    assert_eq!(list.to_vec(), vec![1, 2, 3]);

    // Even an absurd index is accepted; the legacy contract never checks it.
    list.insert_all(999, vec![4]);
    assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
}

/// Test 4: churn stress (keeping it reasonable for CI).
#[test]
fn test_heavy_churn_keeps_counts_consistent() {
    let mut list = ChronoList::new();

    for i in 0..10_000 {
        list.push(i);
    }
    for _ in 0..2_500 {
        list.remove(0).unwrap();
    }
    for i in 0..500 {
        list.replace(i, -1).unwrap();
    }

    assert_eq!(list.len(), 7_500);
    let stats = list.stats();
    assert_eq!(stats.live_count, 7_500);
    assert_eq!(stats.retired_count, 3_000);

    // A far-future query sees exactly the live contents, in order.
    let now_plus = list.query_as_of("2999-01-01 00:00:00").unwrap();
    assert_eq!(now_plus.len(), 7_500);
    assert_eq!(now_plus[0], -1);
    assert_eq!(now_plus[499], -1);
    assert_eq!(now_plus[500], 3_000);
}

/// Test 5: replacement chains keep every overwritten value reachable at its
/// own instant.
#[test]
fn test_replacement_chain_history() {
    let mut list = ChronoList::with_format(MICROS_FORMAT);
    list.push("v1");
    pause();
    let t1 = now_string();
    pause();

    list.replace(0, "v2").unwrap();
    pause();
    let t2 = now_string();
    pause();

    list.replace(0, "v3").unwrap();
    pause();
    let t3 = now_string();

    assert_eq!(list.query_as_of(&t1).unwrap(), vec!["v1"]);
    assert_eq!(list.query_as_of(&t2).unwrap(), vec!["v2"]);
    assert_eq!(list.query_as_of(&t3).unwrap(), vec!["v3"]);
    assert_eq!(*list.get(0).unwrap(), "v3");
}

/// Test 6: a cleared batch disappears atomically; one shared instant bounds
/// every retired window.
#[test]
fn test_clear_is_a_single_instant() {
    let mut list = ChronoList::with_format(MICROS_FORMAT);
    for i in 0..5 {
        list.push(i);
    }
    pause();
    let before = now_string();
    pause();
    list.clear();
    pause();
    let after = now_string();

    // No instant sees a partially-cleared list.
    assert_eq!(list.query_as_of(&before).unwrap().len(), 5);
    assert!(list.query_as_of(&after).unwrap().is_empty());
}

/// Test 7: an empty-string query fails cleanly rather than parsing as
/// anything.
#[test]
fn test_empty_query_string() {
    let list: ChronoList<i32> = ChronoList::new();
    assert!(matches!(
        list.query_as_of(""),
        Err(ChronoListError::TimestampParse(_))
    ));
}

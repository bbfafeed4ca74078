//! Tests for suggest/debouncer

use super::*;

#[test]
fn test_not_ready_before_delay() {
    let mut debouncer = Debouncer::new(10_000);
    debouncer.arm("cat".to_string());
    assert_eq!(debouncer.poll(), None);
    assert!(debouncer.is_armed());
}

#[test]
fn test_zero_delay_fires_immediately() {
    let mut debouncer = Debouncer::new(0);
    debouncer.arm("cat".to_string());
    assert_eq!(debouncer.poll(), Some("cat".to_string()));
    assert!(!debouncer.is_armed());
}

#[test]
fn test_fires_at_most_once_per_arm() {
    let mut debouncer = Debouncer::new(0);
    debouncer.arm("cat".to_string());
    assert!(debouncer.poll().is_some());
    assert_eq!(debouncer.poll(), None);
}

#[test]
fn test_rearm_replaces_pending_prefix() {
    let mut debouncer = Debouncer::new(0);
    debouncer.arm("a".to_string());
    debouncer.arm("ab".to_string());
    debouncer.arm("abc".to_string());
    assert_eq!(debouncer.poll(), Some("abc".to_string()));
    assert_eq!(debouncer.poll(), None);
}

#[test]
fn test_clear_drops_pending() {
    let mut debouncer = Debouncer::new(0);
    debouncer.arm("cat".to_string());
    debouncer.clear();
    assert_eq!(debouncer.poll(), None);
    assert!(!debouncer.is_armed());
}

#[test]
fn test_time_until_ready() {
    let mut debouncer = Debouncer::new(60_000);
    assert_eq!(debouncer.time_until_ready(), None);

    debouncer.arm("cat".to_string());
    let remaining = debouncer.time_until_ready().unwrap();
    assert!(remaining <= Duration::from_millis(60_000));
    assert!(remaining > Duration::from_millis(30_000));
}

//! Ring integration tests
//!
//! Scenario tests for the public ring API: building, lookup, removal and
//! cursor navigation as a playlist driver would use them.

use carousel_ring::{Ring, RingError};

// ===== Test Helpers =====

#[derive(Debug, Clone, PartialEq)]
struct Song {
    title: &'static str,
    artist: &'static str,
}

fn song(title: &'static str) -> Song {
    Song {
        title,
        artist: "Test Artist",
    }
}

fn titles(ring: &Ring<Song>) -> Vec<&'static str> {
    ring.iter().map(|s| s.title).collect()
}

fn abc() -> Ring<Song> {
    let mut ring = Ring::new();
    ring.append(song("A"));
    ring.append(song("B"));
    ring.append(song("C"));
    ring
}

// ===== Building & Lookup =====

#[test]
fn test_append_preserves_call_order() {
    let ring = abc();

    assert_eq!(ring.len(), 3);
    assert_eq!(titles(&ring), vec!["A", "B", "C"]);
    assert_eq!(ring.get(0).unwrap().title, "A");
    assert_eq!(ring.get(2).unwrap().title, "C");
    ring.validate().unwrap();
}

#[test]
fn test_get_out_of_range() {
    let ring = abc();

    assert_eq!(
        ring.get(3).unwrap_err(),
        RingError::IndexOutOfRange { index: 3, len: 3 }
    );
    assert!(ring.get(usize::MAX).is_err());
}

#[test]
fn test_empty_ring_failures() {
    let mut ring: Ring<Song> = Ring::new();

    assert_eq!(ring.remove(&song("A")), Err(RingError::NotFound));
    assert_eq!(
        ring.get(0).unwrap_err(),
        RingError::IndexOutOfRange { index: 0, len: 0 }
    );
    assert!(!ring.contains(&song("A")));
    assert_eq!(ring.iter().count(), 0);
    ring.validate().unwrap();
}

#[test]
fn test_contains_uses_item_equality() {
    let ring = abc();

    assert!(ring.contains(&song("B")));
    assert!(!ring.contains(&Song {
        title: "B",
        artist: "Someone Else",
    }));
    assert!(ring.contains_by(|s| s.title == "C"));
}

// ===== Removal =====

#[test]
fn test_remove_missing_changes_nothing() {
    let mut ring = abc();
    ring.set_cursor_to_item(&song("B"));

    assert_eq!(ring.remove(&song("Z")), Err(RingError::NotFound));

    assert_eq!(ring.len(), 3);
    assert_eq!(titles(&ring), vec!["A", "B", "C"]);
    assert_eq!(ring.current().unwrap().title, "B");
}

#[test]
fn test_remove_returns_item() {
    let mut ring = abc();
    let removed = ring.remove(&song("A")).unwrap();

    assert_eq!(removed, song("A"));
    assert_eq!(titles(&ring), vec!["B", "C"]);
}

#[test]
fn test_remove_every_item_in_turn() {
    let mut ring = abc();

    for title in ["B", "A", "C"] {
        ring.remove(&song(title)).unwrap();
        ring.validate().unwrap();
    }
    assert!(ring.is_empty());

    // Ring is reusable after being emptied
    ring.append(song("D"));
    assert_eq!(titles(&ring), vec!["D"]);
    ring.validate().unwrap();
}

// ===== Cursor Navigation =====

#[test]
fn test_two_item_wraparound() {
    let mut ring = Ring::new();
    ring.append(song("A"));
    ring.append(song("B"));

    ring.set_cursor_to_item(&song("A"));
    assert_eq!(ring.advance().unwrap().title, "B");
    assert_eq!(ring.advance().unwrap().title, "A");
    assert_eq!(ring.retreat().unwrap().title, "B");
}

#[test]
fn test_single_item_always_returns_itself() {
    let mut ring = Ring::new();
    ring.append(song("A"));
    ring.set_cursor_to_item(&song("A"));

    for _ in 0..10 {
        assert_eq!(ring.advance().unwrap().title, "A");
    }
}

#[test]
fn test_remove_current_moves_to_successor() {
    let mut ring = abc();
    ring.set_cursor_to_item(&song("B"));

    ring.remove(&song("B")).unwrap();

    assert_eq!(ring.current().unwrap().title, "C");
    assert_eq!(ring.len(), 2);
    assert_eq!(titles(&ring), vec!["A", "C"]);
}

#[test]
fn test_remove_current_head_moves_head_and_cursor() {
    let mut ring = abc();
    ring.set_cursor_to_item(&song("A"));

    ring.remove(&song("A")).unwrap();

    assert_eq!(ring.current().unwrap().title, "B");
    assert_eq!(ring.front().unwrap().title, "B");
    assert_eq!(ring.retreat().unwrap().title, "C");
}

#[test]
fn test_navigation_continues_after_deleting_selection() {
    let mut ring = abc();
    ring.set_cursor_to_item(&song("C"));

    ring.remove(&song("C")).unwrap();
    assert_eq!(ring.current().unwrap().title, "A");
    assert_eq!(ring.advance().unwrap().title, "B");
    assert_eq!(ring.advance().unwrap().title, "A");
}

#[test]
fn test_cursor_untouched_by_append_get_contains() {
    let mut ring = abc();
    ring.set_cursor_to_item(&song("B"));

    ring.append(song("D"));
    let _ = ring.get(3);
    let _ = ring.contains(&song("A"));

    assert_eq!(ring.current().unwrap().title, "B");
    assert_eq!(ring.peek_next().unwrap().title, "C");
}

#[test]
fn test_select_missing_is_silent() {
    let mut ring = abc();

    assert!(!ring.set_cursor_to_item(&song("Z")));
    assert!(ring.current().is_none());

    ring.set_cursor_to_item(&song("A"));
    assert!(!ring.set_cursor_to_item(&song("Z")));
    assert_eq!(ring.current().unwrap().title, "A");
}

// ===== Positions =====

#[test]
fn test_positions_track_items_not_indices() {
    let mut ring = Ring::new();
    ring.append(song("A"));
    let b = ring.append(song("B"));
    ring.append(song("C"));

    ring.remove(&song("A")).unwrap();
    assert_eq!(ring.get_position(b).unwrap().title, "B");

    ring.set_cursor(b).unwrap();
    assert_eq!(ring.cursor_index(), Some(0));

    ring.remove_position(b).unwrap();
    assert_eq!(ring.set_cursor(b), Err(RingError::StalePosition));
    assert_eq!(ring.current().unwrap().title, "C");
}

// ===== Traversal Policy =====

#[test]
fn test_walker_fails_fast_on_append() {
    let mut ring = abc();
    let mut walker = ring.walker();

    assert_eq!(walker.next(&ring).unwrap().unwrap().title, "A");
    ring.append(song("D"));

    let err = walker.next(&ring).unwrap_err();
    assert!(matches!(err, RingError::ConcurrentModification { .. }));

    // A fresh walker sees the new item
    let mut walker = ring.walker();
    let mut count = 0;
    while walker.next(&ring).unwrap().is_some() {
        count += 1;
    }
    assert_eq!(count, 4);
}

#[test]
fn test_failed_remove_does_not_invalidate_walker() {
    let mut ring = abc();
    let mut walker = ring.walker();

    let _ = ring.remove(&song("Z"));
    assert!(walker.next(&ring).is_ok());
}

// Skip list iteration: ordered keys, per-level dumps, and the seekable cursor.

use ordered_skiplist::{KeyCursor, SkipList};

fn sample() -> SkipList {
    let mut sl = SkipList::with_seed(6, 0.5, 31).unwrap();
    sl.insert_all([30, 10, 50, 20, 40]).unwrap();
    sl
}

// =============================================================================
// Test 1: Empty cursor
// =============================================================================
// A cursor over an empty skip list should immediately be invalid.
#[test]
fn cursor_empty_skiplist_is_invalid() {
    let sl = SkipList::with_seed(4, 0.5, 1).unwrap();
    let cursor = sl.cursor();
    assert!(!cursor.is_valid());
    assert_eq!(cursor.key(), None);
}

// =============================================================================
// Test 2: Cursor walks in sorted order
// =============================================================================
#[test]
fn cursor_returns_sorted_order() {
    let sl = sample();
    let mut cursor = sl.cursor();
    let mut collected = Vec::new();
    while let Some(k) = cursor.key() {
        collected.push(k);
        cursor.next();
    }
    assert_eq!(collected, vec![10, 20, 30, 40, 50]);

    // Advancing past the end stays invalid.
    cursor.next();
    assert!(!cursor.is_valid());
}

// =============================================================================
// Test 3: Seek to existing key
// =============================================================================
#[test]
fn cursor_seek_to_existing_key() {
    let sl = sample();
    let mut cursor = sl.cursor();
    cursor.seek(30);
    assert_eq!(cursor.key(), Some(30));
    cursor.next();
    assert_eq!(cursor.key(), Some(40));
}

// =============================================================================
// Test 4: Seek to missing key lands on the next one
// =============================================================================
#[test]
fn cursor_seek_to_nonexistent_key() {
    let sl = sample();
    let mut cursor = sl.cursor();
    cursor.seek(25);
    assert_eq!(cursor.key(), Some(30));
}

// =============================================================================
// Test 5: Seek past all entries
// =============================================================================
#[test]
fn cursor_seek_past_end() {
    let sl = sample();
    let mut cursor = sl.cursor();
    cursor.seek(51);
    assert!(!cursor.is_valid());
}

// =============================================================================
// Test 6: Seek before all entries, then rewind
// =============================================================================
#[test]
fn cursor_seek_to_beginning_and_rewind() {
    let sl = sample();
    let mut cursor = sl.cursor();
    cursor.seek(i64::MIN);
    assert_eq!(cursor.key(), Some(10));

    cursor.seek(45);
    assert_eq!(cursor.key(), Some(50));
    cursor.seek_to_first();
    assert_eq!(cursor.key(), Some(10));
}

// =============================================================================
// Test 7: iter() and &SkipList IntoIterator agree
// =============================================================================
#[test]
fn iter_yields_sorted_keys() {
    let sl = sample();
    let via_iter: Vec<i64> = sl.iter().collect();
    let mut via_loop = Vec::new();
    for k in &sl {
        via_loop.push(k);
    }
    assert_eq!(via_iter, vec![10, 20, 30, 40, 50]);
    assert_eq!(via_iter, via_loop);
}

// =============================================================================
// Test 8: Levels dump covers 0..=level
// =============================================================================
#[test]
fn levels_cover_every_occupied_level() {
    let mut sl = SkipList::with_seed(8, 0.5, 32).unwrap();
    sl.insert_all(0..64).unwrap();

    let levels: Vec<(usize, Vec<i64>)> =
        sl.levels().map(|(i, keys)| (i, keys.collect())).collect();

    assert_eq!(levels.len(), sl.level() + 1);
    assert_eq!(sl.levels().len(), sl.level() + 1);
    for (expected, (i, _)) in levels.iter().enumerate() {
        assert_eq!(*i, expected);
    }
    assert_eq!(levels[0].1, (0..64).collect::<Vec<_>>());
    // The top occupied level is never empty.
    assert!(!levels[sl.level()].1.is_empty());
    // Each level is a subset of the one below.
    for pair in levels.windows(2) {
        let below = &pair[0].1;
        assert!(pair[1].1.iter().all(|k| below.contains(k)));
        assert!(pair[1].1.len() <= below.len());
    }
}

// =============================================================================
// Test 9: Level iterators can be restarted
// =============================================================================
#[test]
fn level_iter_is_restartable() {
    let sl = sample();
    let (_, keys) = sl.levels().next().unwrap();
    let again = keys.clone();
    assert_eq!(keys.level(), 0);
    assert_eq!(keys.collect::<Vec<_>>(), again.collect::<Vec<_>>());
}

// =============================================================================
// Test 10: Display renders one line per level
// =============================================================================
#[test]
fn display_renders_levels() {
    let sl = sample();
    let rendered = sl.to_string();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), sl.level() + 1);
    assert_eq!(lines[0], "Level 0: 10 20 30 40 50");
    for (i, line) in lines.iter().enumerate() {
        assert!(line.starts_with(&format!("Level {i}:")));
    }
}

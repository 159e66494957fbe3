use std::iter::FusedIterator;

use crate::iterator::KeyCursor;

use super::SkipList;
use super::node::HEAD;

/// Keys on a single level, in ascending order.
///
/// Simply follows the level's forward links from the header. Cloning
/// gives an independent walk from the same position.
#[derive(Clone)]
pub struct LevelIter<'a> {
    list: &'a SkipList,
    level: usize,
    next: Option<usize>,
}

impl<'a> LevelIter<'a> {
    pub(super) fn new(list: &'a SkipList, level: usize) -> Self {
        LevelIter {
            list,
            level,
            next: list.nodes[HEAD].forward[level],
        }
    }

    /// Which level this iterator walks.
    pub fn level(&self) -> usize {
        self.level
    }
}

impl Iterator for LevelIter<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let node = &self.list.nodes[self.next?];
        self.next = node.forward[self.level];
        Some(node.key)
    }
}

impl FusedIterator for LevelIter<'_> {}

/// Every occupied level `0..=level()` paired with its keys, bottom first.
#[derive(Clone)]
pub struct Levels<'a> {
    list: &'a SkipList,
    level: usize,
}

impl<'a> Levels<'a> {
    pub(super) fn new(list: &'a SkipList) -> Self {
        Levels { list, level: 0 }
    }
}

impl<'a> Iterator for Levels<'a> {
    type Item = (usize, LevelIter<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.level > self.list.level {
            return None;
        }
        let level = self.level;
        self.level += 1;
        Some((level, LevelIter::new(self.list, level)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.list.level + 1).saturating_sub(self.level);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Levels<'_> {}

/// Seekable cursor over a skip list's keys.
///
/// Starts at the first key. `seek` repositions with the same leveled
/// descent that search uses, so jumping is O(log n) rather than a scan.
pub struct SkipListIterator<'a> {
    list: &'a SkipList,
    current: Option<usize>,
}

impl<'a> SkipListIterator<'a> {
    pub(super) fn new(list: &'a SkipList) -> Self {
        SkipListIterator {
            list,
            current: list.nodes[HEAD].forward[0],
        }
    }
}

impl KeyCursor for SkipListIterator<'_> {
    fn key(&self) -> Option<i64> {
        self.current.map(|idx| self.list.nodes[idx].key)
    }

    fn next(&mut self) {
        if let Some(idx) = self.current {
            self.current = self.list.nodes[idx].forward[0];
        }
    }

    fn seek(&mut self, key: i64) {
        let pred = self.list.descend(key, None);
        self.current = self.list.nodes[pred].forward[0];
    }

    fn seek_to_first(&mut self) {
        self.current = self.list.nodes[HEAD].forward[0];
    }
}

pub mod iter;
mod level;
mod node;

use std::{fmt, mem};

use log::{debug, trace};

use crate::error::Result;
use crate::options::Options;
use iter::{LevelIter, Levels, SkipListIterator};
use level::LevelGenerator;
use node::{HEAD, SkipNode};

/// A probabilistic sorted set of unique `i64` keys.
///
/// Why skip list over red-black tree?
///   - Simpler to implement correctly
///   - No rebalancing: balance comes from random node heights
///   - Ordered iteration is a plain walk of level 0
///
/// Average case: O(log n) insert, O(log n) lookup, O(log n) delete, O(n) iteration.
/// Worst case: O(n), but astronomically unlikely with random level assignment.
///
/// Nodes live in an arena (`nodes`) addressed by index; slot 0 is the header
/// sentinel. Deleted slots go on a free list and are reused by later inserts.
/// Dropping the list drops the arena, which releases every remaining node.
///
/// Nodes are an implementation detail and can't be reached from outside:
///
/// ```compile_fail
/// use ordered_skiplist::skiplist::node::SkipNode;
/// ```
pub struct SkipList {
    nodes: Vec<SkipNode>,
    free: Vec<usize>,
    /// Predecessor per level, reused by every insert and delete.
    update: Vec<usize>,
    /// Highest occupied level index. `0 <= level < max_level`.
    level: usize,
    len: usize,
    size_bytes: usize,
    levels: LevelGenerator,
}

impl SkipList {
    /// Create an empty skip list whose nodes span at most `max_level` levels,
    /// each extra level reached with chance `probability`.
    ///
    /// The level generator is seeded from OS entropy.
    /// Use [`SkipList::with_seed`] for reproducible layouts.
    pub fn new(max_level: usize, probability: f64) -> Result<Self> {
        Self::with_options(Options::new(max_level, probability))
    }

    /// Like [`SkipList::new`] but with a fixed RNG seed.
    pub fn with_seed(max_level: usize, probability: f64, seed: u64) -> Result<Self> {
        Self::with_options(Options::new(max_level, probability).seed(seed))
    }

    /// Create an empty skip list from validated options.
    pub fn with_options(options: Options) -> Result<Self> {
        options.validate()?;

        let header = SkipNode::new(i64::MIN, options.max_level)?;
        let mut nodes = Vec::new();
        nodes.try_reserve(1)?;
        nodes.push(header);

        let mut update = Vec::new();
        update.try_reserve_exact(options.max_level)?;
        update.resize(options.max_level, HEAD);

        Ok(SkipList {
            nodes,
            free: Vec::new(),
            update,
            level: 0,
            len: 0,
            size_bytes: 0,
            levels: LevelGenerator::new(options.max_level, options.probability, options.seed),
        })
    }

    /// Insert a key. Returns `Ok(false)` if the key was already present,
    /// in which case the list is left untouched.
    ///
    /// Algorithm:
    ///   1. Find the predecessor at each level (the update vector)
    ///   2. Bail out if level 0's successor already holds the key
    ///   3. Draw a span for the new node and allocate it
    ///   4. Raise the list level if the span reaches above it
    ///   5. Splice the node in after its predecessor on every level it spans
    pub fn insert(&mut self, key: i64) -> Result<bool> {
        let mut update = mem::take(&mut self.update);
        let inserted = self.insert_with(key, &mut update);
        self.update = update;
        inserted
    }

    fn insert_with(&mut self, key: i64, update: &mut [usize]) -> Result<bool> {
        // Levels above the current one have only the header before them.
        update.fill(HEAD);
        let pred = self.descend(key, Some(&mut *update));

        if self.successor_matches(pred, key).is_some() {
            trace!("insert {key}: already present");
            return Ok(false);
        }

        let span = self.levels.random_level();
        // Allocate before touching any links so failure leaves the list as it was.
        let idx = self.alloc(key, span)?;

        if span - 1 > self.level {
            debug!("insert {key}: raising level {} -> {}", self.level, span - 1);
            self.level = span - 1;
        }

        for (i, &pred) in update.iter().enumerate().take(span) {
            self.nodes[idx].forward[i] = self.nodes[pred].forward[i];
            self.nodes[pred].forward[i] = Some(idx);
        }

        self.len += 1;
        Ok(true)
    }

    /// Insert every key from `keys`, returning how many were new.
    pub fn insert_all<I>(&mut self, keys: I) -> Result<usize>
    where
        I: IntoIterator<Item = i64>,
    {
        let mut inserted = 0;
        for key in keys {
            if self.insert(key)? {
                inserted += 1;
            }
        }
        Ok(inserted)
    }

    /// Remove a key. Returns `false` if it was not present.
    ///
    /// The unlink loop stops at the first level whose predecessor doesn't
    /// point at the target: spans are contiguous from level 0, so no higher
    /// level can reference it either.
    pub fn delete(&mut self, key: i64) -> bool {
        let mut update = mem::take(&mut self.update);
        let deleted = self.delete_with(key, &mut update);
        self.update = update;
        deleted
    }

    fn delete_with(&mut self, key: i64, update: &mut [usize]) -> bool {
        let pred = self.descend(key, Some(&mut *update));

        let Some(target) = self.successor_matches(pred, key) else {
            trace!("delete {key}: not present");
            return false;
        };

        for (i, &pred) in update.iter().enumerate().take(self.level + 1) {
            if self.nodes[pred].forward[i] != Some(target) {
                break;
            }
            self.nodes[pred].forward[i] = self.nodes[target].forward[i];
        }

        let before = self.level;
        while self.level > 0 && self.nodes[HEAD].forward[self.level].is_none() {
            self.level -= 1;
        }
        if self.level != before {
            debug!("delete {key}: lowering level {before} -> {}", self.level);
        }

        self.release(target);
        self.len -= 1;
        true
    }

    /// Whether `key` is present.
    pub fn search(&self, key: i64) -> bool {
        let pred = self.descend(key, None);
        self.successor_matches(pred, key).is_some()
    }

    /// Span of the node holding `key`, or `None` if absent.
    pub fn height_of(&self, key: i64) -> Option<usize> {
        let pred = self.descend(key, None);
        self.successor_matches(pred, key).map(|idx| self.nodes[idx].span())
    }

    /// Smallest key.
    pub fn first(&self) -> Option<i64> {
        self.nodes[HEAD].forward[0].map(|idx| self.nodes[idx].key)
    }

    /// Largest key. Rides the express lanes to the end instead of walking level 0.
    pub fn last(&self) -> Option<i64> {
        let mut current = HEAD;
        for i in (0..=self.level).rev() {
            while let Some(next) = self.nodes[current].forward[i] {
                current = next;
            }
        }
        (current != HEAD).then(|| self.nodes[current].key)
    }

    /// Release every node and reset to the empty state. Options are kept.
    pub fn clear(&mut self) {
        debug!("clear: releasing {} nodes", self.len);
        self.nodes.truncate(1);
        self.nodes[HEAD].forward.fill(None);
        self.free.clear();
        self.level = 0;
        self.len = 0;
        self.size_bytes = 0;
    }

    /// Number of keys in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Highest occupied level index (0 when empty or when no node is promoted).
    pub fn level(&self) -> usize {
        self.level
    }

    /// Upper bound on any node's span.
    pub fn max_level(&self) -> usize {
        self.levels.max_level()
    }

    /// Per-level promotion probability.
    pub fn probability(&self) -> f64 {
        self.levels.probability()
    }

    /// Approximate memory held by live nodes (keys plus forward links).
    /// The header is not counted, so an empty list reports zero.
    pub fn size_bytes(&self) -> usize {
        self.size_bytes
    }

    /// Keys in ascending order. Follows level 0, which holds every node.
    pub fn iter(&self) -> LevelIter<'_> {
        LevelIter::new(self, 0)
    }

    /// The keys present on each level `0..=level()`, bottom level first.
    ///
    /// Each yielded [`LevelIter`] is lazy and `Clone`, so a level can be
    /// walked more than once. Rendering is left to the caller.
    pub fn levels(&self) -> Levels<'_> {
        Levels::new(self)
    }

    /// A seekable cursor positioned at the first key.
    pub fn cursor(&self) -> SkipListIterator<'_> {
        SkipListIterator::new(self)
    }

    /// Walk from the header down to level 0, moving forward while the next
    /// key is strictly less than `key`. Returns the level-0 predecessor.
    ///
    /// When `update` is given, `update[i]` receives the predecessor at level
    /// `i` for every `i` in `0..=level`. Entries above are left alone.
    fn descend(&self, key: i64, mut update: Option<&mut [usize]>) -> usize {
        let mut current = HEAD;
        for i in (0..=self.level).rev() {
            while let Some(next) = self.nodes[current].forward[i] {
                if self.nodes[next].key >= key {
                    break;
                }
                current = next;
            }
            if let Some(update) = update.as_deref_mut() {
                update[i] = current;
            }
        }
        current
    }

    /// The level-0 successor of `pred`, if it holds `key`.
    fn successor_matches(&self, pred: usize, key: i64) -> Option<usize> {
        self.nodes[pred].forward[0].filter(|&idx| self.nodes[idx].key == key)
    }

    fn alloc(&mut self, key: i64, span: usize) -> Result<usize> {
        let node = SkipNode::new(key, span)?;
        let size = node.size_bytes();
        let idx = match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = node;
                idx
            }
            None => {
                // Keep room for every slot on the free list so release never allocates.
                self.free.try_reserve(self.nodes.len() - self.free.len())?;
                self.nodes.try_reserve(1)?;
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };
        self.size_bytes += size;
        Ok(idx)
    }

    fn release(&mut self, idx: usize) {
        self.size_bytes -= self.nodes[idx].size_bytes();
        self.nodes[idx].release();
        self.free.push(idx);
    }
}

impl<'a> IntoIterator for &'a SkipList {
    type Item = i64;
    type IntoIter = LevelIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One line per level, bottom first:
///
/// ```text
/// Level 0: 3 7 17 19 21 26
/// Level 1: 7 19 26
/// ```
impl fmt::Display for SkipList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (level, keys) in self.levels() {
            write!(f, "Level {level}:")?;
            for key in keys {
                write!(f, " {key}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for SkipList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkipList")
            .field("len", &self.len)
            .field("level", &self.level)
            .field("max_level", &self.max_level())
            .field("keys", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

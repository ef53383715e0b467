//! Fixed-size transposition table keyed by Zobrist hash.
//!
//! Direct indexing with depth-preferred replacement: a stored entry only
//! yields its slot to one searched at least as deep, and a probe is only
//! trusted when the cached depth covers the requested one.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact,
    Lower,
    Upper,
}

#[derive(Debug, Clone, Copy)]
pub struct TableEntry {
    pub key: u64,
    pub depth: u8,
    pub score: i32,
    pub bound: Bound,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TableStats {
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
}

#[derive(Debug, Clone)]
pub struct TranspositionTable {
    entries: Vec<Option<TableEntry>>,
    stats: TableStats,
}

impl TranspositionTable {
    pub fn new_with_mb(size_mb: usize) -> Self {
        let bytes = size_mb.max(1) * 1024 * 1024;
        let entry_size = std::mem::size_of::<Option<TableEntry>>().max(1);
        let count = (bytes / entry_size).max(1);
        Self {
            entries: vec![None; count],
            stats: TableStats::default(),
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.entries.fill(None);
        self.stats = TableStats::default();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn stats(&self) -> TableStats {
        self.stats
    }

    #[inline]
    fn idx(&self, key: u64) -> usize {
        (key as usize) % self.entries.len()
    }

    /// Look up `key`, trusting the entry only when it was searched at least
    /// `depth` plies deep.
    pub fn probe(&mut self, key: u64, depth: u8) -> Option<TableEntry> {
        self.stats.probes += 1;
        let idx = self.idx(key);
        let hit = self.entries[idx].filter(|e| e.key == key && e.depth >= depth);
        if hit.is_some() {
            self.stats.hits += 1;
        }
        hit
    }

    pub fn store(&mut self, entry: TableEntry) {
        self.stats.stores += 1;
        let idx = self.idx(entry.key);
        match self.entries[idx] {
            None => self.entries[idx] = Some(entry),
            Some(existing) => {
                if entry.depth >= existing.depth {
                    self.entries[idx] = Some(entry);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Bound, TableEntry, TranspositionTable};

    #[test]
    fn store_and_probe_round_trip() {
        let mut table = TranspositionTable::new_with_mb(1);
        let entry = TableEntry {
            key: 123,
            depth: 5,
            score: 42,
            bound: Bound::Exact,
        };
        table.store(entry);
        let got = table.probe(123, 5).expect("entry should exist");
        assert_eq!(got.key, entry.key);
        assert_eq!(got.depth, entry.depth);
        assert_eq!(got.score, entry.score);
        assert_eq!(got.bound, Bound::Exact);
    }

    #[test]
    fn shallow_entries_are_not_trusted_for_deeper_probes() {
        let mut table = TranspositionTable::new_with_mb(1);
        table.store(TableEntry {
            key: 777,
            depth: 2,
            score: 10,
            bound: Bound::Exact,
        });
        assert!(table.probe(777, 4).is_none());
        assert!(table.probe(777, 2).is_some());
        assert!(table.probe(777, 1).is_some());
    }

    #[test]
    fn depth_preferred_replacement() {
        let mut table = TranspositionTable::new_with_mb(1);
        let key = 555;
        table.store(TableEntry {
            key,
            depth: 4,
            score: 1,
            bound: Bound::Upper,
        });
        table.store(TableEntry {
            key,
            depth: 1,
            score: 9,
            bound: Bound::Exact,
        });
        assert_eq!(table.probe(key, 0).expect("exists").score, 1);
        table.store(TableEntry {
            key,
            depth: 6,
            score: 3,
            bound: Bound::Lower,
        });
        let got = table.probe(key, 0).expect("exists");
        assert_eq!(got.depth, 6);
        assert_eq!(got.score, 3);
    }

    #[test]
    fn clear_resets_entries_and_stats() {
        let mut table = TranspositionTable::new_with_mb(1);
        table.store(TableEntry {
            key: 9,
            depth: 1,
            score: 0,
            bound: Bound::Exact,
        });
        table.clear();
        assert!(table.probe(9, 0).is_none());
        assert_eq!(table.stats().stores, 0);
    }
}

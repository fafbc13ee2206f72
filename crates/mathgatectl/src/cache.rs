//! Extraction cache: content hash of the raw text → extracted parameters.
//!
//! Strictly a caller-side collaborator. The pipeline's contract is identical
//! whether this cache is absent, cold, or warm; all it saves is re-running
//! the classifier and regex rules on text that was already seen.

use lru::LruCache;
use mathgate_core::ProblemParams;
use sha2::{Digest, Sha256};
use std::num::NonZeroUsize;

pub struct ExtractCache {
    entries: LruCache<String, ProblemParams>,
    hits: u64,
    misses: u64,
}

impl ExtractCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    fn key(raw: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(raw.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    pub fn lookup(&mut self, raw: &str) -> Option<ProblemParams> {
        match self.entries.get(&Self::key(raw)) {
            Some(params) => {
                self.hits += 1;
                Some(params.clone())
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    pub fn store(&mut self, raw: &str, params: ProblemParams) {
        self.entries.put(Self::key(raw), params);
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathgate_core::NumberTheoryOp;

    fn sample() -> ProblemParams {
        ProblemParams::NumberTheory {
            n: 360,
            op: NumberTheoryOp::DivisorSum,
        }
    }

    #[test]
    fn cold_lookup_misses_then_hits_after_store() {
        let mut cache = ExtractCache::new(8);
        assert_eq!(cache.lookup("divisors of 360"), None);
        cache.store("divisors of 360", sample());
        assert_eq!(cache.lookup("divisors of 360"), Some(sample()));
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);
    }

    #[test]
    fn different_text_has_a_different_key() {
        let mut cache = ExtractCache::new(8);
        cache.store("divisors of 360", sample());
        assert_eq!(cache.lookup("divisors of 361"), None);
    }

    #[test]
    fn capacity_evicts_least_recently_used() {
        let mut cache = ExtractCache::new(1);
        cache.store("a", sample());
        cache.store("b", sample());
        assert_eq!(cache.lookup("a"), None);
        assert!(cache.lookup("b").is_some());
    }
}

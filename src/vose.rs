//! Vose's variant of the alias method: O(1) sampling from a discrete
//! probability distribution after one preprocessing pass.

use std::collections::VecDeque;

use crate::error::TableError;
use rand::Rng;

/// Absolute tolerance for comparisons against 1.0, used both to validate the
/// distribution sum and to decide a working slot is exactly full. Without it,
/// floating-point noise can bounce a slot between the two worklists forever.
const TOLERANCE: f64 = 1e-9;

/// One table slot: acceptance threshold and redirect target.
///
/// Drawing slot `i` keeps `i` with probability `threshold` and otherwise
/// resolves to `alias`. A self-aliased slot with threshold 1.0 always keeps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AliasEntry {
    pub alias: usize,
    pub threshold: f64,
}

/// Alias table for a fixed discrete probability distribution.
#[derive(Debug, Clone)]
pub struct AliasTable {
    entries: Vec<AliasEntry>,
}

impl AliasTable {
    /// Construct the table from a probability distribution: non-negative
    /// weights summing to 1.0 within `1e-9`. Nothing is normalized on the
    /// caller's behalf; a bad sum is an error.
    ///
    /// # Errors
    /// * [`TableError::Empty`] if there are no weights.
    /// * [`TableError::BadWeight`] if any weight is negative or non-finite.
    /// * [`TableError::BadSum`] if the weights do not sum to 1.0.
    ///
    /// # Complexity
    /// O(n log n) time (two worklist sorts), O(n) space.
    pub fn new(dist: &[f64]) -> Result<Self, TableError> {
        let n = dist.len();
        if n == 0 {
            return Err(TableError::Empty);
        }
        let mut sum = 0.0f64;
        for (i, &w) in dist.iter().enumerate() {
            if !w.is_finite() || w < 0.0 {
                return Err(TableError::BadWeight { index: i, value: w });
            }
            sum += w;
        }
        if (sum - 1.0).abs() > TOLERANCE {
            return Err(TableError::BadSum { sum });
        }

        // A lone outcome always wins its own draw.
        if n == 1 {
            return Ok(Self {
                entries: vec![AliasEntry {
                    alias: 0,
                    threshold: 1.0,
                }],
            });
        }

        // Scale so a perfectly uniform weight lands exactly on 1.0.
        let mut entries: Vec<AliasEntry> = dist
            .iter()
            .enumerate()
            .map(|(i, &w)| AliasEntry {
                alias: i,
                threshold: w * n as f64,
            })
            .collect();

        // Slots with excess mass donate to slots with a deficit. Slots that
        // scaled to exactly 1.0 are already final and enter neither queue.
        let mut over: VecDeque<usize> = VecDeque::new();
        let mut under: VecDeque<usize> = VecDeque::new();
        for (i, e) in entries.iter().enumerate() {
            if e.threshold > 1.0 {
                over.push_back(i);
            } else if e.threshold < 1.0 {
                under.push_back(i);
            }
        }

        // Largest donors first, smallest deficits first. The sampling
        // probabilities come out right under any order; fixing the order
        // fixes which slot aliases to which, so identical inputs rebuild
        // byte-identical tables.
        over.make_contiguous()
            .sort_by(|&a, &b| entries[b].threshold.total_cmp(&entries[a].threshold));
        under
            .make_contiguous()
            .sort_by(|&a, &b| entries[a].threshold.total_cmp(&entries[b].threshold));

        while let Some(u) = under.pop_front() {
            let o = match over.pop_front() {
                Some(o) => o,
                None => {
                    // Rounding starved the donor queue; whatever deficit is
                    // left here is below tolerance.
                    entries[u].threshold = 1.0;
                    continue;
                }
            };

            // Cover u's deficit out of o's excess; u is final from here on.
            let deficit = 1.0 - entries[u].threshold;
            entries[u].alias = o;
            entries[o].threshold -= deficit;

            if (entries[o].threshold - 1.0).abs() <= TOLERANCE {
                entries[o].threshold = 1.0;
            } else if entries[o].threshold > 1.0 {
                over.push_front(o);
            } else {
                under.push_back(o);
            }
        }

        // Anything still queued as a donor holds only rounding residue.
        for o in over {
            entries[o].threshold = 1.0;
        }

        Ok(Self { entries })
    }

    /// Draw one index in O(1): a uniform slot, then a uniform acceptance test.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let i = rng.random_range(0..self.entries.len());
        let q: f64 = rng.random();
        let e = self.entries[i];
        if q < e.threshold { i } else { e.alias }
    }

    /// Draw `n` independent indices, in draw order. Repetition is expected.
    ///
    /// # Errors
    /// [`TableError::BadSampleCount`] if `n` is zero.
    pub fn sample_batch<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        n: usize,
    ) -> Result<Vec<usize>, TableError> {
        if n == 0 {
            return Err(TableError::BadSampleCount { n });
        }
        Ok((0..n).map(|_| self.sample(rng)).collect())
    }

    /// The finalized slots, indexed like the input distribution.
    pub fn entries(&self) -> &[AliasEntry] {
        &self.entries
    }

    /// Draw `draws` samples, returning counts per index (useful for checks).
    #[cfg(test)]
    pub(crate) fn sample_counts<R: Rng + ?Sized>(&self, rng: &mut R, draws: usize) -> Vec<usize> {
        let mut counts = vec![0usize; self.entries.len()];
        for _ in 0..draws {
            counts[self.sample(rng)] += 1;
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

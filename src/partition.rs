/*
 * Copyright (c) Radzivon Bartoshyk. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::SharpenError;
use std::ops::Range;

/// Half-open range `[start, start + size)` over the flat pixel buffer owned by one worker.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct WorkUnit {
    pub start: usize,
    pub size: usize,
}

impl WorkUnit {
    pub fn new(start: usize, size: usize) -> WorkUnit {
        WorkUnit { start, size }
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.size
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

/// What happens to the `total % workers` trailing pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum RemainderPolicy {
    /// Last worker takes `base + total % workers` pixels, whole image is covered.
    #[default]
    ExtendLast,
    /// Every worker takes exactly `total / workers` pixels, trailing pixels
    /// stay as they were in the destination.
    Drop,
}

/// Splits `[0, total)` into `workers` contiguous equal shares.
///
/// Worker `k` receives `[k * base, k * base + base)` with `base = total / workers`.
/// The remainder is handled according to `policy`. Units are returned in
/// index order and verified to be contiguous and disjoint before return, so
/// callers may hand each unit its own mutable destination slice.
pub fn partition(
    total: usize,
    workers: usize,
    policy: RemainderPolicy,
) -> Result<Vec<WorkUnit>, SharpenError> {
    if total == 0 || workers == 0 {
        return Err(SharpenError::InvalidDimensions);
    }
    let base = total / workers;
    let remainder = total % workers;

    let mut units: Vec<WorkUnit> = (0..workers)
        .map(|k| WorkUnit::new(k * base, base))
        .collect();

    if policy == RemainderPolicy::ExtendLast {
        if let Some(last) = units.last_mut() {
            last.size += remainder;
        }
    }

    check_disjoint(&units, total)?;
    Ok(units)
}

/// Number of pixels the units will write.
pub fn covered_len(units: &[WorkUnit]) -> usize {
    units.iter().map(|unit| unit.size).sum()
}

fn check_disjoint(units: &[WorkUnit], total: usize) -> Result<(), SharpenError> {
    let mut next_start = 0usize;
    for unit in units {
        if unit.start != next_start || unit.end() > total {
            return Err(SharpenError::IndexOutOfBounds);
        }
        next_start = unit.end();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coverage(units: &[WorkUnit], total: usize) -> Vec<u32> {
        let mut hits = vec![0u32; total];
        for unit in units {
            for i in unit.range() {
                hits[i] += 1;
            }
        }
        hits
    }

    #[test]
    fn drop_policy_covers_even_share_only() {
        for total in [1usize, 7, 100, 101] {
            for workers in [1usize, 3, 4] {
                let units = partition(total, workers, RemainderPolicy::Drop).unwrap();
                assert_eq!(units.len(), workers);
                let covered = workers * (total / workers);
                let hits = coverage(&units, total);
                assert!(hits[..covered].iter().all(|&h| h == 1), "{total}/{workers}");
                assert!(hits[covered..].iter().all(|&h| h == 0), "{total}/{workers}");
                assert_eq!(covered_len(&units), covered);
            }
        }
    }

    #[test]
    fn extend_last_covers_everything_once() {
        for total in [1usize, 7, 100, 101] {
            for workers in [1usize, 3, 4] {
                let units = partition(total, workers, RemainderPolicy::ExtendLast).unwrap();
                let hits = coverage(&units, total);
                assert!(hits.iter().all(|&h| h == 1), "{total}/{workers}");
                let last = units.last().unwrap();
                assert_eq!(last.size, total / workers + total % workers);
            }
        }
    }

    #[test]
    fn more_workers_than_pixels() {
        let units = partition(2, 5, RemainderPolicy::ExtendLast).unwrap();
        assert_eq!(units.iter().filter(|u| u.is_empty()).count(), 4);
        assert_eq!(units[4], WorkUnit::new(0, 2));

        let dropped = partition(2, 5, RemainderPolicy::Drop).unwrap();
        assert_eq!(covered_len(&dropped), 0);
    }

    #[test]
    fn rejects_empty_inputs() {
        assert_eq!(
            partition(0, 4, RemainderPolicy::Drop),
            Err(SharpenError::InvalidDimensions)
        );
        assert_eq!(
            partition(16, 0, RemainderPolicy::ExtendLast),
            Err(SharpenError::InvalidDimensions)
        );
    }

    #[test]
    fn check_disjoint_rejects_overlap_and_gap() {
        let overlap = [WorkUnit::new(0, 4), WorkUnit::new(3, 4)];
        assert_eq!(
            check_disjoint(&overlap, 8),
            Err(SharpenError::IndexOutOfBounds)
        );
        let gap = [WorkUnit::new(0, 2), WorkUnit::new(3, 2)];
        assert_eq!(check_disjoint(&gap, 8), Err(SharpenError::IndexOutOfBounds));
        let overflow = [WorkUnit::new(0, 9)];
        assert_eq!(
            check_disjoint(&overflow, 8),
            Err(SharpenError::IndexOutOfBounds)
        );
    }
}

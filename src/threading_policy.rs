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
use crate::{ImageSize, SharpenError};
use rayon::ThreadPool;

/// How many workers filter one image.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum ThreadingPolicy {
    /// One worker on the calling thread
    Single,
    /// Exactly this many workers, zero is rejected
    Fixed(usize),
    /// One worker per 256x256 block of pixels, at most 16
    Adaptive,
}

impl Default for ThreadingPolicy {
    fn default() -> Self {
        ThreadingPolicy::Adaptive
    }
}

impl ThreadingPolicy {
    pub fn get_threads_count(&self, for_size: ImageSize) -> usize {
        match self {
            ThreadingPolicy::Single => 1,
            ThreadingPolicy::Fixed(thread_count) => *thread_count,
            ThreadingPolicy::Adaptive => {
                let box_size = 256 * 256;
                let new_box_size = for_size.height.saturating_mul(for_size.width);
                (new_box_size / box_size).clamp(1, 16)
            }
        }
    }

    /// Builds a pool to run `workers` units, `None` when one thread is enough.
    ///
    /// The pool never has more threads than the machine can run at once,
    /// extra units queue up as tasks on the same threads.
    pub fn get_pool(&self, workers: usize) -> Result<Option<ThreadPool>, SharpenError> {
        if workers == 0 {
            return Err(SharpenError::InvalidDimensions);
        }
        let threads = pool_threads(workers);
        if *self == ThreadingPolicy::Single || threads == 1 {
            return Ok(None);
        }
        let shared_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|index| format!("pic-sharpen-{index}"))
            .build()
            .map_err(|e| SharpenError::WorkerFailure(e.to_string()))?;
        Ok(Some(shared_pool))
    }
}

/// OS threads backing `workers` units.
pub(crate) fn pool_threads(workers: usize) -> usize {
    let available = std::thread::available_parallelism().map_or(1, |n| n.get());
    workers.min(available).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threads_count() {
        let small = ImageSize::new(16, 16);
        let large = ImageSize::new(2048, 2048);
        assert_eq!(ThreadingPolicy::Single.get_threads_count(large), 1);
        assert_eq!(ThreadingPolicy::Fixed(7).get_threads_count(small), 7);
        assert_eq!(ThreadingPolicy::Fixed(0).get_threads_count(small), 0);
        assert_eq!(ThreadingPolicy::Adaptive.get_threads_count(small), 1);
        assert_eq!(ThreadingPolicy::Adaptive.get_threads_count(large), 16);
        assert_eq!(
            ThreadingPolicy::Adaptive.get_threads_count(ImageSize::new(512, 512)),
            4
        );
    }

    #[test]
    fn pool_for_workers() {
        assert!(ThreadingPolicy::Single.get_pool(1).unwrap().is_none());
        assert!(ThreadingPolicy::Fixed(1).get_pool(1).unwrap().is_none());
        match ThreadingPolicy::Fixed(3).get_pool(3).unwrap() {
            Some(pool) => assert_eq!(pool.current_num_threads(), pool_threads(3)),
            None => assert_eq!(pool_threads(3), 1),
        }
        assert_eq!(
            ThreadingPolicy::Fixed(0).get_pool(0).unwrap_err(),
            SharpenError::InvalidDimensions
        );
    }

    #[test]
    fn pool_threads_capped_by_hardware() {
        let available = std::thread::available_parallelism().map_or(1, |n| n.get());
        assert_eq!(pool_threads(1), 1);
        assert_eq!(pool_threads(4096), available);
        assert!(pool_threads(3) <= 3);
        if let Some(pool) = ThreadingPolicy::Fixed(4096).get_pool(4096).unwrap() {
            assert_eq!(pool.current_num_threads(), available);
        }
    }
}

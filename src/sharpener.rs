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
use crate::dispatch_group::convolve_dispatch_u8;
use crate::image_store::{ImageStore, ImageStoreMut};
use crate::partition::{RemainderPolicy, WorkUnit, covered_len, partition};
use crate::threading_policy::ThreadingPolicy;
use crate::{ImageSize, Kernel, SharpenBufferMismatch, SharpenError};
use log::debug;
use std::time::{Duration, Instant};

/// Outcome of one filtering run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharpenReport {
    /// Wall-clock time of the fork-join phase
    pub elapsed: Duration,
    pub work_units: Vec<WorkUnit>,
    pub remainder_policy: RemainderPolicy,
}

impl SharpenReport {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub fn workers(&self) -> usize {
        self.work_units.len()
    }

    /// Pixels written, smaller than the image only with [`RemainderPolicy::Drop`].
    pub fn covered(&self) -> usize {
        covered_len(&self.work_units)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Parallel 3x3 convolution over RGB images
pub struct Sharpener {
    pub(crate) kernel: Kernel,
    pub(crate) threading_policy: ThreadingPolicy,
    pub(crate) remainder_policy: RemainderPolicy,
}

pub trait Sharpening {
    fn set_threading_policy(&mut self, threading_policy: ThreadingPolicy);

    /// Filters `store` into `into`, both must have the same geometry.
    ///
    /// When an error is returned `into` holds no usable image.
    fn sharpen_rgb(
        &self,
        store: &ImageStore,
        into: &mut ImageStoreMut,
    ) -> Result<SharpenReport, SharpenError>;
}

impl Default for Sharpener {
    fn default() -> Self {
        Sharpener::new(Kernel::SHARPEN)
    }
}

impl Sharpener {
    /// Creates new Sharpener instance with corresponding kernel
    pub fn new(kernel: Kernel) -> Self {
        Sharpener {
            kernel,
            threading_policy: ThreadingPolicy::Single,
            remainder_policy: RemainderPolicy::default(),
        }
    }

    pub fn set_kernel(&mut self, kernel: Kernel) {
        self.kernel = kernel;
    }

    pub fn set_remainder_policy(&mut self, remainder_policy: RemainderPolicy) {
        self.remainder_policy = remainder_policy;
    }

    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    pub fn threading_policy(&self) -> ThreadingPolicy {
        self.threading_policy
    }

    pub fn remainder_policy(&self) -> RemainderPolicy {
        self.remainder_policy
    }

    /// Work units a run over an image of `size` would use.
    pub fn plan(&self, size: ImageSize) -> Result<Vec<WorkUnit>, SharpenError> {
        let total = size.pixel_count()?;
        let workers = self.threading_policy.get_threads_count(size);
        partition(total, workers, self.remainder_policy)
    }

    /// Filters into a freshly allocated image, returned only on success.
    pub fn sharpen(
        &self,
        store: &ImageStore,
    ) -> Result<(ImageStoreMut<'static>, SharpenReport), SharpenError> {
        store.validate()?;
        let mut target = ImageStoreMut::try_alloc(store.width, store.height)?;
        let report = self.sharpen_rgb(store, &mut target)?;
        Ok((target, report))
    }
}

impl Sharpening for Sharpener {
    fn set_threading_policy(&mut self, threading_policy: ThreadingPolicy) {
        self.threading_policy = threading_policy;
    }

    fn sharpen_rgb(
        &self,
        store: &ImageStore,
        into: &mut ImageStoreMut,
    ) -> Result<SharpenReport, SharpenError> {
        let total = store.validate()?;
        into.validate()?;
        if into.size() != store.size() {
            return Err(SharpenError::BufferSizeMismatch(SharpenBufferMismatch {
                expected: total,
                width: store.width,
                height: store.height,
                slice_len: into.as_pixels().len(),
            }));
        }

        let size = store.size();
        let work_units = self.plan(size)?;
        debug!(
            "Sharpening {}x{} with {} workers, {} pixels per worker",
            size.width,
            size.height,
            work_units.len(),
            total / work_units.len()
        );

        let start_time = Instant::now();
        let pool = self.threading_policy.get_pool(work_units.len())?;
        convolve_dispatch_u8(
            store.as_pixels(),
            size,
            &self.kernel,
            &work_units,
            into.as_pixels_mut(),
            &pool,
        )?;
        let elapsed = start_time.elapsed();

        debug!("Fork-join finished in {:.2?}", elapsed);

        Ok(SharpenReport {
            elapsed,
            work_units,
            remainder_policy: self.remainder_policy,
        })
    }
}

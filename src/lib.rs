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
#![deny(deprecated)]
#![deny(unreachable_code)]
#![forbid(unsafe_code)]
//! Parallel 3x3 convolution of 8-bit RGB images.
//!
//! The pixel buffer is split into contiguous work units, one per worker;
//! every worker reads the shared source and writes only its own slice of the
//! destination. Neighbors outside the image wrap to the opposite edge.
//!
//! ```
//! use pic_sharpen::{ImageStore, Rgb8, Sharpener, Sharpening, ThreadingPolicy};
//!
//! let store = ImageStore::new(vec![Rgb8::dup(128); 16], 4, 4).unwrap();
//! let mut sharpener = Sharpener::default();
//! sharpener.set_threading_policy(ThreadingPolicy::Fixed(4));
//! let (sharpened, report) = sharpener.sharpen(&store).unwrap();
//! assert_eq!(sharpened.pixel(1, 1), Some(Rgb8::dup(128)));
//! assert_eq!(report.workers(), 4);
//! ```

mod color_group;
mod convolve_3x3;
mod dispatch_group;
mod image_size;
mod image_store;
mod kernel;
mod partition;
mod sharpen_error;
mod sharpener;
mod threading_policy;

pub use color_group::{ColorGroup, Rgb8};
pub use convolve_3x3::{accumulate_pixel, convolve_work_unit, wrap_coordinate};
pub use image_size::ImageSize;
pub use image_store::{ImageStore, ImageStoreMut};
pub use kernel::Kernel;
pub use partition::{RemainderPolicy, WorkUnit, covered_len, partition};
pub use sharpen_error::{SharpenBufferMismatch, SharpenError};
pub use sharpener::{SharpenReport, Sharpener, Sharpening};
pub use threading_policy::ThreadingPolicy;

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
use crate::color_group::{ColorGroup, Rgb8};
use crate::{ImageSize, Kernel, SharpenError, WorkUnit};
use num_traits::AsPrimitive;

/// Moves `coordinate` by `offset` on a ring of length `extent`.
///
/// Out of range coordinates wrap to the opposite edge, `coordinate` must be
/// below `extent` and `offset` in `-1..=1`.
#[inline(always)]
pub fn wrap_coordinate(coordinate: usize, offset: isize, extent: usize) -> usize {
    (coordinate + extent).wrapping_add_signed(offset) % extent
}

#[inline(always)]
fn accumulate_unchecked(
    source: &[Rgb8],
    size: ImageSize,
    kernel: &Kernel,
    index: usize,
) -> ColorGroup<i32> {
    let (x, y) = size.coordinate(index);
    let mut sums = ColorGroup::<i32>::dup(0);

    for dy in -1isize..=1 {
        let ny = wrap_coordinate(y, dy, size.height);
        let row = &source[ny * size.width..(ny + 1) * size.width];
        for dx in -1isize..=1 {
            let nx = wrap_coordinate(x, dx, size.width);
            let weight: i32 = kernel.weight(dx, dy).as_();
            sums += row[nx].widen::<i32>() * weight;
        }
    }

    sums
}

/// Unclamped per channel weighted sum around pixel `index`.
pub fn accumulate_pixel(
    source: &[Rgb8],
    size: ImageSize,
    kernel: &Kernel,
    index: usize,
) -> Result<ColorGroup<i32>, SharpenError> {
    let total = size.pixel_count()?;
    if source.len() != total || index >= total {
        return Err(SharpenError::IndexOutOfBounds);
    }
    Ok(accumulate_unchecked(source, size, kernel, index))
}

/// Filters every pixel of `unit` into `destination`.
///
/// `destination` is the unit's own slice: `destination[j]` receives pixel
/// `unit.start + j`. The source is only read, so any number of calls over
/// disjoint units may run at once.
pub fn convolve_work_unit(
    source: &[Rgb8],
    size: ImageSize,
    kernel: &Kernel,
    unit: WorkUnit,
    destination: &mut [Rgb8],
) -> Result<(), SharpenError> {
    let total = size.pixel_count()?;
    let fits = unit
        .start
        .checked_add(unit.size)
        .is_some_and(|end| end <= total);
    if source.len() != total || !fits || destination.len() != unit.size {
        return Err(SharpenError::IndexOutOfBounds);
    }

    for (dst, index) in destination.iter_mut().zip(unit.range()) {
        *dst = accumulate_unchecked(source, size, kernel, index).saturate_narrow();
    }

    Ok(())
}

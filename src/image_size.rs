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

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageSize {
    pub width: usize,
    pub height: usize,
}

impl ImageSize {
    pub fn new(width: usize, height: usize) -> ImageSize {
        ImageSize { width, height }
    }

    /// Number of pixels, rejecting empty or overflowing geometry
    pub fn pixel_count(&self) -> Result<usize, SharpenError> {
        if self.width == 0 || self.height == 0 {
            return Err(SharpenError::InvalidDimensions);
        }
        self.width
            .checked_mul(self.height)
            .ok_or(SharpenError::InvalidDimensions)
    }

    /// Row-major index to `(x, y)`.
    #[inline(always)]
    pub fn coordinate(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width % self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_count_rejects_zero() {
        assert_eq!(
            ImageSize::new(0, 5).pixel_count(),
            Err(SharpenError::InvalidDimensions)
        );
        assert_eq!(
            ImageSize::new(5, 0).pixel_count(),
            Err(SharpenError::InvalidDimensions)
        );
        assert_eq!(ImageSize::new(4, 3).pixel_count(), Ok(12));
        assert_eq!(
            ImageSize::new(usize::MAX, 2).pixel_count(),
            Err(SharpenError::InvalidDimensions)
        );
    }

    #[test]
    fn coordinate_is_row_major() {
        let size = ImageSize::new(4, 3);
        assert_eq!(size.coordinate(0), (0, 0));
        assert_eq!(size.coordinate(3), (3, 0));
        assert_eq!(size.coordinate(4), (0, 1));
        assert_eq!(size.coordinate(11), (3, 2));
    }
}

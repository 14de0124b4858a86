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
/// Fixed size 3x3 convolution kernel, rows top to bottom.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Kernel {
    pub(crate) weights: [[i16; 3]; 3],
}

impl Kernel {
    /// Laplacian sharpening: center 9, neighbors -1, weights sum to 1.
    pub const SHARPEN: Kernel = Kernel::new([[-1, -1, -1], [-1, 9, -1], [-1, -1, -1]]);
    /// Plain 8-connectivity Laplacian edge response, weights sum to 0.
    pub const LAPLACIAN: Kernel = Kernel::new([[-1, -1, -1], [-1, 8, -1], [-1, -1, -1]]);
    pub const IDENTITY: Kernel = Kernel::new([[0, 0, 0], [0, 1, 0], [0, 0, 0]]);

    pub const fn new(weights: [[i16; 3]; 3]) -> Kernel {
        Kernel { weights }
    }

    /// Weight applied to the neighbor at offset `(dx, dy)`, both in `-1..=1`.
    #[inline(always)]
    pub fn weight(&self, dx: isize, dy: isize) -> i16 {
        self.weights[(dy + 1) as usize][(dx + 1) as usize]
    }

    pub fn weights(&self) -> &[[i16; 3]; 3] {
        &self.weights
    }

    pub fn sum(&self) -> i32 {
        self.weights.iter().flatten().map(|&w| w as i32).sum()
    }
}

impl Default for Kernel {
    fn default() -> Self {
        Kernel::SHARPEN
    }
}

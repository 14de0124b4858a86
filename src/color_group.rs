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
use num_traits::AsPrimitive;
use std::ops::{AddAssign, Mul};

/// Three channel group, used both for stored pixels and for wide accumulators.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ColorGroup<J: Copy> {
    pub r: J,
    pub g: J,
    pub b: J,
}

/// 8-bit truecolor pixel
pub type Rgb8 = ColorGroup<u8>;

impl<J> ColorGroup<J>
where
    J: Copy,
{
    #[inline(always)]
    pub const fn new(r: J, g: J, b: J) -> ColorGroup<J> {
        ColorGroup { r, g, b }
    }

    #[inline(always)]
    pub const fn dup(v: J) -> ColorGroup<J> {
        ColorGroup { r: v, g: v, b: v }
    }
}

impl<J> ColorGroup<J>
where
    J: Copy + 'static,
{
    /// Widens every channel into the accumulator type.
    #[inline(always)]
    pub fn widen<V>(&self) -> ColorGroup<V>
    where
        V: Copy + 'static,
        J: AsPrimitive<V>,
    {
        ColorGroup::new(self.r.as_(), self.g.as_(), self.b.as_())
    }
}

impl<J> Mul<J> for ColorGroup<J>
where
    J: Copy + Mul<Output = J>,
{
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: J) -> Self::Output {
        ColorGroup::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

impl<J> AddAssign for ColorGroup<J>
where
    J: Copy + AddAssign,
{
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        self.r += rhs.r;
        self.g += rhs.g;
        self.b += rhs.b;
    }
}

impl ColorGroup<i32> {
    /// Clamps each channel independently into `[0, 255]`.
    #[inline(always)]
    pub fn saturate_narrow(&self) -> Rgb8 {
        ColorGroup::new(
            num_traits::clamp(self.r, 0, 255) as u8,
            num_traits::clamp(self.g, 0, 255) as u8,
            num_traits::clamp(self.b, 0, 255) as u8,
        )
    }
}

impl From<[u8; 3]> for Rgb8 {
    #[inline(always)]
    fn from(value: [u8; 3]) -> Self {
        ColorGroup::new(value[0], value[1], value[2])
    }
}

impl From<Rgb8> for [u8; 3] {
    #[inline(always)]
    fn from(value: Rgb8) -> Self {
        [value.r, value.g, value.b]
    }
}

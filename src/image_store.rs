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
use crate::color_group::Rgb8;
use crate::sharpen_error::try_vec;
use crate::{ImageSize, SharpenBufferMismatch, SharpenError};
use std::borrow::Cow;
use std::fmt::Debug;

/// Read-only source image, row-major RGB pixels.
///
/// `width * height` always equals the number of stored pixels once the
/// store passed [`ImageStore::validate`], which every constructor calls.
#[derive(Debug, Clone)]
pub struct ImageStore<'a> {
    pub(crate) buffer: Cow<'a, [Rgb8]>,
    pub width: usize,
    pub height: usize,
}

/// Destination image, written once per pixel by the worker owning that index.
#[derive(Debug)]
pub struct ImageStoreMut<'a> {
    pub(crate) buffer: BufferStore<'a, Rgb8>,
    pub width: usize,
    pub height: usize,
}

#[derive(Debug)]
pub(crate) enum BufferStore<'a, T: Copy + Debug> {
    Borrowed(&'a mut [T]),
    Owned(Vec<T>),
}

impl<T: Copy + Debug> BufferStore<'_, T> {
    pub(crate) fn borrow(&self) -> &[T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    pub(crate) fn borrow_mut(&mut self) -> &mut [T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }
}

fn check_buffer(width: usize, height: usize, slice_len: usize) -> Result<usize, SharpenError> {
    let expected = ImageSize::new(width, height).pixel_count()?;
    if expected != slice_len {
        return Err(SharpenError::BufferSizeMismatch(SharpenBufferMismatch {
            expected,
            width,
            height,
            slice_len,
        }));
    }
    Ok(expected)
}

fn pack_pixels(bytes: &[u8], width: usize, height: usize) -> Result<Vec<Rgb8>, SharpenError> {
    let expected = ImageSize::new(width, height).pixel_count()?;
    if bytes.len() % 3 != 0 || bytes.len() / 3 != expected {
        return Err(SharpenError::BufferSizeMismatch(SharpenBufferMismatch {
            expected,
            width,
            height,
            slice_len: bytes.len() / 3,
        }));
    }
    Ok(bytes
        .chunks_exact(3)
        .map(|px| Rgb8::new(px[0], px[1], px[2]))
        .collect())
}

fn unpack_pixels(pixels: &[Rgb8]) -> Vec<u8> {
    pixels.iter().flat_map(|px| [px.r, px.g, px.b]).collect()
}

impl ImageStore<'static> {
    pub fn new(pixels: Vec<Rgb8>, width: usize, height: usize) -> Result<Self, SharpenError> {
        check_buffer(width, height, pixels.len())?;
        Ok(ImageStore {
            buffer: Cow::Owned(pixels),
            width,
            height,
        })
    }

    /// Builds a store from packed `RGBRGB...` bytes.
    pub fn from_bytes(bytes: &[u8], width: usize, height: usize) -> Result<Self, SharpenError> {
        let pixels = pack_pixels(bytes, width, height)?;
        Ok(ImageStore {
            buffer: Cow::Owned(pixels),
            width,
            height,
        })
    }
}

impl<'a> ImageStore<'a> {
    pub fn from_slice(
        pixels: &'a [Rgb8],
        width: usize,
        height: usize,
    ) -> Result<ImageStore<'a>, SharpenError> {
        check_buffer(width, height, pixels.len())?;
        Ok(ImageStore {
            buffer: Cow::Borrowed(pixels),
            width,
            height,
        })
    }

    /// Checks `width * height == len`, returns pixel count.
    pub fn validate(&self) -> Result<usize, SharpenError> {
        check_buffer(self.width, self.height, self.buffer.len())
    }

    pub fn size(&self) -> ImageSize {
        ImageSize::new(self.width, self.height)
    }

    pub fn as_pixels(&self) -> &[Rgb8] {
        self.buffer.as_ref()
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.buffer.get(y * self.width + x).copied()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        unpack_pixels(self.as_pixels())
    }
}

impl ImageStoreMut<'static> {
    /// Allocates a black destination image.
    ///
    /// Geometry is not checked here: a zero or overflowing size gives an empty
    /// store that [`ImageStoreMut::validate`] rejects. Use
    /// [`ImageStoreMut::try_alloc`] to fail up front.
    pub fn alloc(width: usize, height: usize) -> Self {
        let count = ImageSize::new(width, height).pixel_count().unwrap_or(0);
        ImageStoreMut {
            buffer: BufferStore::Owned(vec![Rgb8::default(); count]),
            width,
            height,
        }
    }

    /// Same as [`ImageStoreMut::alloc`] but reports allocation failure instead of aborting.
    pub fn try_alloc(width: usize, height: usize) -> Result<Self, SharpenError> {
        let count = ImageSize::new(width, height).pixel_count()?;
        let vc = try_vec![Rgb8::default(); count];
        Ok(ImageStoreMut {
            buffer: BufferStore::Owned(vc),
            width,
            height,
        })
    }
}

impl<'a> ImageStoreMut<'a> {
    pub fn from_slice(
        pixels: &'a mut [Rgb8],
        width: usize,
        height: usize,
    ) -> Result<ImageStoreMut<'a>, SharpenError> {
        check_buffer(width, height, pixels.len())?;
        Ok(ImageStoreMut {
            buffer: BufferStore::Borrowed(pixels),
            width,
            height,
        })
    }

    pub fn validate(&self) -> Result<usize, SharpenError> {
        check_buffer(self.width, self.height, self.buffer.borrow().len())
    }

    pub fn size(&self) -> ImageSize {
        ImageSize::new(self.width, self.height)
    }

    pub fn as_pixels(&self) -> &[Rgb8] {
        self.buffer.borrow()
    }

    pub(crate) fn as_pixels_mut(&mut self) -> &mut [Rgb8] {
        self.buffer.borrow_mut()
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.as_pixels().get(y * self.width + x).copied()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        unpack_pixels(self.as_pixels())
    }

    /// Read-only view, usable as the source of another pass.
    pub fn to_immutable(&self) -> ImageStore<'_> {
        ImageStore {
            buffer: Cow::Borrowed(self.as_pixels()),
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_buffer() {
        let pixels = vec![Rgb8::default(); 5];
        match ImageStore::from_slice(&pixels, 2, 3) {
            Err(SharpenError::BufferSizeMismatch(mismatch)) => {
                assert_eq!(mismatch.expected, 6);
                assert_eq!(mismatch.slice_len, 5);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(
            ImageStore::new(vec![], 0, 4).unwrap_err(),
            SharpenError::InvalidDimensions
        );
        assert_eq!(
            ImageStoreMut::try_alloc(4, 0).unwrap_err(),
            SharpenError::InvalidDimensions
        );
    }

    #[test]
    fn unchecked_alloc_never_panics() {
        assert_eq!(ImageStoreMut::alloc(3, 2).validate(), Ok(6));
        assert_eq!(
            ImageStoreMut::alloc(usize::MAX, 2).validate(),
            Err(SharpenError::InvalidDimensions)
        );
        assert_eq!(
            ImageStoreMut::alloc(0, 5).validate(),
            Err(SharpenError::InvalidDimensions)
        );
        assert_eq!(
            ImageStoreMut::try_alloc(usize::MAX, 2).unwrap_err(),
            SharpenError::InvalidDimensions
        );
    }

    #[test]
    fn bytes_round_trip() {
        let bytes: Vec<u8> = (0..18).collect();
        let store = ImageStore::from_bytes(&bytes, 3, 2).unwrap();
        assert_eq!(store.pixel(1, 0), Some(Rgb8::new(3, 4, 5)));
        assert_eq!(store.pixel(0, 1), Some(Rgb8::new(9, 10, 11)));
        assert_eq!(store.pixel(3, 0), None);
        assert_eq!(store.to_bytes(), bytes);
    }

    #[test]
    fn from_bytes_rejects_partial_pixel() {
        let bytes = vec![0u8; 13];
        assert!(matches!(
            ImageStore::from_bytes(&bytes, 2, 2),
            Err(SharpenError::BufferSizeMismatch(_))
        ));
    }

    #[test]
    fn borrowed_destination_writes_through() {
        let mut pixels = vec![Rgb8::default(); 4];
        {
            let mut store = ImageStoreMut::from_slice(&mut pixels, 2, 2).unwrap();
            store.as_pixels_mut()[3] = Rgb8::dup(7);
            assert_eq!(store.to_immutable().pixel(1, 1), Some(Rgb8::dup(7)));
        }
        assert_eq!(pixels[3], Rgb8::dup(7));
    }
}

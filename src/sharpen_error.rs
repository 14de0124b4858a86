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
use std::error::Error;
use std::fmt::Display;

/// Buffer mismatch error description
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SharpenBufferMismatch {
    pub expected: usize,
    pub width: usize,
    pub height: usize,
    pub slice_len: usize,
}

/// Error enumeration type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SharpenError {
    /// Zero width, zero height or zero worker count
    InvalidDimensions,
    BufferSizeMismatch(SharpenBufferMismatch),
    /// Work unit or buffers disagree with the image geometry inside the evaluator
    IndexOutOfBounds,
    /// Pool could not be built or a worker task panicked
    WorkerFailure(String),
    OutOfMemory(usize),
}

impl SharpenError {
    /// Returns error as int code
    #[inline]
    pub fn code(&self) -> usize {
        match self {
            SharpenError::InvalidDimensions => 1,
            SharpenError::BufferSizeMismatch(_) => 2,
            SharpenError::IndexOutOfBounds => 3,
            SharpenError::WorkerFailure(_) => 4,
            SharpenError::OutOfMemory(_) => 5,
        }
    }
}

impl Display for SharpenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SharpenError::InvalidDimensions => {
                f.write_str("Image dimensions and worker count must be greater than 0")
            }
            SharpenError::BufferSizeMismatch(buffer_mismatch) => f.write_fmt(format_args!(
                "Image buffer len expected to be {} [w({})*h({})] pixels but received {}",
                buffer_mismatch.expected,
                buffer_mismatch.width,
                buffer_mismatch.height,
                buffer_mismatch.slice_len,
            )),
            SharpenError::IndexOutOfBounds => {
                f.write_str("Work unit does not fit into the image buffers")
            }
            SharpenError::WorkerFailure(reason) => {
                f.write_fmt(format_args!("Worker failed: {reason}"))
            }
            SharpenError::OutOfMemory(capacity) => f.write_fmt(format_args!(
                "There is no enough memory to allocate {capacity} pixels"
            )),
        }
    }
}

impl Error for SharpenError {}

macro_rules! try_vec {
    () => {
        Vec::new()
    };
    ($elem:expr; $n:expr) => {{
        let mut v = Vec::new();
        v.try_reserve_exact($n)
            .map_err(|_| crate::sharpen_error::SharpenError::OutOfMemory($n))?;
        v.resize($n, $elem);
        v
    }};
}

pub(crate) use try_vec;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_are_distinct() {
        let errors = [
            SharpenError::InvalidDimensions,
            SharpenError::BufferSizeMismatch(SharpenBufferMismatch {
                expected: 4,
                width: 2,
                height: 2,
                slice_len: 3,
            }),
            SharpenError::IndexOutOfBounds,
            SharpenError::WorkerFailure("boom".to_string()),
            SharpenError::OutOfMemory(16),
        ];
        let mut codes: Vec<usize> = errors.iter().map(|e| e.code()).collect();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn buffer_mismatch_message() {
        let error = SharpenError::BufferSizeMismatch(SharpenBufferMismatch {
            expected: 6,
            width: 3,
            height: 2,
            slice_len: 5,
        });
        assert_eq!(
            error.to_string(),
            "Image buffer len expected to be 6 [w(3)*h(2)] pixels but received 5"
        );
    }
}

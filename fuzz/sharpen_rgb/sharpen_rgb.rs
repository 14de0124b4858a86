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

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pic_sharpen::{
    ImageStore, Kernel, RemainderPolicy, Rgb8, SharpenError, Sharpener, Sharpening,
    ThreadingPolicy,
};

#[derive(Clone, Debug, Arbitrary)]
pub struct SrcImage {
    pub width: u8,
    pub height: u8,
    pub workers: u8,
    pub seed: u32,
    pub drop_remainder: bool,
    pub center: i8,
}

fuzz_target!(|data: SrcImage| {
    sharpen_rgb(
        data.width as usize,
        data.height as usize,
        data.workers as usize,
        data.seed,
        data.drop_remainder,
        data.center as i16,
    )
});

fn sharpen_rgb(
    width: usize,
    height: usize,
    workers: usize,
    seed: u32,
    drop_remainder: bool,
    center: i16,
) {
    let mut state = seed | 1;
    let pixels: Vec<Rgb8> = (0..width * height)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let [r, g, b, _] = state.to_le_bytes();
            Rgb8::new(r, g, b)
        })
        .collect();

    let store = match ImageStore::new(pixels, width, height) {
        Ok(store) => store,
        Err(SharpenError::InvalidDimensions) => {
            assert!(width == 0 || height == 0);
            return;
        }
        Err(e) => panic!("unexpected {e}"),
    };

    let kernel = Kernel::new([[-1, -1, -1], [-1, center, -1], [-1, -1, -1]]);
    let policy = if drop_remainder {
        RemainderPolicy::Drop
    } else {
        RemainderPolicy::ExtendLast
    };

    let mut parallel = Sharpener::new(kernel);
    parallel.set_remainder_policy(policy);
    parallel.set_threading_policy(ThreadingPolicy::Fixed(workers));
    let (target, report) = match parallel.sharpen(&store) {
        Ok(result) => result,
        Err(SharpenError::InvalidDimensions) => {
            assert_eq!(workers, 0);
            return;
        }
        Err(e) => panic!("unexpected {e}"),
    };

    let reference = Sharpener::new(kernel);
    let (expected, _) = reference.sharpen(&store).unwrap();
    let covered = report.covered();
    assert_eq!(
        &target.as_pixels()[..covered],
        &expected.as_pixels()[..covered]
    );
    if policy == RemainderPolicy::ExtendLast {
        assert_eq!(covered, width * height);
    }
}

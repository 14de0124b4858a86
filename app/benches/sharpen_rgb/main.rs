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
use criterion::{Criterion, criterion_group, criterion_main};
use pic_sharpen::{ImageStore, ImageStoreMut, Rgb8, Sharpener, Sharpening, ThreadingPolicy};

fn synthetic_image(width: usize, height: usize) -> ImageStore<'static> {
    let pixels = (0..width * height)
        .map(|i| {
            let (x, y) = (i % width, i / width);
            Rgb8::new((x * 255 / width) as u8, (y * 255 / height) as u8, ((x ^ y) & 0xff) as u8)
        })
        .collect();
    ImageStore::new(pixels, width, height).unwrap()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let store = synthetic_image(1920, 1080);

    c.bench_function("Pic sharpen RGB: Single", |b| {
        let mut sharpener = Sharpener::default();
        sharpener.set_threading_policy(ThreadingPolicy::Single);
        let mut target = ImageStoreMut::alloc(store.width, store.height);
        b.iter(|| {
            sharpener.sharpen_rgb(&store, &mut target).unwrap();
        })
    });

    c.bench_function("Pic sharpen RGB: Fixed(16)", |b| {
        let mut sharpener = Sharpener::default();
        sharpener.set_threading_policy(ThreadingPolicy::Fixed(16));
        let mut target = ImageStoreMut::alloc(store.width, store.height);
        b.iter(|| {
            sharpener.sharpen_rgb(&store, &mut target).unwrap();
        })
    });

    c.bench_function("Pic sharpen RGB: Adaptive", |b| {
        let mut sharpener = Sharpener::default();
        sharpener.set_threading_policy(ThreadingPolicy::Adaptive);
        let mut target = ImageStoreMut::alloc(store.width, store.height);
        b.iter(|| {
            sharpener.sharpen_rgb(&store, &mut target).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

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
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ExtendedColorType, ImageEncoder, ImageReader};
use pic_sharpen::{ImageStore, ImageStoreMut};

/// Decodes `path` into 8-bit RGB, whatever the source format.
pub fn read_image(path: &Path) -> Result<ImageStore<'static>> {
    let img = ImageReader::open(path)
        .with_context(|| format!("Unable to open {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("Unable to read {}", path.display()))?
        .decode()
        .with_context(|| format!("Unable to decode {}", path.display()))?;
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    let store = ImageStore::from_bytes(rgb.as_raw(), width as usize, height as usize)?;
    Ok(store)
}

/// Writes a binary `P6` pixmap with maxval 255.
pub fn write_ppm(path: &Path, store: &ImageStoreMut) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Unable to create {}", path.display()))?;
    let encoder = PnmEncoder::new(BufWriter::new(file))
        .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary));
    encoder
        .write_image(
            &store.to_bytes(),
            store.width as u32,
            store.height as u32,
            ExtendedColorType::Rgb8,
        )
        .with_context(|| format!("Unable to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pic_sharpen::Rgb8;

    #[test]
    fn ppm_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.ppm");

        let mut pixels = vec![
            Rgb8::new(255, 0, 0),
            Rgb8::new(0, 255, 0),
            Rgb8::new(0, 0, 255),
            Rgb8::new(12, 34, 56),
        ];
        let store = ImageStoreMut::from_slice(&mut pixels, 2, 2).unwrap();
        write_ppm(&path, &store).unwrap();

        let raw = std::fs::read(&path).unwrap();
        assert!(raw.starts_with(b"P6"));

        let decoded = read_image(&path).unwrap();
        assert_eq!(decoded.width, 2);
        assert_eq!(decoded.height, 2);
        assert_eq!(decoded.pixel(1, 1), Some(Rgb8::new(12, 34, 56)));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_image(&dir.path().join("absent.ppm")).is_err());
    }
}

use std::io::Cursor;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};

use crate::rect::Rect;
use crate::Color;

/// A decoded image kept as straight-alpha RGBA8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Sprite {
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            bail!(
                "RGBA buffer for a {width}x{height} sprite must be {expected} bytes, got {}",
                pixels.len()
            );
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A rectangle of one color. Handy for placeholder art and tests.
    pub fn solid(width: u32, height: u32, color: Color) -> Self {
        let pixels = [color.r, color.g, color.b, color.a].repeat(width as usize * height as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Load a PNG file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)
            .with_context(|| format!("Failed to read sprite '{}'", path.display()))?;
        let sprite = Self::from_png_bytes(&data)
            .with_context(|| format!("Failed to decode sprite '{}'", path.display()))?;
        log::debug!(
            "Loaded sprite '{}' ({}x{})",
            path.display(),
            sprite.width,
            sprite.height
        );
        Ok(sprite)
    }

    /// Decode an in-memory PNG. Palette, grayscale and 16-bit images are
    /// normalized to RGBA8.
    pub fn from_png_bytes(data: &[u8]) -> Result<Self> {
        let mut decoder = png::Decoder::new(Cursor::new(data));
        decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
        let mut reader = decoder.read_info()?;

        let mut buf = vec![0u8; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf)?;
        let bytes = &buf[..info.buffer_size()];

        let (w, h) = (info.width, info.height);
        let mut out = Vec::with_capacity(w as usize * h as usize * 4);
        match info.color_type {
            png::ColorType::Rgba => out.extend_from_slice(bytes),
            png::ColorType::Rgb => {
                for px in bytes.chunks_exact(3) {
                    out.extend_from_slice(&[px[0], px[1], px[2], 0xff]);
                }
            }
            png::ColorType::Grayscale => {
                for &v in bytes {
                    out.extend_from_slice(&[v, v, v, 0xff]);
                }
            }
            png::ColorType::GrayscaleAlpha => {
                for px in bytes.chunks_exact(2) {
                    out.extend_from_slice(&[px[0], px[0], px[0], px[1]]);
                }
            }
            other => return Err(anyhow!("Unsupported PNG color type {other:?}")),
        }
        Self::from_rgba(w, h, out)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bounding box of the sprite placed at the origin.
    pub fn rect(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }

    /// Pixel at `(x, y)`. Panics if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        assert!(x < self.width && y < self.height, "sprite pixel out of bounds");
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = &self.pixels[i..i + 4];
        Color::new_rgba(px[0], px[1], px[2], px[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_png(width: u32, height: u32, color: png::ColorType, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, width, height);
            encoder.set_color(color);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        out
    }

    #[test]
    fn decodes_rgba_png_dimensions_and_pixels() {
        let data = [
            255, 0, 0, 255, //
            0, 255, 0, 0, //
            0, 0, 255, 128, //
            255, 255, 255, 255,
        ];
        let encoded = encode_png(2, 2, png::ColorType::Rgba, &data);
        let sprite = Sprite::from_png_bytes(&encoded).unwrap();
        assert_eq!((sprite.width(), sprite.height()), (2, 2));
        assert_eq!(sprite.pixel(0, 0), Color::new_rgb(255, 0, 0));
        assert_eq!(sprite.pixel(1, 0).a, 0);
        assert_eq!(sprite.pixel(0, 1), Color::new_rgba(0, 0, 255, 128));
        assert_eq!(sprite.rect(), Rect::new(0, 0, 2, 2));
    }

    #[test]
    fn rgb_and_grayscale_become_opaque_rgba() {
        let rgb = encode_png(1, 1, png::ColorType::Rgb, &[1, 2, 3]);
        assert_eq!(
            Sprite::from_png_bytes(&rgb).unwrap().pixel(0, 0),
            Color::new_rgb(1, 2, 3)
        );

        let gray = encode_png(1, 1, png::ColorType::Grayscale, &[77]);
        assert_eq!(
            Sprite::from_png_bytes(&gray).unwrap().pixel(0, 0),
            Color::gray(77)
        );
    }

    #[test]
    fn corrupt_png_is_an_error() {
        assert!(Sprite::from_png_bytes(b"definitely not a png").is_err());
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let err = Sprite::load("no/such/dir/ship.png").unwrap_err();
        assert!(format!("{err:#}").contains("no/such/dir/ship.png"));
    }

    #[test]
    fn load_reads_png_from_disk() {
        let path = std::env::temp_dir().join(format!("invasion_sprite_{}.png", std::process::id()));
        std::fs::write(&path, encode_png(3, 1, png::ColorType::Rgb, &[0; 9])).unwrap();
        let sprite = Sprite::load(&path);
        std::fs::remove_file(&path).ok();
        assert_eq!(sprite.unwrap().width(), 3);
    }

    #[test]
    fn from_rgba_rejects_wrong_length() {
        assert!(Sprite::from_rgba(2, 2, vec![0; 15]).is_err());
    }

    #[test]
    fn solid_fills_every_pixel() {
        let sprite = Sprite::solid(3, 2, Color::WHITE);
        assert_eq!(sprite.pixel(2, 1), Color::WHITE);
    }
}

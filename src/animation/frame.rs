//! A single pre-rendered frame: straight-alpha RGBA8 pixels.

use image::RgbaImage;

/// One animation frame, row-major RGBA with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Frame {
    /// Fully transparent frame; stands in for any frame that failed to load.
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height * 4) as usize],
        }
    }

    /// Wraps a decoded image, scaling it to `width` x `height` when it differs.
    pub fn from_image(img: RgbaImage, width: u32, height: u32) -> Self {
        let img = if img.width() != width || img.height() != height {
            image::imageops::resize(&img, width, height, image::imageops::FilterType::Nearest)
        } else {
            img
        };
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.offset(x, y);
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        ((y * self.width + x) * 4) as usize
    }

    pub fn is_transparent(&self) -> bool {
        self.pixels.chunks_exact(4).all(|p| p[3] == 0)
    }

    /// Horizontally mirrored copy (pet facing left).
    pub fn mirrored(&self) -> Frame {
        let mut out = Frame::blank(self.width, self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                let src = self.offset(x, y);
                let dst = out.offset(self.width - 1 - x, y);
                out.pixels[dst..dst + 4].copy_from_slice(&self.pixels[src..src + 4]);
            }
        }
        out
    }

    /// Alpha-composite `top` over this frame. Both frames share a size.
    pub fn composite(&mut self, top: &Frame) {
        debug_assert_eq!((self.width, self.height), (top.width, top.height));
        for (dst, src) in self
            .pixels
            .chunks_exact_mut(4)
            .zip(top.pixels.chunks_exact(4))
        {
            let sa = src[3] as u32;
            if sa == 0 {
                continue;
            }
            if sa == 255 {
                dst.copy_from_slice(src);
                continue;
            }
            let da = dst[3] as u32;
            let out_a = sa + da * (255 - sa) / 255;
            if out_a == 0 {
                continue;
            }
            for c in 0..3 {
                let blended =
                    (src[c] as u32 * sa + dst[c] as u32 * da * (255 - sa) / 255) / out_a;
                dst[c] = blended.min(255) as u8;
            }
            dst[3] = out_a.min(255) as u8;
        }
    }

    /// Copy rotated by `degrees` (counter-clockwise) about the center and
    /// shifted vertically by `lift` pixels, nearest-neighbour sampled.
    pub fn rotated(&self, degrees: f64, lift: i32) -> Frame {
        let mut out = Frame::blank(self.width, self.height);
        let (sin, cos) = degrees.to_radians().sin_cos();
        let cx = self.width as f64 / 2.0;
        let cy = self.height as f64 / 2.0;

        for y in 0..self.height {
            for x in 0..self.width {
                // Inverse-map each destination pixel back into the source.
                let dx = x as f64 + 0.5 - cx;
                let dy = (y as i32 - lift) as f64 + 0.5 - cy;
                let sx = cos * dx - sin * dy + cx;
                let sy = sin * dx + cos * dy + cy;
                if sx < 0.0 || sy < 0.0 {
                    continue;
                }
                let (sx, sy) = (sx as u32, sy as u32);
                if sx >= self.width || sy >= self.height {
                    continue;
                }
                let src = self.offset(sx, sy);
                let dst = out.offset(x, y);
                out.pixels[dst..dst + 4].copy_from_slice(&self.pixels[src..src + 4]);
            }
        }
        out
    }

    /// Premultiplied BGRA, the layout layered windows expect.
    pub fn to_premultiplied_bgra(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len());
        for p in self.pixels.chunks_exact(4) {
            let a = p[3] as u32;
            out.push((p[2] as u32 * a / 255) as u8);
            out.push((p[1] as u32 * a / 255) as u8);
            out.push((p[0] as u32 * a / 255) as u8);
            out.push(p[3]);
        }
        out
    }
}

use crate::rect::Rect;
use crate::sprite::Sprite;
use crate::Color;

/// Bytes per pixel of the RGB24 framebuffer.
pub const BYTES_PER_PIXEL: usize = 3;

/// RGB24 framebuffer the game draws into and the frontend uploads as a
/// texture. Every drawing call clips to the frame.
pub struct Screen {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Screen {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u8; width as usize * height as usize * BYTES_PER_PIXEL],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row stride in bytes.
    #[inline]
    pub fn pitch(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    pub fn rect(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Color at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let index = self.index(x, y)?;
        let px = &self.pixels[index..index + BYTES_PER_PIXEL];
        Some(Color::new_rgb(px[0], px[1], px[2]))
    }

    pub fn fill(&mut self, color: Color) {
        for px in self.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&[color.r, color.g, color.b]);
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(area) = rect.intersection(&self.rect()) else {
            return;
        };
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                self.put(x, y, color);
            }
        }
    }

    /// Draw `sprite` with its top-left corner at `dest.x`/`dest.y`. The
    /// sprite is alpha-blended over what is already in the frame.
    pub fn blit(&mut self, sprite: &Sprite, dest: Rect) {
        let placed = Rect::new(dest.x, dest.y, sprite.width() as i32, sprite.height() as i32);
        let Some(area) = placed.intersection(&self.rect()) else {
            return;
        };
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let src = sprite.pixel((x - placed.x) as u32, (y - placed.y) as u32);
                if src.a == 0 {
                    continue;
                }
                let blended = match self.pixel(x, y) {
                    Some(dst) if !src.is_opaque() => src.over(dst),
                    _ => src,
                };
                self.put(x, y, blended);
            }
        }
    }

    fn put(&mut self, x: i32, y: i32, color: Color) {
        if let Some(index) = self.index(x, y) {
            self.pixels[index..index + BYTES_PER_PIXEL].copy_from_slice(&[color.r, color.g, color.b]);
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL)
    }
}

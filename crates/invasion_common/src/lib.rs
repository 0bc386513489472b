pub mod app;
pub mod key;
pub mod rect;
pub mod screen;
pub mod sprite;

pub use app::App;
pub use key::Key;
pub use rect::Rect;
pub use screen::Screen;
pub use sprite::Sprite;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::new_rgb(0, 0, 0);
    pub const WHITE: Color = Color::new_rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::new_rgba(0, 0, 0, 0);

    #[inline]
    pub const fn new_rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 0xff }
    }

    #[inline]
    pub const fn new_rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    /// A gray with every channel set to `value`.
    #[inline]
    pub const fn gray(value: u8) -> Color {
        Color::new_rgb(value, value, value)
    }

    #[inline]
    pub const fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    #[inline]
    pub const fn is_opaque(&self) -> bool {
        self.a == 0xff
    }

    /// Composite `self` over `dst` using straight alpha. The result is opaque.
    pub fn over(&self, dst: Color) -> Color {
        match self.a {
            0 => Color::new_rgb(dst.r, dst.g, dst.b),
            0xff => Color::new_rgb(self.r, self.g, self.b),
            a => {
                let a = a as u16;
                let blend = |s: u8, d: u8| ((s as u16 * a + d as u16 * (255 - a) + 127) / 255) as u8;
                Color::new_rgb(
                    blend(self.r, dst.r),
                    blend(self.g, dst.g),
                    blend(self.b, dst.b),
                )
            }
        }
    }
}

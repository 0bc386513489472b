/// Axis-aligned rectangle in screen pixels. `x`/`y` is the top-left corner.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub const fn left(&self) -> i32 {
        self.x
    }

    /// One past the last column covered by the rectangle.
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub const fn top(&self) -> i32 {
        self.y
    }

    /// One past the last row covered by the rectangle.
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    #[inline]
    pub const fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    #[inline]
    pub const fn mid_top(&self) -> (i32, i32) {
        (self.center_x(), self.top())
    }

    #[inline]
    pub const fn mid_bottom(&self) -> (i32, i32) {
        (self.center_x(), self.bottom())
    }

    /// Move the rectangle so its top edge is centered on `(x, y)`.
    pub fn set_mid_top(&mut self, (x, y): (i32, i32)) {
        self.x = x - self.width / 2;
        self.y = y;
    }

    /// Move the rectangle so its bottom edge is centered on `(x, y)`.
    pub fn set_mid_bottom(&mut self, (x, y): (i32, i32)) {
        self.x = x - self.width / 2;
        self.y = y - self.height;
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// The overlapping area of two rectangles, if any.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        let rect = Rect::new(left, top, right - left, bottom - top);
        (!rect.is_empty()).then_some(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::Rect;

    #[test]
    fn edges_follow_position() {
        let rect = Rect::new(10, 20, 40, 30);
        assert_eq!(rect.left(), 10);
        assert_eq!(rect.right(), 50);
        assert_eq!(rect.top(), 20);
        assert_eq!(rect.bottom(), 50);
        assert_eq!(rect.center_x(), 30);
    }

    #[test]
    fn mid_bottom_anchors_to_screen_bottom() {
        let screen = Rect::new(0, 0, 1200, 800);
        let mut ship = Rect::new(0, 0, 66, 57);
        ship.set_mid_bottom(screen.mid_bottom());
        assert_eq!(ship.bottom(), 800);
        assert_eq!(ship.x, 600 - 33);
        assert_eq!(ship.center_x(), 600);
    }

    #[test]
    fn mid_top_with_odd_width_rounds_left() {
        let mut bullet = Rect::new(0, 0, 3, 15);
        bullet.set_mid_top((100, 743));
        assert_eq!(bullet.x, 99);
        assert_eq!(bullet.y, 743);
        assert_eq!(bullet.mid_top(), (100, 743));
    }

    #[test]
    fn intersection_clips_or_rejects() {
        let screen = Rect::new(0, 0, 100, 100);
        assert_eq!(
            Rect::new(-10, 90, 20, 20).intersection(&screen),
            Some(Rect::new(0, 90, 10, 10))
        );
        assert_eq!(Rect::new(0, -16, 4, 16).intersection(&screen), None);
        assert_eq!(Rect::new(100, 0, 4, 16).intersection(&screen), None);
    }
}

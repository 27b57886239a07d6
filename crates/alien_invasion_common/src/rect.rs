/// `right()` and `bottom()` are one past the last covered pixel.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect {
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

    #[inline]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub const fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    #[inline]
    pub const fn centerx(&self) -> i32 {
        self.x + self.width / 2
    }

    #[inline]
    pub const fn centery(&self) -> i32 {
        self.y + self.height / 2
    }

    pub const fn center(&self) -> (i32, i32) {
        (self.centerx(), self.centery())
    }

    pub const fn midtop(&self) -> (i32, i32) {
        (self.centerx(), self.y)
    }

    pub const fn midbottom(&self) -> (i32, i32) {
        (self.centerx(), self.bottom())
    }

    pub fn set_center(&mut self, (x, y): (i32, i32)) {
        self.x = x - self.width / 2;
        self.y = y - self.height / 2;
    }

    pub fn set_centerx(&mut self, x: i32) {
        self.x = x - self.width / 2;
    }

    pub fn set_midtop(&mut self, (x, y): (i32, i32)) {
        self.x = x - self.width / 2;
        self.y = y;
    }

    pub fn set_midbottom(&mut self, (x, y): (i32, i32)) {
        self.x = x - self.width / 2;
        self.y = y - self.height;
    }

    pub fn set_right(&mut self, right: i32) {
        self.x = right - self.width;
    }

    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
    }

    pub fn collides_with(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

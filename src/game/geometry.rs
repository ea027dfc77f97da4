/// Axis-aligned box in arena coordinates (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    fn is_well_formed(&self) -> bool {
        [self.x, self.y, self.width, self.height].iter().all(|v| v.is_finite())
            && self.width >= 0.0
            && self.height >= 0.0
    }
}

/// Strict overlap on both axes. Boxes that only share an edge do not collide.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    debug_assert!(a.is_well_formed(), "malformed rect {a:?}");
    debug_assert!(b.is_well_formed(), "malformed rect {b:?}");
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

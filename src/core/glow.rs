use crate::constants::GLOW_RADIUS;
use glam::Vec2;

/// Top-left corner that centers the glow element on `pointer`.
///
/// Not clamped: near the viewport edges the glow renders partly off-screen.
#[inline]
pub fn glow_origin(pointer: Vec2) -> Vec2 {
    pointer - Vec2::splat(GLOW_RADIUS)
}

/// Last pointer position in viewport coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CursorState {
    pub position: Vec2,
}

impl CursorState {
    /// Store a pointer-move sample and return the new glow origin.
    pub fn update(&mut self, client_x: f32, client_y: f32) -> Vec2 {
        self.position = Vec2::new(client_x, client_y);
        self.glow_origin()
    }

    #[inline]
    pub fn glow_origin(&self) -> Vec2 {
        glow_origin(self.position)
    }
}

/// CSS `left`/`top` values for a glow origin.
pub fn glow_offsets_px(origin: Vec2) -> (String, String) {
    (format!("{}px", origin.x), format!("{}px", origin.y))
}

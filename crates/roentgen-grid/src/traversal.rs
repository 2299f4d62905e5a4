//! Discrete line traversal over tile coordinates.
//!
//! Enumerates every tile a straight segment between two tile centers passes
//! through, in crossing order. Exact integer arithmetic — no float epsilon.

use roentgen_core::types::TileCoord;

/// Lazy supercover walk from one tile to another.
///
/// At each step the next x-boundary crossing `(2·ix+1)·ny` is compared to
/// the next y-boundary crossing `(2·iy+1)·nx` (both scaled by `nx·ny` to
/// stay integral). When the segment crosses a tile corner exactly, the walk
/// steps on x first and y on the following step, so the x-adjacent tile and
/// then the diagonal tile are visited — tiles are never skipped diagonally.
pub struct TileLine {
    x: i32,
    y: i32,
    x_step: i32,
    y_step: i32,
    nx: i64,
    ny: i64,
    ix: i64,
    iy: i64,
    started: bool,
}

impl TileLine {
    pub fn new(from: TileCoord, to: TileCoord) -> Self {
        let dx = i64::from(to.x) - i64::from(from.x);
        let dy = i64::from(to.y) - i64::from(from.y);
        Self {
            x: from.x,
            y: from.y,
            x_step: dx.signum() as i32,
            y_step: dy.signum() as i32,
            nx: dx.abs(),
            ny: dy.abs(),
            ix: 0,
            iy: 0,
            started: false,
        }
    }
}

impl Iterator for TileLine {
    type Item = TileCoord;

    fn next(&mut self) -> Option<TileCoord> {
        if !self.started {
            self.started = true;
            return Some(TileCoord::new(self.x, self.y));
        }
        if self.ix >= self.nx && self.iy >= self.ny {
            return None;
        }

        let step_x = self.ix < self.nx
            && (self.iy >= self.ny || (2 * self.ix + 1) * self.ny <= (2 * self.iy + 1) * self.nx);

        if step_x {
            self.x += self.x_step;
            self.ix += 1;
        } else {
            self.y += self.y_step;
            self.iy += 1;
        }
        Some(TileCoord::new(self.x, self.y))
    }
}

//! Camera, grid mapping and hit-testing.
//!
//! World space is addressed in the same units as logical screen pixels;
//! the camera offset is the world position of the screen's top-left
//! corner. Cell `(ix, iy)` on screen is world cell
//! `(floor(cam.x / g) + ix, floor(cam.y / g) + iy)`.

use crate::{
    input::InputSnapshot,
    types::{GridCoordinate, ScreenPos, SeedCoord},
};
use serde::{Deserialize, Serialize};

/// Camera offset in world units. Starts at the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    pub x: f64,
    pub y: f64,
}

impl CameraState {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One grid cell that fits on screen this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleCell {
    pub ix: i64,
    pub iy: i64,
    pub world: GridCoordinate,
    /// Cell centre on the logical screen.
    pub screen: ScreenPos,
}

#[derive(Debug, Clone, Default)]
pub struct Viewport {
    pub camera: CameraState,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_camera(camera: CameraState) -> Self {
        Self { camera }
    }

    /// Move the camera by a signed delta. The galaxy has no edges.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.camera.x += dx;
        self.camera.y += dy;
    }

    /// One `pan` per held direction key. Up is world-negative y.
    pub fn apply_input(&mut self, input: &InputSnapshot, speed: f64) {
        if input.left {
            self.pan(-speed, 0.0);
        }
        if input.right {
            self.pan(speed, 0.0);
        }
        if input.up {
            self.pan(0.0, -speed);
        }
        if input.down {
            self.pan(0.0, speed);
        }
    }

    /// World cell under the screen's top-left corner.
    pub fn origin_cell(&self, grid_size: i64) -> GridCoordinate {
        let g = grid_size as f64;
        GridCoordinate::new(
            (self.camera.x / g).floor() as SeedCoord,
            (self.camera.y / g).floor() as SeedCoord,
        )
    }

    /// Every cell that fits entirely on screen, row by row.
    ///
    /// Lazy and finite; call again each frame rather than holding on
    /// to it. Partial cells at the right and bottom edges are skipped.
    /// A non-positive `grid_size` yields no cells.
    pub fn visible_cells(
        &self,
        screen_width: i64,
        screen_height: i64,
        grid_size: i64,
    ) -> impl Iterator<Item = VisibleCell> {
        let (nx, ny, origin) = if grid_size > 0 {
            (
                (screen_width / grid_size).max(0),
                (screen_height / grid_size).max(0),
                self.origin_cell(grid_size),
            )
        } else {
            (0, 0, GridCoordinate::new(0, 0))
        };
        let half = grid_size / 2;

        (0..ny).flat_map(move |iy| {
            (0..nx).map(move |ix| VisibleCell {
                ix,
                iy,
                world: GridCoordinate::new(
                    origin.seed_x.wrapping_add(ix),
                    origin.seed_y.wrapping_add(iy),
                ),
                screen: ScreenPos::new(ix * grid_size + half, iy * grid_size + half),
            })
        })
    }

    /// Screen-sized block index for display. y is flipped so that
    /// moving up increases the sector number.
    pub fn sector(&self, screen_width: i64, screen_height: i64) -> (i64, i64) {
        sector_of(&self.camera, screen_width, screen_height)
    }

    pub fn sector_label(&self, screen_width: i64, screen_height: i64) -> String {
        sector_label(&self.camera, screen_width, screen_height)
    }
}

pub fn sector_of(camera: &CameraState, screen_width: i64, screen_height: i64) -> (i64, i64) {
    (
        (camera.x / screen_width as f64).floor() as i64,
        (-camera.y / screen_height as f64).floor() as i64,
    )
}

/// Location overlay text: world position (y flipped) and sector.
pub fn sector_label(camera: &CameraState, screen_width: i64, screen_height: i64) -> String {
    let (sx, sy) = sector_of(camera, screen_width, screen_height);
    format!(
        "x={:.0}\ny={:.0}\nsector=({sx},{sy})",
        display_round(camera.x),
        display_round(-camera.y),
    )
}

/// Round for display without ever printing "-0".
fn display_round(v: f64) -> f64 {
    // -0.0 + 0.0 == +0.0
    v.round() + 0.0
}

/// Whether the pointer is over a body. Small bodies get a hit radius of
/// at least `3 * min_radius`.
pub fn hit_test(mouse: (f64, f64), body: ScreenPos, body_radius: u32, min_radius: u32) -> bool {
    let dx = mouse.0 - body.x as f64;
    let dy = mouse.1 - body.y as f64;
    let reach = body_radius.max(min_radius.saturating_mul(3)) as f64;
    dx * dx + dy * dy <= reach * reach
}

/// Convert a presented-window pointer position to logical screen pixels.
pub fn to_logical(pointer: (f64, f64), scale_factor: f64) -> (f64, f64) {
    (pointer.0 / scale_factor, pointer.1 / scale_factor)
}

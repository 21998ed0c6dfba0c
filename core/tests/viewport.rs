//! Grid mapping, panning, sector labels and hit-testing.

use multiverse_core::{
    input::InputSnapshot,
    types::{GridCoordinate, ScreenPos},
    viewport::{hit_test, sector_label, VisibleCell},
    CameraState, Viewport,
};

const GRID: i64 = 16;

fn cells(viewport: &Viewport) -> Vec<VisibleCell> {
    viewport.visible_cells(300, 300, GRID).collect()
}

#[test]
fn origin_viewport_tiles_the_screen() {
    let viewport = Viewport::new();
    let cells = cells(&viewport);

    assert_eq!(cells.len(), 18 * 18, "floor(300/16)^2 cells expected");

    let first = cells[0];
    assert_eq!((first.ix, first.iy), (0, 0));
    assert_eq!(first.world, GridCoordinate::new(0, 0));
    assert_eq!(first.screen, ScreenPos::new(8, 8));

    let last = cells[cells.len() - 1];
    assert_eq!((last.ix, last.iy), (17, 17));
    assert_eq!(last.world, GridCoordinate::new(17, 17));
    assert_eq!(last.screen, ScreenPos::new(17 * 16 + 8, 17 * 16 + 8));
}

#[test]
fn visible_cells_are_row_major_and_restartable() {
    let viewport = Viewport::new();
    let first_pass = cells(&viewport);
    let second_pass = cells(&viewport);
    assert_eq!(first_pass, second_pass);

    assert_eq!((first_pass[1].ix, first_pass[1].iy), (1, 0));
    assert_eq!((first_pass[18].ix, first_pass[18].iy), (0, 1));
}

#[test]
fn screen_smaller_than_a_cell_shows_nothing() {
    let viewport = Viewport::new();
    assert_eq!(viewport.visible_cells(15, 300, GRID).count(), 0);
    assert_eq!(viewport.visible_cells(300, 15, GRID).count(), 0);
}

#[test]
fn non_positive_grid_size_yields_no_cells() {
    let viewport = Viewport::with_camera(CameraState::new(450.0, -450.0));
    assert_eq!(viewport.visible_cells(300, 300, 0).count(), 0);
    assert_eq!(viewport.visible_cells(300, 300, -16).count(), 0);
}

#[test]
fn panning_right_one_cell_shifts_seed_x_only() {
    for start in [CameraState::new(0.0, 0.0), CameraState::new(5.5, -37.0), CameraState::new(-100.0, 64.0)] {
        let mut viewport = Viewport::with_camera(start);
        let before = cells(&viewport);
        viewport.pan(GRID as f64, 0.0);
        let after = cells(&viewport);

        assert_eq!(before.len(), after.len());
        for (b, a) in before.iter().zip(after.iter()) {
            assert_eq!(a.world.seed_x, b.world.seed_x + 1, "from {start:?}");
            assert_eq!(a.world.seed_y, b.world.seed_y, "from {start:?}");
            assert_eq!(a.screen, b.screen);
        }
    }
}

#[test]
fn negative_camera_floors_toward_negative_infinity() {
    let viewport = Viewport::with_camera(CameraState::new(-1.0, -1.0));
    let first = cells(&viewport)[0];
    assert_eq!(first.world, GridCoordinate::new(-1, -1));
}

#[test]
fn apply_input_moves_one_step_per_held_key() {
    let mut viewport = Viewport::new();
    let input = InputSnapshot { right: true, up: true, ..InputSnapshot::idle() };
    viewport.apply_input(&input, 4.0);
    assert_eq!(viewport.camera, CameraState::new(4.0, -4.0));

    let both = InputSnapshot { left: true, right: true, ..InputSnapshot::idle() };
    viewport.apply_input(&both, 4.0);
    assert_eq!(viewport.camera, CameraState::new(4.0, -4.0), "opposite keys cancel");

    viewport.apply_input(&InputSnapshot { down: true, left: true, ..InputSnapshot::idle() }, 4.0);
    assert_eq!(viewport.camera, CameraState::new(0.0, 0.0));
}

#[test]
fn sector_label_flips_vertical_axis() {
    let camera = CameraState::new(450.0, -450.0);
    let viewport = Viewport::with_camera(camera);
    assert_eq!(viewport.sector(300, 300), (1, 1));
    assert_eq!(sector_label(&camera, 300, 300), "x=450\ny=450\nsector=(1,1)");
}

#[test]
fn sector_label_at_origin_and_below() {
    assert_eq!(
        sector_label(&CameraState::default(), 300, 300),
        "x=0\ny=0\nsector=(0,0)"
    );
    // Moving down the screen is world-positive y, displayed negative.
    let camera = CameraState::new(-1.0, 10.0);
    assert_eq!(sector_label(&camera, 300, 300), "x=-1\ny=-10\nsector=(-1,-1)");
}

#[test]
fn hit_test_uses_enlarged_radius_for_small_bodies() {
    let body = ScreenPos::new(100, 100);
    assert!(hit_test((103.0, 100.0), body, 4, 2), "9 <= 36");
    assert!(hit_test((106.0, 100.0), body, 4, 2), "36 <= 36 is on the boundary");
    assert!(!hit_test((107.0, 100.0), body, 4, 2), "49 > 36");
}

#[test]
fn hit_test_uses_body_radius_when_larger() {
    let body = ScreenPos::new(0, 0);
    assert!(hit_test((6.0, 8.0), body, 10, 2), "100 <= 100");
    assert!(!hit_test((7.0, 8.0), body, 10, 2), "113 > 100");
}

//! The frame loop.
//!
//! FRAME ORDER (fixed, every frame):
//!   1. Apply input to the camera
//!   2. Fill background
//!   3. For each visible cell: generate, draw body, life ring, hover label
//!   4. Draw the location overlay
//!   5. Present
//!
//! RULES:
//!   - All mutable viewer state lives in ViewerState, owned by the caller.
//!   - Bodies are regenerated every frame; nothing is cached.
//!   - The render target is shut down exactly once, whatever happens.

use crate::{
    body::BodyGenerator,
    config::GalaxyConfig,
    error::GalaxyResult,
    input::{InputSnapshot, InputSource},
    render::{DrawCommand, RenderTarget},
    types::FrameIndex,
    viewport::{hit_test, to_logical, CameraState, Viewport},
};
use serde::{Deserialize, Serialize};

pub struct ViewerState {
    pub config:    GalaxyConfig,
    pub generator: BodyGenerator,
    pub viewport:  Viewport,
    pub frame:     FrameIndex,
}

impl ViewerState {
    /// Validate the config and place the camera at the origin.
    pub fn new(config: GalaxyConfig) -> GalaxyResult<Self> {
        config.validate()?;
        let generator = BodyGenerator::new(config.generation.clone())?;
        Ok(Self {
            config,
            generator,
            viewport: Viewport::new(),
            frame: 0,
        })
    }

    pub fn camera(&self) -> CameraState {
        self.viewport.camera
    }

    pub fn sector_label(&self) -> String {
        let v = &self.config.viewport;
        self.viewport.sector_label(v.window_width, v.window_height)
    }
}

/// What one frame put on screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSummary {
    pub frame:         FrameIndex,
    pub camera:        CameraState,
    pub sector:        (i64, i64),
    pub cells_scanned: u64,
    pub bodies_drawn:  u64,
    pub life_bearing:  u64,
    /// Name of the body under the pointer, if any. When several bodies
    /// hit, the last one drawn wins, matching what ends up on top.
    pub hovered:       Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub frames:       u64,
    pub final_camera: CameraState,
    pub bodies_drawn: u64,
}

/// Advance one frame: move the camera, then draw and present.
pub fn render_frame(
    state: &mut ViewerState,
    input: &InputSnapshot,
    target: &mut dyn RenderTarget,
) -> GalaxyResult<FrameSummary> {
    let vcfg = &state.config.viewport;
    let style = &state.config.style;
    let grid_size = vcfg.grid_size;
    let min_radius = state.generator.config().min_radius;
    let ring_extra = state.config.life_ring_extra();

    state.viewport.apply_input(input, vcfg.speed);
    state.frame += 1;

    let pointer = to_logical(input.pointer, vcfg.scale_factor);
    let mut summary = FrameSummary {
        frame:         state.frame,
        camera:        state.viewport.camera,
        sector:        state.viewport.sector(vcfg.window_width, vcfg.window_height),
        cells_scanned: 0,
        bodies_drawn:  0,
        life_bearing:  0,
        hovered:       None,
    };

    target.draw(&DrawCommand::Fill { color: style.background })?;

    for cell in state
        .viewport
        .visible_cells(vcfg.window_width, vcfg.window_height, grid_size)
    {
        summary.cells_scanned += 1;
        let record = state.generator.generate_at(cell.world);
        let Some(body) = record.details else {
            continue;
        };
        let (x, y) = (cell.screen.x, cell.screen.y);
        let radius = body.radius as f64;

        target.draw(&DrawCommand::Circle { x, y, radius, color: body.color.rgb() })?;
        summary.bodies_drawn += 1;

        if body.has_life {
            target.draw(&DrawCommand::CircleOutline {
                x,
                y,
                radius: radius + ring_extra,
                color:  style.life_color,
                width:  style.life_ring_width,
            })?;
            summary.life_bearing += 1;
        }

        if hit_test(pointer, cell.screen, body.radius, min_radius) {
            target.draw(&DrawCommand::Text {
                x,
                y: y - body.radius as i64 - grid_size,
                text: body.name.clone(),
                color: style.text_color,
                font: style.label_font.clone(),
            })?;
            summary.hovered = Some(body.name);
        }
    }

    let (ox, oy) = style.overlay_origin;
    target.draw(&DrawCommand::Text {
        x: ox,
        y: oy,
        text: state.sector_label(),
        color: style.text_color,
        font: style.overlay_font.clone(),
    })?;
    target.present()?;

    log::debug!(
        "frame={} camera=({:.1},{:.1}) bodies={} life={} hovered={:?}",
        summary.frame,
        summary.camera.x,
        summary.camera.y,
        summary.bodies_drawn,
        summary.life_bearing,
        summary.hovered,
    );
    Ok(summary)
}

/// Draw a single frame and release the target, whatever the outcome.
pub fn render_once(
    state: &mut ViewerState,
    input: &InputSnapshot,
    target: &mut dyn RenderTarget,
) -> GalaxyResult<FrameSummary> {
    let result = render_frame(state, input, target);
    target.shutdown();
    result
}

/// Run frames until the input source asks to quit.
///
/// `on_frame` sees every frame summary as it is produced. The target is
/// shut down before returning, on success and on error.
pub fn run(
    state: &mut ViewerState,
    input: &mut dyn InputSource,
    target: &mut dyn RenderTarget,
    mut on_frame: impl FnMut(&FrameSummary),
) -> GalaxyResult<RunSummary> {
    log::info!(
        "viewer starting: {}x{} grid={} scale={}",
        state.config.viewport.window_width,
        state.config.viewport.window_height,
        state.config.viewport.grid_size,
        state.config.viewport.scale_factor,
    );

    let result = run_frames(state, input, target, &mut on_frame);
    target.shutdown();

    match &result {
        Ok(summary) => log::info!(
            "viewer stopped after {} frames at ({:.1},{:.1})",
            summary.frames,
            summary.final_camera.x,
            summary.final_camera.y,
        ),
        Err(e) => log::error!("viewer aborted at frame {}: {e}", state.frame),
    }
    result
}

fn run_frames(
    state: &mut ViewerState,
    input: &mut dyn InputSource,
    target: &mut dyn RenderTarget,
    on_frame: &mut impl FnMut(&FrameSummary),
) -> GalaxyResult<RunSummary> {
    let mut run = RunSummary::default();
    loop {
        let snapshot = input.poll()?;
        if snapshot.quit {
            break;
        }
        let summary = render_frame(state, &snapshot, target)?;
        run.frames += 1;
        run.bodies_drawn += summary.bodies_drawn;
        on_frame(&summary);
    }
    run.final_camera = state.viewport.camera;
    Ok(run)
}

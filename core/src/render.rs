//! Rendering collaborator contract.
//!
//! RULE: The viewer never touches pixels. It emits DrawCommands in
//! paint order and calls present() once per frame. Screen coordinates
//! are logical pixels, origin top-left, y increasing downward.

use crate::{color::Rgb, error::GalaxyResult};
use serde::{Deserialize, Serialize};

/// Every draw command the viewer can issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum DrawCommand {
    Fill {
        color: Rgb,
    },
    Circle {
        x: i64,
        y: i64,
        radius: f64,
        color: Rgb,
    },
    CircleOutline {
        x: i64,
        y: i64,
        radius: f64,
        color: Rgb,
        width: u32,
    },
    Text {
        x: i64,
        y: i64,
        text: String,
        color: Rgb,
        /// Name of a configured font, e.g. "mono-medium".
        font: String,
    },
}

/// The contract every render target must fulfill.
pub trait RenderTarget {
    fn draw(&mut self, cmd: &DrawCommand) -> GalaxyResult<()>;

    /// Show everything drawn since the last present.
    fn present(&mut self) -> GalaxyResult<()>;

    /// Release rendering resources. Called exactly once by the run loop,
    /// on clean quit and on error alike.
    fn shutdown(&mut self);
}

/// Keeps every presented frame in memory. Used by tests and tooling.
#[derive(Debug, Default)]
pub struct RecordingTarget {
    pending:   Vec<DrawCommand>,
    frames:    Vec<Vec<DrawCommand>>,
    shutdowns: u32,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Vec<DrawCommand>] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&[DrawCommand]> {
        self.frames.last().map(Vec::as_slice)
    }

    /// Commands drawn but not yet presented.
    pub fn pending(&self) -> &[DrawCommand] {
        &self.pending
    }

    pub fn shutdown_count(&self) -> u32 {
        self.shutdowns
    }
}

impl RenderTarget for RecordingTarget {
    fn draw(&mut self, cmd: &DrawCommand) -> GalaxyResult<()> {
        self.pending.push(cmd.clone());
        Ok(())
    }

    fn present(&mut self) -> GalaxyResult<()> {
        self.frames.push(std::mem::take(&mut self.pending));
        Ok(())
    }

    fn shutdown(&mut self) {
        self.shutdowns += 1;
    }
}

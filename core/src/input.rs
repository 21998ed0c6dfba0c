//! Input collaborator contract and a scripted implementation.
//!
//! The viewer only ever sees an `InputSnapshot` per frame. Where the
//! snapshot comes from (a window, a terminal, a test) is the source's
//! business.

use crate::error::GalaxyResult;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Held keys and pointer position for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub left:  bool,
    pub right: bool,
    pub up:    bool,
    pub down:  bool,
    /// Pointer position in presented-window pixels.
    pub pointer: (f64, f64),
    pub quit: bool,
}

impl InputSnapshot {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn quit() -> Self {
        Self { quit: true, ..Self::default() }
    }

    pub fn with_pointer(mut self, x: f64, y: f64) -> Self {
        self.pointer = (x, y);
        self
    }
}

/// The contract every input source must fulfill.
pub trait InputSource {
    /// Called once per frame, before the camera moves.
    fn poll(&mut self) -> GalaxyResult<InputSnapshot>;
}

/// Replays a fixed list of snapshots, then asks to quit forever after.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<InputSnapshot>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = InputSnapshot>) -> Self {
        Self { frames: frames.into_iter().collect() }
    }

    /// Parse a compact flight script, one frame per character:
    ///   `L` `R` `U` `D`  hold that direction for one frame
    ///   `.`              idle frame
    ///   `Q`              quit (anything after is never read)
    /// Whitespace is skipped; any other character is logged and skipped.
    /// Every frame uses the same pointer position.
    pub fn parse(script: &str, pointer: (f64, f64)) -> Self {
        let mut frames = VecDeque::new();
        for ch in script.chars() {
            let base = InputSnapshot::idle().with_pointer(pointer.0, pointer.1);
            let frame = match ch.to_ascii_uppercase() {
                'L' => InputSnapshot { left: true, ..base },
                'R' => InputSnapshot { right: true, ..base },
                'U' => InputSnapshot { up: true, ..base },
                'D' => InputSnapshot { down: true, ..base },
                '.' => base,
                'Q' => InputSnapshot { quit: true, ..base },
                c if c.is_whitespace() => continue,
                other => {
                    log::warn!("ignoring unknown script character {other:?}");
                    continue;
                }
            };
            frames.push_back(frame);
        }
        Self { frames }
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> GalaxyResult<InputSnapshot> {
        Ok(self.frames.pop_front().unwrap_or_else(InputSnapshot::quit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_maps_each_character_to_a_frame() {
        let mut input = ScriptedInput::parse("r d . x l u", (3.0, 6.0));
        assert_eq!(input.remaining(), 5, "space and 'x' are skipped");

        let first = input.poll().unwrap();
        assert!(first.right && !first.left && !first.quit);
        assert_eq!(first.pointer, (3.0, 6.0));
        assert!(input.poll().unwrap().down);
        assert_eq!(input.poll().unwrap(), InputSnapshot::idle().with_pointer(3.0, 6.0));
        assert!(input.poll().unwrap().left);
        assert!(input.poll().unwrap().up);
    }

    #[test]
    fn exhausted_script_requests_quit() {
        let mut input = ScriptedInput::new([InputSnapshot::idle()]);
        assert!(!input.poll().unwrap().quit);
        assert!(input.poll().unwrap().quit);
        assert!(input.poll().unwrap().quit);
    }
}
